use axum::http::StatusCode;
use garagesync_api::models::{
    CharacteristicKind, STATUS_INVALID_VALUE, STATUS_READ_ONLY_CHARACTERISTIC,
    STATUS_RESOURCE_DOES_NOT_EXIST,
};

use super::ControllerError;

#[derive(Debug, thiserror::Error)]
pub enum AccessoryError {
    #[error("Accessory not found")]
    AccessoryNotFound,

    #[error("Accessory id already registered: {0}")]
    DuplicateId(String),

    #[error("Invalid accessory configuration: {0}")]
    InvalidConfig(String),

    #[error("Characteristic is read-only: {0:?}")]
    ReadOnlyCharacteristic(CharacteristicKind),

    #[error("Failed to create door controller: {0}")]
    Controller(#[from] ControllerError),
}

impl AccessoryError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AccessoryError::AccessoryNotFound => StatusCode::NOT_FOUND,
            AccessoryError::DuplicateId(_) => StatusCode::CONFLICT,
            AccessoryError::InvalidConfig(_) => StatusCode::BAD_REQUEST,
            AccessoryError::ReadOnlyCharacteristic(_) => StatusCode::METHOD_NOT_ALLOWED,
            AccessoryError::Controller(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn protocol_status(&self) -> i32 {
        match self {
            AccessoryError::AccessoryNotFound => STATUS_RESOURCE_DOES_NOT_EXIST,
            AccessoryError::ReadOnlyCharacteristic(_) => STATUS_READ_ONLY_CHARACTERISTIC,
            _ => STATUS_INVALID_VALUE,
        }
    }
}
