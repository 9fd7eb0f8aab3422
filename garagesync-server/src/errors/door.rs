use axum::http::StatusCode;
use garagesync_api::models::{DoorState, STATUS_COMMUNICATION_FAILURE, STATUS_INVALID_VALUE};

use super::ControllerError;

#[derive(Debug, thiserror::Error)]
pub enum DoorError {
    #[error("Communication failure: {0}")]
    Communication(#[from] ControllerError),

    #[error("Invalid target door state: {0:?}")]
    InvalidTarget(DoorState),
}

impl DoorError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DoorError::Communication(_) => StatusCode::SERVICE_UNAVAILABLE,
            DoorError::InvalidTarget(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn protocol_status(&self) -> i32 {
        match self {
            DoorError::Communication(_) => STATUS_COMMUNICATION_FAILURE,
            DoorError::InvalidTarget(_) => STATUS_INVALID_VALUE,
        }
    }
}
