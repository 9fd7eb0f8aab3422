use super::{AccessoryError, DoorError};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Accessory error: {0}")]
    AccessoryError(#[from] AccessoryError),

    #[error("Door error: {0}")]
    DoorError(#[from] DoorError),
}
