use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    #[error("Request to door controller failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Door controller responded with {0}")]
    Status(StatusCode),

    #[error("Door controller unavailable")]
    Unavailable,
}
