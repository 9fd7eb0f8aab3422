use async_trait::async_trait;
use garagesync_api::models::DoorPosition;

use crate::configs::Controller;
use crate::errors::ControllerError;

/// Remote side of a garage door: a binary status source and a stateless toggle.
#[async_trait]
pub trait DoorController: Send + Sync {
    /// Current physical position of the door.
    async fn status(&self) -> Result<DoorPosition, ControllerError>;

    /// Flip the door. Completion is never acknowledged.
    async fn toggle(&self) -> Result<(), ControllerError>;
}

/// Maps a status body to a position, logging bodies outside the expected pair.
pub fn position_from_payload(payload: &str) -> DoorPosition {
    if !DoorPosition::is_recognized(payload) {
        tracing::warn!(payload = %payload, "Unexpected door status payload, treating as closed");
    }

    DoorPosition::from_payload(payload)
}

pub struct HttpDoorController {
    client: reqwest::Client,
    status_url: String,
    toggle_url: String,
}

impl HttpDoorController {
    pub fn new(base_url: &str, settings: &Controller) -> Result<Self, ControllerError> {
        let client = reqwest::Client::builder()
            .timeout(settings.request_timeout())
            .connect_timeout(settings.connect_timeout())
            .build()?;

        let base_url = base_url.trim_end_matches('/');

        Ok(Self {
            client,
            status_url: format!("{base_url}/status"),
            toggle_url: format!("{base_url}/toggle"),
        })
    }

    pub fn status_url(&self) -> &str {
        &self.status_url
    }

    pub fn toggle_url(&self) -> &str {
        &self.toggle_url
    }
}

#[async_trait]
impl DoorController for HttpDoorController {
    async fn status(&self) -> Result<DoorPosition, ControllerError> {
        let response = self.client.get(&self.status_url).send().await?;

        if !response.status().is_success() {
            return Err(ControllerError::Status(response.status()));
        }

        let payload = response.text().await?;

        Ok(position_from_payload(&payload))
    }

    async fn toggle(&self) -> Result<(), ControllerError> {
        let response = self.client.post(&self.toggle_url).send().await?;

        if !response.status().is_success() {
            return Err(ControllerError::Status(response.status()));
        }

        Ok(())
    }
}
