pub mod accessory;
pub mod api;
pub mod controller;
pub mod door;

pub use accessory::AccessoryError;
pub use api::ApiError;
pub use controller::ControllerError;
pub use door::DoorError;

use axum::Json;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use uuid::Uuid;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, protocol_status, error_message, error_id) = match self {
            ApiError::AccessoryError(e @ AccessoryError::Controller(_)) => {
                let error_id = Uuid::new_v4();
                tracing::error!(error_id = ?error_id, "Internal error: {}", e);
                (
                    e.status_code(),
                    e.protocol_status(),
                    "Internal server error".to_string(),
                    Some(error_id.to_string()),
                )
            }
            ApiError::AccessoryError(e) => (e.status_code(), e.protocol_status(), e.to_string(), None),
            ApiError::DoorError(e) => {
                if let DoorError::Communication(source) = &e {
                    tracing::warn!("Door controller unreachable: {}", source);
                }
                (e.status_code(), e.protocol_status(), e.to_string(), None)
            }
        };

        let mut error_obj = json!({
            "code": status.as_u16(),
            "message": error_message
        });

        // Only internal failures carry an id to look up in the logs
        if let Some(error_id) = error_id {
            error_obj["error_id"] = json!(error_id);
        }

        let body = Json(json!({
            "status": protocol_status,
            "error": error_obj
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body;
    use axum::http::StatusCode;
    use serde_json::Value;

    use super::*;

    async fn render(error: ApiError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_internal_failure_carries_error_id() {
        let (status, body) = render(AccessoryError::Controller(ControllerError::Unavailable).into()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["message"], json!("Internal server error"));

        let error_id = body["error"]["error_id"].as_str().unwrap();
        assert!(Uuid::parse_str(error_id).is_ok());
    }

    #[tokio::test]
    async fn test_client_errors_have_no_error_id() {
        let (status, body) = render(AccessoryError::AccessoryNotFound.into()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], json!(-70409));
        assert_eq!(body["error"]["message"], json!("Accessory not found"));
        assert!(body["error"].get("error_id").is_none());
    }
}
