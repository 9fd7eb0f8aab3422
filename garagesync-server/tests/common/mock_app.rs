use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use garagesync_server::app::create_app;
use garagesync_server::configs::Timing;
use garagesync_server::mock::ScriptedController;
use garagesync_server::services::{AccessoryRegistry, DoorAccessory};
use serde_json::Value;
use tower::ServiceExt;

pub struct MockApp {
    pub router: Router,
    pub registry: Arc<AccessoryRegistry>,
    pub garage: Arc<ScriptedController>,
    pub barn: Arc<ScriptedController>,
}

impl MockApp {
    /// Two accessories: `garage-door` (closed) and `barn-door` (open).
    pub fn new() -> Self {
        let garage = Arc::new(ScriptedController::new("closed"));
        let barn = Arc::new(ScriptedController::new("open"));

        let mut registry = AccessoryRegistry::new();
        registry
            .register(DoorAccessory::new("garage-door", "Garage Door", garage.clone(), Timing::default()))
            .unwrap();
        registry
            .register(DoorAccessory::new("barn-door", "Barn Door", barn.clone(), Timing::default()))
            .unwrap();

        let registry = Arc::new(registry);

        Self {
            router: create_app(registry.clone()),
            registry,
            garage,
            barn,
        }
    }

    pub async fn get(&self, uri: &str) -> (u16, Value) {
        self.send(Request::builder().uri(uri).method(Method::GET).body(Body::empty()).unwrap())
            .await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (u16, Value) {
        self.send(
            Request::builder()
                .uri(uri)
                .method(Method::PUT)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    async fn send(&self, request: Request<Body>) -> (u16, Value) {
        let response: Response<Body> = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status().as_u16();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap_or(Value::Null)
        };

        (status, json)
    }
}
