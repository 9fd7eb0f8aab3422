use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use garagesync_api::models::{
    AccessoryInformation, AccessoryResponse, CharacteristicEvent, CharacteristicKind,
    CharacteristicResponse, DoorState, GarageDoorResponse, Origin, SetTargetStateRequest,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::handles::*;
use crate::services::AccessoryRegistry;

#[derive(OpenApi)]
#[openapi(
    paths(get_accessories, get_accessory, get_characteristic, set_characteristic, sse_handler),
    components(schemas(
        AccessoryInformation,
        AccessoryResponse,
        CharacteristicEvent,
        CharacteristicKind,
        CharacteristicResponse,
        DoorState,
        GarageDoorResponse,
        Origin,
        SetTargetStateRequest
    )),
    tags(
        (name = "accessory", description = "Registered garage door accessories"),
        (name = "characteristic", description = "Door state characteristics")
    )
)]
pub struct ApiDoc;

pub fn create_app(registry: Arc<AccessoryRegistry>) -> Router {
    let accessories = Router::new()
        .route("/", get(get_accessories))
        .route("/:accessory_id", get(get_accessory))
        .route(
            "/:accessory_id/characteristics/:characteristic",
            get(get_characteristic).put(set_characteristic),
        )
        .route("/:accessory_id/events", get(sse_handler))
        .with_state(AccessoryState { registry });

    Router::new()
        .nest("/accessories", accessories)
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
