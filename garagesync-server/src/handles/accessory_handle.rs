use axum::Json;
use axum::extract::{Path, State};
use garagesync_api::models::AccessoryResponse;

use crate::errors::ApiError;

use super::AccessoryState;

#[utoipa::path(
    get,
    path = "/accessories",
    tag = "accessory",
    responses(
        (status = 200, description = "List of registered accessories", body = Vec<AccessoryResponse>)
    )
)]
pub async fn get_accessories(State(state): State<AccessoryState>) -> Json<Vec<AccessoryResponse>> {
    Json(state.registry.iter().map(|accessory| accessory.to_response()).collect())
}

#[utoipa::path(
    get,
    path = "/accessories/{accessory_id}",
    tag = "accessory",
    params(
        ("accessory_id" = String, Path, description = "Accessory ID")
    ),
    responses(
        (status = 200, description = "Accessory with cached door state", body = AccessoryResponse),
        (status = 404, description = "Accessory not found")
    )
)]
pub async fn get_accessory(
    State(state): State<AccessoryState>,
    Path(accessory_id): Path<String>,
) -> Result<Json<AccessoryResponse>, ApiError> {
    let accessory = state.registry.get(&accessory_id)?;

    Ok(Json(accessory.to_response()))
}
