use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use garagesync_api::models::{CharacteristicKind, CharacteristicResponse, SetTargetStateRequest};

use crate::errors::{AccessoryError, ApiError};

use super::AccessoryState;

/// Both door state characteristics are served by a fresh read of the remote door.
#[utoipa::path(
    get,
    path = "/accessories/{accessory_id}/characteristics/{characteristic}",
    tag = "characteristic",
    params(
        ("accessory_id" = String, Path, description = "Accessory ID"),
        ("characteristic" = CharacteristicKind, Path, description = "Characteristic name")
    ),
    responses(
        (status = 200, description = "Door state read from the remote controller", body = CharacteristicResponse),
        (status = 404, description = "Accessory not found"),
        (status = 503, description = "Door controller communication failure")
    )
)]
pub async fn get_characteristic(
    State(state): State<AccessoryState>,
    Path((accessory_id, characteristic)): Path<(String, CharacteristicKind)>,
) -> Result<Json<CharacteristicResponse>, ApiError> {
    let accessory = state.registry.get(&accessory_id)?;

    let value = accessory.read_current_state().await?;

    Ok(Json(CharacteristicResponse::new(characteristic, value)))
}

#[utoipa::path(
    put,
    path = "/accessories/{accessory_id}/characteristics/{characteristic}",
    tag = "characteristic",
    params(
        ("accessory_id" = String, Path, description = "Accessory ID"),
        ("characteristic" = CharacteristicKind, Path, description = "Characteristic name")
    ),
    request_body = SetTargetStateRequest,
    responses(
        (status = 204, description = "Write acknowledged"),
        (status = 400, description = "Value is not open or closed"),
        (status = 404, description = "Accessory not found"),
        (status = 405, description = "Characteristic is read-only")
    )
)]
pub async fn set_characteristic(
    State(state): State<AccessoryState>,
    Path((accessory_id, characteristic)): Path<(String, CharacteristicKind)>,
    Json(body): Json<SetTargetStateRequest>,
) -> Result<StatusCode, ApiError> {
    let accessory = state.registry.get(&accessory_id)?;

    if !characteristic.is_writable() {
        return Err(AccessoryError::ReadOnlyCharacteristic(characteristic).into());
    }

    accessory.set_target_state(body.value, body.origin)?;

    Ok(StatusCode::NO_CONTENT)
}
