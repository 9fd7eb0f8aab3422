use axum::extract::{Path, State};
use axum::response::Sse;
use axum::response::sse::{Event, KeepAlive};
use garagesync_api::models::CharacteristicEvent;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::{Stream, StreamExt};

use crate::errors::ApiError;

use super::AccessoryState;

/// Streams every characteristic write of one accessory. Lagging clients skip missed events.
#[utoipa::path(
    get,
    path = "/accessories/{accessory_id}/events",
    tag = "accessory",
    params(
        ("accessory_id" = String, Path, description = "Accessory ID")
    ),
    responses(
        (status = 200, description = "Server-sent stream of characteristic events", body = CharacteristicEvent, content_type = "text/event-stream"),
        (status = 404, description = "Accessory not found")
    )
)]
pub async fn sse_handler(
    State(state): State<AccessoryState>,
    Path(accessory_id): Path<String>,
) -> Result<Sse<impl Stream<Item = Result<Event, axum::Error>>>, ApiError> {
    let accessory = state.registry.get(&accessory_id)?;

    let stream = BroadcastStream::new(accessory.subscribe())
        .filter_map(|result| result.ok().map(|event| Event::default().json_data(event)));

    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}
