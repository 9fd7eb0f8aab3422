use std::error::Error;
use std::io;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;

use crate::door::SimulatedDoor;
use crate::settings::Settings;

pub mod door;
pub mod settings;

pub fn create_app(door: Arc<SimulatedDoor>) -> Router {
    Router::new()
        .route("/status", get(status))
        .route("/toggle", post(toggle))
        .with_state(door)
}

async fn status(State(door): State<Arc<SimulatedDoor>>) -> &'static str {
    door.position().as_payload()
}

async fn toggle(State(door): State<Arc<SimulatedDoor>>) -> StatusCode {
    tracing::debug!("toggle received");
    door.toggle();

    StatusCode::OK
}

pub async fn serve(listener: TcpListener, door: Arc<SimulatedDoor>) -> io::Result<()> {
    axum::serve(listener, create_app(door)).await
}

pub async fn run(settings: &Arc<Settings>) -> Result<(), Box<dyn Error>> {
    let door = SimulatedDoor::new(
        settings.mock.initial_position,
        Duration::from_millis(settings.mock.travel_ms),
    );

    let ip_addr = settings.mock.host.parse::<IpAddr>()?;
    let address = SocketAddr::from((ip_addr, settings.mock.port));
    let listener = TcpListener::bind(&address).await?;

    tracing::info!("mock door listening on {:?}", address);

    serve(listener, door).await?;

    Ok(())
}
