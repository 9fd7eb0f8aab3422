use std::error::Error;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::app::create_app;
use crate::configs::Settings;
use crate::services::AccessoryRegistry;

pub mod app;
pub mod configs;
pub mod errors;
pub mod handles;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod services;

pub async fn run(settings: &Arc<Settings>) -> Result<(), Box<dyn Error>> {
    let registry = Arc::new(AccessoryRegistry::from_settings(settings)?);

    if registry.is_empty() {
        tracing::warn!("no accessories configured");
    }

    let app = create_app(registry);

    let ip_addr = settings.server.host.parse::<IpAddr>()?;

    let address = SocketAddr::from((ip_addr, settings.server.port));

    let listener = TcpListener::bind(&address).await?;

    tracing::info!("listening on {:?}", address);

    axum::serve(listener, app).await?;

    Ok(())
}
