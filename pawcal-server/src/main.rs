mod routes;
mod singleton;
mod state;

use anyhow::Result;
use pawcal_core::config::PawcalConfig;
use std::net::SocketAddr;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = PawcalConfig::load()?;

    let lock = singleton::acquire_lock(&config.data_path())?;
    debug!(lock = %lock.path().display(), "Acquired store lock");

    let state = AppState::load(&config)?;
    let app = routes::app(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.server_port));
    info!("pawcal-server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
