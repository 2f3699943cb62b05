//! parish-server: JSON API behind the website's calendar pages.
//!
//! # Environment Variables
//!
//! - `PARISH_*`: overrides for any config key (see `ParishConfig`)
//! - `RUST_LOG`: log filter (default: info)

mod routes;
mod state;

use anyhow::Result;
use parish_core::config::ParishConfig;
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    let config = ParishConfig::load()?;
    let state = AppState::from_config(&config)?;
    let app = routes::router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.server_port));
    tracing::info!("parish-server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
