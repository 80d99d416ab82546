// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::flight_api_client::FlightApiClient;
use crate::presentation::app_state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("flight_watch=info,tower_http=info")),
        )
        .init();

    // Load configuration
    let config = load_dashboard_config()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(FlightApiClient::new(
        config.api.base_url.clone(),
        config.api_timeout(),
    )?);

    let addr: SocketAddr = config
        .server
        .bind
        .parse()
        .with_context(|| format!("Invalid server.bind address: {}", config.server.bind))?;

    // Mount the dashboard views (application layer)
    tracing::info!(
        "Upstream API at {}, polling every {:?}",
        config.api.base_url,
        config.poll_interval()
    );
    let state = Arc::new(AppState::new(config, repository));

    // Build router (presentation layer)
    let router = presentation::router(state);

    // Start server
    tracing::info!("Starting flight-watch dashboard on {}", addr);
    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
