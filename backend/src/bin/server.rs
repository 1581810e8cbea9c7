//! Kepler Explorer HTTP Server Binary
//!
//! Main entry point for the catalog REST API. Loads configuration, builds the
//! configured repository, and serves the router.
//!
//! # Usage
//!
//! ```bash
//! # Serve data/kepler_data.csv on port 8080
//! cargo run --bin kepler-server
//!
//! # Different file, cached in memory until POST /v1/catalog/refresh
//! KEPLER_DATA_PATH=/srv/koi_cumulative.csv KEPLER_CACHE=on \
//!   cargo run --bin kepler-server
//! ```
//!
//! # Environment Variables
//!
//! - `KEPLER_CONFIG`: Path to a TOML config file (default: search for kepler.toml)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `KEPLER_REPOSITORY`: `csv` or `local` (default: csv)
//! - `KEPLER_DATA_PATH`: Planet CSV file (default: data/kepler_data.csv)
//! - `KEPLER_CACHE`: Keep the catalog in memory (default: off)
//! - `RUST_LOG`: Log filter (default: info)

use std::net::SocketAddr;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kepler_explorer::config::AppConfig;
use kepler_explorer::db::RepositoryFactory;
use kepler_explorer::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Kepler Explorer HTTP Server");

    let config = AppConfig::load().context("Failed to load configuration")?;
    let repository =
        RepositoryFactory::from_config(&config).context("Failed to create planet repository")?;
    info!(
        source = %repository.source_description(),
        cache = config.cache.enabled,
        "Repository initialized"
    );

    let state = AppState::new(repository).with_explorer_settings(config.explorer.clone());
    let app = create_router(state);

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.bind_address()))?;

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
