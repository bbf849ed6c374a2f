#![cfg(not(tarpaulin_include))]

use calc_api::{app, config};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Main entry point for the calculator API server.
///
/// Loads configuration, initializes logging, and runs the HTTP server
/// until interrupted.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load()?;

    // RUST_LOG wins; the configured level is the fallback.
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(bind = %config.bind, log_level = %config.log_level, "config loaded");

    app::run(config).await?;

    Ok(())
}
