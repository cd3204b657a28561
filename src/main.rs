//! Unit converter HTTP server binary.
//!
//! Builds the conversion table, loads the server settings and serves the
//! JSON API.
//!
//! # Environment Variables
//!
//! - `CONVERTER_CONFIG`: Path to the server settings file
//!   (default: `./config/server.yaml`; missing file falls back to defaults)
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use unit_converter::api::{AppState, create_router};
use unit_converter::config::ConfigLoader;
use unit_converter::conversion::ConversionTable;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting unit converter server");

    let config_path =
        env::var("CONVERTER_CONFIG").unwrap_or_else(|_| "./config/server.yaml".to_string());
    let loader = ConfigLoader::load_or_default(&config_path)?;
    let config = loader.config().clone();

    // The table is built once here and shared read-only for the lifetime
    // of the process.
    let state = AppState::new(ConversionTable::new());
    let app = create_router(state);

    let addr = config.bind_address();
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
