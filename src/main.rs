//! Payroll server entry point.
//!
//! Reads the configuration from `PAYROLL_CONFIG` (or the default path) and
//! serves the API on the configured address. Log verbosity follows
//! `RUST_LOG`, defaulting to `info`.

use std::env;

use payroll_engine::api::{create_router, AppState};
use payroll_engine::config::{ConfigLoader, DEFAULT_CONFIG_PATH};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_path = env::var("PAYROLL_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    let loader = match ConfigLoader::load(&config_path) {
        Ok(loader) => loader,
        Err(err) => {
            error!(error = %err, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    let bind_address = loader.config().server.bind_address.clone();
    info!(
        config = %config_path,
        hourly_rate = %loader.config().format_money(loader.hourly_rate()),
        "Configuration loaded"
    );

    let state = match AppState::new(loader) {
        Ok(state) => state,
        Err(err) => {
            error!(error = %err, "Failed to initialise application state");
            std::process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(&bind_address).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(error = %err, address = %bind_address, "Failed to bind");
            std::process::exit(1);
        }
    };

    info!(address = %bind_address, "Payroll server listening");
    if let Err(err) = axum::serve(listener, create_router(state)).await {
        error!(error = %err, "Server error");
        std::process::exit(1);
    }
}
