//! Wiruda API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p wiruda-api
//! ```
//!
//! Configuration is loaded from environment variables and an optional `.env` file.

use tracing::{error, info};
use wiruda_common::{try_init_tracing, AppConfig};

#[tokio::main]
async fn main() {
    // Initialize tracing
    if let Err(e) = try_init_tracing() {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting Wiruda API server...");

    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        env = ?config.app.env,
        port = config.api.port,
        "Configuration loaded"
    );

    wiruda_api::run(config).await?;

    Ok(())
}
