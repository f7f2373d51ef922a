//! Signal Consensus API Server
//!
//! Stateless HTTP service exposing the indicator aggregator. Can be
//! horizontally scaled.

use dotenvy::dotenv;
use signal_consensus::config::{get_environment, Config};
use signal_consensus::core::http::start_server;
use signal_consensus::logging;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = Config::from_env()?;
    let port = config.server.port;

    info!("Starting Signal Consensus API Server");
    info!(environment = %get_environment(), "Environment");
    info!(port = port, "HTTP Server: http://0.0.0.0:{}", port);
    info!(
        timeout_ms = config.aggregation.timeout_ms,
        concurrent = config.aggregation.concurrent,
        "Aggregation settings"
    );

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(&config).await {
            error!(error = %e, "HTTP server error");
        }
    });

    info!("API server started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
