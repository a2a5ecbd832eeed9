//! OGPO Rating Core - API Server Binary
//!
//! This binary starts the HTTP API server for the OGPO premium calculator.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin ogpo-api
//!
//! # Run with environment variables
//! API_HOST=0.0.0.0 API_PORT=8080 cargo run --bin ogpo-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `API_RATE_TABLE_PATH` - Optional JSON rating-table document overriding
//!   the built-in tariff; must pass table validation or the server refuses
//!   to start

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use domain_rating::{CoefficientTables, PremiumCalculator};
use interface_api::{config::ApiConfig, create_router};

/// Main entry point for the API server.
///
/// Initializes logging, loads configuration, validates the rating tables,
/// and starts the HTTP server.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded from environment
/// - The rating-table document cannot be read, parsed, or validated
/// - Server fails to bind to the configured address
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    // Load configuration from environment
    let config = load_config();

    // Initialize tracing/logging
    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        "Starting OGPO Rating API Server"
    );

    // Load and validate the rating tables; an invalid table set is a
    // deployment error and must fail the start, not the first quote.
    let calculator = Arc::new(load_calculator(&config)?);

    // Create the API router
    let app = create_router(calculator, config.clone());

    // Parse server address
    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .context("Invalid server address")?;

    tracing::info!(%addr, "Server listening");

    // Create TCP listener and serve
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Loads API configuration from environment variables.
///
/// Falls back to individual env vars or defaults if the prefixed source
/// cannot be assembled.
fn load_config() -> ApiConfig {
    ApiConfig::from_env().unwrap_or_else(|_| ApiConfig {
        host: std::env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
        port: std::env::var("API_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080),
        log_level: std::env::var("API_LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string()),
        rate_table_path: std::env::var("API_RATE_TABLE_PATH").ok().map(Into::into),
    })
}

/// Initializes the tracing subscriber for structured logging.
///
/// # Arguments
///
/// * `log_level` - The minimum log level to output (trace, debug, info, warn, error)
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Builds the premium calculator from the configured table source.
///
/// Uses the built-in Kazakhstan tariff unless `rate_table_path` points at a
/// JSON rating-table document.
///
/// # Errors
///
/// Returns error if the document cannot be read or parsed, or if the tables
/// fail the completeness/positivity validation.
fn load_calculator(config: &ApiConfig) -> anyhow::Result<PremiumCalculator> {
    let tables = match &config.rate_table_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading rating tables from document");
            let document = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read rating tables from {}", path.display()))?;
            CoefficientTables::from_json(&document)?
        }
        None => {
            tracing::info!("Using built-in Kazakhstan tariff");
            CoefficientTables::kazakhstan_2024()
        }
    };

    PremiumCalculator::new(tables).context("Rating tables failed validation")
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// This enables graceful shutdown of the server, allowing in-flight
/// requests to complete before the process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
