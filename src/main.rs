//! Item Browser Binary Entry Point
//!
//! Loads configuration, builds the item store and serves the web UI.
//! Core functionality is provided by the `itembrowser` library crate.

use clap::Parser;
use itembrowser::{
    ItemStore,
    config::{AppConfig, DEFAULT_CONFIG_PATH, parse_duration},
    server::{AppState, create_router},
};
use std::net::SocketAddr;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Item Browser - filter and group a catalog of items
#[derive(Parser, Debug)]
#[command(name = "itembrowser", version, about, long_about = None)]
struct Cli {
    /// Path to configuration file (defaults to configs/config.yaml if present)
    #[arg(short, long, env = "ITEMBROWSER_CONFIG")]
    config: Option<String>,

    /// Server bind address (overrides config file)
    #[arg(long, env = "ITEMBROWSER_SERVER_BIND")]
    server_bind: Option<String>,

    /// Server port (overrides config file)
    #[arg(long, env = "ITEMBROWSER_SERVER_PORT")]
    server_port: Option<u16>,

    /// Per-request timeout, e.g. "5s" (overrides config file)
    #[arg(long, env = "ITEMBROWSER_REQUEST_TIMEOUT", value_parser = parse_duration)]
    request_timeout: Option<Duration>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,itembrowser=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Item Browser");

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration; an explicit path must exist
    let mut config = match cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            AppConfig::load(&path)?
        }
        None => AppConfig::load_or_default(DEFAULT_CONFIG_PATH)?,
    };

    // Apply CLI/env overrides (CLI > ENV > config file)
    if let Some(bind) = cli.server_bind {
        config.server.bind = bind;
    }
    if let Some(port) = cli.server_port {
        config.server.port = port;
    }
    if let Some(timeout) = cli.request_timeout {
        config.server.request_timeout = timeout;
    }
    config.validate()?;

    // Invalid items abort startup
    let store = ItemStore::new(config.items())?;

    let app = create_router(AppState { store }, &config.server);

    // Parse bind address
    let addr: SocketAddr = format!("{}:{}", config.server.bind, config.server.port).parse()?;

    tracing::info!("Web server listening on: http://{}", addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Setup graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal");
        }
    }
}
