//! Znajda REST API Server
//!
//! This binary starts the Znajda REST API server, exposing the citizen
//! search and report endpoints and the official dataset upload,
//! publishing, and download endpoints.

use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

use znajda_client::{DaneGovClient, StubVisionClient};
use znajda_core::Catalog;

use znajda_server::{AppState, ServerConfig, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Parse command line arguments
    let config = ServerConfig::parse();

    // Load the dataset catalog from disk
    info!(dir = %config.dataset_dir.display(), "Loading dataset catalog...");
    let mut catalog = Catalog::new(&config.dataset_dir);
    let report = catalog
        .reload()
        .context("Failed to load the dataset directory")?;
    info!(
        datasets = report.datasets_loaded,
        items = report.items_indexed,
        rejected = report.rows_rejected,
        "Catalog ready"
    );
    for failure in &report.failures {
        warn!(file = %failure.file, error = %failure.error, "Dataset file skipped");
    }

    // Create application state
    let app_state = AppState::new(catalog, StubVisionClient::new(), DaneGovClient::new());

    // Build router
    let app = create_router(app_state, &config);

    // Bind to address
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("Invalid address")?;

    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Starting Znajda API server on http://{}", addr);
    info!("Swagger UI available at http://{}/swagger-ui", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
