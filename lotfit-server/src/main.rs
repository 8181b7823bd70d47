mod service;

use anyhow::{Context, Result};
use log::{info, warn};
use lotfit::io::read_catalog;
use service::ServerConfig;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting lotfit-server");

    let config = ServerConfig::from_env()?;
    info!("Configuration:");
    info!("  catalog: {}", config.catalog_path.display());
    info!("  bind address: {}", config.bind_addr);

    // the catalog is read once, a server without one has nothing to offer
    let catalog = Arc::new(read_catalog(&config.catalog_path)?);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;
    info!("Server running on {}", listener.local_addr()?);

    let result = axum::serve(listener, service::router(catalog))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server exited with an error");

    if let Err(e) = &result {
        warn!("{e:#}");
    }
    result
}

async fn shutdown_signal() {
    let mut sigterm = match signal::unix::signal(signal::unix::SignalKind::terminate()) {
        Ok(sigterm) => sigterm,
        Err(e) => {
            warn!("Failed to register SIGTERM handler: {e}");
            let _ = signal::ctrl_c().await;
            return;
        }
    };

    tokio::select! {
        _ = sigterm.recv() => info!("Received SIGTERM, initiating graceful shutdown..."),
        _ = signal::ctrl_c() => info!("Received SIGINT, initiating graceful shutdown..."),
    }
}
