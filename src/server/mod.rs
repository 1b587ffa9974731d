//! HTTP API server.
//!
//! Thin axum glue over [`ItemService`](crate::service::ItemService):
//! handlers parse the request, call the service, and map
//! [`catalog_core::Error`] to a JSON error body.

pub mod context;
pub mod error;
pub mod router;
pub mod routes;

use std::net::SocketAddr;

use anyhow::{Context, Result};
use catalog_core::config::Config;
use catalog_db::pool::init_pool;
use catalog_db::ItemRepository;
use tokio::signal;

use crate::service::ItemService;

pub use context::AppContext;
pub use router::build_router;

/// Open the item repository described by the config, creating the
/// database directory if needed.
pub fn open_repository(config: &Config) -> Result<ItemRepository> {
    let db_path = &config.server.db_path;
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create database directory {}", parent.display())
            })?;
            tracing::info!("Created database directory {}", parent.display());
        }
    }

    let db_str = db_path.to_string_lossy();
    let pool = init_pool(&db_str, config.database.pool_size)
        .with_context(|| format!("Failed to open database at {db_str}"))?;
    tracing::info!("Database opened at {db_str}");
    Ok(ItemRepository::new(pool))
}

/// Start the HTTP server and run until a shutdown signal arrives.
pub async fn start(config: Config) -> Result<()> {
    for warning in config.validate() {
        tracing::warn!("Config warning: {warning}");
    }

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;

    let repo = open_repository(&config)?;
    let service = ItemService::from_config(&config, repo);
    if !service.store().default_path().is_file() {
        tracing::warn!(
            "Default image {} is missing; unknown images will return 404",
            service.store().default_path().display()
        );
    }

    tracing::info!("CORS origins: {:?}", config.server.cors_origins);
    let app = build_router(AppContext::new(config, service));

    tracing::info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
