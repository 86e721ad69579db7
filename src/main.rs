//! Property Cache - a read-through caching layer for property listings
//!
//! Serves the full property collection from a cache store, evicts it on
//! every write, and reports the store's hit/miss ratio.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use property_cache::api::create_router;
use property_cache::cache::MemoryCache;
use property_cache::records::MemoryRecordStore;
use property_cache::{spawn_expiry_task, AppState, Config};

/// Main entry point for the property cache service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the cache store and record store
/// 4. Start background expiry task
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "property_cache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting property cache service");

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_ttl={}s, page_cache_ttl={}s, port={}, expiry_interval={}s",
        config.cache_ttl, config.page_cache_ttl, config.server_port, config.expiry_interval
    );

    let cache = MemoryCache::new();
    let records = Arc::new(MemoryRecordStore::new());
    let state = AppState::new(Arc::new(cache.clone()), records, &config);
    info!("Cache store and record store initialized");

    let expiry_handle = spawn_expiry_task(cache, config.expiry_interval);
    info!("Background expiry task started");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(expiry_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the expiry task and allows graceful shutdown.
async fn shutdown_signal(expiry_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    expiry_handle.abort();
    warn!("Expiry task aborted");
}
