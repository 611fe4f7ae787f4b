//! Tasklist HTTP server.
//!
//! Wires the configured store backend into the shared router and serves
//! it with graceful shutdown. The backend is chosen once here and injected
//! as a trait object, so the routing code is identical for both.

mod config;

use config::{Config, StoreBackend};
use std::sync::Arc;
use tasklist_core::{MemoryStore, TodoService, TodoStore};
use tasklist_postgres::PostgresStore;
use tasklist_web::{build_router, AppState};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tasklist=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Tasklist HTTP server");

    let config = Config::from_env();

    // Select the store backend once at startup; everything downstream sees
    // only the TodoStore contract.
    let (store, backend_label): (Arc<dyn TodoStore>, &str) = match config.backend {
        StoreBackend::Memory => (Arc::new(MemoryStore::new()), "in-memory"),
        StoreBackend::Postgres => {
            info!(url = %config.database.url, "Connecting to database...");
            let store =
                PostgresStore::connect(&config.database.url, config.database.max_connections)
                    .await?;
            store.ensure_schema().await?;
            (Arc::new(store), "postgres")
        }
    };

    let service = TodoService::new(store);
    let app = build_router(AppState::new(service, backend_label));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, backend = backend_label, "Tasklist server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Graceful shutdown signal handler.
///
/// Waits for Ctrl+C (SIGINT) or, on Unix, SIGTERM.
#[allow(clippy::expect_used)] // Failing to install signal handlers is unrecoverable
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
        () = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully...");
        },
        () = terminate => {
            info!("Received SIGTERM, shutting down gracefully...");
        },
    }
}
