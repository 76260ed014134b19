// src/bin/api_server.rs

use anyhow::Context;
use donation_tracker::infra::logging::init_tracing;
use donation_tracker::transport::http::{build_app, AppState};
use donation_tracker::{Config, DonationService, MemoryStore, PgStore, RecordStore, StorageBackend};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(port = config.port, bcrypt_cost = config.bcrypt_cost, "configuration loaded");

    // --- Store Initialization ---
    // A store that cannot be reached at startup is fatal; the server never runs degraded.
    let mut pg_store: Option<PgStore> = None;
    let store: Arc<dyn RecordStore> = match &config.storage {
        StorageBackend::Postgres {
            url,
            max_connections,
        } => {
            tracing::info!("connecting to database...");
            let pg = PgStore::connect(url, *max_connections)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("connection to database established");
            pg_store = Some(pg.clone());
            Arc::new(pg)
        }
        StorageBackend::Memory => {
            tracing::warn!("using in-memory store; records are lost on exit");
            Arc::new(MemoryStore::new())
        }
    };

    let app_state = AppState::new(DonationService::new(store, config.bcrypt_cost));

    // --- API Server Initialization ---
    let app = build_app(app_state);
    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;
    tracing::info!("server is running on http://{addr}");
    tracing::info!("Swagger UI available at http://localhost:{}/swagger-ui", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    if let Some(pg) = pg_store {
        pg.close().await;
    }
    tracing::info!("graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl+C");
        return;
    }
    tracing::info!("shutdown signal received");
}
