//! Serve mode — opens the store, seeds it if empty, serves the REST API.

use tracing::info;
use weekplan_core::DaemonConfig;
use weekplan_state::StateStore;

use crate::seed;

/// Run the API server until Ctrl-C.
pub async fn run_serve(config: DaemonConfig) -> anyhow::Result<()> {
    info!("weekplan daemon starting");

    // Ensure data directory exists.
    std::fs::create_dir_all(&config.storage.data_dir)?;
    let db_path = config.storage.db_path();

    // ── Project store ──────────────────────────────────────────
    let store = StateStore::open(&db_path)?;
    info!(path = ?db_path, "state store opened");

    if config.seed.enabled {
        let seeded = seed::seed_if_empty(&store)?;
        if seeded > 0 {
            info!(projects = seeded, "sample pipeline seeded");
        }
    }

    // ── API server ─────────────────────────────────────────────
    let router = weekplan_api::build_router(store);
    let addr = config.server.socket_addr();

    info!(%addr, "API server starting");

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Graceful shutdown on Ctrl-C.
    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("failed to install CTRL+C handler");
            info!("shutdown signal received");
        })
        .await?;

    info!("weekplan daemon stopped");
    Ok(())
}
