use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use fgc_server::config::ServerConfig;
use fgc_server::controller::FgcController;
use fgc_server::store::{MemoryStore, load_stations};
use fgc_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    // Seed stations (fail fast if the file is unreadable)
    let store = match &config.stations_file {
        Some(path) => {
            let stations = load_stations(path)?;
            info!(count = stations.len(), path = %path.display(), "loaded stations");
            MemoryStore::with_stations(stations)
        }
        None => MemoryStore::new(),
    };

    let controller = FgcController::with_policy(Arc::new(store), config.missing_station);
    let app = create_router(AppState::new(controller));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, policy = ?config.missing_station, "FGC stations listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
