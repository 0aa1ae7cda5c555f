//! Exercise Tracker Server binary.

use std::net::SocketAddr;

use exercise_store::{ExerciseStore, MemoryExerciseStore, SqliteExerciseStore};
use tracker_server::{
    config::{Config, StoreBackend},
    create_app, create_state, init_tracing,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    init_tracing(&config.log_level);

    tracing::info!("Starting exercise tracker server");

    match config.store_backend() {
        StoreBackend::Memory => {
            tracing::info!("Using in-memory store");
            serve(config, MemoryExerciseStore::new()).await
        }
        StoreBackend::Sqlite(url) => {
            tracing::info!(database_url = %url, "Using SQLite store");
            let store = SqliteExerciseStore::connect(&url).await?;
            serve(config, store).await
        }
    }
}

async fn serve<S: ExerciseStore + 'static>(config: Config, store: S) -> anyhow::Result<()> {
    let addr: SocketAddr = config.server_addr().parse()?;

    let app = create_app(create_state(config, store));

    tracing::info!(addr = %addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
