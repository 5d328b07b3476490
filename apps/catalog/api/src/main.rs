//! Catalog API - REST server

use axum_helpers::server::create_production_app;
use catalog_api::config::{Config, StorageBackend};
use catalog_api::state::{AppState, Storage};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::sql::{connect_from_config, run_migrations};
use migration::Migrator;
use std::time::Duration;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let storage = match config.storage {
        StorageBackend::Sql => {
            info!(
                sqlite = config.database.is_sqlite(),
                "Connecting to relational database"
            );
            let db = connect_from_config(config.database.clone()).await?;
            run_migrations::<Migrator>(&db, config.app.name).await?;
            Storage::Sql(db)
        }
        StorageBackend::Memory => {
            warn!("Using in-memory storage; data is lost on shutdown");
            Storage::Memory
        }
    };

    let state = AppState::new(config, storage);
    let app = catalog_api::app(&state);

    info!(
        "Starting {} v{} on port {}",
        state.config.app.name, state.config.app.version, state.config.server.port
    );

    let storage = state.storage.clone();
    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            if let Storage::Sql(db) = storage {
                info!("Shutting down: closing database pool");
                if let Err(e) = db.close().await {
                    warn!("Failed to close database pool: {}", e);
                }
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Catalog API shutdown complete");
    Ok(())
}
