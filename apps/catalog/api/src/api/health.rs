//! Readiness endpoint; liveness comes from `axum_helpers::health_router`

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use serde_json::Value;

use crate::state::{AppState, Storage};

async fn ready(State(storage): State<Storage>) -> (StatusCode, Json<Value>) {
    match &storage {
        Storage::Sql(db) => {
            let database: HealthCheckFuture<'_> = Box::pin(async {
                database::sql::check_health(db)
                    .await
                    .map_err(|e| e.to_string())
            });
            run_health_checks(vec![("database", database)]).await
        }
        Storage::Memory => run_health_checks(Vec::new()).await,
    }
}

pub fn router(state: &AppState) -> Router {
    Router::new()
        .route("/ready", get(ready))
        .with_state(state.storage.clone())
}
