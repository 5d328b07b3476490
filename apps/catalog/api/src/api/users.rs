//! Users API routes

use axum::Router;
use domain_users::{InMemoryUserRepository, SqlUserRepository, UserService, handlers};

use crate::state::{AppState, Storage};

/// Create users router
pub fn router(state: &AppState) -> Router {
    let jwt = state.jwt.clone();

    match &state.storage {
        Storage::Sql(db) => {
            let repository = SqlUserRepository::new(db.clone());
            handlers::router(UserService::new(repository), jwt)
        }
        Storage::Memory => handlers::router(UserService::new(InMemoryUserRepository::new()), jwt),
    }
}
