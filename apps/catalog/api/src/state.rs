//! Application state management

use axum_helpers::JwtAuth;
use database::sql::DatabaseConnection;

use crate::config::Config;

/// Backing store chosen at startup
#[derive(Clone, Debug)]
pub enum Storage {
    Sql(DatabaseConnection),
    Memory,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub storage: Storage,
    pub jwt: JwtAuth,
}

impl AppState {
    pub fn new(config: Config, storage: Storage) -> Self {
        let jwt = JwtAuth::new(&config.jwt);
        Self {
            config,
            storage,
            jwt,
        }
    }
}
