//! Configuration for Catalog API

use axum_helpers::JwtConfig;
use core_config::{AppInfo, FromEnv, app_info, env_parse_or, server::ServerConfig};
use database::sql::SqlConfig;
use strum::{Display, EnumString};

pub use core_config::Environment;

/// Where products and users are persisted
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StorageBackend {
    /// Relational store at `DATABASE_URL`
    #[default]
    Sql,
    /// Process-local maps, lost on exit
    Memory,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub database: SqlConfig,
    pub storage: StorageBackend,
    pub jwt: JwtConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let database = SqlConfig::from_env()?;
        let storage = env_parse_or("STORAGE_BACKEND", StorageBackend::default())?;
        let jwt = JwtConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            database,
            storage,
            jwt,
        })
    }
}
