//! Relational database plumbing shared by the domain crates and the API binary
//!
//! # Features
//!
//! - `config` - `SqlConfig: core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use database::sql::{self, SqlConfig};
//! use migration::Migrator;
//!
//! let db = sql::connect_from_config(SqlConfig::from_env()?).await?;
//! sql::run_migrations::<Migrator>(&db, "catalog_api").await?;
//! sql::check_health(&db).await?;
//! ```

pub mod common;
pub mod sql;

pub use common::{DatabaseError, DatabaseResult};
