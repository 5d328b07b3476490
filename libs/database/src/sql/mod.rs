//! Relational database connector (SQLite and PostgreSQL through SeaORM)
//!
//! Provides connection management, migration running and a health probe.

mod config;
mod connector;
mod health;

pub use config::{DEFAULT_DATABASE_URL, IN_MEMORY_SQLITE_URL, SqlConfig};
pub use connector::{connect, connect_from_config, connect_with_options, run_migrations};
pub use health::check_health;

// Re-export SeaORM types for convenience
pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
pub use sea_orm_migration::MigratorTrait;
