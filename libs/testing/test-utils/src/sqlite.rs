//! SQLite test infrastructure
//!
//! Provides a `TestDatabase` backed by a private in-memory SQLite database with
//! the catalog schema applied. Nothing to start, nothing to clean up.

use database::sql::{SqlConfig, connect_from_config, run_migrations};
use migration::Migrator;
use sea_orm::DatabaseConnection;

/// Test database wrapper
///
/// Each instance is an independent database; tests never see each other's rows.
pub struct TestDatabase {
    pub connection: DatabaseConnection,
}

impl TestDatabase {
    /// Create a new test database with migrations applied
    ///
    /// # Example
    ///
    /// ```ignore
    /// use test_utils::TestDatabase;
    ///
    /// # async fn example() {
    /// let db = TestDatabase::new().await;
    /// let repo = MyRepository::new(db.connection());
    /// # }
    /// ```
    pub async fn new() -> Self {
        let connection = connect_from_config(SqlConfig::in_memory())
            .await
            .expect("Failed to open in-memory SQLite database");

        run_migrations::<Migrator>(&connection, "test-utils")
            .await
            .expect("Failed to apply migrations to test database");

        tracing::debug!("Test database ready (in-memory SQLite)");

        Self { connection }
    }

    /// Get a cloned connection (useful for passing to repositories)
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }
}
