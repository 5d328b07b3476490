use sea_orm::DatabaseConnection;
use tracing::debug;

use crate::common::{DatabaseError, DatabaseResult};

/// Check that the database answers.
///
/// Used by the readiness probe.
pub async fn check_health(db: &DatabaseConnection) -> DatabaseResult<()> {
    debug!("Running database health check");

    db.ping()
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(e.to_string()))?;

    debug!("Database health check passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::{SqlConfig, connect_from_config};

    #[tokio::test]
    async fn test_check_health_on_live_connection() {
        let db = connect_from_config(SqlConfig::in_memory()).await.unwrap();
        assert!(check_health(&db).await.is_ok());
    }
}
