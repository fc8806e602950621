//! Embedded schema migrations
//!
//! The SQL files under the workspace `migrations/` directory are compiled into
//! the binary and applied in order. Already applied migrations are skipped.

use sqlx::migrate::Migrator;
use tracing::info;

use crate::error::DatabaseError;
use crate::pool::DatabasePool;

/// Every migration of the service, in application order
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Applies pending migrations to the database
///
/// # Errors
///
/// Returns `DatabaseError::MigrationFailed` if a migration cannot be applied
/// or if an applied migration no longer matches its embedded source.
pub async fn run_migrations(pool: &DatabasePool) -> Result<(), DatabaseError> {
    info!(count = MIGRATOR.iter().count(), "Running database migrations");

    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;

    info!("Database migrations applied");
    Ok(())
}
