/// Database migration runner
///
/// Runs the SQL migrations in the workspace `migrations/` directory through
/// sqlx's embedded migrator. Each migration is a `{version}_{name}.sql`
/// file applied in order and recorded in `_sqlx_migrations`.

use sqlx::postgres::PgPool;
use tracing::{info, warn};

/// Runs all pending migrations.
///
/// # Errors
///
/// Returns an error if a migration file is malformed, a statement fails, or
/// the connection is lost mid-run.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    info!("Starting database migrations");

    let migrations = sqlx::migrate!("../migrations");

    match migrations.run(pool).await {
        Ok(()) => {
            info!("All database migrations completed");
            Ok(())
        }
        Err(e) => {
            warn!("Migration failed: {}", e);
            Err(e)
        }
    }
}
