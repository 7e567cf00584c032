//! Schema migrations
//!
//! SQL files under `migrations/` are applied in version order and recorded in
//! `_sqlx_migrations`, so running them again is a no-op.

use std::path::Path;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;
use tracing::info;

const MIGRATIONS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/migrations");

/// Migration failure
#[derive(Debug, thiserror::Error)]
#[error("migration failed: {0}")]
pub struct MigrationError(#[from] MigrateError);

/// Apply every pending migration
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrationError> {
    let migrator = Migrator::new(Path::new(MIGRATIONS_DIR)).await?;
    migrator.run(pool).await?;
    info!(count = migrator.iter().count(), "Database migrations applied");
    Ok(())
}
