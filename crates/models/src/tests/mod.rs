/// CRUD operations tests for the song entity
pub mod crud_tests;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use migration::MigratorTrait;

/// Fresh in-memory SQLite database with migrations applied.
/// One connection only so the in-memory database survives pool checkouts.
pub async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new("sqlite::memory:".to_owned());
    opts.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opts).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
