//! Connection-level helpers for the SQLite backend.
use log::info;
use sqlx::{migrate::MigrateDatabase, sqlite::SqlitePoolOptions, Sqlite, SqlitePool};

use crate::traits::OrderStoreError;

/// Opens a connection pool against `url`, creating the database file first if it does not exist
/// yet.
pub async fn new_pool(url: &str, max_connections: u32) -> Result<SqlitePool, OrderStoreError> {
    if !Sqlite::database_exists(url).await.unwrap_or(false) {
        Sqlite::create_database(url).await.map_err(|e| OrderStoreError::ConnectionError(e.to_string()))?;
        info!("🗃️ Created new sqlite database at {url}");
    }
    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await
        .map_err(|e| OrderStoreError::ConnectionError(e.to_string()))
}

/// Applies the embedded migrations. Safe to call on every startup.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), OrderStoreError> {
    sqlx::migrate!("./migrations").run(pool).await.map_err(|e| OrderStoreError::MigrationError(e.to_string()))?;
    info!("🗃️ Order store migrations complete");
    Ok(())
}
