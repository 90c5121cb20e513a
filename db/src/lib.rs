pub mod models;
pub mod test_utils;

use sea_orm::{Database, DatabaseConnection, DbErr};
use util::config;

/// Opens the configured SQLite database (`DATABASE_PATH`).
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    let url = config::database_url();
    tracing::debug!(%url, "Connecting to database");
    Database::connect(&url).await
}
