use log::info;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr, SqlErr};

/// Creates a database connection
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url);
    options.sqlx_logging_level(log::LevelFilter::Debug);

    let db = Database::connect(options).await?;
    info!("Connected to database");

    Ok(db)
}

/// Whether `err` was raised by a unique constraint, i.e. another writer got there first
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
