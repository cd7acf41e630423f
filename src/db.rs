use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};

/// Creates the connection pool shared by the whole application.
///
/// Called once at startup; every request borrows a connection from the pool
/// and returns it when the statement completes.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}

/// Applies the embedded migrations.
///
/// sqlx takes a PostgreSQL advisory lock, so concurrent processes can call
/// this safely.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
