/**
 * Database Setup
 *
 * Builds the bounded PostgreSQL pool and applies the schema at startup.
 *
 * # Startup Retries
 *
 * The first connection is attempted up to `connect_attempts` times, waiting
 * `connect_retry_delay` between attempts. This is the only retry logic in
 * the server; request handling never retries. If every attempt fails the
 * error is returned and startup aborts.
 */

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::shared::DatabaseSettings;

/// Connect to PostgreSQL with a fixed number of attempts
pub async fn connect_database(
    database_url: &str,
    settings: &DatabaseSettings,
) -> Result<PgPool, sqlx::Error> {
    let mut attempt = 1;

    loop {
        tracing::info!(
            attempt,
            max_attempts = settings.connect_attempts,
            "Connecting to database..."
        );

        let result = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(settings.acquire_timeout)
            .connect(database_url)
            .await;

        match result {
            Ok(pool) => {
                tracing::info!("Database connection pool created successfully");
                return Ok(pool);
            }
            Err(e) if attempt < settings.connect_attempts => {
                tracing::warn!(
                    attempt,
                    error = %e,
                    "Database connection failed, retrying in {:?}",
                    settings.connect_retry_delay
                );
                tokio::time::sleep(settings.connect_retry_delay).await;
                attempt += 1;
            }
            Err(e) => {
                tracing::error!(
                    attempts = attempt,
                    error = %e,
                    "Giving up on database connection"
                );
                return Err(e);
            }
        }
    }
}

/// Create the members table and its indexes if they do not exist
pub async fn apply_schema(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    tracing::info!("Applying database schema...");
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Database schema is up to date");
    Ok(())
}
