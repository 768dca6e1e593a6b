use sqlx::{postgres::PgPoolOptions, Executor, PgPool};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::config::AppConfig;

/// Errors from DatabaseManager
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Invalid database URL")]
    InvalidDatabaseUrl,

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// DDL for companies, jobs, users and applications.
const SCHEMA_SQL: &str = include_str!("../../sql/jobly-schema.sql");

/// Builds the connection pool the services share.
pub struct DatabaseManager;

impl DatabaseManager {
    /// Connect a pool for the configured environment
    pub async fn connect(config: &AppConfig) -> Result<PgPool, DatabaseError> {
        let connection_string = match config.database_name() {
            Some(name) => Self::build_connection_string(&config.database.url, name)?,
            None => config.database.url.clone(),
        };

        let pool = PgPoolOptions::new()
            .max_connections(config.database.max_connections)
            .acquire_timeout(Duration::from_secs(config.database.connection_timeout))
            .connect(&connection_string)
            .await?;

        info!("Created database pool (max {} connections)", config.database.max_connections);
        Ok(pool)
    }

    /// Swap the database name in the URL path, keeping credentials and query.
    pub fn build_connection_string(base: &str, database_name: &str) -> Result<String, DatabaseError> {
        let mut url = url::Url::parse(base).map_err(|_| DatabaseError::InvalidDatabaseUrl)?;
        // Replace the path to the database name (ensure leading slash)
        url.set_path(&format!("/{}", database_name));
        Ok(String::from(url))
    }

    /// Pings the pool to ensure connectivity
    pub async fn health_check(pool: &PgPool) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(pool).await?;
        Ok(())
    }

    /// Create the job board tables if they do not exist yet
    pub async fn bootstrap_schema(pool: &PgPool) -> Result<(), DatabaseError> {
        // Plain &str runs over the simple protocol, which accepts multiple statements
        pool.execute(SCHEMA_SQL).await?;
        info!("Database schema is in place");
        Ok(())
    }
}
