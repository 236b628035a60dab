use once_cell::sync::OnceCell;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::config::{self, DatabaseUrlError};
use crate::filter::FilterError;

/// Errors from the store and from the rules applied while querying it
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Invalid database URL: {0}")]
    InvalidDatabaseUrl(#[from] DatabaseUrlError),

    /// Requested row does not exist
    #[error("{0}")]
    NotExists(String),

    /// Requested row exists but is soft deleted
    #[error("{0}")]
    IsDeleted(String),

    #[error("{0}")]
    NotValidParam(String),

    #[error("{0}")]
    OutOfRange(String),

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Owner of the single connection pool of the relational store
pub struct DatabaseManager {
    pool: OnceCell<PgPool>,
}

impl DatabaseManager {
    fn instance() -> &'static DatabaseManager {
        static INSTANCE: OnceCell<DatabaseManager> = OnceCell::new();
        INSTANCE.get_or_init(|| DatabaseManager { pool: OnceCell::new() })
    }

    /// Shared pool. Connections are opened lazily so the server can start
    /// while the database is unreachable.
    pub fn pool() -> Result<PgPool, DatabaseError> {
        Self::instance()
            .pool
            .get_or_try_init(Self::build_pool)
            .map(Clone::clone)
    }

    fn build_pool() -> Result<PgPool, DatabaseError> {
        let settings = config::config();
        let url = Self::connection_string()?;
        let pool = PgPoolOptions::new()
            .max_connections(settings.database.max_connections)
            .acquire_timeout(Duration::from_secs(settings.database.connection_timeout))
            .connect_lazy(&url)?;
        info!(
            "Created database pool for: {}:{}/{}",
            settings.database.host, settings.database.port, settings.database.name
        );
        Ok(pool)
    }

    fn connection_string() -> Result<String, DatabaseError> {
        let settings = config::config();
        if settings.database.url.is_none() && settings.database.user.is_empty() {
            return Err(DatabaseError::ConfigMissing("DATABASE_URL"));
        }
        Ok(settings.database_url()?)
    }

    /// Pings the pool to ensure connectivity
    pub async fn health_check() -> Result<(), DatabaseError> {
        let pool = Self::pool()?;
        sqlx::query("SELECT 1").execute(&pool).await?;
        Ok(())
    }

    /// Close the pool (e.g., on shutdown)
    pub async fn close() {
        if let Some(pool) = Self::instance().pool.get() {
            pool.close().await;
            info!("Closed database pool");
        }
    }
}
