//! Storage gateway
//!
//! Thin wrapper over the PostgreSQL connection pool. Statements arrive as
//! `sqlx` query builders with their parameters already bound, so user input is
//! never spliced into SQL text. Failures are passed up as [`StorageError`]
//! without interpretation; the only signal the gateway adds is
//! [`StorageError::NoRows`] for a point query that matched nothing.

use sqlx::{
    postgres::{PgArguments, PgPool, PgPoolOptions, PgRow},
    query::{Query, QueryAs},
    FromRow, Postgres,
};
use std::time::Duration;
use thiserror::Error;

use crate::config::DatabaseConfig;

/// Storage-level failures
#[derive(Error, Debug)]
pub enum StorageError {
    /// Connection, constraint, timeout or any other driver failure
    #[error("Database query failed: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// A point query returned zero rows
    #[error("Query returned no rows")]
    NoRows,

    #[error("Database configuration error: {0}. Check DATABASE_URL and connection settings.")]
    Config(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Untyped statement with bound parameters
pub type Statement<'q> = Query<'q, Postgres, PgArguments>;

/// Statement whose rows decode into `T`
pub type RowStatement<'q, T> = QueryAs<'q, Postgres, T, PgArguments>;

/// Executes parameterized statements against the pool
///
/// Cloning is cheap; every clone shares the same pool.
#[derive(Debug, Clone)]
pub struct Gateway {
    pool: PgPool,
}

impl Gateway {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run a write statement and return the number of affected rows
    pub async fn execute(&self, statement: Statement<'_>) -> StorageResult<u64> {
        let result = statement.execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    /// Fetch exactly one row, or [`StorageError::NoRows`]
    pub async fn query_one<T>(&self, statement: RowStatement<'_, T>) -> StorageResult<T>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        statement
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StorageError::NoRows)
    }

    /// Fetch every matching row
    pub async fn query_many<T>(&self, statement: RowStatement<'_, T>) -> StorageResult<Vec<T>>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        Ok(statement.fetch_all(&self.pool).await?)
    }

    pub async fn health_check(&self) -> StorageResult<()> {
        health_check(&self.pool).await
    }
}

pub async fn create_pool(config: &DatabaseConfig) -> StorageResult<PgPool> {
    if config.url.is_empty() {
        return Err(StorageError::Config("DATABASE_URL is empty".to_string()));
    }

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .connect(&config.url)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "Database connection pool created"
    );

    Ok(pool)
}

pub async fn health_check(pool: &PgPool) -> StorageResult<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(StorageError::from)
}
