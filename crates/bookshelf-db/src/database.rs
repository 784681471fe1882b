//! Lazy process-lifetime connection manager.
//!
//! [`Database`] defers connecting until the first request needs the
//! store, then caches the pool for the rest of the process lifetime.
//! The one-time initialization is guarded by [`tokio::sync::OnceCell`]:
//! when N requests arrive before the first connect completes, all N
//! await the same in-flight attempt and exactly one connection pool is
//! opened. A failed attempt is not cached; the next caller retries.
//!
//! The manager is an explicitly constructed value passed through
//! application state, not a process global.

use tokio::sync::OnceCell;

use crate::error::DbError;
use crate::postgres::PostgresPool;

/// Lazily initialized handle to the `PostgreSQL` store.
#[derive(Debug)]
pub struct Database {
    url: Option<String>,
    pool: OnceCell<PostgresPool>,
}

impl Database {
    /// Create an unconnected manager.
    ///
    /// `url` is the connection string from process configuration. A
    /// missing URL is deliberately accepted here; it fails with
    /// [`DbError::Config`] at the first connection attempt.
    pub const fn new(url: Option<String>) -> Self {
        Self {
            url,
            pool: OnceCell::const_new(),
        }
    }

    /// Return the connection pool, establishing it on first use.
    ///
    /// The first call connects and runs pending migrations; subsequent
    /// calls return the cached pool. Concurrent first callers all wait
    /// on the same connect attempt.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Config`] if no connection string was
    /// configured, or [`DbError::Postgres`] / [`DbError::Migration`]
    /// if connecting or migrating fails.
    pub async fn pool(&self) -> Result<&PostgresPool, DbError> {
        self.pool
            .get_or_try_init(|| async {
                let url = self
                    .url
                    .as_deref()
                    .ok_or_else(|| DbError::Config("DATABASE_URL is not set".to_owned()))?;
                let pool = PostgresPool::connect_url(url).await?;
                pool.run_migrations().await?;
                Ok(pool)
            })
            .await
    }

    /// Close the pool if a connection was ever established.
    pub async fn close(&self) {
        if let Some(pool) = self.pool.get() {
            pool.close().await;
        }
    }
}
