//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. `acquire_timeout`
//! bounds how long a request waits for a connection; when it expires the
//! store reports `PoolTimedOut` and the request answers 503.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default wait for a free (or new) connection, in seconds.
pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

/// Pool sizing and wait limits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: Duration::from_secs(DEFAULT_ACQUIRE_TIMEOUT_SECS),
        }
    }
}

impl PoolConfig {
    fn options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
    }

    /// Connect eagerly, failing if the first connection cannot be made.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let pool = PoolConfig::default().connect("postgres://localhost/roster").await?;
    /// ```
    pub async fn connect(&self, database_url: &str) -> Result<PgPool, sqlx::Error> {
        tracing::debug!(
            max_connections = self.max_connections,
            acquire_timeout_ms = self.acquire_timeout.as_millis() as u64,
            "connecting to database"
        );
        self.options().connect(database_url).await
    }
}
