//! Async-safe connection pool for Diesel SQLite connections.
//!
//! SQLite has no native async driver, so each connection is wrapped in
//! `diesel-async`'s `SyncConnectionWrapper`, which runs the blocking calls on
//! Tokio's blocking pool. `bb8` manages checkout, validation and limits.
//!
//! # Design
//!
//! - Every new connection enables `foreign_keys` and sets `busy_timeout`, so
//!   writers wait for SQLite's single write lock instead of failing fast
//! - Pool checkout respects the configured timeout
//! - All errors are mapped to domain-level `PoolError` variants

use std::time::Duration;

use diesel::{ConnectionError, SqliteConnection};
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};
use diesel_async::pooled_connection::{AsyncDieselConnectionManager, ManagerConfig};
use diesel_async::sync_connection_wrapper::SyncConnectionWrapper;
use diesel_async::{AsyncConnection, SimpleAsyncConnection};
use futures_util::FutureExt;

/// Async SQLite connection used by every repository.
pub type SqliteConn = SyncConnectionWrapper<SqliteConnection>;

/// Errors that can occur during pool operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// Failed to check out a connection from the pool.
    #[error("failed to get connection from pool: {message}")]
    Checkout { message: String },

    /// Failed to build the connection pool.
    #[error("failed to build connection pool: {message}")]
    Build { message: String },
}

impl PoolError {
    /// Create a checkout error with the given message.
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }

    /// Create a build error with the given message.
    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }
}

/// Configuration for the database connection pool.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use clinic_backend::outbound::persistence::PoolConfig;
///
/// let config = PoolConfig::new("database.sqlite3")
///     .with_max_size(4)
///     .with_busy_timeout(Duration::from_secs(10));
/// assert_eq!(config.database_url(), "database.sqlite3");
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    connection_timeout: Duration,
    busy_timeout: Duration,
}

impl PoolConfig {
    /// Create a new configuration with the given database path or URL.
    ///
    /// Uses these defaults:
    /// - `max_size`: 8 connections
    /// - `connection_timeout`: 30 seconds
    /// - `busy_timeout`: 5 seconds
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: 8,
            connection_timeout: Duration::from_secs(30),
            busy_timeout: Duration::from_secs(5),
        }
    }

    /// Set the maximum number of connections in the pool.
    #[must_use]
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    /// Set the connection checkout timeout.
    #[must_use]
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Set how long a connection waits on a locked database.
    #[must_use]
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Get the database path or URL.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    fn connection_pragmas(&self) -> String {
        format!(
            "PRAGMA foreign_keys = ON; PRAGMA busy_timeout = {};",
            self.busy_timeout.as_millis()
        )
    }
}

fn manager_config(pragmas: String) -> ManagerConfig<SqliteConn> {
    let mut config = ManagerConfig::default();
    config.custom_setup = Box::new(move |url| {
        let pragmas = pragmas.clone();
        async move {
            let mut conn = SqliteConn::establish(url).await?;
            conn.batch_execute(&pragmas)
                .await
                .map_err(ConnectionError::CouldntSetupConfiguration)?;
            Ok(conn)
        }
        .boxed()
    });
    config
}

/// Async connection pool for SQLite via Diesel.
///
/// # Example
///
/// ```no_run
/// use clinic_backend::outbound::persistence::{DbPool, PoolConfig};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = DbPool::new(PoolConfig::new("database.sqlite3")).await?;
/// let _conn = pool.get().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<SqliteConn>,
}

impl DbPool {
    /// Create a new connection pool with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Build` if the pool cannot be constructed (e.g.,
    /// unwritable database path).
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let manager = AsyncDieselConnectionManager::<SqliteConn>::new_with_config(
            config.database_url(),
            manager_config(config.connection_pragmas()),
        );

        let pool = Pool::builder()
            .max_size(config.max_size)
            .connection_timeout(config.connection_timeout)
            .build(manager)
            .await
            .map_err(|err| PoolError::build(err.to_string()))?;

        Ok(Self { inner: pool })
    }

    /// Get a connection from the pool.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Checkout` if a connection cannot be obtained within
    /// the configured timeout.
    pub async fn get(&self) -> Result<PooledConnection<'_, SqliteConn>, PoolError> {
        self.inner
            .get()
            .await
            .map_err(|err| PoolError::checkout(err.to_string()))
    }
}
