//! Connection pooling for Diesel SQLite connections.
//!
//! Diesel's SQLite driver is synchronous, so every database operation runs on
//! the tokio blocking thread pool via [`DbPool::run`] and checkout happens
//! inside the blocking task. Each freshly acquired connection gets a busy
//! timeout and foreign key enforcement before first use.

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

/// Embedded migrations from the backend/migrations directory.
const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors that can occur during pool operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// Failed to check out a connection from the pool.
    #[error("failed to get connection from pool: {message}")]
    Checkout { message: String },

    /// Failed to build the connection pool.
    #[error("failed to build connection pool: {message}")]
    Build { message: String },

    /// The blocking task running the operation never completed.
    #[error("database task failed to complete: {message}")]
    Runtime { message: String },

    /// Pending migrations could not be applied.
    #[error("failed to run migrations: {message}")]
    Migration { message: String },
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

    /// Create a runtime error with the given message.
    pub fn runtime(message: impl Into<String>) -> Self {
        Self::Runtime {
            message: message.into(),
        }
    }

    /// Create a migration error with the given message.
    pub fn migration(message: impl Into<String>) -> Self {
        Self::Migration {
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
/// use hirewatch_backend::outbound::persistence::PoolConfig;
///
/// let config = PoolConfig::new("hirewatch.db")
///     .with_max_size(20)
///     .with_connection_timeout(Duration::from_secs(30));
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    min_idle: Option<u32>,
    connection_timeout: Duration,
}

impl PoolConfig {
    /// Create a new configuration with the given database URL.
    ///
    /// Uses sensible defaults:
    /// - `max_size`: 10 connections
    /// - `min_idle`: 2 connections
    /// - `connection_timeout`: 30 seconds
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: 10,
            min_idle: Some(2),
            connection_timeout: Duration::from_secs(30),
        }
    }

    /// Set the maximum number of connections in the pool.
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    /// Set the minimum number of idle connections to maintain.
    pub fn with_min_idle(mut self, min_idle: Option<u32>) -> Self {
        self.min_idle = min_idle;
        self
    }

    /// Set the connection checkout timeout.
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Get the database URL.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }
}

/// Applies pragmas to every connection the pool acquires.
///
/// SQLite ships with foreign key enforcement off and fails writes immediately
/// when the database file is locked by another connection.
#[derive(Debug, Clone, Copy)]
struct ConnectionPragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionPragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute("PRAGMA busy_timeout = 5000; PRAGMA foreign_keys = ON;")
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Connection pool for SQLite via Diesel.
///
/// The wrapper keeps the synchronous driver off the async runtime: callers
/// hand [`run`](Self::run) a closure over the connection and the pool executes
/// it on a blocking thread.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<ConnectionManager<SqliteConnection>>,
}

impl DbPool {
    /// Create a new connection pool with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Build` if the pool cannot be constructed (e.g.,
    /// an unreachable database file or exhausted file handles).
    pub fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let manager = ConnectionManager::<SqliteConnection>::new(config.database_url());

        let pool = Pool::builder()
            .max_size(config.max_size)
            .min_idle(config.min_idle)
            .connection_timeout(config.connection_timeout)
            .connection_customizer(Box::new(ConnectionPragmas))
            .build(manager)
            .map_err(|err| PoolError::build(err.to_string()))?;

        Ok(Self { inner: pool })
    }

    /// Run a Diesel operation on the blocking thread pool.
    ///
    /// The outer `Result` carries pool and runtime failures; the inner
    /// [`diesel::QueryResult`] is the operation's own outcome.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Checkout` if a connection cannot be obtained within
    /// the configured timeout, and `PoolError::Runtime` if the blocking task
    /// is cancelled or panics.
    pub async fn run<T, F>(&self, operation: F) -> Result<diesel::QueryResult<T>, PoolError>
    where
        F: FnOnce(&mut SqliteConnection) -> diesel::QueryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool
                .get()
                .map_err(|err| PoolError::checkout(err.to_string()))?;
            Ok(operation(&mut conn))
        })
        .await
        .map_err(|err| PoolError::runtime(err.to_string()))?
    }

    /// Apply any embedded migrations that have not run yet.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Migration` if a migration fails part way; earlier
    /// migrations stay applied.
    pub async fn run_migrations(&self) -> Result<(), PoolError> {
        let pool = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool
                .get()
                .map_err(|err| PoolError::checkout(err.to_string()))?;
            conn.run_pending_migrations(MIGRATIONS)
                .map(|_| ())
                .map_err(|err| PoolError::migration(err.to_string()))
        })
        .await
        .map_err(|err| PoolError::runtime(err.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::RunQueryDsl;
    use rstest::rstest;

    fn in_memory_pool() -> DbPool {
        // A fresh in-memory database exists per connection, so the pool is
        // capped at a single connection to keep state visible across calls.
        let config = PoolConfig::new(":memory:")
            .with_max_size(1)
            .with_min_idle(None);
        DbPool::new(config).expect("in-memory pool builds")
    }

    #[rstest]
    fn pool_config_default_values() {
        let config = PoolConfig::new("hirewatch.db");

        assert_eq!(config.database_url(), "hirewatch.db");
        assert_eq!(config.max_size, 10);
        assert_eq!(config.min_idle, Some(2));
        assert_eq!(config.connection_timeout, Duration::from_secs(30));
    }

    #[rstest]
    fn pool_config_builder_pattern() {
        let config = PoolConfig::new("hirewatch.db")
            .with_max_size(20)
            .with_min_idle(Some(5))
            .with_connection_timeout(Duration::from_secs(60));

        assert_eq!(config.max_size, 20);
        assert_eq!(config.min_idle, Some(5));
        assert_eq!(config.connection_timeout, Duration::from_secs(60));
    }

    #[rstest]
    fn pool_error_display() {
        let checkout_err = PoolError::checkout("connection refused");
        let build_err = PoolError::build("invalid URL");
        let runtime_err = PoolError::runtime("task cancelled");
        let migration_err = PoolError::migration("syntax error");

        assert!(checkout_err.to_string().contains("connection refused"));
        assert!(build_err.to_string().contains("invalid URL"));
        assert!(runtime_err.to_string().contains("task cancelled"));
        assert!(migration_err.to_string().contains("syntax error"));
    }

    #[tokio::test]
    async fn pool_runs_operations_on_blocking_threads() {
        let pool = in_memory_pool();

        let result = pool
            .run(|conn| diesel::sql_query("SELECT 1").execute(conn))
            .await
            .expect("task completes");

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn migrations_create_the_companies_table() {
        let pool = in_memory_pool();
        pool.run_migrations().await.expect("migrations apply");

        let probe = pool
            .run(|conn| diesel::sql_query("SELECT count(*) FROM companies").execute(conn))
            .await
            .expect("task completes");

        assert!(probe.is_ok());
    }

    #[tokio::test]
    async fn file_backed_databases_persist_across_pools() {
        use super::super::schema::companies::dsl::companies;
        use diesel::QueryDsl;

        let dir = tempfile::tempdir().expect("temp dir");
        let url = dir
            .path()
            .join("hirewatch.db")
            .to_str()
            .expect("utf8 temp path")
            .to_owned();

        let pool = DbPool::new(PoolConfig::new(url.clone())).expect("file pool builds");
        pool.run_migrations().await.expect("migrations apply");
        pool.run(|conn| {
            diesel::sql_query(
                "INSERT INTO companies (id, name, status, notes, application_link, last_update) \
                 VALUES ('00000000-0000-0000-0000-000000000001', 'Acme Robotics', 'Hiring', '', \
                 '', '2026-01-02 03:04:05')",
            )
            .execute(conn)
        })
        .await
        .expect("task completes")
        .expect("insert succeeds");
        drop(pool);

        let reopened = DbPool::new(PoolConfig::new(url)).expect("pool reopens");
        let total: i64 = reopened
            .run(|conn| companies.count().get_result(conn))
            .await
            .expect("task completes")
            .expect("count succeeds");
        assert_eq!(total, 1);
    }
}
