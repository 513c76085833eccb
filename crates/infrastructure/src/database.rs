//! Database module - SQLite connection pool and utilities
//!
//! Provides connection pool management, schema setup, health probing and
//! transaction support for the leaderboard store.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Sqlite, SqlitePool, Transaction};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::{Error, Result};

/// Statements run at startup, each idempotent
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS scores (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        player_id TEXT NOT NULL,
        game_type TEXT NOT NULL,
        score INTEGER NOT NULL,
        stars INTEGER NOT NULL,
        timestamp TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_scores_player_id ON scores (player_id)",
    "CREATE INDEX IF NOT EXISTS ix_scores_game_type ON scores (game_type)",
    "CREATE INDEX IF NOT EXISTS ix_scores_leaderboard ON scores (game_type, score DESC, timestamp)",
];

/// Database configuration for SQLite connections.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database connection URL (sqlite://path.db?mode=rwc or sqlite::memory:)
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Minimum number of connections to keep open
    pub min_connections: u32,
    /// Timeout for acquiring a connection from the pool
    pub acquire_timeout: Duration,
    /// Maximum time a connection can be idle before being closed
    pub idle_timeout: Option<Duration>,
    /// Maximum lifetime of a connection
    pub max_lifetime: Option<Duration>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://fastbreak.db?mode=rwc".to_string(),
            max_connections: 5,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(5),
            idle_timeout: Some(Duration::from_secs(600)),
            max_lifetime: Some(Duration::from_secs(1800)),
        }
    }
}

impl DatabaseConfig {
    /// A private in-memory database.
    ///
    /// Every SQLite connection to `:memory:` opens its own database, so the
    /// pool holds exactly one connection and never recycles it.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(5),
            idle_timeout: None,
            max_lifetime: None,
        }
    }

    /// Check whether the URL names an in-memory database
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

impl From<&fastbreak_common::DatabaseConfig> for DatabaseConfig {
    fn from(config: &fastbreak_common::DatabaseConfig) -> Self {
        let base = Self {
            url: config.url.clone(),
            max_connections: config.max_connections,
            acquire_timeout: Duration::from_secs(config.acquire_timeout_seconds),
            ..Self::default()
        };

        if base.is_in_memory() {
            Self {
                url: base.url,
                acquire_timeout: base.acquire_timeout,
                ..Self::in_memory()
            }
        } else {
            base
        }
    }
}

/// Database connection pool wrapper with health monitoring.
#[derive(Clone)]
pub struct DatabasePool {
    pool: SqlitePool,
}

impl DatabasePool {
    /// Create a new database pool with the given configuration.
    #[instrument(skip(config), fields(max_connections = config.max_connections))]
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        info!("Initializing database connection pool");

        let mut options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| Error::Configuration(format!("invalid database url: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true);

        if !config.is_in_memory() {
            options = options.journal_mode(SqliteJournalMode::Wal);
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections.min(config.max_connections))
            .acquire_timeout(config.acquire_timeout)
            .idle_timeout(config.idle_timeout)
            .max_lifetime(config.max_lifetime)
            .connect_with(options)
            .await
            .map_err(Error::Database)?;

        info!("Database pool initialized successfully");
        Ok(Self { pool })
    }

    /// Create the scores table and its indexes if they do not exist.
    #[instrument(skip(self))]
    pub async fn ensure_schema(&self) -> Result<()> {
        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(Error::Database)?;
        }

        debug!("Schema ensured");
        Ok(())
    }

    /// Get reference to the underlying pool.
    #[inline]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Begin a new database transaction.
    #[instrument(skip(self))]
    pub async fn begin(&self) -> Result<Transaction<'static, Sqlite>> {
        debug!("Beginning new transaction");
        self.pool.begin().await.map_err(Error::Database)
    }

    /// Round-trip a trivial query to prove the database answers.
    #[instrument(skip(self))]
    pub async fn ping(&self) -> Result<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, "Database ping failed");
                Error::Database(e)
            })?;

        Ok(())
    }

    /// Close all connections in the pool.
    pub async fn close(&self) {
        info!("Closing database pool");
        self.pool.close().await;
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }
}

impl std::fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabasePool")
            .field("size", &self.pool.size())
            .field("idle", &self.pool.num_idle())
            .finish()
    }
}

/// Extension trait for transaction handling with automatic commit/rollback.
#[async_trait::async_trait]
pub trait TransactionExt {
    /// Commit if result is Ok, rollback if Err.
    async fn commit_or_rollback<T, E>(
        self,
        result: std::result::Result<T, E>,
    ) -> std::result::Result<T, E>
    where
        T: Send,
        E: From<sqlx::Error> + Send;
}

#[async_trait::async_trait]
impl TransactionExt for Transaction<'_, Sqlite> {
    async fn commit_or_rollback<T, E>(
        self,
        result: std::result::Result<T, E>,
    ) -> std::result::Result<T, E>
    where
        T: Send,
        E: From<sqlx::Error> + Send,
    {
        match result {
            Ok(value) => {
                self.commit().await?;
                Ok(value)
            }
            Err(e) => {
                if let Err(rollback_err) = self.rollback().await {
                    warn!("Failed to rollback transaction: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}
