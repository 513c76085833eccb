//! Infrastructure layer for the Fast Break leaderboard service
//!
//! This crate provides implementations for:
//! - Database access (SQLite with sqlx)
//! - The score repository behind the application's storage port
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fastbreak_infrastructure::{DatabaseConfig, DatabasePool, SqliteScoreRepository};
//!
//! let pool = DatabasePool::new(&DatabaseConfig::default()).await?;
//! pool.ensure_schema().await?;
//!
//! let repository = SqliteScoreRepository::new(pool.clone());
//! ```

pub mod database;
pub mod repositories;

// Re-export commonly used types
pub use database::{DatabaseConfig, DatabasePool, TransactionExt};
pub use repositories::SqliteScoreRepository;

use fastbreak_application::ApplicationError;
use fastbreak_domain::StorageError;

// Re-export result and error types
pub type Result<T> = std::result::Result<T, Error>;

/// Infrastructure-level errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Database errors from sqlx
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Stored data that cannot be mapped back to the domain
    #[error("Invalid stored data: {0}")]
    InvalidData(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// Check if the database could not be reached at all
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            Error::Database(
                sqlx::Error::PoolTimedOut
                    | sqlx::Error::PoolClosed
                    | sqlx::Error::Io(_)
                    | sqlx::Error::WorkerCrashed
            )
        )
    }
}

impl From<Error> for StorageError {
    fn from(err: Error) -> Self {
        if err.is_unavailable() {
            StorageError::Unavailable(err.to_string())
        } else {
            match err {
                Error::InvalidData(msg) => StorageError::QueryFailed(msg),
                other => StorageError::QueryFailed(other.to_string()),
            }
        }
    }
}

impl From<Error> for ApplicationError {
    fn from(err: Error) -> Self {
        StorageError::from(err).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_errors_are_unavailable() {
        assert!(Error::Database(sqlx::Error::PoolTimedOut).is_unavailable());
        assert!(Error::Database(sqlx::Error::PoolClosed).is_unavailable());
        assert!(!Error::Database(sqlx::Error::RowNotFound).is_unavailable());
        assert!(!Error::InvalidData("bad timestamp".to_string()).is_unavailable());
    }

    #[test]
    fn test_invalid_data_becomes_query_failure() {
        let err = StorageError::from(Error::InvalidData("timestamp 'x'".to_string()));
        assert_eq!(err, StorageError::QueryFailed("timestamp 'x'".to_string()));
    }

    #[test]
    fn test_conversion_to_application_error() {
        let err: ApplicationError = Error::Database(sqlx::Error::PoolTimedOut).into();
        assert!(matches!(err, ApplicationError::ServiceUnavailable(_)));

        let err: ApplicationError = Error::Database(sqlx::Error::RowNotFound).into();
        assert!(matches!(err, ApplicationError::Internal(_)));
    }
}
