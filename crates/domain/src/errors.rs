//! Error types for the leaderboard domain.
//!
//! Input problems are
//! [`ValidationError`]s (client errors), persistence problems are
//! [`StorageError`]s (server errors). Both roll up into [`AppError`]; the
//! application layer decides how each maps onto the wire.

/// Top-level application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed, missing or out-of-range input
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Persistence layer unavailable or an operation against it failed
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Required field is empty or whitespace only
    #[error("{field} must not be empty")]
    EmptyField {
        /// Offending field name
        field: &'static str,
    },

    /// Field exceeds its maximum length
    #[error("{field} must be at most {max} characters (got {actual})")]
    FieldTooLong {
        /// Offending field name
        field: &'static str,
        /// Maximum allowed length in characters
        max: usize,
        /// Actual length in characters
        actual: usize,
    },

    /// Leaderboard limit is zero or negative
    #[error("limit must be a positive integer (got {0})")]
    InvalidLimit(i64),
}

/// Storage errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// Storage cannot be reached (pool closed, timed out, I/O failure)
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// A read query failed
    #[error("query failed: {0}")]
    QueryFailed(String),

    /// A write or commit failed
    #[error("write failed: {0}")]
    WriteFailed(String),
}

/// Application-wide result type
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_roll_up() {
        let err = AppError::from(ValidationError::InvalidLimit(0));
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Validation error: limit must be a positive integer (got 0)"
        );

        let err = AppError::from(StorageError::Unavailable("pool closed".to_string()));
        assert!(matches!(err, AppError::Storage(StorageError::Unavailable(_))));
        assert_eq!(err.to_string(), "Storage error: storage unavailable: pool closed");
    }

    #[test]
    fn test_validation_messages() {
        let err = ValidationError::FieldTooLong {
            field: "player_id",
            max: 128,
            actual: 200,
        };
        assert_eq!(
            err.to_string(),
            "player_id must be at most 128 characters (got 200)"
        );

        let err = ValidationError::EmptyField { field: "game_type" };
        assert_eq!(err.to_string(), "game_type must not be empty");
    }
}
