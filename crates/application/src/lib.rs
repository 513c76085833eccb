//! Application layer for the Fast Break leaderboard service
//!
//! This crate orchestrates domain logic and coordinates between layers.
//!
//! ## Modules
//!
//! - `services` - The leaderboard service and the storage port it drives
//! - `validation` - Request types and their input rules

pub mod services;
pub mod validation;

// Re-export commonly used types
pub use services::{
    HealthReport, HealthStatus, LeaderboardService, ScoreRepositoryPort, ServiceConfig,
    ServiceContext,
};
pub use validation::{LeaderboardRequest, SubmitScoreRequest};

use fastbreak_domain::errors::{AppError, StorageError};
use thiserror::Error;

/// Application-level errors
#[derive(Error, Debug, Clone)]
pub enum ApplicationError {
    /// Input parsed but broke a rule
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Storage or another dependency is unreachable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl ApplicationError {
    /// Get HTTP status code for this error
    pub fn http_status(&self) -> u16 {
        match self {
            ApplicationError::ValidationFailed(_) => 422,
            ApplicationError::Internal(_) => 500,
            ApplicationError::ServiceUnavailable(_) => 503,
        }
    }

    /// Get error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            ApplicationError::ValidationFailed(_) => "VALIDATION_FAILED",
            ApplicationError::Internal(_) => "INTERNAL_ERROR",
            ApplicationError::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
        }
    }
}

impl From<AppError> for ApplicationError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Validation(e) => ApplicationError::ValidationFailed(e.to_string()),
            AppError::Storage(StorageError::Unavailable(msg)) => {
                ApplicationError::ServiceUnavailable(msg)
            }
            AppError::Storage(e) => ApplicationError::Internal(e.to_string()),
        }
    }
}

impl From<fastbreak_domain::ValidationError> for ApplicationError {
    fn from(err: fastbreak_domain::ValidationError) -> Self {
        AppError::from(err).into()
    }
}

impl From<StorageError> for ApplicationError {
    fn from(err: StorageError) -> Self {
        AppError::from(err).into()
    }
}

impl From<validator::ValidationErrors> for ApplicationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApplicationError::ValidationFailed(validation::describe(&errors))
    }
}

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use fastbreak_domain::ValidationError;

    #[test]
    fn test_error_http_status() {
        assert_eq!(ApplicationError::ValidationFailed("test".to_string()).http_status(), 422);
        assert_eq!(ApplicationError::Internal("test".to_string()).http_status(), 500);
        assert_eq!(ApplicationError::ServiceUnavailable("test".to_string()).http_status(), 503);
    }

    #[test]
    fn test_domain_errors_map_to_wire_codes() {
        let err: ApplicationError = ValidationError::InvalidLimit(0).into();
        assert!(matches!(err, ApplicationError::ValidationFailed(_)));
        assert_eq!(err.error_code(), "VALIDATION_FAILED");

        let err: ApplicationError = StorageError::Unavailable("pool closed".to_string()).into();
        assert!(matches!(err, ApplicationError::ServiceUnavailable(_)));
        assert_eq!(err.error_code(), "SERVICE_UNAVAILABLE");

        let err: ApplicationError = StorageError::WriteFailed("constraint".to_string()).into();
        assert!(matches!(err, ApplicationError::Internal(_)));
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
    }
}
