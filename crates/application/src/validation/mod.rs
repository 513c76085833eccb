//! Validation Framework
//!
//! Request types for the leaderboard operations and the plumbing that turns
//! `validator` output into [`ApplicationError`]s.

mod score;

pub use score::*;

use crate::ApplicationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::{Validate, ValidationErrors};

/// Validation result containing all errors
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether validation passed
    pub valid: bool,
    /// Field-level errors, keyed by field name
    pub field_errors: BTreeMap<String, Vec<String>>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        Self {
            valid: true,
            field_errors: BTreeMap::new(),
        }
    }

    /// Add a field-level error
    pub fn add_field_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.valid = false;
        self.field_errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Collect the field errors reported by `validator`
    pub fn from_errors(errors: &ValidationErrors) -> Self {
        let mut result = Self::success();

        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                result.add_field_error(field.to_string(), message);
            }
        }

        result
    }

    /// Render all errors as one `field: message; ...` string
    pub fn message(&self) -> String {
        self.field_errors
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| format!("{}: {}", field, error))
            })
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Ensure validation passed, returning error if not
    pub fn ensure_valid(&self) -> Result<(), ApplicationError> {
        if self.valid {
            Ok(())
        } else {
            Err(ApplicationError::ValidationFailed(self.message()))
        }
    }
}

/// Trait for validatable types
pub trait Validatable {
    /// Validate the type and return a result
    fn validate_all(&self) -> ValidationResult;
}

impl<T: Validate> Validatable for T {
    fn validate_all(&self) -> ValidationResult {
        match self.validate() {
            Ok(()) => ValidationResult::success(),
            Err(errors) => ValidationResult::from_errors(&errors),
        }
    }
}

/// Describe `validator` errors in the API error message format
pub fn describe(errors: &ValidationErrors) -> String {
    ValidationResult::from_errors(errors).message()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_result() {
        let mut result = ValidationResult::success();
        assert!(result.valid);
        assert!(result.ensure_valid().is_ok());

        result.add_field_error("player_id", "must not be empty");
        result.add_field_error("game_type", "must not be empty");
        assert!(!result.valid);
        assert_eq!(
            result.message(),
            "game_type: must not be empty; player_id: must not be empty"
        );

        let err = result.ensure_valid().unwrap_err();
        assert!(matches!(err, ApplicationError::ValidationFailed(_)));
    }
}
