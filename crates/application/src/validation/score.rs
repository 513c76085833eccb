//! Score submission and leaderboard query requests

use chrono::{DateTime, Utc};
use fastbreak_domain::validation::{check_game_type, check_player_id};
use fastbreak_domain::{NewScore, ValidationError as DomainValidationError};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

/// Body of `POST /score`
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitScoreRequest {
    /// Opaque player identifier
    #[validate(custom = "validate_player_id")]
    #[schema(example = "p1", max_length = 128)]
    pub player_id: String,

    /// Leaderboard partition
    #[validate(custom = "validate_game_type")]
    #[schema(example = "fast_break", max_length = 64)]
    pub game_type: String,

    /// Ranking metric
    #[schema(example = 100)]
    pub score: i64,

    /// Auxiliary metric
    #[schema(example = 3)]
    pub stars: i64,
}

impl SubmitScoreRequest {
    /// Turn a validated request into a score ready to persist
    pub fn into_new_score(self, timestamp: DateTime<Utc>) -> NewScore {
        NewScore {
            player_id: self.player_id,
            game_type: self.game_type,
            score: self.score,
            stars: self.stars,
            timestamp,
        }
    }
}

/// Query string of `GET /leaderboard`
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LeaderboardRequest {
    /// Partition to read, defaults to `fast_break`
    pub game_type: Option<String>,

    /// Maximum number of scores to return, defaults to 10 and is capped
    pub limit: Option<i64>,
}

impl LeaderboardRequest {
    pub fn new(game_type: impl Into<String>, limit: i64) -> Self {
        Self {
            game_type: Some(game_type.into()),
            limit: Some(limit),
        }
    }
}

fn validate_player_id(value: &str) -> Result<(), ValidationError> {
    check_player_id(value).map_err(field_error)
}

fn validate_game_type(value: &str) -> Result<(), ValidationError> {
    check_game_type(value).map_err(field_error)
}

fn field_error(err: DomainValidationError) -> ValidationError {
    let (code, message) = match err {
        DomainValidationError::EmptyField { .. } => ("empty", "must not be empty".to_string()),
        DomainValidationError::FieldTooLong { max, .. } => {
            ("length", format!("must be at most {} characters", max))
        }
        other => ("invalid", other.to_string()),
    };

    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Owned(message));
    error
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validatable;

    fn request(player_id: &str, game_type: &str) -> SubmitScoreRequest {
        SubmitScoreRequest {
            player_id: player_id.to_string(),
            game_type: game_type.to_string(),
            score: 100,
            stars: 3,
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request("p1", "fast_break").validate_all().valid);
    }

    #[test]
    fn test_negative_score_and_stars_are_accepted() {
        let mut req = request("p1", "fast_break");
        req.score = -10;
        req.stars = -1;
        assert!(req.validate_all().valid);
    }

    #[test]
    fn test_blank_fields_are_rejected() {
        let result = request(" ", "").validate_all();
        assert!(!result.valid);
        assert_eq!(
            result.field_errors.get("player_id"),
            Some(&vec!["must not be empty".to_string()])
        );
        assert!(result.field_errors.contains_key("game_type"));
    }

    #[test]
    fn test_over_long_fields_are_rejected() {
        let result = request(&"x".repeat(129), &"g".repeat(65)).validate_all();
        assert_eq!(
            result.field_errors.get("player_id"),
            Some(&vec!["must be at most 128 characters".to_string()])
        );
        assert_eq!(
            result.field_errors.get("game_type"),
            Some(&vec!["must be at most 64 characters".to_string()])
        );
    }

    #[test]
    fn test_into_new_score_keeps_fields() {
        let now = Utc::now();
        let new_score = request("p1", "fast_break").into_new_score(now);
        assert_eq!(new_score.player_id, "p1");
        assert_eq!(new_score.game_type, "fast_break");
        assert_eq!(new_score.score, 100);
        assert_eq!(new_score.stars, 3);
        assert_eq!(new_score.timestamp, now);
    }
}
