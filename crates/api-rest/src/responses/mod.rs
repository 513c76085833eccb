//! Standardized API response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use fastbreak_domain::Score;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Created response (HTTP 201) with the created resource as the body
pub struct Created<T>(pub T);

impl<T> IntoResponse for Created<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}

/// A persisted score as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScoreResponse {
    /// Storage-assigned identifier
    #[schema(example = 1)]
    pub id: i64,

    /// Opaque player identifier
    #[schema(example = "p1")]
    pub player_id: String,

    /// Leaderboard partition
    #[schema(example = "fast_break")]
    pub game_type: String,

    /// Ranking metric
    #[schema(example = 100)]
    pub score: i64,

    /// Auxiliary metric
    #[schema(example = 3)]
    pub stars: i64,

    /// Server-assigned creation time (UTC)
    pub timestamp: DateTime<Utc>,
}

impl From<Score> for ScoreResponse {
    fn from(score: Score) -> Self {
        Self {
            id: score.id.get(),
            player_id: score.player_id,
            game_type: score.game_type,
            score: score.score,
            stars: score.stars,
            timestamp: score.timestamp,
        }
    }
}
