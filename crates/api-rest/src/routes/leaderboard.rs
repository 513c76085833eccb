//! Leaderboard endpoint.

use crate::{
    error::ApiResult,
    extractors::{ApiQuery, RequestContext},
    responses::ScoreResponse,
    state::AppState,
};
use axum::{extract::State, routing::get, Json, Router};
use fastbreak_application::LeaderboardRequest;
use fastbreak_domain::LeaderboardPage;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One leaderboard page
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardResponse {
    /// Top scores, highest first
    pub scores: Vec<ScoreResponse>,

    /// Number of scores recorded for the game type
    #[schema(example = 2)]
    pub total: u64,
}

impl From<LeaderboardPage> for LeaderboardResponse {
    fn from(page: LeaderboardPage) -> Self {
        Self {
            scores: page.scores.into_iter().map(ScoreResponse::from).collect(),
            total: page.total,
        }
    }
}

/// Leaderboard routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/leaderboard", get(get_leaderboard))
}

/// Get leaderboard
///
/// Top scores for one game type, ordered by score (highest first), then by
/// submission time (earliest first).
#[utoipa::path(
    get,
    path = "/leaderboard",
    tag = "leaderboard",
    params(LeaderboardRequest),
    responses(
        (status = 200, description = "Leaderboard page", body = LeaderboardResponse),
        (status = 400, description = "Unparsable query string", body = crate::error::ErrorResponse),
        (status = 422, description = "Bad limit or game type", body = crate::error::ErrorResponse),
        (status = 503, description = "Storage unavailable", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_leaderboard(
    State(state): State<AppState>,
    ctx: RequestContext,
    ApiQuery(request): ApiQuery<LeaderboardRequest>,
) -> ApiResult<Json<LeaderboardResponse>> {
    let page = state
        .leaderboard_service
        .get_leaderboard(&ctx, request)
        .await?;

    Ok(Json(page.into()))
}
