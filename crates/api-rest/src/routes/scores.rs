//! Score submission endpoint.

use crate::{
    error::ApiResult,
    extractors::{RequestContext, ValidatedJson},
    responses::{Created, ScoreResponse},
    state::AppState,
};
use axum::{extract::State, routing::post, Router};
use fastbreak_application::SubmitScoreRequest;

/// Score routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/score", post(submit_score))
}

/// Submit a score
///
/// Records one score. The server assigns the id and the timestamp.
#[utoipa::path(
    post,
    path = "/score",
    tag = "scores",
    request_body = SubmitScoreRequest,
    responses(
        (status = 201, description = "Score recorded", body = ScoreResponse),
        (status = 400, description = "Malformed JSON body", body = crate::error::ErrorResponse),
        (status = 422, description = "Field rules violated", body = crate::error::ErrorResponse),
        (status = 503, description = "Storage unavailable", body = crate::error::ErrorResponse),
    )
)]
pub async fn submit_score(
    State(state): State<AppState>,
    ctx: RequestContext,
    ValidatedJson(request): ValidatedJson<SubmitScoreRequest>,
) -> ApiResult<Created<ScoreResponse>> {
    let score = state
        .leaderboard_service
        .submit_score(&ctx, request)
        .await?;

    Ok(Created(score.into()))
}
