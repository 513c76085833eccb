//! HTTP route handlers.
//!
//! Scores are written through `/score`, read through `/leaderboard`, and
//! `/health` reports storage reachability.

pub mod health;
pub mod leaderboard;
pub mod scores;

use crate::state::AppState;
use axum::Router;

/// All API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(scores::routes())
        .merge(leaderboard::routes())
}
