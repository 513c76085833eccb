//! Health check endpoint.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use fastbreak_application::HealthReport;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// `healthy` or `degraded`
    #[schema(example = "healthy")]
    pub status: String,

    /// Server time of the check
    pub timestamp: DateTime<Utc>,

    /// Service version
    pub version: String,

    /// Storage probe result
    pub database: DatabaseHealth,
}

/// Storage probe result
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DatabaseHealth {
    /// `connected` or `unreachable`
    #[schema(example = "connected")]
    pub status: String,

    /// Probe round-trip in milliseconds
    pub latency_ms: u64,

    /// Error message when unreachable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<HealthReport> for HealthResponse {
    fn from(report: HealthReport) -> Self {
        let database = DatabaseHealth {
            status: if report.is_healthy() {
                "connected".to_string()
            } else {
                "unreachable".to_string()
            },
            latency_ms: u64::try_from(report.storage_latency.as_millis()).unwrap_or(u64::MAX),
            error: report.error,
        };

        Self {
            status: report.status.as_str().to_string(),
            timestamp: report.checked_at,
            version: env!("CARGO_PKG_VERSION").to_string(),
            database,
        }
    }
}

/// Health check routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// Health check
///
/// Probes storage with a trivial query. Answers 503 with status `degraded`
/// when storage does not respond.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service and storage are healthy", body = HealthResponse),
        (status = 503, description = "Storage unreachable", body = HealthResponse),
    )
)]
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let report = state.leaderboard_service.health().await;

    let status = if report.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(report.into()))
}
