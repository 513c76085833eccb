//! Leaderboard Service
//!
//! Score submission, leaderboard reads and the storage health probe.

use super::{ServiceConfig, ServiceContext};
use crate::validation::{LeaderboardRequest, SubmitScoreRequest, Validatable};
use crate::{ApplicationError, ApplicationResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fastbreak_domain::{LeaderboardPage, LeaderboardQuery, NewScore, Score};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Score repository trait
///
/// Implementations must return pages in [`Score::leaderboard_order`] and
/// read the page and the partition total from the same storage session.
#[async_trait]
pub trait ScoreRepositoryPort: Send + Sync {
    /// Persist a new score atomically and return it with its assigned id
    async fn insert(&self, score: &NewScore) -> Result<Score, ApplicationError>;

    /// Top scores of one partition plus the partition size
    async fn top_scores(&self, query: &LeaderboardQuery)
        -> Result<LeaderboardPage, ApplicationError>;

    /// Trivial round-trip to the backing store
    async fn ping(&self) -> Result<(), ApplicationError>;
}

/// Overall service health
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    /// Storage answered the probe
    Healthy,
    /// Storage did not answer
    Degraded,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "healthy",
            HealthStatus::Degraded => "degraded",
        }
    }
}

/// Result of a health probe
#[derive(Debug, Clone)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub checked_at: DateTime<Utc>,
    /// Round-trip time of the storage probe
    pub storage_latency: Duration,
    /// Storage error message when degraded
    pub error: Option<String>,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.status == HealthStatus::Healthy
    }
}

/// Leaderboard service implementation
pub struct LeaderboardService<R>
where
    R: ScoreRepositoryPort,
{
    repository: Arc<R>,
    config: ServiceConfig,
}

impl<R> LeaderboardService<R>
where
    R: ScoreRepositoryPort,
{
    pub fn new(repository: Arc<R>, config: ServiceConfig) -> Self {
        Self { repository, config }
    }

    /// Validate and persist a score, stamping it with the current time
    #[instrument(skip(self, ctx, request), fields(correlation_id = %ctx.correlation_id))]
    pub async fn submit_score(
        &self,
        ctx: &ServiceContext,
        request: SubmitScoreRequest,
    ) -> ApplicationResult<Score> {
        request.validate_all().ensure_valid()?;

        let new_score = request.into_new_score(Utc::now());
        let score = self.repository.insert(&new_score).await?;

        info!(
            score_id = %score.id,
            player_id = %score.player_id,
            game_type = %score.game_type,
            score = score.score,
            "Score submitted"
        );

        Ok(score)
    }

    /// Top scores for a game type, with defaults and limit bounds applied
    #[instrument(skip(self, ctx), fields(correlation_id = %ctx.correlation_id))]
    pub async fn get_leaderboard(
        &self,
        ctx: &ServiceContext,
        request: LeaderboardRequest,
    ) -> ApplicationResult<LeaderboardPage> {
        let query =
            LeaderboardQuery::resolve(request.game_type, request.limit, &self.config.leaderboard)?;

        let page = self.repository.top_scores(&query).await?;

        debug!(
            game_type = %query.game_type,
            limit = query.limit,
            returned = page.scores.len(),
            total = page.total,
            "Leaderboard read"
        );

        Ok(page)
    }

    /// Probe storage and report whether the service can do useful work
    #[instrument(skip(self))]
    pub async fn health(&self) -> HealthReport {
        let started = Instant::now();
        let result = self.repository.ping().await;
        let storage_latency = started.elapsed();

        let (status, error) = match result {
            Ok(()) => (HealthStatus::Healthy, None),
            Err(e) => {
                warn!(error = %e, "Storage health check failed");
                (HealthStatus::Degraded, Some(e.to_string()))
            }
        };

        HealthReport {
            status,
            checked_at: Utc::now(),
            storage_latency,
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status_labels() {
        assert_eq!(HealthStatus::Healthy.as_str(), "healthy");
        assert_eq!(HealthStatus::Degraded.as_str(), "degraded");
    }
}
