//! Application state and dependency injection.
//!
//! This module defines the shared application state that is passed
//! to all route handlers via Axum's state extraction.

use crate::config::ApiConfig;
use async_trait::async_trait;
use fastbreak_application::{
    ApplicationError, HealthReport, LeaderboardRequest, LeaderboardService, ScoreRepositoryPort,
    ServiceConfig, ServiceContext, SubmitScoreRequest,
};
use fastbreak_domain::{LeaderboardPage, Score};
use fastbreak_infrastructure::{DatabasePool, SqliteScoreRepository};
use std::sync::Arc;

/// Application state shared across all requests
#[derive(Clone)]
pub struct AppState {
    /// API configuration
    pub config: Arc<ApiConfig>,

    /// Leaderboard service (type-erased)
    pub leaderboard_service: Arc<dyn LeaderboardServiceTrait>,
}

impl AppState {
    /// Create application state backed by the SQLite score repository
    pub fn new(config: ApiConfig, pool: DatabasePool, service_config: ServiceConfig) -> Self {
        let repository = Arc::new(SqliteScoreRepository::new(pool));
        let service = LeaderboardService::new(repository, service_config);

        Self::with_service(config, service)
    }

    /// Create application state with a custom service implementation
    pub fn with_service<S>(config: ApiConfig, leaderboard_service: S) -> Self
    where
        S: LeaderboardServiceTrait + 'static,
    {
        Self {
            config: Arc::new(config),
            leaderboard_service: Arc::new(leaderboard_service),
        }
    }
}

/// Type-erased leaderboard service trait
#[async_trait]
pub trait LeaderboardServiceTrait: Send + Sync {
    /// Validate and persist a score
    async fn submit_score(
        &self,
        ctx: &ServiceContext,
        request: SubmitScoreRequest,
    ) -> Result<Score, ApplicationError>;

    /// Read one leaderboard page
    async fn get_leaderboard(
        &self,
        ctx: &ServiceContext,
        request: LeaderboardRequest,
    ) -> Result<LeaderboardPage, ApplicationError>;

    /// Probe storage
    async fn health(&self) -> HealthReport;
}

#[async_trait]
impl<R> LeaderboardServiceTrait for LeaderboardService<R>
where
    R: ScoreRepositoryPort + 'static,
{
    async fn submit_score(
        &self,
        ctx: &ServiceContext,
        request: SubmitScoreRequest,
    ) -> Result<Score, ApplicationError> {
        LeaderboardService::submit_score(self, ctx, request).await
    }

    async fn get_leaderboard(
        &self,
        ctx: &ServiceContext,
        request: LeaderboardRequest,
    ) -> Result<LeaderboardPage, ApplicationError> {
        LeaderboardService::get_leaderboard(self, ctx, request).await
    }

    async fn health(&self) -> HealthReport {
        LeaderboardService::health(self).await
    }
}
