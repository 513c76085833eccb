//! Application Services
//!
//! Business logic orchestration layer that coordinates domain operations,
//! repository access, and cross-cutting concerns.

mod leaderboard;

pub use leaderboard::*;

use fastbreak_domain::LeaderboardPolicy;

/// Service configuration
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    /// Leaderboard defaults and limit bounds
    pub leaderboard: LeaderboardPolicy,
}

impl ServiceConfig {
    pub fn new(leaderboard: LeaderboardPolicy) -> Self {
        Self { leaderboard }
    }
}

/// Service context for request handling
#[derive(Debug, Clone)]
pub struct ServiceContext {
    /// Request correlation ID for tracing
    pub correlation_id: String,
}

impl ServiceContext {
    pub fn new(correlation_id: impl Into<String>) -> Self {
        Self {
            correlation_id: correlation_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_context() {
        let ctx = ServiceContext::new("corr-123");
        assert_eq!(ctx.correlation_id, "corr-123");
    }

    #[test]
    fn test_default_config_uses_domain_policy() {
        let config = ServiceConfig::default();
        assert_eq!(config.leaderboard.default_game_type, "fast_break");
        assert_eq!(config.leaderboard.default_limit, 10);
        assert_eq!(config.leaderboard.max_limit, 100);
    }
}
