//! API configuration.

use fastbreak_common::AppConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// CORS allowed origins
    pub cors_allowed_origins: Vec<String>,

    /// Request timeout in seconds
    pub request_timeout_seconds: u64,

    /// Serve the OpenAPI document
    pub enable_openapi: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for ApiConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            cors_allowed_origins: config.cors.allowed_origins.clone(),
            request_timeout_seconds: config.server.request_timeout_seconds,
            enable_openapi: config.server.enable_openapi,
        }
    }
}

impl ApiConfig {
    /// Get request timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_follow_app_config() {
        let config = ApiConfig::default();
        assert!(config.enable_openapi);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(
            config.cors_allowed_origins,
            vec!["http://localhost:3000", "http://127.0.0.1:3000"]
        );
    }
}
