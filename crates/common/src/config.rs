//! Configuration management for the service.
//!
//! Settings are loaded from configuration files and environment variables
//! with the `config` crate. Later sources override earlier ones:
//!
//! 1. Built-in defaults
//! 2. `config/default.toml` (if it exists)
//! 3. `config/{APP_ENV}.toml` (if it exists, `APP_ENV` defaults to `development`)
//! 4. Environment variables prefixed with `APP_`, using `__` between sections
//!
//! ## Example Configuration
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8000
//!
//! [database]
//! url = "sqlite://fastbreak.db?mode=rwc"
//!
//! [leaderboard]
//! default_game_type = "fast_break"
//! default_limit = 10
//! max_limit = 100
//!
//! [cors]
//! allowed_origins = ["http://localhost:3000", "http://127.0.0.1:3000"]
//! ```

use anyhow::{Context, Result};
use fastbreak_domain::leaderboard::{LeaderboardPolicy, DEFAULT_GAME_TYPE, DEFAULT_LIMIT, MAX_LIMIT};
use fastbreak_domain::validation::check_game_type;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub leaderboard: LeaderboardConfig,
    pub cors: CorsConfig,
    pub telemetry: TelemetryConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Per-request timeout in seconds
    pub request_timeout_seconds: u64,

    /// Serve the OpenAPI document
    pub enable_openapi: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            request_timeout_seconds: 30,
            enable_openapi: true,
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite connection URL
    pub url: String,

    /// Maximum number of pooled connections
    pub max_connections: u32,

    /// Seconds to wait for a pooled connection
    pub acquire_timeout_seconds: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://fastbreak.db?mode=rwc".to_string(),
            max_connections: 5,
            acquire_timeout_seconds: 5,
        }
    }
}

/// Leaderboard query defaults and bounds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaderboardConfig {
    /// Game type used when a query omits it
    pub default_game_type: String,

    /// Page size used when a query omits it
    pub default_limit: u32,

    /// Largest page size honoured
    pub max_limit: u32,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            default_game_type: DEFAULT_GAME_TYPE.to_string(),
            default_limit: DEFAULT_LIMIT,
            max_limit: MAX_LIMIT,
        }
    }
}

impl LeaderboardConfig {
    /// Query policy derived from this configuration
    pub fn policy(&self) -> LeaderboardPolicy {
        LeaderboardPolicy {
            default_game_type: self.default_game_type.clone(),
            default_limit: self.default_limit,
            max_limit: self.max_limit,
        }
    }
}

/// Cross-origin configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Origins allowed to call the API from a browser
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Service name attached to log output
    pub service_name: String,

    /// Enable JSON logging format
    pub json_logging: bool,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "fastbreak-leaderboard".to_string(),
            json_logging: false,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the standard files and environment variables.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use fastbreak_common::config::AppConfig;
    ///
    /// let config = AppConfig::load().expect("Failed to load configuration");
    /// println!("Server will run on {}:{}", config.server.host, config.server.port);
    /// ```
    pub fn load() -> Result<Self> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false));

        Self::finish(builder)
    }

    /// Load configuration from an explicit file, still honouring environment
    /// variable overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let builder = config::Config::builder()
            .add_source(config::File::from(path).required(true));

        Self::finish(builder)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))
    }

    fn finish(builder: config::ConfigBuilder<config::builder::DefaultState>) -> Result<Self> {
        let config = builder
            // Example: APP_SERVER__PORT=3000
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to build configuration")?;

        let app_config: AppConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("Server port must be greater than 0");
        }

        if self.server.request_timeout_seconds == 0 {
            anyhow::bail!("Request timeout must be greater than 0");
        }

        if self.database.url.is_empty() {
            anyhow::bail!("Database URL is required");
        }

        if self.database.max_connections == 0 {
            anyhow::bail!("Database max connections must be greater than 0");
        }

        if self.leaderboard.max_limit == 0 {
            anyhow::bail!("Leaderboard max limit must be greater than 0");
        }

        if self.leaderboard.default_limit == 0
            || self.leaderboard.default_limit > self.leaderboard.max_limit
        {
            anyhow::bail!(
                "Leaderboard default limit must be between 1 and {}",
                self.leaderboard.max_limit
            );
        }

        check_game_type(&self.leaderboard.default_game_type)
            .context("Invalid leaderboard default game type")?;

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.telemetry.log_level.as_str()) {
            anyhow::bail!(
                "Invalid log level '{}'. Must be one of: {}",
                self.telemetry.log_level,
                valid_log_levels.join(", ")
            );
        }

        Ok(())
    }

    /// Get the server bind address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
