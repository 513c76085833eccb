//! Shared plumbing for the Fast Break leaderboard service.
//!
//! This crate provides:
//! - Configuration management (files + environment, via the `config` crate)
//! - Telemetry setup (`tracing-subscriber` with JSON or pretty output)

pub mod config;
pub mod telemetry;

// Re-export commonly used types
pub use config::{
    AppConfig, CorsConfig, DatabaseConfig, LeaderboardConfig, ServerConfig, TelemetryConfig,
};
pub use telemetry::init_tracing;

/// Common error type used throughout the crate
pub type Result<T> = std::result::Result<T, anyhow::Error>;
