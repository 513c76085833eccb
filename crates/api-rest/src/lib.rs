//! Fast Break leaderboard REST API
//!
//! Axum HTTP surface for submitting scores and reading leaderboards, with an
//! OpenAPI document, CORS allow-listing, and request ID propagation.
//!
//! ## Architecture
//!
//! - **app**: Router assembly and middleware stack
//! - **routes**: HTTP handlers for scores, leaderboard, and health
//! - **middleware**: Request ID and access logging
//! - **extractors**: JSON and query extractors with API error rejections
//! - **responses**: Response body types
//! - **error**: HTTP error mapping
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fastbreak_api_rest::{create_app, ApiConfig, AppState};
//! use fastbreak_application::ServiceConfig;
//! use fastbreak_infrastructure::{DatabaseConfig, DatabasePool};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let pool = DatabasePool::new(&DatabaseConfig::default()).await?;
//! pool.ensure_schema().await?;
//!
//! let state = AppState::new(ApiConfig::default(), pool, ServiceConfig::default());
//! let app = create_app(state)?;
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod config;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod responses;
pub mod routes;
pub mod state;

// Re-export commonly used types
pub use app::{create_app, ApiDoc};
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use state::{AppState, LeaderboardServiceTrait};
