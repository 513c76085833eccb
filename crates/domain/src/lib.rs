//! Fast Break Leaderboard Domain Types
//!
//! This crate provides the core domain model for the Fast Break leaderboard
//! service. It defines the persisted score entity, the leaderboard query and
//! page value types, the input rules shared by every entry point, and the
//! error taxonomy used across the workspace.
//!
//! ## Architecture
//!
//! - **identifiers**: Storage-assigned surrogate identifiers
//! - **score**: The append-only score record and its leaderboard ordering
//! - **leaderboard**: Query resolution (defaults, limit clamping) and result pages
//! - **validation**: Field rules for player ids and game types
//! - **errors**: Validation and storage error types
//!
//! ## Usage
//!
//! ```rust
//! use fastbreak_domain::leaderboard::{LeaderboardPolicy, LeaderboardQuery};
//!
//! let policy = LeaderboardPolicy::default();
//! let query = LeaderboardQuery::resolve(None, Some(500), &policy).unwrap();
//!
//! assert_eq!(query.game_type, "fast_break");
//! assert_eq!(query.limit, 100);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod identifiers;
pub mod leaderboard;
pub mod score;
pub mod validation;

// Re-export commonly used types
pub use errors::{AppError, AppResult, StorageError, ValidationError};
pub use identifiers::ScoreId;
pub use leaderboard::{LeaderboardPage, LeaderboardPolicy, LeaderboardQuery};
pub use score::{NewScore, Score};
