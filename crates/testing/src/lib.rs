//! Testing utilities for the Fast Break leaderboard service
//!
//! This crate provides:
//! - Fixtures and proptest strategies for scores and submissions
//! - A fluent builder for score submission requests
//! - An in-memory score repository that honours the storage contract
//!
//! # Examples
//!
//! ```
//! use fastbreak_testing::builders::SubmitScoreRequestBuilder;
//!
//! let request = SubmitScoreRequestBuilder::new()
//!     .with_player_id("p1")
//!     .with_score(100)
//!     .build();
//!
//! assert_eq!(request.game_type, "fast_break");
//! ```

pub mod builders;
pub mod fixtures;
pub mod mocks;

// Re-export commonly used types
pub use builders::*;
pub use fixtures::*;
pub use mocks::*;

// Re-export testing dependencies for convenience
pub use fake;
pub use proptest;
