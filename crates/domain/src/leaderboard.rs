//! Leaderboard queries and result pages.
//!
//! A leaderboard is the set of scores sharing one `game_type`, ranked by
//! [`Score::leaderboard_order`]. Callers may omit both the game type and
//! the limit; [`LeaderboardQuery::resolve`] fills in the defaults from a
//! [`LeaderboardPolicy`], rejects non-positive limits and clamps large ones.

use crate::errors::ValidationError;
use crate::score::Score;
use crate::validation::check_game_type;
use serde::{Deserialize, Serialize};

/// Game type used when the caller does not name one
pub const DEFAULT_GAME_TYPE: &str = "fast_break";

/// Page size used when the caller does not give a limit
pub const DEFAULT_LIMIT: u32 = 10;

/// Upper bound applied to caller-supplied limits
pub const MAX_LIMIT: u32 = 100;

/// Defaults and bounds applied when resolving leaderboard queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardPolicy {
    /// Game type used when the caller omits it
    pub default_game_type: String,

    /// Limit used when the caller omits it
    pub default_limit: u32,

    /// Largest limit honoured; larger requests are clamped
    pub max_limit: u32,
}

impl Default for LeaderboardPolicy {
    fn default() -> Self {
        Self {
            default_game_type: DEFAULT_GAME_TYPE.to_string(),
            default_limit: DEFAULT_LIMIT,
            max_limit: MAX_LIMIT,
        }
    }
}

/// A resolved leaderboard query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardQuery {
    /// Partition to read, matched exactly
    pub game_type: String,

    /// Maximum number of scores to return, always in `1..=max_limit`
    pub limit: u32,
}

impl LeaderboardQuery {
    /// Resolve caller input against a policy.
    ///
    /// - A missing game type falls back to the policy default; a present one
    ///   must pass the game type field rules.
    /// - A missing limit falls back to the policy default, a limit `<= 0` is
    ///   rejected, and a limit above `max_limit` is clamped.
    pub fn resolve(
        game_type: Option<String>,
        limit: Option<i64>,
        policy: &LeaderboardPolicy,
    ) -> Result<Self, ValidationError> {
        let game_type = match game_type {
            Some(game_type) => {
                check_game_type(&game_type)?;
                game_type
            }
            None => policy.default_game_type.clone(),
        };

        let limit = match limit {
            None => policy.default_limit.min(policy.max_limit),
            Some(requested) if requested <= 0 => {
                return Err(ValidationError::InvalidLimit(requested));
            }
            Some(requested) => requested.min(i64::from(policy.max_limit)) as u32,
        };

        Ok(Self { game_type, limit })
    }
}

/// One page of a leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardPage {
    /// Top scores in leaderboard order, at most `limit` of them
    pub scores: Vec<Score>,

    /// Number of scores in the whole partition, independent of the limit
    pub total: u64,
}

impl LeaderboardPage {
    /// Build a page from every score in a partition.
    ///
    /// Sorts into leaderboard order and truncates to the query limit while
    /// keeping the full partition size as the total.
    pub fn from_partition(mut partition: Vec<Score>, query: &LeaderboardQuery) -> Self {
        let total = partition.len() as u64;
        partition.sort_by(Score::leaderboard_order);
        partition.truncate(query.limit as usize);

        Self {
            scores: partition,
            total,
        }
    }
}
