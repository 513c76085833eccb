//! Strongly-typed identifiers for the leaderboard domain.
//!
//! Score identifiers are surrogate keys handed out by the storage engine on
//! insert. Wrapping them keeps them from being mixed up with score values,
//! which are also plain integers.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Unique identifier of a persisted score, assigned by storage on creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreId(i64);

impl ScoreId {
    /// Wrap a raw storage row id
    #[inline]
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the raw storage row id
    #[inline]
    pub fn get(self) -> i64 {
        self.0
    }
}

impl Display for ScoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ScoreId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl From<ScoreId> for i64 {
    fn from(id: ScoreId) -> Self {
        id.0
    }
}

impl std::str::FromStr for ScoreId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_id_serializes_as_plain_integer() {
        let id = ScoreId::new(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");

        let parsed: ScoreId = serde_json::from_str("7").unwrap();
        assert_eq!(parsed.get(), 7);
    }

    #[test]
    fn test_score_id_parse() {
        assert_eq!("15".parse::<ScoreId>().unwrap(), ScoreId::from(15));
        assert!("abc".parse::<ScoreId>().is_err());
    }
}
