//! Score records.
//!
//! A score is a single immutable fact: a player reached a score and a star
//! count in a game type at a point in time. Scores are created exactly once
//! and never updated or deleted.

use crate::identifiers::ScoreId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A persisted score submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Storage-assigned identifier
    pub id: ScoreId,

    /// Opaque identifier of the submitting player
    pub player_id: String,

    /// Leaderboard partition key
    pub game_type: String,

    /// Ranking metric
    pub score: i64,

    /// Auxiliary metric, not used for ranking
    pub stars: i64,

    /// Creation time, assigned by the service at write time
    pub timestamp: DateTime<Utc>,
}

impl Score {
    /// Leaderboard ordering: highest score first, then earliest submission,
    /// then lowest id.
    ///
    /// Storage backends must produce the same order as this comparator.
    pub fn leaderboard_order(a: &Score, b: &Score) -> Ordering {
        b.score
            .cmp(&a.score)
            .then_with(|| a.timestamp.cmp(&b.timestamp))
            .then_with(|| a.id.cmp(&b.id))
    }

    /// Check whether this score belongs to the given leaderboard partition.
    ///
    /// Matching is exact and case-sensitive.
    pub fn in_partition(&self, game_type: &str) -> bool {
        self.game_type == game_type
    }
}

/// A score that has been accepted but not yet persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScore {
    /// Opaque identifier of the submitting player
    pub player_id: String,

    /// Leaderboard partition key
    pub game_type: String,

    /// Ranking metric
    pub score: i64,

    /// Auxiliary metric
    pub stars: i64,

    /// Creation time chosen by the service
    pub timestamp: DateTime<Utc>,
}

impl NewScore {
    /// Attach the storage-assigned id, producing the persisted record
    pub fn into_score(self, id: ScoreId) -> Score {
        Score {
            id,
            player_id: self.player_id,
            game_type: self.game_type,
            score: self.score,
            stars: self.stars,
            timestamp: self.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn score(id: i64, value: i64, offset_secs: i64) -> Score {
        let base = DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        Score {
            id: ScoreId::new(id),
            player_id: format!("p{id}"),
            game_type: "fast_break".to_string(),
            score: value,
            stars: 0,
            timestamp: base + Duration::seconds(offset_secs),
        }
    }

    #[test]
    fn test_higher_score_ranks_first() {
        let mut scores = vec![score(1, 50, 0), score(2, 100, 5), score(3, 75, 1)];
        scores.sort_by(Score::leaderboard_order);

        let values: Vec<i64> = scores.iter().map(|s| s.score).collect();
        assert_eq!(values, vec![100, 75, 50]);
    }

    #[test]
    fn test_ties_break_on_earliest_timestamp_then_id() {
        let mut scores = vec![score(3, 10, 5), score(2, 10, 0), score(1, 10, 5)];
        scores.sort_by(Score::leaderboard_order);

        let ids: Vec<i64> = scores.iter().map(|s| s.id.get()).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_partition_match_is_case_sensitive() {
        let s = score(1, 10, 0);
        assert!(s.in_partition("fast_break"));
        assert!(!s.in_partition("Fast_Break"));
        assert!(!s.in_partition("fast_break "));
    }

    #[test]
    fn test_new_score_into_score_keeps_fields() {
        let timestamp = Utc::now();
        let new_score = NewScore {
            player_id: "p1".to_string(),
            game_type: "fast_break".to_string(),
            score: 100,
            stars: 3,
            timestamp,
        };

        let persisted = new_score.into_score(ScoreId::new(9));
        assert_eq!(persisted.id, ScoreId::new(9));
        assert_eq!(persisted.player_id, "p1");
        assert_eq!(persisted.score, 100);
        assert_eq!(persisted.stars, 3);
        assert_eq!(persisted.timestamp, timestamp);
    }
}
