//! Test fixtures for generating scores and submissions with realistic data.
//!
//! Fixed-value helpers keep scenario tests readable; the `fake` helpers and
//! proptest strategies cover the randomised cases.

use chrono::{DateTime, Duration, TimeZone, Utc};
use fake::{faker::internet::en::Username, Fake};
use fastbreak_application::SubmitScoreRequest;
use fastbreak_domain::{leaderboard::DEFAULT_GAME_TYPE, NewScore};
use proptest::prelude::*;

/// A fixed reference time so ordering tests are reproducible
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// A random, realistic-looking player id
pub fn random_player_id() -> String {
    Username().fake()
}

/// A submission request for the default game type
pub fn create_test_submission(player_id: &str, score: i64, stars: i64) -> SubmitScoreRequest {
    SubmitScoreRequest {
        player_id: player_id.to_string(),
        game_type: DEFAULT_GAME_TYPE.to_string(),
        score,
        stars,
    }
}

/// A submission request with a random player id and score
pub fn create_random_submission() -> SubmitScoreRequest {
    create_test_submission(&random_player_id(), (0i64..10_000).fake(), (0i64..=3).fake())
}

/// A score ready to persist, `offset_secs` after [`base_time`]
pub fn create_test_new_score(
    player_id: &str,
    game_type: &str,
    score: i64,
    offset_secs: i64,
) -> NewScore {
    NewScore {
        player_id: player_id.to_string(),
        game_type: game_type.to_string(),
        score,
        stars: 1,
        timestamp: base_time() + Duration::seconds(offset_secs),
    }
}

/// Strategy for scores spread over a couple of game types with frequent ties
pub fn arb_new_score() -> impl Strategy<Value = NewScore> {
    (
        "[a-z]{1,12}",
        prop_oneof![Just("fast_break"), Just("practice")],
        -5i64..50,
        0i64..=3,
        0i64..600,
    )
        .prop_map(|(player_id, game_type, score, stars, offset_secs)| NewScore {
            player_id,
            game_type: game_type.to_string(),
            score,
            stars,
            timestamp: base_time() + Duration::seconds(offset_secs),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_submission_is_for_default_game() {
        let request = create_random_submission();
        assert_eq!(request.game_type, "fast_break");
        assert!(!request.player_id.trim().is_empty());
        assert!((0..=3).contains(&request.stars));
    }

    #[test]
    fn test_new_score_offsets_from_base_time() {
        let score = create_test_new_score("p1", "fast_break", 10, 5);
        assert_eq!(score.timestamp - base_time(), Duration::seconds(5));
    }
}
