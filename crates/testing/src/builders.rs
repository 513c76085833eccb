//! Fluent builder pattern for constructing test data.

use fastbreak_application::SubmitScoreRequest;
use fastbreak_domain::leaderboard::DEFAULT_GAME_TYPE;

/// Builder for score submission requests
#[derive(Clone)]
pub struct SubmitScoreRequestBuilder {
    player_id: String,
    game_type: String,
    score: i64,
    stars: i64,
}

impl SubmitScoreRequestBuilder {
    pub fn new() -> Self {
        Self {
            player_id: "player-1".to_string(),
            game_type: DEFAULT_GAME_TYPE.to_string(),
            score: 100,
            stars: 3,
        }
    }

    pub fn with_player_id(mut self, player_id: impl Into<String>) -> Self {
        self.player_id = player_id.into();
        self
    }

    pub fn with_game_type(mut self, game_type: impl Into<String>) -> Self {
        self.game_type = game_type.into();
        self
    }

    pub fn with_score(mut self, score: i64) -> Self {
        self.score = score;
        self
    }

    pub fn with_stars(mut self, stars: i64) -> Self {
        self.stars = stars;
        self
    }

    pub fn build(self) -> SubmitScoreRequest {
        SubmitScoreRequest {
            player_id: self.player_id,
            game_type: self.game_type,
            score: self.score,
            stars: self.stars,
        }
    }
}

impl Default for SubmitScoreRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides() {
        let request = SubmitScoreRequestBuilder::new()
            .with_player_id("p2")
            .with_game_type("practice")
            .with_score(-4)
            .with_stars(0)
            .build();

        assert_eq!(request.player_id, "p2");
        assert_eq!(request.game_type, "practice");
        assert_eq!(request.score, -4);
        assert_eq!(request.stars, 0);
    }
}
