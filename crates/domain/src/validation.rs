//! Field rules for leaderboard input.
//!
//! Player ids and game types are opaque strings, but they are stored,
//! indexed and echoed back to clients, so they must be non-blank and
//! bounded in length.

use crate::errors::ValidationError;

/// Maximum length of a player id, in characters
pub const MAX_PLAYER_ID_LENGTH: usize = 128;

/// Maximum length of a game type, in characters
pub const MAX_GAME_TYPE_LENGTH: usize = 64;

/// Check a player id against the field rules
pub fn check_player_id(player_id: &str) -> Result<(), ValidationError> {
    check_text("player_id", player_id, MAX_PLAYER_ID_LENGTH)
}

/// Check a game type against the field rules
pub fn check_game_type(game_type: &str) -> Result<(), ValidationError> {
    check_text("game_type", game_type, MAX_GAME_TYPE_LENGTH)
}

fn check_text(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { field });
    }

    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::FieldTooLong { field, max, actual });
    }

    Ok(())
}
