#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Draw thresholds for a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameConfig {
    /// Occurrences of one position that end the game in a draw
    pub repetition_limit: u32,
    /// Half-moves without a capture or pawn move that end the game in a draw
    pub halfmove_limit: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            repetition_limit: 3,
            halfmove_limit: 100,
        }
    }
}
