#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Color, Grid, PieceKind, Square};

/// Everything a presentation surface needs to draw the game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameView {
    /// Board contents indexed `[row][col]`
    pub grid: Grid,
    pub side_to_move: Color,
    pub promotion_pending: bool,
    pub game_over: bool,
    pub status_text: String,
}

impl GameView {
    #[must_use]
    pub fn at(&self, square: Square) -> Option<(Color, PieceKind)> {
        self.grid[square.row()][square.col()]
    }
}
