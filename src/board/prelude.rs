//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let game = Game::new();
//! assert_eq!(game.side_to_move(), Color::White);
//! ```

pub use super::{
    Board, BoardBuilder, CastlingRights, CastlingSide, Color, MoveOutcome, Piece, PieceKind,
    Position, RuleError, SetupError, Square, SquareError,
};
pub use crate::game::{Game, GameConfig, GameOption, GameResult, GameView, Outcome};
