//! Chess board representation and rules.
//!
//! The board is an 8x8 grid of optional pieces. Row 0 is Black's back rank
//! (rank 8) and row 7 is White's, so White pawns move towards row 0.
//! Supports the full rule set: check, castling, en passant and promotion.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Color, MoveOutcome, Square};
//!
//! let mut board = Board::new();
//! let e2: Square = "e2".parse().unwrap();
//! let e4: Square = "e4".parse().unwrap();
//! assert_eq!(board.legal_destinations(e2, Color::White).len(), 2);
//! assert_eq!(board.move_selected_to(e2, e4, Color::White), Ok(MoveOutcome::DoubleAdvance));
//! ```

mod builder;
mod error;
pub(crate) mod history;
mod occupancy;
mod position;
pub mod prelude;
mod rules;
mod state;
mod targets;
mod types;
pub mod validator;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{RuleError, SetupError, SquareError};
pub use occupancy::{Cell, Grid, Occupancy};
pub use position::Position;
pub use rules::{attempt_move, pseudo_legal_destinations, MoveVerdict};
pub use state::{Board, MoveOutcome};
pub use types::{
    CastlingRights, CastlingSide, Color, KingRights, Piece, PieceKind, Square, PROMOTION_PIECES,
};
