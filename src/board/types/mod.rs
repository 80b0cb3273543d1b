//! Core chess types.
//!
//! This module contains the fundamental value types of the rules core:
//! - `Color`, `PieceKind` and `Piece` - pieces, with rook and king state
//! - `Square` - (row, col) board coordinates
//! - `CastlingSide`, `KingRights` and `CastlingRights` - castling state

mod castling;
mod piece;
mod square;

pub use castling::{CastlingRights, CastlingSide, KingRights};
pub use piece::{Color, Piece, PieceKind, PROMOTION_PIECES};
pub use square::Square;

