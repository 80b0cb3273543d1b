//! Error types for board and game operations.
//!
//! Every rejection is recoverable: the position is left exactly as it was and
//! the same player is asked again.

use std::fmt;

use super::{CastlingSide, Color, PieceKind, Square};

/// Why an interaction with the board or game was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// The square is empty or holds a piece of the wrong color
    InvalidSelection { square: Square },
    /// The move violates the piece's movement rule
    IllegalMove { from: Square, to: Square },
    /// The move would leave the mover's own king in check
    LeavesKingInCheck { from: Square, to: Square },
    /// Castling is not currently permitted on this side
    InvalidCastling { side: CastlingSide },
    /// En passant capture onto this square is not currently permitted
    InvalidEnPassant { square: Square },
    /// Pawns may only become a queen, rook, knight or bishop
    InvalidPromotionChoice { kind: PieceKind },
    /// The option id is unknown or not accepted in the current state
    InvalidOption { id: u8 },
    /// A pawn is waiting to be promoted; squares cannot be selected
    PromotionPending { square: Square },
    /// The game has ended
    GameOver,
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleError::InvalidSelection { square } => {
                write!(f, "no piece of yours to select on {square}")
            }
            RuleError::IllegalMove { from, to } => {
                write!(f, "illegal move {from}-{to}")
            }
            RuleError::LeavesKingInCheck { from, to } => {
                write!(f, "move {from}-{to} would leave your king in check")
            }
            RuleError::InvalidCastling { side } => match side {
                CastlingSide::Kingside => write!(f, "cannot castle kingside"),
                CastlingSide::Queenside => write!(f, "cannot castle queenside"),
            },
            RuleError::InvalidEnPassant { square } => {
                write!(f, "en passant onto {square} is not allowed")
            }
            RuleError::InvalidPromotionChoice { kind } => {
                write!(f, "cannot promote a pawn to a {kind}")
            }
            RuleError::InvalidOption { id } => {
                write!(f, "option {id} is not available")
            }
            RuleError::PromotionPending { square } => {
                write!(f, "you must promote your pawn on {square} first")
            }
            RuleError::GameOver => write!(f, "the game is over"),
        }
    }
}

impl std::error::Error for RuleError {}

/// Error type for custom position construction failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// A color has no king on the board
    MissingKing { color: Color },
    /// A color has more than one king on the board
    DuplicateKing { color: Color },
    /// The en passant target is not a pawn standing on its double-advance row
    InvalidEnPassant { square: Square },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::MissingKing { color } => write!(f, "{color} has no king"),
            SetupError::DuplicateKing { color } => write!(f, "{color} has more than one king"),
            SetupError::InvalidEnPassant { square } => {
                write!(f, "no pawn on {square} can be captured en passant")
            }
        }
    }
}

impl std::error::Error for SetupError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}
