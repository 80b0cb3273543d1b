//! Non-square choices a player can make: resigning, agreeing a draw, or
//! picking a promotion piece.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{PieceKind, RuleError};

pub const RESIGN: u8 = 1;
pub const DRAW: u8 = 2;
pub const QUEEN: u8 = 5;
pub const ROOK: u8 = 6;
pub const KNIGHT: u8 = 7;
pub const BISHOP: u8 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameOption {
    /// The side to move resigns
    Resign,
    /// Both players agree to a draw
    AgreedDraw,
    /// Promote the waiting pawn
    Promote(PieceKind),
}

impl GameOption {
    /// Numeric id used by presentation surfaces.
    ///
    /// Promotion to a kind that is not a valid choice has no id.
    #[must_use]
    pub const fn id(self) -> Option<u8> {
        match self {
            GameOption::Resign => Some(RESIGN),
            GameOption::AgreedDraw => Some(DRAW),
            GameOption::Promote(PieceKind::Queen) => Some(QUEEN),
            GameOption::Promote(PieceKind::Rook) => Some(ROOK),
            GameOption::Promote(PieceKind::Knight) => Some(KNIGHT),
            GameOption::Promote(PieceKind::Bishop) => Some(BISHOP),
            GameOption::Promote(_) => None,
        }
    }
}

impl TryFrom<u8> for GameOption {
    type Error = RuleError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            RESIGN => Ok(GameOption::Resign),
            DRAW => Ok(GameOption::AgreedDraw),
            QUEEN => Ok(GameOption::Promote(PieceKind::Queen)),
            ROOK => Ok(GameOption::Promote(PieceKind::Rook)),
            KNIGHT => Ok(GameOption::Promote(PieceKind::Knight)),
            BISHOP => Ok(GameOption::Promote(PieceKind::Bishop)),
            _ => Err(RuleError::InvalidOption { id }),
        }
    }
}
