//! Castling sides and rights.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

pub(crate) const CASTLE_WHITE_K: u8 = 1 << 0;
pub(crate) const CASTLE_WHITE_Q: u8 = 1 << 1;
pub(crate) const CASTLE_BLACK_K: u8 = 1 << 2;
pub(crate) const CASTLE_BLACK_Q: u8 = 1 << 3;

/// All castling rights combined
pub(crate) const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// The wing a king castles towards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastlingSide {
    Kingside,
    Queenside,
}

impl CastlingSide {
    pub const BOTH: [CastlingSide; 2] = [CastlingSide::Kingside, CastlingSide::Queenside];

    /// Column of this side's rook in the initial position.
    #[inline]
    #[must_use]
    pub const fn rook_col(self) -> usize {
        match self {
            CastlingSide::Kingside => 7,
            CastlingSide::Queenside => 0,
        }
    }

    /// Column step of the king when castling towards this side.
    #[inline]
    #[must_use]
    pub const fn direction(self) -> isize {
        match self {
            CastlingSide::Kingside => 1,
            CastlingSide::Queenside => -1,
        }
    }

    /// The side a corner rook belongs to, if `col` is a corner column.
    #[must_use]
    pub const fn from_rook_col(col: usize) -> Option<CastlingSide> {
        match col {
            7 => Some(CastlingSide::Kingside),
            0 => Some(CastlingSide::Queenside),
            _ => None,
        }
    }
}

/// The two castling flags stored on a king.
///
/// Flags only ever go from `true` to `false`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct KingRights {
    kingside: bool,
    queenside: bool,
}

impl KingRights {
    #[must_use]
    pub const fn all() -> Self {
        KingRights {
            kingside: true,
            queenside: true,
        }
    }

    #[must_use]
    pub const fn none() -> Self {
        KingRights {
            kingside: false,
            queenside: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn has(self, side: CastlingSide) -> bool {
        match side {
            CastlingSide::Kingside => self.kingside,
            CastlingSide::Queenside => self.queenside,
        }
    }

    #[inline]
    pub fn revoke(&mut self, side: CastlingSide) {
        match side {
            CastlingSide::Kingside => self.kingside = false,
            CastlingSide::Queenside => self.queenside = false,
        }
    }
}

/// Castling rights of both colors represented as a bitmask
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, side: CastlingSide) -> bool {
        self.0 & Self::bit_for(color, side) != 0
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, color: Color, side: CastlingSide) {
        self.0 |= Self::bit_for(color, side);
    }

    /// The rights of one color, in the form stored on its king.
    #[must_use]
    pub const fn for_color(self, color: Color) -> KingRights {
        KingRights {
            kingside: self.has(color, CastlingSide::Kingside),
            queenside: self.has(color, CastlingSide::Queenside),
        }
    }

    #[inline]
    const fn bit_for(color: Color, side: CastlingSide) -> u8 {
        match (color, side) {
            (Color::White, CastlingSide::Kingside) => CASTLE_WHITE_K,
            (Color::White, CastlingSide::Queenside) => CASTLE_WHITE_Q,
            (Color::Black, CastlingSide::Kingside) => CASTLE_BLACK_K,
            (Color::Black, CastlingSide::Queenside) => CASTLE_BLACK_Q,
        }
    }
}
