//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::{CastlingSide, KingRights};
use super::square::Square;

/// Chess piece kinds, without any per-piece state.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds in index order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Parse a piece kind from a character (p, n, b, r, q, k; any case)
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Convert piece kind to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Convert to a character with case based on color (uppercase for White)
    #[inline]
    #[must_use]
    pub fn to_display_char(self, color: Color) -> char {
        let c = self.to_char();
        if color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        }
    }

    /// Whether a pawn may be promoted to this kind
    #[inline]
    #[must_use]
    pub const fn is_promotion_choice(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Knight | PieceKind::Bishop
        )
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Promotion piece choices in order of typical preference (queen first)
pub const PROMOTION_PIECES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Back row for this color (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub const fn back_row(self) -> usize {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Pawn forward direction in rows (-1 for White, +1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> isize {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Pawn starting row (6 for White, 1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_start_row(self) -> usize {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Pawn promotion row (0 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub const fn promotion_row(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A piece standing on the board, with the state its kind needs.
///
/// Rooks remember which corner they started in until their first move;
/// kings carry their own castling flags.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Piece {
    Pawn {
        color: Color,
    },
    Knight {
        color: Color,
    },
    Bishop {
        color: Color,
    },
    Rook {
        color: Color,
        home: Option<CastlingSide>,
    },
    Queen {
        color: Color,
    },
    King {
        color: Color,
        rights: KingRights,
    },
}

impl Piece {
    /// A piece with no history: rooks have no home corner, kings no castling rights.
    ///
    /// This is the form a promoted piece takes.
    #[must_use]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        match kind {
            PieceKind::Pawn => Piece::Pawn { color },
            PieceKind::Knight => Piece::Knight { color },
            PieceKind::Bishop => Piece::Bishop { color },
            PieceKind::Rook => Piece::Rook { color, home: None },
            PieceKind::Queen => Piece::Queen { color },
            PieceKind::King => Piece::King {
                color,
                rights: KingRights::none(),
            },
        }
    }

    /// A piece placed at setup time on `square`.
    ///
    /// A rook on its own back-row corner remembers that corner; a king on its
    /// home square receives `rights`.
    #[must_use]
    pub fn placed(kind: PieceKind, color: Color, square: Square, rights: KingRights) -> Piece {
        let on_back_row = square.row() == color.back_row();
        match kind {
            PieceKind::Rook if on_back_row => Piece::Rook {
                color,
                home: CastlingSide::from_rook_col(square.col()),
            },
            PieceKind::King if on_back_row && square.col() == 4 => Piece::King { color, rights },
            _ => Piece::new(kind, color),
        }
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Piece::Pawn { color }
            | Piece::Knight { color }
            | Piece::Bishop { color }
            | Piece::Rook { color, .. }
            | Piece::Queen { color }
            | Piece::King { color, .. } => color,
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> PieceKind {
        match self {
            Piece::Pawn { .. } => PieceKind::Pawn,
            Piece::Knight { .. } => PieceKind::Knight,
            Piece::Bishop { .. } => PieceKind::Bishop,
            Piece::Rook { .. } => PieceKind::Rook,
            Piece::Queen { .. } => PieceKind::Queen,
            Piece::King { .. } => PieceKind::King,
        }
    }

    /// Castling flags, for kings only.
    #[must_use]
    pub const fn king_rights(self) -> Option<KingRights> {
        match self {
            Piece::King { rights, .. } => Some(rights),
            _ => None,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind().to_display_char(self.color()))
    }
}
