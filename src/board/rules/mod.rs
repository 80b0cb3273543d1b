//! Per-piece movement rules.
//!
//! Everything here ignores check: a verdict or destination list describes
//! what the piece's movement shape and blocking allow, nothing more. Whether
//! the move exposes the mover's king is decided by the validator.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{CastlingSide, Occupancy, Piece, Square};

pub(crate) use sliders::straight_path_clear;
use sliders::diagonal_path_clear;

/// Result of asking a piece whether it may move to a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveVerdict {
    /// An ordinary move or capture
    Normal,
    /// A pawn reached the far row and must be promoted
    PromotionRequired,
    /// The first move of a rook that started in a corner
    RookFirstMove(CastlingSide),
    /// A pawn advanced two squares from its starting row
    DoubleAdvance,
    /// A pawn stepped diagonally onto an empty square; only en passant can allow it
    MaybeEnPassant,
    /// A king stepped two columns along its row; only castling can allow it
    MaybeCastle(CastlingSide),
    /// The piece cannot move there
    Illegal,
}

impl MoveVerdict {
    #[inline]
    #[must_use]
    pub const fn is_legal(self) -> bool {
        !matches!(self, MoveVerdict::Illegal)
    }
}

/// Ask `piece`, standing on `from`, whether it may move to `to`.
///
/// Moves onto a friendly piece, and null moves, are always illegal.
#[must_use]
pub fn attempt_move(piece: Piece, from: Square, to: Square, occ: &Occupancy) -> MoveVerdict {
    if from == to {
        return MoveVerdict::Illegal;
    }
    let color = piece.color();
    let is_capture = match occ.color_at(to) {
        Some(c) if c == color => return MoveVerdict::Illegal,
        Some(_) => true,
        None => false,
    };

    match piece {
        Piece::Pawn { color } => pawns::attempt(color, from, to, is_capture, occ),
        Piece::Knight { .. } => knights::attempt(from, to),
        Piece::Bishop { .. } => {
            verdict_if(diagonal_path_clear(from, to, occ), MoveVerdict::Normal)
        }
        Piece::Rook { home, .. } => {
            let verdict = match home {
                Some(side) => MoveVerdict::RookFirstMove(side),
                None => MoveVerdict::Normal,
            };
            verdict_if(straight_path_clear(from, to, occ), verdict)
        }
        Piece::Queen { .. } => verdict_if(
            straight_path_clear(from, to, occ) || diagonal_path_clear(from, to, occ),
            MoveVerdict::Normal,
        ),
        Piece::King { rights, .. } => kings::attempt(rights, from, to),
    }
}

/// Squares `piece` on `from` can reach by its movement rule alone.
///
/// Castling and en passant are not included.
#[must_use]
pub fn pseudo_legal_destinations(piece: Piece, from: Square, occ: &Occupancy) -> Vec<Square> {
    let color = piece.color();
    match piece {
        Piece::Pawn { .. } => pawns::destinations(color, from, occ),
        Piece::Knight { .. } => knights::destinations(color, from, occ),
        Piece::Bishop { .. } => sliders::destinations(color, from, occ, true, false),
        Piece::Rook { .. } => sliders::destinations(color, from, occ, false, true),
        Piece::Queen { .. } => sliders::destinations(color, from, occ, true, true),
        Piece::King { .. } => kings::destinations(color, from, occ),
    }
}

#[inline]
fn verdict_if(allowed: bool, verdict: MoveVerdict) -> MoveVerdict {
    if allowed {
        verdict
    } else {
        MoveVerdict::Illegal
    }
}
