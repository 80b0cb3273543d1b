//! Attack detection and king-safety checks.
//!
//! Every function takes the occupancy by reference or by value and never
//! sees the authoritative board, so a simulated move cannot leak into it.

use super::rules::straight_path_clear;
use super::targets::{DIAGONAL_DIRECTIONS, KING_TARGETS, KNIGHT_TARGETS, STRAIGHT_DIRECTIONS};
use super::{CastlingSide, Color, KingRights, Occupancy, PieceKind, Square};

/// Whether any piece of `by` attacks `square`.
#[must_use]
pub fn is_square_attacked(square: Square, by: Color, occ: &Occupancy) -> bool {
    // A pawn of `by` attacks from one row behind the target, relative to its direction.
    let back = -by.pawn_direction();
    for dc in [-1, 1] {
        if let Some(src) = square.offset(back, dc) {
            if occ.holds(src, by, PieceKind::Pawn) {
                return true;
            }
        }
    }

    if KNIGHT_TARGETS[square.as_index()]
        .iter()
        .any(|&sq| occ.holds(sq, by, PieceKind::Knight))
    {
        return true;
    }

    if KING_TARGETS[square.as_index()]
        .iter()
        .any(|&sq| occ.holds(sq, by, PieceKind::King))
    {
        return true;
    }

    ray_hits(square, by, occ, &STRAIGHT_DIRECTIONS, PieceKind::Rook)
        || ray_hits(square, by, occ, &DIAGONAL_DIRECTIONS, PieceKind::Bishop)
}

fn ray_hits(
    square: Square,
    by: Color,
    occ: &Occupancy,
    directions: &[(isize, isize)],
    slider: PieceKind,
) -> bool {
    for &(dr, dc) in directions {
        let mut current = square.offset(dr, dc);
        while let Some(sq) = current {
            if let Some((color, kind)) = occ.get(sq) {
                if color == by && (kind == slider || kind == PieceKind::Queen) {
                    return true;
                }
                break;
            }
            current = sq.offset(dr, dc);
        }
    }
    false
}

/// Whether `mover`'s king is attacked in `occ`.
#[must_use]
pub fn is_in_check(mover: Color, occ: &Occupancy) -> bool {
    occ.find_king(mover)
        .is_some_and(|king| is_square_attacked(king, mover.opponent(), occ))
}

/// Simulate `from` -> `to` on a copy and report whether `mover`'s king is then attacked.
#[must_use]
pub fn does_move_end_in_check(from: Square, to: Square, mover: Color, mut occ: Occupancy) -> bool {
    occ.relocate(from, to);
    is_in_check(mover, &occ)
}

/// Castling checks, in order: right held, rook at home, path empty, king not
/// in check, transit square safe, landing square safe.
#[must_use]
pub fn is_castle_legal(
    king_sq: Square,
    rights: KingRights,
    side: CastlingSide,
    color: Color,
    occ: &Occupancy,
) -> bool {
    if !rights.has(side) {
        return false;
    }
    let row = color.back_row();
    if king_sq != Square(row, 4) {
        return false;
    }
    let rook_sq = Square(row, side.rook_col());
    if !occ.holds(rook_sq, color, PieceKind::Rook) {
        return false;
    }
    if !straight_path_clear(king_sq, rook_sq, occ) {
        return false;
    }

    let enemy = color.opponent();
    if is_square_attacked(king_sq, enemy, occ) {
        return false;
    }
    let (Some(transit), Some(landing)) = (
        king_sq.offset(0, side.direction()),
        king_sq.offset(0, 2 * side.direction()),
    ) else {
        return false;
    };
    if does_move_end_in_check(king_sq, transit, color, *occ) {
        return false;
    }
    !does_move_end_in_check(king_sq, landing, color, *occ)
}

/// En passant from `from` to `to`, given the pawn that last advanced two squares.
///
/// The captured pawn must be an enemy pawn on `from`'s row, one column away,
/// `to` must be the square it skipped, and the capture must not expose the
/// capturer's king.
#[must_use]
pub fn is_en_passant_legal(
    en_passant_target: Option<Square>,
    from: Square,
    to: Square,
    mut occ: Occupancy,
) -> bool {
    let Some(target) = en_passant_target else {
        return false;
    };
    let Some((color, PieceKind::Pawn)) = occ.get(from) else {
        return false;
    };
    if !occ.holds(target, color.opponent(), PieceKind::Pawn) {
        return false;
    }
    if target.row() != from.row() || target.col().abs_diff(from.col()) != 1 {
        return false;
    }
    if target.offset(color.pawn_direction(), 0) != Some(to) || !occ.is_empty(to) {
        return false;
    }

    occ.set(target, None);
    occ.relocate(from, to);
    !is_in_check(color, &occ)
}
