use super::MoveVerdict;
use crate::board::{Color, Occupancy, Square};

/// Row a pawn of `color` lands on when capturing en passant.
#[inline]
pub(crate) fn en_passant_row(color: Color) -> usize {
    (color.promotion_row() as isize - 2 * color.pawn_direction()) as usize
}

pub(super) fn attempt(
    color: Color,
    from: Square,
    to: Square,
    is_capture: bool,
    occ: &Occupancy,
) -> MoveVerdict {
    let dir = color.pawn_direction();
    let dr = to.row() as isize - from.row() as isize;
    let dc = to.col().abs_diff(from.col());
    let promotes = to.row() == color.promotion_row();

    match (dc, is_capture) {
        (0, false) if dr == dir => {
            if promotes {
                MoveVerdict::PromotionRequired
            } else {
                MoveVerdict::Normal
            }
        }
        (0, false) if dr == 2 * dir && from.row() == color.pawn_start_row() => {
            match from.offset(dir, 0) {
                Some(middle) if occ.is_empty(middle) => MoveVerdict::DoubleAdvance,
                _ => MoveVerdict::Illegal,
            }
        }
        (1, true) if dr == dir => {
            if promotes {
                MoveVerdict::PromotionRequired
            } else {
                MoveVerdict::Normal
            }
        }
        (1, false) if dr == dir && to.row() == en_passant_row(color) => {
            MoveVerdict::MaybeEnPassant
        }
        _ => MoveVerdict::Illegal,
    }
}

pub(super) fn destinations(color: Color, from: Square, occ: &Occupancy) -> Vec<Square> {
    let dir = color.pawn_direction();
    let mut targets = Vec::with_capacity(4);

    if let Some(one) = from.offset(dir, 0) {
        if occ.is_empty(one) {
            targets.push(one);
            if from.row() == color.pawn_start_row() {
                if let Some(two) = one.offset(dir, 0) {
                    if occ.is_empty(two) {
                        targets.push(two);
                    }
                }
            }
        }
    }

    for dc in [-1, 1] {
        if let Some(diag) = from.offset(dir, dc) {
            if matches!(occ.color_at(diag), Some(c) if c != color) {
                targets.push(diag);
            }
        }
    }
    targets
}
