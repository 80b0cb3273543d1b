use super::MoveVerdict;
use crate::board::targets::KNIGHT_TARGETS;
use crate::board::{Color, Occupancy, Square};

pub(super) fn attempt(from: Square, to: Square) -> MoveVerdict {
    let dr = from.row().abs_diff(to.row());
    let dc = from.col().abs_diff(to.col());
    if (dr == 1 && dc == 2) || (dr == 2 && dc == 1) {
        MoveVerdict::Normal
    } else {
        MoveVerdict::Illegal
    }
}

pub(super) fn destinations(color: Color, from: Square, occ: &Occupancy) -> Vec<Square> {
    KNIGHT_TARGETS[from.as_index()]
        .iter()
        .copied()
        .filter(|&sq| occ.color_at(sq) != Some(color))
        .collect()
}
