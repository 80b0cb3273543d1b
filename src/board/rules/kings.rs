use super::MoveVerdict;
use crate::board::targets::KING_TARGETS;
use crate::board::{CastlingSide, Color, KingRights, Occupancy, Square};

pub(super) fn attempt(rights: KingRights, from: Square, to: Square) -> MoveVerdict {
    let dr = from.row().abs_diff(to.row());
    let dc = from.col().abs_diff(to.col());
    if dr <= 1 && dc <= 1 {
        return MoveVerdict::Normal;
    }
    if dr == 0 && dc == 2 {
        let side = if to.col() > from.col() {
            CastlingSide::Kingside
        } else {
            CastlingSide::Queenside
        };
        if rights.has(side) {
            return MoveVerdict::MaybeCastle(side);
        }
    }
    MoveVerdict::Illegal
}

pub(super) fn destinations(color: Color, from: Square, occ: &Occupancy) -> Vec<Square> {
    KING_TARGETS[from.as_index()]
        .iter()
        .copied()
        .filter(|&sq| occ.color_at(sq) != Some(color))
        .collect()
}
