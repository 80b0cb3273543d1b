use crate::board::targets::{DIAGONAL_DIRECTIONS, STRAIGHT_DIRECTIONS};
use crate::board::{Color, Occupancy, Square};

/// Same row or column, with every square strictly between empty.
pub(crate) fn straight_path_clear(from: Square, to: Square, occ: &Occupancy) -> bool {
    if from.row() != to.row() && from.col() != to.col() {
        return false;
    }
    path_clear(from, to, occ)
}

/// Same diagonal, with every square strictly between empty.
pub(crate) fn diagonal_path_clear(from: Square, to: Square, occ: &Occupancy) -> bool {
    if from.row().abs_diff(to.row()) != from.col().abs_diff(to.col()) {
        return false;
    }
    path_clear(from, to, occ)
}

fn path_clear(from: Square, to: Square, occ: &Occupancy) -> bool {
    if from == to {
        return false;
    }
    let dr = (to.row() as isize - from.row() as isize).signum();
    let dc = (to.col() as isize - from.col() as isize).signum();
    let mut current = from.offset(dr, dc);
    while let Some(sq) = current {
        if sq == to {
            return true;
        }
        if !occ.is_empty(sq) {
            return false;
        }
        current = sq.offset(dr, dc);
    }
    false
}

/// Walk each ray until the board edge or the first occupied square,
/// which is included when it holds an enemy piece.
pub(super) fn destinations(
    color: Color,
    from: Square,
    occ: &Occupancy,
    diagonals: bool,
    straights: bool,
) -> Vec<Square> {
    let mut directions: Vec<(isize, isize)> = Vec::with_capacity(8);
    if straights {
        directions.extend_from_slice(&STRAIGHT_DIRECTIONS);
    }
    if diagonals {
        directions.extend_from_slice(&DIAGONAL_DIRECTIONS);
    }

    let mut targets = Vec::new();
    for (dr, dc) in directions {
        let mut current = from.offset(dr, dc);
        while let Some(sq) = current {
            match occ.color_at(sq) {
                None => targets.push(sq),
                Some(c) => {
                    if c != color {
                        targets.push(sq);
                    }
                    break;
                }
            }
            current = sq.offset(dr, dc);
        }
    }
    targets
}
