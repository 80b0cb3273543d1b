//! Comparable position snapshots for repetition detection.

use super::{Board, CastlingRights, Color, PieceKind, Square};

/// Piece layout, side to move, en passant availability and castling rights
/// at one moment of a game.
///
/// Equality is exact field-wise equality, and the derived ordering and hash
/// make it usable as a map key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// One code per square in index order; 0 is empty
    cells: [u8; 64],
    side_to_move: Color,
    en_passant: bool,
    castling: CastlingRights,
}

impl Position {
    pub(crate) fn capture(board: &Board, side_to_move: Color) -> Self {
        let mut cells = [0u8; 64];
        for sq in Square::all() {
            if let Some(piece) = board.piece_at(sq) {
                cells[sq.as_index()] = encode(piece.color(), piece.kind());
            }
        }
        Position {
            cells,
            side_to_move,
            en_passant: board.en_passant_available(side_to_move),
            castling: board.castling_rights(),
        }
    }

    /// Color and kind on `square`, decoded from the snapshot.
    #[must_use]
    pub fn cell(&self, square: Square) -> Option<(Color, PieceKind)> {
        decode(self.cells[square.as_index()])
    }

    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub const fn en_passant_available(&self) -> bool {
        self.en_passant
    }

    #[inline]
    #[must_use]
    pub const fn castling_rights(&self) -> CastlingRights {
        self.castling
    }
}

fn encode(color: Color, kind: PieceKind) -> u8 {
    let color_offset = match color {
        Color::White => 0,
        Color::Black => 6,
    };
    1 + kind as u8 + color_offset
}

fn decode(code: u8) -> Option<(Color, PieceKind)> {
    if code == 0 {
        return None;
    }
    let idx = (code - 1) as usize;
    let color = if idx < 6 { Color::White } else { Color::Black };
    PieceKind::ALL.get(idx % 6).map(|&kind| (color, kind))
}
