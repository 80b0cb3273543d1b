//! A copyable view of which squares are occupied, and by what.
//!
//! The validator runs its "what if" simulations on an `Occupancy` taken by
//! value, so a speculative move can never reach the authoritative `Board`.

use super::{Color, PieceKind, Square};

/// Contents of one square as seen by the rules: color and kind, no piece state.
pub type Cell = Option<(Color, PieceKind)>;

/// 8x8 grid of cells indexed `[row][col]`.
pub type Grid = [[Cell; 8]; 8];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Occupancy(Grid);

impl Occupancy {
    #[must_use]
    pub const fn empty() -> Self {
        Occupancy([[None; 8]; 8])
    }

    #[must_use]
    pub const fn from_grid(grid: Grid) -> Self {
        Occupancy(grid)
    }

    #[inline]
    #[must_use]
    pub fn get(&self, square: Square) -> Cell {
        self.0[square.row()][square.col()]
    }

    #[inline]
    pub fn set(&mut self, square: Square, cell: Cell) {
        self.0[square.row()][square.col()] = cell;
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    #[inline]
    #[must_use]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.get(square).map(|(color, _)| color)
    }

    #[inline]
    #[must_use]
    pub fn holds(&self, square: Square, color: Color, kind: PieceKind) -> bool {
        self.get(square) == Some((color, kind))
    }

    /// Move whatever stands on `from` to `to`, replacing anything there.
    pub fn relocate(&mut self, from: Square, to: Square) {
        let cell = self.get(from);
        self.set(from, None);
        self.set(to, cell);
    }

    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| self.holds(sq, color, PieceKind::King))
    }

    #[must_use]
    pub const fn into_grid(self) -> Grid {
        self.0
    }
}

impl Default for Occupancy {
    fn default() -> Self {
        Occupancy::empty()
    }
}
