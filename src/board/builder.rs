//! Fluent builder for constructing custom positions.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square::new(7, 4).unwrap(), Color::White, PieceKind::King)
//!     .piece(Square::new(0, 4).unwrap(), Color::Black, PieceKind::King)
//!     .piece(Square::new(7, 7).unwrap(), Color::White, PieceKind::Rook)
//!     .castle_kingside(Color::White)
//!     .build()
//!     .unwrap();
//! assert!(board.castling_rights().has(Color::White, chess_rules::board::CastlingSide::Kingside));
//! ```

use super::error::SetupError;
use super::{Board, CastlingRights, CastlingSide, Color, Piece, PieceKind, Square};

/// A fluent builder for constructing `Board` positions.
///
/// Rooks placed on their own corners count as unmoved. A king placed on its
/// home square receives the castling rights enabled on the builder.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, PieceKind)>,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// An empty board with no castling rights.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        let board = Board::new();
        for color in Color::BOTH {
            for (sq, piece) in board.pieces(color) {
                builder.pieces.push((sq, color, piece.kind()));
            }
        }
        builder.castling_rights = CastlingRights::all();
        builder
    }

    /// Place a piece, replacing anything already on the square.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, kind));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, CastlingSide::Kingside);
        self
    }

    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, CastlingSide::Queenside);
        self
    }

    #[must_use]
    pub const fn all_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::all();
        self
    }

    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::none();
        self
    }

    /// Mark the pawn on `square` as having just advanced two squares.
    #[must_use]
    pub const fn en_passant(mut self, square: Square) -> Self {
        self.en_passant_target = Some(square);
        self
    }

    /// Build the board, checking there is exactly one king per color.
    pub fn build(self) -> Result<Board, SetupError> {
        for color in Color::BOTH {
            let kings = self
                .pieces
                .iter()
                .filter(|&&(_, c, kind)| c == color && kind == PieceKind::King)
                .count();
            match kings {
                0 => return Err(SetupError::MissingKing { color }),
                1 => {}
                _ => return Err(SetupError::DuplicateKing { color }),
            }
        }

        let mut board = Board::empty();
        for &(square, color, kind) in &self.pieces {
            let rights = self.castling_rights.for_color(color);
            board.set_piece(square, Some(Piece::placed(kind, color, square, rights)));
        }

        if let Some(square) = self.en_passant_target {
            match board.piece_at(square) {
                Some(Piece::Pawn { color })
                    if square.row() as isize
                        == color.pawn_start_row() as isize + 2 * color.pawn_direction() => {}
                _ => return Err(SetupError::InvalidEnPassant { square }),
            }
            board.set_en_passant_target(Some(square));
        }

        Ok(board)
    }
}
