use std::fmt;

use log::{debug, trace};

use super::error::RuleError;
use super::occupancy::{Grid, Occupancy};
use super::position::Position;
use super::rules::{self, MoveVerdict};
use super::validator;
use super::{CastlingRights, CastlingSide, Color, KingRights, Piece, PieceKind, Square};

/// What a completed board operation did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// A non-pawn piece moved to an empty square
    Moved,
    /// A pawn advanced one square
    PawnMoved,
    /// A piece was taken
    Captured,
    /// A pawn reached the far row and awaits `promote`
    PromotionRequired,
    /// A pawn advanced two squares and may be taken en passant next move
    DoubleAdvance,
    /// King and rook castled towards the given side
    Castled(CastlingSide),
    /// A pawn captured en passant
    EnPassant,
}

impl MoveOutcome {
    /// Captures and pawn moves restart the move-count draw clock.
    #[must_use]
    pub const fn resets_halfmove_clock(self) -> bool {
        !matches!(self, MoveOutcome::Moved | MoveOutcome::Castled(_))
    }
}

/// The authoritative grid of pieces.
///
/// The grid is the only record of where pieces stand; per-color views are
/// derived from it on demand. Selection state lives with the game, not here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
    /// The pawn that just advanced two squares, if the last move was one
    en_passant_target: Option<Square>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard starting position with all castling rights.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_row = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for color in Color::BOTH {
            for (col, &kind) in back_row.iter().enumerate() {
                let sq = Square(color.back_row(), col);
                board.set_piece(sq, Some(Piece::placed(kind, color, sq, KingRights::all())));
                board.set_piece(
                    Square(color.pawn_start_row(), col),
                    Some(Piece::new(PieceKind::Pawn, color)),
                );
            }
        }
        board
    }

    pub(crate) const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            en_passant_target: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row()][square.col()]
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row()][square.col()] = piece;
    }

    pub(crate) fn set_en_passant_target(&mut self, target: Option<Square>) {
        self.en_passant_target = target;
    }

    #[inline]
    #[must_use]
    pub const fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Pieces of one color with their squares, in square index order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some(piece) if piece.color() == color => Some((sq, piece)),
            _ => None,
        })
    }

    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, piece)| piece.kind() == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Castling rights of both colors as stored on the kings.
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        let mut rights = CastlingRights::none();
        for color in Color::BOTH {
            let Some(king_rights) = self
                .king_square(color)
                .and_then(|sq| self.piece_at(sq))
                .and_then(Piece::king_rights)
            else {
                continue;
            };
            for side in CastlingSide::BOTH {
                if king_rights.has(side) {
                    rights.set(color, side);
                }
            }
        }
        rights
    }

    /// The rules' view of the grid: colors and kinds only.
    #[must_use]
    pub fn occupancy(&self) -> Occupancy {
        let mut grid: Grid = [[None; 8]; 8];
        for (row, cells) in self.squares.iter().enumerate() {
            for (col, piece) in cells.iter().enumerate() {
                grid[row][col] = piece.map(|p| (p.color(), p.kind()));
            }
        }
        Occupancy::from_grid(grid)
    }

    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        validator::is_in_check(color, &self.occupancy())
    }

    /// Whether `color` could capture en passant right now.
    #[must_use]
    pub fn en_passant_available(&self, color: Color) -> bool {
        let Some(target) = self.en_passant_target else {
            return false;
        };
        let occ = self.occupancy();
        [-1, 1].into_iter().any(|dc| {
            let (Some(from), Some(to)) = (
                target.offset(0, dc),
                target.offset(color.pawn_direction(), 0),
            ) else {
                return false;
            };
            validator::is_en_passant_legal(Some(target), from, to, occ)
        })
    }

    /// Confirm `square` holds a piece of `color` that may be picked up.
    pub fn select(&self, square: Square, color: Color) -> Result<Square, RuleError> {
        match self.piece_at(square) {
            Some(piece) if piece.color() == color => {
                debug!("selected {} on {square}", piece.kind());
                Ok(square)
            }
            _ => {
                trace!("rejected selection of {square} for {color}");
                Err(RuleError::InvalidSelection { square })
            }
        }
    }

    /// Move the piece of `color` on `from` to `to`.
    ///
    /// Castling and en passant are recognised from the move's shape and
    /// completed by [`Board::castle`] and [`Board::capture_en_passant`].
    pub fn move_selected_to(
        &mut self,
        from: Square,
        to: Square,
        color: Color,
    ) -> Result<MoveOutcome, RuleError> {
        let piece = match self.piece_at(from) {
            Some(piece) if piece.color() == color => piece,
            _ => return Err(RuleError::InvalidSelection { square: from }),
        };
        let occ = self.occupancy();
        if occ.color_at(to) == Some(color) {
            return Err(RuleError::IllegalMove { from, to });
        }

        let verdict = rules::attempt_move(piece, from, to, &occ);
        match verdict {
            MoveVerdict::MaybeEnPassant => return self.capture_en_passant(from, to, color),
            MoveVerdict::MaybeCastle(side) => return self.castle(side, color),
            _ => {}
        }
        if validator::does_move_end_in_check(from, to, color, occ) {
            trace!("{from}-{to} leaves the {color} king in check");
            return Err(RuleError::LeavesKingInCheck { from, to });
        }
        if !verdict.is_legal() {
            trace!("{from}-{to} is not a legal {} move", piece.kind());
            return Err(RuleError::IllegalMove { from, to });
        }

        let captured = self.take(to);
        let moved = match (piece, verdict) {
            (Piece::Rook { color, .. }, MoveVerdict::RookFirstMove(side)) => {
                self.revoke_castling(color, side);
                Piece::Rook { color, home: None }
            }
            (Piece::King { color, .. }, _) => Piece::King {
                color,
                rights: KingRights::none(),
            },
            _ => piece,
        };
        self.set_piece(from, None);
        self.set_piece(to, Some(moved));

        self.en_passant_target = None;
        let outcome = match verdict {
            MoveVerdict::PromotionRequired => MoveOutcome::PromotionRequired,
            MoveVerdict::DoubleAdvance => {
                self.en_passant_target = Some(to);
                MoveOutcome::DoubleAdvance
            }
            _ if captured.is_some() => MoveOutcome::Captured,
            _ if piece.kind() == PieceKind::Pawn => MoveOutcome::PawnMoved,
            _ => MoveOutcome::Moved,
        };
        debug!("{} {from}-{to}: {outcome:?}", piece.kind());
        Ok(outcome)
    }

    /// Castle the king of `color` towards `side`.
    pub fn castle(&mut self, side: CastlingSide, color: Color) -> Result<MoveOutcome, RuleError> {
        let row = color.back_row();
        let king_sq = Square(row, 4);
        let rights = match self.piece_at(king_sq) {
            Some(Piece::King { color: c, rights }) if c == color => rights,
            _ => return Err(RuleError::InvalidCastling { side }),
        };
        if !validator::is_castle_legal(king_sq, rights, side, color, &self.occupancy()) {
            trace!("{color} may not castle {side:?}");
            return Err(RuleError::InvalidCastling { side });
        }

        let dir = side.direction();
        let king_to = Square(row, (4 + 2 * dir) as usize);
        let rook_to = Square(row, (4 + dir) as usize);
        self.set_piece(king_sq, None);
        self.set_piece(Square(row, side.rook_col()), None);
        self.set_piece(
            king_to,
            Some(Piece::King {
                color,
                rights: KingRights::none(),
            }),
        );
        self.set_piece(rook_to, Some(Piece::Rook { color, home: None }));
        self.en_passant_target = None;

        debug!("{color} castled {side:?}");
        Ok(MoveOutcome::Castled(side))
    }

    /// Capture en passant with the pawn on `from`, landing on `to`.
    pub fn capture_en_passant(
        &mut self,
        from: Square,
        to: Square,
        color: Color,
    ) -> Result<MoveOutcome, RuleError> {
        let pawn = match self.piece_at(from) {
            Some(piece @ Piece::Pawn { color: c }) if c == color => piece,
            _ => return Err(RuleError::InvalidEnPassant { square: to }),
        };
        if !validator::is_en_passant_legal(self.en_passant_target, from, to, self.occupancy()) {
            trace!("en passant {from}-{to} refused");
            return Err(RuleError::InvalidEnPassant { square: to });
        }
        if let Some(target) = self.en_passant_target.take() {
            self.set_piece(target, None);
        }
        self.set_piece(from, None);
        self.set_piece(to, Some(pawn));

        debug!("{color} captured en passant {from}-{to}");
        Ok(MoveOutcome::EnPassant)
    }

    /// Replace the pawn waiting on its promotion row at `square` with `kind`.
    pub fn promote(&mut self, square: Square, kind: PieceKind) -> Result<(), RuleError> {
        if !kind.is_promotion_choice() {
            return Err(RuleError::InvalidPromotionChoice { kind });
        }
        match self.piece_at(square) {
            Some(Piece::Pawn { color }) if square.row() == color.promotion_row() => {
                self.set_piece(square, Some(Piece::new(kind, color)));
                debug!("{color} pawn on {square} promoted to {kind}");
                Ok(())
            }
            _ => Err(RuleError::InvalidSelection { square }),
        }
    }

    /// Every square the piece of `color` on `square` may legally move to,
    /// castling and en passant included. Empty for other squares.
    #[must_use]
    pub fn legal_destinations(&self, square: Square, color: Color) -> Vec<Square> {
        let piece = match self.piece_at(square) {
            Some(piece) if piece.color() == color => piece,
            _ => return Vec::new(),
        };
        let occ = self.occupancy();
        let mut targets: Vec<Square> = rules::pseudo_legal_destinations(piece, square, &occ)
            .into_iter()
            .filter(|&to| !validator::does_move_end_in_check(square, to, color, occ))
            .collect();

        match piece {
            Piece::Pawn { .. } => {
                for dc in [-1, 1] {
                    if let Some(to) = square.offset(color.pawn_direction(), dc) {
                        if validator::is_en_passant_legal(self.en_passant_target, square, to, occ) {
                            targets.push(to);
                        }
                    }
                }
            }
            Piece::King { rights, .. } => {
                for side in CastlingSide::BOTH {
                    if validator::is_castle_legal(square, rights, side, color, &occ) {
                        if let Some(to) = square.offset(0, 2 * side.direction()) {
                            targets.push(to);
                        }
                    }
                }
            }
            _ => {}
        }
        targets
    }

    /// Whether `color` has at least one legal move.
    #[must_use]
    pub fn any_legal_move_exists(&self, color: Color) -> bool {
        self.pieces(color)
            .any(|(sq, _)| !self.legal_destinations(sq, color).is_empty())
    }

    /// Snapshot of the current position with `side_to_move` to play.
    #[must_use]
    pub fn snapshot(&self, side_to_move: Color) -> Position {
        Position::capture(self, side_to_move)
    }

    /// Remove and return the piece on `square`, updating castling rights if
    /// it was an unmoved corner rook.
    fn take(&mut self, square: Square) -> Option<Piece> {
        let captured = self.piece_at(square)?;
        self.set_piece(square, None);
        if let Piece::Rook {
            color,
            home: Some(side),
        } = captured
        {
            self.revoke_castling(color, side);
        }
        Some(captured)
    }

    fn revoke_castling(&mut self, color: Color, side: CastlingSide) {
        let Some(king_sq) = self.king_square(color) else {
            return;
        };
        if let Some(Piece::King { color, mut rights }) = self.piece_at(king_sq) {
            rights.revoke(side);
            self.set_piece(king_sq, Some(Piece::King { color, rights }));
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +-----------------+")?;
        for (row, cells) in self.squares.iter().enumerate() {
            write!(f, "{} |", 8 - row)?;
            for piece in cells {
                match piece {
                    Some(p) => write!(f, " {p}")?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f, " |")?;
        }
        writeln!(f, "  +-----------------+")?;
        write!(f, "    a b c d e f g h")
    }
}
