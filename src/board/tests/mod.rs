//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `rules.rs` - Movement rules and legal destination counts
//! - `castling.rs` - Castling legality, one condition at a time
//! - `en_passant.rs` - En passant timing and adjacency
//! - `draw.rs` - Draw detection (fifty-move, repetition, stalemate)
//! - `edge_cases.rs` - Special positions, pins, promotion
//! - `proptest.rs` - Property-based tests


use crate::board::{Board, BoardBuilder, Color, MoveOutcome, PieceKind, RuleError, Square};

pub(super) fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}

/// Play `from`-`to` for `color`, as a select followed by a move.
pub(super) fn play(
    board: &mut Board,
    from: &str,
    to: &str,
    color: Color,
) -> Result<MoveOutcome, RuleError> {
    let from = board.select(sq(from), color)?;
    board.move_selected_to(from, sq(to), color)
}

/// Kings on their home squares plus the given pieces.
pub(super) fn kings_and(pieces: &[(&str, Color, PieceKind)]) -> BoardBuilder {
    pieces.iter().fold(
        BoardBuilder::new()
            .piece(sq("e1"), Color::White, PieceKind::King)
            .piece(sq("e8"), Color::Black, PieceKind::King),
        |builder, &(name, color, kind)| builder.piece(sq(name), color, kind),
    )
}
