pub mod board;
pub mod game;

pub use board::{Board, Color, Piece, PieceKind, RuleError, Square};
pub use game::{Game, GameOption, GameResult, GameView, Outcome};
