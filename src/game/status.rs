//! Game results and the status text shown to players.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Color, PieceKind, Square};

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameResult {
    Checkmate { winner: Color },
    Stalemate,
    ThreefoldRepetition,
    FiftyMoveRule,
    Resignation { resigned: Color },
    AgreedDraw,
}

impl GameResult {
    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameResult::Checkmate { winner } => Some(winner),
            GameResult::Resignation { resigned } => Some(resigned.opponent()),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_draw(self) -> bool {
        self.winner().is_none()
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Checkmate { winner } => write!(f, "{winner} wins by checkmate."),
            GameResult::Stalemate => write!(f, "The game ended in a stalemate."),
            GameResult::ThreefoldRepetition => {
                write!(f, "The game ended in a draw by the threefold repetition rule.")
            }
            GameResult::FiftyMoveRule => {
                write!(f, "The game ended in a draw by the fifty-move rule.")
            }
            GameResult::Resignation { resigned } => write!(f, "{resigned} has resigned."),
            GameResult::AgreedDraw => write!(f, "The game ended in a draw."),
        }
    }
}

/// What the players should be told after the last interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    NewGame,
    AwaitingPiece { side: Color },
    Selected { kind: PieceKind, square: Square, side: Color },
    InvalidMove { side: Color },
    MustPromote { side: Color },
    Promoting { side: Color },
    InvalidOption { side: Color },
    /// An unknown option, or a piece a pawn cannot become, while a promotion waits
    InvalidPromotion { side: Color },
    GameOver(GameResult),
}

impl Status {
    /// First line: what just happened.
    #[must_use]
    pub fn headline(&self) -> String {
        match self {
            Status::NewGame => "New Game".to_string(),
            Status::AwaitingPiece { .. } => String::new(),
            Status::Selected { kind, square, .. } => {
                format!("You selected the {kind} on square {square}")
            }
            Status::InvalidMove { .. } => "Error: invalid move".to_string(),
            Status::MustPromote { .. } => "Error: you must promote your pawn first".to_string(),
            Status::Promoting { .. } => "Congratulations! Your pawn is being promoted.".to_string(),
            Status::InvalidOption { .. } | Status::InvalidPromotion { .. } => {
                "Error: invalid selection. Please try again.".to_string()
            }
            Status::GameOver(_) => "Game Over!".to_string(),
        }
    }

    /// Second line: what the player should do next.
    #[must_use]
    pub fn prompt(&self) -> String {
        match self {
            Status::NewGame => "White: Select a piece to move".to_string(),
            Status::AwaitingPiece { side }
            | Status::InvalidMove { side }
            | Status::InvalidOption { side } => format!("{side}, please select a piece to move."),
            Status::Selected { side, .. } => format!("{side}, please select a square to move to."),
            Status::MustPromote { side }
            | Status::Promoting { side }
            | Status::InvalidPromotion { side } => {
                format!("{side}, please select a piece to promote your pawn to.")
            }
            Status::GameOver(result) => result.to_string(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headline = self.headline();
        if headline.is_empty() {
            f.write_str(&self.prompt())
        } else {
            write!(f, "{headline}\n{}", self.prompt())
        }
    }
}
