//! Turn order, the select-then-move interaction, promotion and end-of-game
//! detection.
//!
//! # Example
//! ```
//! use chess_rules::game::{Game, Outcome};
//!
//! let mut game = Game::new();
//! assert_eq!(game.select_or_move(6, 4), Outcome::Selected); // e2
//! assert_eq!(game.select_or_move(4, 4), Outcome::PawnMoved); // e4
//! assert!(game.view().status_text.contains("Black"));
//! ```

mod config;
pub mod option;
mod status;
mod view;

use log::{debug, info, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::history::RepetitionTable;
use crate::board::{Board, Color, MoveOutcome, RuleError, Square};

pub use config::GameConfig;
pub use option::GameOption;
pub use status::{GameResult, Status};
pub use view::GameView;

/// Result of one square interaction, as reported to presentation surfaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    Failure,
    Selected,
    Moved,
    PawnMoved,
    Captured,
    PromotionRequired,
}

impl From<MoveOutcome> for Outcome {
    fn from(outcome: MoveOutcome) -> Self {
        match outcome {
            MoveOutcome::Moved | MoveOutcome::Castled(_) => Outcome::Moved,
            MoveOutcome::PawnMoved | MoveOutcome::DoubleAdvance => Outcome::PawnMoved,
            MoveOutcome::Captured | MoveOutcome::EnPassant => Outcome::Captured,
            MoveOutcome::PromotionRequired => Outcome::PromotionRequired,
        }
    }
}

/// Where the game is in its interaction cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the side to move to pick a piece
    Idle,
    /// A piece is picked up and waits for its destination
    PieceSelected(Square),
    /// A pawn stands on its promotion row and waits for a piece choice
    PromotionPending(Square),
    /// No further moves are accepted
    GameOver(GameResult),
}

/// One match: a board plus turn, draw and interaction bookkeeping.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    phase: Phase,
    repetitions: RepetitionTable,
    repetition_draw: bool,
    halfmove_clock: u32,
    status: Status,
    config: GameConfig,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A new game from the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        let mut game = Self::from_board(Board::new(), Color::White);
        game.config = config;
        game
    }

    /// Start from a custom position with `side_to_move` to play.
    ///
    /// The starting position counts as the first occurrence for repetition.
    /// A position that is already checkmate or stalemate starts out finished.
    #[must_use]
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        let mut repetitions = RepetitionTable::new();
        repetitions.increment(board.snapshot(side_to_move));
        let status = if side_to_move == Color::White {
            Status::NewGame
        } else {
            Status::AwaitingPiece { side: side_to_move }
        };
        let mut game = Game {
            board,
            side_to_move,
            phase: Phase::Idle,
            repetitions,
            repetition_draw: false,
            halfmove_clock: 0,
            status,
            config: GameConfig::default(),
        };
        if let Some(result) = game.evaluate_game_over() {
            game.end(result);
        }
        game
    }

    /// Abandon the current game and reset to the starting position.
    pub fn new_game(&mut self) {
        self.board = Board::new();
        self.side_to_move = Color::White;
        self.phase = Phase::Idle;
        self.repetitions.clear();
        self.repetitions.increment(self.board.snapshot(Color::White));
        self.repetition_draw = false;
        self.halfmove_clock = 0;
        self.status = Status::NewGame;
        info!("new game started");
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    /// Half-moves since the last capture or pawn move.
    #[inline]
    #[must_use]
    pub const fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// How often the current position has occurred, this occurrence included.
    #[must_use]
    pub fn repetition_count(&self) -> u32 {
        self.repetitions.get(&self.board.snapshot(self.side_to_move))
    }

    #[must_use]
    pub const fn result(&self) -> Option<GameResult> {
        match self.phase {
            Phase::GameOver(result) => Some(result),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    #[must_use]
    pub const fn is_promotion_pending(&self) -> bool {
        matches!(self.phase, Phase::PromotionPending(_))
    }

    /// Select a piece or move the selected one, depending on the phase.
    ///
    /// Out-of-range coordinates and every rejected interaction report
    /// [`Outcome::Failure`]; the reason is kept in the status.
    pub fn select_or_move(&mut self, row: usize, col: usize) -> Outcome {
        let Some(square) = Square::new(row, col) else {
            trace!("ignoring off-board square ({row}, {col})");
            return Outcome::Failure;
        };
        self.handle_square(square).unwrap_or(Outcome::Failure)
    }

    /// Typed form of [`Game::select_or_move`].
    pub fn handle_square(&mut self, square: Square) -> Result<Outcome, RuleError> {
        let side = self.side_to_move;
        match self.phase {
            Phase::GameOver(_) => Err(RuleError::GameOver),
            Phase::PromotionPending(pending) => {
                self.status = Status::MustPromote { side };
                Err(RuleError::PromotionPending { square: pending })
            }
            Phase::Idle => match self.board.select(square, side) {
                Ok(square) => {
                    self.phase = Phase::PieceSelected(square);
                    if let Some(piece) = self.board.piece_at(square) {
                        self.status = Status::Selected {
                            kind: piece.kind(),
                            square,
                            side,
                        };
                    }
                    Ok(Outcome::Selected)
                }
                Err(err) => {
                    self.status = Status::InvalidMove { side };
                    Err(err)
                }
            },
            Phase::PieceSelected(from) => {
                self.phase = Phase::Idle;
                match self.board.move_selected_to(from, square, side) {
                    Ok(outcome) => {
                        self.complete_move(outcome, square);
                        Ok(outcome.into())
                    }
                    Err(err) => {
                        debug!("{side} move {from}-{square} rejected: {err}");
                        self.status = Status::InvalidMove { side };
                        Err(err)
                    }
                }
            }
        }
    }

    /// Resign, agree a draw, or choose a promotion piece.
    pub fn choose_option(&mut self, option: GameOption) -> Result<(), RuleError> {
        let side = self.side_to_move;
        let invalid = RuleError::InvalidOption {
            id: option.id().unwrap_or(0),
        };
        match (self.phase, option) {
            (Phase::GameOver(_), _) => Err(RuleError::GameOver),
            (Phase::PromotionPending(square), GameOption::Promote(kind)) => {
                if let Err(err) = self.board.promote(square, kind) {
                    self.status = Status::InvalidPromotion { side };
                    return Err(err);
                }
                self.phase = Phase::Idle;
                self.pass_turn();
                Ok(())
            }
            (Phase::PromotionPending(_), _) | (_, GameOption::Promote(_)) => {
                trace!("option {option:?} not accepted in phase {:?}", self.phase);
                self.status = match self.phase {
                    Phase::PromotionPending(_) => Status::MustPromote { side },
                    _ => Status::InvalidOption { side },
                };
                Err(invalid)
            }
            (_, GameOption::Resign) => {
                self.end(GameResult::Resignation { resigned: side });
                Ok(())
            }
            (_, GameOption::AgreedDraw) => {
                self.end(GameResult::AgreedDraw);
                Ok(())
            }
        }
    }

    /// [`Game::choose_option`] by numeric id.
    pub fn choose_option_id(&mut self, id: u8) -> Result<(), RuleError> {
        match GameOption::try_from(id) {
            Ok(option) => self.choose_option(option),
            Err(err) => {
                let side = self.side_to_move;
                match self.phase {
                    Phase::GameOver(_) => {}
                    Phase::PromotionPending(_) => self.status = Status::InvalidPromotion { side },
                    _ => self.status = Status::InvalidOption { side },
                }
                Err(err)
            }
        }
    }

    /// Legal destinations of the side to move's piece on `(row, col)`.
    ///
    /// Empty for empty, enemy or off-board squares, and while a promotion
    /// is pending or the game is over.
    #[must_use]
    pub fn legal_destinations(&self, row: usize, col: usize) -> Vec<Square> {
        match (self.phase, Square::new(row, col)) {
            (Phase::Idle | Phase::PieceSelected(_), Some(square)) => {
                self.board.legal_destinations(square, self.side_to_move)
            }
            _ => Vec::new(),
        }
    }

    /// Snapshot for presentation surfaces.
    #[must_use]
    pub fn view(&self) -> GameView {
        GameView {
            grid: self.board.occupancy().into_grid(),
            side_to_move: self.side_to_move,
            promotion_pending: self.is_promotion_pending(),
            game_over: self.is_game_over(),
            status_text: self.status.to_string(),
        }
    }

    fn complete_move(&mut self, outcome: MoveOutcome, to: Square) {
        if outcome.resets_halfmove_clock() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if outcome == MoveOutcome::PromotionRequired {
            self.phase = Phase::PromotionPending(to);
            self.status = Status::Promoting {
                side: self.side_to_move,
            };
            return;
        }
        self.pass_turn();
    }

    /// Flip the side to move, record the new position, then look for an end.
    fn pass_turn(&mut self) {
        self.side_to_move = self.side_to_move.opponent();
        let count = self
            .repetitions
            .increment(self.board.snapshot(self.side_to_move));
        if count >= self.config.repetition_limit {
            self.repetition_draw = true;
        }
        match self.evaluate_game_over() {
            Some(result) => self.end(result),
            None => {
                self.status = Status::AwaitingPiece {
                    side: self.side_to_move,
                };
            }
        }
    }

    fn evaluate_game_over(&self) -> Option<GameResult> {
        let side = self.side_to_move;
        if self.board.any_legal_move_exists(side) {
            if self.repetition_draw {
                Some(GameResult::ThreefoldRepetition)
            } else if self.halfmove_clock >= self.config.halfmove_limit {
                Some(GameResult::FiftyMoveRule)
            } else {
                None
            }
        } else if self.board.is_in_check(side) {
            Some(GameResult::Checkmate {
                winner: side.opponent(),
            })
        } else {
            Some(GameResult::Stalemate)
        }
    }

    fn end(&mut self, result: GameResult) {
        info!("game over: {result}");
        self.phase = Phase::GameOver(result);
        self.status = Status::GameOver(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardBuilder, PieceKind};

    fn sq(name: &str) -> Square {
        name.parse().expect("valid square")
    }

    fn play(game: &mut Game, from: &str, to: &str) -> Outcome {
        let from = sq(from);
        let to = sq(to);
        assert_eq!(
            game.select_or_move(from.row(), from.col()),
            Outcome::Selected,
            "selecting {from}"
        );
        game.select_or_move(to.row(), to.col())
    }

    #[test]
    fn test_new_game_status() {
        let game = Game::new();
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.repetition_count(), 1);
        assert_eq!(game.view().status_text, "New Game\nWhite: Select a piece to move");
    }

    #[test]
    fn test_selecting_enemy_piece_fails() {
        let mut game = Game::new();
        assert_eq!(game.select_or_move(1, 0), Outcome::Failure);
        assert!(game.view().status_text.starts_with("Error: invalid move"));
        assert_eq!(game.phase(), Phase::Idle);
    }

    #[test]
    fn test_failed_move_clears_selection() {
        let mut game = Game::new();
        assert_eq!(play(&mut game, "a2", "a5"), Outcome::Failure);
        assert_eq!(game.phase(), Phase::Idle);
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(play(&mut game, "a2", "a4"), Outcome::PawnMoved);
        assert_eq!(game.side_to_move(), Color::Black);
    }

    #[test]
    fn test_off_board_coordinates_fail() {
        let mut game = Game::new();
        assert_eq!(game.select_or_move(8, 0), Outcome::Failure);
        assert!(game.legal_destinations(0, 9).is_empty());
    }

    #[test]
    fn test_halfmove_clock_counts_and_resets() {
        let mut game = Game::new();
        assert_eq!(play(&mut game, "g1", "f3"), Outcome::Moved);
        assert_eq!(game.halfmove_clock(), 1);
        assert_eq!(play(&mut game, "g8", "f6"), Outcome::Moved);
        assert_eq!(game.halfmove_clock(), 2);
        assert_eq!(play(&mut game, "e2", "e4"), Outcome::PawnMoved);
        assert_eq!(game.halfmove_clock(), 0);
        assert_eq!(play(&mut game, "f6", "e4"), Outcome::Captured);
        assert_eq!(game.halfmove_clock(), 0);
    }

    #[test]
    fn test_resign_and_draw_end_game() {
        let mut game = Game::new();
        game.choose_option(GameOption::Resign).expect("resign accepted");
        assert_eq!(
            game.result(),
            Some(GameResult::Resignation {
                resigned: Color::White
            })
        );
        assert_eq!(game.select_or_move(6, 0), Outcome::Failure);
        assert_eq!(
            game.choose_option(GameOption::AgreedDraw),
            Err(RuleError::GameOver)
        );

        let mut game = Game::new();
        game.choose_option_id(option::DRAW).expect("draw accepted");
        assert_eq!(game.result(), Some(GameResult::AgreedDraw));
        assert!(game.view().game_over);
    }

    #[test]
    fn test_promotion_choice_outside_promotion_is_invalid() {
        let mut game = Game::new();
        assert_eq!(
            game.choose_option(GameOption::Promote(PieceKind::Queen)),
            Err(RuleError::InvalidOption { id: option::QUEEN })
        );
        assert_eq!(
            game.choose_option_id(3),
            Err(RuleError::InvalidOption { id: 3 })
        );
        assert!(!game.is_game_over());
    }

    #[test]
    fn test_from_board_with_black_to_move() {
        let board = BoardBuilder::new()
            .piece(sq("e1"), Color::White, PieceKind::King)
            .piece(sq("e8"), Color::Black, PieceKind::King)
            .piece(sq("a7"), Color::Black, PieceKind::Rook)
            .build()
            .expect("valid setup");
        let mut game = Game::from_board(board, Color::Black);
        assert_eq!(play(&mut game, "a7", "a1"), Outcome::Moved);
        assert_eq!(game.side_to_move(), Color::White);
        assert!(game.board().is_in_check(Color::White));
        assert!(!game.is_game_over());
    }

    #[test]
    fn test_from_board_detects_finished_position() {
        let stalemate = BoardBuilder::new()
            .piece(sq("a8"), Color::Black, PieceKind::King)
            .piece(sq("b6"), Color::White, PieceKind::Queen)
            .piece(sq("h1"), Color::White, PieceKind::King)
            .build()
            .expect("valid setup");
        let mut game = Game::from_board(stalemate, Color::Black);
        assert_eq!(game.result(), Some(GameResult::Stalemate));
        assert!(game.view().game_over);
        assert_eq!(game.select_or_move(0, 0), Outcome::Failure);

        let mate = BoardBuilder::new()
            .piece(sq("h8"), Color::Black, PieceKind::King)
            .piece(sq("g7"), Color::White, PieceKind::Queen)
            .piece(sq("g6"), Color::White, PieceKind::King)
            .build()
            .expect("valid setup");
        let game = Game::from_board(mate, Color::Black);
        assert_eq!(
            game.result(),
            Some(GameResult::Checkmate {
                winner: Color::White
            })
        );
    }

    #[test]
    fn test_invalid_choice_during_promotion_keeps_promotion_prompt() {
        let board = BoardBuilder::new()
            .piece(sq("e1"), Color::White, PieceKind::King)
            .piece(sq("e8"), Color::Black, PieceKind::King)
            .piece(sq("a7"), Color::White, PieceKind::Pawn)
            .build()
            .expect("valid setup");
        let mut game = Game::from_board(board, Color::White);
        assert_eq!(play(&mut game, "a7", "a8"), Outcome::PromotionRequired);

        assert!(game.choose_option_id(4).is_err());
        assert_eq!(game.status(), Status::InvalidPromotion { side: Color::White });
        assert!(game.view().status_text.ends_with("promote your pawn to."));

        assert!(game.choose_option(GameOption::Promote(PieceKind::King)).is_err());
        assert_eq!(game.status(), Status::InvalidPromotion { side: Color::White });
        assert!(game.is_promotion_pending());

        game.choose_option_id(option::ROOK).expect("rook promotion");
        assert!(!game.is_promotion_pending());
    }

    #[test]
    fn test_with_config_lowers_limits() {
        let mut game = Game::with_config(GameConfig {
            repetition_limit: 2,
            halfmove_limit: 100,
        });
        play(&mut game, "g1", "f3");
        play(&mut game, "g8", "f6");
        play(&mut game, "f3", "g1");
        assert!(!game.is_game_over());
        play(&mut game, "f6", "g8");
        assert_eq!(game.result(), Some(GameResult::ThreefoldRepetition));
    }

    #[test]
    fn test_new_game_resets_everything() {
        let mut game = Game::new();
        play(&mut game, "e2", "e4");
        game.choose_option(GameOption::Resign).expect("resign accepted");
        game.new_game();
        assert!(!game.is_game_over());
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.repetition_count(), 1);
        assert_eq!(game.board(), &Board::new());
    }
}
