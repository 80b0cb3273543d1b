use serde::Deserialize;

use chess_rules::board::{BoardBuilder, CastlingSide, Color, PieceKind, Square};
use chess_rules::game::option::{BISHOP, DRAW, QUEEN, RESIGN};
use chess_rules::{Game, GameOption, GameResult, Outcome, RuleError};

#[derive(Deserialize)]
struct ScenarioSet {
    scenarios: Vec<Scenario>,
}

#[derive(Deserialize)]
struct Scenario {
    name: String,
    moves: String,
    result: String,
    text: String,
}

fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}

/// Play a coordinate move such as `e2e4` through the square entry point.
fn play(game: &mut Game, mv: &str) -> Outcome {
    let (from, to) = mv.split_at(2);
    let (from, to) = (sq(from), sq(to));
    let selected = game.select_or_move(from.row(), from.col());
    assert_eq!(selected, Outcome::Selected, "selecting {from} for {mv}");
    game.select_or_move(to.row(), to.col())
}

fn play_all(game: &mut Game, moves: &[&str]) {
    for mv in moves {
        assert!(!game.is_game_over(), "game ended before {mv}");
        let outcome = play(game, mv);
        assert_ne!(outcome, Outcome::Failure, "{mv} was refused");
    }
}

#[test]
fn scenario_suite() {
    let data = include_str!("data/scenarios.json");
    let set: ScenarioSet = serde_json::from_str(data).expect("invalid scenarios.json");

    for scenario in &set.scenarios {
        let mut game = Game::new();
        let moves: Vec<&str> = scenario.moves.split_whitespace().collect();
        play_all(&mut game, &moves);

        let matched = match (scenario.result.as_str(), game.result()) {
            ("checkmate", Some(GameResult::Checkmate { .. })) => true,
            ("stalemate", Some(GameResult::Stalemate)) => true,
            ("threefold", Some(GameResult::ThreefoldRepetition)) => true,
            ("none", None) => true,
            _ => false,
        };
        assert!(
            matched,
            "{}: expected {}, got {:?}",
            scenario.name,
            scenario.result,
            game.result()
        );
        assert!(
            game.view().status_text.ends_with(&scenario.text),
            "{}: status was {:?}",
            scenario.name,
            game.view().status_text
        );
    }
}

#[test]
fn fools_mate_leaves_white_without_moves() {
    let mut game = Game::new();
    play_all(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert!(game.board().is_in_check(Color::White));
    assert!(!game.board().any_legal_move_exists(Color::White));
    assert_eq!(
        game.result(),
        Some(GameResult::Checkmate {
            winner: Color::Black
        })
    );
    let view = game.view();
    assert!(view.game_over);
    assert!(view.status_text.starts_with("Game Over!"));
    assert_eq!(game.select_or_move(6, 0), Outcome::Failure);
}

#[test]
fn en_passant_captures_adjacent_double_advance() {
    let mut game = Game::new();
    play_all(&mut game, &["b2b4", "c7c5", "b4b5"]);
    assert_eq!(play(&mut game, "a7a5"), Outcome::PawnMoved);
    assert!(game.legal_destinations(3, 1).contains(&sq("a6")));

    // b5xc6 is not available: c5 did not advance on the latest move
    assert_eq!(play(&mut game, "b5c6"), Outcome::Failure);
    assert_eq!(game.side_to_move(), Color::White);

    assert_eq!(play(&mut game, "b5a6"), Outcome::Captured);
    let view = game.view();
    assert_eq!(view.at(sq("a5")), None);
    assert_eq!(view.at(sq("a6")), Some((Color::White, PieceKind::Pawn)));
    assert_eq!(game.halfmove_clock(), 0);

    play_all(&mut game, &["c5c4", "e2e4"]);
    assert!(!game.legal_destinations(4, 2).contains(&sq("d3")));
    assert_eq!(play(&mut game, "c4d3"), Outcome::Failure);
}

#[test]
fn threefold_repetition_ends_on_third_occurrence() {
    let mut game = Game::new();
    let shuffle = ["b1c3", "b8c6", "c3b1", "c6b8"];
    play_all(&mut game, &shuffle);
    assert_eq!(game.repetition_count(), 2);
    play_all(&mut game, &shuffle[..3]);
    assert!(!game.is_game_over());
    assert_eq!(play(&mut game, shuffle[3]), Outcome::Moved);
    assert_eq!(game.result(), Some(GameResult::ThreefoldRepetition));
    assert!(game
        .view()
        .status_text
        .to_lowercase()
        .contains("threefold repetition"));
}

const WHITE_ROUTE: [&str; 9] = ["b1", "a3", "b5", "c3", "d5", "e3", "f5", "g3", "h5"];
const BLACK_ROUTE: [&str; 9] = ["b8", "a6", "b4", "c6", "d4", "e6", "f4", "g6", "h4"];

/// Knights out along their routes and back again: 32 reversible half-moves.
fn knight_tour() -> Vec<String> {
    let mut moves = Vec::with_capacity(32);
    for i in 0..8 {
        moves.push(format!("{}{}", WHITE_ROUTE[i], WHITE_ROUTE[i + 1]));
        moves.push(format!("{}{}", BLACK_ROUTE[i], BLACK_ROUTE[i + 1]));
    }
    for i in (0..8).rev() {
        moves.push(format!("{}{}", WHITE_ROUTE[i + 1], WHITE_ROUTE[i]));
        moves.push(format!("{}{}", BLACK_ROUTE[i + 1], BLACK_ROUTE[i]));
    }
    moves
}

/// One hundred reversible half-moves, shifting the other knights between
/// tours so that no position occurs three times.
fn fifty_move_line(black_second_shift: &str) -> Vec<String> {
    let mut moves = knight_tour();
    moves.push("g1h3".to_string());
    moves.push("g8h6".to_string());
    moves.extend(knight_tour());
    moves.push("h3g5".to_string());
    moves.push(black_second_shift.to_string());
    moves.extend(knight_tour());
    moves
}

#[test]
fn fifty_move_rule_after_hundred_reversible_half_moves() {
    let line = fifty_move_line("h6g4");
    assert_eq!(line.len(), 100);
    let mut game = Game::new();
    for (i, mv) in line.iter().enumerate() {
        assert!(!game.is_game_over(), "game ended early at half-move {i}");
        assert_eq!(play(&mut game, mv), Outcome::Moved, "{mv}");
    }
    assert_eq!(game.halfmove_clock(), 100);
    assert_eq!(game.result(), Some(GameResult::FiftyMoveRule));
    assert!(game
        .view()
        .status_text
        .to_lowercase()
        .contains("fifty-move rule"));
}

#[test]
fn pawn_move_resets_fifty_move_count() {
    let line = fifty_move_line("f7f6");
    let mut game = Game::new();
    let strs: Vec<&str> = line.iter().map(String::as_str).collect();
    play_all(&mut game, &strs);
    assert!(!game.is_game_over());
    assert_eq!(game.halfmove_clock(), 32);
}

#[test]
fn capture_resets_fifty_move_count() {
    // Same opening as the fifty-move line, but the third stretch starts with
    // Ng5xh7 and follows with all but the last two moves of a tour.
    let mut line = fifty_move_line("h6g4");
    line.truncate(68);
    line.push("g5h7".to_string());
    line.push("g4h6".to_string());
    line.extend(knight_tour().into_iter().take(30));
    assert_eq!(line.len(), 100);

    let mut game = Game::new();
    for (i, mv) in line.iter().enumerate() {
        assert!(!game.is_game_over(), "game ended early at half-move {i}");
        let outcome = play(&mut game, mv);
        let expected = if mv == "g5h7" {
            Outcome::Captured
        } else {
            Outcome::Moved
        };
        assert_eq!(outcome, expected, "{mv}");
        if mv == "g5h7" {
            assert_eq!(game.halfmove_clock(), 0);
        }
    }
    assert!(!game.is_game_over());
    assert_eq!(game.halfmove_clock(), 31);
    assert!(game.halfmove_clock() < 100);
}

#[test]
fn promotion_flow() {
    let mut game = Game::new();
    play_all(
        &mut game,
        &["a2a4", "b7b5", "a4b5", "h7h5", "b5b6", "g7g5", "b6b7", "e7e6"],
    );
    assert_eq!(play(&mut game, "b7a8"), Outcome::PromotionRequired);
    assert!(game.is_promotion_pending());
    assert_eq!(game.side_to_move(), Color::White);
    assert_eq!(game.halfmove_clock(), 0);
    assert!(game.view().promotion_pending);
    assert!(game
        .view()
        .status_text
        .starts_with("Congratulations! Your pawn is being promoted."));

    // Squares and non-promotion options are refused while the choice is pending
    assert_eq!(game.select_or_move(6, 7), Outcome::Failure);
    assert_eq!(
        game.handle_square(sq("h2")),
        Err(RuleError::PromotionPending { square: sq("a8") })
    );
    assert!(game.legal_destinations(6, 7).is_empty());
    assert_eq!(
        game.choose_option_id(RESIGN),
        Err(RuleError::InvalidOption { id: RESIGN })
    );
    assert_eq!(
        game.choose_option(GameOption::Promote(PieceKind::King)),
        Err(RuleError::InvalidPromotionChoice {
            kind: PieceKind::King
        })
    );
    assert_eq!(
        game.choose_option_id(4),
        Err(RuleError::InvalidOption { id: 4 })
    );
    assert!(game.is_promotion_pending());

    game.choose_option_id(QUEEN).expect("queen promotion");
    assert!(!game.is_promotion_pending());
    assert_eq!(game.side_to_move(), Color::Black);
    assert_eq!(
        game.view().at(sq("a8")),
        Some((Color::White, PieceKind::Queen))
    );
    assert!(!game
        .board()
        .castling_rights()
        .has(Color::Black, CastlingSide::Queenside));
    assert_eq!(game.halfmove_clock(), 0);
}

#[test]
fn underpromotion_to_bishop() {
    let board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("e8"), Color::Black, PieceKind::King)
        .piece(sq("c2"), Color::Black, PieceKind::Pawn)
        .build()
        .expect("valid setup");
    let mut game = Game::from_board(board, Color::Black);
    assert_eq!(play(&mut game, "c2c1"), Outcome::PromotionRequired);
    assert_eq!(game.side_to_move(), Color::Black);
    game.choose_option_id(BISHOP).expect("bishop promotion");
    assert_eq!(
        game.view().at(sq("c1")),
        Some((Color::Black, PieceKind::Bishop))
    );
    assert_eq!(game.side_to_move(), Color::White);
}

#[test]
fn resignation_and_draw_options() {
    let mut game = Game::new();
    play(&mut game, "e2e4");
    game.choose_option_id(RESIGN).expect("resign");
    assert_eq!(
        game.result(),
        Some(GameResult::Resignation {
            resigned: Color::Black
        })
    );
    assert!(game.view().status_text.contains("Black has resigned."));
    assert_eq!(game.choose_option_id(DRAW), Err(RuleError::GameOver));

    let mut game = Game::new();
    game.choose_option_id(DRAW).expect("draw");
    assert_eq!(game.result(), Some(GameResult::AgreedDraw));
    assert!(game.view().status_text.to_lowercase().contains("draw"));
}

#[test]
fn selection_status_names_piece_and_square() {
    let mut game = Game::new();
    assert_eq!(game.select_or_move(6, 0), Outcome::Selected);
    let status = game.view().status_text;
    assert!(status.contains("You selected the Pawn on square a2"));
    assert!(status.contains("White, please select a square to move to."));

    assert_eq!(game.select_or_move(3, 0), Outcome::Failure);
    let status = game.view().status_text;
    assert!(status.starts_with("Error: invalid move"));
    assert!(status.contains("White, please select a piece to move."));
}

#[cfg(feature = "serde")]
#[test]
fn view_serializes_to_json() {
    let mut game = Game::new();
    play(&mut game, "e2e4");
    let json = serde_json::to_string(&game.view()).expect("serializable view");
    assert!(json.contains("\"side_to_move\":\"Black\""));
    let back: chess_rules::GameView = serde_json::from_str(&json).expect("deserializable view");
    assert_eq!(back, game.view());
}
