//! Tests for engine commands and screen transitions.

use tictactoe_engine::{
    Board, EngineConfig, GameEngine, GameState, MoveOrigin, Outcome, Player, Screen,
};

fn seeded() -> GameEngine {
    GameEngine::with_config(EngineConfig::new().with_seed(11))
}

fn resumed(layout: &str) -> GameEngine {
    let state = GameState::from_board(Board::parse(layout).expect("valid layout"))
        .expect("playable position");
    GameEngine::from_state(state, EngineConfig::new().with_seed(11))
}

#[test]
fn test_fresh_game() {
    let engine = seeded();

    assert!(engine.show_intro());
    assert!(!engine.show_board());
    assert!(!engine.show_end());
    assert_eq!(engine.current_player(), Some(Player::X));
    assert_eq!(engine.move_count(), 0);
    assert_eq!(engine.board().empty_cells().len(), 9);
    assert!(engine.winning_line().is_none());
    for row in 0..3 {
        for col in 0..3 {
            assert!(!engine.is_player_x_at(row, col));
            assert!(!engine.is_player_o_at(row, col));
            assert!(!engine.is_winning_cell_at(row, col));
        }
    }
}

#[test]
fn test_initialize_is_idempotent() {
    let mut engine = seeded();
    engine.new_game();
    engine.play(0, 0);

    engine.initialize();
    let once = engine.state().clone();
    engine.initialize();

    assert_eq!(engine.state(), &once);
    assert_eq!(once, GameState::new());
}

#[test]
fn test_start_game_shows_board() {
    let mut engine = seeded();
    engine.start_game();

    assert_eq!(engine.screen(), Screen::Board);
    assert_eq!(engine.move_count(), 0);

    // Redundant call leaves everything alone.
    engine.play(1, 1);
    let before = engine.state().clone();
    engine.start_game();
    assert_eq!(engine.state(), &before);
}

#[test]
fn test_play_ignored_on_intro_screen() {
    let mut engine = seeded();
    engine.play(0, 0);

    assert!(engine.show_intro());
    assert_eq!(engine.move_count(), 0);
}

#[test]
fn test_play_places_human_and_computer_marks() {
    let mut engine = seeded();
    engine.start_game();
    engine.play(1, 1);

    assert!(engine.is_player_x_at(1, 1));
    assert_eq!(engine.move_count(), 2);
    assert_eq!(engine.board().count(Player::O), 1);
    assert_eq!(engine.current_player(), Some(Player::X));
    assert!(engine.show_board());

    let history = engine.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].player, Player::X);
    assert_eq!(history[1].player, Player::O);
}

#[test]
fn test_occupied_cell_rejected() {
    let mut engine = seeded();
    engine.start_game();
    engine.play(1, 1);

    let before = engine.state().clone();
    engine.play(1, 1);
    assert_eq!(engine.state(), &before);

    let o_cell = engine.history()[1].at;
    engine.play(o_cell.row(), o_cell.col());
    assert_eq!(engine.state(), &before);
}

#[test]
fn test_out_of_range_ignored() {
    let mut engine = seeded();
    engine.start_game();
    let before = engine.state().clone();

    engine.play(3, 0);
    engine.play(0, 7);

    assert_eq!(engine.state(), &before);
    assert!(!engine.is_player_x_at(3, 0));
    assert!(!engine.is_winning_cell_at(5, 5));
}

#[test]
fn test_new_game_after_end_resets_to_board() {
    let mut engine = resumed("XX. OO. ...");
    engine.play(0, 2);
    assert!(engine.show_end());

    engine.new_game();

    assert!(engine.show_board());
    assert!(!engine.show_intro());
    assert_eq!(engine.move_count(), 0);
    assert_eq!(engine.current_player(), Some(Player::X));
    assert!(engine.winning_line().is_none());
    assert!(engine.outcome().is_none());
    assert!(engine.history().is_empty());
    assert_eq!(engine.board(), &Board::new());
}

#[test]
fn test_seeded_engines_play_identically() {
    let mut a = GameEngine::with_config(EngineConfig::new().with_seed(5));
    let mut b = GameEngine::with_config(EngineConfig::new().with_seed(5));
    a.new_game();
    b.new_game();

    for (row, col) in [(1, 1), (0, 0), (2, 2), (0, 2), (2, 0)] {
        a.play(row, col);
        b.play(row, col);
        assert_eq!(a.state(), b.state());
    }
    assert_eq!(a.seed(), 5);
}

#[test]
fn test_full_game_reaches_end() {
    // Keep taking the first empty cell until the game ends.
    for seed in 0..20 {
        let mut engine = GameEngine::with_config(EngineConfig::new().with_seed(seed));
        engine.new_game();
        while engine.show_board() {
            let at = engine.board().empty_cells()[0];
            engine.play(at.row(), at.col());
        }
        assert!(engine.show_end());
        match engine.outcome() {
            Some(Outcome::Winner(player)) => {
                assert_eq!(engine.current_player(), Some(player));
                assert!(engine.winning_line().is_some());
            }
            Some(Outcome::Draw) => {
                assert_eq!(engine.current_player(), None);
                assert_eq!(engine.move_count(), 9);
            }
            None => panic!("Ended game must have an outcome"),
        }
    }
}

#[test]
fn test_state_snapshot_serializes() {
    let mut engine = seeded();
    engine.new_game();
    engine.play(1, 1);

    let json = serde_json::to_value(engine.state()).expect("state serializes");
    assert_eq!(json["screen"], "Board");
    assert_eq!(json["current_player"], "X");
    assert_eq!(json["move_count"], 2);
    assert_eq!(json["history"].as_array().map(Vec::len), Some(2));

    let restored: GameState = serde_json::from_value(json).expect("state deserializes");
    assert_eq!(&restored, engine.state());
}

#[test]
fn test_snapshot_with_tampered_move_count_is_rejected() {
    let mut engine = seeded();
    engine.new_game();

    let mut json = serde_json::to_value(engine.state()).expect("state serializes");
    json["move_count"] = 8.into();

    let restored = serde_json::from_value::<GameState>(json);
    assert!(restored.is_err());
}

/// Searches the human's choices for a line of play that ends in a draw.
fn find_draw(engine: &GameEngine) -> Option<GameEngine> {
    if engine.show_end() {
        return (engine.outcome() == Some(Outcome::Draw)).then(|| engine.clone());
    }
    engine.board().empty_cells().into_iter().find_map(|at| {
        let mut next = engine.clone();
        next.play(at.row(), at.col());
        find_draw(&next)
    })
}

#[test]
fn test_fresh_game_played_to_a_draw() {
    let mut engine = seeded();
    engine.new_game();

    let drawn = find_draw(&engine).expect("a drawing line exists");
    assert!(drawn.show_end());
    assert_eq!(drawn.move_count(), 9);
    assert_eq!(drawn.history().len(), 9);
    assert_eq!(drawn.current_player(), None);
    assert!(drawn.winning_line().is_none());
    assert!(drawn.board().empty_cells().is_empty());

    // Replaying the human moves on the same seed reaches the same draw.
    let human_moves: Vec<_> = drawn
        .history()
        .iter()
        .filter(|mv| mv.origin == MoveOrigin::Human)
        .map(|mv| mv.at)
        .collect();
    assert_eq!(human_moves.len(), 5);
    for at in human_moves {
        engine.play(at.row(), at.col());
    }
    assert_eq!(engine.outcome(), Some(Outcome::Draw));
    assert_eq!(engine.state(), drawn.state());
}
