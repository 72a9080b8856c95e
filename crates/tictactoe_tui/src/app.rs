//! Application state and key handling.

use crossterm::event::KeyCode;
use tictactoe_engine::{Coord, GameEngine, Outcome, Screen};
use tracing::{debug, info};

use crate::input::{digit_to_coord, move_cursor};

/// Main application state.
///
/// Holds the engine and the cursor. Everything shown on screen is read back
/// from the engine's queries after each key.
pub struct App {
    engine: GameEngine,
    cursor: Coord,
    should_quit: bool,
}

impl App {
    /// Creates a new application, resetting the engine to the intro screen.
    pub fn new(mut engine: GameEngine) -> Self {
        engine.initialize();
        Self::with_engine(engine)
    }

    /// Wraps an engine as-is, keeping whatever game it holds.
    pub fn with_engine(engine: GameEngine) -> Self {
        Self {
            engine,
            cursor: Coord::ALL[4],
            should_quit: false,
        }
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        if matches!(key, KeyCode::Char('q') | KeyCode::Esc) {
            info!("User quit");
            self.should_quit = true;
            return;
        }

        match self.engine.screen() {
            Screen::Intro => {
                if matches!(key, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.engine.start_game();
                }
            }
            Screen::Board => match key {
                KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    if let Some(at) = digit_to_coord(c) {
                        self.cursor = at;
                        self.play(at);
                    }
                }
                code => self.cursor = move_cursor(self.cursor, code),
            },
            Screen::End => {
                if matches!(key, KeyCode::Char('n') | KeyCode::Char('r') | KeyCode::Enter) {
                    self.engine.new_game();
                    self.cursor = Coord::ALL[4];
                }
            }
        }
    }

    fn play(&mut self, at: Coord) {
        debug!(%at, "Playing cell");
        self.engine.play(at.row(), at.col());
    }

    /// Status line for the current screen.
    pub fn status_message(&self) -> String {
        match self.engine.screen() {
            Screen::Intro => "Press Enter to start, 'q' to quit.".to_string(),
            Screen::Board => match self.engine.current_player() {
                Some(player) => format!(
                    "Player {}'s turn. Arrows + Enter or 1-9 to play.",
                    player
                ),
                None => String::new(),
            },
            Screen::End => match self.engine.outcome() {
                Some(Outcome::Winner(player)) => {
                    format!("Player {} wins! Press 'n' for a new game or 'q' to quit.", player)
                }
                _ => "Game ended in a draw! Press 'n' for a new game or 'q' to quit.".to_string(),
            },
        }
    }
}
