//! Command/query game engine.
//!
//! The presentation layer issues commands ([`GameEngine::start_game`],
//! [`GameEngine::new_game`], [`GameEngine::play`]) and re-reads the query
//! methods after each one to re-render. The engine raises no notifications.
//!
//! A human move and the computer's reply happen inside a single `play`
//! call: by the time it returns, the opponent has already moved and the
//! result has been checked for a win and for a draw.

use crate::action::{Move, MoveOrigin};
use crate::board::Board;
use crate::config::EngineConfig;
use crate::opponent::choose_move;
use crate::position::Coord;
use crate::rng::MoveRng;
use crate::rules::{WinningLine, is_draw, winning_line};
use crate::screen::Screen;
use crate::state::GameState;
use crate::types::{Cell, Outcome, Player};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe engine with a built-in computer opponent.
#[derive(Debug, Clone)]
pub struct GameEngine {
    state: GameState,
    config: EngineConfig,
    rng: MoveRng,
}

impl GameEngine {
    /// Creates an engine on the intro screen with default configuration.
    #[instrument]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates an engine on the intro screen.
    #[instrument]
    pub fn with_config(config: EngineConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => MoveRng::new(*seed),
            None => MoveRng::from_random(),
        };
        debug!(seed = rng.seed(), "Opponent RNG seeded");
        Self {
            state: GameState::new(),
            config,
            rng,
        }
    }

    /// Resumes play from an existing state, e.g. one built with
    /// [`GameState::from_board`] or deserialized from a snapshot.
    #[instrument(skip(state))]
    pub fn from_state(state: GameState, config: EngineConfig) -> Self {
        let mut engine = Self::with_config(config);
        engine.state = state;
        engine
    }

    // ─────────────────────────────────────────────────────────────
    //  Commands
    // ─────────────────────────────────────────────────────────────

    /// Resets to the intro screen with an empty board and X to move.
    #[instrument(skip(self))]
    pub fn initialize(&mut self) {
        debug!("Initializing game state");
        self.state = GameState::new();
    }

    /// Moves from the intro screen to the board. No-op on other screens.
    #[instrument(skip(self), fields(screen = %self.state.screen()))]
    pub fn start_game(&mut self) {
        if self.state.screen() != Screen::Intro {
            debug!("start_game ignored outside the intro screen");
            return;
        }
        info!("Game started");
        self.state.set_screen(Screen::Board);
    }

    /// Resets the game and goes straight to the board, skipping the intro.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.initialize();
        self.state.set_screen(Screen::Board);
        info!("New game started");
    }

    /// Plays the human's mark at (row, col), then the computer's reply.
    ///
    /// Ignored without any state change when the cell is occupied, the game
    /// is already decided, or the board screen is not active. Coordinates
    /// outside the board are a caller error; they are logged and ignored.
    #[instrument(skip(self), fields(player = ?self.state.current_player()))]
    pub fn play(&mut self, row: usize, col: usize) {
        let Some(at) = Coord::new(row, col) else {
            warn!(row, col, "Move outside the board ignored");
            return;
        };

        if self.state.screen() != Screen::Board {
            debug!(screen = %self.state.screen(), "Move ignored: board not active");
            return;
        }
        if self.state.is_decided() {
            debug!(%at, "Move ignored: game already decided");
            return;
        }
        if !self.state.board().is_empty(at) {
            debug!(%at, "Move ignored: cell occupied");
            return;
        }
        let Some(human) = self.state.current_player() else {
            debug!(%at, "Move ignored: game drawn");
            return;
        };

        if self.place(Move::new(human, at, MoveOrigin::Human)) {
            return;
        }

        let computer = human.opponent();
        self.state.set_current_player(Some(computer));

        let Some((reply, reason)) = choose_move(
            self.state.board(),
            computer,
            &mut self.rng,
            *self.config.fallback(),
        ) else {
            return;
        };

        if self.place(Move::new(computer, reply, MoveOrigin::Computer(reason))) {
            return;
        }
        self.state.set_current_player(Some(human));
    }

    /// Commits a move and settles a win or draw.
    ///
    /// Returns true if the game ended with this move.
    fn place(&mut self, mv: Move) -> bool {
        self.state.apply_move(mv);
        debug!(%mv, move_count = self.state.move_count(), "Move applied");

        if let Some(line) = winning_line(self.state.board(), mv.at, mv.player) {
            info!(winner = %mv.player, line = %line.kind(), "Game won");
            self.state.set_winning_line(line);
            self.state.set_screen(Screen::End);
            return true;
        }

        if is_draw(self.state.board()) {
            info!("Game drawn");
            self.state.set_current_player(None);
            self.state.set_screen(Screen::End);
            return true;
        }

        false
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// True while the intro screen is active.
    pub fn show_intro(&self) -> bool {
        self.state.screen() == Screen::Intro
    }

    /// True while the board screen is active.
    pub fn show_board(&self) -> bool {
        self.state.screen() == Screen::Board
    }

    /// True once the game has been won or drawn.
    pub fn show_end(&self) -> bool {
        self.state.screen() == Screen::End
    }

    /// The player to move, the winner after a win, or `None` after a draw.
    pub fn current_player(&self) -> Option<Player> {
        self.state.current_player()
    }

    /// True if X holds (row, col).
    pub fn is_player_x_at(&self, row: usize, col: usize) -> bool {
        self.cell_at(row, col) == Some(Cell::Occupied(Player::X))
    }

    /// True if O holds (row, col).
    pub fn is_player_o_at(&self, row: usize, col: usize) -> bool {
        self.cell_at(row, col) == Some(Cell::Occupied(Player::O))
    }

    /// True if (row, col) is part of the winning line.
    pub fn is_winning_cell_at(&self, row: usize, col: usize) -> bool {
        Coord::new(row, col).is_some_and(|at| self.state.is_winning_cell(at))
    }

    fn cell_at(&self, row: usize, col: usize) -> Option<Cell> {
        Coord::new(row, col).map(|at| self.state.board().get(at))
    }

    /// The active screen.
    pub fn screen(&self) -> Screen {
        self.state.screen()
    }

    /// Number of filled cells.
    pub fn move_count(&self) -> usize {
        self.state.move_count()
    }

    /// The winning line, if any.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.state.winning_line()
    }

    /// The board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// The full game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Moves committed since the game started.
    pub fn history(&self) -> &[Move] {
        self.state.history()
    }

    /// Win or draw, once the game has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        self.state.outcome()
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Seed of the opponent RNG, for reproducing a game.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
