//! Tic-tac-toe game engine with a simple computer opponent.
//!
//! The engine owns the whole game state and exposes a command/query
//! interface for a presentation layer:
//!
//! - **Commands**: [`GameEngine::initialize`], [`GameEngine::start_game`],
//!   [`GameEngine::new_game`], [`GameEngine::play`]
//! - **Queries**: [`GameEngine::show_intro`], [`GameEngine::show_board`],
//!   [`GameEngine::show_end`], [`GameEngine::current_player`],
//!   [`GameEngine::is_player_x_at`], [`GameEngine::is_player_o_at`],
//!   [`GameEngine::is_winning_cell_at`]
//!
//! The computer answers every accepted human move inside the same `play`
//! call, taking a winning cell if it has one, blocking the human's winning
//! cell otherwise, and playing at random as a last resort.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{EngineConfig, GameEngine, Player};
//!
//! let mut engine = GameEngine::with_config(EngineConfig::new().with_seed(7));
//! assert!(engine.show_intro());
//!
//! engine.start_game();
//! engine.play(1, 1);
//!
//! assert!(engine.is_player_x_at(1, 1));
//! assert_eq!(engine.move_count(), 2);
//! assert_eq!(engine.current_player(), Some(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod config;
mod engine;
mod opponent;
mod position;
mod rng;
pub mod rules;
mod screen;
mod state;
mod types;

pub use action::{Move, MoveOrigin, MoveReason};
pub use board::Board;
pub use config::{ConfigError, EngineConfig, FallbackSampling};
pub use engine::GameEngine;
pub use opponent::{choose_move, find_winning_cell};
pub use position::{BOARD_SIZE, Coord};
pub use rng::MoveRng;
pub use rules::{LineKind, WinningLine};
pub use screen::Screen;
pub use state::{BoardError, GameState};
pub use types::{Cell, Outcome, Player};
