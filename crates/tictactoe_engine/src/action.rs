//! First-class move records.
//!
//! Every placement the engine commits is recorded as a [`Move`], so the
//! history can be inspected after the game and the opponent's reasoning
//! can be logged.

use crate::position::Coord;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Why the computer picked its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum MoveReason {
    /// Completes one of the computer's own lines.
    Win,
    /// Occupies the cell the human needed to complete a line.
    Block,
    /// No win or block existed; chosen at random.
    Random,
}

/// Who made a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOrigin {
    /// Played through [`GameEngine::play`](crate::GameEngine::play).
    Human,
    /// Played by the built-in opponent.
    Computer(MoveReason),
}

/// A player placing their mark at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Where the mark was placed.
    pub at: Coord,
    /// Who chose the move.
    pub origin: MoveOrigin,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.origin {
            MoveOrigin::Human => write!(f, "{} -> {}", self.player, self.at.label()),
            MoveOrigin::Computer(reason) => {
                write!(f, "{} -> {} ({})", self.player, self.at.label(), reason)
            }
        }
    }
}
