//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board); the engine calls them after
//! every placement and the opponent calls them on hypothetical boards.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LineKind, WinningLine, any_line, winning_line};
