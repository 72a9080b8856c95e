//! Draw detection logic for tic-tac-toe.

use super::win::any_line;
use crate::board::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.empty_cells().is_empty()
}

/// A full board with no complete line is a draw.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && any_line(board).is_none()
}
