//! Keyboard navigation over the board.

use crossterm::event::KeyCode;
use tictactoe_engine::{BOARD_SIZE, Coord};

/// Moves the cursor one cell with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Coord, key: KeyCode) -> Coord {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(BOARD_SIZE - 1), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(BOARD_SIZE - 1)),
        _ => (row, col),
    };
    Coord::new(row, col).unwrap_or(cursor)
}

/// Maps digits 1-9 to cells in row-major order (1 is top-left).
pub fn digit_to_coord(c: char) -> Option<Coord> {
    let digit = c.to_digit(10)? as usize;
    digit.checked_sub(1).and_then(Coord::from_index)
}
