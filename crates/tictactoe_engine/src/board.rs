//! The 3x3 board.

use crate::position::{BOARD_SIZE, Coord};
use crate::types::{Cell, Player};
use serde::{Deserialize, Serialize};

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `[row][col]`.
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, at: Coord) -> Cell {
        self.cells[at.row()][at.col()]
    }

    /// Sets the cell at the given coordinate.
    pub fn set(&mut self, at: Coord, cell: Cell) {
        self.cells[at.row()][at.col()] = cell;
    }

    /// Returns a copy of this board with `player` marked at `at`.
    pub fn with_mark(&self, at: Coord, player: Player) -> Self {
        let mut next = *self;
        next.set(at, Cell::Occupied(player));
        next
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, at: Coord) -> bool {
        self.get(at).is_empty()
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Coord> {
        Coord::ALL
            .iter()
            .copied()
            .filter(|&at| self.is_empty(at))
            .collect()
    }

    /// Number of cells marked by `player`.
    pub fn count(&self, player: Player) -> usize {
        Coord::ALL
            .iter()
            .filter(|&&at| self.get(at) == Cell::Occupied(player))
            .count()
    }

    /// Number of non-empty cells.
    pub fn occupied(&self) -> usize {
        Coord::ALL.iter().filter(|&&at| !self.is_empty(at)).count()
    }

    /// Returns all cells, indexed `[row][col]`.
    pub fn cells(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Parses a board from 9 row-major characters: `X`, `O`, or `.` for empty.
    ///
    /// Whitespace is ignored, so boards can be written one row per line.
    pub fn parse(layout: &str) -> Option<Self> {
        let marks: Vec<char> = layout.chars().filter(|c| !c.is_whitespace()).collect();
        if marks.len() != Coord::ALL.len() {
            return None;
        }
        let mut board = Self::new();
        for (at, mark) in Coord::ALL.iter().zip(marks) {
            let cell = match mark {
                'X' | 'x' => Cell::Occupied(Player::X),
                'O' | 'o' => Cell::Occupied(Player::O),
                '.' | '-' | '_' => Cell::Empty,
                _ => return None,
            };
            board.set(*at, cell);
        }
        Some(board)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let symbol = match cell {
                    Cell::Empty => '.',
                    Cell::Occupied(Player::X) => 'X',
                    Cell::Occupied(Player::O) => 'O',
                };
                write!(f, "{}", symbol)?;
                if c < BOARD_SIZE - 1 {
                    write!(f, "|")?;
                }
            }
            if r < BOARD_SIZE - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
