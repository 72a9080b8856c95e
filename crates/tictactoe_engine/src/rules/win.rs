//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::position::Coord;
use crate::types::{Cell, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which kind of line produced a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum LineKind {
    /// A full row.
    Row,
    /// A full column.
    Column,
    /// (0,0)-(1,1)-(2,2).
    MainDiagonal,
    /// (0,2)-(1,1)-(2,0).
    AntiDiagonal,
}

/// The three cells that formed a win, in line order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    kind: LineKind,
    cells: [Coord; 3],
}

impl WinningLine {
    /// The kind of line.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// The three coordinates of the line.
    pub fn cells(&self) -> [Coord; 3] {
        self.cells
    }

    /// Returns true if `at` is one of the three winning cells.
    pub fn contains(&self, at: Coord) -> bool {
        self.cells.contains(&at)
    }

    /// The player holding all three cells on `board`.
    ///
    /// `None` if the line is incomplete or is not one of the eight board lines.
    pub fn owner(&self, board: &Board) -> Option<Player> {
        if !all_lines().any(|line| line == *self) {
            return None;
        }
        board
            .get(self.cells[0])
            .player()
            .filter(|&player| owned_by(board, self, player))
    }
}

fn coord(row: usize, col: usize) -> Coord {
    Coord::ALL[row * 3 + col]
}

fn row_line(row: usize) -> WinningLine {
    WinningLine {
        kind: LineKind::Row,
        cells: [coord(row, 0), coord(row, 1), coord(row, 2)],
    }
}

fn column_line(col: usize) -> WinningLine {
    WinningLine {
        kind: LineKind::Column,
        cells: [coord(0, col), coord(1, col), coord(2, col)],
    }
}

const MAIN_DIAGONAL: WinningLine = WinningLine {
    kind: LineKind::MainDiagonal,
    cells: [Coord::ALL[0], Coord::ALL[4], Coord::ALL[8]],
};

const ANTI_DIAGONAL: WinningLine = WinningLine {
    kind: LineKind::AntiDiagonal,
    cells: [Coord::ALL[2], Coord::ALL[4], Coord::ALL[6]],
};

/// Rows, then columns, then the two diagonals.
fn all_lines() -> impl Iterator<Item = WinningLine> {
    (0..3)
        .map(row_line)
        .chain((0..3).map(column_line))
        .chain([MAIN_DIAGONAL, ANTI_DIAGONAL])
}

fn owned_by(board: &Board, line: &WinningLine, player: Player) -> bool {
    line.cells
        .iter()
        .all(|&at| board.get(at) == Cell::Occupied(player))
}

/// Checks whether `player` has a complete line through the move at `at`.
///
/// Candidates are checked in the order row, column, main diagonal,
/// anti-diagonal and the first complete one is returned. Both diagonals
/// are checked whether or not `at` lies on them.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, at: Coord, player: Player) -> Option<WinningLine> {
    [
        row_line(at.row()),
        column_line(at.col()),
        MAIN_DIAGONAL,
        ANTI_DIAGONAL,
    ]
    .into_iter()
    .find(|line| owned_by(board, line, player))
}

/// Scans all 8 lines for one owned entirely by a single player.
///
/// Rows come first, then columns, then the two diagonals.
pub fn any_line(board: &Board) -> Option<(Player, WinningLine)> {
    for line in all_lines() {
        if let Some(player) = board.get(line.cells[0]).player()
            && owned_by(board, &line, player)
        {
            return Some((player, line));
        }
    }
    None
}
