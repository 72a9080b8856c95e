//! The aggregate game state owned by the engine.

use crate::action::Move;
use crate::board::Board;
use crate::position::{BOARD_SIZE, Coord};
use crate::rules::{WinningLine, any_line, is_full};
use crate::screen::Screen;
use crate::types::{Cell, Outcome, Player};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Errors from building a state out of an arbitrary board.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// X must have as many marks as O, or exactly one more.
    #[display("Invalid mark count: {} X and {} O", x, o)]
    InvalidMarkCount {
        /// Number of X marks.
        x: usize,
        /// Number of O marks.
        o: usize,
    },

    /// The position already contains a complete line.
    #[display("Player {} already has a complete line", player)]
    AlreadyWon {
        /// Owner of the complete line.
        player: Player,
    },

    /// No empty cell is left to play.
    #[display("Board is full")]
    Full,

    /// The move counter disagrees with the marks on the board.
    #[display("Move count {} does not match {} occupied cells", move_count, occupied)]
    MoveCountMismatch {
        /// Recorded move count.
        move_count: usize,
        /// Marks actually on the board.
        occupied: usize,
    },

    /// The recorded winning line is not a complete line on the board.
    #[display("Winning line does not match the board")]
    InvalidWinningLine,

    /// The screen cannot show this position.
    #[display("Screen {} does not match the position", screen)]
    ScreenMismatch {
        /// Recorded screen.
        screen: Screen,
    },

    /// The player to move disagrees with the position.
    #[display("Current player should be {:?}, found {:?}", expected, found)]
    CurrentPlayerMismatch {
        /// Player implied by the board.
        expected: Option<Player>,
        /// Recorded player.
        found: Option<Player>,
    },

    /// A history entry repeats a cell or names a mark not on the board.
    #[display("Move history does not match the board")]
    InvalidHistory,
}

/// X moves when the counts are equal, O when X is one ahead.
fn side_to_move(board: &Board) -> Result<Player, BoardError> {
    let (x, o) = (board.count(Player::X), board.count(Player::O));
    if x == o {
        Ok(Player::X)
    } else if x == o + 1 {
        Ok(Player::O)
    } else {
        Err(BoardError::InvalidMarkCount { x, o })
    }
}

/// Complete game state.
///
/// Deserialization runs the same checks as [`GameState::from_board`] plus
/// the consistency of the counter, line, screen, player and history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    /// The board.
    board: Board,
    /// Player to move; `None` once the game is drawn.
    current_player: Option<Player>,
    /// Filled cells since the game started.
    move_count: usize,
    /// Set iff the last move completed a line.
    winning_line: Option<WinningLine>,
    /// Active view.
    screen: Screen,
    /// Moves committed through the engine, in order.
    history: Vec<Move>,
}

impl GameState {
    /// Creates a fresh game on the intro screen.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Some(Player::X),
            move_count: 0,
            winning_line: None,
            screen: Screen::Intro,
            history: Vec::new(),
        }
    }

    /// Builds an in-play state from an arbitrary position.
    ///
    /// The side to move is X when both players have the same number of
    /// marks and O when X has one more. The history starts empty.
    #[instrument]
    pub fn from_board(board: Board) -> Result<Self, BoardError> {
        let current_player = side_to_move(&board)?;

        if let Some((player, _)) = any_line(&board) {
            return Err(BoardError::AlreadyWon { player });
        }
        if is_full(&board) {
            return Err(BoardError::Full);
        }

        Ok(Self {
            board,
            current_player: Some(current_player),
            move_count: board.occupied(),
            winning_line: None,
            screen: Screen::Board,
            history: Vec::new(),
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move, or `None` after a draw.
    pub fn current_player(&self) -> Option<Player> {
        self.current_player
    }

    /// Returns the number of filled cells.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Returns the winning line, if the game was won.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.winning_line.as_ref()
    }

    /// Returns the active screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the outcome once the game has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        if let Some(line) = &self.winning_line {
            return self
                .board
                .get(line.cells()[0])
                .player()
                .map(Outcome::Winner);
        }
        (self.screen == Screen::End && self.current_player.is_none()).then_some(Outcome::Draw)
    }

    /// True once a winning line exists; no more moves are accepted.
    pub fn is_decided(&self) -> bool {
        self.winning_line.is_some()
    }

    /// Places a mark (unchecked - the engine validates first).
    pub(crate) fn apply_move(&mut self, mv: Move) {
        self.board.set(mv.at, Cell::Occupied(mv.player));
        self.move_count += 1;
        self.history.push(mv);
    }

    pub(crate) fn set_current_player(&mut self, player: Option<Player>) {
        self.current_player = player;
    }

    pub(crate) fn set_winning_line(&mut self, line: WinningLine) {
        self.winning_line = Some(line);
    }

    pub(crate) fn set_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    /// True if `at` is one of the recorded winning cells.
    pub fn is_winning_cell(&self, at: Coord) -> bool {
        self.winning_line.is_some_and(|line| line.contains(at))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Deserialize)]
struct RawGameState {
    board: Board,
    current_player: Option<Player>,
    move_count: usize,
    winning_line: Option<WinningLine>,
    screen: Screen,
    history: Vec<Move>,
}

impl TryFrom<RawGameState> for GameState {
    type Error = BoardError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let board = raw.board;
        let to_move = side_to_move(&board)?;

        let occupied = board.occupied();
        if raw.move_count != occupied {
            return Err(BoardError::MoveCountMismatch {
                move_count: raw.move_count,
                occupied,
            });
        }

        let (expected, finished) = match raw.winning_line {
            Some(line) => {
                let winner = line.owner(&board).ok_or(BoardError::InvalidWinningLine)?;
                // The winner made the last move.
                if winner == to_move {
                    return Err(BoardError::InvalidMarkCount {
                        x: board.count(Player::X),
                        o: board.count(Player::O),
                    });
                }
                (Some(winner), true)
            }
            None => {
                if let Some((player, _)) = any_line(&board) {
                    return Err(BoardError::AlreadyWon { player });
                }
                if is_full(&board) {
                    (None, true)
                } else {
                    (Some(to_move), false)
                }
            }
        };

        let screen_fits = match raw.screen {
            Screen::Intro => occupied == 0,
            Screen::Board => !finished,
            Screen::End => finished,
        };
        if !screen_fits {
            return Err(BoardError::ScreenMismatch { screen: raw.screen });
        }

        if raw.current_player != expected {
            return Err(BoardError::CurrentPlayerMismatch {
                expected,
                found: raw.current_player,
            });
        }

        check_history(&board, &raw.history)?;

        Ok(Self {
            board,
            current_player: raw.current_player,
            move_count: raw.move_count,
            winning_line: raw.winning_line,
            screen: raw.screen,
            history: raw.history,
        })
    }
}

/// Each history entry owns a distinct cell holding its mark.
fn check_history(board: &Board, history: &[Move]) -> Result<(), BoardError> {
    let mut seen = [false; BOARD_SIZE * BOARD_SIZE];
    for mv in history {
        let repeated = std::mem::replace(&mut seen[mv.at.index()], true);
        if repeated || board.get(mv.at) != Cell::Occupied(mv.player) {
            return Err(BoardError::InvalidHistory);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new();
        assert_eq!(state.screen(), Screen::Intro);
        assert_eq!(state.current_player(), Some(Player::X));
        assert_eq!(state.move_count(), 0);
        assert!(state.winning_line().is_none());
        assert!(state.outcome().is_none());
    }

    #[test]
    fn test_from_board_picks_side_to_move() {
        let state = GameState::from_board(Board::parse("X.. .O. ...").unwrap()).unwrap();
        assert_eq!(state.current_player(), Some(Player::X));
        assert_eq!(state.move_count(), 2);
        assert_eq!(state.screen(), Screen::Board);

        let state = GameState::from_board(Board::parse("X.. ... ...").unwrap()).unwrap();
        assert_eq!(state.current_player(), Some(Player::O));
    }

    #[test]
    fn test_from_board_rejects_bad_counts() {
        let err = GameState::from_board(Board::parse("XX. ... ...").unwrap()).unwrap_err();
        assert_eq!(err, BoardError::InvalidMarkCount { x: 2, o: 0 });
        assert!(GameState::from_board(Board::parse("O.. ... ...").unwrap()).is_err());
    }

    #[test]
    fn test_from_board_rejects_finished_positions() {
        let err = GameState::from_board(Board::parse("XXX OO. ...").unwrap()).unwrap_err();
        assert_eq!(err, BoardError::AlreadyWon { player: Player::X });

        let err = GameState::from_board(Board::parse("XOX OXX OXO").unwrap()).unwrap_err();
        assert_eq!(err, BoardError::Full);
        assert_eq!(err.to_string(), "Board is full");
    }

    fn restore(json: serde_json::Value) -> Result<GameState, serde_json::Error> {
        serde_json::from_value(json)
    }

    fn snapshot(state: &GameState) -> serde_json::Value {
        serde_json::to_value(state).unwrap()
    }

    #[test]
    fn test_deserialize_accepts_consistent_state() {
        let state = GameState::from_board(Board::parse("X.. .O. ...").unwrap()).unwrap();
        assert_eq!(restore(snapshot(&state)).unwrap(), state);
        assert_eq!(restore(snapshot(&GameState::new())).unwrap(), GameState::new());
    }

    #[test]
    fn test_deserialize_rejects_tampered_fields() {
        let state = GameState::from_board(Board::parse("X.. .O. ...").unwrap()).unwrap();

        let mut json = snapshot(&state);
        json["move_count"] = 8.into();
        assert!(restore(json).is_err());

        let mut json = snapshot(&state);
        json["current_player"] = "O".into();
        assert!(restore(json).is_err());

        let mut json = snapshot(&state);
        json["screen"] = "End".into();
        assert!(restore(json).is_err());

        let mut json = snapshot(&state);
        json["screen"] = "Intro".into();
        assert!(restore(json).is_err());
    }

    #[test]
    fn test_deserialize_checks_winning_line_and_history() {
        let mut state = GameState::from_board(Board::parse("XX. OO. ...").unwrap()).unwrap();
        let at = Coord::new(0, 2).unwrap();
        state.apply_move(Move::new(Player::X, at, crate::action::MoveOrigin::Human));
        let line = crate::rules::winning_line(state.board(), at, Player::X).unwrap();
        state.set_winning_line(line);
        state.set_screen(Screen::End);
        assert_eq!(restore(snapshot(&state)).unwrap(), state);

        let mut json = snapshot(&state);
        json["winning_line"] = serde_json::Value::Null;
        assert!(restore(json).is_err());

        let mut json = snapshot(&state);
        json["winning_line"]["cells"][2] = serde_json::json!({ "row": 1, "col": 0 });
        assert!(restore(json).is_err());

        let mut json = snapshot(&state);
        json["history"][0]["player"] = "O".into();
        assert!(restore(json).is_err());
    }

    #[test]
    fn test_deserialize_error_message() {
        let mut json = snapshot(&GameState::new());
        json["move_count"] = 3.into();
        let err = restore(json).unwrap_err();
        assert!(err.to_string().contains("Move count 3 does not match 0 occupied cells"));
    }
}
