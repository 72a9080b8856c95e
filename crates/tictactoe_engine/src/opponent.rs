//! The computer opponent: take a win, else block, else play at random.
//!
//! Every lookahead runs on a copy of the board, so the live game state is
//! never written with hypothetical marks.

use crate::action::MoveReason;
use crate::board::Board;
use crate::config::FallbackSampling;
use crate::position::Coord;
use crate::rng::MoveRng;
use crate::rules::winning_line;
use crate::types::Player;
use tracing::{debug, instrument};

/// First empty cell, in row-major order, where `player` would complete a line.
pub fn find_winning_cell(board: &Board, player: Player) -> Option<Coord> {
    board
        .empty_cells()
        .into_iter()
        .find(|&at| winning_line(&board.with_mark(at, player), at, player).is_some())
}

/// Picks the computer's cell for `mark`.
///
/// Returns `None` only when the board has no empty cell.
#[instrument(skip(board, rng))]
pub fn choose_move(
    board: &Board,
    mark: Player,
    rng: &mut MoveRng,
    sampling: FallbackSampling,
) -> Option<(Coord, MoveReason)> {
    if let Some(at) = find_winning_cell(board, mark) {
        debug!(%at, "Taking winning cell");
        return Some((at, MoveReason::Win));
    }

    if let Some(at) = find_winning_cell(board, mark.opponent()) {
        debug!(%at, "Blocking opponent's winning cell");
        return Some((at, MoveReason::Block));
    }

    let candidates = board.empty_cells();
    if candidates.is_empty() {
        return None;
    }
    let index = sample_index(candidates.len(), rng, sampling);
    let at = candidates[index];
    debug!(%at, candidates = candidates.len(), "Playing random cell");
    Some((at, MoveReason::Random))
}

/// Draws a candidate index for `len` candidates (`len > 0`).
fn sample_index(len: usize, rng: &mut MoveRng, sampling: FallbackSampling) -> usize {
    match sampling {
        FallbackSampling::Uniform => rng.index_below(len),
        FallbackSampling::Legacy if len > 1 => rng.index_below(len - 1),
        FallbackSampling::Legacy => 0,
    }
}
