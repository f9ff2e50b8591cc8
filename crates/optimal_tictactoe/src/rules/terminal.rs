//! Terminal-state queries: game over, score, outcome.

use super::super::{Board, Outcome, Player};
use super::{is_full, winner};
use tracing::instrument;

/// Returns true if someone has won or the board is full.
#[instrument(level = "trace")]
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Score of a finished board: `1` if X won, `-1` if O won, `0` otherwise.
///
/// On a board that is still in play this returns `0`.
#[instrument(level = "trace")]
pub fn utility(board: &Board) -> i8 {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}

/// Derives the [`Outcome`] of a board.
#[instrument(level = "trace")]
pub fn outcome(board: &Board) -> Outcome {
    match winner(board) {
        Some(player) => Outcome::Winner(player),
        None if is_full(board) => Outcome::Draw,
        None => Outcome::Undecided,
    }
}
