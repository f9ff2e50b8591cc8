//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// One of the eight lines that wins the game.
///
/// Variants are declared in the order lines are checked: rows top to bottom,
/// columns left to right, then the two diagonals.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Line {
    /// Row 0.
    TopRow,
    /// Row 1.
    MiddleRow,
    /// Row 2.
    BottomRow,
    /// Column 0.
    LeftColumn,
    /// Column 1.
    CenterColumn,
    /// Column 2.
    RightColumn,
    /// (0,0) to (2,2).
    MainDiagonal,
    /// (0,2) to (2,0).
    AntiDiagonal,
}

impl Line {
    /// The `(row, col)` coordinates covered by this line.
    pub fn cells(self) -> [(usize, usize); 3] {
        match self {
            Line::TopRow => [(0, 0), (0, 1), (0, 2)],
            Line::MiddleRow => [(1, 0), (1, 1), (1, 2)],
            Line::BottomRow => [(2, 0), (2, 1), (2, 2)],
            Line::LeftColumn => [(0, 0), (1, 0), (2, 0)],
            Line::CenterColumn => [(0, 1), (1, 1), (2, 1)],
            Line::RightColumn => [(0, 2), (1, 2), (2, 2)],
            Line::MainDiagonal => [(0, 0), (1, 1), (2, 2)],
            Line::AntiDiagonal => [(0, 2), (1, 1), (2, 0)],
        }
    }

    /// The player holding all three cells of this line, if any.
    pub fn owner(self, board: &Board) -> Option<Player> {
        let [a, b, c] = self.cells().map(|(row, col)| board.at(row, col));
        if a == b && b == c {
            a.player()
        } else {
            None
        }
    }
}

/// Finds the first completed line and the player who completed it.
///
/// Lines are checked in [`Line`] declaration order, so the answer is
/// deterministic even on boards where several lines are complete.
#[instrument(level = "trace")]
pub fn winning_line(board: &Board) -> Option<(Line, Player)> {
    Line::iter().find_map(|line| line.owner(board).map(|player| (line, player)))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(level = "trace")]
pub fn winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(_, player)| player)
}
