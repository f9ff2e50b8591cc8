//! Actions and the error raised when one cannot be applied.

use serde::{Deserialize, Serialize};

const LABELS: [[&str; 3]; 3] = [
    ["top-left", "top-center", "top-right"],
    ["middle-left", "center", "middle-right"],
    ["bottom-left", "bottom-center", "bottom-right"],
];

/// A move in tic-tac-toe: the `(row, col)` cell the player to move marks.
///
/// An action only means something relative to a board; the same action can be
/// legal on one board and occupied on another. Actions order row-major.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("({}, {})", row, col)]
pub struct Action {
    /// Row, 0 (top) to 2 (bottom).
    pub row: usize,
    /// Column, 0 (left) to 2 (right).
    pub col: usize,
}

impl Action {
    /// Creates a new action.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Human-readable name of the cell, or `None` when out of bounds.
    pub fn label(&self) -> Option<&'static str> {
        LABELS.get(self.row).and_then(|r| r.get(self.col)).copied()
    }
}

/// Error raised by [`crate::apply`] when the action cannot be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidAction {
    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(Action),

    /// Row or column is outside 0-2.
    #[display("Cell {} is out of bounds", _0)]
    OutOfBounds(Action),
}

impl InvalidAction {
    /// The rejected action.
    pub fn action(&self) -> Action {
        match self {
            InvalidAction::Occupied(action) | InvalidAction::OutOfBounds(action) => *action,
        }
    }
}

impl std::error::Error for InvalidAction {}
