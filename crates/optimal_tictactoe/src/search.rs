//! Exhaustive minimax search.
//!
//! X maximizes and O minimizes the utility of the terminal board. Every
//! reachable position is visited; there is no pruning and no caching.

use super::action::Action;
use super::engine::current_player;
use super::rules::{is_terminal, utility};
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Minimax value of one legal action at the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionValue {
    /// The action played.
    pub action: Action,
    /// Minimax value of the board it leads to.
    pub value: i8,
}

/// Result of searching a position to the end of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    to_move: Player,
    best_action: Option<Action>,
    value: i8,
    action_values: Vec<ActionValue>,
    visited: u64,
}

impl Analysis {
    /// Player to move in the searched position.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Optimal action, or `None` if the position is terminal.
    pub fn best_action(&self) -> Option<Action> {
        self.best_action
    }

    /// Minimax value of the position.
    pub fn value(&self) -> i8 {
        self.value
    }

    /// Value of every legal action, in row-major order.
    pub fn action_values(&self) -> &[ActionValue] {
        &self.action_values
    }

    /// Boards visited, the root included.
    pub fn visited(&self) -> u64 {
        self.visited
    }
}

/// Running state of one search.
#[derive(Debug, Default)]
struct Search {
    visited: u64,
}

impl Search {
    fn value(&mut self, board: &Board) -> i8 {
        self.visited += 1;
        if is_terminal(board) {
            return utility(board);
        }

        let mover = current_player(board);
        let mut best = worst_for(mover);
        for action in board.empty_cells() {
            let value = self.value(&board.with_mark(action, mover));
            if improves(mover, value, best) {
                best = value;
            }
        }
        best
    }
}

/// Starting point for `mover`'s running best; any real value beats it.
fn worst_for(mover: Player) -> i8 {
    match mover {
        Player::X => i8::MIN,
        Player::O => i8::MAX,
    }
}

/// Strict comparison, so earlier actions win ties.
fn improves(mover: Player, candidate: i8, incumbent: i8) -> bool {
    match mover {
        Player::X => candidate > incumbent,
        Player::O => candidate < incumbent,
    }
}

/// Returns the minimax value of `board`: `1` if X wins with best play from
/// both sides, `-1` if O does, `0` for a draw.
#[instrument(skip(board))]
pub fn minimax_value(board: &Board) -> i8 {
    let mut search = Search::default();
    let value = search.value(board);
    debug!(value, visited = search.visited, "Minimax value computed");
    value
}

/// Searches `board` and reports the value of every legal action.
#[instrument(skip(board), fields(to_move = %current_player(board)))]
pub fn analyze(board: &Board) -> Analysis {
    let to_move = current_player(board);
    if is_terminal(board) {
        debug!("Position is terminal");
        return Analysis {
            to_move,
            best_action: None,
            value: utility(board),
            action_values: Vec::new(),
            visited: 1,
        };
    }

    let mut search = Search { visited: 1 };
    let mut best: Option<ActionValue> = None;
    let mut action_values = Vec::new();
    for action in board.empty_cells() {
        let value = search.value(&board.with_mark(action, to_move));
        let scored = ActionValue { action, value };
        if best.is_none_or(|b| improves(to_move, value, b.value)) {
            best = Some(scored);
        }
        action_values.push(scored);
    }

    let best_action = best.map(|b| b.action);
    let value = best.map_or_else(|| utility(board), |b| b.value);
    debug!(
        best_action = ?best_action,
        value,
        visited = search.visited,
        "Search complete"
    );

    Analysis {
        to_move,
        best_action,
        value,
        action_values,
        visited: search.visited,
    }
}

/// Returns the optimal action for the player to move, or `None` if the game
/// is over.
///
/// Among equally good actions the first in row-major order is chosen.
#[instrument(skip(board))]
pub fn best_action(board: &Board) -> Option<Action> {
    analyze(board).best_action
}
