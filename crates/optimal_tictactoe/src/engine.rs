//! Board construction and move application.
//!
//! Whose turn it is is never stored. It is read off the mark counts, so a
//! board can't drift out of sync with its own turn.

use super::action::{Action, InvalidAction};
use super::types::{Board, Cell, Player};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Returns the starting position: an empty board with X to move.
#[instrument]
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the player who moves next.
///
/// X when both sides have the same number of marks, O otherwise. Unreachable
/// boards are not rejected; they just get an answer.
#[instrument(level = "trace")]
pub fn current_player(board: &Board) -> Player {
    if board.count(Player::X) == board.count(Player::O) {
        Player::X
    } else {
        Player::O
    }
}

/// Returns every empty cell as an action.
///
/// Iteration order is row-major.
#[instrument(level = "trace")]
pub fn legal_actions(board: &Board) -> BTreeSet<Action> {
    board.empty_cells().collect()
}

/// Returns the board after the player to move marks `action`.
///
/// The input board is left as it was.
///
/// # Errors
///
/// Returns [`InvalidAction::OutOfBounds`] if row or column is outside 0-2 and
/// [`InvalidAction::Occupied`] if the cell already holds a mark.
#[instrument(level = "trace")]
pub fn apply(board: &Board, action: Action) -> Result<Board, InvalidAction> {
    match board.get(action.row, action.col) {
        None => {
            debug!("Rejected out-of-bounds action");
            Err(InvalidAction::OutOfBounds(action))
        }
        Some(Cell::Occupied(_)) => {
            debug!("Rejected action on occupied cell");
            Err(InvalidAction::Occupied(action))
        }
        Some(Cell::Empty) => Ok(board.with_mark(action, current_player(board))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let board = initial_state();
        assert_eq!(board, Board::new());
        assert_eq!(current_player(&board), Player::X);
        assert_eq!(legal_actions(&board).len(), 9);
    }

    #[test]
    fn test_apply_marks_current_player() {
        let board = apply(&initial_state(), Action::new(1, 1)).unwrap();
        assert_eq!(board.get(1, 1), Some(Cell::Occupied(Player::X)));
        assert_eq!(current_player(&board), Player::O);

        let board = apply(&board, Action::new(0, 0)).unwrap();
        assert_eq!(board.get(0, 0), Some(Cell::Occupied(Player::O)));
        assert_eq!(current_player(&board), Player::X);
    }

    #[test]
    fn test_apply_rejects_occupied() {
        let board = apply(&initial_state(), Action::new(2, 0)).unwrap();
        assert_eq!(
            apply(&board, Action::new(2, 0)),
            Err(InvalidAction::Occupied(Action::new(2, 0)))
        );
    }

    #[test]
    fn test_apply_rejects_out_of_bounds() {
        let board = initial_state();
        assert_eq!(
            apply(&board, Action::new(3, 1)),
            Err(InvalidAction::OutOfBounds(Action::new(3, 1)))
        );
        assert_eq!(
            apply(&board, Action::new(0, 7)),
            Err(InvalidAction::OutOfBounds(Action::new(0, 7)))
        );
    }

    #[test]
    fn test_legal_actions_full_board() {
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert!(legal_actions(&board).is_empty());
    }

    #[test]
    fn test_current_player_on_unreachable_board() {
        let board: Board = "XXX/X../...".parse().unwrap();
        assert_eq!(current_player(&board), Player::O);
    }
}
