//! Tests for tic-tac-toe rules and move application.

use optimal_tictactoe::{
    Action, Board, Cell, InvalidAction, Outcome, Player, apply, current_player, initial_state,
    is_terminal, legal_actions, outcome, utility, winner,
};
use std::collections::HashSet;

/// Every board reachable from the initial state, terminal ones included.
fn reachable_boards() -> Vec<Board> {
    fn walk(board: Board, seen: &mut HashSet<Board>, out: &mut Vec<Board>) {
        if !seen.insert(board) {
            return;
        }
        out.push(board);
        if is_terminal(&board) {
            return;
        }
        for action in legal_actions(&board) {
            let next = apply(&board, action).expect("legal action");
            walk(next, seen, out);
        }
    }

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    walk(initial_state(), &mut seen, &mut out);
    out
}

#[test]
fn test_initial_state_scenario() {
    let board = initial_state();
    assert!(board.cells().all(|c| c == Cell::Empty));
    assert_eq!(legal_actions(&board).len(), 9);
    assert_eq!(current_player(&board), Player::X);
}

#[test]
fn test_center_opening_scenario() {
    let board = apply(&initial_state(), Action::new(1, 1)).expect("Valid move");

    for row in 0..3 {
        for col in 0..3 {
            let expected = if (row, col) == (1, 1) {
                Cell::Occupied(Player::X)
            } else {
                Cell::Empty
            };
            assert_eq!(board.get(row, col), Some(expected));
        }
    }
    assert_eq!(current_player(&board), Player::O);
}

#[test]
fn test_top_row_win_scenario() {
    let board = Board::from_rows([
        [Cell::Occupied(Player::X); 3],
        [Cell::Empty; 3],
        [Cell::Empty; 3],
    ]);
    assert_eq!(winner(&board), Some(Player::X));
    assert!(is_terminal(&board));
    assert_eq!(utility(&board), 1);
}

#[test]
fn test_full_board_draw_scenario() {
    let board: Board = "XOX/XOO/OXX".parse().unwrap();
    assert_eq!(winner(&board), None);
    assert!(is_terminal(&board));
    assert_eq!(utility(&board), 0);
    assert_eq!(outcome(&board), Outcome::Draw);
}

#[test]
fn test_players_alternate() {
    let moves = [
        Action::new(1, 1),
        Action::new(0, 0),
        Action::new(2, 2),
        Action::new(0, 2),
        Action::new(0, 1),
        Action::new(2, 1),
    ];

    let mut board = initial_state();
    let mut expected = Player::X;
    for action in moves {
        assert_eq!(current_player(&board), expected);
        board = apply(&board, action).expect("Valid move");
        assert_eq!(board.get(action.row, action.col), Some(Cell::Occupied(expected)));
        expected = expected.opponent();
    }
}

#[test]
fn test_apply_leaves_input_untouched() {
    let board: Board = "X../.O./...".parse().unwrap();
    let snapshot = board;
    let next = apply(&board, Action::new(2, 2)).expect("Valid move");

    assert_eq!(board, snapshot);
    assert_ne!(next, board);
    assert_eq!(board.get(2, 2), Some(Cell::Empty));
}

#[test]
fn test_apply_rejects_every_occupied_cell() {
    let board: Board = "XO./.X./..O".parse().unwrap();
    for row in 0..3 {
        for col in 0..3 {
            let action = Action::new(row, col);
            let result = apply(&board, action);
            if board.is_empty(row, col) {
                assert!(result.is_ok());
            } else {
                assert_eq!(result, Err(InvalidAction::Occupied(action)));
            }
        }
    }
}

#[test]
fn test_apply_rejects_out_of_range() {
    let board = initial_state();
    let err = apply(&board, Action::new(1, 3)).unwrap_err();
    assert!(matches!(err, InvalidAction::OutOfBounds(_)));
    assert!(err.to_string().contains("out of bounds"));
}

#[test]
fn test_reachable_board_count() {
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn test_terminal_matches_winner_or_full() {
    for board in reachable_boards() {
        let expected = winner(&board).is_some() || legal_actions(&board).is_empty();
        assert_eq!(is_terminal(&board), expected, "board:\n{}", board);
    }
}

#[test]
fn test_utility_matches_winner() {
    for board in reachable_boards().into_iter().filter(is_terminal) {
        let expected = match winner(&board) {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        };
        assert_eq!(utility(&board), expected, "board:\n{}", board);
    }
}

#[test]
fn test_mark_counts_stay_balanced() {
    for board in reachable_boards() {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        assert!(x == o || x == o + 1, "board:\n{}", board);
    }
}

#[test]
fn test_board_serializes() {
    let board: Board = "X../.O./...".parse().unwrap();
    let json = serde_json::to_string(&board).unwrap();
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(back, board);
}
