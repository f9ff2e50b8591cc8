//! Optimal tic-tac-toe: pure game rules plus exhaustive minimax search.
//!
//! Boards are plain values. Whose turn it is, who won and whether the game is
//! over are all derived from the marks on the board, never stored.
//!
//! # Example
//!
//! ```
//! use optimal_tictactoe::{apply, best_action, initial_state, is_terminal, utility};
//!
//! let mut board = initial_state();
//! while let Some(action) = best_action(&board) {
//!     board = apply(&board, action)?;
//! }
//! assert!(is_terminal(&board));
//! assert_eq!(utility(&board), 0);
//! # Ok::<(), optimal_tictactoe::InvalidAction>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
pub mod rules;
mod search;
mod types;

pub use action::{Action, InvalidAction};
pub use engine::{apply, current_player, initial_state, legal_actions};
pub use rules::{Line, is_full, is_terminal, outcome, utility, winner, winning_line};
pub use search::{ActionValue, Analysis, analyze, best_action, minimax_value};
pub use types::{Board, Cell, Outcome, ParseBoardError, Player};
