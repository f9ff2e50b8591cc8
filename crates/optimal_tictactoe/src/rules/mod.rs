//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Nothing here stores turn or
//! result state; everything is read off the marks on the board.

pub mod draw;
pub mod terminal;
pub mod win;

pub use draw::is_full;
pub use terminal::{is_terminal, outcome, utility};
pub use win::{Line, winner, winning_line};
