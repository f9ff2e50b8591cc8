//! Core domain types for tic-tac-toe.

use super::action::Action;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::str::FromStr;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first, maximizes).
    X,
    /// Player O (goes second, minimizes).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Cell {
    /// Empty cell.
    #[display(".")]
    Empty,
    /// Cell holding a player's mark.
    #[display("{}", _0)]
    Occupied(Player),
}

impl Cell {
    /// Returns the player whose mark is in this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: [`crate::apply`] returns a new board and never
/// touches the one it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed by `[row][col]`.
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    /// Creates a board from explicit rows.
    ///
    /// No reachability check is made, so this can build positions that never
    /// arise in play.
    pub fn from_rows(cells: [[Cell; 3]; 3]) -> Self {
        Self { cells }
    }

    /// Gets the cell at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Checks if the cell at `(row, col)` exists and is empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// Iterates over all nine cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Number of marks `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.cells()
            .filter(|cell| *cell == Cell::Occupied(player))
            .count()
    }

    /// Iterates over the empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Action> + '_ {
        (0..3)
            .flat_map(|row| (0..3).map(move |col| Action::new(row, col)))
            .filter(|action| self.is_empty(action.row, action.col))
    }

    /// Cell at coordinates known to be in range.
    pub(crate) fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Copy of this board with `player` marked at `action` (unchecked).
    pub(crate) fn with_mark(&self, action: Action, player: Player) -> Self {
        let mut next = *self;
        next.cells[action.row][action.col] = Cell::Occupied(player);
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                f.write_str("\n-+-+-\n")?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    f.write_char('|')?;
                }
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

/// Error returned when board text cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    /// A character that is neither a cell nor a separator.
    #[display("Unexpected character {:?} in board", _0)]
    InvalidChar(char),

    /// The text did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongCellCount(usize),
}

impl std::error::Error for ParseBoardError {}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine cells in row-major order.
    ///
    /// `X`/`O` (either case) are marks, `.` and `_` are empty. Whitespace and
    /// `/ | , - +` are separators, so the [`Display`](std::fmt::Display)
    /// output parses back.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parsed = Vec::with_capacity(9);
        for ch in s.chars() {
            let cell = match ch {
                'X' | 'x' => Cell::Occupied(Player::X),
                'O' | 'o' => Cell::Occupied(Player::O),
                '.' | '_' => Cell::Empty,
                '/' | '|' | ',' | '-' | '+' => continue,
                c if c.is_whitespace() => continue,
                other => return Err(ParseBoardError::InvalidChar(other)),
            };
            parsed.push(cell);
        }

        if parsed.len() != 9 {
            return Err(ParseBoardError::WrongCellCount(parsed.len()));
        }

        let mut cells = [[Cell::Empty; 3]; 3];
        for (i, cell) in parsed.into_iter().enumerate() {
            cells[i / 3][i % 3] = cell;
        }
        Ok(Self { cells })
    }
}

/// Result of a position, derived from the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Outcome {
    /// Player completed a line.
    #[display("Player {} wins", _0)]
    Winner(Player),
    /// Board is full with no completed line.
    #[display("Draw")]
    Draw,
    /// Game is still going.
    #[display("Undecided")]
    Undecided,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw | Outcome::Undecided => None,
        }
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::Undecided)
    }
}
