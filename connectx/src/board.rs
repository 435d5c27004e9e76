mod dense;
mod dimensions;
mod error;
mod sparse;

use std::str::FromStr;

pub use dense::*;
pub use dimensions::*;
pub use error::*;
pub use sparse::*;

use serde::{Deserialize, Serialize};

use crate::{Position, Token};

/// The (row, column) steps of the four lines through a cell.
pub const HORIZONTAL: (isize, isize) = (0, 1);
pub const VERTICAL: (isize, isize) = (1, 0);
pub const RISING_DIAGONAL: (isize, isize) = (1, 1);
pub const FALLING_DIAGONAL: (isize, isize) = (1, -1);

/// The operations every board storage strategy provides.
///
/// Implementors only need to provide [`Self::dimensions()`], [`Self::place_token()`]
/// and [`Self::whats_at_pos()`]. The win and tie checks are written in terms of
/// those, and can be overridden where a strategy has a faster way to answer them.
///
/// Every strategy upholds the gravity invariant: the occupied cells of a column
/// always form a contiguous block starting at row 0.
pub trait GameBoard {
    fn dimensions(&self) -> BoardDimensions;

    /// Drops `token` into `column`, where it lands on the lowest empty row.
    ///
    /// Returns the position the token landed on. If an error is returned,
    /// the board is unmodified.
    fn place_token(&mut self, token: Token, column: usize) -> Result<Position, IllegalMove>;

    /// Returns the token at `pos`, or `None` if the cell is empty.
    ///
    /// Panics if `pos` is outside of the board. See [`Self::get()`] for a
    /// checked version.
    fn whats_at_pos(&self, pos: Position) -> Option<Token>;

    fn num_rows(&self) -> usize {
        self.dimensions().rows()
    }

    fn num_columns(&self) -> usize {
        self.dimensions().columns()
    }

    fn num_to_win(&self) -> usize {
        self.dimensions().num_to_win()
    }

    /// Like [`Self::whats_at_pos()`], but returns an error instead of panicking.
    fn get(&self, pos: Position) -> Result<Option<Token>, IllegalMove> {
        self.dimensions().check_position(pos)?;
        Ok(self.whats_at_pos(pos))
    }

    fn is_player_at_pos(&self, pos: Position, token: Token) -> bool {
        self.whats_at_pos(pos) == Some(token)
    }

    /// Can another token be placed into `column`?
    fn check_if_free(&self, column: usize) -> Result<bool, IllegalMove> {
        let dims = self.dimensions();
        dims.check_column(column)?;
        Ok(self
            .whats_at_pos(Position::new(dims.top_row(), column))
            .is_none())
    }

    /// Is the board full?
    ///
    /// This does not look at wins at all, so a full board whose last token
    /// completed a line is also a tie according to this function. Check for a
    /// win first.
    fn check_tie(&self) -> bool {
        let dims = self.dimensions();
        (0..dims.columns()).all(|column| {
            self.whats_at_pos(Position::new(dims.top_row(), column))
                .is_some()
        })
    }

    /// Did the token last played into `column` complete a line?
    ///
    /// The topmost token of the column is assumed to be the one just played,
    /// since any new line must go through it. An empty column has no such
    /// token and never wins.
    fn check_for_win(&self, column: usize) -> Result<bool, IllegalMove> {
        self.dimensions().check_column(column)?;
        let pivot = (0..self.num_rows()).rev().find_map(|row| {
            let pos = Position::new(row, column);
            self.whats_at_pos(pos).map(|token| (pos, token))
        });
        let Some((pos, token)) = pivot else {
            return Ok(false);
        };
        Ok(self.check_horiz_win(pos, token)
            || self.check_vert_win(pos, token)
            || self.check_diag_win(pos, token))
    }

    fn check_horiz_win(&self, pos: Position, token: Token) -> bool {
        self.run_length(pos, token, HORIZONTAL) >= self.num_to_win()
    }

    fn check_vert_win(&self, pos: Position, token: Token) -> bool {
        self.run_length(pos, token, VERTICAL) >= self.num_to_win()
    }

    /// Checks the two diagonals through `pos` separately.
    fn check_diag_win(&self, pos: Position, token: Token) -> bool {
        self.run_length(pos, token, RISING_DIAGONAL) >= self.num_to_win()
            || self.run_length(pos, token, FALLING_DIAGONAL) >= self.num_to_win()
    }

    /// Counts the tokens in the line through `pos` along `direction`.
    ///
    /// `pos` itself always counts as one. From there, the scan walks outwards
    /// in `direction` while the cells hold `token`, then does the same in the
    /// opposite direction.
    fn run_length(&self, pos: Position, token: Token, direction: (isize, isize)) -> usize {
        let dims = self.dimensions();
        let (d_row, d_column) = direction;
        let mut count = 1;
        for sign in [1, -1] {
            let mut shift = 1;
            while let Some(neighbor) = pos
                .offset(sign * d_row, sign * d_column, shift)
                .filter(|&p| dims.contains(p))
            {
                if !self.is_player_at_pos(neighbor, token) {
                    break;
                }
                count += 1;
                shift += 1;
            }
        }
        count
    }

    /// All occupied cells, in row-major order starting from the bottom row.
    fn occupied_positions(&self) -> Vec<(Position, Token)> {
        let dims = self.dimensions();
        let mut result = Vec::new();
        for row in 0..dims.rows() {
            for column in 0..dims.columns() {
                let pos = Position::new(row, column);
                if let Some(token) = self.whats_at_pos(pos) {
                    result.push((pos, token));
                }
            }
        }
        result
    }
}

/// Which storage strategy a [`Board`] uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Storage {
    /// A full grid, see [`DenseBoard`].
    #[default]
    Dense,
    /// Per-token position lists, see [`SparseBoard`].
    Sparse,
}

impl FromStr for Storage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dense" => Ok(Storage::Dense),
            "sparse" => Ok(Storage::Sparse),
            _ => Err(format!(
                "Unknown storage '{}', expected 'dense' or 'sparse'",
                s
            )),
        }
    }
}

impl std::fmt::Display for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Storage::Dense => write!(f, "dense"),
            Storage::Sparse => write!(f, "sparse"),
        }
    }
}

/// A board whose storage strategy is picked at runtime.
#[derive(Clone, Debug)]
pub enum Board {
    Dense(DenseBoard),
    Sparse(SparseBoard),
}

impl Board {
    /// Creates an empty board.
    pub fn new(storage: Storage, dimensions: BoardDimensions) -> Self {
        match storage {
            Storage::Dense => Board::Dense(DenseBoard::new(dimensions)),
            Storage::Sparse => Board::Sparse(SparseBoard::new(dimensions)),
        }
    }

    pub fn storage(&self) -> Storage {
        match self {
            Board::Dense(_) => Storage::Dense,
            Board::Sparse(_) => Storage::Sparse,
        }
    }
}

impl From<DenseBoard> for Board {
    fn from(board: DenseBoard) -> Self {
        Board::Dense(board)
    }
}

impl From<SparseBoard> for Board {
    fn from(board: SparseBoard) -> Self {
        Board::Sparse(board)
    }
}

// Every method is forwarded, so that the strategies' overrides are used.
impl GameBoard for Board {
    fn dimensions(&self) -> BoardDimensions {
        match self {
            Board::Dense(b) => b.dimensions(),
            Board::Sparse(b) => b.dimensions(),
        }
    }

    fn place_token(&mut self, token: Token, column: usize) -> Result<Position, IllegalMove> {
        match self {
            Board::Dense(b) => b.place_token(token, column),
            Board::Sparse(b) => b.place_token(token, column),
        }
    }

    fn whats_at_pos(&self, pos: Position) -> Option<Token> {
        match self {
            Board::Dense(b) => b.whats_at_pos(pos),
            Board::Sparse(b) => b.whats_at_pos(pos),
        }
    }

    fn is_player_at_pos(&self, pos: Position, token: Token) -> bool {
        match self {
            Board::Dense(b) => b.is_player_at_pos(pos, token),
            Board::Sparse(b) => b.is_player_at_pos(pos, token),
        }
    }

    fn check_tie(&self) -> bool {
        match self {
            Board::Dense(b) => b.check_tie(),
            Board::Sparse(b) => b.check_tie(),
        }
    }

    fn run_length(&self, pos: Position, token: Token, direction: (isize, isize)) -> usize {
        match self {
            Board::Dense(b) => b.run_length(pos, token, direction),
            Board::Sparse(b) => b.run_length(pos, token, direction),
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::render(self))
    }
}
