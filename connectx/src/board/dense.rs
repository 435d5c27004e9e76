use super::{BoardDimensions, GameBoard, IllegalMove};
use crate::{Position, Token};

/// A board that stores every cell.
///
/// Lookups are O(1), and memory use is proportional to the size of the board,
/// no matter how many tokens have been played.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DenseBoard {
    // Indexed by [row * columns + column], row 0 first.
    arr: Vec<Option<Token>>,
    dimensions: BoardDimensions,
}

impl DenseBoard {
    /// Creates an empty board.
    pub fn new(dimensions: BoardDimensions) -> Self {
        Self {
            arr: vec![None; dimensions.rows() * dimensions.columns()],
            dimensions,
        }
    }

    // Convert the 2D position into a "flat" array index
    fn arr_idx(&self, row: usize, column: usize) -> usize {
        row * self.dimensions.columns() + column
    }
}

impl GameBoard for DenseBoard {
    fn dimensions(&self) -> BoardDimensions {
        self.dimensions
    }

    fn place_token(&mut self, token: Token, column: usize) -> Result<Position, IllegalMove> {
        self.dimensions.check_column(column)?;
        for row in 0..self.dimensions.rows() {
            let idx = self.arr_idx(row, column);
            if self.arr[idx].is_none() {
                self.arr[idx] = Some(token);
                return Ok(Position::new(row, column));
            }
        }
        Err(IllegalMove::ColumnFull { column })
    }

    fn whats_at_pos(&self, pos: Position) -> Option<Token> {
        assert!(
            self.dimensions.contains(pos),
            "Position ({}) is outside of the {} board",
            pos,
            self.dimensions
        );
        self.arr[self.arr_idx(pos.row(), pos.column())]
    }

    // Only the top row needs to be looked at, since tokens can't float
    fn check_tie(&self) -> bool {
        let top_row_start = self.arr_idx(self.dimensions.top_row(), 0);
        self.arr[top_row_start..].iter().all(Option::is_some)
    }

    // Same scan as the default, but walking the array directly instead of
    // going through is_player_at_pos() for every cell.
    fn run_length(&self, pos: Position, token: Token, direction: (isize, isize)) -> usize {
        let (rows, columns) = (self.dimensions.rows(), self.dimensions.columns());
        let (d_row, d_column) = direction;
        let mut count = 1;
        for sign in [1, -1] {
            let (mut row, mut column) = (pos.row(), pos.column());
            loop {
                row = match row.checked_add_signed(sign * d_row) {
                    Some(r) if r < rows => r,
                    _ => break,
                };
                column = match column.checked_add_signed(sign * d_column) {
                    Some(c) if c < columns => c,
                    _ => break,
                };
                if self.arr[row * columns + column] != Some(token) {
                    break;
                }
                count += 1;
            }
        }
        count
    }
}

impl std::fmt::Display for DenseBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::render(self))
    }
}
