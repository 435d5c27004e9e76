use crate::Position;

/// The error type for operations on a board, e.g. for placing a single token.
///
/// If an operation returns an error, the board is unmodified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalMove {
    InvalidColumn { column: usize, num_columns: usize },
    ColumnFull { column: usize },
    OutOfRangePosition { position: Position },
}

impl std::error::Error for IllegalMove {}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::InvalidColumn { column, num_columns } =>
                write!(f, "Column {} does not exist, the board has {} columns", column, num_columns),
            IllegalMove::ColumnFull { column } =>
                write!(f, "Token was placed in column {}, which is already full", column),
            IllegalMove::OutOfRangePosition { position } =>
                write!(f, "Position ({}) is outside of the board", position),
        }
    }
}

/// The error type for [`BoardDimensions::new()`](crate::BoardDimensions::new).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidDimensions {
    RowsOutOfRange { rows: usize },
    ColumnsOutOfRange { columns: usize },
    NumToWinOutOfRange { num_to_win: usize },
    NumToWinTooLargeForRows { num_to_win: usize, rows: usize },
    NumToWinTooLargeForColumns { num_to_win: usize, columns: usize },
}

impl std::error::Error for InvalidDimensions {}

impl std::fmt::Display for InvalidDimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use super::dimensions::{MAX_NUM_TO_WIN, MAX_SIDE, MIN_NUM_TO_WIN, MIN_SIDE};
        match self {
            InvalidDimensions::RowsOutOfRange { rows } =>
                write!(f, "A board needs between {} and {} rows, got {}", MIN_SIDE, MAX_SIDE, rows),
            InvalidDimensions::ColumnsOutOfRange { columns } =>
                write!(f, "A board needs between {} and {} columns, got {}", MIN_SIDE, MAX_SIDE, columns),
            InvalidDimensions::NumToWinOutOfRange { num_to_win } =>
                write!(f, "The number of tokens in a row to win must be between {} and {}, got {}", MIN_NUM_TO_WIN, MAX_NUM_TO_WIN, num_to_win),
            InvalidDimensions::NumToWinTooLargeForRows { num_to_win, rows } =>
                write!(f, "The number of tokens in a row to win ({}) must be smaller than the number of rows ({})", num_to_win, rows),
            InvalidDimensions::NumToWinTooLargeForColumns { num_to_win, columns } =>
                write!(f, "The number of tokens in a row to win ({}) must be smaller than the number of columns ({})", num_to_win, columns),
        }
    }
}
