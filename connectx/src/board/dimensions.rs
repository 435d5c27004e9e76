use serde::{Deserialize, Serialize};

use super::{IllegalMove, InvalidDimensions};
use crate::Position;

pub(crate) const MIN_SIDE: usize = 3;
pub(crate) const MAX_SIDE: usize = 100;
pub(crate) const MIN_NUM_TO_WIN: usize = 3;
pub(crate) const MAX_NUM_TO_WIN: usize = 25;

/// The shape of a board and the number of tokens in a row needed to win.
///
/// A value of this type is always valid: it can only be created through
/// [`Self::new()`], which is also used when deserializing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDimensions")]
pub struct BoardDimensions {
    rows: usize,
    columns: usize,
    num_to_win: usize,
}

// Unvalidated counterpart of BoardDimensions, only used for deserializing.
#[derive(Deserialize)]
struct RawDimensions {
    rows: usize,
    columns: usize,
    num_to_win: usize,
}

impl BoardDimensions {
    /// Checks the constraints on the board shape:
    ///
    /// * rows and columns are between 3 and 100,
    /// * `num_to_win` is between 3 and 25,
    /// * `num_to_win` is smaller than both rows and columns.
    pub fn new(rows: usize, columns: usize, num_to_win: usize) -> Result<Self, InvalidDimensions> {
        if !(MIN_SIDE..=MAX_SIDE).contains(&rows) {
            return Err(InvalidDimensions::RowsOutOfRange { rows });
        }
        if !(MIN_SIDE..=MAX_SIDE).contains(&columns) {
            return Err(InvalidDimensions::ColumnsOutOfRange { columns });
        }
        if !(MIN_NUM_TO_WIN..=MAX_NUM_TO_WIN).contains(&num_to_win) {
            return Err(InvalidDimensions::NumToWinOutOfRange { num_to_win });
        }
        if num_to_win >= rows {
            return Err(InvalidDimensions::NumToWinTooLargeForRows { num_to_win, rows });
        }
        if num_to_win >= columns {
            return Err(InvalidDimensions::NumToWinTooLargeForColumns {
                num_to_win,
                columns,
            });
        }
        Ok(Self {
            rows,
            columns,
            num_to_win,
        })
    }

    // Skips validation, for exercising code on shapes that games can't have.
    #[cfg(test)]
    pub(crate) fn new_unchecked(rows: usize, columns: usize, num_to_win: usize) -> Self {
        Self {
            rows,
            columns,
            num_to_win,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn num_to_win(&self) -> usize {
        self.num_to_win
    }

    /// The index of the topmost row.
    pub fn top_row(&self) -> usize {
        self.rows - 1
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row() < self.rows && pos.column() < self.columns
    }

    pub fn check_column(&self, column: usize) -> Result<(), IllegalMove> {
        if column < self.columns {
            Ok(())
        } else {
            Err(IllegalMove::InvalidColumn {
                column,
                num_columns: self.columns,
            })
        }
    }

    pub fn check_position(&self, position: Position) -> Result<(), IllegalMove> {
        if self.contains(position) {
            Ok(())
        } else {
            Err(IllegalMove::OutOfRangePosition { position })
        }
    }
}

impl TryFrom<RawDimensions> for BoardDimensions {
    type Error = InvalidDimensions;

    fn try_from(raw: RawDimensions) -> Result<Self, Self::Error> {
        BoardDimensions::new(raw.rows, raw.columns, raw.num_to_win)
    }
}

impl std::fmt::Display for BoardDimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}x{}, {} in a row to win",
            self.rows, self.columns, self.num_to_win
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation() {
        assert!(BoardDimensions::new(6, 7, 4).is_ok());
        assert!(BoardDimensions::new(100, 100, 25).is_ok());
        assert!(BoardDimensions::new(4, 4, 3).is_ok());
        assert_eq!(
            BoardDimensions::new(2, 7, 4),
            Err(InvalidDimensions::RowsOutOfRange { rows: 2 })
        );
        assert_eq!(
            BoardDimensions::new(6, 101, 4),
            Err(InvalidDimensions::ColumnsOutOfRange { columns: 101 })
        );
        assert_eq!(
            BoardDimensions::new(50, 50, 26),
            Err(InvalidDimensions::NumToWinOutOfRange { num_to_win: 26 })
        );
        assert_eq!(
            BoardDimensions::new(3, 7, 3),
            Err(InvalidDimensions::NumToWinTooLargeForRows {
                num_to_win: 3,
                rows: 3
            })
        );
        assert_eq!(
            BoardDimensions::new(7, 4, 4),
            Err(InvalidDimensions::NumToWinTooLargeForColumns {
                num_to_win: 4,
                columns: 4
            })
        );
    }

    #[test]
    fn bounds() {
        let dims = BoardDimensions::new(6, 7, 4).unwrap();
        assert_eq!(dims.top_row(), 5);
        assert!(dims.contains(Position::new(5, 6)));
        assert!(!dims.contains(Position::new(6, 0)));
        assert!(!dims.contains(Position::new(0, 7)));
        assert_eq!(dims.check_column(6), Ok(()));
        assert_eq!(
            dims.check_column(7),
            Err(IllegalMove::InvalidColumn {
                column: 7,
                num_columns: 7
            })
        );
    }

    #[test]
    fn deserialize_validates() {
        let dims: BoardDimensions =
            serde_json::from_str(r#"{"rows": 6, "columns": 7, "num_to_win": 4}"#).unwrap();
        assert_eq!(dims, BoardDimensions::new(6, 7, 4).unwrap());
        assert!(
            serde_json::from_str::<BoardDimensions>(r#"{"rows": 6, "columns": 7, "num_to_win": 7}"#)
                .is_err()
        );
    }
}
