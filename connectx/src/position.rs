use serde::{Deserialize, Serialize};

/// A cell on the board.
///
/// Row 0 is the bottom row, column 0 is the leftmost column.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    row: usize,
    column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// The position `shift` steps away in direction `(d_row, d_column)`.
    ///
    /// Returns `None` if either coordinate would become negative. The upper
    /// bounds are not checked, since they depend on the board.
    pub fn offset(self, d_row: isize, d_column: isize, shift: usize) -> Option<Position> {
        let shift = isize::try_from(shift).ok()?;
        Some(Position {
            row: self.row.checked_add_signed(d_row.checked_mul(shift)?)?,
            column: self.column.checked_add_signed(d_column.checked_mul(shift)?)?,
        })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_equality() {
        assert_eq!(Position::new(2, 3), Position::new(2, 3));
        assert_ne!(Position::new(2, 3), Position::new(3, 2));
    }

    #[test]
    fn display() {
        assert_eq!(Position::new(2, 3).to_string(), "2,3");
        assert_eq!(Position::new(10, 0).to_string(), "10,0");
    }

    #[test]
    fn offset() {
        let pos = Position::new(2, 3);
        assert_eq!(pos.offset(1, 1, 2), Some(Position::new(4, 5)));
        assert_eq!(pos.offset(-1, 1, 2), Some(Position::new(0, 5)));
        assert_eq!(pos.offset(-1, 0, 3), None);
        assert_eq!(pos.offset(0, -1, 4), None);
    }

    #[test]
    fn serde_roundtrip() {
        let json = serde_json::to_string(&Position::new(1, 4)).unwrap();
        assert_eq!(json, r#"{"row":1,"column":4}"#);
        assert_eq!(
            serde_json::from_str::<Position>(&json).unwrap(),
            Position::new(1, 4)
        );
    }
}
