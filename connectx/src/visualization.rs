use std::fmt::Write;

use crate::{GameBoard, Position};

/// Draws the board as text, topmost row first.
///
/// The first line holds the column indices, then every row follows with each
/// cell showing its token (or a blank):
///
/// ```text
/// | 0| 1| 2|
/// |  |  |  |
/// |  |  |  |
/// |X |O |  |
/// ```
///
/// Only [`GameBoard::whats_at_pos()`] and the board's size are used, so this
/// works for every storage strategy.
pub fn render(board: &(impl GameBoard + ?Sized)) -> String {
    let (rows, columns) = (board.num_rows(), board.num_columns());
    // Every cell takes three characters, plus a pipe and newline per line
    let mut result = String::with_capacity((rows + 1) * (3 * columns + 2));

    for column in 0..columns {
        if column < 10 {
            result += "| ";
        } else {
            result += "|";
        }
        // Writing into a String cannot fail
        let _ = write!(result, "{}", column);
    }
    result += "|\n";

    for row in (0..rows).rev() {
        for column in 0..columns {
            result.push('|');
            match board.whats_at_pos(Position::new(row, column)) {
                Some(token) => result.push(token.as_char()),
                None => result.push(' '),
            }
            result.push(' ');
        }
        result += "|\n";
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{token, Board, BoardDimensions, DenseBoard, SparseBoard, Storage};

    #[test]
    fn empty_three_by_three() {
        let dims = BoardDimensions::new_unchecked(3, 3, 3);
        let expected = "| 0| 1| 2|\n|  |  |  |\n|  |  |  |\n|  |  |  |\n";
        assert_eq!(render(&DenseBoard::new(dims)), expected);
        assert_eq!(render(&SparseBoard::new(dims)), expected);
    }

    #[test]
    fn tokens_bottom_row_last() {
        let dims = BoardDimensions::new(4, 5, 3).unwrap();
        for storage in [Storage::Dense, Storage::Sparse] {
            let mut board = Board::new(storage, dims);
            board.place_token(token!('X'), 0).unwrap();
            board.place_token(token!('O'), 0).unwrap();
            board.place_token(token!('X'), 4).unwrap();
            let expected = "\
| 0| 1| 2| 3| 4|
|  |  |  |  |  |
|  |  |  |  |  |
|O |  |  |  |  |
|X |  |  |  |X |
";
            assert_eq!(render(&board), expected);
            assert_eq!(board.to_string(), expected);
        }
    }

    #[test]
    fn two_digit_columns() {
        let board = SparseBoard::new(BoardDimensions::new(4, 12, 3).unwrap());
        let header = render(&board).lines().next().unwrap().to_owned();
        assert_eq!(header, "| 0| 1| 2| 3| 4| 5| 6| 7| 8| 9|10|11|");
        assert_eq!(board.to_string().lines().count(), 5);
    }
}
