use std::collections::BTreeMap;

use super::{BoardDimensions, GameBoard, IllegalMove};
use crate::{Position, Token};

/// A board that only stores the positions of the tokens that have been played.
///
/// Memory use is proportional to the number of tokens on the board, at the
/// cost of lookups that are linear in that number. This pays off for large
/// boards that stay mostly empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SparseBoard {
    /// For every token, the positions it occupies, in the order they were played.
    fields: BTreeMap<Token, Vec<Position>>,
    dimensions: BoardDimensions,
}

impl SparseBoard {
    /// Creates an empty board.
    pub fn new(dimensions: BoardDimensions) -> Self {
        Self {
            fields: BTreeMap::new(),
            dimensions,
        }
    }

    /// The positions occupied by `token`, in the order they were played.
    pub fn positions_of(&self, token: Token) -> &[Position] {
        self.fields.get(&token).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn num_tokens_placed(&self) -> usize {
        self.fields.values().map(Vec::len).sum()
    }

    fn is_occupied(&self, pos: Position) -> bool {
        self.fields
            .values()
            .any(|positions| positions.contains(&pos))
    }
}

impl GameBoard for SparseBoard {
    fn dimensions(&self) -> BoardDimensions {
        self.dimensions
    }

    fn place_token(&mut self, token: Token, column: usize) -> Result<Position, IllegalMove> {
        self.dimensions.check_column(column)?;
        let pos = (0..self.dimensions.rows())
            .map(|row| Position::new(row, column))
            .find(|&pos| !self.is_occupied(pos))
            .ok_or(IllegalMove::ColumnFull { column })?;
        self.fields.entry(token).or_default().push(pos);
        Ok(pos)
    }

    fn whats_at_pos(&self, pos: Position) -> Option<Token> {
        assert!(
            self.dimensions.contains(pos),
            "Position ({}) is outside of the {} board",
            pos,
            self.dimensions
        );
        self.fields
            .iter()
            .find(|(_, positions)| positions.contains(&pos))
            .map(|(&token, _)| token)
    }

    // Only the list of this token has to be searched
    fn is_player_at_pos(&self, pos: Position, token: Token) -> bool {
        self.positions_of(token).contains(&pos)
    }
}

impl std::fmt::Display for SparseBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::render(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token;

    fn board() -> SparseBoard {
        SparseBoard::new(BoardDimensions::new(6, 7, 4).unwrap())
    }

    #[test]
    fn positions_kept_in_play_order() {
        let mut board = board();
        board.place_token(token!('X'), 4).unwrap();
        board.place_token(token!('O'), 1).unwrap();
        board.place_token(token!('X'), 1).unwrap();
        board.place_token(token!('X'), 0).unwrap();
        assert_eq!(
            board.positions_of(token!('X')),
            &[Position::new(0, 4), Position::new(1, 1), Position::new(0, 0)]
        );
        assert_eq!(board.positions_of(token!('O')), &[Position::new(0, 1)]);
        assert!(board.positions_of(token!('Z')).is_empty());
        assert_eq!(board.num_tokens_placed(), 4);
    }

    #[test]
    fn lookups() {
        let mut board = board();
        board.place_token(token!('X'), 3).unwrap();
        board.place_token(token!('O'), 3).unwrap();
        assert_eq!(board.whats_at_pos(Position::new(0, 3)), Some(token!('X')));
        assert_eq!(board.whats_at_pos(Position::new(1, 3)), Some(token!('O')));
        assert_eq!(board.whats_at_pos(Position::new(2, 3)), None);
        assert!(board.is_player_at_pos(Position::new(1, 3), token!('O')));
        assert!(!board.is_player_at_pos(Position::new(1, 3), token!('X')));
        assert!(!board.is_player_at_pos(Position::new(1, 3), token!('Z')));
    }

    #[test]
    fn full_column_is_an_error() {
        let mut board = board();
        for _ in 0..6 {
            board.place_token(token!('O'), 6).unwrap();
        }
        let before = board.clone();
        assert_eq!(
            board.place_token(token!('X'), 6),
            Err(IllegalMove::ColumnFull { column: 6 })
        );
        // The failed placement did not even register the new token
        assert_eq!(board, before);
        assert!(board.positions_of(token!('X')).is_empty());
    }

    #[test]
    #[should_panic]
    fn out_of_range_lookup_panics() {
        board().whats_at_pos(Position::new(6, 0));
    }
}
