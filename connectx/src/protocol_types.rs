use serde::{Deserialize, Serialize};

use crate::{BoardDimensions, Token};

/// A single move: which token was dropped into which column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub token: Token,
    /// Zero-based, counted from the left.
    pub column: usize,
}

/// A game as a list of moves, in the order they were played.
///
/// Nothing here checks that the moves are legal, or that the game ended.
/// That is up to whoever replays it onto a board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub dimensions: BoardDimensions,
    pub moves: Vec<Move>,
}

impl GameRecord {
    pub fn new(dimensions: BoardDimensions) -> Self {
        Self {
            dimensions,
            moves: Vec::new(),
        }
    }
}
