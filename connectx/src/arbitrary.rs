use std::collections::BTreeSet;

use quickcheck::{Arbitrary, Gen};

use crate::{BoardDimensions, Move, Storage, Token};

#[derive(Clone, Debug)]
pub struct GameInput {
    pub storage: Storage,
    pub dimensions: BoardDimensions,
    // Columns are always valid, but may be full
    pub moves: Vec<Move>,
}

impl GameInput {
    /// The distinct tokens used in this game.
    pub fn tokens(&self) -> Vec<Token> {
        let set: BTreeSet<Token> = self.moves.iter().map(|mv| mv.token).collect();
        set.into_iter().collect()
    }
}

impl Arbitrary for GameInput {
    fn arbitrary(g: &mut Gen) -> Self {
        // Small boards, so that columns fill up and lines form
        let rows = 4 + usize::from(u8::arbitrary(g) % 5);
        let columns = 4 + usize::from(u8::arbitrary(g) % 5);
        // At least 3, and less than both rows and columns
        let num_to_win = 3 + usize::from(u8::arbitrary(g)) % (rows.min(columns) - 3);
        let dimensions = BoardDimensions::new(rows, columns, num_to_win).unwrap();

        let storage = *g.choose(&[Storage::Dense, Storage::Sparse]).unwrap();

        // Enough moves to fill the board in most cases
        let num_moves = usize::from(u8::arbitrary(g)) % (rows * columns + columns);
        let moves = (0..num_moves)
            .map(|_| Move {
                token: Token::new(*g.choose(&['X', 'O', '#']).unwrap()).unwrap(),
                column: usize::from(u8::arbitrary(g)) % columns,
            })
            .collect();

        GameInput {
            storage,
            dimensions,
            moves,
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        // Shorter games with the same board
        let this = self.clone();
        Box::new(self.moves.shrink().map(move |moves| GameInput {
            moves,
            ..this.clone()
        }))
    }
}

impl Arbitrary for Move {
    fn arbitrary(g: &mut Gen) -> Self {
        Move {
            token: Token::new(*g.choose(&['X', 'O']).unwrap()).unwrap(),
            column: usize::from(u8::arbitrary(g) % 4),
        }
    }
}
