use anyhow::{bail, Context};
use connectx::{
    BoardDimensions, DenseBoard, GameBoard, GameRecord, Move, Position, SparseBoard, Token,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

/// How often a random column is tried instead of a free one, to also
/// compare how the boards reject full and nonexistent columns.
const ODD_COLUMN_PROBABILITY: f64 = 0.1;

pub struct FuzzedGame {
    /// The moves that were accepted by both boards.
    pub record: GameRecord,
    /// `None` if the game ended in a tie.
    pub winner: Option<Token>,
}

/// Plays random moves on a dense and a sparse board side by side until the
/// game is decided, and returns an error as soon as the two boards disagree.
pub fn play_random_game(
    rng: &mut StdRng,
    dimensions: BoardDimensions,
    tokens: &[Token],
) -> anyhow::Result<FuzzedGame> {
    let mut dense = DenseBoard::new(dimensions);
    let mut sparse = SparseBoard::new(dimensions);
    let mut record = GameRecord::new(dimensions);

    loop {
        let token = *tokens.choose(rng).context("No tokens to play with")?;
        let column = if rng.gen_bool(ODD_COLUMN_PROBABILITY) {
            // One past the end, so that invalid columns are tried as well
            rng.gen_range(0..=dimensions.columns())
        } else {
            let free_columns: Vec<usize> = (0..dimensions.columns())
                .filter(|&column| dense.check_if_free(column) == Ok(true))
                .collect();
            *free_columns
                .choose(rng)
                .context("No free column left on a board that is not full")?
        };

        let placed = dense.place_token(token, column);
        let placed_sparse = sparse.place_token(token, column);
        if placed != placed_sparse {
            bail!(
                "Boards disagree on placing {} in column {}: dense {:?}, sparse {:?}",
                token,
                column,
                placed,
                placed_sparse
            );
        }
        compare_boards(&dense, &sparse)?;

        let pos = match placed {
            Ok(pos) => pos,
            Err(err) => {
                trace!(%token, column, %err, "Move rejected by both boards");
                continue;
            }
        };
        record.moves.push(Move { token, column });
        compare_lines(&dense, &sparse, pos, tokens)?;

        if dense.check_for_win(column)? {
            return Ok(FuzzedGame {
                record,
                winner: Some(token),
            });
        }
        if dense.check_tie() {
            return Ok(FuzzedGame {
                record,
                winner: None,
            });
        }
    }
}

/// Compares every cell and every column-level query of the two boards.
pub fn compare_boards(dense: &DenseBoard, sparse: &SparseBoard) -> anyhow::Result<()> {
    let dims = dense.dimensions();
    if dims != sparse.dimensions() {
        bail!("Boards have different dimensions: {} and {}", dims, sparse.dimensions());
    }
    if dense.check_tie() != sparse.check_tie() {
        bail!("Boards disagree on tie: dense says {}", dense.check_tie());
    }
    for column in 0..dims.columns() {
        let (dense_free, sparse_free) = (dense.check_if_free(column), sparse.check_if_free(column));
        if dense_free != sparse_free {
            bail!(
                "Boards disagree on whether column {} is free: dense {:?}, sparse {:?}",
                column,
                dense_free,
                sparse_free
            );
        }
        let (dense_win, sparse_win) = (dense.check_for_win(column), sparse.check_for_win(column));
        if dense_win != sparse_win {
            bail!(
                "Boards disagree on a win in column {}: dense {:?}, sparse {:?}",
                column,
                dense_win,
                sparse_win
            );
        }
        for row in 0..dims.rows() {
            let pos = Position::new(row, column);
            let (dense_token, sparse_token) = (dense.whats_at_pos(pos), sparse.whats_at_pos(pos));
            if dense_token != sparse_token {
                bail!(
                    "Boards disagree at ({}): dense {:?}, sparse {:?}",
                    pos,
                    dense_token,
                    sparse_token
                );
            }
            if let Some(token) = dense_token {
                if !sparse.is_player_at_pos(pos, token) || !dense.is_player_at_pos(pos, token) {
                    bail!("{} at ({}) is not found by is_player_at_pos()", token, pos);
                }
            }
        }
    }
    Ok(())
}

// Compares the individual line checks around `pos` for every token.
fn compare_lines(
    dense: &DenseBoard,
    sparse: &SparseBoard,
    pos: Position,
    tokens: &[Token],
) -> anyhow::Result<()> {
    for &token in tokens {
        let dense_lines = [
            dense.check_horiz_win(pos, token),
            dense.check_vert_win(pos, token),
            dense.check_diag_win(pos, token),
        ];
        let sparse_lines = [
            sparse.check_horiz_win(pos, token),
            sparse.check_vert_win(pos, token),
            sparse.check_diag_win(pos, token),
        ];
        if dense_lines != sparse_lines {
            bail!(
                "Boards disagree on the lines of {} through ({}): dense {:?}, sparse {:?}",
                token,
                pos,
                dense_lines,
                sparse_lines
            );
        }
    }
    Ok(())
}
