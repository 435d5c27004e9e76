use connectx::{Board, GameBoard, GameRecord, IllegalMove, Storage, Token};
use tracing::{debug, trace, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// The move at `move_idx` completed a line of `token`s.
    Won { token: Token, move_idx: usize },
    /// The move at `move_idx` filled the board without anyone winning.
    Tie { move_idx: usize },
    /// The move at `move_idx` could not be played.
    IllegalMove { move_idx: usize, err: IllegalMove },
    /// The moves ran out before the game was decided.
    Unfinished,
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Won { token, move_idx } => {
                write!(f, "{} won with move {}", token, move_idx + 1)
            }
            GameResult::Tie { move_idx } => write!(f, "Tie after move {}", move_idx + 1),
            GameResult::IllegalMove { move_idx, err } => {
                write!(f, "Move {} is illegal: {}", move_idx + 1, err)
            }
            GameResult::Unfinished => write!(f, "Unfinished"),
        }
    }
}

/// The outcome of replaying a [`GameRecord`].
pub struct Adjudication {
    pub result: GameResult,
    /// The board after the last move that was played.
    pub board: Board,
    /// How many moves were left over after the game was decided.
    pub ignored_moves: usize,
}

/// Plays the moves of `record` onto an empty board until the game is decided.
///
/// After every move, a win is checked before a tie, since the move that
/// fills the board can also complete a line.
pub fn adjudicate(record: &GameRecord, storage: Storage) -> Adjudication {
    let mut board = Board::new(storage, record.dimensions);
    debug!(%storage, dimensions = %record.dimensions, num_moves = record.moves.len(), "Replaying game");

    let mut result = GameResult::Unfinished;
    for (move_idx, mv) in record.moves.iter().enumerate() {
        let pos = match board.place_token(mv.token, mv.column) {
            Ok(pos) => pos,
            Err(err) => {
                result = GameResult::IllegalMove { move_idx, err };
                break;
            }
        };
        trace!(move_idx, token = %mv.token, %pos, "Placed token");

        // The column is valid, placing the token already checked it
        if board.check_for_win(mv.column) == Ok(true) {
            result = GameResult::Won {
                token: mv.token,
                move_idx,
            };
            break;
        }
        if board.check_tie() {
            result = GameResult::Tie { move_idx };
            break;
        }
    }

    let ignored_moves = match result {
        GameResult::Won { move_idx, .. } | GameResult::Tie { move_idx } => {
            record.moves.len() - move_idx - 1
        }
        GameResult::IllegalMove { .. } | GameResult::Unfinished => 0,
    };
    if ignored_moves > 0 {
        warn!(ignored_moves, "The game was over before all moves were played");
    }

    Adjudication {
        result,
        board,
        ignored_moves,
    }
}
