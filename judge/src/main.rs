use std::path::PathBuf;

use clap::{Parser, Subcommand};
use connectx::{BoardDimensions, Storage, Token};
use judge::{adjudicate, load_game_record, play_random_game, GameResult, Recorder};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info", global = true)]
    log_level: LevelFilter,
}

#[derive(Subcommand)]
enum Command {
    /// Replay recorded games and report how they ended
    Replay {
        /// Paths to game record JSON files
        #[arg(required = true)]
        game_records: Vec<PathBuf>,

        /// Which board implementation to replay the games on ("dense" or "sparse")
        #[arg(short, long, default_value_t = Storage::Dense)]
        storage: Storage,

        /// Print the final board of every game
        #[arg(long, default_value_t = false)]
        show_board: bool,
    },
    /// Play random games on both board implementations and compare them after every move
    Fuzz {
        /// How many games to play
        #[arg(short, long, default_value_t = 100)]
        num_games: usize,

        /// RNG seed
        #[arg(long)]
        seed: Option<u64>,

        #[arg(long, default_value_t = 6)]
        rows: usize,

        #[arg(long, default_value_t = 7)]
        columns: usize,

        /// How many tokens in a row are needed to win
        #[arg(long, default_value_t = 4)]
        num_to_win: usize,

        /// The tokens to pick from randomly, one character each
        #[arg(long, default_value = "XO")]
        tokens: String,

        /// Record the games as JSON files into this directory
        #[arg(short, long)]
        record_games_to_directory: Option<PathBuf>,
    },
}

#[derive(Default)]
struct Tally {
    wins: usize,
    ties: usize,
    illegal: usize,
    unfinished: usize,
}

fn replay(game_records: &[PathBuf], storage: Storage, show_board: bool) -> anyhow::Result<Tally> {
    let mut tally = Tally::default();
    for path in game_records {
        let record = load_game_record(path)?;
        let adjudication = adjudicate(&record, storage);
        match adjudication.result {
            GameResult::Won { .. } => tally.wins += 1,
            GameResult::Tie { .. } => tally.ties += 1,
            GameResult::IllegalMove { .. } => tally.illegal += 1,
            GameResult::Unfinished => tally.unfinished += 1,
        }
        println!("{}: {}", path.display(), adjudication.result);
        if show_board {
            println!("{}", adjudication.board);
        }
    }
    Ok(tally)
}

fn fuzz(
    num_games: usize,
    seed: Option<u64>,
    dimensions: BoardDimensions,
    tokens: &[Token],
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<Tally> {
    // Get a random seed
    let seed = seed.unwrap_or_else(rand::random);
    info!(seed, %dimensions, "Fuzzing");
    let mut rng = StdRng::seed_from_u64(seed);

    let mut tally = Tally::default();
    for game_idx in 0..num_games {
        let game = play_random_game(&mut rng, dimensions, tokens)
            .map_err(|err| err.context(format!("Game {} with seed {}", game_idx, seed)))?;
        match game.winner {
            Some(winner) => {
                debug!(%winner, game_idx, num_moves = game.record.moves.len());
                tally.wins += 1;
            }
            None => {
                debug!(game_idx, "Tie");
                tally.ties += 1;
            }
        }
        if let Some(recorder) = recorder {
            recorder.write_game_recording(&game.record)?;
        }
    }
    Ok(tally)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let tally = match args.command {
        Command::Replay {
            game_records,
            storage,
            show_board,
        } => replay(&game_records, storage, show_board)?,
        Command::Fuzz {
            num_games,
            seed,
            rows,
            columns,
            num_to_win,
            tokens,
            record_games_to_directory,
        } => {
            let dimensions = BoardDimensions::new(rows, columns, num_to_win)?;
            let tokens = tokens
                .chars()
                .map(Token::new)
                .collect::<Result<Vec<Token>, _>>()?;
            let mut recorder = if let Some(dir_path) = record_games_to_directory {
                Some(Recorder::new(dir_path)?)
            } else {
                None
            };
            fuzz(num_games, seed, dimensions, &tokens, &mut recorder)?
        }
    };

    eprintln!(
        "End result:\n- {} wins\n- {} ties\n- {} illegal moves\n- {} unfinished",
        tally.wins, tally.ties, tally.illegal, tally.unfinished
    );

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
