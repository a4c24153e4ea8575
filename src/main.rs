use std::env;
use std::process::ExitCode;

use log::{LevelFilter, Log, Metadata, Record};

use chess_rules::config::{Config, SourceKind, USAGE};
use chess_rules::game::{Game, GameLog, GameResult};
use chess_rules::player::{ConsoleSource, MoveSource, RandomSource};

/// Writes log records to stderr so they stay out of the console board.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        eprintln!("[{}] {}", record.level(), record.args());
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn move_source(kind: SourceKind, seed: Option<u64>) -> Box<dyn MoveSource> {
    match (kind, seed) {
        (SourceKind::Human, _) => Box::new(ConsoleSource::stdio()),
        (SourceKind::Random, Some(seed)) => Box::new(RandomSource::seeded(seed)),
        (SourceKind::Random, None) => Box::new(RandomSource::new()),
    }
}

fn main() -> ExitCode {
    let config = match Config::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };
    if config.help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(if config.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        });
    }

    let mut history = config.log_path.clone().map(GameLog::new);
    let game = match history.as_mut() {
        Some(history) => Game::from_log(history),
        None => Ok(Game::new()),
    };
    let mut game = match game {
        Ok(game) => game,
        Err(e) => {
            eprintln!("cannot read game log: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Black's seed is offset by one from White's
    let mut white = move_source(config.white, config.seed);
    let mut black = move_source(config.black, config.seed.map(|s| s.wrapping_add(1)));

    match game.play(white.as_mut(), black.as_mut(), history.as_mut()) {
        Ok(GameResult::Checkmate { winner }) => {
            println!("{}\n\nCheckmate, {winner} wins", game.board());
        }
        Ok(GameResult::Stalemate { colour }) => {
            println!("{}\n\nStalemate, {colour} cannot move", game.board());
        }
        Ok(GameResult::Abandoned { colour }) => println!("{colour} left the game"),
        Err(e) => {
            eprintln!("cannot write game log: {e}");
            return ExitCode::FAILURE;
        }
    }
    println!("Game Over");
    ExitCode::SUCCESS
}
