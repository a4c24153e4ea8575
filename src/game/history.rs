//! Append-only FEN log of a game, one line per completed ply.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::Game;

#[derive(Clone, Debug)]
pub struct GameLog {
    path: PathBuf,
}

impl GameLog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        GameLog { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append the game's current FEN as a new line, creating the file if
    /// needed.
    pub fn append(&mut self, game: &Game) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", game.to_fen())
    }

    /// The last non-empty line, or `None` for a missing or empty file.
    pub fn latest_fen(&self) -> io::Result<Option<String>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };
        Ok(contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .last()
            .map(str::to_string))
    }
}

impl Game {
    /// Rebuild a game from the last line of `history`.
    ///
    /// A missing, empty or malformed log starts a fresh standard game, whose
    /// position is appended to the log straight away.
    pub fn from_log(history: &mut GameLog) -> io::Result<Game> {
        let resumed = match history.latest_fen()? {
            Some(fen) => match Game::try_from_fen(&fen) {
                Ok(game) => Some(game),
                Err(e) => {
                    log::warn!(
                        "ignoring malformed FEN in {}: {e}; starting a new game",
                        history.path().display()
                    );
                    None
                }
            },
            None => None,
        };
        if let Some(game) = resumed {
            log::info!("resumed game from {}", history.path().display());
            return Ok(game);
        }

        let game = Game::new();
        history.append(&game)?;
        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Colour;

    fn temp_log(name: &str) -> GameLog {
        let path = std::env::temp_dir().join(format!(
            "chess_rules_{}_{name}.log",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        GameLog::new(path)
    }

    #[test]
    fn test_missing_log_has_no_fen() {
        let log = temp_log("missing");
        assert_eq!(log.latest_fen().unwrap(), None);
    }

    #[test]
    fn test_append_and_latest() {
        let mut log = temp_log("append");
        let mut game = Game::new();
        log.append(&game).unwrap();
        assert!(game.advance_turn("D2", "D4").is_accepted());
        log.append(&game).unwrap();

        let contents = fs::read_to_string(log.path()).unwrap();
        assert_eq!(contents.lines().count(), 2);
        assert_eq!(log.latest_fen().unwrap(), Some(game.to_fen()));
        let _ = fs::remove_file(log.path());
    }

    #[test]
    fn test_from_log_resumes_latest_position() {
        let mut log = temp_log("resume");
        fs::write(
            log.path(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1\n7k/Q7/6K1/8/8/8/8/8 b - - 0 9\n",
        )
        .unwrap();

        let game = Game::from_log(&mut log).unwrap();
        assert_eq!(game.side_to_move(), Colour::Black);
        assert_eq!(game.full_turn_count(), 9);
        assert_eq!(fs::read_to_string(log.path()).unwrap().lines().count(), 2);
        let _ = fs::remove_file(log.path());
    }

    #[test]
    fn test_from_log_zero_full_move_keeps_position() {
        let mut log = temp_log("zero_turn");
        fs::write(log.path(), "7k/Q7/6K1/8/8/8/8/8 w - - 0 0\n").unwrap();

        let game = Game::from_log(&mut log).unwrap();
        assert_eq!(game.to_fen(), "7k/Q7/6K1/8/8/8/8/8 w - - 0 1");
        assert_eq!(fs::read_to_string(log.path()).unwrap().lines().count(), 1);
        let _ = fs::remove_file(log.path());
    }

    #[test]
    fn test_from_log_malformed_starts_fresh() {
        let mut log = temp_log("malformed");
        fs::write(log.path(), "rnbqkbnr/pppppppp w\n").unwrap();

        let game = Game::from_log(&mut log).unwrap();
        assert_eq!(game, Game::new());
        assert_eq!(log.latest_fen().unwrap(), Some(Game::new().to_fen()));
        let _ = fs::remove_file(log.path());
    }

    #[test]
    fn test_from_log_empty_file_starts_fresh() {
        let mut log = temp_log("empty");
        let game = Game::from_log(&mut log).unwrap();
        assert_eq!(game, Game::new());
        assert_eq!(fs::read_to_string(log.path()).unwrap().lines().count(), 1);
        let _ = fs::remove_file(log.path());
    }
}
