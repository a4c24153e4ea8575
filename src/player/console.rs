use std::io::{self, BufRead, Write};

use super::MoveSource;
use crate::game::Game;

enum Input<R> {
    /// Locks stdin per line, so several sources can share it
    Stdin(io::Stdin),
    Reader(R),
}

impl<R: BufRead> Input<R> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        match self {
            Input::Stdin(stdin) => stdin.read_line(buf),
            Input::Reader(reader) => reader.read_line(buf),
        }
    }
}

/// Reads moves such as `A2 A4` from a line-oriented reader, printing the
/// status message and the board before each prompt.
pub struct ConsoleSource<R, W> {
    input: Input<R>,
    output: W,
}

impl ConsoleSource<io::Empty, io::Stdout> {
    /// Console source on the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        ConsoleSource {
            input: Input::Stdin(io::stdin()),
            output: io::stdout(),
        }
    }
}

impl<R: BufRead, W: Write> ConsoleSource<R, W> {
    pub fn new(input: R, output: W) -> Self {
        ConsoleSource {
            input: Input::Reader(input),
            output,
        }
    }

    fn prompt(&mut self, game: &Game, message: &str) -> io::Result<Option<(String, String)>> {
        let mut message = message.to_string();
        loop {
            writeln!(self.output, "{message}\n\n{}\n", game.board())?;
            write!(self.output, "Enter your move: ")?;
            self.output.flush()?;

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => return Ok(None),
                Ok(_) => {}
                // Not UTF-8; the line is consumed and handled as malformed
                Err(e) if e.kind() == io::ErrorKind::InvalidData => line.clear(),
                Err(e) => return Err(e),
            }
            let tiles: Vec<&str> = line.split_whitespace().collect();
            if let [from, to] = tiles[..] {
                return Ok(Some((from.to_ascii_uppercase(), to.to_ascii_uppercase())));
            }
            message =
                "Invalid move, please provide a move in the correct format eg. 'A2 A4'".to_string();
        }
    }
}

impl<R: BufRead, W: Write> MoveSource for ConsoleSource<R, W> {
    fn next_move(&mut self, game: &Game, message: &str) -> Option<(String, String)> {
        match self.prompt(game, message) {
            Ok(mv) => mv,
            Err(e) => {
                log::error!("console move source failed: {e}");
                None
            }
        }
    }
}
