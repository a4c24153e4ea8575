//! Game state: the board, both players and the turn counters.
//!
//! # Example
//! ```
//! use chess_rules::game::{Game, GameStatus};
//!
//! let mut game = Game::new();
//! assert!(game.advance_turn("E2", "E4").is_accepted());
//! assert!(!game.advance_turn("E4", "E5").is_accepted()); // Black to move
//! assert_eq!(game.status(), GameStatus::Ongoing);
//! ```

mod builder;
mod fen;
mod history;
mod legality;
mod turn;

pub use builder::GameBuilder;
pub use fen::STARTING_FEN;
pub use history::GameLog;
pub use turn::{GameResult, GameStatus, TurnOutcome};

use crate::board::{Board, Colour};
use crate::player::Player;

/// A game of chess in progress.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) players: [Player; 2],
    pub(crate) current_turn: usize,
    pub(crate) full_turn_count: u32,
}

impl Game {
    /// The standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        GameBuilder::starting_position().build()
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    #[inline]
    #[must_use]
    pub fn player(&self, colour: Colour) -> &Player {
        &self.players[colour.index()]
    }

    /// The player of the other colour.
    #[inline]
    #[must_use]
    pub fn opponent(&self, colour: Colour) -> &Player {
        self.player(colour.opponent())
    }

    /// Index of the side to move: 0 for White, 1 for Black.
    #[inline]
    #[must_use]
    pub const fn current_turn(&self) -> usize {
        self.current_turn
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Colour {
        self.players[self.current_turn].colour()
    }

    #[inline]
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_turn]
    }

    /// Starts at 1 and increases after each Black move.
    #[inline]
    #[must_use]
    pub const fn full_turn_count(&self) -> u32 {
        self.full_turn_count
    }

    /// An independent copy of the whole position for hypothetical moves.
    ///
    /// Tiles and pieces refer to each other by index into arenas owned by the
    /// board, so the copy shares no state with `self`.
    #[must_use]
    pub fn clone_position(&self) -> Game {
        Game {
            board: self.board.clone(),
            players: self.players.clone(),
            current_turn: self.current_turn,
            full_turn_count: self.full_turn_count,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
