//! Players and the move sources that act for them.
//!
//! A `Player` owns the ids of its pieces; the pieces themselves live in the
//! board arena. A `MoveSource` is whatever supplies the next move for a
//! player: the console, a random mover, a scripted list.

mod console;
mod random;
mod source;

pub use console::ConsoleSource;
pub use random::RandomSource;
pub use source::{MoveSource, ScriptedSource};

use crate::board::{Board, Colour, PieceId, PieceKind};

/// One side of the game and the pieces it was dealt, captured or not.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    colour: Colour,
    pieces: Vec<PieceId>,
}

impl Player {
    #[must_use]
    pub fn new(colour: Colour, pieces: Vec<PieceId>) -> Self {
        Player { colour, pieces }
    }

    #[inline]
    #[must_use]
    pub const fn colour(&self) -> Colour {
        self.colour
    }

    /// All pieces dealt to this player, including captured ones.
    #[must_use]
    pub fn pieces(&self) -> &[PieceId] {
        &self.pieces
    }

    /// Pieces still standing on the board.
    pub fn live_pieces<'a>(&'a self, board: &'a Board) -> impl Iterator<Item = PieceId> + 'a {
        self.pieces
            .iter()
            .copied()
            .filter(|&id| board.piece(id).is_alive())
    }

    /// The player's king, `None` if it was never dealt one.
    #[must_use]
    pub fn king(&self, board: &Board) -> Option<PieceId> {
        self.pieces
            .iter()
            .copied()
            .find(|&id| board.piece(id).kind() == PieceKind::King)
    }
}
