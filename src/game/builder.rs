//! Fluent builder for game positions.
//!
//! Pieces are queued tile by tile, then placed on a fresh board and dealt to
//! the player of their colour when the game is built.
//!
//! # Example
//! ```
//! use chess_rules::board::{Colour, PieceKind};
//! use chess_rules::game::GameBuilder;
//!
//! let game = GameBuilder::new()
//!     .piece("E1".parse().unwrap(), Colour::White, PieceKind::King)
//!     .piece("E8".parse().unwrap(), Colour::Black, PieceKind::King)
//!     .piece("A2".parse().unwrap(), Colour::White, PieceKind::Pawn)
//!     .side_to_move(Colour::White)
//!     .build();
//! assert_eq!(game.board().to_fen(), "4k3/8/8/8/8/8/P7/4K3");
//! ```

use super::Game;
use crate::board::{Board, Colour, Coord, PieceKind};
use crate::player::Player;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// A fluent builder for `Game` positions.
#[derive(Clone, Debug)]
pub struct GameBuilder {
    pieces: Vec<(Coord, Colour, PieceKind)>,
    side_to_move: Colour,
    full_turn_count: u32,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBuilder {
    /// An empty board, White to move, turn 1.
    #[must_use]
    pub fn new() -> Self {
        GameBuilder {
            pieces: Vec::new(),
            side_to_move: Colour::White,
            full_turn_count: 1,
        }
    }

    /// A builder holding the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        for colour in Colour::BOTH {
            for file in 0..8u8 {
                builder.pieces.push((
                    Coord::from_parts(file, colour.pawn_rank()),
                    colour,
                    PieceKind::Pawn,
                ));
            }
            for (file, &kind) in BACK_RANK.iter().enumerate() {
                builder.pieces.push((
                    Coord::from_parts(file as u8, colour.back_rank()),
                    colour,
                    kind,
                ));
            }
        }
        builder
    }

    /// Place a piece, replacing whatever was queued for that tile.
    #[must_use]
    pub fn piece(mut self, tile: Coord, colour: Colour, kind: PieceKind) -> Self {
        self.pieces.retain(|(t, _, _)| *t != tile);
        self.pieces.push((tile, colour, kind));
        self
    }

    /// Remove a piece from a tile.
    #[must_use]
    pub fn clear(mut self, tile: Coord) -> Self {
        self.pieces.retain(|(t, _, _)| *t != tile);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, colour: Colour) -> Self {
        self.side_to_move = colour;
        self
    }

    /// Full-move number; 0 is treated as 1.
    #[must_use]
    pub const fn full_turn_count(mut self, count: u32) -> Self {
        self.full_turn_count = if count == 0 { 1 } else { count };
        self
    }

    /// Build the game. Each player's collection lists its pieces in the
    /// order they were queued.
    #[must_use]
    pub fn build(self) -> Game {
        let mut board = Board::empty();
        let mut owned: [Vec<_>; 2] = [Vec::new(), Vec::new()];
        for (tile, colour, kind) in self.pieces {
            let id = board.place_piece(tile, colour, kind);
            owned[colour.index()].push(id);
        }
        let [white, black] = owned;

        Game {
            board,
            players: [
                Player::new(Colour::White, white),
                Player::new(Colour::Black, black),
            ],
            current_turn: self.side_to_move.index(),
            full_turn_count: self.full_turn_count,
        }
    }
}
