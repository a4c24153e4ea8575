//! Board representation and per-piece view generation.
//!
//! The board is an arena: 64 tiles indexed by coordinate and a growing list
//! of pieces indexed by `PieceId`. A tile stores the id of its occupant and
//! a piece stores the coordinate of its tile; both links are updated together
//! so they always agree.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Colour, PieceKind};
//!
//! let mut board = Board::empty();
//! let rook = board.place_piece("A1".parse().unwrap(), Colour::White, PieceKind::Rook);
//! assert_eq!(board.view(rook).len(), 14);
//! ```

mod display;
mod error;
mod fen;
mod make_move;
mod movegen;
mod state;
mod types;
mod validate;

#[cfg(test)]
mod tests;

pub use error::{FenError, InvalidMove, TileError};
pub use state::{Board, Piece, PieceId, Tile};
pub use types::{Colour, Coord, Direction, PieceKind};

pub(crate) use fen::parse_placement;
