//! Core board types.
//!
//! - `PieceKind` and `Colour` - piece kinds and team colours
//! - `Coord` - tile coordinate and its two-character name
//! - `Direction` - unit steps for line-of-sight ray casting

mod coord;
mod direction;
mod piece;

pub use coord::Coord;
pub use direction::Direction;
pub use piece::{Colour, PieceKind};
