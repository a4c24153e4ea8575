//! Error types for board and game operations.

use std::fmt;

use super::{Coord, PieceKind};

/// Why a proposed move was refused.
///
/// Every variant is recoverable: nothing is mutated until a move passes
/// validation, so the caller simply asks the same player again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidMove {
    /// No tile (or an unknown tile name) was given to move from
    MissingFromTile,
    /// No tile (or an unknown tile name) was given to move to
    MissingToTile,
    /// The source tile is empty
    NoPiece { tile: Coord },
    /// The piece is no longer on the board
    Captured { kind: PieceKind },
    /// The piece belongs to the other player
    NotYours { kind: PieceKind, tile: Coord },
    /// The destination is not in the piece's view
    Unreachable { kind: PieceKind, tile: Coord },
    /// The move would leave the mover's own king threatened
    IntoCheck,
}

impl fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMove::MissingFromTile => write!(f, "You must provide a tile to move from"),
            InvalidMove::MissingToTile => write!(f, "You must provide a tile to move to"),
            InvalidMove::NoPiece { tile } => write!(f, "There is no piece on {tile}"),
            InvalidMove::Captured { kind } => write!(f, "{kind} has already been captured"),
            InvalidMove::NotYours { kind, tile } => write!(f, "{kind} on {tile} is not yours"),
            InvalidMove::Unreachable { kind, tile } => write!(f, "{kind} cannot move to {tile}"),
            InvalidMove::IntoCheck => write!(f, "You must not move into check"),
        }
    }
}

impl std::error::Error for InvalidMove {}

/// Error type for tile lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileError {
    /// File or rank outside 0-7
    OutOfBounds { file: u8, rank: u8 },
    /// Not a two-character letter+digit name
    InvalidName { name: String },
}

impl fmt::Display for TileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileError::OutOfBounds { file, rank } => {
                write!(f, "Tile ({file}, {rank}) is off the board (must be 0-7)")
            }
            TileError::InvalidName { name } => write!(f, "No tile found named '{name}'"),
        }
    }
}

impl std::error::Error for TileError {}

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string must have exactly 6 space separated fields
    WrongFieldCount { found: usize },
    /// Board field does not have 8 ranks
    WrongRankCount { found: usize },
    /// Invalid piece character in the board field
    InvalidPiece { char: char },
    /// A rank does not describe exactly 8 files
    WrongFileCount { rank: usize, files: usize },
    /// Side to move must be 'w' or 'b'
    InvalidSideToMove { found: String },
    /// Full-move number is not an unsigned integer
    InvalidFullMove { found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "FEN must have exactly 6 fields, found {found}")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN board must have 8 ranks, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::WrongFileCount { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidFullMove { found } => {
                write!(f, "Invalid full-move number '{found}'")
            }
        }
    }
}

impl std::error::Error for FenError {}
