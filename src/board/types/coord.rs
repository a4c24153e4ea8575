//! Tile coordinates and names.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::direction::Direction;
use crate::board::error::TileError;

/// Position of a tile: `file` 0-7 maps to the letters A-H, `rank` 0-7 to the
/// digits 1-8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coord {
    file: u8,
    rank: u8,
}

impl Coord {
    /// Create a coordinate, or `None` when either part is off the board.
    #[must_use]
    pub fn new(file: i8, rank: i8) -> Option<Self> {
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Coord {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// Create a coordinate from in-range parts.
    pub(crate) const fn from_parts(file: u8, rank: u8) -> Self {
        Coord { file, rank }
    }

    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.file
    }

    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Index into a 64-tile arena (A1=0, B1=1, ..., H8=63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Coord {
            file: (index % 8) as u8,
            rank: (index / 8) as u8,
        }
    }

    /// The neighbouring coordinate one step along `direction`, if on the board.
    #[inline]
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        self.offset(direction.d_file(), direction.d_rank())
    }

    #[inline]
    #[must_use]
    pub fn offset(self, d_file: i8, d_rank: i8) -> Option<Self> {
        Coord::new(self.file as i8 + d_file, self.rank as i8 + d_rank)
    }

    /// Iterate all 64 coordinates, A1 first.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..64).map(Coord::from_index)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file + b'A') as char, self.rank + 1)
    }
}

impl TryFrom<(u8, u8)> for Coord {
    type Error = TileError;

    fn try_from((file, rank): (u8, u8)) -> Result<Self, Self::Error> {
        if file >= 8 || rank >= 8 {
            return Err(TileError::OutOfBounds { file, rank });
        }
        Ok(Coord { file, rank })
    }
}

impl FromStr for Coord {
    type Err = TileError;

    /// Parse a two-character tile name such as `"A2"`. Letters are accepted
    /// in either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TileError::InvalidName {
            name: s.to_string(),
        };
        let mut chars = s.trim().chars();
        let (Some(letter), Some(digit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let file = match letter.to_ascii_uppercase() {
            c @ 'A'..='H' => c as u8 - b'A',
            _ => return Err(invalid()),
        };
        let rank = match digit {
            c @ '1'..='8' => c as u8 - b'1',
            _ => return Err(invalid()),
        };
        Ok(Coord { file, rank })
    }
}
