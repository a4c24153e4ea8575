//! Step directions used by ray casting.

/// A unit step on the board as `(d_file, d_rank)`. "Up" is towards rank 8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
}

impl Direction {
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub const DIAGONAL: [Direction; 4] = [
        Direction::UpRight,
        Direction::DownRight,
        Direction::DownLeft,
        Direction::UpLeft,
    ];

    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::UpRight,
        Direction::DownRight,
        Direction::DownLeft,
        Direction::UpLeft,
    ];

    #[inline]
    #[must_use]
    pub const fn d_file(self) -> i8 {
        match self {
            Direction::Up | Direction::Down => 0,
            Direction::UpRight | Direction::Right | Direction::DownRight => 1,
            Direction::DownLeft | Direction::Left | Direction::UpLeft => -1,
        }
    }

    #[inline]
    #[must_use]
    pub const fn d_rank(self) -> i8 {
        match self {
            Direction::Left | Direction::Right => 0,
            Direction::UpLeft | Direction::Up | Direction::UpRight => 1,
            Direction::DownLeft | Direction::Down | Direction::DownRight => -1,
        }
    }
}
