use super::super::{Board, Colour, Coord};

/// `(d_file, d_rank)` jumps of a knight
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (1, -2),
    (-1, -2),
];

impl Board {
    /// Knights jump, so nothing blocks them en route. A target is kept when it
    /// is on the board and not held by an own piece.
    pub(crate) fn knight_view(&self, from: Coord, colour: Colour) -> Vec<Coord> {
        KNIGHT_OFFSETS
            .iter()
            .filter_map(|&(d_file, d_rank)| from.offset(d_file, d_rank))
            .filter(|&to| !matches!(self.kind_at(to), Some((other, _)) if other == colour))
            .collect()
    }
}
