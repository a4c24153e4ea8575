use super::super::{Board, Colour, Coord, Direction};
use super::Sight;

impl Board {
    /// One step in all eight directions. Castling is not generated.
    pub(crate) fn king_view(&self, from: Coord, colour: Colour) -> Vec<Coord> {
        self.line_of_sight(from, colour, &Direction::ALL, Sight::steps(1))
    }
}
