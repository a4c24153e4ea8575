use super::super::{Board, Colour, Coord, Direction};
use super::Sight;

impl Board {
    /// Rook, bishop and queen: unlimited rays along `directions`.
    pub(crate) fn slider_view(
        &self,
        from: Coord,
        colour: Colour,
        directions: &[Direction],
    ) -> Vec<Coord> {
        self.line_of_sight(from, colour, directions, Sight::UNLIMITED)
    }
}
