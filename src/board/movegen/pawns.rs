use super::super::{Board, Colour, Coord, Direction};
use super::Sight;

impl Board {
    /// Forward moves (never captures) plus diagonal captures.
    ///
    /// An unmoved pawn may advance two tiles; the forward ray stops at the
    /// first occupied tile whoever owns it. Diagonal tiles count only when an
    /// opponent piece stands on them. En passant and promotion are not
    /// generated.
    pub(crate) fn pawn_view(&self, from: Coord, colour: Colour, has_moved: bool) -> Vec<Coord> {
        let (forward, attacks) = match colour {
            Colour::White => (Direction::Up, [Direction::UpRight, Direction::UpLeft]),
            Colour::Black => (Direction::Down, [Direction::DownRight, Direction::DownLeft]),
        };

        let forward_sight = Sight {
            distance: Some(if has_moved { 1 } else { 2 }),
            include_opponent_occupied: false,
        };
        let mut tiles = self.line_of_sight(from, colour, &[forward], forward_sight);

        let diagonals = self.line_of_sight(from, colour, &attacks, Sight::steps(1));
        tiles.extend(
            diagonals
                .into_iter()
                .filter(|&to| matches!(self.kind_at(to), Some((other, _)) if other != colour)),
        );
        tiles
    }
}
