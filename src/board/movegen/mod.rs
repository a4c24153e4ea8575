//! View generation: the tiles each piece could move to this ply, given only
//! current occupancy. No check filtering happens here.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Colour, Coord, Direction, PieceId, PieceKind};

/// Options for a line-of-sight cast.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Sight {
    /// Maximum number of tiles per ray, `None` for unlimited
    pub(crate) distance: Option<usize>,
    /// Whether the first opponent-occupied tile on a ray is included
    pub(crate) include_opponent_occupied: bool,
}

impl Sight {
    pub(crate) const UNLIMITED: Sight = Sight {
        distance: None,
        include_opponent_occupied: true,
    };

    pub(crate) const fn steps(distance: usize) -> Sight {
        Sight {
            distance: Some(distance),
            include_opponent_occupied: true,
        }
    }
}

impl Board {
    /// Tiles the piece can reach this ply. Captured pieces see nothing.
    #[must_use]
    pub fn view(&self, id: PieceId) -> Vec<Coord> {
        let piece = self.piece(id);
        let Some(from) = piece.tile else {
            return Vec::new();
        };

        match piece.kind {
            PieceKind::Pawn => self.pawn_view(from, piece.colour, piece.has_moved),
            PieceKind::Knight => self.knight_view(from, piece.colour),
            PieceKind::Rook => self.slider_view(from, piece.colour, &Direction::ORTHOGONAL),
            PieceKind::Bishop => self.slider_view(from, piece.colour, &Direction::DIAGONAL),
            PieceKind::Queen => self.slider_view(from, piece.colour, &Direction::ALL),
            PieceKind::King => self.king_view(from, piece.colour),
        }
    }

    /// Whether `to` is in the piece's current view.
    #[must_use]
    pub fn can_reach(&self, id: PieceId, to: Coord) -> bool {
        self.view(id).contains(&to)
    }

    /// Walk each ray from `from` until the edge, a blocker, or the distance
    /// cap. Own pieces block and are excluded; an opponent piece ends the ray
    /// and is included only if `sight.include_opponent_occupied`.
    pub(crate) fn line_of_sight(
        &self,
        from: Coord,
        colour: Colour,
        directions: &[Direction],
        sight: Sight,
    ) -> Vec<Coord> {
        let mut tiles = Vec::new();
        for &direction in directions {
            let mut current = from;
            let mut walked = 0;
            while sight.distance.map_or(true, |cap| walked < cap) {
                let Some(next) = current.step(direction) else {
                    break;
                };
                match self.kind_at(next) {
                    None => tiles.push(next),
                    Some((other, _)) => {
                        if other != colour && sight.include_opponent_occupied {
                            tiles.push(next);
                        }
                        break;
                    }
                }
                walked += 1;
                current = next;
            }
        }
        tiles
    }

    /// Whether any live piece among `attackers` has `coord` in its view.
    ///
    /// Captured pieces may be passed in; they are filtered here.
    #[must_use]
    pub fn is_threatened(&self, coord: Coord, attackers: &[PieceId]) -> bool {
        attackers
            .iter()
            .any(|&id| self.piece(id).is_alive() && self.can_reach(id, coord))
    }
}
