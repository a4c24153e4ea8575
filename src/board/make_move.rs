//! Occupancy mutation: the only code that touches tile and piece links.

use super::{Board, Coord, PieceId, PieceKind, TileError};

impl Board {
    /// Install `id` as the occupant of `coord`.
    ///
    /// A previous occupant is captured: its tile reference is cleared but it
    /// stays in the arena. Returns the captured piece, if any.
    pub(crate) fn enter(&mut self, coord: Coord, id: PieceId) -> Option<PieceId> {
        let taken = self.tiles[coord.index()].occupant.replace(id);
        if let Some(taken) = taken {
            self.pieces[taken.0].tile = None;
        }
        self.pieces[id.0].tile = Some(coord);
        taken
    }

    /// Clear the occupant of `coord` without touching any piece.
    pub(crate) fn vacate(&mut self, coord: Coord) {
        self.tiles[coord.index()].occupant = None;
    }

    /// Relocate a piece: vacate its old tile, then enter the new one.
    /// Pawns additionally lose their two-step move.
    pub(crate) fn move_piece_to(&mut self, id: PieceId, to: Coord) -> Option<PieceId> {
        let piece = &mut self.pieces[id.0];
        if piece.kind == PieceKind::Pawn {
            piece.has_moved = true;
        }
        if let Some(from) = piece.tile.take() {
            self.vacate(from);
        }
        self.enter(to, id)
    }

    /// Move `id` to the tile named `destination`.
    ///
    /// This is the single way a validated move changes the board. It does
    /// not check legality. Returns the captured piece, if any.
    pub fn move_piece(&mut self, id: PieceId, destination: &str) -> Result<Option<PieceId>, TileError> {
        let to = destination.parse::<Coord>()?;
        Ok(self.move_piece_to(id, to))
    }
}
