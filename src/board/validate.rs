use super::{Board, Colour, Coord, InvalidMove, PieceId};

impl Board {
    /// Piece-level plausibility of moving `id` to `to` for the player of
    /// `colour`: the piece must be alive, owned by that player, and see `to`.
    ///
    /// Whether the move exposes the mover's king is decided by the game.
    pub fn validate_piece_move(
        &self,
        id: PieceId,
        to: Coord,
        colour: Colour,
    ) -> Result<(), InvalidMove> {
        let piece = self.piece(id);
        let Some(from) = piece.tile() else {
            return Err(InvalidMove::Captured { kind: piece.kind() });
        };
        if piece.colour() != colour {
            return Err(InvalidMove::NotYours {
                kind: piece.kind(),
                tile: from,
            });
        }
        if !self.can_reach(id, to) {
            return Err(InvalidMove::Unreachable {
                kind: piece.kind(),
                tile: to,
            });
        }
        Ok(())
    }
}
