//! Move legality and terminal-state detection.

use super::Game;
use crate::board::{Colour, Coord, InvalidMove};

impl Game {
    /// Full validation of moving the piece on `from` to `to` for the player
    /// of `colour`.
    ///
    /// `None` stands for a tile that was not given or not found. A move that
    /// passes the piece-level checks is replayed on a copy of the position
    /// and refused if it leaves the mover's king threatened.
    pub fn validate_move(
        &self,
        from: Option<Coord>,
        to: Option<Coord>,
        colour: Colour,
    ) -> Result<(), InvalidMove> {
        let from = from.ok_or(InvalidMove::MissingFromTile)?;
        let to = to.ok_or(InvalidMove::MissingToTile)?;
        let id = self
            .board
            .piece_at(from)
            .ok_or(InvalidMove::NoPiece { tile: from })?;

        self.board.validate_piece_move(id, to, colour)?;

        if self.is_moving_into_check(from, to) {
            log::debug!("{from} {to} rejected: mover would be in check");
            return Err(InvalidMove::IntoCheck);
        }
        Ok(())
    }

    /// `validate_move` for tile names as typed by a player, returning the
    /// resolved tiles. Unknown names count as missing tiles.
    pub fn validate_named_move(
        &self,
        from: &str,
        to: &str,
        colour: Colour,
    ) -> Result<(Coord, Coord), InvalidMove> {
        let from = self.board.get_tile_by_name(from).map(|tile| tile.coord());
        let to = self.board.get_tile_by_name(to).map(|tile| tile.coord());
        self.validate_move(from, to, colour)?;
        match (from, to) {
            (Some(from), Some(to)) => Ok((from, to)),
            (None, _) => Err(InvalidMove::MissingFromTile),
            (_, None) => Err(InvalidMove::MissingToTile),
        }
    }

    /// Whether moving the piece on `from` to `to` would leave its own king
    /// threatened. The move is played on an independent copy of the
    /// position; `self` is never touched.
    #[must_use]
    pub fn is_moving_into_check(&self, from: Coord, to: Coord) -> bool {
        let Some(id) = self.board.piece_at(from) else {
            return false;
        };
        let mover = self.board.piece(id).colour();

        let mut probe = self.clone_position();
        probe.board.move_piece_to(id, to);
        probe.is_check(mover)
    }

    /// Whether the king of `colour` stands on a tile any live opposing piece
    /// can reach. A side without a king on the board is never in check.
    #[must_use]
    pub fn is_check(&self, colour: Colour) -> bool {
        let Some(king) = self.player(colour).king(&self.board) else {
            return false;
        };
        let Some(tile) = self.board.piece(king).tile() else {
            return false;
        };
        self.board.is_threatened(tile, self.opponent(colour).pieces())
    }

    /// Whether any piece of `colour` has a move that passes full validation.
    #[must_use]
    pub fn has_valid_move(&self, colour: Colour) -> bool {
        self.valid_moves(colour).next().is_some()
    }

    /// Every `(from, to)` pair that passes full validation for `colour`.
    #[must_use]
    pub fn legal_moves(&self, colour: Colour) -> Vec<(Coord, Coord)> {
        self.valid_moves(colour).collect()
    }

    #[must_use]
    pub fn is_checkmate(&self, colour: Colour) -> bool {
        self.is_check(colour) && !self.has_valid_move(colour)
    }

    /// No valid move for `colour`, whether in check or not. Callers that
    /// need to tell stalemate from checkmate must also consult `is_check`.
    #[must_use]
    pub fn is_stalemate(&self, colour: Colour) -> bool {
        !self.has_valid_move(colour)
    }

    fn valid_moves(&self, colour: Colour) -> impl Iterator<Item = (Coord, Coord)> + '_ {
        let board = &self.board;
        self.player(colour)
            .live_pieces(board)
            .filter_map(move |id| board.piece(id).tile().map(|from| (from, board.view(id))))
            .flat_map(|(from, view)| view.into_iter().map(move |to| (from, to)))
            .filter(move |&(from, to)| self.validate_move(Some(from), Some(to), colour).is_ok())
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Colour, Coord, InvalidMove, PieceKind};
    use crate::game::{Game, GameBuilder};

    fn c(name: &str) -> Coord {
        name.parse().unwrap()
    }

    #[test]
    fn test_missing_tiles() {
        let game = Game::new();
        assert_eq!(
            game.validate_move(None, Some(c("A3")), Colour::White),
            Err(InvalidMove::MissingFromTile)
        );
        assert_eq!(
            game.validate_move(Some(c("A2")), None, Colour::White),
            Err(InvalidMove::MissingToTile)
        );
        assert_eq!(
            game.validate_named_move("Z9", "A3", Colour::White),
            Err(InvalidMove::MissingFromTile)
        );
        assert_eq!(
            game.validate_named_move("A2", "A", Colour::White),
            Err(InvalidMove::MissingToTile)
        );
    }

    #[test]
    fn test_empty_source_tile() {
        let game = Game::new();
        assert_eq!(
            game.validate_move(Some(c("E4")), Some(c("E5")), Colour::White),
            Err(InvalidMove::NoPiece { tile: c("E4") })
        );
    }

    #[test]
    fn test_piece_level_failures_propagate() {
        let game = Game::new();
        assert_eq!(
            game.validate_named_move("e7", "e5", Colour::White),
            Err(InvalidMove::NotYours {
                kind: PieceKind::Pawn,
                tile: c("E7")
            })
        );
        assert_eq!(
            game.validate_named_move("A1", "A3", Colour::White),
            Err(InvalidMove::Unreachable {
                kind: PieceKind::Rook,
                tile: c("A3")
            })
        );
        assert_eq!(
            game.validate_named_move("g1", "f3", Colour::White),
            Ok((c("G1"), c("F3")))
        );
    }

    #[test]
    fn test_pinned_piece_cannot_expose_king() {
        // White rook on E2 is pinned against the king by the black rook on E8
        let game = GameBuilder::new()
            .piece(c("E1"), Colour::White, PieceKind::King)
            .piece(c("E2"), Colour::White, PieceKind::Rook)
            .piece(c("E8"), Colour::Black, PieceKind::Rook)
            .piece(c("A8"), Colour::Black, PieceKind::King)
            .build();

        assert!(game.is_moving_into_check(c("E2"), c("D2")));
        assert_eq!(
            game.validate_move(Some(c("E2")), Some(c("D2")), Colour::White),
            Err(InvalidMove::IntoCheck)
        );
        assert_eq!(
            game.validate_move(Some(c("E2")), Some(c("E5")), Colour::White),
            Ok(())
        );
        assert_eq!(
            game.validate_move(Some(c("E2")), Some(c("E8")), Colour::White),
            Ok(())
        );
    }

    #[test]
    fn test_probe_does_not_touch_live_game() {
        let game = Game::new();
        let before = game.clone();
        for colour in Colour::BOTH {
            let _ = game.legal_moves(colour);
        }
        assert_eq!(game, before);
    }

    #[test]
    fn test_starting_moves_count() {
        let game = Game::new();
        assert_eq!(game.legal_moves(Colour::White).len(), 20);
        assert_eq!(game.legal_moves(Colour::Black).len(), 20);
    }

    #[test]
    fn test_no_pieces_no_valid_move() {
        let game = GameBuilder::new()
            .piece(c("E1"), Colour::White, PieceKind::King)
            .build();
        assert!(!game.has_valid_move(Colour::Black));
        assert!(game.is_stalemate(Colour::Black));
        assert!(!game.is_check(Colour::Black));
        assert!(!game.is_checkmate(Colour::Black));
    }

    #[test]
    fn test_stalemate_not_checkmate() {
        let game = Game::from_fen_or_new("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert!(!game.is_check(Colour::Black));
        assert!(game.is_stalemate(Colour::Black));
        assert!(!game.is_checkmate(Colour::Black));
    }
}
