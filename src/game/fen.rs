use std::str::FromStr;

use super::{Game, GameBuilder};
use crate::board::{parse_placement, Colour, FenError};

/// FEN of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

const FEN_FIELDS: usize = 6;

impl Game {
    /// Encode the position as
    /// `<board> <side> <castling> <en passant> <half-move> <full-move>`.
    ///
    /// Castling, en passant and the half-move clock are not tracked and are
    /// always written as `- - 0`.
    #[must_use]
    pub fn to_fen(&self) -> String {
        format!(
            "{} {} - - 0 {}",
            self.board.to_fen(),
            self.side_to_move().fen_char(),
            self.full_turn_count
        )
    }

    /// Decode a six-field FEN string.
    ///
    /// Pawns start out unmoved wherever they stand, since FEN does not carry
    /// that flag. The castling, en passant and half-move fields are ignored.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        let [placement, side, _castling, _en_passant, _half_move, full_move] = fields[..] else {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        };

        let side = match side {
            "w" => Colour::White,
            "b" => Colour::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };
        // A zero count is read as the first turn
        let full_turn_count = full_move
            .parse::<u32>()
            .map_err(|_| FenError::InvalidFullMove {
                found: full_move.to_string(),
            })?
            .max(1);

        let builder = parse_placement(placement)?.into_iter().fold(
            GameBuilder::new(),
            |builder, (tile, colour, kind)| builder.piece(tile, colour, kind),
        );
        Ok(builder
            .side_to_move(side)
            .full_turn_count(full_turn_count)
            .build())
    }

    /// Decode a FEN string, starting a fresh standard game if it is
    /// malformed.
    #[must_use]
    pub fn from_fen_or_new(fen: &str) -> Self {
        Self::try_from_fen(fen).unwrap_or_else(|e| {
            log::warn!("ignoring malformed FEN '{}': {e}; starting a new game", fen.trim());
            Game::new()
        })
    }
}

impl FromStr for Game {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Game::try_from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Coord, PieceKind};

    #[test]
    fn test_new_game_fen() {
        assert_eq!(Game::new().to_fen(), STARTING_FEN);
    }

    #[test]
    fn test_fen_round_trip_keeps_every_tile() {
        let game = Game::new();
        let decoded = Game::try_from_fen(&game.to_fen()).unwrap();
        for coord in Coord::all() {
            assert_eq!(decoded.board().kind_at(coord), game.board().kind_at(coord));
        }
        assert_eq!(decoded.to_fen(), game.to_fen());
    }

    #[test]
    fn test_fen_side_and_turn_count() {
        let game = Game::try_from_fen("7k/Q7/6K1/8/8/8/8/8 b - - 0 17").unwrap();
        assert_eq!(game.side_to_move(), Colour::Black);
        assert_eq!(game.current_turn(), 1);
        assert_eq!(game.full_turn_count(), 17);
        assert_eq!(game.player(Colour::White).pieces().len(), 2);
        assert_eq!(game.player(Colour::Black).pieces().len(), 1);
        assert_eq!(game.to_fen(), "7k/Q7/6K1/8/8/8/8/8 b - - 0 17");
    }

    #[test]
    fn test_placeholder_fields_are_ignored() {
        let game = Game::try_from_fen("4k3/8/8/8/8/8/8/4K3 w KQkq e3 12 5").unwrap();
        assert_eq!(game.to_fen(), "4k3/8/8/8/8/8/8/4K3 w - - 0 5");
    }

    #[test]
    fn test_decoded_pawns_are_unmoved() {
        let game = Game::try_from_fen("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1").unwrap();
        let pawn = game.board().piece_at("E4".parse().unwrap()).unwrap();
        assert_eq!(game.board().piece(pawn).kind(), PieceKind::Pawn);
        assert!(!game.board().piece(pawn).has_moved());
    }

    #[test]
    fn test_fen_errors() {
        assert_eq!(
            Game::try_from_fen("8/8/8/8/8/8/8/8 w - - 0"),
            Err(FenError::WrongFieldCount { found: 5 })
        );
        assert_eq!(
            Game::try_from_fen("8/8/8/8/8/8/8/8 x - - 0 1"),
            Err(FenError::InvalidSideToMove {
                found: "x".to_string()
            })
        );
        assert_eq!(
            Game::try_from_fen("8/8/8/8/8/8/8/8 w - - 0 zero"),
            Err(FenError::InvalidFullMove {
                found: "zero".to_string()
            })
        );
        assert!(matches!(
            "8/8/8/8/8/8/8/7z w - - 0 1".parse::<Game>(),
            Err(FenError::InvalidPiece { char: 'z' })
        ));
    }

    #[test]
    fn test_malformed_fen_starts_new_game() {
        assert_eq!(Game::from_fen_or_new("not a fen"), Game::new());
        assert_eq!(Game::from_fen_or_new(""), Game::new());
        let endgame = Game::from_fen_or_new("7k/Q7/6K1/8/8/8/8/8 w - - 0 1\n");
        assert_eq!(endgame.to_fen(), "7k/Q7/6K1/8/8/8/8/8 w - - 0 1");
    }

    #[test]
    fn test_zero_full_move_keeps_position() {
        let game = Game::from_fen_or_new("7k/Q7/6K1/8/8/8/8/8 w - - 0 0");
        assert_eq!(game.full_turn_count(), 1);
        assert_eq!(game.to_fen(), "7k/Q7/6K1/8/8/8/8/8 w - - 0 1");
        assert_eq!(
            Game::try_from_fen("7k/Q7/6K1/8/8/8/8/8 b - - 0 0").map(|g| g.full_turn_count()),
            Ok(1)
        );
    }
}
