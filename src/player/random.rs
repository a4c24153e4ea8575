use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::MoveSource;
use crate::game::Game;

/// Picks a random live piece with a non-empty view, then a random tile from
/// that view. Self-check is not considered, so the game may reject a pick
/// and ask again.
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    #[must_use]
    pub fn new() -> Self {
        RandomSource {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic source for replays and tests.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        RandomSource {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSource for RandomSource {
    fn next_move(&mut self, game: &Game, _message: &str) -> Option<(String, String)> {
        let board = game.board();
        let candidates: Vec<_> = game
            .current_player()
            .live_pieces(board)
            .map(|id| (id, board.view(id)))
            .filter(|(_, view)| !view.is_empty())
            .collect();

        let (id, view) = candidates.choose(&mut self.rng)?;
        let from = board.piece(*id).tile()?;
        let to = view.choose(&mut self.rng)?;
        Some((from.to_string(), to.to_string()))
    }
}
