use std::collections::VecDeque;

use crate::game::Game;

/// Supplies moves for one side, once per turn.
///
/// `message` is the status line for the turn: whose move it is and the
/// previous move, or the reason the last attempt was rejected. The source
/// returns a pair of tile names such as `("A2", "A4")`, or `None` when it
/// has no move to give (end of input, script exhausted).
pub trait MoveSource {
    fn next_move(&mut self, game: &Game, message: &str) -> Option<(String, String)>;
}

/// Replays a fixed list of moves, then gives up.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    moves: VecDeque<(String, String)>,
    messages: Vec<String>,
}

impl ScriptedSource {
    #[must_use]
    pub fn new<I, S>(moves: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        ScriptedSource {
            moves: moves
                .into_iter()
                .map(|(from, to)| (from.into(), to.into()))
                .collect(),
            messages: Vec::new(),
        }
    }

    /// Queue another move.
    pub fn push(&mut self, from: &str, to: &str) {
        self.moves.push_back((from.to_string(), to.to_string()));
    }

    /// Every status message this source was handed, in order.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl MoveSource for ScriptedSource {
    fn next_move(&mut self, _game: &Game, message: &str) -> Option<(String, String)> {
        self.messages.push(message.to_string());
        self.moves.pop_front()
    }
}
