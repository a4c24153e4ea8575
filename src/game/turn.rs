//! Turn application and the driver loop.

use std::io;

use super::{Game, GameLog};
use crate::board::{Colour, InvalidMove};
use crate::player::MoveSource;

/// Situation of the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    /// Checkmate and stalemate end the game.
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

/// Result of one call to `Game::advance_turn`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The move was refused and nothing changed; ask the same player again.
    Rejected(InvalidMove),
    /// The move was played. `status` describes the new side to move.
    Accepted { status: GameStatus },
}

impl TurnOutcome {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, TurnOutcome::Accepted { .. })
    }

    #[must_use]
    pub const fn rejected_reason(&self) -> Option<&InvalidMove> {
        match self {
            TurnOutcome::Rejected(reason) => Some(reason),
            TurnOutcome::Accepted { .. } => None,
        }
    }

    /// Whether the move just played checkmated the opponent.
    #[must_use]
    pub const fn checkmate_detected(&self) -> bool {
        matches!(
            self,
            TurnOutcome::Accepted {
                status: GameStatus::Checkmate
            }
        )
    }
}

/// How a driven game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    Checkmate { winner: Colour },
    /// The side to move had no valid move while not in check
    Stalemate { colour: Colour },
    /// A move source stopped supplying moves
    Abandoned { colour: Colour },
}

impl Game {
    /// Status of `colour`, checking for mate before check.
    #[must_use]
    pub fn status_of(&self, colour: Colour) -> GameStatus {
        let in_check = self.is_check(colour);
        match (in_check, self.has_valid_move(colour)) {
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::Ongoing,
        }
    }

    /// Status of the side to move.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status_of(self.side_to_move())
    }

    /// Validate and play one move for the side to move.
    ///
    /// On success the board is updated, the full-turn count advances after
    /// a Black move, and the turn passes to the other side. A rejected move
    /// leaves the game untouched.
    pub fn advance_turn(&mut self, from: &str, to: &str) -> TurnOutcome {
        let mover = self.side_to_move();
        let (from, to) = match self.validate_named_move(from, to, mover) {
            Ok(tiles) => tiles,
            Err(reason) => {
                log::debug!("{mover} move {from} {to} rejected: {reason}");
                return TurnOutcome::Rejected(reason);
            }
        };

        if let Some(id) = self.board.piece_at(from) {
            if let Some(taken) = self.board.move_piece_to(id, to) {
                log::debug!("{} on {to} captured", self.board.piece(taken).kind());
            }
        }
        if mover == Colour::Black {
            self.full_turn_count = self.full_turn_count.saturating_add(1);
        }
        self.current_turn = (self.current_turn + 1) % 2;

        let status = self.status();
        log::info!("{mover} played {from} {to}; {} to move: {status:?}", self.side_to_move());
        TurnOutcome::Accepted { status }
    }

    /// Drive the game until it ends, asking `white` and `black` for moves in
    /// turn. A rejected move is asked for again with the reason as the
    /// message. After every completed ply the position is appended to
    /// `history`.
    pub fn play(
        &mut self,
        white: &mut dyn MoveSource,
        black: &mut dyn MoveSource,
        mut history: Option<&mut GameLog>,
    ) -> io::Result<GameResult> {
        let mut previous_move: Option<String> = None;
        loop {
            let colour = self.side_to_move();
            match self.status() {
                GameStatus::Checkmate => {
                    log::info!("Checkmate, {} wins", colour.opponent());
                    return Ok(GameResult::Checkmate {
                        winner: colour.opponent(),
                    });
                }
                GameStatus::Stalemate => {
                    log::info!("Stalemate, {colour} has no valid move");
                    return Ok(GameResult::Stalemate { colour });
                }
                GameStatus::Ongoing | GameStatus::Check => {}
            }

            let source: &mut dyn MoveSource = match colour {
                Colour::White => &mut *white,
                Colour::Black => &mut *black,
            };
            let mut message = match &previous_move {
                Some(mv) => format!("{colour} turn ({mv})"),
                None => format!("{colour} turn"),
            };
            loop {
                let Some((from, to)) = source.next_move(self, &message) else {
                    log::info!("{colour} stopped supplying moves");
                    return Ok(GameResult::Abandoned { colour });
                };
                match self.advance_turn(&from, &to) {
                    TurnOutcome::Rejected(reason) => message = reason.to_string(),
                    TurnOutcome::Accepted { .. } => {
                        previous_move = Some(format!("{from} {to}"));
                        break;
                    }
                }
            }

            if let Some(history) = history.as_deref_mut() {
                history.append(self)?;
            }
        }
    }
}
