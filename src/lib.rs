pub mod board;
pub mod config;
pub mod game;
pub mod player;

pub use board::{Board, Colour, Coord, InvalidMove, PieceId, PieceKind};
pub use game::{Game, GameLog, GameStatus, TurnOutcome};
pub use player::{MoveSource, Player};
