//! Quoridor rules engine.
//!
//! Tracks pawns and fences on a 9x9 board, enforces pawn-move and
//! fence-placement legality, alternates turns, and detects the winner.
//! Rendering and input handling are left to the caller.

pub mod board;
pub mod config;
pub mod game;
pub mod movegen;
pub mod rules;

pub use board::{Cell, Orientation, PlayerId};
pub use config::RulesConfig;
pub use game::{Game, GameError, GameStatus};
pub use movegen::Action;
