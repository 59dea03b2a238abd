//! Legal action generation.
//!
//! Enumerates every legal pawn move and fence placement for the player to
//! move, and picks one at random for callers that need a fallback action.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::{Cell, Orientation, ALL_ORIENTATIONS};
use crate::game::Game;
use crate::rules::{can_place_fence, fence_locations, legal_destinations};

/// A single command a player can issue on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Action {
    /// Move the pawn to the given cell.
    Move(Cell),
    /// Place a fence at the given intersection.
    Fence { orientation: Orientation, at: Cell },
}

/// Generates every legal pawn destination for the player to move.
///
/// Returns an empty vec once the game is over.
pub fn legal_pawn_moves(game: &Game) -> Vec<Cell> {
    if game.status().is_over() {
        return Vec::new();
    }
    let mover = game.current_player();
    legal_destinations(game.board(), mover, game.pawn_position(mover))
}

/// Generates every legal fence placement for the player to move.
pub fn legal_fence_placements(game: &Game) -> Vec<Action> {
    if game.status().is_over() {
        return Vec::new();
    }
    let placer = game.player(game.current_player());
    let mut actions = Vec::new();
    for at in fence_locations() {
        if !can_place_fence(placer, at) {
            continue;
        }
        for orientation in ALL_ORIENTATIONS {
            actions.push(Action::Fence { orientation, at });
        }
    }
    actions
}

/// Generates every legal action for the player to move, pawn moves first.
pub fn legal_actions(game: &Game) -> Vec<Action> {
    let mut actions: Vec<Action> = legal_pawn_moves(game).into_iter().map(Action::Move).collect();
    actions.extend(legal_fence_placements(game));
    actions
}

/// Picks a uniformly random legal action, or None when there is none.
pub fn random_action(game: &Game, rng: &mut impl Rng) -> Option<Action> {
    legal_actions(game).choose(rng).copied()
}

/// Picks a uniformly random legal pawn move, or None when there is none.
pub fn random_pawn_move(game: &Game, rng: &mut impl Rng) -> Option<Cell> {
    legal_pawn_moves(game).choose(rng).copied()
}
