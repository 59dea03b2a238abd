//! Legality rules.
//!
//! Read-only predicates deciding whether a pawn move or fence placement is
//! allowed. The game controller calls these before mutating anything.

pub mod fence;
pub mod movement;

pub use fence::{can_place_fence, fence_location_in_range, fence_locations};
pub use movement::{classify_move, is_legal_pawn_move, legal_destinations, MoveKind};
