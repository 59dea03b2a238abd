//! Board representation and game-state types.
//!
//! Contains the core data structures for cells, fences, players, and the
//! board itself.

pub mod cell;
pub mod fence;
pub mod player;
pub mod state;

pub use cell::{Cell, Direction, ALL_DIRECTIONS, BOARD_SIZE};
pub use fence::{FenceMarkers, Orientation, ALL_ORIENTATIONS};
pub use player::{Player, PlayerId, ALL_PLAYERS};
pub use state::BoardState;
