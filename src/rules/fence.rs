//! Fence placement legality.
//!
//! Fences go on interior intersections only. Nothing here checks that a
//! path to the goal row survives the placement, and re-placing an existing
//! marker is accepted.

use crate::board::{Cell, Player, BOARD_SIZE};

/// Lowest intersection index a fence may occupy on either axis.
pub const MIN_FENCE_INDEX: i8 = 1;

/// Returns true if a fence may be placed at intersection `at`.
pub fn fence_location_in_range(at: Cell) -> bool {
    let range = MIN_FENCE_INDEX..BOARD_SIZE;
    range.contains(&at.col) && range.contains(&at.row)
}

/// Returns true if `player` has inventory left and `at` is a placeable
/// intersection.
pub fn can_place_fence(player: &Player, at: Cell) -> bool {
    player.has_fences() && fence_location_in_range(at)
}

/// Iterates every intersection a fence may occupy.
pub fn fence_locations() -> impl Iterator<Item = Cell> {
    (MIN_FENCE_INDEX..BOARD_SIZE)
        .flat_map(|row| (MIN_FENCE_INDEX..BOARD_SIZE).map(move |col| Cell::new(col, row)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PlayerId;

    #[test]
    fn border_intersections_rejected() {
        assert!(!fence_location_in_range(Cell::new(0, 4)));
        assert!(!fence_location_in_range(Cell::new(4, 0)));
        assert!(!fence_location_in_range(Cell::new(9, 4)));
        assert!(!fence_location_in_range(Cell::new(4, -2)));
        assert!(fence_location_in_range(Cell::new(1, 1)));
        assert!(fence_location_in_range(Cell::new(8, 8)));
    }

    #[test]
    fn empty_inventory_rejected() {
        let mut player = Player::new(PlayerId::One, 1);
        assert!(can_place_fence(&player, Cell::new(3, 3)));
        player.fences_remaining = 0;
        assert!(!can_place_fence(&player, Cell::new(3, 3)));
    }

    #[test]
    fn location_count() {
        assert_eq!(fence_locations().count(), 64);
        assert!(fence_locations().all(fence_location_in_range));
    }
}
