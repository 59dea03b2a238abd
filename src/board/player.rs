//! Player identity and per-player records.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::cell::{Cell, BOARD_SIZE};

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    /// Starts on row 0 and moves first.
    One,
    /// Starts on row 8.
    Two,
}

pub const ALL_PLAYERS: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

impl PlayerId {
    /// Returns the player's number (1 or 2).
    pub const fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    /// Parses a player from its number.
    pub fn from_number(n: u8) -> Option<PlayerId> {
        match n {
            1 => Some(PlayerId::One),
            2 => Some(PlayerId::Two),
            _ => None,
        }
    }

    pub const fn opponent(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Returns the row this player must reach to win.
    pub const fn goal_row(self) -> i8 {
        match self {
            PlayerId::One => BOARD_SIZE - 1,
            PlayerId::Two => 0,
        }
    }

    /// Returns the pawn's starting cell, centred on the home row.
    pub const fn start_cell(self) -> Cell {
        match self {
            PlayerId::One => Cell::new(BOARD_SIZE / 2, 0),
            PlayerId::Two => Cell::new(BOARD_SIZE / 2, BOARD_SIZE - 1),
        }
    }

    /// Index into per-player arrays.
    pub(crate) const fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.number())
    }
}

/// Mutable per-player state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub pawn: Cell,
    pub fences_remaining: u8,
}

impl Player {
    /// Creates a player on its starting cell with a full fence inventory.
    pub fn new(id: PlayerId, fences: u8) -> Self {
        Player {
            id,
            pawn: id.start_cell(),
            fences_remaining: fences,
        }
    }

    pub fn has_fences(&self) -> bool {
        self.fences_remaining > 0
    }
}
