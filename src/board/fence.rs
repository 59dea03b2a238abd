//! Fence orientations and per-intersection marker sets.
//!
//! A horizontal marker at intersection `(c, r)` sits on the edge between
//! cells `(c, r - 1)` and `(c, r)`. A vertical marker at `(c, r)` sits on
//! the edge between cells `(c - 1, r)` and `(c, r)`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Orientation of a fence segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Blocks travel between rows.
    Horizontal,
    /// Blocks travel between columns.
    Vertical,
}

pub const ALL_ORIENTATIONS: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

impl Orientation {
    /// Returns the single-character notation (`h` or `v`).
    pub const fn as_char(self) -> char {
        match self {
            Orientation::Horizontal => 'h',
            Orientation::Vertical => 'v',
        }
    }

    /// Parses an orientation from its single-character notation.
    pub fn from_char(c: char) -> Option<Orientation> {
        match c {
            'h' | 'H' => Some(Orientation::Horizontal),
            'v' | 'V' => Some(Orientation::Vertical),
            _ => None,
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Orientation::Horizontal => 0b01,
            Orientation::Vertical => 0b10,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The set of orientations present at one intersection.
///
/// Inserting an orientation that is already present is a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FenceMarkers(u8);

impl FenceMarkers {
    pub const EMPTY: FenceMarkers = FenceMarkers(0);

    pub const fn contains(self, orientation: Orientation) -> bool {
        self.0 & orientation.bit() != 0
    }

    pub fn insert(&mut self, orientation: Orientation) {
        self.0 |= orientation.bit();
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates the orientations present, horizontal first.
    pub fn iter(self) -> impl Iterator<Item = Orientation> {
        ALL_ORIENTATIONS.into_iter().filter(move |o| self.contains(*o))
    }
}
