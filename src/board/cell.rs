//! Board coordinates.
//!
//! Cells are addressed as `(col, row)` with both components in `0..9`.
//! Row 0 is player one's home edge and row 8 is player two's. Fence
//! intersections share the same coordinate type but live on their own grid.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of cells along each side of the board.
pub const BOARD_SIZE: i8 = 9;

/// A `(col, row)` coordinate.
///
/// Coordinates may lie off the board; callers that accept user input check
/// `in_bounds` before indexing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub col: i8,
    pub row: i8,
}

impl Cell {
    pub const fn new(col: i8, row: i8) -> Self {
        Cell { col, row }
    }

    /// Returns true if the coordinate lies on the 9x9 board.
    pub const fn in_bounds(self) -> bool {
        self.col >= 0 && self.col < BOARD_SIZE && self.row >= 0 && self.row < BOARD_SIZE
    }

    /// Returns the `(row, col)` array indices, or None when off the board.
    pub(crate) fn index(self) -> Option<(usize, usize)> {
        if self.in_bounds() {
            Some((self.row as usize, self.col as usize))
        } else {
            None
        }
    }

    /// Returns the coordinate shifted by `steps` cells in `dir`.
    ///
    /// Saturates instead of overflowing so that wildly out-of-range input
    /// stays off the board rather than wrapping onto it.
    pub fn offset(self, dir: Direction, steps: i8) -> Cell {
        let (dc, dr) = dir.delta();
        Cell {
            col: self.col.saturating_add(dc.saturating_mul(steps)),
            row: self.row.saturating_add(dr.saturating_mul(steps)),
        }
    }

    /// Iterates every cell on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Cell { col, row }))
    }
}

impl From<(i8, i8)> for Cell {
    fn from((col, row): (i8, i8)) -> Self {
        Cell { col, row }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// One of the four orthogonal directions of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards higher row indices (player one's goal).
    Up,
    /// Towards lower row indices (player two's goal).
    Down,
    Left,
    Right,
}

pub const ALL_DIRECTIONS: [Direction; 4] =
    [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

impl Direction {
    /// Returns the `(col, row)` unit step.
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Returns the direction from `from` to `to` if they differ along
    /// exactly one axis.
    pub fn between(from: Cell, to: Cell) -> Option<Direction> {
        let dc = to.col as i16 - from.col as i16;
        let dr = to.row as i16 - from.row as i16;
        match (dc.signum(), dr.signum()) {
            (0, 1) => Some(Direction::Up),
            (0, -1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }
}
