//! Board state representation.
//!
//! Holds pawn occupancy and fence markers for a single game. This is a plain
//! data container: nothing here checks whether a mutation is legal.

use super::cell::{Cell, Direction, BOARD_SIZE};
use super::fence::{FenceMarkers, Orientation};
use super::player::PlayerId;

const N: usize = BOARD_SIZE as usize;

/// Pawn and fence layout of the board.
///
/// Uses fixed-size arrays indexed `[row][col]` for O(1) lookup, which keeps
/// the state trivially copyable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    /// Pawn at each cell.
    occupants: [[Option<PlayerId>; N]; N],
    /// Fence markers at each intersection.
    fences: [[FenceMarkers; N]; N],
}

impl Default for BoardState {
    fn default() -> Self {
        Self::empty()
    }
}

impl BoardState {
    /// Creates a board with no pawns and no fences.
    pub fn empty() -> Self {
        BoardState {
            occupants: [[None; N]; N],
            fences: [[FenceMarkers::EMPTY; N]; N],
        }
    }

    /// Returns the pawn on `cell`, or None if empty or off the board.
    pub fn occupant_at(&self, cell: Cell) -> Option<PlayerId> {
        cell.index().and_then(|(r, c)| self.occupants[r][c])
    }

    /// Sets or clears the pawn on `cell`. Off-board cells are ignored.
    pub fn set_occupant(&mut self, cell: Cell, occupant: Option<PlayerId>) {
        if let Some((r, c)) = cell.index() {
            self.occupants[r][c] = occupant;
        }
    }

    /// Returns the markers at an intersection; empty when off the board.
    pub fn fence_markers_at(&self, at: Cell) -> FenceMarkers {
        at.index()
            .map(|(r, c)| self.fences[r][c])
            .unwrap_or(FenceMarkers::EMPTY)
    }

    /// Records a marker at an intersection. Off-board intersections are ignored.
    pub fn add_fence_marker(&mut self, at: Cell, orientation: Orientation) {
        if let Some((r, c)) = at.index() {
            self.fences[r][c].insert(orientation);
        }
    }

    /// Returns true if a fence sits on the edge crossed by stepping from
    /// `from` one cell in `dir`.
    ///
    /// Horizontal fences block vertical travel and vertical fences block
    /// horizontal travel. Edges leading off the board carry no marker.
    pub fn edge_blocked(&self, from: Cell, dir: Direction) -> bool {
        let to = from.offset(dir, 1);
        let (at, orientation) = match dir {
            Direction::Up => (to, Orientation::Horizontal),
            Direction::Down => (from, Orientation::Horizontal),
            Direction::Right => (to, Orientation::Vertical),
            Direction::Left => (from, Orientation::Vertical),
        };
        self.fence_markers_at(at).contains(orientation)
    }

    /// Returns true if `player` has a pawn anywhere on `row`.
    pub fn row_contains(&self, row: i8, player: PlayerId) -> bool {
        if !(0..BOARD_SIZE).contains(&row) {
            return false;
        }
        self.occupants[row as usize].contains(&Some(player))
    }

    /// Iterates every occupied cell with its pawn, in row-major order.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (Cell, PlayerId)> + '_ {
        Cell::all().filter_map(|cell| self.occupant_at(cell).map(|p| (cell, p)))
    }

    /// Iterates every fence marker on the board, in row-major order.
    pub fn fences(&self) -> impl Iterator<Item = (Cell, Orientation)> + '_ {
        Cell::all().flat_map(|at| self.fence_markers_at(at).iter().map(move |o| (at, o)))
    }
}
