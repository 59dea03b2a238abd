//! Pawn movement legality.
//!
//! A destination is reachable if it passes the bounds/occupancy precheck and
//! at least one of the step, straight-jump, or diagonal-jump predicates
//! holds. Every function here is read-only over the board.

use crate::board::{BoardState, Cell, Direction, PlayerId, ALL_DIRECTIONS};

/// How a legal pawn move was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// One cell orthogonally.
    Step,
    /// Two cells orthogonally over the opponent.
    Jump,
    /// One cell diagonally beside a fenced-in opponent.
    DiagonalJump,
}

/// Returns true if `dest` is on the board, differs from `from`, and is empty.
pub fn precheck(board: &BoardState, from: Cell, dest: Cell) -> bool {
    dest.in_bounds() && dest != from && board.occupant_at(dest).is_none()
}

/// Returns true if `dest` is one orthogonal cell from `from` with no fence
/// on the edge between them.
pub fn is_step(board: &BoardState, from: Cell, dest: Cell) -> bool {
    match Direction::between(from, dest) {
        Some(dir) => from.offset(dir, 1) == dest && !board.edge_blocked(from, dir),
        None => false,
    }
}

/// Returns true if `dest` is two orthogonal cells from `from`, the cell in
/// between holds the opponent, and no fence sits between the opponent and
/// `dest`.
pub fn is_straight_jump(board: &BoardState, mover: PlayerId, from: Cell, dest: Cell) -> bool {
    let dir = match Direction::between(from, dest) {
        Some(d) => d,
        None => return false,
    };
    if from.offset(dir, 2) != dest {
        return false;
    }
    let mid = from.offset(dir, 1);
    board.occupant_at(mid) == Some(mover.opponent()) && !board.edge_blocked(mid, dir)
}

/// Returns true if `dest` is one cell diagonally from `from`, the opponent
/// sits directly ahead in the row direction of travel, and a horizontal
/// fence sits on the far side of the opponent.
///
/// Only the fence behind the opponent is consulted. The board edge behind
/// the opponent does not count as a fence.
pub fn is_diagonal_jump(board: &BoardState, mover: PlayerId, from: Cell, dest: Cell) -> bool {
    let dc = dest.col as i16 - from.col as i16;
    let dr = dest.row as i16 - from.row as i16;
    if dc.abs() != 1 || dr.abs() != 1 {
        return false;
    }
    let dir = if dr > 0 { Direction::Up } else { Direction::Down };
    let mid = from.offset(dir, 1);
    board.occupant_at(mid) == Some(mover.opponent()) && board.edge_blocked(mid, dir)
}

/// Classifies a requested pawn move, or returns None if it is illegal.
///
/// `from` must be the mover's current cell.
pub fn classify_move(board: &BoardState, mover: PlayerId, from: Cell, dest: Cell) -> Option<MoveKind> {
    if !precheck(board, from, dest) {
        return None;
    }
    if is_step(board, from, dest) {
        Some(MoveKind::Step)
    } else if is_straight_jump(board, mover, from, dest) {
        Some(MoveKind::Jump)
    } else if is_diagonal_jump(board, mover, from, dest) {
        Some(MoveKind::DiagonalJump)
    } else {
        None
    }
}

/// Returns true if the mover standing on `from` may move to `dest`.
pub fn is_legal_pawn_move(board: &BoardState, mover: PlayerId, from: Cell, dest: Cell) -> bool {
    classify_move(board, mover, from, dest).is_some()
}

/// Generates every legal destination for the mover standing on `from`.
pub fn legal_destinations(board: &BoardState, mover: PlayerId, from: Cell) -> Vec<Cell> {
    let mut candidates = Vec::with_capacity(12);
    for dir in ALL_DIRECTIONS {
        candidates.push(from.offset(dir, 1));
        candidates.push(from.offset(dir, 2));
    }
    for (dc, dr) in [(1, 1), (-1, 1), (1, -1), (-1, -1)] {
        candidates.push(Cell::new(from.col.saturating_add(dc), from.row.saturating_add(dr)));
    }

    candidates
        .into_iter()
        .filter(|&dest| is_legal_pawn_move(board, mover, from, dest))
        .collect()
}
