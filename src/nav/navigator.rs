//! Pure word-boundary and traversal queries over the grid mask
//!
//! Every function here is a pure function of the mask and its inputs.
//! Boundary and blocked-cell conditions are normal `None`/empty results,
//! never errors.

use crate::nav::{ArrowKey, Direction};
use crate::puzzle::GridMask;
use crate::CellPos;
use smallvec::SmallVec;

/// The word through (row, col) in the given direction.
///
/// Scans backward along `direction` to the word start, then collects
/// every playable cell forward until a blocked cell or the grid edge, in
/// increasing row/col order. Returns an empty sequence when the starting
/// cell itself is blocked or out of bounds.
pub fn word_cells(
    mask: &GridMask,
    row: usize,
    col: usize,
    direction: Direction,
) -> SmallVec<[CellPos; 8]> {
    let (dr, dc) = direction.delta();
    let (mut r, mut c) = (row as i32, col as i32);
    if !mask.is_playable(r, c) {
        return SmallVec::new();
    }

    // Walk back past the word start, then step forward onto it. The
    // backward scan only decreases one coordinate, so the in-bounds check
    // doubles as the r >= 0 / c >= 0 guard.
    while mask.is_playable(r, c) {
        r -= dr;
        c -= dc;
    }
    r += dr;
    c += dc;

    let mut word = SmallVec::new();
    while mask.is_playable(r, c) {
        word.push(CellPos::new(r as usize, c as usize));
        r += dr;
        c += dc;
    }
    word
}

/// The cell the cursor advances to after typing a letter at (row, col).
///
/// One step along `direction`; `None` when the next cell is blocked or
/// past the grid edge. Typing never wraps to the next word.
pub fn next_typing_cell(
    mask: &GridMask,
    row: usize,
    col: usize,
    direction: Direction,
) -> Option<CellPos> {
    let (dr, dc) = direction.delta();
    let (r, c) = (row as i32 + dr, col as i32 + dc);
    if mask.is_playable(r, c) {
        Some(CellPos::new(r as usize, c as usize))
    } else {
        None
    }
}

/// The cell an arrow key moves the cursor to from (row, col).
///
/// Steps once in the key's direction, then keeps stepping over blocked
/// cells until a playable cell is found. `None` once the coordinate
/// leaves the grid, so a single press jumps across blocked runs rather
/// than stopping on them.
pub fn next_arrow_cell(mask: &GridMask, row: usize, col: usize, key: ArrowKey) -> Option<CellPos> {
    let (dr, dc) = key.delta();
    let (mut r, mut c) = (row as i32 + dr, col as i32 + dc);

    while mask.in_bounds(r, c) {
        if mask.is_playable(r, c) {
            return Some(CellPos::new(r as usize, c as usize));
        }
        r += dr;
        c += dc;
    }
    None
}
