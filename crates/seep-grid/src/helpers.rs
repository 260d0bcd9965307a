//! Flat-index and neighbour helpers for row-major tile grids.
//!
//! Centralised here so the obstacle mask and field relaxation code share one
//! definition of bounds checking and 4-connected adjacency.

use smallvec::SmallVec;

/// Check whether `(x, y)` lies within `[0, width) x [0, height)`.
pub fn in_bounds(x: i32, y: i32, width: u32, height: u32) -> bool {
    x >= 0 && y >= 0 && (x as u32) < width && (y as u32) < height
}

/// Row-major flat index of an in-bounds tile.
///
/// Callers must have established bounds first (see [`in_bounds`]).
pub fn flat_index(x: i32, y: i32, width: u32) -> usize {
    y as usize * width as usize + x as usize
}

/// Collect the flat indices of the 4-connected (cardinal) neighbours of
/// `(x, y)` that exist within bounds.
///
/// Boundary tiles simply yield fewer entries — a missing neighbour
/// contributes nothing, not a sentinel value. Diagonals are never included.
pub fn neighbours_flat(x: i32, y: i32, width: u32, height: u32) -> SmallVec<[usize; 4]> {
    let offsets: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];
    let mut result = SmallVec::new();
    for (dx, dy) in offsets {
        let nx = x + dx;
        let ny = y + dy;
        if in_bounds(nx, ny, width, height) {
            result.push(flat_index(nx, ny, width));
        }
    }
    result
}
