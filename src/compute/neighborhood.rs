//! Moore neighborhood on a bounded grid.
//!
//! Edges are not wrapped: border cells have 5 neighbors, corners 3.

use super::Grid;

/// A (row, col) position, 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// In-bounds neighbors of (row, col), scanned row-major over the 3x3 block.
pub fn neighbors(row: usize, col: usize, size: usize) -> Vec<Coordinate> {
    let mut coords = Vec::with_capacity(8);
    for n in row.saturating_sub(1)..=(row + 1).min(size.saturating_sub(1)) {
        for m in col.saturating_sub(1)..=(col + 1).min(size.saturating_sub(1)) {
            if n == row && m == col {
                continue;
            }
            coords.push(Coordinate::new(n, m));
        }
    }
    coords
}

/// Number of live neighbors of (row, col); always in [0, 8].
#[inline]
pub fn live_neighbor_count(row: usize, col: usize, grid: &Grid) -> u8 {
    let size = grid.size();
    let mut live = 0u8;
    for n in row.saturating_sub(1)..=(row + 1).min(size - 1) {
        let cells = grid.row(n);
        for m in col.saturating_sub(1)..=(col + 1).min(size - 1) {
            if (n != row || m != col) && cells[m].is_alive() {
                live += 1;
            }
        }
    }
    live
}
