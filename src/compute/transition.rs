//! Fixed transition rule (B3/S23).

use super::Cell;

/// Next state of a cell from its current state and live-neighbor count.
///
/// - Alive with fewer than 2 live neighbors dies (underpopulation)
/// - Alive with 2 or 3 survives
/// - Alive with 4 or more dies (overpopulation)
/// - Dead with exactly 3 is born
///
/// Panics if `live_count > 8`, which cannot come from a valid neighborhood.
#[inline]
pub fn transition(current: Cell, live_count: u8) -> Cell {
    assert!(
        live_count <= 8,
        "live neighbor count {live_count} outside [0, 8]"
    );
    match (current, live_count) {
        (Cell::Alive, 2 | 3) => Cell::Alive,
        (Cell::Alive, _) => Cell::Dead,
        (Cell::Dead, 3) => Cell::Alive,
        (Cell::Dead, _) => Cell::Dead,
    }
}
