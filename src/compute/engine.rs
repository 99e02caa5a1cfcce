//! Generation engine: produces the next grid from the current one.
//!
//! Both strategies run the same per-row unit of work against a read-only input
//! grid and write into a freshly allocated all-dead output grid. The concurrent
//! strategy hands each row's output slice to its own rayon task; rows are
//! disjoint, so no locking is needed, and rayon joins every task before
//! returning.

use std::panic::{self, AssertUnwindSafe};

use rayon::ThreadPool;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::{Cell, Grid, live_neighbor_count, transition};
use crate::timing::timed;

/// How a generation is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateStrategy {
    /// Single-threaded row-major traversal.
    #[default]
    Sequential,
    /// One rayon task per row, joined before returning.
    Concurrent,
}

/// Next state of the cell at (row, col) in `grid`.
#[inline]
pub fn next_cell(grid: &Grid, row: usize, col: usize) -> Cell {
    transition(grid.get(row, col), live_neighbor_count(row, col, grid))
}

/// Generation engine bound to an update strategy.
#[derive(Debug)]
pub struct Engine {
    strategy: UpdateStrategy,
    /// Dedicated pool for the concurrent strategy; `None` uses rayon's global pool.
    pool: Option<ThreadPool>,
}

impl Engine {
    /// Create an engine. `threads` sizes a dedicated worker pool for the
    /// concurrent strategy and is ignored by the sequential one.
    pub fn new(strategy: UpdateStrategy, threads: Option<usize>) -> Result<Self, EngineError> {
        let pool = match (strategy, threads) {
            (UpdateStrategy::Concurrent, Some(n)) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .thread_name(|i| format!("grid-life-row-{i}"))
                    .build()?,
            ),
            _ => None,
        };
        Ok(Self { strategy, pool })
    }

    pub fn strategy(&self) -> UpdateStrategy {
        self.strategy
    }

    /// Compute the next generation of `grid`.
    pub fn advance(&self, grid: &Grid) -> Result<Grid, EngineError> {
        self.advance_with(grid, next_cell)
    }

    /// Compute the next generation using a custom per-cell update.
    pub fn advance_with<F>(&self, grid: &Grid, update: F) -> Result<Grid, EngineError>
    where
        F: Fn(&Grid, usize, usize) -> Cell + Sync,
    {
        match self.strategy {
            UpdateStrategy::Sequential => timed("Serial update", || sequential_with(grid, &update)),
            UpdateStrategy::Concurrent => timed("Parallel update", || match &self.pool {
                Some(pool) => pool.install(|| concurrent_with(grid, &update)),
                None => concurrent_with(grid, &update),
            }),
        }
        .0
    }
}

/// Next generation computed on the calling thread.
pub fn advance_sequential(grid: &Grid) -> Result<Grid, EngineError> {
    sequential_with(grid, &next_cell)
}

/// Next generation computed with one rayon task per row.
pub fn advance_concurrent(grid: &Grid) -> Result<Grid, EngineError> {
    concurrent_with(grid, &next_cell)
}

fn sequential_with<F>(grid: &Grid, update: &F) -> Result<Grid, EngineError>
where
    F: Fn(&Grid, usize, usize) -> Cell,
{
    let size = grid.size();
    let mut next = Grid::dead_like(grid);
    for (row, out) in next.cells_mut().chunks_mut(size).enumerate() {
        run_row(grid, row, out, update)?;
    }
    Ok(next)
}

fn concurrent_with<F>(grid: &Grid, update: &F) -> Result<Grid, EngineError>
where
    F: Fn(&Grid, usize, usize) -> Cell + Sync,
{
    let size = grid.size();
    let mut next = Grid::dead_like(grid);
    next.cells_mut()
        .par_chunks_mut(size)
        .enumerate()
        .try_for_each(|(row, out)| run_row(grid, row, out, update))?;
    Ok(next)
}

/// Fill one output row. A panic inside the unit is caught and reported
/// against its row so both strategies fail the same way.
fn run_row<F>(grid: &Grid, row: usize, out: &mut [Cell], update: &F) -> Result<(), EngineError>
where
    F: Fn(&Grid, usize, usize) -> Cell,
{
    panic::catch_unwind(AssertUnwindSafe(|| {
        for (col, cell) in out.iter_mut().enumerate() {
            *cell = update(grid, row, col);
        }
    }))
    .map_err(|payload| EngineError::RowFailed {
        row,
        message: panic_message(payload.as_ref()),
    })
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Generation engine errors.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Update of row {row} failed: {message}")]
    RowFailed { row: usize, message: String },
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
