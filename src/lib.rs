//! Grid Life - Conway's Game of Life on a bounded square grid.
//!
//! Each generation is computed from the previous one with the B3/S23 rule over
//! an edge-clamped Moore neighborhood (no wraparound). Two interchangeable
//! update strategies are provided: a sequential row-major sweep and a
//! row-parallel fork-join on rayon. Both produce identical grids.
//!
//! # Architecture
//!
//! - `schema`: Run configuration and seeding
//! - `compute`: Grid, neighborhood, transition rule, engine and driver
//! - `render`: Terminal output of finished generations
//! - `timing`: Elapsed-time reporting around labeled operations
//!
//! # Example
//!
//! ```rust,no_run
//! use grid_life::{
//!     compute::{Simulation, UpdateStrategy},
//!     schema::RunConfig,
//! };
//!
//! let config = RunConfig {
//!     size: 64,
//!     iterations: 100,
//!     display: false,
//!     strategy: UpdateStrategy::Concurrent,
//!     random_seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let mut sim = Simulation::from_config(config).unwrap();
//! let summary = sim.run(None).unwrap();
//!
//! println!("Population after 100 generations: {}", summary.final_stats.population);
//! ```

pub mod compute;
pub mod render;
pub mod schema;
pub mod timing;

// Re-export commonly used types
pub use compute::{Cell, Engine, Grid, Simulation, UpdateStrategy};
pub use render::{RenderSink, TerminalRenderer};
pub use schema::{RunConfig, Seed};
