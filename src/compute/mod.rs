//! Compute module - Grid storage, the transition rule and generation stepping.

mod engine;
mod grid;
mod neighborhood;
mod simulation;
mod transition;

pub use engine::*;
pub use grid::*;
pub use neighborhood::*;
pub use simulation::*;
pub use transition::*;
