//! Seed types for initializing generation 0.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::compute::{Grid, GridError};

/// Default probability that a seeded cell starts alive.
pub const DEFAULT_DENSITY: f64 = 0.5;

/// How the initial grid is populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Seed {
    /// Each cell independently alive with probability `density`.
    Random {
        /// Probability in [0, 1].
        density: f64,
    },
    /// Exactly the listed (row, col) cells alive.
    Cells { alive: Vec<(usize, usize)> },
}

impl Default for Seed {
    fn default() -> Self {
        Seed::Random {
            density: DEFAULT_DENSITY,
        }
    }
}

impl Seed {
    /// Generate the initial grid. Only `Random` draws from `rng`.
    pub fn generate<R: Rng + ?Sized>(&self, size: usize, rng: &mut R) -> Result<Grid, GridError> {
        match self {
            Seed::Random { density } => Grid::random(size, *density, rng),
            Seed::Cells { alive } => Grid::from_live_cells(size, alive),
        }
    }
}
