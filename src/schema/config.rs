//! Configuration types for a simulation run.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::Seed;
use crate::compute::UpdateStrategy;

/// Largest grid that is rendered to the terminal.
pub const MAX_DISPLAY_SIZE: usize = 50;

/// Top-level run configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Number of generations to advance.
    pub iterations: u64,
    /// Grid side length in cells.
    pub size: usize,
    /// Sequential or row-parallel update.
    pub strategy: UpdateStrategy,
    /// Render each generation to the terminal.
    pub display: bool,
    /// Pause after each generation while rendering, in milliseconds.
    pub frame_delay_ms: u64,
    /// Initial grid population.
    pub seed: Seed,
    /// Seed for the random source (None = entropy).
    pub random_seed: Option<u64>,
    /// Worker threads for the concurrent strategy (None = rayon default).
    pub threads: Option<usize>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            iterations: 10,
            size: 20,
            strategy: UpdateStrategy::Sequential,
            display: true,
            frame_delay_ms: 500,
            seed: Seed::default(),
            random_seed: None,
            threads: None,
        }
    }
}

impl RunConfig {
    /// Load configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    #[inline]
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::InvalidSize);
        }
        if self.size.checked_mul(self.size).is_none() {
            return Err(ConfigError::TooLarge(self.size));
        }
        if self.display && self.size > MAX_DISPLAY_SIZE {
            return Err(ConfigError::TooLargeToDisplay {
                size: self.size,
                max: MAX_DISPLAY_SIZE,
            });
        }
        if self.threads == Some(0) {
            return Err(ConfigError::InvalidThreadCount);
        }
        match &self.seed {
            Seed::Random { density } => {
                if !(0.0..=1.0).contains(density) {
                    return Err(ConfigError::InvalidDensity(*density));
                }
            }
            Seed::Cells { alive } => {
                if let Some(&(row, col)) = alive
                    .iter()
                    .find(|&&(r, c)| r >= self.size || c >= self.size)
                {
                    return Err(ConfigError::CellOutOfBounds {
                        row,
                        col,
                        size: self.size,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid size must be non-zero")]
    InvalidSize,
    #[error("Grid size {0} is too large: {0}x{0} cells overflows usize")]
    TooLarge(usize),
    #[error(
        "World too big to print! If you want to watch the world in the terminal pick a size of {max} or less (got {size})"
    )]
    TooLargeToDisplay { size: usize, max: usize },
    #[error("Thread count must be non-zero")]
    InvalidThreadCount,
    #[error("Population density {0} must lie in [0, 1]")]
    InvalidDensity(f64),
    #[error("Seed cell ({row}, {col}) lies outside a {size}x{size} grid")]
    CellOutOfBounds { row: usize, col: usize, size: usize },
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
