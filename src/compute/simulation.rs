//! Simulation driver - runs a fixed number of generations.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Engine, EngineError, Grid, GridError, GridStats};
use crate::render::RenderSink;
use crate::schema::{ConfigError, RunConfig};
use crate::timing::timed;

/// Owns the current generation and advances it with the configured engine.
#[derive(Debug)]
pub struct Simulation {
    config: RunConfig,
    engine: Engine,
    grid: Grid,
    generation: u64,
}

impl Simulation {
    /// Validate `config` and seed generation 0 from `rng`.
    ///
    /// Nothing is allocated or drawn if the configuration is rejected.
    pub fn new<R: Rng + ?Sized>(config: RunConfig, rng: &mut R) -> Result<Self, SimulationError> {
        config.validate()?;
        let engine = Engine::new(config.strategy, config.threads)?;
        let (grid, _) = timed("init_world", || config.seed.generate(config.size, rng));
        let grid = grid?;

        log::info!(
            "Seeded {}x{} grid with {} live cells",
            config.size,
            config.size,
            grid.population()
        );

        Ok(Self {
            config,
            engine,
            grid,
            generation: 0,
        })
    }

    /// Like [`Simulation::new`], drawing from `config.random_seed` or from entropy.
    pub fn from_config(config: RunConfig) -> Result<Self, SimulationError> {
        let mut rng = match config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(config, &mut rng)
    }

    /// Current generation.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of generations advanced so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Advance exactly one generation.
    pub fn step(&mut self) -> Result<(), SimulationError> {
        let next = self.engine.advance(&self.grid)?;
        self.grid = next;
        self.generation += 1;
        log::debug!(
            "Generation {}: {} live cells",
            self.generation,
            self.grid.population()
        );
        Ok(())
    }

    /// Run `config.iterations` generations.
    ///
    /// With a sink, each generation is rendered before it is advanced and the
    /// driver pauses for `config.frame_delay_ms` afterwards.
    pub fn run(
        &mut self,
        mut sink: Option<&mut dyn RenderSink>,
    ) -> Result<RunSummary, SimulationError> {
        let start = Instant::now();
        let initial_stats = GridStats::from_grid(&self.grid);
        let delay = self.config.frame_delay();

        log::info!(
            "Running {} generations ({:?} strategy)",
            self.config.iterations,
            self.engine.strategy()
        );

        for _ in 0..self.config.iterations {
            if let Some(sink) = sink.as_deref_mut() {
                sink.render(self.generation, &self.grid)?;
            }

            self.step()?;

            if sink.is_some() && !delay.is_zero() {
                std::thread::sleep(delay);
            }
        }

        Ok(RunSummary {
            generations: self.generation,
            initial_stats,
            final_stats: GridStats::from_grid(&self.grid),
            final_grid: self.grid.clone(),
            elapsed: start.elapsed(),
        })
    }
}

/// Outcome of [`Simulation::run`].
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Generations advanced in total.
    pub generations: u64,
    pub initial_stats: GridStats,
    pub final_stats: GridStats,
    pub final_grid: Grid,
    pub elapsed: Duration,
}

/// Errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("Render failed: {0}")]
    Render(#[from] std::io::Error),
}
