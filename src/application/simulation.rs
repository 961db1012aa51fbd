use super::config::{Seeding, SimulationConfig};
use crate::domain::{Cell, Grid, stepper};
use crate::error::{LifeError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

/// Simulation owns the state of one running automaton.
/// It replaces module-level globals: hosts hold as many as they like.
///
/// Two grids are kept and swapped every generation. The renderer only ever
/// sees `current`, which is replaced after a step has fully completed.
#[derive(Clone, Debug)]
pub struct Simulation {
    current: Grid,
    spare: Grid,
    resolution: u32,
    generation: u64,
}

impl Simulation {
    /// Build and seed the first generation described by `config`
    pub fn initialize(config: &SimulationConfig) -> Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self::initialize_with_rng(config, &mut rng)
    }

    /// Like `initialize`, drawing random cells from the given source
    pub fn initialize_with_rng<R: Rng + ?Sized>(
        config: &SimulationConfig,
        rng: &mut R,
    ) -> Result<Self> {
        let (width, height) = config.grid_dimensions()?;
        debug!(
            viewport_width = config.viewport_width,
            viewport_height = config.viewport_height,
            resolution = config.resolution,
            width,
            height,
            "resolved grid size"
        );

        let mut grid = Grid::new(width, height)?;
        let seeding = match &config.seeding {
            Seeding::Random => {
                grid.seed_random(rng);
                "random"
            }
            Seeding::Pattern(pattern) => {
                pattern.place_centered(&mut grid);
                pattern.name
            }
        };

        let simulation = Self::from_grid(grid, config.resolution)?;
        info!(
            width,
            height,
            resolution = config.resolution,
            seeding,
            population = simulation.population(),
            "simulation initialized"
        );
        Ok(simulation)
    }

    /// Wrap an existing grid as generation zero
    pub fn from_grid(grid: Grid, resolution: u32) -> Result<Self> {
        if resolution == 0 {
            return Err(LifeError::InvalidResolution { resolution });
        }
        Ok(Self {
            spare: grid.blank_like(),
            current: grid,
            resolution,
            generation: 0,
        })
    }

    /// Compute the next generation and make it current
    pub fn advance(&mut self) -> &Grid {
        stepper::step_into(&self.current, &mut self.spare);
        std::mem::swap(&mut self.current, &mut self.spare);
        self.generation += 1;

        trace!(generation = self.generation, population = self.population(), "advanced");
        &self.current
    }

    /// The current generation
    pub fn grid(&self) -> &Grid {
        &self.current
    }

    pub fn cell_at(&self, column: usize, row: usize) -> Result<Cell> {
        self.current.cell_at(column, row)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Alive cells in the current generation
    pub fn population(&self) -> usize {
        self.current.count_alive()
    }

    /// Give up the simulation, keeping the current generation
    pub fn into_grid(self) -> Grid {
        self.current
    }
}
