use crate::domain::{Pattern, compute_grid_size, presets};
use crate::error::{LifeError, Result};

/// Cell size in pixels when nothing else is configured
pub const DEFAULT_RESOLUTION: u32 = 20;

/// How the first generation is filled
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Seeding {
    /// Every cell alive or dead with equal probability
    #[default]
    Random,
    /// All dead except a pattern stamped at the grid centre
    Pattern(Pattern),
}

/// Simulation setup supplied by the host
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    pub viewport_width: u32,
    pub viewport_height: u32,
    /// Pixel size of one cell
    pub resolution: u32,
    /// Explicit grid size; derived from the viewport when `None`
    pub grid_size: Option<(usize, usize)>,
    /// RNG seed for reproducible random grids
    pub seed: Option<u64>,
    pub seeding: Seeding,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

impl SimulationConfig {
    pub fn new(viewport_width: u32, viewport_height: u32) -> Self {
        Self {
            viewport_width,
            viewport_height,
            resolution: DEFAULT_RESOLUTION,
            grid_size: None,
            seed: None,
            seeding: Seeding::Random,
        }
    }

    pub fn with_resolution(mut self, resolution: u32) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_grid_size(mut self, width: usize, height: usize) -> Self {
        self.grid_size = Some((width, height));
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_seeding(mut self, seeding: Seeding) -> Self {
        self.seeding = seeding;
        self
    }

    /// Grid dimensions this config asks for.
    /// The resolution is validated even when the grid size is explicit,
    /// since the renderer still needs it.
    pub fn grid_dimensions(&self) -> Result<(usize, usize)> {
        let derived =
            compute_grid_size(self.viewport_width, self.viewport_height, self.resolution)?;
        let (width, height) = self.grid_size.unwrap_or(derived);
        if width == 0 || height == 0 {
            return Err(LifeError::InvalidDimension { width, height });
        }
        Ok((width, height))
    }

    /// Apply `LIFE_*` overrides from the process environment
    pub fn from_env(viewport_width: u32, viewport_height: u32) -> Result<Self> {
        Self::from_lookup(viewport_width, viewport_height, |key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// Recognised keys: `LIFE_RESOLUTION`, `LIFE_SEED`, `LIFE_GRID`
    /// (`WIDTHxHEIGHT`) and `LIFE_PATTERN` (preset name).
    pub fn from_lookup<F>(viewport_width: u32, viewport_height: u32, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new(viewport_width, viewport_height);

        if let Some(value) = lookup("LIFE_RESOLUTION") {
            config.resolution = parse_value("LIFE_RESOLUTION", &value)?;
        }
        if let Some(value) = lookup("LIFE_SEED") {
            config.seed = Some(parse_value("LIFE_SEED", &value)?);
        }
        if let Some(value) = lookup("LIFE_GRID") {
            config.grid_size = Some(parse_grid("LIFE_GRID", &value)?);
        }
        if let Some(value) = lookup("LIFE_PATTERN") {
            let pattern = presets::by_name(&value).ok_or_else(|| invalid("LIFE_PATTERN", &value))?;
            config.seeding = Seeding::Pattern(pattern);
        }

        Ok(config)
    }
}

fn invalid(key: &'static str, value: &str) -> LifeError {
    LifeError::InvalidConfig {
        key,
        value: value.to_owned(),
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| invalid(key, value))
}

fn parse_grid(key: &'static str, value: &str) -> Result<(usize, usize)> {
    let (width, height) = value
        .trim()
        .split_once(['x', 'X'])
        .ok_or_else(|| invalid(key, value))?;
    Ok((parse_value(key, width)?, parse_value(key, height)?))
}
