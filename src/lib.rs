// Domain layer - grid, neighbor counting, Life rule
pub mod domain;

// Application layer - simulation context, config, host entry points
pub mod application;

// Infrastructure layer - drawing
pub mod rendering;

pub mod error;

// Re-exports for convenience
pub use application::host::{advance, cell_at, initialize};
pub use application::{Seeding, Simulation, SimulationConfig};
pub use domain::{Cell, Grid, Pattern, compute_grid_size, presets, step};
pub use error::LifeError;
