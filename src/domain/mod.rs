mod cell;
mod grid;
mod patterns;
mod sizing;
pub mod stepper;

pub use cell::Cell;
pub use grid::Grid;
pub use patterns::{Pattern, presets};
pub use sizing::compute_grid_size;
pub use stepper::step;
