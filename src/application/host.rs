//! Stateless entry points for hosts that keep the grid themselves.

use crate::domain::{Cell, Grid, compute_grid_size, step};
use crate::error::Result;

/// Produce the first generation: a viewport-sized grid of random cells
pub fn initialize(viewport_width: u32, viewport_height: u32, resolution: u32) -> Result<Grid> {
    let (width, height) = compute_grid_size(viewport_width, viewport_height, resolution)?;
    let mut grid = Grid::new(width, height)?;
    grid.seed_random(&mut rand::rng());
    Ok(grid)
}

/// Produce the next generation; `grid` is left untouched
pub fn advance(grid: &Grid) -> Grid {
    step(grid)
}

/// Read accessor used by renderers
pub fn cell_at(grid: &Grid, column: usize, row: usize) -> Result<Cell> {
    grid.cell_at(column, row)
}
