use crate::domain::Grid;
use macroquad::prelude::{Color, WHITE, draw_rectangle};

pub const ALIVE_COLOR: Color = WHITE;

/// Screen-space square for one live cell
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellRect {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

/// Squares to fill for the live cells of `grid`.
/// Each cell sits at (column * resolution, row * resolution) and is one
/// pixel smaller than the cell pitch, leaving a 1px gap between neighbors.
/// Dead cells produce nothing; the background shows through.
pub fn live_cell_rects(grid: &Grid, resolution: u32) -> impl Iterator<Item = CellRect> + '_ {
    let pitch = resolution as f32;
    let size = resolution.saturating_sub(1) as f32;

    grid.iter_cells()
        .filter(|(_, _, cell)| cell.is_alive())
        .map(move |(x, y, _)| CellRect {
            x: x as f32 * pitch,
            y: y as f32 * pitch,
            size,
        })
}

/// Draw the current generation. Caller clears the background first.
pub fn draw_grid(grid: &Grid, resolution: u32) {
    for rect in live_cell_rects(grid, resolution) {
        draw_rectangle(rect.x, rect.y, rect.size, rect.size, ALIVE_COLOR);
    }
}
