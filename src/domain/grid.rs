use super::Cell;
use crate::error::{LifeError, Result};
use rand::Rng;

/// Grid holds one generation of the toroidal cellular automaton.
/// Dimensions are fixed for the lifetime of the value; stepping writes
/// into a different grid instead of mutating this one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells dead.
    /// Fails with `InvalidDimension` if either side is zero or the cell
    /// buffer cannot be allocated.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let invalid = LifeError::InvalidDimension { width, height };
        let len = width
            .checked_mul(height)
            .filter(|&len| len > 0)
            .ok_or_else(|| invalid.clone())?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| invalid)?;
        cells.resize(len, Cell::Dead);

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// All-dead grid with the same dimensions as `self`
    pub(crate) fn blank_like(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            cells: vec![Cell::Dead; self.cells.len()],
        }
    }

    /// Get grid dimensions as (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    /// Convert 2D coordinates to 1D index (row-major)
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    const fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    fn out_of_bounds(&self, x: usize, y: usize) -> LifeError {
        LifeError::OutOfBounds {
            column: x,
            row: y,
            width: self.width,
            height: self.height,
        }
    }

    /// Get cell at position, `None` outside the grid
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.contains(x, y).then(|| self.cells[self.get_index(x, y)])
    }

    /// Get cell at position, failing with `OutOfBounds` outside the grid
    pub fn cell_at(&self, x: usize, y: usize) -> Result<Cell> {
        self.get(x, y).ok_or_else(|| self.out_of_bounds(x, y))
    }

    /// Set cell at position
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<()> {
        if !self.contains(x, y) {
            return Err(self.out_of_bounds(x, y));
        }
        let idx = self.get_index(x, y);
        self.cells[idx] = cell;
        Ok(())
    }

    /// Set cell at position, wrapping both coordinates around the torus
    pub fn set_wrapping(&mut self, x: usize, y: usize, cell: Cell) {
        let idx = self.get_index(x % self.width, y % self.height);
        self.cells[idx] = cell;
    }

    /// Count live neighbors of (x, y) on the torus.
    /// Sums the 3x3 block around the cell with wrap-around on both axes,
    /// then subtracts the cell itself. On grids narrower than 3 in either
    /// dimension the same cell is counted more than once.
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> Result<u8> {
        if !self.contains(x, y) {
            return Err(self.out_of_bounds(x, y));
        }
        Ok(self.neighbor_sum(x, y))
    }

    /// Unchecked neighbor count; caller guarantees (x, y) is in bounds
    pub(crate) fn neighbor_sum(&self, x: usize, y: usize) -> u8 {
        let (w, h) = (self.width, self.height);

        let block: u8 = (0..3)
            .flat_map(|dy| (0..3).map(move |dx| (dx, dy)))
            .map(|(dx, dy)| {
                // x + w + dx - 1 == x + dx' + w for dx' in -1..=1
                let col = (x + w + dx - 1) % w;
                let row = (y + h + dy - 1) % h;
                self.cells[row * w + col].value()
            })
            .sum();

        block - self.cells[self.get_index(x, y)].value()
    }

    /// Overwrite every cell with an independent fair coin flip
    pub fn seed_random<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from_bit(rng.random_range(0..2u8)));
    }

    /// Number of alive cells
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub(crate) fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Iterate over all cells with their positions, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx % self.width, idx / self.width, cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn grid_with(width: usize, height: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(width, height).unwrap();
        for &(x, y) in alive {
            grid.set(x, y, Cell::Alive).unwrap();
        }
        grid
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert_eq!(
            Grid::new(0, 5),
            Err(LifeError::InvalidDimension {
                width: 0,
                height: 5,
            })
        );
        assert_eq!(
            Grid::new(5, 0),
            Err(LifeError::InvalidDimension {
                width: 5,
                height: 0,
            })
        );
        assert!(Grid::new(usize::MAX, 2).is_err());
    }

    #[test]
    fn test_new_rejects_unallocatable_size() {
        let huge = usize::MAX / 2 + 1;
        assert_eq!(
            Grid::new(huge, 1),
            Err(LifeError::InvalidDimension {
                width: huge,
                height: 1,
            })
        );
    }

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.dimensions(), (4, 3));
        assert_eq!(grid.count_alive(), 0);
        assert_eq!(grid.iter_cells().count(), 12);
    }

    #[test]
    fn test_get_set_bounds() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set(2, 1, Cell::Alive).unwrap();

        assert_eq!(grid.get(2, 1), Some(Cell::Alive));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(
            grid.cell_at(0, 2),
            Err(LifeError::OutOfBounds {
                column: 0,
                row: 2,
                width: 3,
                height: 2,
            })
        );
        assert!(grid.set(3, 1, Cell::Alive).is_err());
    }

    #[test]
    fn test_set_wrapping() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set_wrapping(5, 7, Cell::Alive);
        assert_eq!(grid.get(1, 3), Some(Cell::Alive));
    }

    #[test]
    fn test_iter_cells_is_row_major() {
        let grid = grid_with(3, 2, &[(2, 0)]);
        let positions: Vec<_> = grid.iter_cells().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(positions[2], (2, 0));
        assert_eq!(positions[3], (0, 1));
        assert_eq!(grid.iter_cells().nth(2).unwrap().2, Cell::Alive);
    }

    #[test]
    fn test_count_neighbors_interior() {
        let grid = grid_with(5, 5, &[(1, 1), (2, 1), (3, 3)]);
        assert_eq!(grid.count_live_neighbors(2, 2), Ok(3));
        // The cell itself never counts
        assert_eq!(grid.count_live_neighbors(1, 1), Ok(1));
    }

    #[test]
    fn test_wrap_around_diagonal_corner() {
        let grid = grid_with(3, 3, &[(0, 0)]);
        assert_eq!(grid.count_live_neighbors(2, 2), Ok(1));
    }

    #[test]
    fn test_wrap_around_edges() {
        let grid = grid_with(6, 6, &[(0, 3), (5, 0)]);
        assert_eq!(grid.count_live_neighbors(5, 3), Ok(1));
        assert_eq!(grid.count_live_neighbors(5, 5), Ok(1));
        assert_eq!(grid.count_live_neighbors(0, 5), Ok(1));
    }

    #[test]
    fn test_full_grid_has_eight_neighbors() {
        let mut grid = Grid::new(3, 3).unwrap();
        for y in 0..3 {
            for x in 0..3 {
                grid.set(x, y, Cell::Alive).unwrap();
            }
        }
        for (x, y, _) in grid.iter_cells() {
            assert_eq!(grid.count_live_neighbors(x, y), Ok(8));
        }
    }

    #[test]
    fn test_neighbor_count_bounds_on_random_grids() {
        let mut rng = StdRng::seed_from_u64(7);
        for (w, h) in [(3, 3), (4, 7), (16, 9)] {
            let mut grid = Grid::new(w, h).unwrap();
            grid.seed_random(&mut rng);
            for (x, y, _) in grid.iter_cells() {
                assert!(grid.count_live_neighbors(x, y).unwrap() <= 8);
            }
        }
    }

    #[test]
    fn test_small_grid_counts_same_cell_repeatedly() {
        // 1x1: all eight neighbor slots wrap back onto the single cell
        let single = grid_with(1, 1, &[(0, 0)]);
        assert_eq!(single.count_live_neighbors(0, 0), Ok(8));

        // 2x2: (0, 0) appears four times in the block around (1, 1)
        let small = grid_with(2, 2, &[(0, 0)]);
        assert_eq!(small.count_live_neighbors(1, 1), Ok(4));
    }

    #[test]
    fn test_count_neighbors_out_of_bounds() {
        let grid = Grid::new(3, 3).unwrap();
        assert!(matches!(
            grid.count_live_neighbors(3, 0),
            Err(LifeError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_seed_random_is_reproducible_and_mixed() {
        let mut a = Grid::new(100, 100).unwrap();
        let mut b = Grid::new(100, 100).unwrap();
        a.seed_random(&mut StdRng::seed_from_u64(42));
        b.seed_random(&mut StdRng::seed_from_u64(42));

        assert_eq!(a, b);
        let alive = a.count_alive();
        assert!(alive > 4_000 && alive < 6_000, "alive = {alive}");
    }
}
