/// Cell is a single grid unit in Conway's Game of Life.
/// The discriminants are the integer encoding used by neighbor sums.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    /// Integer value of the cell: 0 for dead, 1 for alive
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Build a cell from a 0/1 draw. Any non-zero bit is alive.
    pub const fn from_bit(bit: u8) -> Self {
        if bit == 0 { Cell::Dead } else { Cell::Alive }
    }

    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Next state under the Life rule (B3/S23):
    /// 1. Dead cell with exactly 3 neighbors is born
    /// 2. Live cell with fewer than 2 or more than 3 neighbors dies
    /// 3. Everything else keeps its state
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Dead, 3) => Cell::Alive,
            (Cell::Alive, n) if n < 2 || n > 3 => Cell::Dead,
            (current, _) => current,
        }
    }
}
