//! Generation stepping.
//!
//! Every cell of the next generation is computed from the current
//! generation only. Reads and writes never touch the same buffer, so the
//! result does not depend on scan order.

use super::Grid;

/// Pure evolution: returns the next generation in a freshly allocated grid
pub fn step(current: &Grid) -> Grid {
    let mut next = current.blank_like();
    step_into(current, &mut next);
    next
}

/// Write the next generation of `current` into `next`.
/// `next` must have the same dimensions; its previous contents are overwritten.
pub(crate) fn step_into(current: &Grid, next: &mut Grid) {
    debug_assert_eq!(current.dimensions(), next.dimensions());

    let width = current.width();
    let cells = current.cells();

    next.cells_mut()
        .iter_mut()
        .enumerate()
        .for_each(|(idx, slot)| {
            let neighbors = current.neighbor_sum(idx % width, idx / width);
            *slot = cells[idx].evolve(neighbors);
        });
}
