use crate::error::{LifeError, Result};

/// Derive grid dimensions from a viewport and a cell resolution in pixels.
///
/// This is where simulation granularity gets tied to display size: one cell
/// per `resolution x resolution` pixel square, partial cells at the right and
/// bottom edges dropped. Hosts that want an independent grid size can skip
/// this and construct the grid directly.
pub fn compute_grid_size(
    viewport_width: u32,
    viewport_height: u32,
    resolution: u32,
) -> Result<(usize, usize)> {
    if resolution == 0 {
        return Err(LifeError::InvalidResolution { resolution });
    }
    Ok((
        (viewport_width / resolution) as usize,
        (viewport_height / resolution) as usize,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derives_from_viewport() {
        assert_eq!(compute_grid_size(800, 600, 20), Ok((40, 30)));
    }

    #[test]
    fn test_floors_partial_cells() {
        assert_eq!(compute_grid_size(819, 619, 20), Ok((40, 30)));
        assert_eq!(compute_grid_size(10, 10, 20), Ok((0, 0)));
    }

    #[test]
    fn test_rejects_zero_resolution() {
        assert_eq!(
            compute_grid_size(800, 600, 0),
            Err(LifeError::InvalidResolution { resolution: 0 })
        );
    }
}
