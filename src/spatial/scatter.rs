//! Seeded random wall placement for generated boards

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::cell::Coord;
use crate::spatial::grid::Grid;

/// Turn a share of the free cells into walls
///
/// Each cell that is not already a wall, the start or the target becomes a
/// wall with probability `density`. The same seed always produces the same
/// board. Returns the coordinates that were walled, in row-major order.
///
/// # Errors
///
/// Returns `InvalidParameter` if `density` is not within `0.0..=1.0`
pub fn scatter_walls(grid: &mut Grid, density: f64, seed: u64) -> Result<Vec<Coord>> {
    if !(0.0..=1.0).contains(&density) {
        return Err(invalid_parameter(
            "density",
            &density,
            &"must be between 0 and 1",
        ));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let candidates: Vec<Coord> = grid
        .cells()
        .filter(|cell| !cell.is_wall() && !cell.is_start() && !cell.is_target())
        .map(|cell| cell.coord())
        .collect();

    let mut walled = Vec::new();
    for coord in candidates {
        // Draw for every candidate so the board depends only on seed and size
        let roll = rng.random::<f64>();
        if roll < density {
            grid.set_wall(coord, true)?;
            walled.push(coord);
        }
    }

    Ok(walled)
}
