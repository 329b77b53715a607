//! Random instance generation for towerpath.
//!
//! [`generate`] produces a random grid with the fixed endpoints kept open;
//! [`generate_solvable`] retries until the BFS connectivity check proves the
//! instance has at least one open path from start to goal, so the solver is
//! never handed an instance that only *looks* usable.

use rand::{Rng, RngExt};

use towerpath_core::{Cell, Grid, GridError};
use towerpath_paths::Search;

/// Generate a random `size × size` grid.
///
/// Each cell other than the start and goal corners becomes a tower with
/// probability `tower_prob`; the corners are always open. The result may
/// still be unsolvable — pair with [`generate_solvable`] when that matters.
pub fn generate<R: Rng>(size: i32, tower_prob: f64, rng: &mut R) -> Result<Grid, GridError> {
    if size < 1 {
        return Err(GridError::BadSize(size));
    }
    let n = size as usize;
    let mut cells = Vec::with_capacity(n * n);
    for i in 0..n * n {
        let endpoint = i == 0 || i == n * n - 1;
        let cell = if !endpoint && rng.random::<f64>() < tower_prob {
            Cell::Tower
        } else {
            Cell::Open
        };
        cells.push(cell);
    }
    Grid::new(size, cells)
}

/// Generate grids until one passes the connectivity check.
///
/// Returns the solvable grid and the number of attempts it took. Does not
/// give up: a `tower_prob` high enough to make solvable grids vanishingly
/// rare will spin for a long time, as the caller controls the probability.
pub fn generate_solvable<R: Rng>(
    size: i32,
    tower_prob: f64,
    rng: &mut R,
    search: &mut Search,
) -> Result<(Grid, u32), GridError> {
    let mut attempts = 0u32;
    loop {
        let grid = generate(size, tower_prob, rng)?;
        attempts += 1;
        if search.connected(&grid) {
            return Ok((grid, attempts));
        }
        log::debug!("size {size}: attempt {attempts} unsolvable, regenerating");
    }
}
