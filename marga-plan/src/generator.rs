//! Random instance generation.
//!
//! Draws start and goal corners uniformly from the strict interior of
//! the corner lattice (so both pass the occupiability precheck on an
//! obstacle-free grid), then scatters distinct obstacle cells avoiding
//! the start/goal coordinate pairs. Seeded RNGs make campaigns
//! reproducible.

use rand::Rng;

use crate::core::{Corner, Orientation};
use crate::error::{PlanError, Result};
use crate::grid::ObstacleGrid;
use crate::io::Instance;

/// Parameters for one random instance.
#[derive(Clone, Copy, Debug)]
pub struct GeneratorParams {
    /// Cell rows (M), at least 3
    pub rows: usize,
    /// Cell columns (N), at least 3
    pub cols: usize,
    /// Obstacle cells to place, at most M·N − 2
    pub obstacles: usize,
}

impl GeneratorParams {
    fn validate(&self) -> Result<()> {
        if self.rows < 3 || self.cols < 3 {
            return Err(PlanError::Params(format!(
                "grid {}x{} too small, need at least 3x3",
                self.rows, self.cols
            )));
        }
        if self.obstacles > self.rows * self.cols - 2 {
            return Err(PlanError::Params(format!(
                "{} obstacles leave fewer than 2 free cells in a {}x{} grid",
                self.obstacles, self.rows, self.cols
            )));
        }
        Ok(())
    }
}

/// Generate one random instance.
///
/// Start and goal are distinct interior corners; the obstacle cells are
/// distinct and never coincide with the start or goal coordinate pair.
/// Rejection sampling terminates because the parameter validation
/// guarantees at least two candidate cells stay free.
pub fn generate_instance<R: Rng>(rng: &mut R, params: &GeneratorParams) -> Result<Instance> {
    params.validate()?;
    let m = params.rows as i32;
    let n = params.cols as i32;

    let start = Corner::new(rng.gen_range(1..m), rng.gen_range(1..n));
    let goal = loop {
        let candidate = Corner::new(rng.gen_range(1..m), rng.gen_range(1..n));
        if candidate != start {
            break candidate;
        }
    };

    let mut grid = ObstacleGrid::new(params.rows, params.cols);
    let mut placed = 0;
    while placed < params.obstacles {
        let r = rng.gen_range(0..m);
        let c = rng.gen_range(0..n);
        let cell = Corner::new(r, c);
        if cell == start || cell == goal || grid.is_obstacle(r, c) {
            continue;
        }
        grid.set(r as usize, c as usize, true);
        placed += 1;
    }

    let orientation = Orientation::from_index(rng.gen_range(0..4));

    Ok(Instance {
        grid,
        start,
        orientation,
        goal,
    })
}
