//! Clearance rules: which corners the robot may occupy and which rails
//! it may cross.
//!
//! The robot has diameter 1, so standing on a corner requires all four
//! cells touching that corner to be free, and crossing a rail requires
//! both cells flanking it to be free. These two predicates are the only
//! place obstacle data is consulted; everything above them (successor
//! generation, search) is geometry-free bookkeeping.

use crate::core::Corner;
use crate::grid::ObstacleGrid;

/// May the robot stand on `corner`?
///
/// Corners on the grid's outer boundary (i ∈ {0, M} or j ∈ {0, N}) are
/// never occupiable — the robot body would overhang the grid. An
/// interior corner is occupiable iff none of the four cells touching it
/// is an obstacle.
///
/// Out-of-range coordinates are not occupiable either, so this is total
/// over all of `Corner`.
pub fn corner_occupiable(grid: &ObstacleGrid, corner: Corner) -> bool {
    let m = grid.rows() as i32;
    let n = grid.cols() as i32;

    if corner.i <= 0 || corner.j <= 0 || corner.i >= m || corner.j >= n {
        return false;
    }

    // The four cells touching corner (i, j): (i-1, j-1), (i-1, j), (i, j-1), (i, j)
    for di in -1..=0 {
        for dj in -1..=0 {
            if grid.is_obstacle(corner.i + di, corner.j + dj) {
                return false;
            }
        }
    }
    true
}

/// May the robot cross the rail from `from` to `from + (di, dj)`?
///
/// Exactly one of `di`, `dj` must be ±1. A horizontal rail is flanked
/// by the cell above and the cell below it; a vertical rail by the cell
/// to its left and right. Any in-grid flanking obstacle blocks the
/// rail; flanks outside the grid impose no constraint.
pub fn rail_crossable(grid: &ObstacleGrid, from: Corner, di: i32, dj: i32) -> bool {
    debug_assert!(
        (di == 0) != (dj == 0) && di.abs() <= 1 && dj.abs() <= 1,
        "({}, {}) is not a unit rail step",
        di,
        dj
    );

    if di == 0 {
        // Horizontal rail: flanked above and below
        let j = from.j.min(from.j + dj);
        !grid.is_obstacle(from.i - 1, j) && !grid.is_obstacle(from.i, j)
    } else {
        // Vertical rail: flanked left and right
        let i = from.i.min(from.i + di);
        !grid.is_obstacle(i, from.j - 1) && !grid.is_obstacle(i, from.j)
    }
}
