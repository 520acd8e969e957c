//! Obstacle grid storage and clearance rules.
//!
//! [`ObstacleGrid`] is the immutable M×N boolean obstacle matrix a query
//! runs against; [`clearance`] holds the legality oracle deciding which
//! corners the robot may occupy and which rails it may cross.

pub mod clearance;

use crate::core::Corner;

/// M×N boolean obstacle matrix, stored row-major as a flat array.
///
/// The grid is pure data: indexed lookup only, no behavior. Cells are
/// addressed (row, col) with row 0 at the north edge. Lookups outside
/// the grid report "free" — boundary restrictions are expressed by the
/// clearance rules, not by the storage.
///
/// A grid is built once per instance and borrowed read-only for the
/// lifetime of each query, so independent queries may share one grid
/// across threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObstacleGrid {
    cells: Vec<bool>,
    rows: usize,
    cols: usize,
}

impl ObstacleGrid {
    /// Create a grid with every cell free
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![false; rows * cols],
            rows,
            cols,
        }
    }

    /// Build a grid from row-major cell data.
    ///
    /// Returns `None` unless `cells.len() == rows * cols` with both
    /// dimensions nonzero.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<bool>) -> Option<Self> {
        if rows == 0 || cols == 0 || cells.len() != rows * cols {
            return None;
        }
        Some(Self { cells, rows, cols })
    }

    /// Number of cell rows (M)
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of cell columns (N)
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Mark or clear an obstacle cell. Panics if (r, c) is outside the grid.
    pub fn set(&mut self, r: usize, c: usize, obstacle: bool) {
        assert!(r < self.rows && c < self.cols, "cell ({}, {}) outside grid", r, c);
        self.cells[r * self.cols + c] = obstacle;
    }

    /// Is the cell at (r, c) an obstacle? Out-of-grid cells are free.
    #[inline]
    pub fn is_obstacle(&self, r: i32, c: i32) -> bool {
        if r < 0 || c < 0 || r as usize >= self.rows || c as usize >= self.cols {
            return false;
        }
        self.cells[r as usize * self.cols + c as usize]
    }

    /// Does `corner` lie in the valid corner range [0, M]×[0, N]?
    #[inline]
    pub fn contains_corner(&self, corner: Corner) -> bool {
        corner.i >= 0
            && corner.j >= 0
            && corner.i <= self.rows as i32
            && corner.j <= self.cols as i32
    }

    /// Number of obstacle cells
    pub fn obstacle_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Row-major cell data
    #[inline]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }
}
