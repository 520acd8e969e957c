//! Corner (lattice vertex) coordinates.

use serde::{Deserialize, Serialize};

/// A corner of the cell lattice — the intersection of two rails.
///
/// An M×N cell grid has (M+1)×(N+1) corners, indexed (i, j) with
/// i ∈ [0, M] and j ∈ [0, N]. Row indices grow southward, column
/// indices grow eastward.
///
/// Coordinates are signed and may lie outside the valid corner range;
/// the planner treats an out-of-range start or goal as an unreachable
/// query, not as an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Corner {
    /// Row index (0 at the north edge)
    pub i: i32,
    /// Column index (0 at the west edge)
    pub j: i32,
}

impl Corner {
    /// Create a new corner coordinate
    #[inline]
    pub fn new(i: i32, j: i32) -> Self {
        Self { i, j }
    }

    /// The corner one rail away in the given direction
    #[inline]
    pub fn offset(self, di: i32, dj: i32) -> Self {
        Self {
            i: self.i + di,
            j: self.j + dj,
        }
    }
}

impl std::fmt::Display for Corner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}
