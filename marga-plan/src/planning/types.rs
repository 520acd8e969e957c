//! Route planning types.

use crate::core::{Command, Corner, Orientation};

/// One search state: a corner plus the robot's facing.
///
/// The state space of an M×N grid has (M+1)×(N+1)×4 states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct State {
    /// Corner the robot stands on
    pub corner: Corner,
    /// Direction the robot faces
    pub orientation: Orientation,
}

impl State {
    /// Create a new state
    #[inline]
    pub fn new(corner: Corner, orientation: Orientation) -> Self {
        Self {
            corner,
            orientation,
        }
    }
}

/// Why a query failed.
///
/// Every failure is reported externally as the same sentinel (`-1` on
/// the wire); the reason is kept for diagnostics and logging only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteFailure {
    /// Start or goal corner outside the [0, M]×[0, N] corner range
    OutOfBounds,
    /// Start corner not occupiable (boundary or adjacent obstacle)
    StartBlocked,
    /// Goal corner not occupiable (boundary or adjacent obstacle)
    GoalBlocked,
    /// State space exhausted without reaching the goal corner
    NoPath,
}

/// Result of one route query.
#[derive(Clone, Debug)]
pub struct RouteResult {
    /// Commands in execution order; empty when the query failed or when
    /// start already equals goal
    pub commands: Vec<Command>,
    /// States dequeued during the search
    pub states_expanded: usize,
    /// Whether a route was found
    pub success: bool,
    /// Reason for failure (if any)
    pub failure: Option<RouteFailure>,
}

impl RouteResult {
    /// Create a failed result
    pub(super) fn failed(reason: RouteFailure, states_expanded: usize) -> Self {
        Self {
            commands: Vec::new(),
            states_expanded,
            success: false,
            failure: Some(reason),
        }
    }

    /// Create a successful result
    pub(super) fn solved(commands: Vec<Command>, states_expanded: usize) -> Self {
        Self {
            commands,
            states_expanded,
            success: true,
            failure: None,
        }
    }

    /// Route length in commands
    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True for a zero-length (start == goal) route
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
