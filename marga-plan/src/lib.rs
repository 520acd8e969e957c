//! # Marga-Plan: Rail-Grid Route Planning
//!
//! Route planning for a diameter-1 robot that travels the rail lattice
//! of a rectangular cell grid. The robot stands on corners (cell
//! intersections), turns in place, and advances 1–3 rails per command;
//! obstacles in adjacent cells forbid corners and rails. Given a grid,
//! a start corner with a facing, and a goal corner, the planner returns
//! a minimum-length command sequence or reports that no route exists.
//!
//! ## Quick Start
//!
//! ```rust
//! use marga_plan::{find_route, Corner, ObstacleGrid, Orientation};
//!
//! // 4x4 obstacle-free grid; corners run (0,0)..=(4,4)
//! let grid = ObstacleGrid::new(4, 4);
//!
//! let result = find_route(
//!     &grid,
//!     Corner::new(1, 1),
//!     Orientation::East,
//!     Corner::new(1, 3),
//! );
//! assert!(result.success);
//! // One command: advance 2 rails east
//! assert_eq!(result.commands.len(), 1);
//! ```
//!
//! ## Cost model
//!
//! Each command costs exactly 1, whether it turns in place or covers
//! three rails, so the planner searches the unweighted
//! (corner, orientation) state graph breadth-first. Distance traveled
//! is irrelevant; command count is the only metric.
//!
//! ## Modules
//!
//! - [`core`]: `Corner`, `Orientation`, `Command` value types
//! - [`grid`]: obstacle matrix and the clearance rules
//! - [`planning`]: successor generation and the breadth-first planner
//! - [`io`]: instance/result text formats
//! - [`generator`]: seeded random instance generation
//!
//! ## Concurrency
//!
//! A query borrows the grid read-only and owns all of its scratch
//! state, so batches of queries parallelize with no coordination beyond
//! sharing `&ObstacleGrid`.

pub mod core;
pub mod error;
pub mod generator;
pub mod grid;
pub mod io;
pub mod planning;

pub use crate::core::{Command, Corner, Orientation};
pub use error::{PlanError, Result};
pub use grid::ObstacleGrid;
pub use planning::{find_route, RouteFailure, RoutePlanner, RouteResult, State};
