//! Successor generation for the implicit state graph.
//!
//! Each state has at most five outgoing transitions: two rotations
//! (always legal) and up to three advances. The graph is never
//! materialized; the planner calls [`successors`] on demand.

use crate::core::{Command, Corner};
use crate::grid::clearance::{corner_occupiable, rail_crossable};
use crate::grid::ObstacleGrid;
use crate::planning::types::State;

/// Longest advance a single command may cover, in rails
pub const MAX_ADVANCE: i32 = 3;

/// Generate the legal transitions out of `state`, in the fixed order
/// rotate-left, rotate-right, advance-3, advance-2, advance-1.
///
/// The order is the planner's tie-break: among equally short routes,
/// the one whose commands come first in this order is returned. Every
/// legal advance length is generated independently — a legal 3-rail
/// advance does not suppress the 2- and 1-rail ones, which may land the
/// robot on different corners the optimum passes through.
pub fn successors(grid: &ObstacleGrid, state: State) -> Vec<(State, Command)> {
    let mut out = Vec::with_capacity(5);

    out.push((
        State::new(state.corner, state.orientation.rotate_left()),
        Command::RotateLeft,
    ));
    out.push((
        State::new(state.corner, state.orientation.rotate_right()),
        Command::RotateRight,
    ));

    let (di, dj) = state.orientation.step();
    for rails in (1..=MAX_ADVANCE).rev() {
        if let Some(dest) = advance_target(grid, state.corner, di, dj, rails) {
            out.push((
                State::new(dest, state.orientation),
                Command::Advance(rails as u8),
            ));
        }
    }

    out
}

/// Corner reached by advancing `rails` rails from `from` along (di, dj),
/// or `None` if the move is illegal.
///
/// The move is checked rail by rail: every crossed rail must be
/// crossable and every corner passed through — intermediate and final —
/// must be in range and occupiable. One failing step invalidates the
/// whole move; the robot cannot squeeze past an obstacle it does not
/// stop next to.
fn advance_target(
    grid: &ObstacleGrid,
    from: Corner,
    di: i32,
    dj: i32,
    rails: i32,
) -> Option<Corner> {
    let mut at = from;
    for _ in 0..rails {
        let next = at.offset(di, dj);
        if !grid.contains_corner(next) {
            return None;
        }
        if !rail_crossable(grid, at, di, dj) {
            return None;
        }
        if !corner_occupiable(grid, next) {
            return None;
        }
        at = next;
    }
    Some(at)
}
