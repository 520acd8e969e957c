//! Route planning: minimum-command routes on the rail grid.
//!
//! The robot stands on lattice corners and obeys five commands: quarter
//! turns left/right and advances of 1–3 rails along its facing. Each
//! command costs one unit regardless of distance covered, so the
//! planner runs an unweighted breadth-first search over the implicit
//! (corner, orientation) state graph and returns the first route that
//! reaches the goal corner — which breadth-first order guarantees is a
//! minimum-command one.

mod bfs;
mod successors;
mod types;

pub use bfs::RoutePlanner;
pub use successors::{successors, MAX_ADVANCE};
pub use types::{RouteFailure, RouteResult, State};

use crate::core::{Corner, Orientation};
use crate::grid::ObstacleGrid;

/// One-shot route query with a throwaway planner
pub fn find_route(
    grid: &ObstacleGrid,
    start: Corner,
    orientation: Orientation,
    goal: Corner,
) -> RouteResult {
    RoutePlanner::new(grid).find_route(start, orientation, goal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Command;
    use crate::grid::clearance::{corner_occupiable, rail_crossable};

    /// Execute a command sequence from the start state, re-checking every
    /// clearance rule the planner relied on. Returns the final corner, or
    /// `None` if any step is illegal.
    fn replay(
        grid: &ObstacleGrid,
        start: Corner,
        orientation: Orientation,
        commands: &[Command],
    ) -> Option<Corner> {
        if !corner_occupiable(grid, start) {
            return None;
        }
        let mut state = State::new(start, orientation);
        for &cmd in commands {
            state = match cmd {
                Command::RotateLeft => State::new(state.corner, state.orientation.rotate_left()),
                Command::RotateRight => State::new(state.corner, state.orientation.rotate_right()),
                Command::Advance(n) => {
                    let (di, dj) = state.orientation.step();
                    let mut at = state.corner;
                    for _ in 0..n {
                        let next = at.offset(di, dj);
                        if !grid.contains_corner(next)
                            || !rail_crossable(grid, at, di, dj)
                            || !corner_occupiable(grid, next)
                        {
                            return None;
                        }
                        at = next;
                    }
                    State::new(at, state.orientation)
                }
            };
        }
        Some(state.corner)
    }

    /// Does any command sequence of exactly `len` drive the robot from
    /// start to goal? Exhaustive, for minimality cross-checks on short
    /// routes only.
    fn some_sequence_reaches(
        grid: &ObstacleGrid,
        start: Corner,
        orientation: Orientation,
        goal: Corner,
        len: usize,
    ) -> bool {
        let alphabet = [
            Command::RotateLeft,
            Command::RotateRight,
            Command::Advance(3),
            Command::Advance(2),
            Command::Advance(1),
        ];
        let mut sequence = vec![alphabet[0]; len];
        let mut counters = vec![0usize; len];
        loop {
            for (slot, &choice) in sequence.iter_mut().zip(counters.iter()) {
                *slot = alphabet[choice];
            }
            if replay(grid, start, orientation, &sequence) == Some(goal) {
                return true;
            }
            // Odometer increment over the 5-command alphabet
            let mut pos = 0;
            loop {
                if pos == len {
                    return false;
                }
                counters[pos] += 1;
                if counters[pos] < alphabet.len() {
                    break;
                }
                counters[pos] = 0;
                pos += 1;
            }
        }
    }

    #[test]
    fn direct_two_rail_advance() {
        // 4x4 open grid, (1,1) facing east to (1,3): a single a2.
        let grid = ObstacleGrid::new(4, 4);
        let result = find_route(
            &grid,
            Corner::new(1, 1),
            Orientation::East,
            Corner::new(1, 3),
        );
        assert!(result.success);
        assert_eq!(result.commands, vec![Command::Advance(2)]);
    }

    #[test]
    fn start_equals_goal_is_zero_commands() {
        let grid = ObstacleGrid::new(4, 4);
        let result = find_route(
            &grid,
            Corner::new(2, 2),
            Orientation::North,
            Corner::new(2, 2),
        );
        assert!(result.success);
        assert!(result.is_empty());
    }

    #[test]
    fn boundary_start_rejected() {
        let mut grid = ObstacleGrid::new(5, 5);
        let result = find_route(
            &grid,
            Corner::new(0, 0),
            Orientation::East,
            Corner::new(2, 2),
        );
        assert!(!result.success);
        assert_eq!(result.failure, Some(RouteFailure::StartBlocked));

        // Obstacles are irrelevant: boundary corners fail regardless
        for r in 0..5 {
            for c in 0..5 {
                grid.set(r, c, true);
            }
        }
        let result = find_route(
            &grid,
            Corner::new(0, 0),
            Orientation::East,
            Corner::new(2, 2),
        );
        assert_eq!(result.failure, Some(RouteFailure::StartBlocked));
    }

    #[test]
    fn boundary_goal_rejected() {
        let grid = ObstacleGrid::new(5, 5);
        let result = find_route(
            &grid,
            Corner::new(2, 2),
            Orientation::East,
            Corner::new(5, 3),
        );
        assert!(!result.success);
        assert_eq!(result.failure, Some(RouteFailure::GoalBlocked));
    }

    #[test]
    fn out_of_range_coordinates_rejected() {
        let grid = ObstacleGrid::new(4, 4);
        let result = find_route(
            &grid,
            Corner::new(2, 2),
            Orientation::East,
            Corner::new(7, 1),
        );
        assert_eq!(result.failure, Some(RouteFailure::OutOfBounds));

        let result = find_route(
            &grid,
            Corner::new(-1, 2),
            Orientation::East,
            Corner::new(2, 2),
        );
        assert_eq!(result.failure, Some(RouteFailure::OutOfBounds));
    }

    #[test]
    fn turning_costs_commands() {
        // Goal lies due south while facing north and the north edge is a
        // wall of boundary corners, so the route is two turns plus one
        // advance. The tie-break makes it two left turns.
        let grid = ObstacleGrid::new(4, 4);
        let result = find_route(
            &grid,
            Corner::new(1, 1),
            Orientation::North,
            Corner::new(3, 1),
        );
        assert!(result.success);
        assert_eq!(
            result.commands,
            vec![Command::RotateLeft, Command::RotateLeft, Command::Advance(2)]
        );
    }

    #[test]
    fn returned_route_is_minimal() {
        let grid = ObstacleGrid::new(4, 4);
        let start = Corner::new(1, 1);
        let goal = Corner::new(3, 1);
        let result = find_route(&grid, start, Orientation::North, goal);
        assert!(result.success);
        for shorter in 0..result.len() {
            assert!(
                !some_sequence_reaches(&grid, start, Orientation::North, goal, shorter),
                "a sequence of length {} also reaches the goal",
                shorter
            );
        }
    }

    #[test]
    fn obstacles_force_detour() {
        // Cells (2,2) and (3,2) block every interior corner in columns
        // 2-3 between rows 2 and 4; the direct 3-rail advance becomes a
        // six-command detour through row 1 or row 5.
        let start = Corner::new(3, 1);
        let goal = Corner::new(3, 4);

        let open = ObstacleGrid::new(6, 6);
        let direct = find_route(&open, start, Orientation::East, goal);
        assert_eq!(direct.commands, vec![Command::Advance(3)]);

        let mut grid = ObstacleGrid::new(6, 6);
        grid.set(2, 2, true);
        grid.set(3, 2, true);
        let detour = find_route(&grid, start, Orientation::East, goal);
        assert!(detour.success);
        assert_eq!(detour.len(), 6);
        assert_eq!(replay(&grid, start, Orientation::East, &detour.commands), Some(goal));
    }

    #[test]
    fn separating_wall_has_no_route() {
        // A full column of obstacles splits the grid; every corner with
        // j in {2, 3} touches one of them.
        let mut grid = ObstacleGrid::new(5, 5);
        for r in 0..5 {
            grid.set(r, 2, true);
        }
        let result = find_route(
            &grid,
            Corner::new(2, 1),
            Orientation::East,
            Corner::new(2, 4),
        );
        assert!(!result.success);
        assert_eq!(result.failure, Some(RouteFailure::NoPath));
        assert!(result.states_expanded > 0);
    }

    #[test]
    fn goal_accepts_any_orientation() {
        // Facing west with the goal to the east: the route ends at the
        // goal corner whatever direction the robot then faces.
        let grid = ObstacleGrid::new(5, 5);
        let start = Corner::new(2, 1);
        let goal = Corner::new(2, 3);
        let result = find_route(&grid, start, Orientation::West, goal);
        assert!(result.success);
        assert_eq!(replay(&grid, start, Orientation::West, &result.commands), Some(goal));
        // Two turns and one advance; never more
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn repeated_queries_are_identical() {
        let mut grid = ObstacleGrid::new(6, 6);
        grid.set(2, 2, true);
        grid.set(4, 3, true);
        let start = Corner::new(1, 1);
        let goal = Corner::new(4, 4);

        let first = find_route(&grid, start, Orientation::South, goal);
        for _ in 0..3 {
            let again = find_route(&grid, start, Orientation::South, goal);
            assert_eq!(again.success, first.success);
            assert_eq!(again.commands, first.commands);
        }
    }

    #[test]
    fn routes_replay_cleanly() {
        let mut grid = ObstacleGrid::new(7, 7);
        grid.set(1, 3, true);
        grid.set(3, 3, true);
        grid.set(5, 2, true);

        for start in [Corner::new(1, 1), Corner::new(5, 5), Corner::new(3, 1)] {
            for goal in [Corner::new(5, 4), Corner::new(1, 5), Corner::new(6, 1)] {
                for orientation in Orientation::ALL {
                    let result = find_route(&grid, start, orientation, goal);
                    if result.success {
                        assert_eq!(
                            replay(&grid, start, orientation, &result.commands),
                            Some(goal),
                            "route from {} to {} failed replay",
                            start,
                            goal
                        );
                    }
                }
            }
        }
    }
}
