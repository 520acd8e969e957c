//! Breadth-first route planner.
//!
//! Every command — either rotation or any advance length — costs
//! exactly one, so the state graph is unweighted and plain breadth-first
//! order finds a minimum-command route. Substituting a shortest-distance
//! search here would be wrong: a 3-rail advance is as cheap as a 1-rail
//! one.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::core::{Command, Corner, Orientation};
use crate::grid::clearance::corner_occupiable;
use crate::grid::ObstacleGrid;
use crate::planning::successors::successors;
use crate::planning::types::{RouteFailure, RouteResult, State};

/// Breadth-first planner over the (M+1)×(N+1)×4 state space.
///
/// Borrows the grid read-only; all scratch state (visited flags,
/// predecessor links) is allocated per query and dropped on return, so
/// one planner may serve any number of queries and independent queries
/// may run in parallel over a shared grid.
pub struct RoutePlanner<'a> {
    grid: &'a ObstacleGrid,
}

impl<'a> RoutePlanner<'a> {
    /// Create a planner for the given grid
    pub fn new(grid: &'a ObstacleGrid) -> Self {
        Self { grid }
    }

    /// Find a minimum-command route from `start` (facing `orientation`)
    /// to `goal`.
    ///
    /// The goal test is on position only: any arrival orientation is
    /// accepted. When start equals goal (and is occupiable) the result
    /// is an empty command sequence.
    pub fn find_route(
        &self,
        start: Corner,
        orientation: Orientation,
        goal: Corner,
    ) -> RouteResult {
        trace!(
            "find_route: start={} facing {:?}, goal={}",
            start,
            orientation,
            goal
        );

        if !self.grid.contains_corner(start) || !self.grid.contains_corner(goal) {
            debug!("route failed: start {} or goal {} outside corner range", start, goal);
            return RouteResult::failed(RouteFailure::OutOfBounds, 0);
        }
        if !corner_occupiable(self.grid, start) {
            debug!("route failed: start corner {} not occupiable", start);
            return RouteResult::failed(RouteFailure::StartBlocked, 0);
        }
        if !corner_occupiable(self.grid, goal) {
            debug!("route failed: goal corner {} not occupiable", goal);
            return RouteResult::failed(RouteFailure::GoalBlocked, 0);
        }

        let mut arena = StateArena::new(self.grid);
        let mut queue = VecDeque::new();

        let start_state = State::new(start, orientation);
        arena.mark_visited(start_state);
        queue.push_back(start_state);

        let mut states_expanded = 0;
        let mut accept = None;

        while let Some(state) = queue.pop_front() {
            states_expanded += 1;

            // Goal test on dequeue, any orientation: breadth-first order
            // makes the first dequeued goal state a minimum-command one.
            if state.corner == goal {
                accept = Some(state);
                break;
            }

            for (next, command) in successors(self.grid, state) {
                if arena.mark_visited(next) {
                    arena.set_parent(next, state, command);
                    queue.push_back(next);
                }
            }
        }

        match accept {
            Some(state) => {
                let commands = arena.unwind(state);
                trace!(
                    "route found: {} commands, {} states expanded",
                    commands.len(),
                    states_expanded
                );
                RouteResult::solved(commands, states_expanded)
            }
            None => {
                debug!(
                    "route failed: state space exhausted after {} states",
                    states_expanded
                );
                RouteResult::failed(RouteFailure::NoPath, states_expanded)
            }
        }
    }
}

/// Predecessor link: the arena index of the prior state plus the
/// command that produced the transition.
#[derive(Clone, Copy)]
struct ParentLink {
    prev: u32,
    command: Command,
}

/// Per-query scratch state, linearly indexed by (i, j, orientation).
///
/// A flat arena instead of nested containers: O(1) visited tests and
/// predecessor links as plain indices rather than pointers.
struct StateArena {
    visited: Vec<bool>,
    parents: Vec<Option<ParentLink>>,
    corner_cols: usize,
}

impl StateArena {
    fn new(grid: &ObstacleGrid) -> Self {
        let size = (grid.rows() + 1) * (grid.cols() + 1) * 4;
        Self {
            visited: vec![false; size],
            parents: vec![None; size],
            corner_cols: grid.cols() + 1,
        }
    }

    /// Linear index of a state. Callers only pass in-range corners.
    fn index(&self, state: State) -> usize {
        let i = state.corner.i as usize;
        let j = state.corner.j as usize;
        (i * self.corner_cols + j) * 4 + state.orientation.index()
    }

    /// Mark a state visited; true if it was not visited before.
    fn mark_visited(&mut self, state: State) -> bool {
        let idx = self.index(state);
        !std::mem::replace(&mut self.visited[idx], true)
    }

    fn set_parent(&mut self, state: State, from: State, command: Command) {
        let idx = self.index(state);
        self.parents[idx] = Some(ParentLink {
            prev: self.index(from) as u32,
            command,
        });
    }

    /// Walk predecessor links back from `accept` to the start state (the
    /// only visited state without a link) and return the forward command
    /// sequence. Pure unwind: no legality is recomputed.
    fn unwind(&self, accept: State) -> Vec<Command> {
        let mut commands = Vec::new();
        let mut idx = self.index(accept);
        while let Some(link) = self.parents[idx] {
            commands.push(link.command);
            idx = link.prev as usize;
        }
        commands.reverse();
        commands
    }
}
