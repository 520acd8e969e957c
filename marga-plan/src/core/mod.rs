//! Core types for the rail-grid planner.
//!
//! - [`Corner`]: a lattice corner (rail intersection), the robot's position
//! - [`Orientation`]: compass facing with unit step vectors and wire tokens
//! - [`Command`]: one atomic robot action with its wire token

mod command;
mod corner;
mod orientation;

pub use command::Command;
pub use corner::Corner;
pub use orientation::Orientation;
