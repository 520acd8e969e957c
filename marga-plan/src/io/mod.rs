//! Instance and result text formats.
//!
//! Instances travel as plain-text blocks (grid dimensions, 0/1 cell
//! rows, query line) terminated by a `0 0` sentinel; results are one
//! line per instance, either `-1` or the command count followed by the
//! command tokens. See [`instance`] for the exact layout.

mod instance;

pub use instance::{format_result, read_instances, write_instances, Instance};
