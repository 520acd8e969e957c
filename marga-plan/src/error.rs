//! Error types for marga-plan.
//!
//! Only the surrounding tooling (instance parsing, file handling,
//! generation parameters) produces errors. A route query itself never
//! errors: it answers with a [`RouteResult`](crate::planning::RouteResult)
//! that either carries a command sequence or the no-route sentinel.

use thiserror::Error;

/// marga-plan error type
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid parameters: {0}")]
    Params(String),
}

pub type Result<T> = std::result::Result<T, PlanError>;
