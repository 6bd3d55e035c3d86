//! Sweep errors.
//!
//! Simulation itself cannot fail; only malformed sweep requests are rejected.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SweepError {
    #[error("Sweep must have at least 2 points (got {num_points})")]
    TooFewPoints { num_points: usize },

    #[error("Start and end values must be different")]
    IdenticalBounds,

    #[error("Non-finite sweep bound for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Unknown sweep parameter: {name}")]
    UnknownParameter { name: String },
}
