//! Error taxonomy for a simulation run.
//!
//! Every variant is fatal: a run either yields a complete set of aggregates
//! or nothing at all.

use thiserror::Error;

/// Errors raised while configuring or running the simulation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// Rejected configuration value
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Measurement lower bound exceeds its upper bound for one sample
    #[error(
        "invalid measurement range at sample {index}: lower bound {lower} exceeds upper bound {upper}"
    )]
    InvalidRange {
        /// Sample index
        index: usize,
        /// `floor(minor)`
        lower: i64,
        /// `floor(major)`
        upper: i64,
    },
}

impl SimulationError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        SimulationError::Configuration(message.into())
    }
}

/// Result alias for simulation operations
pub type Result<T> = std::result::Result<T, SimulationError>;
