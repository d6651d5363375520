//! Error types for light curve simulation.

use lc_models::ModelError;
use thiserror::Error;

/// Errors returned by simulator construction and invocation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Rejected at construction; no simulator is created
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// Rejected at invocation; the simulator stays usable
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error(transparent)]
    Model(#[from] ModelError),
}
