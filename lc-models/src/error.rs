//! Error types for the flux models.

use thiserror::Error;

/// Errors raised while configuring or evaluating a flux model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("limb darkening law '{law}' takes {expected} coefficient(s), got {got}")]
    CoefficientCount {
        law: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("unknown limb darkening law: {0}")]
    UnknownLaw(String),
}
