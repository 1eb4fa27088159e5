//! Error types for the noise crate.

use qscout_gates::GateError;
use thiserror::Error;

/// Errors produced by the noise model and its configuration.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum NoiseError {
    /// Gate lookup or argument binding failed.
    #[error(transparent)]
    Gate(#[from] GateError),

    /// A matrix had the wrong shape for the requested conversion.
    #[error("Invalid matrix: {0}")]
    InvalidMatrix(String),

    /// Configuration values out of range.
    #[error("Invalid noise configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read.
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration file could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type for noise model operations.
pub type NoiseResult<T> = Result<T, NoiseError>;
