//! Error types for the gates crate.

use thiserror::Error;

/// Errors that can occur when looking up or evaluating a gate.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum GateError {
    /// Wrong arity, wrong argument kind, or an argument that is not a finite real.
    #[error("Invalid argument for gate '{gate}': {reason}")]
    InvalidArgument {
        /// Name of the gate being evaluated.
        gate: String,
        /// What was wrong with the arguments.
        reason: String,
    },

    /// The request needs a capability that only whole-register operation lacks.
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// No gate with this exact name exists in the registry.
    #[error("Unknown gate '{0}'")]
    UnknownGate(String),

    /// A gate with this name is already registered.
    #[error("Gate '{0}' is already registered")]
    DuplicateGate(String),

    /// The gate has no unitary action (idle twin or boundary marker).
    #[error("Gate '{0}' has no unitary action")]
    NonUnitary(String),
}

impl GateError {
    /// Shorthand for an [`GateError::InvalidArgument`] error.
    pub fn invalid_argument(gate: impl Into<String>, reason: impl Into<String>) -> Self {
        GateError::InvalidArgument {
            gate: gate.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for gate operations.
pub type GateResult<T> = Result<T, GateError>;
