//! Noise model for the QSCOUT native gates.
//!
//! Each gate is charged a duration proportional to its rotation angle. Over
//! that duration it picks up a systematic over-rotation, an axis offset and
//! depolarization, and the result is returned as a real superoperator in the
//! Pauli basis for a density-matrix emulator to apply.
//!
//! # Example
//!
//! ```rust
//! use qscout_gates::{GateArg, QubitId};
//! use qscout_noise::{NoiseConfig, qscout_gate_set};
//!
//! let gates = qscout_gate_set(NoiseConfig::default()).unwrap();
//! let q0 = GateArg::from(QubitId(0));
//!
//! assert_eq!(gates.duration("Sx", &[q0.clone()]).unwrap(), 1.0);
//! let s = gates.superoperator("Sx", &[q0]).unwrap();
//! assert_eq!(s.dim(), (4, 4));
//! ```

pub mod config;
pub mod error;
pub mod gate_set;
pub mod model;
pub mod pauli;

pub use config::{DepolarizingConvention, NoiseConfig};
pub use error::{NoiseError, NoiseResult};
pub use gate_set::{CallOptions, NoisyGateSet, qscout_gate_set};
pub use model::{NoiseModel, TWO_QUBIT_SLOWDOWN, depolarizing_channel, relative_duration};
pub use pauli::{Superoperator, pauli_transfer};
