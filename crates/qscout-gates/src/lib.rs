//! QSCOUT native gates.
//!
//! This crate holds the gate-level description of the QSCOUT trapped-ion
//! native gate set: the ideal unitaries, the typed gate signatures a Jaqal
//! front end validates programs against, and the registries that group them.
//!
//! # Overview
//!
//! - **Unitaries**: [`unitary`] has closed-form generators for every gate
//!   family (`u_r`, `u_rz`, `u_ms`, `u_xx`, ...).
//! - **Families**: [`GateFamily`] is the closed set of physical operations;
//!   a [`FamilyBinding`] derives a named gate by fixing some angles.
//! - **Signatures**: [`GateSignature`] couples a name, its ordered
//!   [`Parameter`] list and a [`GateAction`].
//! - **Registries**: [`GateRegistry`] maps names to signatures.
//!   [`native_gates`] builds the standard set and
//!   [`GateRegistry::stretched`] derives the stretched variants.
//!
//! # Example
//!
//! ```rust
//! use qscout_gates::{native_gates, GateArg, QubitId};
//! use qscout_gates::unitary::{approx_eq, u_rx, EPSILON};
//! use std::f64::consts::PI;
//!
//! let gates = native_gates().unwrap();
//! let px = gates.ideal_unitary("Px", &[GateArg::from(QubitId(0))]).unwrap();
//! assert!(approx_eq(&px, &u_rx(PI), EPSILON));
//! ```

pub mod argument;
pub mod error;
pub mod family;
pub mod native;
pub mod qubit;
pub mod registry;
pub mod signature;
pub mod unitary;

pub use argument::{AngleExpr, GateArg};
pub use error::{GateError, GateResult};
pub use family::{BoundGate, FamilyBinding, GateFamily, Slot};
pub use native::{MEASURE_ALL, PREPARE_ALL, all_gates, native_gates, two_qubit_gates};
pub use qubit::QubitId;
pub use registry::{GateRegistry, STRETCH_SUFFIX};
pub use signature::{GateAction, GateSignature, IDLE_PREFIX, ParamKind, Parameter, STRETCH_PARAM};
pub use unitary::Unitary;
