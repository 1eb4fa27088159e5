//! The QSCOUT native gate tables.
//!
//! | Gate | Family | Fixed angles |
//! |------|--------|--------------|
//! | `R` | radial | none |
//! | `Rx`, `Ry` | radial | axis 0, π/2 |
//! | `Rz` | axial | none |
//! | `Px`, `Py`, `Pz` | radial / axial | rotation π |
//! | `Sx`, `Sy`, `Sz` | radial / axial | rotation π/2 |
//! | `Sxd`, `Syd`, `Szd` | radial / axial | rotation -π/2 |
//! | `MS` | Mølmer-Sørensen | none |
//! | `Sxx`, `Sxxd` | Mølmer-Sørensen | axis 0, rotation ±π/2 |
//! | `XX`, `YY`, `ZZ` | xx / yy / zz | none |
//! | `Syy`, `Syyd`, `Szz`, `Szzd` | yy / zz | rotation ±π/2 |

use std::f64::consts::{FRAC_PI_2, PI};

use tracing::debug;

use crate::error::GateResult;
use crate::family::{FamilyBinding, GateFamily, Slot};
use crate::registry::{GateRegistry, STRETCH_SUFFIX};
use crate::signature::{GateSignature, Parameter};

/// State preparation marker.
pub const PREPARE_ALL: &str = "prepare_all";
/// Measurement marker.
pub const MEASURE_ALL: &str = "measure_all";

fn one_qubit(name: &str, floats: &[&str], binding: FamilyBinding) -> GateSignature {
    let mut params = vec![Parameter::qubit("q")];
    params.extend(floats.iter().map(|f| Parameter::float(*f)));
    GateSignature::active(name, params, binding)
}

fn two_qubit(name: &str, floats: &[&str], binding: FamilyBinding) -> GateSignature {
    let mut params = vec![Parameter::qubit("q0"), Parameter::qubit("q1")];
    params.extend(floats.iter().map(|f| Parameter::float(*f)));
    GateSignature::active(name, params, binding)
}

fn radial(axis: f64, rotation: f64) -> GateResult<FamilyBinding> {
    FamilyBinding::fixed(GateFamily::RadialRotation, &[axis, rotation])
}

fn axial(angle: f64) -> GateResult<FamilyBinding> {
    FamilyBinding::fixed(GateFamily::AxialRotation, &[angle])
}

/// Active single- and two-qubit gates of the standard set, in table order.
pub fn native_active_gates() -> GateResult<Vec<GateSignature>> {
    use GateFamily::{AxialRotation, MsRotation, RadialRotation};

    Ok(vec![
        one_qubit(
            "R",
            &["axis-angle", "rotation-angle"],
            FamilyBinding::general(RadialRotation),
        ),
        one_qubit(
            "Rx",
            &["angle"],
            FamilyBinding::new(RadialRotation, vec![Slot::Fixed(0.0), Slot::Free])?,
        ),
        one_qubit(
            "Ry",
            &["angle"],
            FamilyBinding::new(RadialRotation, vec![Slot::Fixed(FRAC_PI_2), Slot::Free])?,
        ),
        one_qubit("Rz", &["angle"], FamilyBinding::general(AxialRotation)),
        one_qubit("Px", &[], radial(0.0, PI)?),
        one_qubit("Py", &[], radial(FRAC_PI_2, PI)?),
        one_qubit("Pz", &[], axial(PI)?),
        one_qubit("Sx", &[], radial(0.0, FRAC_PI_2)?),
        one_qubit("Sy", &[], radial(FRAC_PI_2, FRAC_PI_2)?),
        one_qubit("Sz", &[], axial(FRAC_PI_2)?),
        one_qubit("Sxd", &[], radial(0.0, -FRAC_PI_2)?),
        one_qubit("Syd", &[], radial(FRAC_PI_2, -FRAC_PI_2)?),
        one_qubit("Szd", &[], axial(-FRAC_PI_2)?),
        two_qubit(
            "MS",
            &["axis-angle", "rotation-angle"],
            FamilyBinding::general(MsRotation),
        ),
        two_qubit("Sxx", &[], FamilyBinding::fixed(MsRotation, &[0.0, FRAC_PI_2])?),
    ])
}

/// Extended two-qubit gates: general `XX`/`YY`/`ZZ` rotations and their
/// fixed-angle forms.
pub fn two_qubit_active_gates() -> GateResult<Vec<GateSignature>> {
    use GateFamily::{MsRotation, Xx, Yy, Zz};

    Ok(vec![
        two_qubit("XX", &["rotation-angle"], FamilyBinding::general(Xx)),
        two_qubit("YY", &["rotation-angle"], FamilyBinding::general(Yy)),
        two_qubit("ZZ", &["rotation-angle"], FamilyBinding::general(Zz)),
        two_qubit("Sxxd", &[], FamilyBinding::fixed(MsRotation, &[0.0, -FRAC_PI_2])?),
        two_qubit("Syy", &[], FamilyBinding::fixed(Yy, &[FRAC_PI_2])?),
        two_qubit("Syyd", &[], FamilyBinding::fixed(Yy, &[-FRAC_PI_2])?),
        two_qubit("Szz", &[], FamilyBinding::fixed(Zz, &[FRAC_PI_2])?),
        two_qubit("Szzd", &[], FamilyBinding::fixed(Zz, &[-FRAC_PI_2])?),
    ])
}

/// The standard native gate set: boundary markers, active gates and the
/// idle twin of every active gate.
pub fn native_gates() -> GateResult<GateRegistry> {
    let mut gates = vec![GateSignature::boundary(PREPARE_ALL)];
    gates.extend(native_active_gates()?);
    gates.push(GateSignature::boundary(MEASURE_ALL));

    let registry = GateRegistry::from_signatures(gates)?.with_idle_twins()?;
    debug!("Built native gate set with {} gates", registry.len());
    Ok(registry)
}

/// The extended two-qubit gates with their idle twins.
pub fn two_qubit_gates() -> GateResult<GateRegistry> {
    let registry = GateRegistry::from_signatures(two_qubit_active_gates()?)?.with_idle_twins()?;
    debug!("Built two-qubit gate set with {} gates", registry.len());
    Ok(registry)
}

/// Everything an emulator needs: native and two-qubit gates plus the
/// stretched variant of every active gate.
pub fn all_gates() -> GateResult<GateRegistry> {
    let mut registry = native_gates()?;
    registry.extend_from(&two_qubit_gates()?)?;
    let stretched = registry.stretched(STRETCH_SUFFIX)?;
    registry.extend_from(&stretched)?;
    Ok(registry)
}
