//! Gate families and the bindings that derive named gates from them.
//!
//! Every native gate is one of a handful of families evaluated with some
//! angles fixed and some supplied at call time. A [`FamilyBinding`] records
//! which is which, so that `Sx` is simply `RadialRotation` with the axis
//! fixed at 0 and the rotation fixed at π/2.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{GateError, GateResult};
use crate::unitary::{self, Unitary};

/// The closed set of physical gate families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateFamily {
    /// Single-qubit rotation about an axis in the X-Y plane: `(axis, rotation)`.
    RadialRotation,
    /// Single-qubit rotation about Z, applied as a frame change: `(angle)`.
    AxialRotation,
    /// Mølmer-Sørensen entangling rotation: `(axis, rotation)`.
    MsRotation,
    /// Two-qubit XX rotation: `(rotation)`.
    Xx,
    /// Two-qubit YY rotation: `(rotation)`.
    Yy,
    /// Two-qubit ZZ rotation: `(rotation)`.
    Zz,
}

impl GateFamily {
    /// Human-readable family name.
    pub fn name(self) -> &'static str {
        match self {
            GateFamily::RadialRotation => "radial_rotation",
            GateFamily::AxialRotation => "axial_rotation",
            GateFamily::MsRotation => "ms_rotation",
            GateFamily::Xx => "xx",
            GateFamily::Yy => "yy",
            GateFamily::Zz => "zz",
        }
    }

    /// Number of qubits the family acts on.
    pub fn num_qubits(self) -> usize {
        match self {
            GateFamily::RadialRotation | GateFamily::AxialRotation => 1,
            GateFamily::MsRotation | GateFamily::Xx | GateFamily::Yy | GateFamily::Zz => 2,
        }
    }

    /// Number of angle arguments of the canonical form.
    pub fn num_angles(self) -> usize {
        match self {
            GateFamily::RadialRotation | GateFamily::MsRotation => 2,
            GateFamily::AxialRotation | GateFamily::Xx | GateFamily::Yy | GateFamily::Zz => 1,
        }
    }

    /// Whether the first angle is an axis angle in the X-Y plane.
    pub fn has_axis(self) -> bool {
        matches!(self, GateFamily::RadialRotation | GateFamily::MsRotation)
    }

    /// Ideal unitary for the canonical angle list.
    ///
    /// `angles` must hold exactly [`num_angles`](Self::num_angles) values;
    /// [`BoundGate`] guarantees this.
    pub fn unitary(self, angles: &[f64]) -> Unitary {
        match self {
            GateFamily::RadialRotation => unitary::u_r(angles[0], angles[1]),
            GateFamily::AxialRotation => unitary::u_rz(angles[0]),
            GateFamily::MsRotation => unitary::u_ms(angles[0], angles[1]),
            GateFamily::Xx => unitary::u_xx(angles[0]),
            GateFamily::Yy => unitary::u_yy(angles[0]),
            GateFamily::Zz => unitary::u_zz(angles[0]),
        }
    }
}

impl fmt::Display for GateFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One canonical angle of a family: baked into the gate, or taken from the call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Slot {
    /// Fixed at gate-definition time.
    Fixed(f64),
    /// Supplied at call time, consuming the next float argument.
    Free,
}

/// How a named gate derives from its family.
///
/// Only constructed through [`FamilyBinding::new`] and friends, which check
/// the slot table, so it is serialize-only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FamilyBinding {
    family: GateFamily,
    slots: Vec<Slot>,
    stretched: bool,
}

impl FamilyBinding {
    /// Bind a family with the given slot table.
    ///
    /// Fails if the number of slots differs from the family's angle count or
    /// a fixed angle is not finite.
    pub fn new(family: GateFamily, slots: Vec<Slot>) -> GateResult<Self> {
        if slots.len() != family.num_angles() {
            return Err(GateError::invalid_argument(
                family.name(),
                format!(
                    "takes {} angles, binding has {} slots",
                    family.num_angles(),
                    slots.len()
                ),
            ));
        }
        if let Some(Slot::Fixed(v)) = slots
            .iter()
            .find(|s| matches!(s, Slot::Fixed(v) if !v.is_finite()))
        {
            return Err(GateError::invalid_argument(
                family.name(),
                format!("fixed angle {v} is not finite"),
            ));
        }
        Ok(Self {
            family,
            slots,
            stretched: false,
        })
    }

    /// The family with every angle supplied at call time.
    pub fn general(family: GateFamily) -> Self {
        Self {
            family,
            slots: vec![Slot::Free; family.num_angles()],
            stretched: false,
        }
    }

    /// The family with every angle fixed.
    pub fn fixed(family: GateFamily, angles: &[f64]) -> GateResult<Self> {
        Self::new(family, angles.iter().copied().map(Slot::Fixed).collect())
    }

    /// The underlying family.
    pub fn family(&self) -> GateFamily {
        self.family
    }

    /// The slot table.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Whether a trailing stretch factor is taken from the call arguments.
    pub fn is_stretched(&self) -> bool {
        self.stretched
    }

    /// Number of float arguments consumed at call time.
    pub fn num_float_args(&self) -> usize {
        let free = self.slots.iter().filter(|s| matches!(s, Slot::Free)).count();
        free + usize::from(self.stretched)
    }

    /// The same binding with a trailing call-time stretch factor.
    pub fn to_stretched(&self) -> Self {
        Self {
            stretched: true,
            ..self.clone()
        }
    }

    /// Fill the slot table from call-time floats.
    ///
    /// `floats` must hold exactly [`num_float_args`](Self::num_float_args)
    /// values. Returns the canonical angles and the stretch factor carried in
    /// the arguments, if any.
    pub(crate) fn fill(&self, floats: &[f64]) -> ([f64; 2], Option<f64>) {
        let mut angles = [0.0; 2];
        let mut free = floats.iter().copied();
        for (angle, slot) in angles.iter_mut().zip(&self.slots) {
            *angle = match slot {
                Slot::Fixed(v) => *v,
                Slot::Free => free.next().unwrap_or_default(),
            };
        }
        let stretch = if self.stretched { free.next() } else { None };
        (angles, stretch)
    }
}

/// Reject a stretch factor that is negative or not finite.
pub(crate) fn check_stretch(gate: &str, stretch: f64) -> GateResult<()> {
    if !stretch.is_finite() || stretch < 0.0 {
        return Err(GateError::invalid_argument(
            gate,
            format!("stretch must be a finite non-negative number, got {stretch}"),
        ));
    }
    Ok(())
}

/// A gate family evaluated with concrete angles and a stretch factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundGate {
    family: GateFamily,
    angles: [f64; 2],
    stretch: f64,
}

impl BoundGate {
    /// Bind a family directly, bypassing any gate signature.
    ///
    /// `angles` must hold exactly the family's angle count of finite values
    /// and `stretch` must be finite and non-negative.
    pub fn new(family: GateFamily, angles: &[f64], stretch: f64) -> GateResult<Self> {
        if angles.len() != family.num_angles() {
            return Err(GateError::invalid_argument(
                family.name(),
                format!(
                    "expected {} angles, got {}",
                    family.num_angles(),
                    angles.len()
                ),
            ));
        }
        if let Some(bad) = angles.iter().find(|a| !a.is_finite()) {
            return Err(GateError::invalid_argument(
                family.name(),
                format!("angle {bad} is not finite"),
            ));
        }
        check_stretch(family.name(), stretch)?;

        let mut fixed = [0.0; 2];
        fixed[..angles.len()].copy_from_slice(angles);
        Ok(Self {
            family,
            angles: fixed,
            stretch,
        })
    }

    pub(crate) fn from_parts(family: GateFamily, angles: [f64; 2], stretch: f64) -> Self {
        Self {
            family,
            angles,
            stretch,
        }
    }

    /// The gate family.
    pub fn family(&self) -> GateFamily {
        self.family
    }

    /// Canonical angles, in family order.
    pub fn angles(&self) -> &[f64] {
        &self.angles[..self.family.num_angles()]
    }

    /// Axis angle, for axis-sensitive families.
    pub fn axis_angle(&self) -> Option<f64> {
        self.family.has_axis().then_some(self.angles[0])
    }

    /// The rotation angle: the last canonical angle.
    pub fn rotation_angle(&self) -> f64 {
        self.angles[self.family.num_angles() - 1]
    }

    /// Duration multiplier.
    pub fn stretch(&self) -> f64 {
        self.stretch
    }

    /// The ideal unitary with the bound angles.
    pub fn ideal_unitary(&self) -> Unitary {
        self.family.unitary(self.angles())
    }

    /// The same gate with its angles replaced, keeping family and stretch.
    pub fn with_angles(&self, axis_angle: Option<f64>, rotation_angle: f64) -> Self {
        let mut angles = self.angles;
        if let Some(axis) = axis_angle.filter(|_| self.family.has_axis()) {
            angles[0] = axis;
        }
        angles[self.family.num_angles() - 1] = rotation_angle;
        Self { angles, ..*self }
    }
}
