//! The duration-driven gate error model.
//!
//! Every physical gate is charged a dimensionless duration, measured in
//! units of one π/2 single-qubit pulse. Over-rotation grows linearly with
//! that duration and depolarization compounds exponentially with it:
//!
//! ```text
//! duration   = stretch * k * |rotation| / (π/2)
//! rotation'  = rotation + rotation_error * duration
//! axis'      = axis + phase_error
//! d          = (1 - depolarization) ^ duration
//! S          = PTM(U(axis', rotation')) · D(d)
//! ```
//!
//! with `k = 1` for single-qubit rotations and `k = 10` for two-qubit gates.
//! Z rotations are frame changes: zero duration, exact action.

use ndarray::Array2;
use ndarray::linalg::kron;
use qscout_gates::{BoundGate, GateError, GateFamily};
use std::f64::consts::FRAC_PI_2;
use tracing::{debug, trace};

use crate::config::{DepolarizingConvention, NoiseConfig};
use crate::error::NoiseResult;
use crate::pauli::{MAX_QUBITS, Superoperator, pauli_transfer};

/// Duration of a π/2 two-qubit gate in units of a π/2 single-qubit gate.
pub const TWO_QUBIT_SLOWDOWN: f64 = 10.0;

/// Duration units per π/2 of rotation for a family.
///
/// Both [`NoiseModel::duration`] and [`NoiseModel::superoperator`] go through
/// this table, so the two always agree.
pub fn relative_duration(family: GateFamily) -> f64 {
    match family {
        GateFamily::AxialRotation => 0.0,
        GateFamily::RadialRotation => 1.0,
        GateFamily::MsRotation | GateFamily::Xx | GateFamily::Yy | GateFamily::Zz => {
            TWO_QUBIT_SLOWDOWN
        }
    }
}

/// Diagonal depolarizing channel on `num_qubits` qubits: 1 on the trace
/// component, `term` (or its powers, for [`DepolarizingConvention::Product`])
/// on the coherences.
pub fn depolarizing_channel(
    num_qubits: usize,
    term: f64,
    convention: DepolarizingConvention,
) -> Superoperator {
    match convention {
        DepolarizingConvention::Product => {
            let single = Array2::from_diag(&ndarray::arr1(&[1.0, term, term, term]));
            (0..num_qubits).fold(Array2::eye(1), |acc, _| kron(&acc, &single))
        }
        DepolarizingConvention::Uniform => {
            let size = 1usize << (2 * num_qubits);
            let mut channel = Array2::from_elem((size, size), 0.0);
            channel.diag_mut().fill(term);
            channel[[0, 0]] = 1.0;
            channel
        }
    }
}

/// Error model for the QSCOUT native gates.
///
/// Holds only the immutable rates of a [`NoiseConfig`]; evaluation is pure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoiseModel {
    config: NoiseConfig,
}

impl NoiseModel {
    /// Create a model from validated rates.
    pub fn new(config: NoiseConfig) -> NoiseResult<Self> {
        config.validate()?;
        debug!(
            "Noise model: depolarization={}, rotation_error={}, phase_error={}, two_qubit={}",
            config.depolarization,
            config.rotation_error,
            config.phase_error,
            config.two_qubit_depolarization
        );
        Ok(Self { config })
    }

    /// The model's rates.
    pub fn config(&self) -> &NoiseConfig {
        &self.config
    }

    /// Dimensionless gate duration, `>= 0`.
    pub fn duration(&self, gate: &BoundGate) -> f64 {
        let scale = relative_duration(gate.family());
        if scale == 0.0 {
            return 0.0;
        }
        gate.stretch() * scale * gate.rotation_angle().abs() / FRAC_PI_2
    }

    /// Coherence decay factor after `duration`.
    pub fn depolarization_term(&self, duration: f64) -> f64 {
        (1.0 - self.config.depolarization).powf(duration)
    }

    /// The gate as physically realized: over-rotated in proportion to its
    /// duration and, for axis-sensitive families, with a shifted axis.
    ///
    /// Z rotations come back unchanged.
    pub fn perturbed(&self, gate: &BoundGate) -> BoundGate {
        if gate.family() == GateFamily::AxialRotation {
            return *gate;
        }
        let duration = self.duration(gate);
        let rotation = gate.rotation_angle() + self.config.rotation_error * duration;
        let axis = gate.axis_angle().map(|a| a + self.config.phase_error);
        gate.with_angles(axis, rotation)
    }

    /// Noisy superoperator of a bound gate, `4^k x 4^k` for a `k`-qubit gate.
    pub fn superoperator(&self, gate: &BoundGate) -> NoiseResult<Superoperator> {
        if gate.family() == GateFamily::AxialRotation {
            return pauli_transfer(&gate.ideal_unitary());
        }

        let duration = self.duration(gate);
        let term = self.depolarization_term(duration);
        trace!(
            "{} gate: duration={}, depolarization_term={}",
            gate.family(),
            duration,
            term
        );

        let ideal = pauli_transfer(&self.perturbed(gate).ideal_unitary())?;
        let channel = depolarizing_channel(
            gate.family().num_qubits(),
            term,
            self.config.two_qubit_depolarization,
        );
        Ok(ideal.dot(&channel))
    }

    /// Background decoherence of one idle qubit over `duration`.
    pub fn idle(&self, duration: f64) -> NoiseResult<Superoperator> {
        self.idle_qubits(1, duration)
    }

    /// Background decoherence of `num_qubits` idle qubits over `duration`.
    pub fn idle_qubits(&self, num_qubits: usize, duration: f64) -> NoiseResult<Superoperator> {
        if !duration.is_finite() || duration < 0.0 {
            return Err(GateError::invalid_argument(
                "idle",
                format!("duration must be a finite non-negative number, got {duration}"),
            )
            .into());
        }
        if num_qubits == 0 || num_qubits > MAX_QUBITS {
            return Err(GateError::invalid_argument(
                "idle",
                format!("cannot idle {num_qubits} qubits (1 to {MAX_QUBITS} supported)"),
            )
            .into());
        }
        Ok(depolarizing_channel(
            num_qubits,
            self.depolarization_term(duration),
            self.config.two_qubit_depolarization,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NoiseError;
    use std::f64::consts::PI;

    const TOL: f64 = 1e-12;

    fn diag(m: &Superoperator) -> Vec<f64> {
        m.diag().to_vec()
    }

    #[test]
    fn test_sx_duration_and_perturbation() {
        let model = NoiseModel::default();
        let sx = BoundGate::new(GateFamily::RadialRotation, &[0.0, FRAC_PI_2], 1.0).unwrap();
        assert_eq!(model.duration(&sx), 1.0);

        let p = model.perturbed(&sx);
        assert_eq!(p.rotation_angle(), FRAC_PI_2 + 1e-2);
        assert_eq!(p.axis_angle(), Some(1e-2));
    }

    #[test]
    fn test_two_qubit_gates_are_ten_times_slower() {
        let model = NoiseModel::default();
        for family in [GateFamily::Xx, GateFamily::Yy, GateFamily::Zz] {
            let g = BoundGate::new(family, &[FRAC_PI_2], 1.0).unwrap();
            assert_eq!(model.duration(&g), 10.0);
        }
        let ms = BoundGate::new(GateFamily::MsRotation, &[0.3, -FRAC_PI_2], 1.0).unwrap();
        assert_eq!(model.duration(&ms), 10.0);
    }

    #[test]
    fn test_z_rotation_is_free_and_exact() {
        let model = NoiseModel::default();
        let rz = BoundGate::new(GateFamily::AxialRotation, &[1.234], 7.0).unwrap();
        assert_eq!(model.duration(&rz), 0.0);
        let s = model.superoperator(&rz).unwrap();
        let exact = pauli_transfer(&qscout_gates::unitary::u_rz(1.234)).unwrap();
        assert_eq!(s, exact);
    }

    #[test]
    fn test_noiseless_model_is_ideal() {
        let model = NoiseModel::new(NoiseConfig::noiseless()).unwrap();
        let ms = BoundGate::new(GateFamily::MsRotation, &[0.2, 0.8], 1.0).unwrap();
        let s = model.superoperator(&ms).unwrap();
        let exact = pauli_transfer(&ms.ideal_unitary()).unwrap();
        for (a, b) in s.iter().zip(exact.iter()) {
            assert!((a - b).abs() < TOL);
        }
    }

    #[test]
    fn test_superoperator_shapes() {
        let model = NoiseModel::default();
        let r = BoundGate::new(GateFamily::RadialRotation, &[0.1, 0.2], 1.0).unwrap();
        assert_eq!(model.superoperator(&r).unwrap().dim(), (4, 4));
        let zz = BoundGate::new(GateFamily::Zz, &[0.2], 1.0).unwrap();
        assert_eq!(model.superoperator(&zz).unwrap().dim(), (16, 16));
    }

    #[test]
    fn test_superoperator_preserves_trace() {
        let model = NoiseModel::default();
        let ms = BoundGate::new(GateFamily::MsRotation, &[0.4, 1.3], 2.0).unwrap();
        let s = model.superoperator(&ms).unwrap();
        assert!((s[[0, 0]] - 1.0).abs() < TOL);
        for j in 1..16 {
            assert!(s[[0, j]].abs() < TOL);
        }
    }

    #[test]
    fn test_idle() {
        let model = NoiseModel::default();
        assert_eq!(model.idle(0.0).unwrap(), Array2::<f64>::eye(4));

        let one = model.idle(1.0).unwrap();
        let expected = [1.0, 0.999, 0.999, 0.999];
        for (a, b) in diag(&one).iter().zip(expected) {
            assert!((a - b).abs() < TOL);
        }
        assert_eq!(one.sum() - one.diag().sum(), 0.0);
    }

    #[test]
    fn test_idle_rejects_bad_duration() {
        let model = NoiseModel::default();
        for d in [-1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                model.idle(d),
                Err(NoiseError::Gate(GateError::InvalidArgument { .. }))
            ));
        }
        assert!(model.idle_qubits(0, 1.0).is_err());
    }

    #[test]
    fn test_conventions_differ_on_weight_two_components() {
        let d = 0.9;
        let product = depolarizing_channel(2, d, DepolarizingConvention::Product);
        let uniform = depolarizing_channel(2, d, DepolarizingConvention::Uniform);
        for idx in 0..16 {
            let (a, b) = (idx / 4, idx % 4);
            let weight = usize::from(a != 0) + usize::from(b != 0);
            let p = product[[idx, idx]];
            let u = uniform[[idx, idx]];
            match weight {
                0 => assert!(p == 1.0 && u == 1.0),
                1 => assert!((p - d).abs() < TOL && (u - d).abs() < TOL),
                _ => {
                    assert!((p - d * d).abs() < TOL);
                    assert!((u - d).abs() < TOL);
                }
            }
        }
    }

    #[test]
    fn test_uniform_convention_in_model() {
        let config = NoiseConfig::default()
            .with_two_qubit_depolarization(DepolarizingConvention::Uniform);
        let model = NoiseModel::new(config).unwrap();
        let idle = model.idle_qubits(2, 3.0).unwrap();
        let term = model.depolarization_term(3.0);
        assert!(diag(&idle)[1..].iter().all(|v| (v - term).abs() < TOL));
    }

    #[test]
    fn test_stretch_scales_duration() {
        let model = NoiseModel::default();
        let g = BoundGate::new(GateFamily::RadialRotation, &[0.0, PI], 1.0).unwrap();
        let g2 = BoundGate::new(GateFamily::RadialRotation, &[0.0, PI], 2.0).unwrap();
        assert_eq!(model.duration(&g2), 2.0 * model.duration(&g));
    }

    #[test]
    fn test_stretch_is_validated_before_evaluation() {
        assert!(matches!(
            BoundGate::new(GateFamily::RadialRotation, &[0.0, FRAC_PI_2], -1.0),
            Err(GateError::InvalidArgument { .. })
        ));
        assert!(matches!(
            BoundGate::new(GateFamily::MsRotation, &[0.0, FRAC_PI_2], f64::NAN),
            Err(GateError::InvalidArgument { .. })
        ));

        let model = NoiseModel::default();
        for stretch in [0.0, 0.5, 3.0] {
            let ms = BoundGate::new(GateFamily::MsRotation, &[0.0, FRAC_PI_2], stretch).unwrap();
            assert!(model.duration(&ms) >= 0.0);
            let s = model.superoperator(&ms).unwrap();
            assert!(s.iter().all(|v| v.is_finite()));
            for j in 0..16 {
                let norm = s.column(j).iter().map(|v| v * v).sum::<f64>().sqrt();
                assert!(norm <= 1.0 + TOL);
            }
        }
    }
}
