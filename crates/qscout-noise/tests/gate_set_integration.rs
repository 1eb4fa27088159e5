//! End-to-end behavior of the noisy gate set.

use ndarray::Array2;
use qscout_gates::unitary::u_rx;
use qscout_gates::{GateArg, GateError, QubitId, native_gates};
use qscout_noise::{
    CallOptions, DepolarizingConvention, NoiseConfig, NoiseError, NoiseModel, NoisyGateSet,
    pauli_transfer, qscout_gate_set,
};
use std::f64::consts::{FRAC_PI_2, PI};

const TOL: f64 = 1e-12;

fn q(i: u32) -> GateArg {
    QubitId(i).into()
}

fn assert_close(a: &Array2<f64>, b: &Array2<f64>, tol: f64) {
    assert_eq!(a.dim(), b.dim());
    for (x, y) in a.iter().zip(b.iter()) {
        assert!((x - y).abs() < tol, "{a:?}\n!=\n{b:?}");
    }
}

#[test]
fn test_noisy_sx_matches_closed_form() {
    let gates = qscout_gate_set(NoiseConfig::default()).unwrap();
    let s = gates.superoperator("Sx", &[q(0)]).unwrap();

    // axis 0 + 1e-2, rotation pi/2 + 1e-2, one unit of depolarization.
    let ideal = pauli_transfer(&qscout_gates::unitary::u_r(1e-2, FRAC_PI_2 + 1e-2)).unwrap();
    let channel = Array2::from_diag(&ndarray::arr1(&[1.0, 0.999, 0.999, 0.999]));
    assert_close(&s, &ideal.dot(&channel), TOL);
}

#[test]
fn test_noiseless_px_is_exact() {
    let gates = qscout_gate_set(NoiseConfig::noiseless()).unwrap();
    let s = gates.superoperator("Px", &[q(0)]).unwrap();
    assert_close(&s, &pauli_transfer(&u_rx(PI)).unwrap(), TOL);
}

#[test]
fn test_z_gate_ignores_noise_rates() {
    let noisy = qscout_gate_set(NoiseConfig::default().with_depolarization(0.5)).unwrap();
    let clean = qscout_gate_set(NoiseConfig::noiseless()).unwrap();
    let opts = CallOptions::new().with_stretch(4.0);
    let args = [q(0), 0.9.into()];
    assert_eq!(
        noisy.superoperator_with("Rz", &args, &opts).unwrap(),
        clean.superoperator("Rz", &args).unwrap()
    );
}

#[test]
fn test_two_qubit_convention_changes_weight_two_terms() {
    let args = [q(0), q(1)];
    let product = qscout_gate_set(NoiseConfig::noiseless().with_depolarization(0.01)).unwrap();
    let uniform = qscout_gate_set(
        NoiseConfig::noiseless()
            .with_depolarization(0.01)
            .with_two_qubit_depolarization(DepolarizingConvention::Uniform),
    )
    .unwrap();

    // Szz is diagonal-preserving on II, IZ, ZI, ZZ.
    let p = product.superoperator("Szz", &args).unwrap();
    let u = uniform.superoperator("Szz", &args).unwrap();
    let d = 0.99f64.powf(10.0);

    let iz = 3;
    let zz = 15;
    assert!((p[[iz, iz]] - d).abs() < TOL);
    assert!((u[[iz, iz]] - d).abs() < TOL);
    assert!((p[[zz, zz]] - d * d).abs() < TOL);
    assert!((u[[zz, zz]] - d).abs() < TOL);
}

#[test]
fn test_custom_registry() {
    let gates = NoisyGateSet::new(native_gates().unwrap(), NoiseModel::default());
    assert!(gates.duration("Sx", &[q(0)]).is_ok());
    assert!(matches!(
        gates.duration("XX", &[q(0), q(1), 0.1.into()]),
        Err(NoiseError::Gate(GateError::UnknownGate(_)))
    ));
    assert!(matches!(
        gates.duration("Sx_stretched", &[q(0), 1.0.into()]),
        Err(NoiseError::Gate(GateError::UnknownGate(_)))
    ));
}

#[test]
fn test_invalid_model_rejected() {
    let config = NoiseConfig::default().with_depolarization(1.2);
    assert!(matches!(
        qscout_gate_set(config),
        Err(NoiseError::InvalidConfig(_))
    ));
}

#[test]
fn test_config_file_feeds_model() {
    let path = std::env::temp_dir().join(format!("qscout-noise-{}.yaml", std::process::id()));
    std::fs::write(
        &path,
        "depolarization: 0.0\nrotation_error: 0.0\nphase_error: 0.0\n",
    )
    .unwrap();

    let config = NoiseConfig::from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let gates = qscout_gate_set(config).unwrap();
    let s = gates.superoperator("Sx", &[q(0)]).unwrap();
    let ideal = pauli_transfer(&qscout_gates::unitary::u_r(0.0, FRAC_PI_2)).unwrap();
    assert_close(&s, &ideal, TOL);
}
