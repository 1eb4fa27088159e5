//! Ideal unitaries of the QSCOUT native gates.
//!
//! All generators take angles in radians. Two-qubit matrices use the basis
//! order `|00⟩, |01⟩, |10⟩, |11⟩` with the first operand most significant.

use ndarray::{Array2, array};
use num_complex::Complex64;
use std::f64::consts::FRAC_PI_2;

/// Tolerance used by the matrix predicates in this module.
pub const EPSILON: f64 = 1e-10;

/// A dense unitary matrix, `2^n x 2^n`.
pub type Unitary = Array2<Complex64>;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);

#[inline]
fn re(x: f64) -> Complex64 {
    Complex64::new(x, 0.0)
}

/// Rotation by `rotation_angle` about the axis in the X-Y plane that sits at
/// `axis_angle` from X.
pub fn u_r(axis_angle: f64, rotation_angle: f64) -> Unitary {
    let c = (rotation_angle / 2.0).cos();
    let s = (rotation_angle / 2.0).sin();
    let (sin_a, cos_a) = axis_angle.sin_cos();
    array![
        [re(c), Complex64::new(-sin_a, -cos_a) * s],
        [Complex64::new(sin_a, -cos_a) * s, re(c)],
    ]
}

/// Rotation about X. Identical to `u_r(0, rotation_angle)`.
pub fn u_rx(rotation_angle: f64) -> Unitary {
    u_r(0.0, rotation_angle)
}

/// Rotation about Y. Identical to `u_r(pi/2, rotation_angle)`.
pub fn u_ry(rotation_angle: f64) -> Unitary {
    u_r(FRAC_PI_2, rotation_angle)
}

/// Rotation about Z, `diag(1, e^{i r})`.
pub fn u_rz(rotation_angle: f64) -> Unitary {
    array![
        [re(1.0), ZERO],
        [ZERO, Complex64::from_polar(1.0, rotation_angle)],
    ]
}

/// Mølmer-Sørensen gate.
///
/// Equivalent to `exp(-i r/2 (cos a XI + sin a YI)(cos a IX + sin a IY))`
/// with `a = axis_angle` and `r = rotation_angle`.
pub fn u_ms(axis_angle: f64, rotation_angle: f64) -> Unitary {
    let c = re((rotation_angle / 2.0).cos());
    let s = (rotation_angle / 2.0).sin();
    let (sin_2a, cos_2a) = (2.0 * axis_angle).sin_cos();
    let minus_i_s = Complex64::new(0.0, -s);
    array![
        [c, ZERO, ZERO, Complex64::new(-sin_2a, -cos_2a) * s],
        [ZERO, c, minus_i_s, ZERO],
        [ZERO, minus_i_s, c, ZERO],
        [Complex64::new(sin_2a, -cos_2a) * s, ZERO, ZERO, c],
    ]
}

/// `exp(-i r/2 XX)`.
pub fn u_xx(rotation_angle: f64) -> Unitary {
    let c = re((rotation_angle / 2.0).cos());
    let is = Complex64::new(0.0, (rotation_angle / 2.0).sin());
    array![
        [c, ZERO, ZERO, -is],
        [ZERO, c, -is, ZERO],
        [ZERO, -is, c, ZERO],
        [-is, ZERO, ZERO, c],
    ]
}

/// `exp(-i r/2 YY)`.
pub fn u_yy(rotation_angle: f64) -> Unitary {
    let c = re((rotation_angle / 2.0).cos());
    let is = Complex64::new(0.0, (rotation_angle / 2.0).sin());
    array![
        [c, ZERO, ZERO, is],
        [ZERO, c, -is, ZERO],
        [ZERO, -is, c, ZERO],
        [is, ZERO, ZERO, c],
    ]
}

/// `exp(-i r/2 ZZ)`.
pub fn u_zz(rotation_angle: f64) -> Unitary {
    let c = re((rotation_angle / 2.0).cos());
    let is = Complex64::new(0.0, (rotation_angle / 2.0).sin());
    array![
        [c - is, ZERO, ZERO, ZERO],
        [ZERO, c + is, ZERO, ZERO],
        [ZERO, ZERO, c + is, ZERO],
        [ZERO, ZERO, ZERO, c - is],
    ]
}

/// Identity on `num_qubits` qubits.
pub fn identity(num_qubits: usize) -> Unitary {
    Array2::eye(1 << num_qubits)
}

/// Conjugate transpose.
pub fn dagger(u: &Unitary) -> Unitary {
    u.t().mapv(|z| z.conj())
}

/// Element-wise comparison within `tol`.
pub fn approx_eq(a: &Unitary, b: &Unitary, tol: f64) -> bool {
    a.dim() == b.dim() && a.iter().zip(b.iter()).all(|(x, y)| (x - y).norm() <= tol)
}

/// Check `U U† = I` within `tol`.
pub fn is_unitary(u: &Unitary, tol: f64) -> bool {
    let (rows, cols) = u.dim();
    if rows != cols {
        return false;
    }
    let product = u.dot(&dagger(u));
    approx_eq(&product, &Array2::eye(rows), tol)
}

/// Check that `u` is the identity up to a global phase.
pub fn is_identity_up_to_phase(u: &Unitary, tol: f64) -> bool {
    let (rows, cols) = u.dim();
    if rows != cols || rows == 0 {
        return false;
    }
    let phase = u[[0, 0]];
    if (phase.norm() - 1.0).abs() > tol {
        return false;
    }
    approx_eq(u, &Array2::eye(rows).mapv(|z: Complex64| z * phase), tol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_rx_pi() {
        let expected = array![
            [ZERO, Complex64::new(0.0, -1.0)],
            [Complex64::new(0.0, -1.0), ZERO],
        ];
        assert!(approx_eq(&u_rx(PI), &expected, EPSILON));
    }

    #[test]
    fn test_derived_rotations_are_exact() {
        for r in [-2.0, -0.3, 0.0, 0.7, PI, 5.1] {
            assert_eq!(u_rx(r), u_r(0.0, r));
            assert_eq!(u_ry(r), u_r(FRAC_PI_2, r));
        }
    }

    #[test]
    fn test_ry_is_real_rotation() {
        let u = u_ry(PI / 3.0);
        let c = (PI / 6.0).cos();
        let s = (PI / 6.0).sin();
        let expected = array![[re(c), re(-s)], [re(s), re(c)]];
        assert!(approx_eq(&u, &expected, EPSILON));
    }

    #[test]
    fn test_rz_phase() {
        let u = u_rz(PI / 2.0);
        assert!((u[[1, 1]] - Complex64::new(0.0, 1.0)).norm() < EPSILON);
        assert_eq!(u[[0, 0]], re(1.0));
    }

    #[test]
    fn test_zero_angle_is_identity() {
        for a in [0.0, 0.4, PI / 2.0, -1.3] {
            assert!(is_identity_up_to_phase(&u_r(a, 0.0), EPSILON));
            assert!(is_identity_up_to_phase(&u_ms(a, 0.0), EPSILON));
        }
        assert!(is_identity_up_to_phase(&u_rz(0.0), EPSILON));
        assert!(is_identity_up_to_phase(&u_xx(0.0), EPSILON));
        assert!(is_identity_up_to_phase(&u_yy(0.0), EPSILON));
        assert!(is_identity_up_to_phase(&u_zz(0.0), EPSILON));
    }

    #[test]
    fn test_ms_at_zero_axis_is_xx() {
        for r in [0.3, PI / 2.0, -1.0] {
            assert!(approx_eq(&u_ms(0.0, r), &u_xx(r), EPSILON));
        }
    }

    #[test]
    fn test_ms_at_quarter_axis_is_yy() {
        // a = pi/2 puts both axes on Y.
        for r in [0.3, PI / 2.0, -1.0] {
            assert!(approx_eq(&u_ms(PI / 2.0, r), &u_yy(r), EPSILON));
        }
    }

    #[test]
    fn test_two_qubit_unitarity() {
        for r in [0.1, 1.0, PI, 4.0] {
            assert!(is_unitary(&u_ms(0.37, r), EPSILON));
            assert!(is_unitary(&u_xx(r), EPSILON));
            assert!(is_unitary(&u_yy(r), EPSILON));
            assert!(is_unitary(&u_zz(r), EPSILON));
        }
    }

    #[test]
    fn test_dagger_inverts() {
        let u = u_r(0.4, 1.1);
        let product = dagger(&u).dot(&u);
        assert!(approx_eq(&product, &identity(1), EPSILON));
    }

    #[test]
    fn test_non_square_is_not_unitary() {
        let m: Unitary = Array2::zeros((2, 4));
        assert!(!is_unitary(&m, EPSILON));
    }
}
