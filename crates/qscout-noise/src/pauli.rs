//! Pauli-transfer representation of unitaries.
//!
//! A channel on `n` qubits is represented by the real `4^n x 4^n` matrix
//! `R[i][j] = Tr(P_i E(P_j)) / 2^n`, where `P_k` runs over the Pauli strings
//! with `I, X, Y, Z` per qubit and the first qubit most significant
//! (`P_{4a+b} = σ_a ⊗ σ_b`). Index 0 is the trace component; the rest are
//! coherence components.

use ndarray::linalg::kron;
use ndarray::{Array2, array};
use num_complex::Complex64;
use qscout_gates::Unitary;
use qscout_gates::unitary::dagger;

use crate::error::{NoiseError, NoiseResult};

/// A real superoperator in the Pauli basis.
pub type Superoperator = Array2<f64>;

/// Largest register the dense conversion accepts.
pub const MAX_QUBITS: usize = 4;

fn single_qubit_paulis() -> [Unitary; 4] {
    let o = Complex64::new(0.0, 0.0);
    let l = Complex64::new(1.0, 0.0);
    let i = Complex64::new(0.0, 1.0);
    [
        array![[l, o], [o, l]],
        array![[o, l], [l, o]],
        array![[o, -i], [i, o]],
        array![[l, o], [o, -l]],
    ]
}

/// The `4^n` Pauli strings on `num_qubits` qubits in transfer-matrix order.
pub fn pauli_basis(num_qubits: usize) -> Vec<Unitary> {
    let singles = single_qubit_paulis();
    let mut basis = vec![Array2::eye(1)];
    for _ in 0..num_qubits {
        basis = basis
            .iter()
            .flat_map(|p| singles.iter().map(move |s| kron(p, s)))
            .collect();
    }
    basis
}

/// Number of qubits a square `2^n x 2^n` matrix acts on.
fn qubits_of(dim: (usize, usize)) -> NoiseResult<usize> {
    let (rows, cols) = dim;
    if rows != cols || !rows.is_power_of_two() || rows < 2 {
        return Err(NoiseError::InvalidMatrix(format!(
            "expected a 2^n x 2^n matrix, got {rows}x{cols}"
        )));
    }
    let n = rows.trailing_zeros() as usize;
    if n > MAX_QUBITS {
        return Err(NoiseError::InvalidMatrix(format!(
            "{n}-qubit matrix exceeds the {MAX_QUBITS}-qubit limit"
        )));
    }
    Ok(n)
}

/// Convert a unitary to its Pauli-transfer matrix.
pub fn pauli_transfer(u: &Unitary) -> NoiseResult<Superoperator> {
    let n = qubits_of(u.dim())?;
    let d = (1usize << n) as f64;
    let basis = pauli_basis(n);
    let u_dag = dagger(u);

    let size = basis.len();
    let mut out = Superoperator::zeros((size, size));
    for (j, pj) in basis.iter().enumerate() {
        let image = u.dot(pj).dot(&u_dag);
        for (i, pi) in basis.iter().enumerate() {
            // Tr(P_i M) without forming the product.
            let trace: Complex64 = pi.iter().zip(image.t().iter()).map(|(a, b)| a * b).sum();
            out[[i, j]] = trace.re / d;
        }
    }
    Ok(out)
}
