//! Grover search circuit synthesis
//!
//! Gantree: L3_Synthesis → Grover
//!
//! Builds Grover search circuits that amplify the all-ones state of an
//! n-qubit search register. One extra qubit is allocated as the borrow
//! for the MCX decomposition; it is never measured.

use crate::mcx::Mcx;
use qpex_core::{Circuit, CircuitBuilder, Gate, QpexError, QpexResult, QubitId};
use std::f64::consts::PI;

/// Grover search circuit builder
/// Gantree: Grover // 그로버 탐색 회로
pub struct Grover;

impl Grover {
    // ========================================================================
    // Iteration Count
    // ========================================================================

    /// Optimal number of Grover iterations for one marked state
    /// Gantree: num_iterations(n) -> u64 // 반복 횟수
    ///
    /// floor(sqrt(2^n) * pi / 4)
    pub fn num_iterations(num_qubits: usize) -> u64 {
        (2.0_f64.powi(num_qubits as i32).sqrt() * PI / 4.0).floor() as u64
    }

    // ========================================================================
    // Circuit Building
    // ========================================================================

    /// Gates that flip the phase of |11...1> on the search register
    ///
    /// H on the top search qubit sandwiching an MCX controlled by the
    /// rest, borrowing the extra qubit.
    pub fn oracle_gates(num_qubits: usize) -> QpexResult<Vec<Gate>> {
        if num_qubits == 0 {
            return Err(QpexError::InvalidGateSpec(
                "oracle requires a non-empty search register".to_string(),
            ));
        }
        let controls: Vec<QubitId> = (0..num_qubits - 1).collect();
        let top = num_qubits - 1;

        let mut gates = vec![Gate::H(top)];
        gates.extend(Mcx::decompose(&controls, top, &[num_qubits])?);
        gates.push(Gate::H(top));
        Ok(gates)
    }

    /// Gates for the inversion-about-the-mean operator
    ///
    /// H/X conjugation around the same phase flip the oracle uses.
    pub fn diffusion_gates(num_qubits: usize) -> QpexResult<Vec<Gate>> {
        let mut gates = Vec::new();
        for i in 0..num_qubits {
            gates.push(Gate::H(i));
            gates.push(Gate::X(i));
        }
        gates.extend(Self::oracle_gates(num_qubits)?);
        for i in 0..num_qubits {
            gates.push(Gate::X(i));
            gates.push(Gate::H(i));
        }
        Ok(gates)
    }

    /// Build the full search circuit for an n-qubit register
    /// Gantree: build_circuit(n) -> Circuit // 전체 회로 생성
    ///
    /// Allocates n+1 qubits (the last is the MCX borrow), prepares the
    /// uniform superposition, applies the optimal number of
    /// oracle/diffusion rounds, then measures the search register only.
    /// A single-qubit register has no non-trivial oracle, so it gets
    /// preparation and measurement alone.
    pub fn build_circuit(num_qubits: usize) -> QpexResult<Circuit> {
        if num_qubits < 1 {
            return Err(QpexError::InvalidGateSpec(
                "grover search requires at least one search qubit".to_string(),
            ));
        }

        let mut builder =
            CircuitBuilder::with_name(num_qubits + 1, format!("grover_{}q", num_qubits));

        // Uniform superposition over the search register
        for i in 0..num_qubits {
            builder = builder.h(i);
        }
        builder = builder.barrier();

        if num_qubits >= 2 {
            let oracle = Self::oracle_gates(num_qubits)?;
            let diffusion = Self::diffusion_gates(num_qubits)?;

            for _ in 0..Self::num_iterations(num_qubits) {
                builder = builder.gates(oracle.iter().cloned());
                builder = builder.barrier();
                builder = builder.gates(diffusion.iter().cloned());
                builder = builder.barrier();
            }
        }

        for i in 0..num_qubits {
            builder = builder.measure(i);
        }

        Ok(builder.build())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use qpex_backend::prelude::*;

    #[test]
    fn test_num_iterations() {
        assert_eq!(Grover::num_iterations(2), 1);
        assert_eq!(Grover::num_iterations(3), 2);
        assert_eq!(Grover::num_iterations(5), 4);
        assert_eq!(Grover::num_iterations(9), 17);
    }

    #[test]
    fn test_circuit_shape() {
        let circuit = Grover::build_circuit(5).unwrap();

        assert_eq!(circuit.num_qubits(), 6);
        assert_eq!(circuit.name(), Some("grover_5q"));
        assert_eq!(circuit.count_measurements(), 5);
        assert_eq!(circuit.measured_qubits(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_qasm_register_sizes() {
        // The borrow qubit gets no classical bit
        let circuit = Grover::build_circuit(5).unwrap();
        let qasm = circuit.to_qasm();

        assert!(qasm.contains("qreg q[6];"));
        assert!(qasm.contains("creg c[5];"));
    }

    #[test]
    fn test_two_qubit_search_is_exact() {
        // One iteration lands all amplitude on |11>
        let circuit = Grover::build_circuit(2).unwrap();
        let backend = StatevectorBackend::new(3).with_seed(42);

        let result = backend.execute(&circuit, 1000).unwrap();

        assert_eq!(result.counts.get("11"), Some(&1000));
    }

    #[test]
    fn test_three_qubit_search_concentrates() {
        let circuit = Grover::build_circuit(3).unwrap();
        let backend = StatevectorBackend::new(4).with_seed(42);

        let result = backend.execute(&circuit, 1000).unwrap();

        let (key, _) = result.most_frequent().unwrap();
        assert_eq!(key, "111");
        assert!(
            result.probability("111") > 0.9,
            "expected heavy |111> mass, got {}",
            result.probability("111")
        );
    }

    #[test]
    fn test_single_qubit_register() {
        // No oracle to run: preparation and measurement only
        let circuit = Grover::build_circuit(1).unwrap();

        assert_eq!(circuit.num_qubits(), 2);
        assert_eq!(
            circuit.gates(),
            &[Gate::H(0), Gate::Barrier(vec![0, 1]), Gate::Measure(0)]
        );
    }

    #[test]
    fn test_empty_register_rejected() {
        assert!(matches!(
            Grover::build_circuit(0),
            Err(QpexError::InvalidGateSpec(_))
        ));
    }

    #[test]
    fn test_oracle_restores_borrow() {
        // The oracle leaves the borrow qubit untouched on basis states
        let n = 4;
        let gates = Grover::oracle_gates(n).unwrap();
        let circuit = qpex_core::CircuitBuilder::new(n + 1)
            .x(0)
            .x(1)
            .x(2)
            .x(3)
            .gates(gates)
            .build();

        let backend = StatevectorBackend::new(n + 1).with_seed(7);
        let result = backend.execute(&circuit, 100).unwrap();

        // Every outcome keeps the borrow (leftmost bit) at 0
        for key in result.counts.keys() {
            assert!(key.starts_with('0'), "borrow leaked into {}", key);
        }
    }
}
