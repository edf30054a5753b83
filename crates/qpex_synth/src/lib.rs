//! # QPEX Synth
//!
//! Circuit synthesis for QPEX: borrowed-qubit MCX decomposition and
//! Grover search construction.
//!
//! ## Gantree Architecture
//!
//! ```text
//! qpex_synth // L3: Synthesis (완료)
//!     Mcx // 다중 제어 X 분해 (완료)
//!         decompose() - CX/CCX 재귀 분해
//!     Grover // 그로버 탐색 (완료)
//!         num_iterations() - 반복 횟수
//!         oracle_gates() - 위상 반전
//!         diffusion_gates() - 평균 반전
//!         build_circuit() - 전체 회로
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use qpex_synth::prelude::*;
//! use qpex_backend::prelude::*;
//!
//! // Build a 3-qubit search for |111> (4 qubits: 3 search + 1 borrow)
//! let circuit = Grover::build_circuit(3).unwrap();
//! assert_eq!(circuit.num_qubits(), 4);
//!
//! // Run it
//! let backend = StatevectorBackend::new(4).with_seed(42);
//! let result = backend.execute(&circuit, 1000).unwrap();
//!
//! let (key, _) = result.most_frequent().unwrap();
//! assert_eq!(key, "111");
//! ```
//!
//! ## Borrowed-Qubit MCX
//!
//! - **No clean ancilla**: the borrow may hold any value
//! - **Restored**: the borrow reads back unchanged after the gate
//! - **CX/CCX only**: output stays inside the QPEX gate set
//! - **Recursive halving**: each half borrows a control from the other

#![warn(missing_docs)]

// ============================================================================
// Module Declarations
// ============================================================================

/// MCX decomposition (Gantree: L3_Synthesis → Mcx)
pub mod mcx;

/// Grover circuit synthesis (Gantree: L3_Synthesis → Grover)
pub mod grover;

// ============================================================================
// Re-exports
// ============================================================================

pub use grover::Grover;
pub use mcx::Mcx;

// ============================================================================
// Prelude
// ============================================================================

/// Convenient imports for common use cases
pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! ```rust
    //! use qpex_synth::prelude::*;
    //! ```

    pub use crate::grover::Grover;
    pub use crate::mcx::Mcx;
}

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use qpex_backend::prelude::*;
    use qpex_core::CircuitBuilder;

    #[test]
    fn test_full_search_workflow() {
        // 1. Build
        let circuit = Grover::build_circuit(3).unwrap();
        assert_eq!(circuit.num_qubits(), 4);
        assert_eq!(circuit.measured_qubits(), vec![0, 1, 2]);

        // 2. Execute
        let backend = StatevectorBackend::new(4).with_seed(42);
        let result = backend.execute(&circuit, 1000).unwrap();

        // 3. The marked state dominates
        let (key, count) = result.most_frequent().unwrap();
        assert_eq!(key, "111");
        assert!(count > 900, "weak amplification: {} / 1000", count);
    }

    #[test]
    fn test_five_qubit_search() {
        let circuit = Grover::build_circuit(5).unwrap();
        let backend = StatevectorBackend::new(6).with_seed(42);

        let result = backend.execute(&circuit, 200).unwrap();

        // 4 iterations put ~99.9% of the mass on |11111>
        assert!(result.probability("11111") > 0.95);
    }

    #[test]
    fn test_decomposition_in_circuit() {
        // Synthesized gates drop straight into the builder
        let gates = Mcx::decompose(&[0, 1, 2], 3, &[4]).unwrap();
        let circuit = CircuitBuilder::new(5).gates(gates).build();

        assert_eq!(circuit.count_3q(), 4);
        assert_eq!(circuit.count_2q(), 0);
        assert_eq!(circuit.used_qubits().len(), 5);
    }

    #[test]
    fn test_nine_qubit_circuit_shape() {
        let circuit = Grover::build_circuit(9).unwrap();

        assert_eq!(circuit.num_qubits(), 10);
        assert_eq!(Grover::num_iterations(9), 17);
        assert_eq!(circuit.count_measurements(), 9);

        // prep(9 H + barrier) + 17 * (oracle 54 + barrier + diffusion 90
        // + barrier) + 9 measures
        assert_eq!(circuit.gate_count(), 2501);
    }

    #[test]
    fn test_qasm_export() {
        let circuit = Grover::build_circuit(3).unwrap();
        let qasm = circuit.to_qasm();

        assert!(qasm.contains("qreg q[4];"));
        assert!(qasm.contains("creg c[3];"));
        assert!(qasm.contains("ccx q[0],q[1],q[2];"));
        assert!(qasm.contains("measure q[2] -> c[2];"));
    }
}
