//! # QPEX Backend
//!
//! Quantum backend abstraction and execution for QPEX.
//!
//! ## Gantree Architecture
//!
//! ```text
//! L2_Backend
//! ├── BackendTrait        // 백엔드 추상화
//! └── StatevectorBackend  // 상태벡터 시뮬레이터
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use qpex_backend::prelude::*;
//! use qpex_core::CircuitBuilder;
//!
//! // Create statevector simulator
//! let backend = StatevectorBackend::new(5).with_seed(42);
//!
//! // Create circuit
//! let circuit = CircuitBuilder::new(3)
//!     .h(0)
//!     .cnot(0, 1)
//!     .cnot(1, 2)
//!     .measure_all()
//!     .build();
//!
//! // Execute
//! let result = backend.execute(&circuit, 1000).unwrap();
//! println!("P(|111>) = {:.4}", result.probability("111"));
//! ```
//!
//! ## Single-Shot Readout
//!
//! ```rust
//! use qpex_backend::prelude::*;
//! use qpex_core::CircuitBuilder;
//!
//! let backend = StatevectorBackend::new(4).with_seed(42);
//!
//! // X/CCX circuits are classical: one shot decides the outcome
//! let circuit = CircuitBuilder::new(2).x(0).measure_all().build();
//!
//! let bits = backend.execute_single(&circuit).unwrap();
//! assert_eq!(bits.to_string(), "01");
//! ```

#![warn(missing_docs)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Execution types and backend trait (Gantree: L2_Backend)
pub mod execution;

/// Statevector simulator backend (Gantree: L2_Backend → StatevectorBackend)
pub mod simulator;

// ============================================================================
// Re-exports
// ============================================================================

pub use execution::{Backend, ExecutionMetadata, ExecutionResult};
pub use simulator::StatevectorBackend;

// ============================================================================
// Prelude
// ============================================================================

// Convenient imports below
pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! ```rust
    //! use qpex_backend::prelude::*;
    //! ```

    pub use crate::execution::{Backend, ExecutionMetadata, ExecutionResult};
    pub use crate::simulator::StatevectorBackend;
}

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use qpex_core::CircuitBuilder;

    #[test]
    fn test_bell_state() {
        let backend = StatevectorBackend::new(2).with_seed(42);

        let circuit = CircuitBuilder::new(2).h(0).cnot(0, 1).build();

        let result = backend.execute(&circuit, 10000).unwrap();

        // Bell state: (|00> + |11>) / sqrt(2)
        let p00 = result.probability("00");
        let p11 = result.probability("11");

        assert!((p00 - 0.5).abs() < 0.05);
        assert!((p11 - 0.5).abs() < 0.05);
    }

    #[test]
    fn test_ghz_state() {
        let backend = StatevectorBackend::new(4).with_seed(42);

        let circuit = CircuitBuilder::new(4)
            .h(0)
            .cnot(0, 1)
            .cnot(1, 2)
            .cnot(2, 3)
            .measure_all()
            .build();

        let result = backend.execute(&circuit, 1000).unwrap();

        // GHZ: (|0000> + |1111>) / sqrt(2), nothing else
        let p_ghz = result.probability("0000") + result.probability("1111");
        assert!(p_ghz > 0.999, "GHZ should split all mass, got {}", p_ghz);
    }

    #[test]
    fn test_classical_circuit_deterministic() {
        // X/CCX circuits stay in the computational basis, so results
        // are identical under different seeds
        let circuit = CircuitBuilder::new(3)
            .x(0)
            .x(1)
            .ccx(0, 1, 2)
            .measure_all()
            .build();

        let result_a = StatevectorBackend::new(3)
            .with_seed(1)
            .execute(&circuit, 20)
            .unwrap();
        let result_b = StatevectorBackend::new(3)
            .with_seed(999)
            .execute(&circuit, 20)
            .unwrap();

        assert_eq!(result_a.counts.get("111"), Some(&20));
        assert_eq!(result_a.counts, result_b.counts);
    }

    #[test]
    fn test_batch_execution() {
        let backend = StatevectorBackend::new(3).with_seed(42);

        let circuits: Vec<_> = (0..5)
            .map(|i| {
                let mut builder = CircuitBuilder::new(3).h(0);
                if i % 2 == 0 {
                    builder = builder.x(1);
                }
                builder.measure_all().build()
            })
            .collect();

        let results = backend.execute_batch(&circuits, 100).unwrap();

        assert_eq!(results.len(), 5);
        for result in &results {
            assert_eq!(result.shots, 100);
        }
    }

    #[test]
    fn test_most_frequent() {
        let backend = StatevectorBackend::new(2).with_seed(42);

        let circuit = CircuitBuilder::new(2).x(1).measure_all().build();

        let result = backend.execute(&circuit, 100).unwrap();
        let (key, count) = result.most_frequent().unwrap();
        assert_eq!(key, "10");
        assert_eq!(count, 100);
    }
}
