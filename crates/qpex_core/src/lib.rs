//! # QPEX Core
//!
//! Core types, gates, and circuits for the Quantum Program Explorer.
//!
//! ## Gantree Architecture
//!
//! ```text
//! qpex_core // L0+L1: Foundation + Circuit (완료)
//!     L0_Foundation // 기반 타입/에러 (완료)
//!         CoreTypes // 핵심 타입 (완료)
//!         Errors // 에러 타입 (완료)
//!     L1_Circuit // 회로 구조 (완료)
//!         Gate // 게이트 enum (완료)
//!         Circuit // 회로 구조체 (완료)
//!         CircuitBuilder // 빌더 패턴 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use qpex_core::prelude::*;
//!
//! // Build a simple circuit
//! let circuit = CircuitBuilder::new(3)
//!     .h(0)
//!     .cnot(0, 1)
//!     .ccx(0, 1, 2)
//!     .measure_all()
//!     .build();
//!
//! println!("{}", circuit);
//! println!("{}", circuit.to_qasm());
//! ```
//!
//! ## Ancilla Register
//!
//! ```rust
//! use qpex_core::prelude::*;
//!
//! // 3 work qubits plus one ancilla; only the work register is measured
//! let mut builder = CircuitBuilder::new(4).h_layer();
//! for q in 0..3 {
//!     builder = builder.measure(q);
//! }
//! let circuit = builder.build();
//!
//! assert_eq!(circuit.num_qubits(), 4);
//! assert_eq!(circuit.measured_qubits(), vec![0, 1, 2]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Core types (Gantree: L0_Foundation → CoreTypes)
pub mod types;

/// Error types (Gantree: L0_Foundation → Errors)
pub mod error;

/// Quantum gates (Gantree: L1_Circuit → Gate)
pub mod gate;

/// Circuit structure (Gantree: L1_Circuit → Circuit)
pub mod circuit;

/// Circuit builder (Gantree: L1_Circuit → CircuitBuilder)
pub mod builder;

// ============================================================================
// Re-exports
// ============================================================================

pub use builder::CircuitBuilder;
pub use circuit::Circuit;
pub use error::{QpexError, QpexResult};
pub use gate::Gate;
pub use types::{Bitstring, Counts, QubitId};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases
    //!
    //! ```rust
    //! use qpex_core::prelude::*;
    //! ```

    pub use crate::builder::CircuitBuilder;
    pub use crate::circuit::Circuit;
    pub use crate::error::{QpexError, QpexResult};
    pub use crate::gate::Gate;
    pub use crate::types::{Bitstring, Counts, QubitId};
}

// ============================================================================
// Version Information
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

// ============================================================================
// Integration Tests
// ============================================================================
