//! # QPEX Census
//!
//! Exhaustive census of X/CCX programs by measured outcome.
//!
//! ## Gantree Architecture
//!
//! ```text
//! qpex_census // L4: Program Census (완료)
//!     GateAlphabet // 게이트 알파벳 (완료)
//!         X instances, CCX cyclic rotations
//!         encode() - 설명 문자열
//!     Program // 프로그램 (완료)
//!         parse() - 설명 해석
//!         to_circuit() - 회로 변환
//!     ProgramEnumerator // 열거기 (완료)
//!         enumerate() - 전수 열거
//!         count() - 프로그램 수
//!     CensusConfig // 설정 (완료)
//!         num_qubits, max_gate_count, seed
//!     Census // 조사 엔진 (완료)
//!         classify() - 결과 분류
//!         run() - 전체 조사
//!         CensusResult - 결과
//!     CensusReporter // 결과 리포팅 (완료)
//!         Markdown/JSON/CSV/Text
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use qpex_census::prelude::*;
//! use qpex_backend::StatevectorBackend;
//!
//! // Create configuration
//! let config = CensusConfig::default_4q()
//!     .with_max_gate_count(1)
//!     .with_seed(42);
//!
//! // Create backend
//! let backend = StatevectorBackend::new(4).with_seed(42);
//!
//! // Run the census
//! let mut census = Census::new(config, backend);
//! let result = census.run().unwrap();
//!
//! assert_eq!(result.num_classes(), 5);
//! println!("{}", CensusReporter::to_text(&result));
//! ```
//!
//! ## Census Semantics
//!
//! - **Alphabet**: X on each qubit plus three cyclic CCX rotations per
//!   qubit triple
//! - **Enumeration**: every operation sequence up to the gate budget, in a
//!   fixed reproducible order
//! - **Classification**: one shot per program; X/CCX circuits on |0...0>
//!   measure deterministically
//! - **Accumulation**: classes grow monotonically across budgets, and the
//!   witness is the shortest earliest-enumerated member

#![warn(missing_docs)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Gate alphabet (Gantree: L4_Census → GateAlphabet)
pub mod alphabet;

/// Program descriptions (Gantree: L4_Census → Program)
pub mod program;

/// Exhaustive enumeration (Gantree: L4_Census → ProgramEnumerator)
pub mod enumerate;

/// Census configuration (Gantree: L4_Census → CensusConfig)
pub mod config;

/// Classification engine (Gantree: L4_Census → Census)
pub mod classify;

/// Census reporting (Gantree: L4_Census → CensusReporter)
pub mod report;

// ============================================================================
// Re-exports
// ============================================================================

pub use alphabet::{GateAlphabet, ProgramOp};
pub use classify::{Census, CensusResult, ClassSummary, EquivalenceClass, PassRecord};
pub use config::CensusConfig;
pub use enumerate::{mixed_radix_digits, ProgramEnumerator};
pub use program::Program;
pub use report::{CensusReporter, ReportFormat};

// ============================================================================
// Prelude
// ============================================================================

/// Convenient imports for common use cases
pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! ```rust
    //! use qpex_census::prelude::*;
    //! ```

    pub use crate::alphabet::{GateAlphabet, ProgramOp};
    pub use crate::classify::{Census, CensusResult, ClassSummary, EquivalenceClass, PassRecord};
    pub use crate::config::CensusConfig;
    pub use crate::enumerate::ProgramEnumerator;
    pub use crate::program::Program;
    pub use crate::report::{CensusReporter, ReportFormat};
}

// ============================================================================
// Integration Tests
// ============================================================================
