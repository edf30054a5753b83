//! Error types for QPEX
//!
//! Gantree: L0_Foundation → Errors
//!
//! Comprehensive error handling for the QPEX system.

// Error variant fields are self-documenting via error messages
#![allow(missing_docs)]

use thiserror::Error;

/// Main error type for QPEX
/// Gantree: QpexError // enum
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QpexError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// Bad decomposition or builder arguments
    /// Gantree: InvalidGateSpec(String) // 게이트 사양
    #[error("Invalid gate specification: {0}")]
    InvalidGateSpec(String),

    /// Qubit index out of range
    /// Gantree: QubitOutOfRange{{q,max}} // 큐비트 범위
    #[error("Qubit {qubit} out of range: max is {max}")]
    QubitOutOfRange { qubit: usize, max: usize },

    /// Invalid bitstring format
    #[error("Invalid bitstring '{0}': must contain only '0' and '1'")]
    InvalidBitstring(String),

    /// Shots out of range
    #[error("Shots {0} out of range [{1}, {2}]")]
    ShotsOutOfRange(u64, u64, u64),

    // ========================================================================
    // Circuit Errors
    // ========================================================================
    /// Empty circuit
    /// Gantree: EmptyCircuit // 빈 회로
    #[error("Circuit is empty")]
    EmptyCircuit,

    /// Gate on non-existent qubit
    #[error("Gate references qubit {qubit} but circuit has only {num_qubits} qubits")]
    GateQubitMismatch { qubit: usize, num_qubits: usize },

    /// Invalid QASM format
    #[error("Invalid QASM: {0}")]
    InvalidQasm(String),

    // ========================================================================
    // Program Errors
    // ========================================================================
    /// Undecodable program description
    /// Gantree: MalformedProgram{{desc,reason}} // 프로그램 파싱
    #[error("Malformed program '{desc}': {reason}")]
    MalformedProgram { desc: String, reason: String },

    // ========================================================================
    // Backend Errors
    // ========================================================================
    /// Backend could not execute the circuit
    /// Gantree: BackendFailure(String) // 백엔드
    #[error("Backend execution failed: {0}")]
    BackendFailure(String),

    // ========================================================================
    // I/O Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(String),
}

/// Result type alias for QPEX operations
/// Gantree: QpexResult<T> // type alias
pub type QpexResult<T> = Result<T, QpexError>;

// ============================================================================
// Error Conversion Helpers
// ============================================================================

impl From<serde_json::Error> for QpexError {
    fn from(err: serde_json::Error) -> Self {
        QpexError::JsonError(err.to_string())
    }
}

// ============================================================================
// Error Helpers
// ============================================================================

impl QpexError {
    /// Check if error is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            QpexError::InvalidGateSpec(_)
                | QpexError::QubitOutOfRange { .. }
                | QpexError::InvalidBitstring(_)
                | QpexError::ShotsOutOfRange(_, _, _)
        )
    }

    /// Check if error is a circuit error
    pub fn is_circuit_error(&self) -> bool {
        matches!(
            self,
            QpexError::EmptyCircuit
                | QpexError::GateQubitMismatch { .. }
                | QpexError::InvalidQasm(_)
        )
    }

    /// Check if error is a program decode error
    pub fn is_program_error(&self) -> bool {
        matches!(self, QpexError::MalformedProgram { .. })
    }

    /// Check if error came from the backend
    pub fn is_backend_error(&self) -> bool {
        matches!(self, QpexError::BackendFailure(_))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QpexError::InvalidGateSpec("empty control list".into());
        assert!(err.to_string().contains("empty control list"));
    }

    #[test]
    fn test_qubit_out_of_range() {
        let err = QpexError::QubitOutOfRange { qubit: 10, max: 7 };
        assert!(err.to_string().contains("10"));
        assert!(err.to_string().contains("7"));
    }

    #[test]
    fn test_malformed_program() {
        let err = QpexError::MalformedProgram {
            desc: "10".into(),
            reason: "truncated ccx operands".into(),
        };
        assert!(err.to_string().contains("'10'"));
        assert!(err.to_string().contains("truncated"));
    }

    #[test]
    fn test_is_validation_error() {
        assert!(QpexError::InvalidGateSpec("x".into()).is_validation_error());
        assert!(!QpexError::BackendFailure("test".into()).is_validation_error());
    }

    #[test]
    fn test_is_program_error() {
        let err = QpexError::MalformedProgram {
            desc: "2".into(),
            reason: "unknown opcode".into(),
        };
        assert!(err.is_program_error());
        assert!(!err.is_circuit_error());
    }

    #[test]
    fn test_is_backend_error() {
        assert!(QpexError::BackendFailure("down".into()).is_backend_error());
        assert!(!QpexError::EmptyCircuit.is_backend_error());
    }
}
