//! Circuit builder for QPEX
//!
//! Gantree: L1_Circuit → CircuitBuilder
//!
//! Provides a fluent builder pattern for constructing quantum circuits
//! with convenient methods for common operations.

use crate::circuit::Circuit;
use crate::error::QpexResult;
use crate::gate::Gate;
use crate::types::QubitId;

/// Fluent circuit builder (consuming self pattern)
/// Gantree: CircuitBuilder // 빌더 패턴
pub struct CircuitBuilder {
    /// Internal circuit being built
    /// Gantree: circuit: Circuit // 내부 회로
    circuit: Circuit,
}

impl CircuitBuilder {
    // ========================================================================
    // Constructor
    // ========================================================================

    /// Create a new circuit builder
    /// Gantree: new(n) -> Self // 생성자
    pub fn new(num_qubits: usize) -> Self {
        Self {
            circuit: Circuit::new(num_qubits),
        }
    }

    /// Create with circuit name
    pub fn with_name(num_qubits: usize, name: impl Into<String>) -> Self {
        Self {
            circuit: Circuit::with_name(num_qubits, name),
        }
    }

    // ========================================================================
    // Single-Qubit Gates
    // ========================================================================

    /// Add Hadamard gate
    /// Gantree: h(self, q) -> Self // H 추가
    pub fn h(mut self, qubit: QubitId) -> Self {
        let _ = self.circuit.add_gate(Gate::H(qubit));
        self
    }

    /// Add Pauli-X gate
    /// Gantree: x(self, q) -> Self // X 추가
    pub fn x(mut self, qubit: QubitId) -> Self {
        let _ = self.circuit.add_gate(Gate::X(qubit));
        self
    }

    // ========================================================================
    // Two-Qubit Gates
    // ========================================================================

    /// Add CNOT gate
    /// Gantree: cnot(self, c, t) -> Self // CNOT 추가
    pub fn cnot(mut self, control: QubitId, target: QubitId) -> Self {
        let _ = self.circuit.add_gate(Gate::Cnot(control, target));
        self
    }

    /// Alias for cnot
    pub fn cx(self, control: QubitId, target: QubitId) -> Self {
        self.cnot(control, target)
    }

    // ========================================================================
    // Three-Qubit Gates
    // ========================================================================

    /// Add Toffoli (CCX) gate
    pub fn ccx(mut self, c1: QubitId, c2: QubitId, target: QubitId) -> Self {
        let _ = self.circuit.add_gate(Gate::Ccx(c1, c2, target));
        self
    }

    // ========================================================================
    // Measurement and Control
    // ========================================================================

    /// Add measurement on single qubit
    /// Gantree: measure(self, q) -> Self // 측정 추가
    pub fn measure(mut self, qubit: QubitId) -> Self {
        let _ = self.circuit.add_gate(Gate::Measure(qubit));
        self
    }

    /// Add measurement on all qubits
    /// Gantree: measure_all(self) -> Self // 전체 측정
    pub fn measure_all(mut self) -> Self {
        let _ = self.circuit.add_gate(Gate::MeasureAll);
        self
    }

    /// Add barrier
    /// Gantree: barrier(self) -> Self // 배리어
    pub fn barrier(mut self) -> Self {
        let qubits: Vec<QubitId> = (0..self.circuit.num_qubits()).collect();
        let _ = self.circuit.add_gate(Gate::Barrier(qubits));
        self
    }

    /// Add barrier on specific qubits
    pub fn barrier_on(mut self, qubits: Vec<QubitId>) -> Self {
        let _ = self.circuit.add_gate(Gate::Barrier(qubits));
        self
    }

    // ========================================================================
    // Layer and Sequence Operations
    // ========================================================================

    /// Add Hadamard layer on all qubits
    pub fn h_layer(mut self) -> Self {
        for i in 0..self.circuit.num_qubits() {
            let _ = self.circuit.add_gate(Gate::H(i));
        }
        self
    }

    /// Add X layer on all qubits
    pub fn x_layer(mut self) -> Self {
        for i in 0..self.circuit.num_qubits() {
            let _ = self.circuit.add_gate(Gate::X(i));
        }
        self
    }

    /// Append a pre-built gate sequence (e.g. a synthesized decomposition)
    /// Gantree: gates(self, seq) -> Self // 시퀀스 추가
    pub fn gates(mut self, gates: impl IntoIterator<Item = Gate>) -> Self {
        let _ = self.circuit.add_gates(gates);
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build and return the circuit
    /// Gantree: build(self) -> Circuit // 빌드
    pub fn build(self) -> Circuit {
        self.circuit
    }

    /// Build with validation
    pub fn build_validated(self) -> QpexResult<Circuit> {
        if self.circuit.is_empty() {
            return Err(crate::error::QpexError::EmptyCircuit);
        }
        Ok(self.circuit)
    }

    /// Get reference to current circuit state
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// Get number of qubits
    pub fn num_qubits(&self) -> usize {
        self.circuit.num_qubits()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_basic() {
        let circuit = CircuitBuilder::new(3)
            .h(0)
            .cnot(0, 1)
            .ccx(0, 1, 2)
            .measure_all()
            .build();

        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.gate_count(), 4);
    }

    #[test]
    fn test_builder_layers() {
        let circuit = CircuitBuilder::new(4).h_layer().x_layer().build();

        assert_eq!(circuit.gate_count(), 8);
        assert_eq!(circuit.count_1q(), 8);
    }

    #[test]
    fn test_builder_gates_sequence() {
        let seq = vec![Gate::Cnot(0, 2), Gate::Ccx(0, 1, 2)];
        let circuit = CircuitBuilder::new(3).h(0).gates(seq).build();

        assert_eq!(circuit.gate_count(), 3);
        assert_eq!(circuit.count_3q(), 1);
    }

    #[test]
    fn test_builder_barrier() {
        let circuit = CircuitBuilder::new(3).h(0).barrier().build();

        assert!(circuit.gates()[1].is_barrier());
        assert_eq!(circuit.gates()[1].qubits(), vec![0, 1, 2]);
    }

    #[test]
    fn test_builder_barrier_on() {
        let circuit = CircuitBuilder::new(4).barrier_on(vec![1, 2]).build();
        assert_eq!(circuit.gates()[0].qubits(), vec![1, 2]);
    }

    #[test]
    fn test_build_validated_empty() {
        assert!(CircuitBuilder::new(2).build_validated().is_err());
        assert!(CircuitBuilder::new(2).h(0).build_validated().is_ok());
    }

    #[test]
    fn test_builder_measure_prefix() {
        // Measure only the work register, leaving qubit 3 as ancilla
        let mut builder = CircuitBuilder::new(4).h_layer();
        for q in 0..3 {
            builder = builder.measure(q);
        }
        let circuit = builder.build();

        assert_eq!(circuit.measured_qubits(), vec![0, 1, 2]);
        assert_eq!(circuit.count_measurements(), 3);
    }
}
