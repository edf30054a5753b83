//! Quantum circuit structure for QPEX
//!
//! Gantree: L1_Circuit → Circuit
//!
//! Provides the core Circuit struct for building and manipulating
//! the circuits produced by Grover synthesis and program compilation.

use crate::error::{QpexError, QpexResult};
use crate::gate::Gate;
use crate::types::QubitId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Quantum circuit
/// Gantree: Circuit // 회로 구조체
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Number of qubits
    /// Gantree: num_qubits: usize // 큐비트 수
    num_qubits: usize,

    /// Gate sequence
    /// Gantree: gates: Vec<Gate> // 게이트 목록
    gates: Vec<Gate>,

    /// Optional circuit name
    name: Option<String>,
}

impl Circuit {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a new empty circuit
    /// Gantree: new(n) -> Self // 생성자
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            gates: Vec::new(),
            name: None,
        }
    }

    /// Create a circuit with a name
    pub fn with_name(num_qubits: usize, name: impl Into<String>) -> Self {
        Self {
            num_qubits,
            gates: Vec::new(),
            name: Some(name.into()),
        }
    }

    /// Create from a vector of gates
    pub fn from_gates(num_qubits: usize, gates: Vec<Gate>) -> QpexResult<Self> {
        let mut circuit = Self::new(num_qubits);
        circuit.add_gates(gates)?;
        Ok(circuit)
    }

    // ========================================================================
    // Basic Operations
    // ========================================================================

    /// Add a gate to the circuit
    ///
    /// Rejects out-of-range qubit indices and repeated indices within
    /// one multi-qubit gate.
    ///
    /// Gantree: add_gate(&mut, Gate) -> Result // 게이트 추가
    pub fn add_gate(&mut self, gate: Gate) -> QpexResult<()> {
        // Validate gate qubits
        for &qubit in &gate.qubits() {
            if qubit >= self.num_qubits {
                return Err(QpexError::GateQubitMismatch {
                    qubit,
                    num_qubits: self.num_qubits,
                });
            }
        }
        // Controls and target must be pairwise distinct
        match gate {
            Gate::Cnot(c, t) if c == t => {
                return Err(QpexError::InvalidGateSpec(format!(
                    "cx control and target must be distinct (got q[{}])",
                    c
                )));
            }
            Gate::Ccx(c1, c2, t) if c1 == c2 || c1 == t || c2 == t => {
                return Err(QpexError::InvalidGateSpec(format!(
                    "ccx qubits must be pairwise distinct (got q[{}],q[{}],q[{}])",
                    c1, c2, t
                )));
            }
            _ => {}
        }
        self.gates.push(gate);
        Ok(())
    }

    /// Add multiple gates
    pub fn add_gates(&mut self, gates: impl IntoIterator<Item = Gate>) -> QpexResult<()> {
        for gate in gates {
            self.add_gate(gate)?;
        }
        Ok(())
    }

    /// Clear all gates
    pub fn clear(&mut self) {
        self.gates.clear();
    }

    /// Get number of qubits
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get gates
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Get circuit name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set circuit name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Check if circuit is empty
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    // ========================================================================
    // Circuit Analysis
    // ========================================================================

    /// Calculate circuit depth (longest path)
    /// Gantree: depth(&self) -> usize // 깊이 계산
    pub fn depth(&self) -> usize {
        if self.gates.is_empty() {
            return 0;
        }

        // Track the depth at each qubit
        let mut qubit_depths = vec![0usize; self.num_qubits];

        for gate in &self.gates {
            let qubits = gate.qubits();
            if qubits.is_empty() {
                // MeasureAll or global barrier
                let max_depth = *qubit_depths.iter().max().unwrap_or(&0);
                for d in &mut qubit_depths {
                    *d = max_depth + 1;
                }
            } else {
                // Find maximum depth among gate qubits
                let max_depth = qubits
                    .iter()
                    .filter_map(|&q| qubit_depths.get(q))
                    .max()
                    .copied()
                    .unwrap_or(0);

                // Update all gate qubits to max_depth + 1
                for &q in &qubits {
                    if q < self.num_qubits {
                        qubit_depths[q] = max_depth + 1;
                    }
                }
            }
        }

        qubit_depths.into_iter().max().unwrap_or(0)
    }

    /// Get total gate count
    /// Gantree: gate_count(&self) -> usize // 게이트 수
    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }

    /// Count single-qubit gates
    /// Gantree: count_1q(&self) -> usize // 1Q 수
    pub fn count_1q(&self) -> usize {
        self.gates.iter().filter(|g| g.is_single_qubit()).count()
    }

    /// Count two-qubit gates
    /// Gantree: count_2q(&self) -> usize // 2Q 수
    pub fn count_2q(&self) -> usize {
        self.gates.iter().filter(|g| g.is_two_qubit()).count()
    }

    /// Count three-qubit gates
    pub fn count_3q(&self) -> usize {
        self.gates.iter().filter(|g| g.is_three_qubit()).count()
    }

    /// Count measurement operations
    pub fn count_measurements(&self) -> usize {
        self.gates.iter().filter(|g| g.is_measurement()).count()
    }

    /// Get qubits used in the circuit
    pub fn used_qubits(&self) -> HashSet<QubitId> {
        let mut used = HashSet::new();
        for gate in &self.gates {
            for qubit in gate.qubits() {
                used.insert(qubit);
            }
        }
        used
    }

    /// Qubits captured by measurement, sorted ascending
    ///
    /// Empty when the circuit has no measurement; backends then fall
    /// back to reading out every qubit.
    ///
    /// Gantree: measured_qubits(&self) -> Vec<QubitId> // 측정 대상
    pub fn measured_qubits(&self) -> Vec<QubitId> {
        let mut measured = HashSet::new();
        for gate in &self.gates {
            match gate {
                Gate::Measure(q) => {
                    measured.insert(*q);
                }
                Gate::MeasureAll => {
                    measured.extend(0..self.num_qubits);
                }
                _ => {}
            }
        }
        let mut qubits: Vec<QubitId> = measured.into_iter().collect();
        qubits.sort_unstable();
        qubits
    }

    // ========================================================================
    // QASM Conversion
    // ========================================================================

    /// Convert to OpenQASM 2.0 string
    /// Gantree: to_qasm(&self) -> String // QASM2 출력
    pub fn to_qasm(&self) -> String {
        let mut lines = Vec::new();

        // Header
        lines.push("OPENQASM 2.0;".to_string());
        lines.push("include \"qelib1.inc\";".to_string());
        lines.push(String::new());

        // Register declarations; creg covers the measured register so an
        // unmeasured ancilla above it takes no classical bit
        let creg_size = self
            .measured_qubits()
            .last()
            .map(|&q| q + 1)
            .unwrap_or(self.num_qubits);
        lines.push(format!("qreg q[{}];", self.num_qubits));
        lines.push(format!("creg c[{}];", creg_size));
        lines.push(String::new());

        // Gates
        for gate in &self.gates {
            lines.push(gate.to_qasm());
        }

        lines.join("\n")
    }

    /// Parse from OpenQASM 2.0 string (basic support)
    /// Gantree: from_qasm(s) -> Result<Self> // QASM2 파싱
    pub fn from_qasm(qasm: &str) -> QpexResult<Self> {
        let mut num_qubits = 0;
        let mut gates = Vec::new();

        for line in qasm.lines() {
            let line = line.trim();

            // Skip comments and empty lines
            if line.is_empty() || line.starts_with("//") {
                continue;
            }

            // Parse qreg
            if line.starts_with("qreg") {
                if let Some(n) = parse_register_size(line) {
                    num_qubits = n;
                }
                continue;
            }

            // Skip headers and includes
            if line.starts_with("OPENQASM")
                || line.starts_with("include")
                || line.starts_with("creg")
            {
                continue;
            }

            // Parse gates (simplified)
            if let Some(gate) = parse_gate_line(line)? {
                gates.push(gate);
            }
        }

        if num_qubits == 0 {
            return Err(QpexError::InvalidQasm("No qreg declaration found".into()));
        }

        Circuit::from_gates(num_qubits, gates)
    }
}

// ============================================================================
// QASM Parsing Helpers
// ============================================================================

fn parse_register_size(line: &str) -> Option<usize> {
    // Parse "qreg q[N];" -> N
    let start = line.find('[')?;
    let end = line.find(']')?;
    line[start + 1..end].parse().ok()
}

fn parse_gate_line(line: &str) -> QpexResult<Option<Gate>> {
    let line = line.trim().trim_end_matches(';');

    let parts: Vec<&str> = line.splitn(2, ' ').collect();
    if parts.len() < 2 {
        return Ok(None);
    }
    let (name, qubits_str) = (parts[0], parts[1]);
    let qubits = parse_qubits(qubits_str)?;

    let gate = match name.to_lowercase().as_str() {
        "h" => qubits.first().map(|&q| Gate::H(q)),
        "x" => qubits.first().map(|&q| Gate::X(q)),
        "cx" | "cnot" => {
            if qubits.len() >= 2 {
                Some(Gate::Cnot(qubits[0], qubits[1]))
            } else {
                None
            }
        }
        "ccx" | "toffoli" => {
            if qubits.len() >= 3 {
                Some(Gate::Ccx(qubits[0], qubits[1], qubits[2]))
            } else {
                None
            }
        }
        "measure" => qubits.first().map(|&q| Gate::Measure(q)),
        "barrier" => Some(Gate::Barrier(qubits)),
        _ => None,
    };

    Ok(gate)
}

fn parse_qubits(s: &str) -> QpexResult<Vec<QubitId>> {
    let mut qubits = Vec::new();

    for part in s.split(',') {
        let part = part.trim();
        // Parse "q[N]" -> N
        if let Some(start) = part.find('[') {
            if let Some(end) = part.find(']') {
                if let Ok(q) = part[start + 1..end].parse() {
                    qubits.push(q);
                }
            }
        }
    }

    Ok(qubits)
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Circuit({} qubits, {} gates)",
            self.num_qubits,
            self.gates.len()
        )?;
        writeln!(f, "  Depth: {}", self.depth())?;
        writeln!(f, "  1Q gates: {}", self.count_1q())?;
        writeln!(f, "  2Q gates: {}", self.count_2q())?;
        writeln!(f, "  3Q gates: {}", self.count_3q())?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circuit_new() {
        let circuit = Circuit::new(5);
        assert_eq!(circuit.num_qubits(), 5);
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_add_gate() {
        let mut circuit = Circuit::new(3);
        assert!(circuit.add_gate(Gate::H(0)).is_ok());
        assert!(circuit.add_gate(Gate::Cnot(0, 1)).is_ok());
        assert!(circuit.add_gate(Gate::Ccx(0, 1, 2)).is_ok());
        assert_eq!(circuit.gate_count(), 3);
    }

    #[test]
    fn test_add_gate_out_of_range() {
        let mut circuit = Circuit::new(3);
        assert!(circuit.add_gate(Gate::H(5)).is_err());
        assert!(circuit.add_gate(Gate::Ccx(0, 1, 3)).is_err());
    }

    #[test]
    fn test_add_gate_repeated_qubit() {
        let mut circuit = Circuit::new(3);
        assert!(matches!(
            circuit.add_gate(Gate::Cnot(1, 1)),
            Err(QpexError::InvalidGateSpec(_))
        ));
        assert!(matches!(
            circuit.add_gate(Gate::Ccx(0, 2, 2)),
            Err(QpexError::InvalidGateSpec(_))
        ));
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_circuit_depth() {
        let mut circuit = Circuit::new(3);
        circuit.add_gate(Gate::H(0)).unwrap();
        circuit.add_gate(Gate::H(1)).unwrap();
        circuit.add_gate(Gate::Cnot(0, 1)).unwrap();
        circuit.add_gate(Gate::H(2)).unwrap();

        // H(0), H(1) parallel -> depth 1
        // CNOT(0,1) -> depth 2
        // H(2) can be parallel with CNOT -> depth 2
        assert!(circuit.depth() >= 2);
    }

    #[test]
    fn test_gate_counts() {
        let mut circuit = Circuit::new(3);
        circuit.add_gate(Gate::H(0)).unwrap();
        circuit.add_gate(Gate::X(1)).unwrap();
        circuit.add_gate(Gate::Cnot(0, 1)).unwrap();
        circuit.add_gate(Gate::Ccx(0, 1, 2)).unwrap();

        assert_eq!(circuit.count_1q(), 2);
        assert_eq!(circuit.count_2q(), 1);
        assert_eq!(circuit.count_3q(), 1);
    }

    #[test]
    fn test_measured_qubits() {
        let mut circuit = Circuit::new(4);
        circuit.add_gate(Gate::H(0)).unwrap();
        circuit.add_gate(Gate::Measure(2)).unwrap();
        circuit.add_gate(Gate::Measure(0)).unwrap();
        circuit.add_gate(Gate::Measure(2)).unwrap();

        assert_eq!(circuit.measured_qubits(), vec![0, 2]);
    }

    #[test]
    fn test_measured_qubits_measure_all() {
        let mut circuit = Circuit::new(3);
        circuit.add_gate(Gate::MeasureAll).unwrap();
        assert_eq!(circuit.measured_qubits(), vec![0, 1, 2]);
    }

    #[test]
    fn test_measured_qubits_empty() {
        let circuit = Circuit::new(3);
        assert!(circuit.measured_qubits().is_empty());
    }

    #[test]
    fn test_to_qasm() {
        let mut circuit = Circuit::new(2);
        circuit.add_gate(Gate::H(0)).unwrap();
        circuit.add_gate(Gate::Cnot(0, 1)).unwrap();

        let qasm = circuit.to_qasm();
        assert!(qasm.contains("OPENQASM 2.0"));
        assert!(qasm.contains("qreg q[2]"));
        assert!(qasm.contains("creg c[2]"));
        assert!(qasm.contains("h q[0]"));
        assert!(qasm.contains("cx q[0],q[1]"));
    }

    #[test]
    fn test_to_qasm_ancilla_excluded_from_creg() {
        // 3 work qubits measured, qubit 3 is an unmeasured ancilla
        let mut circuit = Circuit::new(4);
        for q in 0..3 {
            circuit.add_gate(Gate::Measure(q)).unwrap();
        }

        let qasm = circuit.to_qasm();
        assert!(qasm.contains("qreg q[4]"));
        assert!(qasm.contains("creg c[3]"));
    }

    #[test]
    fn test_from_qasm() {
        let qasm = r#"
            OPENQASM 2.0;
            include "qelib1.inc";
            qreg q[3];
            creg c[3];
            h q[0];
            cx q[0],q[1];
            ccx q[0],q[1],q[2];
            measure q[0] -> c[0];
        "#;

        let circuit = Circuit::from_qasm(qasm).unwrap();
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.gate_count(), 4);
        assert_eq!(circuit.count_3q(), 1);
    }

    #[test]
    fn test_from_qasm_no_qreg() {
        assert!(matches!(
            Circuit::from_qasm("h q[0];"),
            Err(QpexError::InvalidQasm(_))
        ));
    }

    #[test]
    fn test_from_gates_validates() {
        assert!(Circuit::from_gates(2, vec![Gate::H(0), Gate::Cnot(0, 1)]).is_ok());
        assert!(Circuit::from_gates(2, vec![Gate::Ccx(0, 1, 1)]).is_err());
    }
}
