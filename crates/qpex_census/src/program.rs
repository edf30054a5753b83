//! Census programs and their compact descriptions
//!
//! Gantree: L4_Census → Program
//!
//! A program is a finite op sequence over the census alphabet. The
//! description string concatenates each op's digit encoding, so the
//! whole program round-trips through a short ASCII token.

use crate::alphabet::ProgramOp;
use qpex_core::{Circuit, Gate, QpexError, QpexResult, QubitId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A census program: description plus decoded operations
/// Gantree: Program // 프로그램
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Program {
    /// Concatenated op encodings
    desc: String,

    /// Decoded operations in application order
    ops: Vec<ProgramOp>,
}

impl Program {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Build a program from decoded operations
    pub fn from_ops(ops: Vec<ProgramOp>) -> Self {
        let desc = ops.iter().map(ProgramOp::encode).collect();
        Self { desc, ops }
    }

    /// Parse a description string
    /// Gantree: parse(desc, num_qubits) -> Program // 복호화
    ///
    /// Opcode `0` takes one qubit digit, opcode `1` takes three. Every
    /// digit must name a qubit below `num_qubits`.
    pub fn parse(desc: &str, num_qubits: usize) -> QpexResult<Self> {
        let chars: Vec<char> = desc.chars().collect();
        let mut ops = Vec::new();
        let mut pos = 0;

        while pos < chars.len() {
            match chars[pos] {
                '0' => {
                    let q = Self::qubit_digit(desc, &chars, pos + 1, num_qubits)?;
                    ops.push(ProgramOp::X(q));
                    pos += 2;
                }
                '1' => {
                    let a = Self::qubit_digit(desc, &chars, pos + 1, num_qubits)?;
                    let b = Self::qubit_digit(desc, &chars, pos + 2, num_qubits)?;
                    let t = Self::qubit_digit(desc, &chars, pos + 3, num_qubits)?;
                    if a == b || a == t || b == t {
                        return Err(QpexError::MalformedProgram {
                            desc: desc.to_string(),
                            reason: format!(
                                "ccx operands must be pairwise distinct (got {}, {}, {})",
                                a, b, t
                            ),
                        });
                    }
                    ops.push(ProgramOp::Ccx(a, b, t));
                    pos += 4;
                }
                c => {
                    return Err(QpexError::MalformedProgram {
                        desc: desc.to_string(),
                        reason: format!("unknown opcode '{}'", c),
                    });
                }
            }
        }

        Ok(Self {
            desc: desc.to_string(),
            ops,
        })
    }

    /// Read one qubit digit at `pos`
    fn qubit_digit(
        desc: &str,
        chars: &[char],
        pos: usize,
        num_qubits: usize,
    ) -> QpexResult<QubitId> {
        let c = *chars.get(pos).ok_or_else(|| QpexError::MalformedProgram {
            desc: desc.to_string(),
            reason: "description ends mid-operation".to_string(),
        })?;

        let q = c.to_digit(10).ok_or_else(|| QpexError::MalformedProgram {
            desc: desc.to_string(),
            reason: format!("'{}' is not a qubit digit", c),
        })? as usize;

        if q >= num_qubits {
            return Err(QpexError::MalformedProgram {
                desc: desc.to_string(),
                reason: format!("qubit {} out of range for {} qubits", q, num_qubits),
            });
        }

        Ok(q)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Description string
    pub fn desc(&self) -> &str {
        &self.desc
    }

    /// Decoded operations
    pub fn ops(&self) -> &[ProgramOp] {
        &self.ops
    }

    /// Number of operations
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// True for the empty (identity) program
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    // ========================================================================
    // Compilation
    // ========================================================================

    /// Compile to an executable circuit
    /// Gantree: to_circuit(num_qubits) -> Circuit // 회로 변환
    ///
    /// Ops in order, then a barrier, then measurement of the full
    /// register.
    pub fn to_circuit(&self, num_qubits: usize) -> QpexResult<Circuit> {
        let mut circuit = Circuit::with_name(num_qubits, self.desc.clone());

        for op in &self.ops {
            circuit.add_gate(op.gate())?;
        }
        circuit.add_gate(Gate::Barrier((0..num_qubits).collect()))?;
        circuit.add_gate(Gate::MeasureAll)?;

        Ok(circuit)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.desc)
    }
}

// ============================================================================
// Tests
// ============================================================================
