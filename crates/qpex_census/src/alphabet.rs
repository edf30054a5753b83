//! Gate alphabet for the program census
//!
//! Gantree: L4_Census → GateAlphabet
//!
//! Concrete gate instances a census program can draw from: one X per
//! qubit and, for each unordered qubit triple, the three cyclic
//! rotations of a CCX. Each instance has a compact digit encoding that
//! the program descriptions are built from.

use qpex_core::{Gate, QubitId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One operation drawn from the census alphabet
/// Gantree: ProgramOp // 알파벳 연산
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProgramOp {
    /// NOT on a single qubit
    X(QubitId),

    /// Toffoli: two controls and a target
    Ccx(QubitId, QubitId, QubitId),
}

impl ProgramOp {
    /// Compact digit encoding: `0q` for X, `1abt` for CCX
    /// Gantree: encode(&self) -> String // 부호화
    pub fn encode(&self) -> String {
        match self {
            ProgramOp::X(q) => format!("0{}", q),
            ProgramOp::Ccx(a, b, t) => format!("1{}{}{}", a, b, t),
        }
    }

    /// Circuit gate for this operation
    pub fn gate(&self) -> Gate {
        match self {
            ProgramOp::X(q) => Gate::X(*q),
            ProgramOp::Ccx(a, b, t) => Gate::Ccx(*a, *b, *t),
        }
    }

    /// Qubits touched by this operation
    pub fn qubits(&self) -> Vec<QubitId> {
        match self {
            ProgramOp::X(q) => vec![*q],
            ProgramOp::Ccx(a, b, t) => vec![*a, *b, *t],
        }
    }
}

impl fmt::Display for ProgramOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

/// The full census alphabet for a register size
/// Gantree: GateAlphabet // 게이트 알파벳
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateAlphabet {
    /// Register size the alphabet is built for
    num_qubits: usize,

    /// X instances, one per qubit
    x_ops: Vec<ProgramOp>,

    /// CCX instances, three cyclic rotations per qubit triple
    ccx_ops: Vec<ProgramOp>,
}

impl GateAlphabet {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Build the alphabet for `num_qubits` qubits
    ///
    /// For each triple a < b < c, only the cyclic rotations (a,b,c),
    /// (b,c,a), (c,a,b) are emitted. CCX is symmetric in its controls,
    /// so the three rotations already cover every distinct target
    /// choice for the triple.
    pub fn new(num_qubits: usize) -> Self {
        let x_ops = (0..num_qubits).map(ProgramOp::X).collect();

        let mut ccx_ops = Vec::new();
        for a in 0..num_qubits {
            for b in (a + 1)..num_qubits {
                for c in (b + 1)..num_qubits {
                    ccx_ops.push(ProgramOp::Ccx(a, b, c));
                    ccx_ops.push(ProgramOp::Ccx(b, c, a));
                    ccx_ops.push(ProgramOp::Ccx(c, a, b));
                }
            }
        }

        Self {
            num_qubits,
            x_ops,
            ccx_ops,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Register size
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// X instances in qubit order
    pub fn x_ops(&self) -> &[ProgramOp] {
        &self.x_ops
    }

    /// CCX instances in triple-then-rotation order
    pub fn ccx_ops(&self) -> &[ProgramOp] {
        &self.ccx_ops
    }

    /// Total instance count: Q + 3 * C(Q, 3)
    /// Gantree: total(&self) -> usize // 전체 크기
    pub fn total(&self) -> usize {
        self.x_ops.len() + self.ccx_ops.len()
    }
}

impl fmt::Display for GateAlphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GateAlphabet({}Q, {} X + {} CCX)",
            self.num_qubits,
            self.x_ops.len(),
            self.ccx_ops.len()
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
