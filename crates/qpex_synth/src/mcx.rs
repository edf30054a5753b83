//! Borrowed-qubit MCX decomposition
//!
//! Gantree: L3_Synthesis → Mcx
//!
//! Rewrites an n-controlled X gate into CX/CCX gates using a single
//! borrowed qubit. The borrowed qubit may hold any value and is always
//! returned to it, so any idle circuit qubit qualifies.

use qpex_core::{Gate, QpexError, QpexResult, QubitId};
use std::collections::HashSet;

/// Multi-controlled X decomposition utilities
/// Gantree: Mcx // 다중 제어 X 분해
pub struct Mcx;

impl Mcx {
    // ========================================================================
    // Decomposition
    // ========================================================================

    /// Decompose a multi-controlled X into CX/CCX gates
    /// Gantree: decompose(controls, target, borrowed) -> Vec<Gate> // 재귀 분해
    ///
    /// - 1 control: a single CX
    /// - 2 controls: a single CCX
    /// - 3+ controls: split the control set in half and emit four
    ///   half-sized MCX calls, borrowing a control from the opposite
    ///   half for each
    ///
    /// Only the first entry of `borrowed` is used, and only when there
    /// are 3 or more controls.
    pub fn decompose(
        controls: &[QubitId],
        target: QubitId,
        borrowed: &[QubitId],
    ) -> QpexResult<Vec<Gate>> {
        if controls.is_empty() {
            return Err(QpexError::InvalidGateSpec(
                "mcx requires at least one control qubit".to_string(),
            ));
        }

        let mut seen: HashSet<QubitId> = HashSet::new();
        for &q in controls.iter().chain(std::iter::once(&target)) {
            if !seen.insert(q) {
                return Err(QpexError::InvalidGateSpec(format!(
                    "mcx qubits must be pairwise distinct (q[{}] repeats)",
                    q
                )));
            }
        }

        let mut gates = Vec::new();

        if controls.len() <= 2 {
            Self::emit(controls, target, target, &mut gates);
            return Ok(gates);
        }

        let borrow = match borrowed.first() {
            Some(&b) => b,
            None => {
                return Err(QpexError::InvalidGateSpec(format!(
                    "mcx with {} controls requires a borrowed qubit",
                    controls.len()
                )));
            }
        };
        if !seen.insert(borrow) {
            return Err(QpexError::InvalidGateSpec(format!(
                "mcx borrowed qubit q[{}] collides with a control or the target",
                borrow
            )));
        }

        Self::emit(controls, target, borrow, &mut gates);
        Ok(gates)
    }

    /// Recursive layer; `borrow` is unused below 3 controls
    fn emit(controls: &[QubitId], target: QubitId, borrow: QubitId, gates: &mut Vec<Gate>) {
        match controls {
            &[c] => gates.push(Gate::Cnot(c, target)),
            &[c1, c2] => gates.push(Gate::Ccx(c1, c2, target)),
            _ => {
                // Halve the controls; each half borrows a control qubit
                // from the other half, so no clean ancilla is needed.
                let m = (controls.len() + 1) / 2;
                let upper = &controls[..m];
                let mut lower: Vec<QubitId> = controls[m..].to_vec();
                lower.push(borrow);

                Self::emit(upper, borrow, controls[m], gates);
                Self::emit(&lower, target, controls[m - 1], gates);
                Self::emit(upper, borrow, controls[m], gates);
                Self::emit(&lower, target, controls[m - 1], gates);
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use qpex_backend::prelude::*;
    use qpex_core::CircuitBuilder;

    #[test]
    fn test_single_control() {
        let gates = Mcx::decompose(&[0], 1, &[]).unwrap();
        assert_eq!(gates, vec![Gate::Cnot(0, 1)]);
    }

    #[test]
    fn test_two_controls() {
        let gates = Mcx::decompose(&[0, 1], 2, &[]).unwrap();
        assert_eq!(gates, vec![Gate::Ccx(0, 1, 2)]);
    }

    #[test]
    fn test_three_controls_structure() {
        let gates = Mcx::decompose(&[0, 1, 2], 3, &[4]).unwrap();

        // Upper half toggles the borrow, lower half (plus borrow) hits
        // the target, each twice to restore the borrow
        assert_eq!(
            gates,
            vec![
                Gate::Ccx(0, 1, 4),
                Gate::Ccx(2, 4, 3),
                Gate::Ccx(0, 1, 4),
                Gate::Ccx(2, 4, 3),
            ]
        );
    }

    #[test]
    fn test_gate_counts() {
        // (controls, expected CX/CCX count)
        let expected = [(1, 1), (2, 1), (3, 4), (4, 10), (5, 16), (6, 28), (7, 40)];

        for &(k, count) in &expected {
            let controls: Vec<QubitId> = (0..k).collect();
            let gates = Mcx::decompose(&controls, k, &[k + 1]).unwrap();
            assert_eq!(gates.len(), count, "wrong gate count for {} controls", k);
        }
    }

    #[test]
    fn test_requires_control() {
        let result = Mcx::decompose(&[], 1, &[2]);
        assert!(matches!(result, Err(QpexError::InvalidGateSpec(_))));
    }

    #[test]
    fn test_requires_borrowed_for_three() {
        assert!(Mcx::decompose(&[0, 1], 2, &[]).is_ok());
        assert!(Mcx::decompose(&[0, 1, 2], 3, &[]).is_err());
    }

    #[test]
    fn test_rejects_duplicate_qubits() {
        // Target among controls
        assert!(Mcx::decompose(&[0, 1], 1, &[]).is_err());
        // Repeated control
        assert!(Mcx::decompose(&[0, 0, 1], 2, &[3]).is_err());
        // Borrow colliding with a control
        assert!(Mcx::decompose(&[0, 1, 2], 3, &[2]).is_err());
    }

    #[test]
    fn test_truth_table() {
        // Exhaustive over all control assignments: target flips only
        // when every control is set, everything else reads back as
        // prepared
        for k in 1usize..=8 {
            let controls: Vec<QubitId> = (0..k).collect();
            let target = k;
            let borrow = k + 1;
            let gates = Mcx::decompose(&controls, target, &[borrow]).unwrap();
            let backend = StatevectorBackend::new(k + 2).with_seed(42);

            for assignment in 0u64..(1 << k) {
                let mut builder = CircuitBuilder::new(k + 2);
                for c in 0..k {
                    if (assignment >> c) & 1 == 1 {
                        builder = builder.x(c);
                    }
                }
                let circuit = builder.gates(gates.iter().cloned()).measure_all().build();

                let bits = backend.execute_single(&circuit).unwrap().reversed();

                let all_set = assignment == (1 << k) - 1;
                assert_eq!(bits.get(target), Some(all_set), "k={} a={}", k, assignment);
                assert_eq!(bits.get(borrow), Some(false), "k={} a={}", k, assignment);
                for c in 0..k {
                    let prepared = (assignment >> c) & 1 == 1;
                    assert_eq!(bits.get(c), Some(prepared), "k={} a={}", k, assignment);
                }
            }
        }
    }

    #[test]
    fn test_wide_control_spot_checks() {
        // Exhaustive sweeps get slow past 8 controls; spot-check the
        // all-ones assignment and every one-control-off assignment
        for k in 9usize..=10 {
            let controls: Vec<QubitId> = (0..k).collect();
            let target = k;
            let borrow = k + 1;
            let gates = Mcx::decompose(&controls, target, &[borrow]).unwrap();
            let backend = StatevectorBackend::new(k + 2).with_seed(42);

            let all_ones = (1u64 << k) - 1;
            let mut assignments = vec![all_ones];
            for c in 0..k {
                assignments.push(all_ones ^ (1 << c));
            }

            for &assignment in &assignments {
                let mut builder = CircuitBuilder::new(k + 2);
                for c in 0..k {
                    if (assignment >> c) & 1 == 1 {
                        builder = builder.x(c);
                    }
                }
                let circuit = builder.gates(gates.iter().cloned()).measure_all().build();

                let bits = backend.execute_single(&circuit).unwrap().reversed();

                let all_set = assignment == all_ones;
                assert_eq!(bits.get(target), Some(all_set), "k={} a={}", k, assignment);
                assert_eq!(bits.get(borrow), Some(false), "k={} a={}", k, assignment);
            }
        }
    }

    #[test]
    fn test_dirty_borrow_restored() {
        // Borrow starts at |1> and must come back to |1>
        for k in 3usize..=5 {
            let controls: Vec<QubitId> = (0..k).collect();
            let target = k;
            let borrow = k + 1;
            let gates = Mcx::decompose(&controls, target, &[borrow]).unwrap();
            let backend = StatevectorBackend::new(k + 2).with_seed(42);

            for assignment in 0u64..(1 << k) {
                let mut builder = CircuitBuilder::new(k + 2).x(borrow);
                for c in 0..k {
                    if (assignment >> c) & 1 == 1 {
                        builder = builder.x(c);
                    }
                }
                let circuit = builder.gates(gates.iter().cloned()).measure_all().build();

                let bits = backend.execute_single(&circuit).unwrap().reversed();

                let all_set = assignment == (1 << k) - 1;
                assert_eq!(bits.get(target), Some(all_set), "k={} a={}", k, assignment);
                assert_eq!(bits.get(borrow), Some(true), "k={} a={}", k, assignment);
            }
        }
    }
}
