//! Exhaustive program enumeration
//!
//! Gantree: L4_Census → ProgramEnumerator
//!
//! Generates every program of a given length over the alphabet, in a
//! fixed canonical order: category patterns first (X = 0, CCX = 1,
//! counted in binary with the leftmost slot most significant), then
//! the instance product within each pattern with the last slot varying
//! fastest.

use crate::alphabet::{GateAlphabet, ProgramOp};
use crate::program::Program;

// ============================================================================
// Digit Expansion
// ============================================================================

/// Fixed-width digits of `value` in `base`, most significant first
/// Gantree: mixed_radix_digits(value, base, width) -> Vec<usize> // 고정폭 진법 전개
///
/// Zero-padded on the left; only the low `width` digits are kept.
pub fn mixed_radix_digits(value: usize, base: usize, width: usize) -> Vec<usize> {
    let mut digits = vec![0usize; width];
    let mut rest = value;
    for slot in (0..width).rev() {
        digits[slot] = rest % base;
        rest /= base;
    }
    digits
}

/// Program generator for the census
/// Gantree: ProgramEnumerator // 프로그램 열거기
pub struct ProgramEnumerator {
    /// Alphabet to draw instances from
    alphabet: GateAlphabet,
}

impl ProgramEnumerator {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create an enumerator over an existing alphabet
    pub fn new(alphabet: GateAlphabet) -> Self {
        Self { alphabet }
    }

    /// Create an enumerator for a register size
    pub fn for_qubits(num_qubits: usize) -> Self {
        Self::new(GateAlphabet::new(num_qubits))
    }

    /// The underlying alphabet
    pub fn alphabet(&self) -> &GateAlphabet {
        &self.alphabet
    }

    // ========================================================================
    // Enumeration
    // ========================================================================

    /// Number of programs with exactly `gate_count` operations
    /// Gantree: count(gc) -> usize // 폐형식 개수
    ///
    /// (|X| + |CCX|)^gate_count
    pub fn count(&self, gate_count: usize) -> usize {
        self.alphabet.total().pow(gate_count as u32)
    }

    /// All programs with exactly `gate_count` operations
    /// Gantree: enumerate(gc) -> Vec<Program> // 전수 열거
    ///
    /// `enumerate(0)` yields the single empty program.
    pub fn enumerate(&self, gate_count: usize) -> Vec<Program> {
        let mut programs = Vec::with_capacity(self.count(gate_count));

        for pattern in 0usize..(1usize << gate_count) {
            // Leftmost slot takes the most significant pattern bit
            let slots: Vec<&[ProgramOp]> = mixed_radix_digits(pattern, 2, gate_count)
                .into_iter()
                .map(|kind| {
                    if kind == 0 {
                        self.alphabet.x_ops()
                    } else {
                        self.alphabet.ccx_ops()
                    }
                })
                .collect();

            // Registers below 3 qubits have no CCX instances
            if slots.iter().any(|slot| slot.is_empty()) {
                continue;
            }

            // Instance product, last slot varying fastest
            let mut indices = vec![0usize; gate_count];
            'product: loop {
                let ops: Vec<ProgramOp> = indices
                    .iter()
                    .zip(&slots)
                    .map(|(&idx, slot)| slot[idx])
                    .collect();
                programs.push(Program::from_ops(ops));

                let mut pos = gate_count;
                loop {
                    if pos == 0 {
                        break 'product;
                    }
                    pos -= 1;
                    indices[pos] += 1;
                    if indices[pos] < slots[pos].len() {
                        break;
                    }
                    indices[pos] = 0;
                }
            }
        }

        programs
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_mixed_radix_digits() {
        assert_eq!(mixed_radix_digits(5, 2, 4), vec![0, 1, 0, 1]);
        assert_eq!(mixed_radix_digits(14, 3, 3), vec![1, 1, 2]);
        assert_eq!(mixed_radix_digits(0, 16, 2), vec![0, 0]);
        assert_eq!(mixed_radix_digits(255, 16, 2), vec![15, 15]);
        assert_eq!(mixed_radix_digits(7, 2, 0), Vec::<usize>::new());
    }

    #[test]
    fn test_count_4q() {
        let enumerator = ProgramEnumerator::for_qubits(4);

        assert_eq!(enumerator.count(0), 1);
        assert_eq!(enumerator.count(1), 16);
        assert_eq!(enumerator.count(2), 256);
        assert_eq!(enumerator.count(3), 4096);
    }

    #[test]
    fn test_single_op_order() {
        let enumerator = ProgramEnumerator::for_qubits(4);
        let programs = enumerator.enumerate(1);

        let descs: Vec<&str> = programs.iter().map(|p| p.desc()).collect();
        assert_eq!(
            descs,
            vec![
                "00", "01", "02", "03", // X instances
                "1012", "1120", "1201", // triple (0,1,2)
                "1013", "1130", "1301", // triple (0,1,3)
                "1023", "1230", "1302", // triple (0,2,3)
                "1123", "1231", "1312", // triple (1,2,3)
            ]
        );
    }

    #[test]
    fn test_two_op_order() {
        let enumerator = ProgramEnumerator::for_qubits(4);
        let programs = enumerator.enumerate(2);

        assert_eq!(programs.len(), 256);

        // Pattern blocks: XX (16), X-CCX (48), CCX-X (48), CCX-CCX (144)
        assert_eq!(programs[0].desc(), "0000");
        assert_eq!(programs[1].desc(), "0001");
        assert_eq!(programs[4].desc(), "0100");
        assert_eq!(programs[16].desc(), "001012");
        assert_eq!(programs[64].desc(), "101200");
        assert_eq!(programs[112].desc(), "10121012");
    }

    #[test]
    fn test_enumerate_matches_count() {
        let enumerator = ProgramEnumerator::for_qubits(3);

        for gc in 0..=3 {
            assert_eq!(enumerator.enumerate(gc).len(), enumerator.count(gc));
        }
    }

    #[test]
    fn test_no_ccx_below_three_qubits() {
        let enumerator = ProgramEnumerator::for_qubits(2);
        let programs = enumerator.enumerate(2);

        let descs: Vec<&str> = programs.iter().map(|p| p.desc()).collect();
        assert_eq!(descs, vec!["0000", "0001", "0100", "0101"]);
        assert_eq!(programs.len(), enumerator.count(2));
    }

    #[test]
    fn test_zero_op_budget() {
        let enumerator = ProgramEnumerator::for_qubits(4);
        let programs = enumerator.enumerate(0);

        assert_eq!(programs.len(), 1);
        assert!(programs[0].is_empty());
    }

    #[test]
    fn test_descriptions_unique() {
        let enumerator = ProgramEnumerator::for_qubits(4);
        let programs = enumerator.enumerate(2);

        let unique: HashSet<&str> = programs.iter().map(|p| p.desc()).collect();
        assert_eq!(unique.len(), programs.len());
    }
}
