//! Core types for QPEX
//!
//! Gantree: L0_Foundation → CoreTypes
//!
//! Provides fundamental type aliases and the bitstring wrapper type
//! used throughout the QPEX system.

use crate::error::{QpexError, QpexResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// Qubit identifier (0-indexed)
/// Gantree: QubitId // pub type QubitId = usize
pub type QubitId = usize;

/// Measurement counts: bitstring -> count
/// Gantree: Counts // pub type Counts = HashMap<String, u64>
pub type Counts = HashMap<String, u64>;

// ============================================================================
// Bitstring
// ============================================================================

/// Bitstring for measurement results
///
/// Position 0 is the leftmost character of the textual form. Backends
/// report most-significant-qubit first; `reversed()` flips into
/// qubit-index order, where position `i` is qubit `i`.
///
/// Gantree: Bitstring // 비트열 타입
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bitstring {
    bits: Vec<bool>,
}

impl Bitstring {
    /// Create from a vector of bools
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Create from string (e.g., "0110")
    /// Gantree: parse(s) -> Self // 파싱
    pub fn parse(s: &str) -> QpexResult<Self> {
        let bits: Result<Vec<bool>, _> = s
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(QpexError::InvalidBitstring(s.to_string())),
            })
            .collect();
        Ok(Self { bits: bits? })
    }

    /// Create zero bitstring of given length
    pub fn zeros(n: usize) -> Self {
        Self {
            bits: vec![false; n],
        }
    }

    /// Get the number of bits
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Count number of 1s (Hamming weight)
    /// Gantree: popcount() -> usize // 1 카운트
    pub fn popcount(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Get bit at position (leftmost = index 0)
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    /// Reversed copy
    /// Gantree: reversed() -> Self // 역순 복사
    pub fn reversed(&self) -> Self {
        Self {
            bits: self.bits.iter().rev().copied().collect(),
        }
    }

    /// Convert to usize, reading the bits as MSB-first binary
    pub fn to_usize(&self) -> usize {
        self.bits
            .iter()
            .rev()
            .enumerate()
            .filter(|(_, &b)| b)
            .map(|(i, _)| 1 << i)
            .sum()
    }
}

impl fmt::Display for Bitstring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bits {
            write!(f, "{}", if b { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl From<&str> for Bitstring {
    fn from(s: &str) -> Self {
        Self::parse(s).expect("Invalid bitstring")
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitstring_parse() {
        let bs = Bitstring::parse("0110").unwrap();
        assert_eq!(bs.len(), 4);
        assert_eq!(bs.get(0), Some(false));
        assert_eq!(bs.get(1), Some(true));
    }

    #[test]
    fn test_bitstring_parse_invalid() {
        assert!(Bitstring::parse("01x0").is_err());
        assert!(Bitstring::parse("012").is_err());
    }

    #[test]
    fn test_bitstring_popcount() {
        let bs = Bitstring::parse("01101").unwrap();
        assert_eq!(bs.popcount(), 3);
    }

    #[test]
    fn test_bitstring_reversed() {
        let bs = Bitstring::parse("1000").unwrap();
        assert_eq!(bs.reversed().to_string(), "0001");

        // Reversing twice is the identity
        assert_eq!(bs.reversed().reversed(), bs);
    }

    #[test]
    fn test_bitstring_to_usize() {
        assert_eq!(Bitstring::parse("1000").unwrap().to_usize(), 8);
        assert_eq!(Bitstring::parse("0011").unwrap().to_usize(), 3);
        assert_eq!(Bitstring::zeros(5).to_usize(), 0);
    }

    #[test]
    fn test_bitstring_display() {
        let bs = Bitstring::parse("10101").unwrap();
        assert_eq!(bs.to_string(), "10101");
    }
}
