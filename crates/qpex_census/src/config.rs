//! Census configuration
//!
//! Gantree: L4_Census → CensusConfig
//!
//! Configuration for a program-space census run.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Census configuration
/// Gantree: CensusConfig // 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CensusConfig {
    /// Register size Q
    /// Gantree: num_qubits: usize // 큐비트 수 (4)
    pub num_qubits: usize,

    /// Largest program length to enumerate
    /// Gantree: max_gate_count: usize // 게이트 예산 (3)
    pub max_gate_count: usize,

    /// Random seed for the backend
    /// Gantree: seed: Option<u64> // 시드
    pub seed: Option<u64>,

    /// Print per-pass progress
    pub verbose: bool,
}

impl CensusConfig {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Default 4-qubit census up to 3-op programs
    /// Gantree: default() -> Self // 기본값
    pub fn default_4q() -> Self {
        Self {
            num_qubits: 4,
            max_gate_count: 3,
            seed: None,
            verbose: false,
        }
    }

    /// Census configuration for a specific register size
    pub fn for_qubits(n: usize) -> Self {
        let mut config = Self::default_4q();
        config.num_qubits = n;
        config
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    /// Set register size
    pub fn with_qubits(mut self, n: usize) -> Self {
        self.num_qubits = n;
        self
    }

    /// Set the gate budget
    pub fn with_max_gate_count(mut self, max_gate_count: usize) -> Self {
        self.max_gate_count = max_gate_count;
        self
    }

    /// Set seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable/disable progress output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    // ========================================================================
    // Derived Values
    // ========================================================================

    /// Alphabet size: Q + 3 * C(Q, 3)
    pub fn alphabet_size(&self) -> usize {
        let q = self.num_qubits;
        if q < 3 {
            return q;
        }
        q + q * (q - 1) * (q - 2) / 2
    }

    /// Total programs across all budgets 1..=max_gate_count
    pub fn total_programs(&self) -> u64 {
        let size = self.alphabet_size() as u64;
        (1..=self.max_gate_count as u32).map(|gc| size.pow(gc)).sum()
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Validate configuration
    /// Gantree: validate(&self) -> Result // 검증
    pub fn validate(&self) -> Result<(), String> {
        if self.num_qubits == 0 {
            return Err("num_qubits must be >= 1".to_string());
        }

        if self.num_qubits > 10 {
            return Err(format!(
                "num_qubits must be <= 10 for single-digit encoding, got {}",
                self.num_qubits
            ));
        }

        if self.max_gate_count == 0 {
            return Err("max_gate_count must be >= 1".to_string());
        }

        Ok(())
    }
}

impl Default for CensusConfig {
    fn default() -> Self {
        Self::default_4q()
    }
}

impl fmt::Display for CensusConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CensusConfig({}Q, budget={}, alphabet={}, verbose={})",
            self.num_qubits,
            self.max_gate_count,
            self.alphabet_size(),
            self.verbose
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
