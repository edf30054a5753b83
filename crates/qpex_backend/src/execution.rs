//! Backend execution types and traits
//!
//! Gantree: L2_Backend → BackendTrait
//!
//! Defines the interface for quantum backend execution.

use qpex_core::{Bitstring, Circuit, Counts, QpexError, QpexResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Write as _;

/// Result of circuit execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Measurement counts (bitstring -> count)
    pub counts: Counts,

    /// Number of shots executed
    pub shots: u64,

    /// Execution metadata
    pub metadata: ExecutionMetadata,
}

/// Execution metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecutionMetadata {
    /// Backend name
    pub backend: String,

    /// Execution time in milliseconds
    pub execution_time_ms: Option<u64>,

    /// Whether simulation was used
    pub simulated: bool,

    /// Seed used (if any)
    pub seed: Option<u64>,
}

impl ExecutionResult {
    /// Create new execution result
    pub fn new(counts: Counts, shots: u64, backend: &str) -> Self {
        Self {
            counts,
            shots,
            metadata: ExecutionMetadata {
                backend: backend.to_string(),
                simulated: true,
                ..Default::default()
            },
        }
    }

    /// Get total count (should equal shots)
    pub fn total_counts(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Get probability of a specific bitstring
    pub fn probability(&self, bitstring: &str) -> f64 {
        let count = self.counts.get(bitstring).copied().unwrap_or(0);
        count as f64 / self.shots as f64
    }

    /// Get most frequent bitstring
    pub fn most_frequent(&self) -> Option<(&String, u64)> {
        self.counts
            .iter()
            .max_by_key(|(_, &count)| count)
            .map(|(bs, &count)| (bs, count))
    }

    /// Render counts as a human-readable histogram, keys ascending
    pub fn histogram(&self) -> String {
        let mut keys: Vec<&String> = self.counts.keys().collect();
        keys.sort();

        let mut output = String::new();
        for key in keys {
            let count = self.counts[key];
            let pct = 100.0 * count as f64 / self.shots as f64;
            writeln!(output, "  {}  {:>8}  {:>5.1}%", key, count, pct).unwrap();
        }
        output
    }
}

impl fmt::Display for ExecutionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ExecutionResult(shots={}, unique={})",
            self.shots,
            self.counts.len()
        )
    }
}

/// Quantum backend trait
/// Gantree: BackendTrait // 백엔드 인터페이스
pub trait Backend: Send + Sync {
    /// Get backend name
    fn name(&self) -> &str;

    /// Get number of qubits
    fn num_qubits(&self) -> usize;

    /// Execute a circuit
    /// Gantree: execute(circuit, shots) -> Result<ExecutionResult>
    fn execute(&self, circuit: &Circuit, shots: u64) -> QpexResult<ExecutionResult>;

    /// Execute with a single shot and return the one measured bitstring
    /// Gantree: execute_single(circuit) -> Result<Bitstring>
    fn execute_single(&self, circuit: &Circuit) -> QpexResult<Bitstring> {
        let result = self.execute(circuit, 1)?;
        if result.counts.len() != 1 {
            return Err(QpexError::BackendFailure(format!(
                "expected exactly one outcome for a single shot, got {}",
                result.counts.len()
            )));
        }
        let (bitstring, &count) = result
            .counts
            .iter()
            .next()
            .ok_or_else(|| QpexError::BackendFailure("no outcome for single shot".into()))?;
        if count != 1 {
            return Err(QpexError::BackendFailure(format!(
                "single-shot outcome '{}' reported count {}",
                bitstring, count
            )));
        }
        Bitstring::parse(bitstring)
    }

    /// Execute multiple circuits (batch)
    fn execute_batch(&self, circuits: &[Circuit], shots: u64) -> QpexResult<Vec<ExecutionResult>> {
        circuits.iter().map(|c| self.execute(c, shots)).collect()
    }

    /// Check if backend is simulator
    fn is_simulator(&self) -> bool {
        true
    }

    /// Get maximum shots per execution
    fn max_shots(&self) -> u64 {
        100_000
    }
}

// ============================================================================
// Tests
// ============================================================================
