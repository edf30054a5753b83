//! Program classification engine
//!
//! Gantree: L4_Census → Census
//!
//! Runs every enumerated program on a backend and groups programs by
//! measured outcome, accumulating equivalence classes across gate budgets.

use crate::config::CensusConfig;
use crate::enumerate::ProgramEnumerator;
use crate::program::Program;
use qpex_backend::Backend;
use qpex_core::{QpexError, QpexResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Instant;

// ============================================================================
// Equivalence Classes
// ============================================================================

/// Programs grouped by measured outcome
/// Gantree: EquivalenceClass // 동치류
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquivalenceClass {
    /// Canonical outcome key (character i = qubit i)
    key: String,

    /// Member descriptions, shortest first after each pass
    members: Vec<String>,
}

impl EquivalenceClass {
    fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            members: Vec::new(),
        }
    }

    /// Get the outcome key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get member descriptions
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Number of member programs
    pub fn size(&self) -> u64 {
        self.members.len() as u64
    }

    /// Shortest member (first after the length sort)
    pub fn witness(&self) -> Option<&str> {
        self.members.first().map(String::as_str)
    }

    fn push(&mut self, desc: String) {
        self.members.push(desc);
    }

    /// Stable sort: earlier-enumerated programs stay first among equal lengths
    fn sort_by_length(&mut self) {
        self.members.sort_by_key(|desc| desc.len());
    }
}

// ============================================================================
// Result Types
// ============================================================================

/// Summary of one equivalence class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassSummary {
    /// Outcome key
    pub key: String,

    /// Number of member programs
    pub size: u64,

    /// Shortest program reaching this outcome
    pub witness: String,

    /// Character length of the witness description
    pub witness_len: usize,
}

/// Record of a single gate-budget pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassRecord {
    /// Gate budget of this pass
    pub gate_count: usize,

    /// Programs enumerated at this budget
    pub programs: u64,

    /// Classes first seen in this pass
    pub new_classes: usize,

    /// Accumulated classes after this pass
    pub total_classes: usize,
}

/// Census result
/// Gantree: CensusResult // 조사 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CensusResult {
    /// Register size
    pub num_qubits: usize,

    /// Largest gate budget enumerated
    pub max_gate_count: usize,

    /// Programs classified across all passes
    pub total_programs: u64,

    /// Wall time for the run
    pub elapsed_ms: u64,

    /// Per-budget pass records
    pub passes: Vec<PassRecord>,

    /// Accumulated classes, key ascending
    pub classes: Vec<ClassSummary>,
}

impl CensusResult {
    /// Number of distinct outcome classes
    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    /// Look up a class by outcome key
    pub fn class(&self, key: &str) -> Option<&ClassSummary> {
        self.classes.iter().find(|c| c.key == key)
    }

    /// Class with the most member programs
    pub fn largest_class(&self) -> Option<&ClassSummary> {
        self.classes.iter().max_by_key(|c| c.size)
    }
}

// ============================================================================
// Census Engine
// ============================================================================

/// Program census engine
/// Gantree: Census // 조사 엔진
pub struct Census<B: Backend> {
    /// Configuration
    config: CensusConfig,

    /// Program enumerator
    enumerator: ProgramEnumerator,

    /// Backend for circuit execution
    backend: B,

    /// Accumulated classes keyed by outcome
    classes: BTreeMap<String, EquivalenceClass>,

    /// Programs classified so far
    programs_classified: u64,
}

impl<B: Backend> Census<B> {
    // ========================================================================
    // Constructor
    // ========================================================================

    /// Create a census over the alphabet for `config.num_qubits`
    pub fn new(config: CensusConfig, backend: B) -> Self {
        let enumerator = ProgramEnumerator::for_qubits(config.num_qubits);

        Self {
            config,
            enumerator,
            backend,
            classes: BTreeMap::new(),
            programs_classified: 0,
        }
    }

    // ========================================================================
    // Classification
    // ========================================================================

    /// Run one program and return its canonical outcome key
    ///
    /// The backend reports bitstrings most-significant qubit first; the
    /// canonical key is the reverse, so character `i` is qubit `i`.
    pub fn classify(&self, program: &Program) -> QpexResult<String> {
        let circuit = program.to_circuit(self.config.num_qubits)?;
        let bits = self.backend.execute_single(&circuit)?;
        Ok(bits.reversed().to_string())
    }

    /// Classify every program at one gate budget
    ///
    /// Returns the number of classes first seen in this pass.
    pub fn run_pass(&mut self, gate_count: usize) -> QpexResult<usize> {
        let before = self.classes.len();

        for program in self.enumerator.enumerate(gate_count) {
            let key = self.classify(&program)?;
            self.classes
                .entry(key.clone())
                .or_insert_with(|| EquivalenceClass::new(key))
                .push(program.desc().to_string());
            self.programs_classified += 1;
        }

        for class in self.classes.values_mut() {
            class.sort_by_length();
        }

        Ok(self.classes.len() - before)
    }

    /// Run passes for every budget `1..=max_gate_count`
    ///
    /// Accumulates into any classes already present; call [`Census::reset`]
    /// first for a fresh census.
    pub fn run(&mut self) -> QpexResult<CensusResult> {
        let start_time = Instant::now();

        self.config
            .validate()
            .map_err(|e| QpexError::InvalidGateSpec(e))?;

        if self.config.verbose {
            println!("Starting census: {}", self.config);
        }

        let mut passes = Vec::with_capacity(self.config.max_gate_count);

        for gate_count in 1..=self.config.max_gate_count {
            let programs = self.enumerator.count(gate_count) as u64;
            let new_classes = self.run_pass(gate_count)?;

            if self.config.verbose {
                println!(
                    "Budget {}: {} programs, {} new classes ({} total)",
                    gate_count,
                    programs,
                    new_classes,
                    self.classes.len()
                );
                for class in self.classes.values() {
                    println!(
                        "  {} {} {} {}",
                        class.key(),
                        class.size(),
                        class.witness().unwrap_or(""),
                        class.witness().map_or(0, str::len)
                    );
                }
            }

            passes.push(PassRecord {
                gate_count,
                programs,
                new_classes,
                total_classes: self.classes.len(),
            });
        }

        Ok(CensusResult {
            num_qubits: self.config.num_qubits,
            max_gate_count: self.config.max_gate_count,
            total_programs: self.programs_classified,
            elapsed_ms: start_time.elapsed().as_millis() as u64,
            passes,
            classes: self.class_summaries(),
        })
    }

    // ========================================================================
    // Helper Methods
    // ========================================================================

    /// Snapshot of accumulated classes, key ascending
    fn class_summaries(&self) -> Vec<ClassSummary> {
        self.classes
            .values()
            .map(|class| ClassSummary {
                key: class.key().to_string(),
                size: class.size(),
                witness: class.witness().unwrap_or_default().to_string(),
                witness_len: class.witness().map_or(0, str::len),
            })
            .collect()
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get configuration
    pub fn config(&self) -> &CensusConfig {
        &self.config
    }

    /// Get backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Accumulated classes keyed by outcome
    pub fn classes(&self) -> &BTreeMap<String, EquivalenceClass> {
        &self.classes
    }

    /// Number of distinct classes so far
    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    /// Programs classified so far
    pub fn programs_classified(&self) -> u64 {
        self.programs_classified
    }

    /// Clear accumulated classes for a fresh run
    pub fn reset(&mut self) {
        self.classes.clear();
        self.programs_classified = 0;
    }
}

// ============================================================================
// Tests
// ============================================================================
