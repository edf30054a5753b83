//! Statevector simulator backend for QPEX
//!
//! Gantree: L2_Backend → StatevectorBackend
//!
//! Ideal statevector simulation of the QPEX gate set (H, X, CX, CCX).
//! Each shot evolves the full state from |00...0⟩ and samples one
//! outcome over the circuit's measured qubits.

use crate::execution::{Backend, ExecutionMetadata, ExecutionResult};
use num_complex::Complex64;
use qpex_core::{Circuit, Counts, Gate, QpexError, QpexResult, QubitId};
use rand::prelude::*;
use rand::rngs::StdRng;
use std::collections::HashMap;
use std::time::Instant;

/// Ideal statevector simulator
/// Gantree: StatevectorBackend // 시뮬레이터 구현
pub struct StatevectorBackend {
    /// Backend name
    name: String,

    /// Number of qubits
    num_qubits: usize,

    /// Random seed
    seed: Option<u64>,
}

impl StatevectorBackend {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create new statevector backend
    pub fn new(num_qubits: usize) -> Self {
        Self {
            name: "qpex_statevector".to_string(),
            num_qubits,
            seed: None,
        }
    }

    /// Set seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set backend name
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    // ========================================================================
    // Simulation
    // ========================================================================

    /// Simulate circuit and return counts
    fn simulate(
        &self,
        circuit: &Circuit,
        measured: &[QubitId],
        shots: u64,
        rng: &mut StdRng,
    ) -> Counts {
        let mut counts: Counts = HashMap::new();

        for _ in 0..shots {
            let bitstring = self.simulate_single_shot(circuit, measured, rng);
            *counts.entry(bitstring).or_insert(0) += 1;
        }

        counts
    }

    /// Simulate a single shot
    fn simulate_single_shot(
        &self,
        circuit: &Circuit,
        measured: &[QubitId],
        rng: &mut StdRng,
    ) -> String {
        let n = circuit.num_qubits();
        let mut state = vec![Complex64::new(0.0, 0.0); 1 << n];
        state[0] = Complex64::new(1.0, 0.0); // |00...0⟩

        // Apply gates
        for gate in circuit.gates() {
            self.apply_gate(&mut state, gate, n);
        }

        // Sample an outcome over the measured register
        self.measure_state(&state, measured, rng)
    }

    /// Apply a gate to the state
    fn apply_gate(&self, state: &mut [Complex64], gate: &Gate, n: usize) {
        match gate {
            Gate::H(q) => self.apply_h(state, *q, n),
            Gate::X(q) => self.apply_x(state, *q, n),
            Gate::Cnot(c, t) => self.apply_cnot(state, *c, *t, n),
            Gate::Ccx(c1, c2, t) => self.apply_ccx(state, *c1, *c2, *t, n),
            _ => {} // Barrier, Measure - no state change needed here
        }
    }

    /// Sample one outcome and render it over the measured qubits
    ///
    /// The leftmost character is the highest measured qubit (MSB-first),
    /// matching hardware-style counts keys.
    fn measure_state(&self, state: &[Complex64], measured: &[QubitId], rng: &mut StdRng) -> String {
        // Calculate probabilities
        let probs: Vec<f64> = state.iter().map(|c| c.norm_sqr()).collect();

        // Sample
        let mut cumsum = 0.0;
        let r: f64 = rng.gen();
        let mut outcome = probs.len() - 1;

        for (i, &p) in probs.iter().enumerate() {
            cumsum += p;
            if r < cumsum {
                outcome = i;
                break;
            }
        }

        // measured is sorted ascending; read it back down for MSB-first
        measured
            .iter()
            .rev()
            .map(|&q| if (outcome >> q) & 1 == 1 { '1' } else { '0' })
            .collect()
    }

    // ========================================================================
    // Single-Qubit Gates
    // ========================================================================

    fn apply_h(&self, state: &mut [Complex64], q: usize, n: usize) {
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        self.apply_single_qubit_gate(state, q, n, |a, b| {
            let new_a = (a + b) * sqrt2_inv;
            let new_b = (a - b) * sqrt2_inv;
            (new_a, new_b)
        });
    }

    fn apply_x(&self, state: &mut [Complex64], q: usize, n: usize) {
        self.apply_single_qubit_gate(state, q, n, |a, b| (b, a));
    }

    fn apply_single_qubit_gate<F>(&self, state: &mut [Complex64], q: usize, n: usize, f: F)
    where
        F: Fn(Complex64, Complex64) -> (Complex64, Complex64),
    {
        let mask = 1 << q;
        for i in 0..(1 << n) {
            if i & mask == 0 {
                let j = i | mask;
                let (new_i, new_j) = f(state[i], state[j]);
                state[i] = new_i;
                state[j] = new_j;
            }
        }
    }

    // ========================================================================
    // Multi-Qubit Gates
    // ========================================================================

    fn apply_cnot(&self, state: &mut [Complex64], control: usize, target: usize, n: usize) {
        let control_mask = 1 << control;
        let target_mask = 1 << target;

        for i in 0..(1 << n) {
            if (i & control_mask) != 0 && (i & target_mask) == 0 {
                let j = i | target_mask;
                state.swap(i, j);
            }
        }
    }

    fn apply_ccx(&self, state: &mut [Complex64], c1: usize, c2: usize, target: usize, n: usize) {
        let c1_mask = 1 << c1;
        let c2_mask = 1 << c2;
        let target_mask = 1 << target;

        for i in 0..(1 << n) {
            if (i & c1_mask) != 0 && (i & c2_mask) != 0 && (i & target_mask) == 0 {
                let j = i | target_mask;
                state.swap(i, j);
            }
        }
    }
}

impl Backend for StatevectorBackend {
    fn name(&self) -> &str {
        &self.name
    }

    fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    fn execute(&self, circuit: &Circuit, shots: u64) -> QpexResult<ExecutionResult> {
        if circuit.num_qubits() > self.num_qubits {
            return Err(QpexError::QubitOutOfRange {
                qubit: circuit.num_qubits(),
                max: self.num_qubits,
            });
        }
        if shots == 0 || shots > self.max_shots() {
            return Err(QpexError::ShotsOutOfRange(shots, 1, self.max_shots()));
        }

        let started = Instant::now();
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        // Circuits without explicit measurement read out every qubit
        let mut measured = circuit.measured_qubits();
        if measured.is_empty() {
            measured = (0..circuit.num_qubits()).collect();
        }

        let counts = self.simulate(circuit, &measured, shots, &mut rng);

        Ok(ExecutionResult {
            counts,
            shots,
            metadata: ExecutionMetadata {
                backend: self.name.clone(),
                execution_time_ms: Some(started.elapsed().as_millis() as u64),
                simulated: true,
                seed: self.seed,
            },
        })
    }

    fn is_simulator(&self) -> bool {
        true
    }
}

// ============================================================================
// Tests
// ============================================================================
