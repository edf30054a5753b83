//! QPEX Grover Search Demo
//!
//! Synthesizes a Grover search circuit for the all-ones state of an
//! n-qubit register and runs it on the statevector simulator.
//!
//! Usage: cargo run --release --example grover_search
//! (prompts for the register size, default 9)

use qpex_backend::prelude::*;
use qpex_synth::prelude::*;
use std::io::{self, Write};

fn main() {
    println!("╔══════════════════════════════════════════════════════════════════════╗");
    println!("║                       QPEX Grover Search Demo                        ║");
    println!("╚══════════════════════════════════════════════════════════════════════╝\n");

    print!("Number of qubits [9]: ");
    io::stdout().flush().expect("Failed to flush stdout");
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read input");
    let num_qubits: usize = line.trim().parse().unwrap_or(9);
    println!();

    let shots = 1000u64;
    let seed = 42u64;
    let marked = "1".repeat(num_qubits);

    println!("Configuration:");
    println!("  • Search register: {} qubits", num_qubits);
    println!("  • Marked state:    |{}>", marked);
    println!("  • Total qubits:    {} (one MCX borrow)", num_qubits + 1);
    println!("  • Iterations:      {}", Grover::num_iterations(num_qubits));
    println!("  • Shots:           {}", shots);
    println!("  • Random seed:     {}", seed);
    println!();

    // =========================================================================
    // Synthesis
    // =========================================================================
    let circuit = Grover::build_circuit(num_qubits).expect("Failed to build circuit");

    println!("Synthesized circuit:");
    println!("  • Total gates: {}", circuit.gate_count());
    println!("  • 1Q gates:    {}", circuit.count_1q());
    println!("  • 2Q gates:    {}", circuit.count_2q());
    println!("  • 3Q gates:    {}", circuit.count_3q());
    println!("  • Depth:       {}", circuit.depth());
    println!();

    println!("OpenQASM 2.0 dump:");
    println!("{}", circuit.to_qasm());
    println!();

    // =========================================================================
    // Execution
    // =========================================================================
    let backend = StatevectorBackend::new(num_qubits + 1).with_seed(seed);
    let result = backend.execute(&circuit, shots).expect("Execution failed");

    if let Some(ms) = result.metadata.execution_time_ms {
        println!("Executed {} shots in {} ms\n", shots, ms);
    }

    // Top outcomes by frequency
    let mut ranked: Vec<(&String, &u64)> = result.counts.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));

    println!("┌──────────────┬──────────┬──────────┐");
    println!("│ Outcome      │ Count    │ Percent  │");
    println!("├──────────────┼──────────┼──────────┤");
    for (key, &count) in ranked.iter().take(10) {
        let pct = 100.0 * count as f64 / shots as f64;
        println!("│ {:>12} │ {:>8} │ {:>7.1}% │", key, count, pct);
    }
    println!("└──────────────┴──────────┴──────────┘\n");

    let p_marked = result.probability(&marked);
    println!("P(|{}>): {:.4}", marked, p_marked);
    println!(
        "Random-guess baseline: {:.4}",
        1.0 / (1u64 << num_qubits) as f64
    );
    println!();

    println!("╔══════════════════════════════════════════════════════════════════════╗");
    println!("║                        Search Complete ✓                             ║");
    println!("╚══════════════════════════════════════════════════════════════════════╝");
}
