//! QPEX Program Census Demo
//!
//! Enumerates every X/CCX program up to a gate budget, classifies each by
//! its measured outcome, and prints the accumulated equivalence classes.
//!
//! Usage: cargo run --release --example program_census -- [num_qubits] [max_gate_count]

use qpex_backend::prelude::*;
use qpex_census::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let num_qubits: usize = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(4);
    let max_gate_count: usize = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(3);
    let seed = 42u64;

    println!("╔══════════════════════════════════════════════════════════════════════╗");
    println!("║                       QPEX Program Census Demo                       ║");
    println!("╚══════════════════════════════════════════════════════════════════════╝\n");

    let config = CensusConfig::for_qubits(num_qubits)
        .with_max_gate_count(max_gate_count)
        .with_seed(seed)
        .with_verbose(true);

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    println!("Configuration:");
    println!("  • Register:       {} qubits", config.num_qubits);
    println!("  • Gate budget:    {}", config.max_gate_count);
    println!("  • Alphabet size:  {}", config.alphabet_size());
    println!("  • Total programs: {}", config.total_programs());
    println!("  • Random seed:    {}", seed);
    println!();

    // =========================================================================
    // Backend
    // =========================================================================
    let backend = match config.seed {
        Some(seed) => StatevectorBackend::new(config.num_qubits).with_seed(seed),
        None => StatevectorBackend::new(config.num_qubits),
    };

    // =========================================================================
    // Census
    // =========================================================================
    let mut census = Census::new(config, backend);
    let result = census.run().expect("Census failed");
    println!();

    println!("┌────────┬──────────┬─────────┬─────────┐");
    println!("│ Budget │ Programs │ New     │ Classes │");
    println!("├────────┼──────────┼─────────┼─────────┤");
    for pass in &result.passes {
        println!(
            "│ {:>6} │ {:>8} │ {:>7} │ {:>7} │",
            pass.gate_count, pass.programs, pass.new_classes, pass.total_classes
        );
    }
    println!("└────────┴──────────┴─────────┴─────────┘\n");

    println!("┌────────────┬──────────┬────────────┬─────┐");
    println!("│ Outcome    │ Programs │ Witness    │ Len │");
    println!("├────────────┼──────────┼────────────┼─────┤");
    for class in &result.classes {
        println!(
            "│ {:>10} │ {:>8} │ {:>10} │ {:>3} │",
            class.key, class.size, class.witness, class.witness_len
        );
    }
    println!("└────────────┴──────────┴────────────┴─────┘\n");

    println!(
        "Classified {} programs into {} classes in {} ms",
        result.total_programs,
        result.num_classes(),
        result.elapsed_ms
    );

    if let Some(largest) = result.largest_class() {
        println!(
            "Largest class: {} with {} programs (witness {})",
            largest.key, largest.size, largest.witness
        );
    }
    println!();

    println!("╔══════════════════════════════════════════════════════════════════════╗");
    println!("║                        Census Complete ✓                             ║");
    println!("╚══════════════════════════════════════════════════════════════════════╝");
}
