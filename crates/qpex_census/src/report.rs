//! Census reporting
//!
//! Gantree: L4_Census → CensusReporter
//!
//! Provides various output formats for census results.

use crate::classify::CensusResult;
use serde_json;
use std::fmt::Write;

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Markdown table
    Markdown,
    /// JSON
    Json,
    /// CSV
    Csv,
    /// Plain text summary
    Text,
}

/// Census reporter
/// Gantree: CensusReporter // 결과 리포팅
pub struct CensusReporter;

impl CensusReporter {
    // ========================================================================
    // Format Converters
    // ========================================================================

    /// Generate report in specified format
    pub fn report(result: &CensusResult, format: ReportFormat) -> String {
        match format {
            ReportFormat::Markdown => Self::to_markdown(result),
            ReportFormat::Json => Self::to_json(result),
            ReportFormat::Csv => Self::to_csv(result),
            ReportFormat::Text => Self::to_text(result),
        }
    }

    /// Convert result to Markdown tables
    pub fn to_markdown(result: &CensusResult) -> String {
        let mut output = String::new();

        writeln!(output, "# QPEX Census Results\n").unwrap();

        // Summary
        writeln!(output, "## Summary\n").unwrap();
        writeln!(output, "- **Register**: {} qubits", result.num_qubits).unwrap();
        writeln!(output, "- **Gate budget**: {}", result.max_gate_count).unwrap();
        writeln!(
            output,
            "- **Programs classified**: {}",
            result.total_programs
        )
        .unwrap();
        writeln!(
            output,
            "- **Equivalence classes**: {}",
            result.num_classes()
        )
        .unwrap();
        writeln!(
            output,
            "- **Total Time**: {:.2}s\n",
            result.elapsed_ms as f64 / 1000.0
        )
        .unwrap();

        // Pass table
        writeln!(output, "## Passes\n").unwrap();
        writeln!(output, "| Budget | Programs | New | Total |").unwrap();
        writeln!(output, "|--------|----------|-----|-------|").unwrap();

        for pass in &result.passes {
            writeln!(
                output,
                "| {} | {} | {} | {} |",
                pass.gate_count, pass.programs, pass.new_classes, pass.total_classes
            )
            .unwrap();
        }

        // Class table
        writeln!(output, "\n## Classes\n").unwrap();
        writeln!(output, "| Outcome | Programs | Witness | Length |").unwrap();
        writeln!(output, "|---------|----------|---------|--------|").unwrap();

        for class in &result.classes {
            writeln!(
                output,
                "| {} | {} | {} | {} |",
                class.key, class.size, class.witness, class.witness_len
            )
            .unwrap();
        }

        output
    }

    /// Convert result to JSON
    pub fn to_json(result: &CensusResult) -> String {
        let report = serde_json::json!({
            "summary": {
                "num_qubits": result.num_qubits,
                "max_gate_count": result.max_gate_count,
                "total_programs": result.total_programs,
                "num_classes": result.num_classes(),
                "elapsed_ms": result.elapsed_ms,
            },
            "passes": result.passes,
            "classes": result.classes,
        });

        serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Convert class table to CSV
    pub fn to_csv(result: &CensusResult) -> String {
        let mut output = String::new();

        // Header
        writeln!(output, "key,size,witness,witness_len").unwrap();

        // Data
        for class in &result.classes {
            writeln!(
                output,
                "{},{},{},{}",
                class.key, class.size, class.witness, class.witness_len
            )
            .unwrap();
        }

        output
    }

    /// Convert result to plain text summary
    pub fn to_text(result: &CensusResult) -> String {
        let mut output = String::new();

        writeln!(output, "QPEX Census Results").unwrap();
        writeln!(output, "===================\n").unwrap();

        writeln!(output, "Summary:").unwrap();
        writeln!(output, "  Register: {} qubits", result.num_qubits).unwrap();
        writeln!(output, "  Gate budget: {}", result.max_gate_count).unwrap();
        writeln!(
            output,
            "  Programs classified: {}",
            result.total_programs
        )
        .unwrap();
        writeln!(
            output,
            "  Equivalence classes: {}",
            result.num_classes()
        )
        .unwrap();
        writeln!(
            output,
            "  Total time: {:.2}s\n",
            result.elapsed_ms as f64 / 1000.0
        )
        .unwrap();

        writeln!(output, "Passes:").unwrap();
        for pass in &result.passes {
            writeln!(
                output,
                "  budget {}: {} programs, {} new classes ({} total)",
                pass.gate_count, pass.programs, pass.new_classes, pass.total_classes
            )
            .unwrap();
        }
        writeln!(output).unwrap();

        writeln!(output, "Classes:").unwrap();
        for class in &result.classes {
            writeln!(
                output,
                "  {} {} {} {}",
                class.key, class.size, class.witness, class.witness_len
            )
            .unwrap();
        }

        output
    }

    // ========================================================================
    // Specialized Reports
    // ========================================================================

    /// Generate class growth report across gate budgets
    pub fn growth_report(result: &CensusResult) -> String {
        let mut output = String::new();

        writeln!(output, "# Class Growth Analysis\n").unwrap();
        writeln!(
            output,
            "| Budget | Programs | New Classes | Total Classes | Discovery Rate |"
        )
        .unwrap();
        writeln!(
            output,
            "|--------|----------|-------------|---------------|----------------|"
        )
        .unwrap();

        for pass in &result.passes {
            let rate = if pass.programs > 0 {
                pass.new_classes as f64 / pass.programs as f64 * 100.0
            } else {
                0.0
            };
            writeln!(
                output,
                "| {} | {} | {} | {} | {:.3}% |",
                pass.gate_count, pass.programs, pass.new_classes, pass.total_classes, rate
            )
            .unwrap();
        }

        output
    }
}

// ============================================================================
// Tests
// ============================================================================
