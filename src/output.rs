//! Output formatting utilities

use crate::diff::{DiffRecord, DiffResult};
use crate::document::VariableMap;
use crate::error::Result;

/// Pretty printer for bufdiff output
pub struct PrettyPrinter;

impl PrettyPrinter {
    /// Print diff results
    pub fn print_diff_result(baseline: &str, candidate: &str, result: &DiffResult) {
        println!("🔍 Diff Results: {} → {}", baseline, candidate);

        match result {
            DiffResult::Identical => {
                println!("└─ ✅ Documents are identical");
            }
            DiffResult::Differences(records) if records.is_empty() => {
                println!("└─ ✅ No differences within tolerance");
            }
            DiffResult::Differences(records) => {
                // The summary line closes the tree, so every record is a branch
                for record in records {
                    let prefix = "├─";
                    match record {
                        DiffRecord::Changed {
                            path,
                            baseline,
                            candidate,
                        } => {
                            println!("{} ~ {}: '{}' → '{}'", prefix, path, baseline, candidate);
                        }
                        DiffRecord::Added { path, candidate } => {
                            println!("{} + {}: '{}'", prefix, path, candidate);
                        }
                        DiffRecord::Removed { path, baseline } => {
                            println!("{} - {}: '{}'", prefix, path, baseline);
                        }
                    }
                }
                println!(
                    "└─ ❌ {} changed, {} added, {} removed",
                    result.changed_count(),
                    result.added_count(),
                    result.removed_count()
                );
            }
        }
    }

    /// Print the variables declared in a document
    pub fn print_variables(document: &str, variables: &VariableMap) {
        if variables.is_empty() {
            println!("No variables found in {}.", document);
            return;
        }

        println!("📄 Variables in {}: {}", document, variables.len());
        for (i, (path, value)) in variables.iter().enumerate() {
            let prefix = if i == variables.len() - 1 { "└─" } else { "├─" };
            println!("{} {} = '{}'", prefix, path, value);
        }
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format any serializable data as JSON
    pub fn format<T: serde::Serialize + ?Sized>(data: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }

    /// Format diff results as JSON
    pub fn format_diff_result(
        baseline: &str,
        candidate: &str,
        tolerance: f64,
        result: &DiffResult,
    ) -> Result<String> {
        let json = serde_json::json!({
            "baseline": baseline,
            "candidate": candidate,
            "tolerance": tolerance,
            "identical": result.is_identical(),
            "changed": result.changed_count(),
            "added": result.added_count(),
            "removed": result.removed_count(),
            "records": result.records(),
        });
        Self::format(&json)
    }

    /// Format a variable map as JSON
    pub fn format_variables(document: &str, variables: &VariableMap) -> Result<String> {
        let json = serde_json::json!({
            "document": document,
            "variable_count": variables.len(),
            "variables": variables,
        });
        Self::format(&json)
    }
}
