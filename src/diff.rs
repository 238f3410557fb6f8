//! Tolerant diff engine over variable maps
//!
//! Compares a baseline and a candidate [`VariableMap`] and classifies every
//! path as changed, added, or removed. Values that both parse as floats are
//! compared within an absolute tolerance; everything else falls back to
//! exact string comparison.

use crate::document::VariableMap;
use serde::{Deserialize, Serialize};

/// A single difference between two variable maps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiffRecord {
    /// Path present in both maps with values that are not tolerant-equal
    Changed {
        path: String,
        baseline: String,
        candidate: String,
    },
    /// Path present only in the candidate map
    Added { path: String, candidate: String },
    /// Path present only in the baseline map
    Removed { path: String, baseline: String },
}

impl DiffRecord {
    pub fn path(&self) -> &str {
        match self {
            Self::Changed { path, .. } | Self::Added { path, .. } | Self::Removed { path, .. } => {
                path
            }
        }
    }
}

/// Outcome of comparing two variable maps
#[derive(Debug, Clone, PartialEq)]
pub enum DiffResult {
    /// The maps were exactly equal before any tolerance was applied.
    ///
    /// Two maps whose values are numerically equal but formatted differently
    /// (`"1"` vs `"1.0"`) are NOT identical; they produce an empty
    /// `Differences` instead, and callers render the two outcomes with
    /// different messages.
    Identical,
    /// Per-path differences: changed and removed paths in baseline order,
    /// then added paths in candidate order
    Differences(Vec<DiffRecord>),
}

impl DiffResult {
    pub fn is_identical(&self) -> bool {
        matches!(self, Self::Identical)
    }

    /// Records in report order; empty for `Identical`
    pub fn records(&self) -> &[DiffRecord] {
        match self {
            Self::Identical => &[],
            Self::Differences(records) => records,
        }
    }

    pub fn changed_count(&self) -> usize {
        self.records()
            .iter()
            .filter(|r| matches!(r, DiffRecord::Changed { .. }))
            .count()
    }

    pub fn added_count(&self) -> usize {
        self.records()
            .iter()
            .filter(|r| matches!(r, DiffRecord::Added { .. }))
            .count()
    }

    pub fn removed_count(&self) -> usize {
        self.records()
            .iter()
            .filter(|r| matches!(r, DiffRecord::Removed { .. }))
            .count()
    }
}

/// Compare two variable maps under an absolute tolerance.
///
/// Paths whose values are tolerant-equal produce no record. Exact structural
/// equality (no tolerance applied) short-circuits to `Identical`; see
/// [`DiffResult::Identical`] for the distinction.
pub fn diff_maps(baseline: &VariableMap, candidate: &VariableMap, tolerance: f64) -> DiffResult {
    if baseline == candidate {
        return DiffResult::Identical;
    }

    let mut records = Vec::new();

    for (path, baseline_value) in baseline {
        match candidate.get(path) {
            Some(candidate_value) => {
                if !tolerant_eq(baseline_value, candidate_value, tolerance) {
                    records.push(DiffRecord::Changed {
                        path: path.clone(),
                        baseline: baseline_value.clone(),
                        candidate: candidate_value.clone(),
                    });
                }
            }
            None => {
                records.push(DiffRecord::Removed {
                    path: path.clone(),
                    baseline: baseline_value.clone(),
                });
            }
        }
    }

    for (path, candidate_value) in candidate {
        if !baseline.contains_key(path) {
            records.push(DiffRecord::Added {
                path: path.clone(),
                candidate: candidate_value.clone(),
            });
        }
    }

    DiffResult::Differences(records)
}

/// Numeric comparison within `tolerance` when both values parse as floats,
/// exact string comparison otherwise.
///
/// The comparison is strict: values exactly `tolerance` apart count as
/// changed.
pub fn tolerant_eq(a: &str, b: &str, tolerance: f64) -> bool {
    match (try_parse_float(a), try_parse_float(b)) {
        (Some(x), Some(y)) => (x - y).abs() < tolerance,
        _ => a == b,
    }
}

fn try_parse_float(value: &str) -> Option<f64> {
    value.parse::<f64>().ok()
}
