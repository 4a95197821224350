use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::stats::Summary;

pub const DEFAULT_DATA_DIR: &str = "synthetic_data";

/// Options for dataset evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluateOptions {
    /// Directory holding the CSV tables.
    pub data_dir: PathBuf,
    /// Limit the number of offending values listed per check.
    pub max_examples: usize,
}

impl Default for EvaluateOptions {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            max_examples: 5,
        }
    }
}

/// Row and column counts of a loaded table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableShape {
    pub table: String,
    pub rows: u64,
    pub columns: u64,
}

/// Missing values in one key column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NullCount {
    pub table: String,
    pub column: String,
    pub missing: u64,
}

/// Outcome of a single check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckOutcome {
    Ran {
        /// Offending rows (or tasks, for per-task checks).
        findings: u64,
        /// Values the check needed but could not parse.
        unparsable: u64,
        #[serde(skip_serializing_if = "Vec::is_empty", default)]
        examples: Vec<String>,
    },
    Skipped {
        reason: String,
    },
}

impl CheckOutcome {
    pub fn skipped(reason: impl Into<String>) -> Self {
        CheckOutcome::Skipped {
            reason: reason.into(),
        }
    }

    pub fn findings(&self) -> Option<u64> {
        match self {
            CheckOutcome::Ran { findings, .. } => Some(*findings),
            CheckOutcome::Skipped { .. } => None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, CheckOutcome::Skipped { .. })
    }
}

/// A named check and its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub code: String,
    pub description: String,
    pub outcome: CheckOutcome,
}

impl CheckResult {
    pub fn new(code: &str, description: &str, outcome: CheckOutcome) -> Self {
        Self {
            code: code.to_string(),
            description: description.to_string(),
            outcome,
        }
    }
}

/// Distribution of `outcome_quality_score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualitySummary {
    pub table: String,
    pub column: String,
    pub summary: Summary,
    pub unparsable: u64,
    /// Parsed values outside [0, 1].
    pub out_of_range: u64,
}

/// Structured warning entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningItem {
    pub code: String,
    pub path: String,
    pub message: String,
}

/// Everything the validator found, in report order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    pub data_dir: PathBuf,
    pub tables: Vec<TableShape>,
    pub missing_keys: Vec<NullCount>,
    pub user_integrity: CheckResult,
    pub task_integrity: CheckResult,
    pub task_consistency: Vec<CheckResult>,
    /// Cells holding a label outside the closed enumerations.
    pub label_checks: Vec<CheckResult>,
    /// `None` when the score column is absent.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub quality: Option<QualitySummary>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub warnings: Vec<WarningItem>,
}

impl QualityReport {
    pub fn shape(&self, table: &str) -> Option<&TableShape> {
        self.tables.iter().find(|shape| shape.table == table)
    }

    pub fn consistency(&self, code: &str) -> Option<&CheckResult> {
        self.task_consistency.iter().find(|check| check.code == code)
    }

    pub fn label_check(&self, code: &str) -> Option<&CheckResult> {
        self.label_checks.iter().find(|check| check.code == code)
    }

    /// Total findings across all checks that ran.
    pub fn total_findings(&self) -> u64 {
        let nulls = self.missing_keys.iter().map(|n| n.missing).sum::<u64>();
        let checks = [&self.user_integrity, &self.task_integrity]
            .into_iter()
            .chain(self.task_consistency.iter())
            .chain(self.label_checks.iter())
            .filter_map(|check| check.outcome.findings())
            .sum::<u64>();
        let out_of_range = self.quality.as_ref().map_or(0, |q| q.out_of_range);
        nulls + checks + out_of_range
    }
}
