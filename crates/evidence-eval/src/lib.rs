//! Read-only quality checks over the evidence-ready CSV tables.
//!
//! Checks are informational: findings are counted and reported, never raised.
//! A missing file fails the run; a missing column skips the checks that need it.

pub mod checks;
pub mod engine;
pub mod errors;
pub mod frame;
pub mod model;
pub mod report;
pub mod stats;

pub use engine::EvaluationEngine;
pub use errors::EvalError;
pub use frame::{TableData, load_table};
pub use model::{CheckOutcome, CheckResult, EvaluateOptions, QualityReport};
pub use report::render_report;
pub use stats::{Summary, describe};
