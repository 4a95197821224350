use tracing::{info, warn};

use evidence_core::{
    ActionType, INTERACTIONS, Region, Role, TASKS, TableSpec, TaskType, TenureBand, TreatmentArm,
    USERS,
};

use crate::checks::{
    INTERACTION_KEY_COLUMNS, ai_call_counts, dangling_references, interaction_ordering,
    label_violations, missing_keys, quality_summary, resolution_order, resolution_time,
};
use crate::errors::EvalError;
use crate::frame::{TableData, load_table};
use crate::model::{
    CheckOutcome, CheckResult, EvaluateOptions, QualityReport, TableShape, WarningItem,
};

/// Runs the quality checks over a dataset directory.
#[derive(Debug, Clone)]
pub struct EvaluationEngine {
    options: EvaluateOptions,
}

impl EvaluationEngine {
    pub fn new(options: EvaluateOptions) -> Self {
        Self { options }
    }

    /// Load interactions, tasks and users from the data directory and check
    /// them. Fails only when a file cannot be read.
    pub fn run(&self) -> Result<QualityReport, EvalError> {
        let interactions = self.load(&INTERACTIONS)?;
        let tasks = self.load(&TASKS)?;
        let users = self.load(&USERS)?;

        let report = evaluate_tables(&interactions, &tasks, &users, &self.options);

        info!(
            data_dir = %self.options.data_dir.display(),
            findings = report.total_findings(),
            warnings = report.warnings.len(),
            "quality checks completed"
        );
        Ok(report)
    }

    fn load(&self, spec: &TableSpec) -> Result<TableData, EvalError> {
        let path = self.options.data_dir.join(spec.file_name());
        let table = load_table(&path, spec.name)?;
        let (rows, columns) = table.shape();
        info!(table = spec.name, rows, columns, "table loaded");
        Ok(table)
    }
}

/// Run every check over already loaded tables.
pub fn evaluate_tables(
    interactions: &TableData,
    tasks: &TableData,
    users: &TableData,
    options: &EvaluateOptions,
) -> QualityReport {
    let max_examples = options.max_examples;
    let mut warnings = Vec::new();

    for (table, spec) in [(interactions, &INTERACTIONS), (tasks, &TASKS), (users, &USERS)] {
        warn_on_column_drift(table, spec, &mut warnings);
    }

    let user_integrity = CheckResult::new(
        "user_reference",
        "Interactions with user_id not in dim_users",
        dangling_references(interactions, "user_id", users, "user_id", max_examples),
    );
    let task_integrity = CheckResult::new(
        "task_reference",
        "Interactions with task_id not in fact_tasks",
        dangling_references(interactions, "task_id", tasks, "task_id", max_examples),
    );
    let task_consistency = vec![
        CheckResult::new(
            "ai_call_count",
            "Tasks whose num_ai_calls differs from their interactions",
            ai_call_counts(tasks, interactions, max_examples),
        ),
        CheckResult::new(
            "resolution_order",
            "Tasks resolved before their first AI request",
            resolution_order(tasks, max_examples),
        ),
        CheckResult::new(
            "resolution_time",
            "Tasks whose resolution_time_sec disagrees with their timestamps",
            resolution_time(tasks, max_examples),
        ),
        CheckResult::new(
            "interaction_order",
            "Tasks whose interaction timestamps decrease",
            interaction_ordering(interactions, max_examples),
        ),
    ];

    let label_checks = vec![
        CheckResult::new(
            "role_label",
            "Users with an unknown role",
            label_violations::<Role>(users, "role", max_examples),
        ),
        CheckResult::new(
            "tenure_band_label",
            "Users with an unknown tenure_band",
            label_violations::<TenureBand>(users, "tenure_band", max_examples),
        ),
        CheckResult::new(
            "region_label",
            "Users with an unknown region",
            label_violations::<Region>(users, "region", max_examples),
        ),
        CheckResult::new(
            "task_type_label",
            "Interactions with an unknown task_type",
            label_violations::<TaskType>(interactions, "task_type", max_examples),
        ),
        CheckResult::new(
            "treatment_arm_label",
            "Interactions with an unknown treatment_arm",
            label_violations::<TreatmentArm>(interactions, "treatment_arm", max_examples),
        ),
        CheckResult::new(
            "action_type_label",
            "Interactions with an unknown action_type",
            label_violations::<ActionType>(interactions, "action_type", max_examples),
        ),
    ];

    for check in [&user_integrity, &task_integrity]
        .into_iter()
        .chain(task_consistency.iter())
        .chain(label_checks.iter())
    {
        match &check.outcome {
            CheckOutcome::Skipped { reason } => {
                warn!(check = %check.code, reason = %reason, "check skipped");
                warnings.push(WarningItem {
                    code: "check_skipped".to_string(),
                    path: check.code.clone(),
                    message: reason.clone(),
                });
            }
            CheckOutcome::Ran {
                findings,
                unparsable,
                ..
            } => {
                if *findings > 0 {
                    warn!(check = %check.code, findings, "check found issues");
                }
                if *unparsable > 0 {
                    warnings.push(WarningItem {
                        code: "unparsable_values".to_string(),
                        path: check.code.clone(),
                        message: format!("{unparsable} value(s) could not be parsed"),
                    });
                }
            }
        }
    }

    let quality = quality_summary(interactions);
    if quality.is_none() {
        warn!(table = %interactions.name, "outcome_quality_score missing, summary skipped");
    }

    QualityReport {
        data_dir: options.data_dir.clone(),
        tables: [interactions, tasks, users]
            .into_iter()
            .map(|table| {
                let (rows, columns) = table.shape();
                TableShape {
                    table: table.name.clone(),
                    rows: rows as u64,
                    columns: columns as u64,
                }
            })
            .collect(),
        missing_keys: missing_keys(interactions, &INTERACTION_KEY_COLUMNS),
        user_integrity,
        task_integrity,
        task_consistency,
        label_checks,
        quality,
        warnings,
    }
}

fn warn_on_column_drift(table: &TableData, spec: &TableSpec, warnings: &mut Vec<WarningItem>) {
    let missing = spec
        .columns
        .iter()
        .filter(|column| !table.has_column(**column))
        .copied()
        .collect::<Vec<_>>();
    let extra = table
        .headers
        .iter()
        .filter(|header| !spec.has_column(header.trim()))
        .map(String::as_str)
        .collect::<Vec<_>>();

    if !missing.is_empty() {
        warnings.push(WarningItem {
            code: "missing_columns".to_string(),
            path: table.name.clone(),
            message: format!("missing columns: {}", missing.join(", ")),
        });
    }
    if !extra.is_empty() {
        warnings.push(WarningItem {
            code: "extra_columns".to_string(),
            path: table.name.clone(),
            message: format!("unexpected columns: {}", extra.join(", ")),
        });
    }
}
