use crate::model::{CheckOutcome, CheckResult, QualityReport};

/// Render the console report for a quality run.
pub fn render_report(report: &QualityReport) -> String {
    let mut lines = Vec::new();

    lines.push("=== Basic shape checks ===".to_string());
    for shape in &report.tables {
        lines.push(format!(
            "{}: ({}, {})",
            shape.table, shape.rows, shape.columns
        ));
    }

    lines.push(String::new());
    lines.push("=== Missing key checks ===".to_string());
    for count in &report.missing_keys {
        lines.push(format!(
            "Missing in {}.{}: {}",
            count.table, count.column, count.missing
        ));
    }

    lines.push(String::new());
    lines.push("=== Referential integrity: user_id ===".to_string());
    push_check(&mut lines, &report.user_integrity);

    lines.push(String::new());
    lines.push("=== Referential integrity: task_id ===".to_string());
    push_check(&mut lines, &report.task_integrity);

    lines.push(String::new());
    lines.push("=== Task consistency checks ===".to_string());
    for check in &report.task_consistency {
        push_check(&mut lines, check);
    }

    lines.push(String::new());
    lines.push("=== Label checks ===".to_string());
    for check in &report.label_checks {
        push_check(&mut lines, check);
    }

    lines.push(String::new());
    lines.push("=== Outcome quality score summary ===".to_string());
    match &report.quality {
        Some(quality) => {
            for (label, value) in quality.summary.rows() {
                let value = value
                    .map(|value| format!("{value:.6}"))
                    .unwrap_or_else(|| "NaN".to_string());
                lines.push(format!("{label:<6}{value:>14}"));
            }
            lines.push(format!("Name: {}", quality.column));
            if quality.unparsable > 0 {
                lines.push(format!("Unparsable values: {}", quality.unparsable));
            }
            if quality.out_of_range > 0 {
                lines.push(format!("Values outside [0, 1]: {}", quality.out_of_range));
            }
        }
        None => lines.push("skipped: outcome_quality_score column not present".to_string()),
    }

    if !report.warnings.is_empty() {
        lines.push(String::new());
        lines.push("=== Warnings ===".to_string());
        for warning in &report.warnings {
            lines.push(format!("- {}: {}", warning.path, warning.message));
        }
    }

    lines.push(String::new());
    lines.push("Data quality checks complete.".to_string());
    lines.join("\n")
}

fn push_check(lines: &mut Vec<String>, check: &CheckResult) {
    match &check.outcome {
        CheckOutcome::Ran {
            findings, examples, ..
        } => {
            lines.push(format!("{}: {}", check.description, findings));
            if !examples.is_empty() {
                lines.push(format!("  e.g. {}", examples.join(", ")));
            }
        }
        CheckOutcome::Skipped { reason } => {
            lines.push(format!("{}: skipped ({})", check.description, reason));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::model::{NullCount, QualitySummary, TableShape};
    use crate::stats::describe;

    fn report() -> QualityReport {
        QualityReport {
            data_dir: PathBuf::from("data"),
            tables: vec![TableShape {
                table: "fact_interactions".to_string(),
                rows: 3,
                columns: 13,
            }],
            missing_keys: vec![NullCount {
                table: "fact_interactions".to_string(),
                column: "user_id".to_string(),
                missing: 0,
            }],
            user_integrity: CheckResult::new(
                "user_reference",
                "Interactions with user_id not in dim_users",
                CheckOutcome::Ran {
                    findings: 1,
                    unparsable: 0,
                    examples: vec!["user_99".to_string()],
                },
            ),
            task_integrity: CheckResult::new(
                "task_reference",
                "Interactions with task_id not in fact_tasks",
                CheckOutcome::skipped("column 'task_id' missing in fact_interactions"),
            ),
            task_consistency: Vec::new(),
            label_checks: vec![CheckResult::new(
                "role_label",
                "Users with an unknown role",
                CheckOutcome::Ran {
                    findings: 0,
                    unparsable: 0,
                    examples: Vec::new(),
                },
            )],
            quality: Some(QualitySummary {
                table: "fact_interactions".to_string(),
                column: "outcome_quality_score".to_string(),
                summary: describe(&[0.5, 0.7, 0.9]),
                unparsable: 0,
                out_of_range: 0,
            }),
            warnings: Vec::new(),
        }
    }

    #[test]
    fn renders_sections_in_order() {
        let text = render_report(&report());
        let shape = text.find("=== Basic shape checks ===").expect("shape section");
        let missing = text.find("=== Missing key checks ===").expect("missing section");
        let users = text
            .find("=== Referential integrity: user_id ===")
            .expect("integrity section");
        let quality = text
            .find("=== Outcome quality score summary ===")
            .expect("quality section");
        let labels = text.find("=== Label checks ===").expect("label section");
        assert!(shape < missing && missing < users && users < labels && labels < quality);
        assert!(text.ends_with("Data quality checks complete."));
    }

    #[test]
    fn renders_counts_and_statistics() {
        let text = render_report(&report());
        assert!(text.contains("fact_interactions: (3, 13)"));
        assert!(text.contains("Missing in fact_interactions.user_id: 0"));
        assert!(text.contains("Interactions with user_id not in dim_users: 1"));
        assert!(text.contains("  e.g. user_99"));
        assert!(text.contains("Users with an unknown role: 0"));
        assert!(text.contains("Interactions with task_id not in fact_tasks: skipped"));
        assert!(text.contains("mean        0.700000"));
        assert!(text.contains("count       3.000000"));
    }

    #[test]
    fn notes_skipped_quality_summary() {
        let mut report = report();
        report.quality = None;
        let text = render_report(&report);
        assert!(text.contains("skipped: outcome_quality_score column not present"));
    }
}
