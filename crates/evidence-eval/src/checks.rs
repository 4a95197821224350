//! Individual checks. Each returns a [`CheckOutcome`] and never fails: an
//! absent column yields `Skipped`, an unreadable value is counted as
//! unparsable.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::str::FromStr;

use chrono::NaiveDateTime;

use evidence_core::format::parse_timestamp;

use crate::frame::{TableData, is_null};
use crate::model::{CheckOutcome, NullCount, QualitySummary};
use crate::stats::describe;

pub const INTERACTION_KEY_COLUMNS: [&str; 4] = ["request_id", "user_id", "task_id", "created_at"];
pub const QUALITY_COLUMN: &str = "outcome_quality_score";

const NULL_EXAMPLE: &str = "<null>";

/// Null counts for each of `columns` present in `table`.
pub fn missing_keys(table: &TableData, columns: &[&str]) -> Vec<NullCount> {
    columns
        .iter()
        .filter_map(|column| {
            table.null_count(column).map(|missing| NullCount {
                table: table.name.clone(),
                column: column.to_string(),
                missing,
            })
        })
        .collect()
}

/// Rows of `child` whose `child_column` value has no match in
/// `parent.parent_column`. Null child values count as dangling.
pub fn dangling_references(
    child: &TableData,
    child_column: &str,
    parent: &TableData,
    parent_column: &str,
    max_examples: usize,
) -> CheckOutcome {
    let Some(child_values) = child.column(child_column) else {
        return missing_column(child, child_column);
    };
    let Some(parent_values) = parent.column(parent_column) else {
        return missing_column(parent, parent_column);
    };

    let parent_keys = parent_values.into_iter().flatten().collect::<HashSet<_>>();
    let mut examples = Examples::new(max_examples);
    let mut findings = 0u64;
    for value in child_values {
        match value {
            Some(key) if parent_keys.contains(key) => {}
            Some(key) => {
                findings += 1;
                examples.push(key);
            }
            None => {
                findings += 1;
                examples.push(NULL_EXAMPLE);
            }
        }
    }

    CheckOutcome::Ran {
        findings,
        unparsable: 0,
        examples: examples.into_vec(),
    }
}

/// Cells of `column` that are not a label of `T`. Nulls count as violations.
pub fn label_violations<T: FromStr>(
    table: &TableData,
    column: &str,
    max_examples: usize,
) -> CheckOutcome {
    let Some(values) = table.column(column) else {
        return missing_column(table, column);
    };

    let mut examples = Examples::new(max_examples);
    let mut findings = 0u64;
    for value in values {
        match value {
            Some(label) if label.trim().parse::<T>().is_ok() => {}
            Some(label) => {
                findings += 1;
                examples.push(label);
            }
            None => {
                findings += 1;
                examples.push(NULL_EXAMPLE);
            }
        }
    }

    CheckOutcome::Ran {
        findings,
        unparsable: 0,
        examples: examples.into_vec(),
    }
}

/// Tasks whose `num_ai_calls` differs from the number of interactions that
/// reference them.
pub fn ai_call_counts(
    tasks: &TableData,
    interactions: &TableData,
    max_examples: usize,
) -> CheckOutcome {
    let Some(task_ids) = tasks.column("task_id") else {
        return missing_column(tasks, "task_id");
    };
    let Some(declared) = tasks.column("num_ai_calls") else {
        return missing_column(tasks, "num_ai_calls");
    };
    let Some(interaction_tasks) = interactions.column("task_id") else {
        return missing_column(interactions, "task_id");
    };

    let mut counted: HashMap<&str, u64> = HashMap::new();
    for task_id in interaction_tasks.into_iter().flatten() {
        *counted.entry(task_id).or_insert(0) += 1;
    }

    let mut examples = Examples::new(max_examples);
    let mut findings = 0u64;
    let mut unparsable = 0u64;
    for (task_id, declared) in task_ids.into_iter().zip(declared) {
        let Some(task_id) = task_id else {
            continue;
        };
        let Some(declared) = declared.and_then(|value| value.trim().parse::<u64>().ok()) else {
            unparsable += 1;
            continue;
        };
        if counted.get(task_id).copied().unwrap_or(0) != declared {
            findings += 1;
            examples.push(task_id);
        }
    }

    CheckOutcome::Ran {
        findings,
        unparsable,
        examples: examples.into_vec(),
    }
}

/// Tasks resolved before their first model request.
pub fn resolution_order(tasks: &TableData, max_examples: usize) -> CheckOutcome {
    task_windows(tasks, &[], max_examples, |first, resolved, _| resolved < first)
}

/// Tasks whose `resolution_time_sec` is not the whole-second difference of
/// their timestamps.
pub fn resolution_time(tasks: &TableData, max_examples: usize) -> CheckOutcome {
    task_windows(
        tasks,
        &["resolution_time_sec"],
        max_examples,
        |first, resolved, extra| {
            extra
                .first()
                .is_some_and(|declared| *declared != (resolved - first).num_seconds())
        },
    )
}

/// Tasks whose interactions go back in time, in file order.
pub fn interaction_ordering(interactions: &TableData, max_examples: usize) -> CheckOutcome {
    let Some(task_ids) = interactions.column("task_id") else {
        return missing_column(interactions, "task_id");
    };
    let Some(created) = interactions.column("created_at") else {
        return missing_column(interactions, "created_at");
    };

    let mut last_seen: HashMap<&str, NaiveDateTime> = HashMap::new();
    let mut offending = BTreeSet::new();
    let mut unparsable = 0u64;
    for (task_id, created_at) in task_ids.into_iter().zip(created) {
        let Some(task_id) = task_id else {
            continue;
        };
        let Some(created_at) = created_at.and_then(|value| parse_timestamp(value).ok()) else {
            unparsable += 1;
            continue;
        };
        if let Some(previous) = last_seen.insert(task_id, created_at)
            && created_at < previous
        {
            offending.insert(task_id);
        }
    }

    CheckOutcome::Ran {
        findings: offending.len() as u64,
        unparsable,
        examples: offending
            .into_iter()
            .take(max_examples)
            .map(str::to_string)
            .collect(),
    }
}

/// Descriptive statistics of [`QUALITY_COLUMN`], or `None` when it is absent.
pub fn quality_summary(table: &TableData) -> Option<QualitySummary> {
    let values = table.column(QUALITY_COLUMN)?;

    let mut parsed = Vec::with_capacity(values.len());
    let mut unparsable = 0u64;
    for value in values.into_iter().flatten() {
        match value.trim().parse::<f64>() {
            Ok(score) if score.is_finite() => parsed.push(score),
            _ => unparsable += 1,
        }
    }
    let out_of_range = parsed
        .iter()
        .filter(|score| !(0.0..=1.0).contains(*score))
        .count() as u64;

    Some(QualitySummary {
        table: table.name.clone(),
        column: QUALITY_COLUMN.to_string(),
        summary: describe(&parsed),
        unparsable,
        out_of_range,
    })
}

/// Shared walk over task rows with parsed request/resolution timestamps and
/// optional extra integer columns.
fn task_windows<F>(
    tasks: &TableData,
    extra_columns: &[&str],
    max_examples: usize,
    is_finding: F,
) -> CheckOutcome
where
    F: Fn(NaiveDateTime, NaiveDateTime, &[i64]) -> bool,
{
    let mut required = vec!["task_id", "first_ai_request_at", "resolution_at"];
    required.extend_from_slice(extra_columns);
    if let Some(column) = required.iter().find(|column| !tasks.has_column(**column)) {
        return missing_column(tasks, column);
    }

    let column = |name: &str| tasks.column_index(name).unwrap_or_default();
    let task_idx = column("task_id");
    let first_idx = column("first_ai_request_at");
    let resolved_idx = column("resolution_at");
    let extra_idx = extra_columns.iter().map(|name| column(*name)).collect::<Vec<_>>();

    let mut examples = Examples::new(max_examples);
    let mut findings = 0u64;
    let mut unparsable = 0u64;
    for row in &tasks.rows {
        let cell = |idx: usize| row.get(idx).map(String::as_str).unwrap_or_default();
        let first = parse_timestamp(cell(first_idx)).ok();
        let resolved = parse_timestamp(cell(resolved_idx)).ok();
        let extra = extra_idx
            .iter()
            .map(|idx| cell(*idx).trim().parse::<i64>().ok())
            .collect::<Option<Vec<_>>>();

        let (Some(first), Some(resolved), Some(extra)) = (first, resolved, extra) else {
            unparsable += 1;
            continue;
        };
        if is_finding(first, resolved, &extra) {
            findings += 1;
            let task_id = cell(task_idx);
            examples.push(if is_null(task_id) { NULL_EXAMPLE } else { task_id });
        }
    }

    CheckOutcome::Ran {
        findings,
        unparsable,
        examples: examples.into_vec(),
    }
}

fn missing_column(table: &TableData, column: &str) -> CheckOutcome {
    CheckOutcome::skipped(format!("column '{column}' missing in {}", table.name))
}

/// Distinct example values, capped.
struct Examples {
    limit: usize,
    seen: HashSet<String>,
    values: Vec<String>,
}

impl Examples {
    fn new(limit: usize) -> Self {
        Self {
            limit,
            seen: HashSet::new(),
            values: Vec::new(),
        }
    }

    fn push(&mut self, value: &str) {
        if self.values.len() < self.limit && self.seen.insert(value.to_string()) {
            self.values.push(value.to_string());
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use evidence_core::{ActionType, Role};

    use super::*;

    fn table(name: &str, headers: &[&str], rows: &[&[&str]]) -> TableData {
        TableData::new(
            name,
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|row| row.iter().map(|v| v.to_string()).collect())
                .collect(),
        )
    }

    fn users() -> TableData {
        table("dim_users", &["user_id"], &[&["user_1"], &["user_2"]])
    }

    #[test]
    fn counts_dangling_and_null_references() {
        let interactions = table(
            "fact_interactions",
            &["request_id", "user_id"],
            &[&["r0", "user_1"], &["r1", "user_9"], &["r2", ""], &["r3", "user_9"]],
        );

        let outcome = dangling_references(&interactions, "user_id", &users(), "user_id", 5);
        assert_eq!(
            outcome,
            CheckOutcome::Ran {
                findings: 3,
                unparsable: 0,
                examples: vec!["user_9".to_string(), "<null>".to_string()],
            }
        );
    }

    #[test]
    fn dangling_check_skips_without_column() {
        let interactions = table("fact_interactions", &["request_id"], &[&["r0"]]);
        let outcome = dangling_references(&interactions, "user_id", &users(), "user_id", 5);
        assert_eq!(
            outcome,
            CheckOutcome::skipped("column 'user_id' missing in fact_interactions")
        );
    }

    #[test]
    fn missing_keys_only_reports_present_columns() {
        let interactions = table(
            "fact_interactions",
            &["request_id", "user_id"],
            &[&["r0", ""], &["", "user_1"], &["r2", ""]],
        );
        let counts = missing_keys(&interactions, &INTERACTION_KEY_COLUMNS);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].column, "request_id");
        assert_eq!(counts[0].missing, 1);
        assert_eq!(counts[1].column, "user_id");
        assert_eq!(counts[1].missing, 2);
    }

    #[test]
    fn flags_ai_call_mismatches() {
        let tasks = table(
            "fact_tasks",
            &["task_id", "num_ai_calls"],
            &[&["task_1", "2"], &["task_2", "1"], &["task_3", "x"]],
        );
        let interactions = table(
            "fact_interactions",
            &["task_id"],
            &[&["task_1"], &["task_1"], &["task_2"], &["task_2"]],
        );

        let outcome = ai_call_counts(&tasks, &interactions, 5);
        assert_eq!(
            outcome,
            CheckOutcome::Ran {
                findings: 1,
                unparsable: 1,
                examples: vec!["task_2".to_string()],
            }
        );
    }

    #[test]
    fn flags_resolution_before_request_and_bad_durations() {
        let tasks = table(
            "fact_tasks",
            &["task_id", "first_ai_request_at", "resolution_at", "resolution_time_sec"],
            &[
                &["task_1", "2025-01-01T00:00:00", "2025-01-01T00:10:00", "600"],
                &["task_2", "2025-01-01T01:00:00", "2025-01-01T00:30:00", "-1800"],
                &["task_3", "2025-01-01T00:00:00", "2025-01-01T00:10:00", "60"],
                &["task_4", "not a time", "2025-01-01T00:10:00", "60"],
            ],
        );

        let order = resolution_order(&tasks, 5);
        assert_eq!(order.findings(), Some(1));
        assert!(matches!(order, CheckOutcome::Ran { unparsable: 1, .. }));

        let time = resolution_time(&tasks, 5);
        assert_eq!(
            time,
            CheckOutcome::Ran {
                findings: 1,
                unparsable: 1,
                examples: vec!["task_3".to_string()],
            }
        );
    }

    #[test]
    fn resolution_time_skips_without_duration_column() {
        let tasks = table(
            "fact_tasks",
            &["task_id", "first_ai_request_at", "resolution_at"],
            &[],
        );
        assert!(resolution_time(&tasks, 5).is_skipped());
        assert_eq!(resolution_order(&tasks, 5).findings(), Some(0));
    }

    #[test]
    fn names_null_task_ids_in_examples() {
        let tasks = table(
            "fact_tasks",
            &["task_id", "first_ai_request_at", "resolution_at"],
            &[&["", "2025-01-01T01:00:00", "2025-01-01T00:30:00"]],
        );
        assert_eq!(
            resolution_order(&tasks, 5),
            CheckOutcome::Ran {
                findings: 1,
                unparsable: 0,
                examples: vec!["<null>".to_string()],
            }
        );
    }

    #[test]
    fn counts_unknown_labels() {
        let interactions = table(
            "fact_interactions",
            &["action_type"],
            &[&["accept"], &["escalate"], &["shrug"], &[""], &["shrug"]],
        );
        assert_eq!(
            label_violations::<ActionType>(&interactions, "action_type", 5),
            CheckOutcome::Ran {
                findings: 3,
                unparsable: 0,
                examples: vec!["shrug".to_string(), "<null>".to_string()],
            }
        );
        assert!(label_violations::<Role>(&interactions, "role", 5).is_skipped());
    }

    #[test]
    fn flags_tasks_going_back_in_time() {
        let interactions = table(
            "fact_interactions",
            &["task_id", "created_at"],
            &[
                &["task_1", "2025-01-01T00:05:00"],
                &["task_2", "2025-01-02T00:05:00"],
                &["task_1", "2025-01-01T00:03:00"],
                &["task_2", "2025-01-02T00:05:00"],
                &["task_1", "2025-01-01T00:01:00"],
            ],
        );

        let outcome = interaction_ordering(&interactions, 5);
        assert_eq!(
            outcome,
            CheckOutcome::Ran {
                findings: 1,
                unparsable: 0,
                examples: vec!["task_1".to_string()],
            }
        );
    }

    #[test]
    fn summarises_quality_scores() {
        let interactions = table(
            "fact_interactions",
            &["outcome_quality_score"],
            &[&["0.5"], &["0.7"], &[""], &["oops"], &["1.4"]],
        );

        let quality = quality_summary(&interactions).expect("column present");
        assert_eq!(quality.summary.count, 3);
        assert_eq!(quality.unparsable, 1);
        assert_eq!(quality.out_of_range, 1);

        let without = table("fact_interactions", &["request_id"], &[&["r0"]]);
        assert!(quality_summary(&without).is_none());
    }
}
