//! Table layouts shared by writer and reader.

/// Static description of one CSV table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSpec {
    pub name: &'static str,
    pub columns: &'static [&'static str],
}

impl TableSpec {
    /// File name of the table inside a dataset directory.
    pub fn file_name(&self) -> String {
        format!("{}.csv", self.name)
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.contains(&column)
    }
}

pub const USERS: TableSpec = TableSpec {
    name: "dim_users",
    columns: &[
        "user_id",
        "role",
        "tenure_band",
        "team_id",
        "region",
        "is_synthetic",
    ],
};

pub const TEAMS: TableSpec = TableSpec {
    name: "dim_teams",
    columns: &["team_id", "function", "queue_type", "lead_name"],
};

pub const EXPERIMENTS: TableSpec = TableSpec {
    name: "dim_experiments",
    columns: &[
        "experiment_id",
        "arm_id",
        "arm_name",
        "description",
        "start_date",
        "end_date",
        "targeting_rules",
    ],
};

pub const TASKS: TableSpec = TableSpec {
    name: "fact_tasks",
    columns: &[
        "task_id",
        "period_start",
        "period_end",
        "first_ai_request_at",
        "resolution_at",
        "num_ai_calls",
        "num_escalations",
        "resolution_time_sec",
        "outcome_quality_score",
    ],
};

pub const INTERACTIONS: TableSpec = TableSpec {
    name: "fact_interactions",
    columns: &[
        "request_id",
        "user_id",
        "task_id",
        "session_id",
        "task_type",
        "model_version",
        "prompt_template_id",
        "treatment_arm",
        "response_tokens",
        "latency_ms",
        "action_type",
        "outcome_quality_score",
        "created_at",
    ],
};

/// Tables in the order they are written.
pub const ALL_TABLES: [TableSpec; 5] = [USERS, TEAMS, EXPERIMENTS, TASKS, INTERACTIONS];
