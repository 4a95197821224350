//! Row types, one per table. Field order is the column order on disk.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::format;
use crate::types::{ActionType, QueueType, Region, Role, TaskType, TenureBand, TreatmentArm};

/// A support user (`dim_users`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub role: Role,
    pub tenure_band: TenureBand,
    pub team_id: String,
    pub region: Region,
    pub is_synthetic: bool,
}

/// A support team (`dim_teams`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub team_id: String,
    pub function: String,
    pub queue_type: QueueType,
    pub lead_name: String,
}

/// One arm of an experiment (`dim_experiments`), keyed by
/// (`experiment_id`, `arm_id`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentArm {
    pub experiment_id: String,
    pub arm_id: TreatmentArm,
    pub arm_name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub targeting_rules: String,
}

/// A unit of support work (`fact_tasks`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub task_id: String,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    #[serde(with = "format::timestamp")]
    pub first_ai_request_at: NaiveDateTime,
    #[serde(with = "format::timestamp")]
    pub resolution_at: NaiveDateTime,
    pub num_ai_calls: u32,
    pub num_escalations: u32,
    pub resolution_time_sec: i64,
    #[serde(with = "format::score")]
    pub outcome_quality_score: f64,
}

/// A single model request made while working a task (`fact_interactions`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub request_id: String,
    pub user_id: String,
    pub task_id: String,
    pub session_id: String,
    pub task_type: TaskType,
    pub model_version: String,
    pub prompt_template_id: String,
    pub treatment_arm: TreatmentArm,
    pub response_tokens: u32,
    pub latency_ms: u32,
    pub action_type: ActionType,
    #[serde(with = "format::score")]
    pub outcome_quality_score: f64,
    #[serde(with = "format::timestamp")]
    pub created_at: NaiveDateTime,
}
