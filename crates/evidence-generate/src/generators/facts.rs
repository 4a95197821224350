use chrono::{NaiveDate, NaiveTime, TimeDelta};
use rand::Rng;

use evidence_core::format::round_score;
use evidence_core::{ActionType, Interaction, Task, TaskType, TreatmentArm, User};

use super::pick;
use crate::errors::GenerationError;

const MODEL_VERSION: &str = "gpt-x.y";
const PROMPT_TEMPLATE_ID: &str = "triage_v1";

const MAX_INTERACTIONS_PER_TASK: u32 = 4;
const QUALITY_MIN: f64 = 0.4;
const QUALITY_MAX: f64 = 0.95;
const LATENCY_MS: (u32, u32) = (200, 1500);
const RESPONSE_TOKENS: (u32, u32) = (50, 200);
const STEP_MINUTES: (i64, i64) = (1, 30);
const RESOLUTION_MINUTES: (i64, i64) = (5, 60);

/// Tasks together with the interactions generated for them.
#[derive(Debug, Clone, Default)]
pub struct TaskRows {
    pub tasks: Vec<Task>,
    pub interactions: Vec<Interaction>,
}

/// Build `num_tasks` tasks and their interaction sequences.
///
/// Every interaction references a user from `users`, interaction timestamps
/// advance within a task, and the task quality score is shared by all of its
/// interactions.
pub fn tasks_and_interactions<R: Rng + ?Sized>(
    rng: &mut R,
    users: &[User],
    num_tasks: u32,
    base_date: NaiveDate,
    window_days: u32,
) -> Result<TaskRows, GenerationError> {
    if users.is_empty() {
        return Err(GenerationError::InvalidOptions(
            "cannot generate interactions without users".to_string(),
        ));
    }

    let start_of_window = base_date.and_time(NaiveTime::MIN);
    let mut rows = TaskRows::default();

    for t in 1..=num_tasks {
        let task_id = format!("task_{t}");
        // Creator is drawn to keep the stream aligned with the task layout; it
        // is not written anywhere.
        let _creator = pick(rng, users);
        let day_offset = rng.random_range(0..=window_days);
        let created_at = start_of_window
            .checked_add_signed(TimeDelta::days(i64::from(day_offset)))
            .ok_or_else(|| {
                GenerationError::InvalidOptions(format!(
                    "window of {window_days} days overflows the calendar"
                ))
            })?;
        let num_interactions = rng.random_range(1..=MAX_INTERACTIONS_PER_TASK);
        let quality = round_score(rng.random_range(QUALITY_MIN..=QUALITY_MAX));

        let mut escalations = 0u32;
        let mut last_time = created_at;

        for k in 0..num_interactions {
            let user = pick(rng, users);
            let treatment_arm = *pick(rng, &TreatmentArm::ALL);
            let latency_ms = rng.random_range(LATENCY_MS.0..=LATENCY_MS.1);
            let action_type = *pick(rng, &ActionType::ALL);
            if action_type.is_escalation() {
                escalations += 1;
            }

            last_time += TimeDelta::minutes(rng.random_range(STEP_MINUTES.0..=STEP_MINUTES.1));
            let task_type = *pick(rng, &TaskType::ALL);
            let response_tokens = rng.random_range(RESPONSE_TOKENS.0..=RESPONSE_TOKENS.1);

            rows.interactions.push(Interaction {
                request_id: format!("{task_id}_req_{k}"),
                user_id: user.user_id.clone(),
                task_id: task_id.clone(),
                session_id: format!("session_{t}"),
                task_type,
                model_version: MODEL_VERSION.to_string(),
                prompt_template_id: PROMPT_TEMPLATE_ID.to_string(),
                treatment_arm,
                response_tokens,
                latency_ms,
                action_type,
                outcome_quality_score: quality,
                created_at: last_time,
            });
        }

        let resolution_at = last_time
            + TimeDelta::minutes(rng.random_range(RESOLUTION_MINUTES.0..=RESOLUTION_MINUTES.1));
        let resolution_time_sec = (resolution_at - created_at).num_seconds();

        rows.tasks.push(Task {
            task_id,
            period_start: created_at.date(),
            period_end: resolution_at.date(),
            first_ai_request_at: created_at,
            resolution_at,
            num_ai_calls: num_interactions,
            num_escalations: escalations,
            resolution_time_sec,
            outcome_quality_score: quality,
        });
    }

    Ok(rows)
}
