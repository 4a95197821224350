use std::collections::{HashMap, HashSet};

use evidence_generate::{GenerateOptions, generate_dataset};

fn dataset() -> evidence_generate::Dataset {
    generate_dataset(&GenerateOptions::default()).expect("generate dataset")
}

#[test]
fn interactions_reference_existing_users_and_tasks() {
    let data = dataset();
    let user_ids = data
        .users
        .iter()
        .map(|user| user.user_id.as_str())
        .collect::<HashSet<_>>();
    let task_ids = data
        .tasks
        .iter()
        .map(|task| task.task_id.as_str())
        .collect::<HashSet<_>>();

    for interaction in &data.interactions {
        assert!(user_ids.contains(interaction.user_id.as_str()));
        assert!(task_ids.contains(interaction.task_id.as_str()));
    }
}

#[test]
fn users_reference_existing_teams() {
    let data = dataset();
    let team_ids = data
        .teams
        .iter()
        .map(|team| team.team_id.as_str())
        .collect::<HashSet<_>>();
    assert!(data
        .users
        .iter()
        .all(|user| team_ids.contains(user.team_id.as_str())));
}

#[test]
fn num_ai_calls_matches_interaction_count() {
    let data = dataset();
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for interaction in &data.interactions {
        *counts.entry(interaction.task_id.as_str()).or_insert(0) += 1;
    }

    for task in &data.tasks {
        assert_eq!(
            counts.get(task.task_id.as_str()).copied().unwrap_or(0),
            task.num_ai_calls,
            "{}",
            task.task_id
        );
        assert!((1..=4).contains(&task.num_ai_calls));
    }
}

#[test]
fn resolution_time_matches_timestamps() {
    let data = dataset();
    for task in &data.tasks {
        assert!(task.resolution_at >= task.first_ai_request_at);
        let expected = (task.resolution_at - task.first_ai_request_at).num_seconds();
        assert_eq!(task.resolution_time_sec, expected);
        assert!(task.resolution_time_sec >= 0);
    }
}

#[test]
fn timestamps_increase_within_each_task() {
    let data = dataset();
    let mut last_seen = HashMap::new();
    for interaction in &data.interactions {
        if let Some(previous) = last_seen.insert(interaction.task_id.as_str(), interaction.created_at)
        {
            assert!(interaction.created_at > previous, "{}", interaction.request_id);
        }
    }
}

#[test]
fn quality_score_is_shared_by_task_and_interactions() {
    let data = dataset();
    let scores = data
        .tasks
        .iter()
        .map(|task| (task.task_id.as_str(), task.outcome_quality_score))
        .collect::<HashMap<_, _>>();

    for interaction in &data.interactions {
        assert_eq!(
            scores.get(interaction.task_id.as_str()).copied(),
            Some(interaction.outcome_quality_score)
        );
    }
}

#[test]
fn request_ids_are_unique() {
    let data = dataset();
    let ids = data
        .interactions
        .iter()
        .map(|interaction| interaction.request_id.as_str())
        .collect::<HashSet<_>>();
    assert_eq!(ids.len(), data.interactions.len());
}
