use chrono::NaiveDate;
use rand::Rng;

use evidence_core::{ExperimentArm, QueueType, Region, Role, Team, TenureBand, TreatmentArm, User};

use super::{pick, team_id};

const TEAM_FUNCTION: &str = "internal_support";
const EXPERIMENT_ID: &str = "exp_001";
const TARGETING_RULES: &str = "all_agents";

/// Build `num_users` users, each assigned to one of `num_teams` teams.
pub fn users<R: Rng + ?Sized>(rng: &mut R, num_users: u32, num_teams: u32) -> Vec<User> {
    (1..=num_users)
        .map(|index| {
            let role = *pick(rng, &Role::ALL);
            let tenure_band = *pick(rng, &TenureBand::ALL);
            let team = rng.random_range(1..=num_teams);
            let region = *pick(rng, &Region::ALL);
            User {
                user_id: format!("user_{index}"),
                role,
                tenure_band,
                team_id: team_id(team),
                region,
                is_synthetic: true,
            }
        })
        .collect()
}

/// One team per identifier `team_1 ..= team_{num_teams}`.
pub fn teams<R: Rng + ?Sized>(rng: &mut R, num_teams: u32) -> Vec<Team> {
    (1..=num_teams)
        .map(|index| {
            let team_id = team_id(index);
            Team {
                lead_name: format!("Lead_{team_id}"),
                team_id,
                function: TEAM_FUNCTION.to_string(),
                queue_type: *pick(rng, &QueueType::ALL),
            }
        })
        .collect()
}

/// The fixed two-arm experiment. Draws nothing.
pub fn experiment_arms() -> Vec<ExperimentArm> {
    let start_date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default();
    let end_date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap_or_default();

    TreatmentArm::ALL
        .into_iter()
        .map(|arm| {
            let (arm_name, description) = match arm {
                TreatmentArm::Control => ("Control", "No explanation"),
                TreatmentArm::Explanation => ("Explanation", "Show model rationale"),
            };
            ExperimentArm {
                experiment_id: EXPERIMENT_ID.to_string(),
                arm_id: arm,
                arm_name: arm_name.to_string(),
                description: description.to_string(),
                start_date,
                end_date,
                targeting_rules: TARGETING_RULES.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn users_have_sequential_ids_and_known_teams() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let users = users(&mut rng, 30, 3);

        assert_eq!(users.len(), 30);
        assert_eq!(users[0].user_id, "user_1");
        assert_eq!(users[29].user_id, "user_30");

        let teams = ["team_1", "team_2", "team_3"];
        assert!(users.iter().all(|user| teams.contains(&user.team_id.as_str())));
        assert!(users.iter().all(|user| user.is_synthetic));
    }

    #[test]
    fn teams_cover_every_identifier() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let teams = teams(&mut rng, 4);

        let ids = teams
            .iter()
            .map(|team| team.team_id.as_str())
            .collect::<HashSet<_>>();
        assert_eq!(ids, HashSet::from(["team_1", "team_2", "team_3", "team_4"]));
        assert_eq!(teams[2].lead_name, "Lead_team_3");
        assert!(teams.iter().all(|team| team.function == "internal_support"));
    }

    #[test]
    fn experiment_has_control_and_explanation_arms() {
        let arms = experiment_arms();
        assert_eq!(arms.len(), 2);
        assert_eq!(arms[0].arm_id, TreatmentArm::Control);
        assert_eq!(arms[0].description, "No explanation");
        assert_eq!(arms[1].arm_id, TreatmentArm::Explanation);
        assert_eq!(arms[1].arm_name, "Explanation");
        assert!(arms.iter().all(|arm| arm.experiment_id == "exp_001"));
        assert!(arms.iter().all(|arm| arm.start_date < arm.end_date));
    }
}
