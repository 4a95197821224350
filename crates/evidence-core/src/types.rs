use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Seniority of a support user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Agent,
    SeniorAgent,
    Manager,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Agent, Role::SeniorAgent, Role::Manager];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Agent => "agent",
            Role::SeniorAgent => "senior_agent",
            Role::Manager => "manager",
        }
    }
}

/// Time-in-role bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenureBand {
    #[serde(rename = "0-6m")]
    UpToSixMonths,
    #[serde(rename = "6-12m")]
    SixToTwelveMonths,
    #[serde(rename = "1-3y")]
    OneToThreeYears,
    #[serde(rename = "3y+")]
    OverThreeYears,
}

impl TenureBand {
    pub const ALL: [TenureBand; 4] = [
        TenureBand::UpToSixMonths,
        TenureBand::SixToTwelveMonths,
        TenureBand::OneToThreeYears,
        TenureBand::OverThreeYears,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TenureBand::UpToSixMonths => "0-6m",
            TenureBand::SixToTwelveMonths => "6-12m",
            TenureBand::OneToThreeYears => "1-3y",
            TenureBand::OverThreeYears => "3y+",
        }
    }
}

/// Operating region of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "NA")]
    NorthAmerica,
    #[serde(rename = "EU")]
    Europe,
    #[serde(rename = "APAC")]
    AsiaPacific,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::NorthAmerica, Region::Europe, Region::AsiaPacific];

    pub fn as_str(self) -> &'static str {
        match self {
            Region::NorthAmerica => "NA",
            Region::Europe => "EU",
            Region::AsiaPacific => "APAC",
        }
    }
}

/// How a team receives work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueType {
    Triage,
    Specialised,
}

impl QueueType {
    pub const ALL: [QueueType; 2] = [QueueType::Triage, QueueType::Specialised];

    pub fn as_str(self) -> &'static str {
        match self {
            QueueType::Triage => "triage",
            QueueType::Specialised => "specialised",
        }
    }
}

/// Experiment variant shown to the user for an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreatmentArm {
    Control,
    Explanation,
}

impl TreatmentArm {
    pub const ALL: [TreatmentArm; 2] = [TreatmentArm::Control, TreatmentArm::Explanation];

    pub fn as_str(self) -> &'static str {
        match self {
            TreatmentArm::Control => "control",
            TreatmentArm::Explanation => "explanation",
        }
    }
}

/// What the user did with a model response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    Accept,
    Edit,
    Ignore,
    Escalate,
}

impl ActionType {
    pub const ALL: [ActionType; 4] = [
        ActionType::Accept,
        ActionType::Edit,
        ActionType::Ignore,
        ActionType::Escalate,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActionType::Accept => "accept",
            ActionType::Edit => "edit",
            ActionType::Ignore => "ignore",
            ActionType::Escalate => "escalate",
        }
    }

    pub fn is_escalation(self) -> bool {
        matches!(self, ActionType::Escalate)
    }
}

/// Kind of work the model was asked to help with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    Triage,
    Drafting,
    Summarisation,
}

impl TaskType {
    pub const ALL: [TaskType; 3] = [TaskType::Triage, TaskType::Drafting, TaskType::Summarisation];

    pub fn as_str(self) -> &'static str {
        match self {
            TaskType::Triage => "triage",
            TaskType::Drafting => "drafting",
            TaskType::Summarisation => "summarisation",
        }
    }
}

/// `FromStr` over `as_str` labels, for reading CSV cells back.
macro_rules! label_impls {
    ($($ty:ident => $kind:literal),* $(,)?) => {
        $(
            impl FromStr for $ty {
                type Err = Error;

                fn from_str(value: &str) -> Result<Self, Self::Err> {
                    $ty::ALL
                        .into_iter()
                        .find(|item| item.as_str() == value)
                        .ok_or_else(|| Error::InvalidLabel {
                            kind: $kind,
                            label: value.to_string(),
                        })
                }
            }
        )*
    };
}

label_impls! {
    Role => "role",
    TenureBand => "tenure_band",
    Region => "region",
    TreatmentArm => "treatment_arm",
    ActionType => "action_type",
    TaskType => "task_type",
}
