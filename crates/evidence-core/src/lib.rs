//! Shared contracts for the evidence-ready dataset toolkit.
//!
//! This crate defines the record types, enumerations, table layouts and wire
//! formatting used by both the generator and the validator. The CSV files are
//! the only interface between the two, so everything that shapes a file lives
//! here.

pub mod error;
pub mod format;
pub mod records;
pub mod schema;
pub mod types;

pub use error::{Error, Result};
pub use records::{ExperimentArm, Interaction, Task, Team, User};
pub use schema::{ALL_TABLES, EXPERIMENTS, INTERACTIONS, TASKS, TEAMS, TableSpec, USERS};
pub use types::{ActionType, QueueType, Region, Role, TaskType, TenureBand, TreatmentArm};
