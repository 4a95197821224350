use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use evidence_core::{ExperimentArm, Interaction, Task, Team, User};

use crate::errors::GenerationError;

pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_NUM_USERS: u32 = 50;
pub const DEFAULT_NUM_TEAMS: u32 = 5;
pub const DEFAULT_NUM_TASKS: u32 = 200;
/// Tasks are created on a day in `base_date ..= base_date + window_days`.
pub const DEFAULT_WINDOW_DAYS: u32 = 60;
pub const DEFAULT_OUT_DIR: &str = "synthetic_data";

pub fn default_base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default()
}

/// Options for the generation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Directory where the CSV files are written.
    pub out_dir: PathBuf,
    /// Seed for the single random stream.
    pub seed: u64,
    pub num_users: u32,
    pub num_teams: u32,
    pub num_tasks: u32,
    /// First day a task can be created on.
    pub base_date: NaiveDate,
    pub window_days: u32,
    /// Also write `generation_report.json` next to the CSV files.
    pub write_report: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            seed: DEFAULT_SEED,
            num_users: DEFAULT_NUM_USERS,
            num_teams: DEFAULT_NUM_TEAMS,
            num_tasks: DEFAULT_NUM_TASKS,
            base_date: default_base_date(),
            window_days: DEFAULT_WINDOW_DAYS,
            write_report: false,
        }
    }
}

impl GenerateOptions {
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.num_users == 0 {
            return Err(GenerationError::InvalidOptions(
                "num_users must be >= 1".to_string(),
            ));
        }
        if self.num_teams == 0 {
            return Err(GenerationError::InvalidOptions(
                "num_teams must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// All five tables of one generation run, in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub users: Vec<User>,
    pub teams: Vec<Team>,
    pub experiments: Vec<ExperimentArm>,
    pub tasks: Vec<Task>,
    pub interactions: Vec<Interaction>,
}

/// Summary of a written table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableReport {
    pub table: String,
    pub file: String,
    pub rows: u64,
    pub bytes_written: u64,
    /// Hex SHA-256 of the file contents.
    pub sha256: String,
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub seed: u64,
    pub generated_at: String,
    pub out_dir: PathBuf,
    pub tables: Vec<TableReport>,
    pub rows_total: u64,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(run_id: String, seed: u64, out_dir: PathBuf) -> Self {
        Self {
            run_id,
            seed,
            generated_at: chrono::Utc::now().to_rfc3339(),
            out_dir,
            tables: Vec::new(),
            rows_total: 0,
            bytes_written: 0,
            duration_ms: 0,
        }
    }

    pub fn record_table(&mut self, table: TableReport) {
        self.rows_total += table.rows;
        self.bytes_written += table.bytes_written;
        self.tables.push(table);
    }

    pub fn table(&self, name: &str) -> Option<&TableReport> {
        self.tables.iter().find(|table| table.table == name)
    }
}
