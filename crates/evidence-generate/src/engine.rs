use std::path::{Path, PathBuf};
use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{debug, info};

use evidence_core::{EXPERIMENTS, INTERACTIONS, TASKS, TEAMS, TableSpec, USERS};

use crate::errors::GenerationError;
use crate::generators;
use crate::model::{Dataset, GenerateOptions, GenerationReport, TableReport};
use crate::output::csv::write_table_csv;

pub const REPORT_FILE: &str = "generation_report.json";

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub out_dir: PathBuf,
    pub dataset: Dataset,
    pub report: GenerationReport,
}

/// Generate all five tables in memory from the options' seed.
///
/// Draw order is users, teams, then tasks with their interactions; the
/// experiment arms are fixed.
pub fn generate_dataset(options: &GenerateOptions) -> Result<Dataset, GenerationError> {
    options.validate()?;

    let mut rng = ChaCha8Rng::seed_from_u64(options.seed);
    let users = generators::users(&mut rng, options.num_users, options.num_teams);
    let teams = generators::teams(&mut rng, options.num_teams);
    let experiments = generators::experiment_arms();
    let rows = generators::tasks_and_interactions(
        &mut rng,
        &users,
        options.num_tasks,
        options.base_date,
        options.window_days,
    )?;

    Ok(Dataset {
        users,
        teams,
        experiments,
        tasks: rows.tasks,
        interactions: rows.interactions,
    })
}

/// Entry point for generating and writing the dataset.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn run(&self) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let out_dir = self.options.out_dir.clone();

        info!(
            run_id = %run_id,
            seed = self.options.seed,
            users = self.options.num_users,
            teams = self.options.num_teams,
            tasks = self.options.num_tasks,
            out_dir = %out_dir.display(),
            "generation started"
        );

        let dataset = generate_dataset(&self.options)?;
        std::fs::create_dir_all(&out_dir)?;

        let mut report = GenerationReport::new(run_id.clone(), self.options.seed, out_dir.clone());
        report.record_table(write_table(&out_dir, &USERS, &dataset.users)?);
        report.record_table(write_table(&out_dir, &TEAMS, &dataset.teams)?);
        report.record_table(write_table(&out_dir, &EXPERIMENTS, &dataset.experiments)?);
        report.record_table(write_table(&out_dir, &TASKS, &dataset.tasks)?);
        report.record_table(write_table(&out_dir, &INTERACTIONS, &dataset.interactions)?);
        report.duration_ms = start.elapsed().as_millis() as u64;

        if self.options.write_report {
            let report_path = out_dir.join(REPORT_FILE);
            std::fs::write(&report_path, serde_json::to_vec_pretty(&report)?)?;
            debug!(path = %report_path.display(), "generation report written");
        }

        info!(
            run_id = %run_id,
            tables = report.tables.len(),
            rows = report.rows_total,
            bytes_written = report.bytes_written,
            duration_ms = report.duration_ms,
            "generation completed"
        );

        Ok(GenerationResult {
            out_dir,
            dataset,
            report,
        })
    }
}

fn write_table<T: Serialize>(
    out_dir: &Path,
    spec: &TableSpec,
    rows: &[T],
) -> Result<TableReport, GenerationError> {
    let file = spec.file_name();
    let output = write_table_csv(&out_dir.join(&file), spec, rows)?;

    debug!(
        table = spec.name,
        rows = rows.len(),
        bytes_written = output.bytes_written,
        "table written"
    );

    Ok(TableReport {
        table: spec.name.to_string(),
        file,
        rows: rows.len() as u64,
        bytes_written: output.bytes_written,
        sha256: output.sha256,
    })
}
