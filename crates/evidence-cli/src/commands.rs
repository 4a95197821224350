//! Command lines of the two binaries and what they run.

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use evidence_eval::{EvaluateOptions, EvaluationEngine, QualityReport};
use evidence_generate::{GenerateOptions, GenerationEngine, GenerationResult};

use crate::config::{CheckOverrides, GenerateOverrides, load_config};
use crate::error::CliError;
use crate::logging::LogArgs;

#[derive(Parser, Debug)]
#[command(
    name = "generate-synthetic-data",
    version,
    about = "Write the synthetic users, teams, experiments, tasks and interactions tables"
)]
pub struct GenerateCli {
    /// TOML configuration file; flags below take precedence.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    #[command(flatten)]
    pub overrides: GenerateOverrides,
    #[command(flatten)]
    pub logging: LogArgs,
}

impl GenerateCli {
    /// Configuration file values (or defaults) with the flags applied.
    pub fn options(&self) -> Result<GenerateOptions, CliError> {
        let mut options = load_config(self.config.as_deref())?.generate;
        self.overrides.apply(&mut options);
        Ok(options)
    }

    pub fn run(&self) -> Result<GenerationResult, CliError> {
        Ok(GenerationEngine::new(self.options()?).run()?)
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "check-data-quality",
    version,
    about = "Report shapes, missing keys, referential integrity and score statistics"
)]
pub struct CheckCli {
    /// TOML configuration file; flags below take precedence.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    #[command(flatten)]
    pub overrides: CheckOverrides,
    /// Also write the full report as JSON.
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,
    #[command(flatten)]
    pub logging: LogArgs,
}

impl CheckCli {
    pub fn options(&self) -> Result<EvaluateOptions, CliError> {
        let mut options = load_config(self.config.as_deref())?.check;
        self.overrides.apply(&mut options);
        Ok(options)
    }

    /// Run the checks and write the JSON report when `--json` is given.
    pub fn run(&self) -> Result<QualityReport, CliError> {
        let report = EvaluationEngine::new(self.options()?).run()?;
        if let Some(path) = &self.json {
            std::fs::write(path, serde_json::to_vec_pretty(&report)?)?;
            info!(path = %path.display(), "json report written");
        }
        Ok(report)
    }
}
