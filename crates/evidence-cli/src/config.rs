use std::path::{Path, PathBuf};

use clap::Args;
use serde::{Deserialize, Serialize};
use tracing::debug;

use evidence_eval::EvaluateOptions;
use evidence_generate::GenerateOptions;

use crate::error::CliError;

/// Optional TOML configuration shared by both binaries.
///
/// ```toml
/// [generate]
/// seed = 7
/// num_tasks = 500
///
/// [check]
/// data_dir = "synthetic_data"
/// ```
///
/// Absent keys keep the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolkitConfig {
    pub generate: GenerateOptions,
    pub check: EvaluateOptions,
}

impl ToolkitConfig {
    pub fn from_toml(contents: &str) -> Result<Self, CliError> {
        Ok(toml::from_str(contents)?)
    }
}

/// Load the configuration file, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<ToolkitConfig, CliError> {
    let Some(path) = path else {
        return Ok(ToolkitConfig::default());
    };
    let contents = std::fs::read_to_string(path)?;
    let config = ToolkitConfig::from_toml(&contents)?;
    debug!(path = %path.display(), "configuration loaded");
    Ok(config)
}

/// Generator flags. Each one that is set replaces the configured value.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct GenerateOverrides {
    /// Directory the CSV files are written to.
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
    /// Seed for the random stream.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Number of users.
    #[arg(long)]
    pub users: Option<u32>,
    /// Number of teams users are spread across.
    #[arg(long)]
    pub teams: Option<u32>,
    /// Number of tasks.
    #[arg(long)]
    pub tasks: Option<u32>,
    /// Also write generation_report.json with per-file digests.
    #[arg(long, default_value_t = false)]
    pub report: bool,
}

impl GenerateOverrides {
    pub fn apply(&self, options: &mut GenerateOptions) {
        if let Some(out_dir) = &self.out_dir {
            options.out_dir = out_dir.clone();
        }
        if let Some(seed) = self.seed {
            options.seed = seed;
        }
        if let Some(users) = self.users {
            options.num_users = users;
        }
        if let Some(teams) = self.teams {
            options.num_teams = teams;
        }
        if let Some(tasks) = self.tasks {
            options.num_tasks = tasks;
        }
        options.write_report |= self.report;
    }
}

/// Validator flags. Each one that is set replaces the configured value.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct CheckOverrides {
    /// Directory holding the CSV tables.
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
    /// Maximum offending values listed per check.
    #[arg(long)]
    pub max_examples: Option<usize>,
}

impl CheckOverrides {
    pub fn apply(&self, options: &mut EvaluateOptions) {
        if let Some(data_dir) = &self.data_dir {
            options.data_dir = data_dir.clone();
        }
        if let Some(max_examples) = self.max_examples {
            options.max_examples = max_examples;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_yields_defaults() {
        let config = load_config(None).expect("defaults");
        assert_eq!(config, ToolkitConfig::default());
        assert_eq!(config.generate.num_users, 50);
        assert_eq!(config.check.data_dir, PathBuf::from("synthetic_data"));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = ToolkitConfig::from_toml(
            r#"
[generate]
seed = 7
num_tasks = 10
base_date = "2024-06-01"

[check]
data_dir = "out/data"
"#,
        )
        .expect("parse config");

        assert_eq!(config.generate.seed, 7);
        assert_eq!(config.generate.num_tasks, 10);
        assert_eq!(config.generate.num_users, 50);
        assert_eq!(config.generate.base_date.to_string(), "2024-06-01");
        assert_eq!(config.check.data_dir, PathBuf::from("out/data"));
        assert_eq!(config.check.max_examples, 5);
    }

    #[test]
    fn rejects_wrong_types() {
        let err = ToolkitConfig::from_toml("[generate]\nseed = \"forty-two\"\n").unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn unset_overrides_keep_configured_values() {
        let mut options = GenerateOptions {
            seed: 7,
            ..GenerateOptions::default()
        };
        GenerateOverrides::default().apply(&mut options);
        assert_eq!(options.seed, 7);
        assert!(!options.write_report);

        let overrides = GenerateOverrides {
            tasks: Some(12),
            report: true,
            ..GenerateOverrides::default()
        };
        overrides.apply(&mut options);
        assert_eq!((options.seed, options.num_tasks), (7, 12));
        assert!(options.write_report);
    }

    #[test]
    fn check_overrides_replace_set_fields() {
        let mut options = EvaluateOptions::default();
        CheckOverrides {
            max_examples: Some(2),
            ..CheckOverrides::default()
        }
        .apply(&mut options);
        assert_eq!(options.max_examples, 2);
        assert_eq!(options.data_dir, PathBuf::from("synthetic_data"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("evidence_cli_no_such_config.toml");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
