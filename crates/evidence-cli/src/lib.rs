//! Shared plumbing for the `generate-synthetic-data` and
//! `check-data-quality` binaries: command lines, configuration, logging and
//! errors.

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

pub use commands::{CheckCli, GenerateCli};
pub use config::{CheckOverrides, GenerateOverrides, ToolkitConfig, load_config};
pub use error::CliError;
pub use logging::{LogArgs, LogFormat, init_logging};
