use evidence_eval::EvalError;
use evidence_generate::GenerationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("generation error: {0}")]
    Generate(#[from] GenerationError),
    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(String),
}
