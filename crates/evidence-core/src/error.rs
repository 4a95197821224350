use thiserror::Error;

/// Core error type shared across the evidence crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A label does not belong to the named enumeration.
    #[error("invalid {kind} label: '{label}'")]
    InvalidLabel { kind: &'static str, label: String },
    /// A timestamp or date could not be parsed.
    #[error("invalid timestamp: '{0}'")]
    InvalidTimestamp(String),
}

/// Convenience alias for results returned by the evidence crates.
pub type Result<T> = std::result::Result<T, Error>;
