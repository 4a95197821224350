//! Seeded generation of the evidence-ready synthetic dataset.
//!
//! The engine builds users, teams, experiment arms, tasks and interactions
//! from a single seeded stream and writes each table as a CSV file with a
//! fixed column order. The same options always yield byte-identical files.

pub mod engine;
pub mod errors;
pub mod generators;
pub mod model;
pub mod output;

pub use engine::{GenerationEngine, GenerationResult, generate_dataset};
pub use errors::GenerationError;
pub use model::{Dataset, GenerateOptions, GenerationReport, TableReport};
