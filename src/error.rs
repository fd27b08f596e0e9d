//! Error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors in the input file's directives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required directive is absent or has no value.
    #[error("Missing parameter {0}")]
    MissingParameter(&'static str),

    /// `use rr` without a `quantum` directive.
    #[error("Missing quantum parameter when use is 'rr'")]
    MissingQuantum,

    /// Number of `process` lines differs from `processcount`.
    #[error("Process count does not match the number of process definitions (declared {declared}, found {found})")]
    ProcessCountMismatch {
        /// Value of `processcount`.
        declared: usize,
        /// Number of `process` lines.
        found: usize,
    },

    /// A `process` line lacks `name`, `arrival` or `burst`.
    #[error("Missing parameter in process definition on line {line}")]
    MalformedProcess {
        /// 1-based line number.
        line: usize,
    },

    /// A directive value is not a valid number for its position.
    #[error("Invalid value '{value}' for {directive} on line {line}")]
    InvalidValue {
        /// 1-based line number.
        line: usize,
        /// Directive or key the value belongs to.
        directive: &'static str,
        /// Offending text.
        value: String,
    },

    /// `use` names a policy that does not exist.
    #[error("Unknown scheduling algorithm '{0}'")]
    UnknownScheduler(String),
}

/// Crate-level errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Input file is malformed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Input parsed but describes an invalid simulation.
    #[error("Invalid simulation parameters: {}", summarize(.0))]
    Validation(Vec<ValidationError>),

    /// Input file could not be read.
    #[error("Cannot open file {}: {source}", .path.display())]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Output file could not be written.
    #[error("Cannot write to file {}: {source}", .path.display())]
    Write {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Command-line misuse.
    #[error("Usage: {0}")]
    Usage(String),

    /// JSON report serialization failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
