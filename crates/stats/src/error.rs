//! Error types for the stats crate.

use thiserror::Error;

/// Result type alias for statistics operations.
pub type Result<T> = std::result::Result<T, StatsError>;

/// Errors that can occur while loading or aggregating telemetry.
#[derive(Debug, Error)]
pub enum StatsError {
    /// The row sequence was empty
    #[error("telemetry input contains no rows")]
    EmptyInput,

    /// A row field could not be parsed as a finite number or timestamp
    #[error("invalid value {value:?} for field '{field}' on line {line}")]
    InvalidRow {
        /// Input line (CSV) or one-based element index (JSON)
        line: usize,
        /// Name of the offending field
        field: &'static str,
        /// The raw text that failed to parse
        value: String,
    },

    /// A required column was missing from the input header
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    /// The input format could not be determined from the file name
    #[error("cannot determine input format for '{0}' (expected .csv or .json)")]
    UnknownFormat(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
