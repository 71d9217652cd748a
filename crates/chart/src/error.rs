//! Error types for the chart crate.

use routeviz_stats::StatsError;
use thiserror::Error;

/// Result type alias for chart operations.
pub type Result<T> = std::result::Result<T, ChartError>;

/// Errors that can occur while rendering charts or reports.
#[derive(Debug, Error)]
pub enum ChartError {
    /// The drawing backend failed
    #[error("render error: {0}")]
    Render(String),

    /// Statistics computation failed
    #[error("statistics error: {0}")]
    Stats(#[from] StatsError),
}

/// Collapses a backend drawing error into a [`ChartError::Render`].
pub(crate) fn to_render_error<E: std::error::Error>(error: E) -> ChartError {
    ChartError::Render(error.to_string())
}
