//! Error types for the report crate.

use std::io;
use std::path::PathBuf;

/// Errors raised while rendering a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The report destination could not be created.
    #[error("failed to create report {}: {source}", .path.display())]
    Create { path: PathBuf, source: io::Error },

    /// Writing a CSV row failed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Serializing the result failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Convenience alias for report results.
pub type ReportResult<T> = Result<T, ReportError>;
