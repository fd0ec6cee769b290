//! Error types for the load crate.

use std::io;
use std::path::PathBuf;

/// Errors raised while preparing a comparison. All of them are fatal to a run.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The configuration file could not be read.
    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead { path: PathBuf, source: io::Error },

    /// The configuration file is not valid YAML/TOML for the expected layout.
    #[error("failed to parse config {}: {reason}", .path.display())]
    ConfigParse { path: PathBuf, reason: String },

    /// The configuration parsed but is unusable.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A document could not be read.
    #[error("failed to read document {}: {source}", .path.display())]
    DocumentRead { path: PathBuf, source: io::Error },

    /// A document is not valid JSON.
    #[error("failed to decode document {}: {source}", .path.display())]
    DocumentDecode {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Convenience alias for load results.
pub type LoadResult<T> = Result<T, LoadError>;
