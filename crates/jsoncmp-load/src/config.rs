//! Comparison configuration.
//!
//! ```yaml
//! input:
//!   file_path: data/
//!   file_name_1: before.json
//!   file_name_2: after.json
//! output:
//!   csv_path: comparison_result.csv
//! ```
//!
//! The same layout is accepted as TOML when the file ends in `.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LoadError, LoadResult};

/// Where the tabular report goes unless configured otherwise.
pub const DEFAULT_CSV_PATH: &str = "comparison_result.csv";

/// Top-level configuration file layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareConfig {
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// The two documents to compare.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Directory holding both documents. Empty means the working directory.
    #[serde(default)]
    pub file_path: String,
    pub file_name_1: String,
    pub file_name_2: String,
}

/// Report destination settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_csv_path")]
    pub csv_path: PathBuf,
    #[serde(default = "default_write_csv")]
    pub write_csv: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: default_csv_path(),
            write_csv: default_write_csv(),
        }
    }
}

fn default_csv_path() -> PathBuf {
    PathBuf::from(DEFAULT_CSV_PATH)
}

fn default_write_csv() -> bool {
    true
}

/// Syntax of a configuration file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// TOML for a `.toml` extension, YAML for anything else.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Yaml,
        }
    }
}

impl CompareConfig {
    /// Read, parse and validate a configuration file.
    pub fn load(path: &Path) -> LoadResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| LoadError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let format = ConfigFormat::from_path(path);
        let config = Self::parse(&text, format).map_err(|reason| LoadError::ConfigParse {
            path: path.to_path_buf(),
            reason,
        })?;
        config.validate()?;

        debug!(path = %path.display(), ?format, "loaded configuration");
        Ok(config)
    }

    /// Parse configuration text without validating it.
    pub fn parse(text: &str, format: ConfigFormat) -> Result<Self, String> {
        match format {
            ConfigFormat::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
            ConfigFormat::Toml => toml::from_str(text).map_err(|e| e.to_string()),
        }
    }

    /// Both document names must be present.
    pub fn validate(&self) -> LoadResult<()> {
        if self.input.file_name_1.trim().is_empty() {
            return Err(LoadError::InvalidConfig(
                "input.file_name_1 must not be empty".into(),
            ));
        }
        if self.input.file_name_2.trim().is_empty() {
            return Err(LoadError::InvalidConfig(
                "input.file_name_2 must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Location of the first document.
    pub fn left_path(&self) -> PathBuf {
        Path::new(&self.input.file_path).join(&self.input.file_name_1)
    }

    /// Location of the second document.
    pub fn right_path(&self) -> PathBuf {
        Path::new(&self.input.file_path).join(&self.input.file_name_2)
    }
}
