//! Setup-stage collaborators for jsoncmp.
//!
//! Everything that can fail before a comparison runs lives here: reading the
//! configuration file that names the two documents, and reading and decoding
//! each document into a [`serde_json::Value`] tree.
//!
//! # Key Types
//!
//! - [`CompareConfig`] -- Input/output settings (YAML or TOML)
//! - [`load_document`] / [`decode_document`] -- Document decoding
//! - [`LoadError`] -- Setup errors, each naming the failing path

pub mod config;
pub mod document;
pub mod error;

pub use config::{CompareConfig, ConfigFormat, InputConfig, OutputConfig, DEFAULT_CSV_PATH};
pub use document::{decode_document, load_document};
pub use error::{LoadError, LoadResult};
