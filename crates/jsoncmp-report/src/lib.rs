//! Report sinks for jsoncmp.
//!
//! A [`ReportSink`] consumes a finished [`jsoncmp_diff::ComparisonResult`]
//! and renders it somewhere: the human-readable summary to a stream, the
//! whole result as JSON, or the records as a CSV table.

pub mod error;
pub mod sink;
pub mod table;

pub use error::{ReportError, ReportResult};
pub use sink::{JsonSink, ReportSink, TextSink};
pub use table::{CsvSink, PATH_HEADER};
