//! Tabular (CSV) rendering of discrepancy records.
//!
//! One header row naming the two documents, then one `(path, left, right)`
//! row per record in traversal order.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use jsoncmp_diff::ComparisonResult;
use tracing::debug;

use crate::error::{ReportError, ReportResult};
use crate::sink::ReportSink;

/// Title of the first column.
pub const PATH_HEADER: &str = "Path";

pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
    left_name: String,
    right_name: String,
}

impl<W: Write> CsvSink<W> {
    /// Wrap a writer; `left_name`/`right_name` title the value columns.
    pub fn new(out: W, left_name: impl Into<String>, right_name: impl Into<String>) -> Self {
        Self {
            writer: csv::Writer::from_writer(out),
            left_name: left_name.into(),
            right_name: right_name.into(),
        }
    }

    pub fn into_inner(self) -> ReportResult<W> {
        self.writer
            .into_inner()
            .map_err(|e| ReportError::Io(e.into_error()))
    }
}

impl CsvSink<File> {
    /// Create (or truncate) the report file at `path`.
    pub fn create(
        path: &Path,
        left_name: impl Into<String>,
        right_name: impl Into<String>,
    ) -> ReportResult<Self> {
        let file = File::create(path).map_err(|source| ReportError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(file, left_name, right_name))
    }
}

impl<W: Write> ReportSink for CsvSink<W> {
    fn emit(&mut self, result: &ComparisonResult) -> ReportResult<()> {
        self.writer
            .write_record([PATH_HEADER, self.left_name.as_str(), self.right_name.as_str()])?;

        for record in &result.records {
            let path = record.path.to_string();
            self.writer
                .write_record([path.as_str(), record.left_repr.as_str(), record.right_repr.as_str()])?;
        }

        self.writer.flush()?;
        debug!(rows = result.records.len(), "wrote csv report");
        Ok(())
    }
}
