//! The sink trait and the stream-oriented sinks.

use std::io::Write;

use jsoncmp_diff::ComparisonResult;

use crate::error::ReportResult;

/// Consumes a comparison result and renders it.
pub trait ReportSink {
    fn emit(&mut self, result: &ComparisonResult) -> ReportResult<()>;
}

/// Writes the human-readable summary, followed by a newline.
pub struct TextSink<W: Write> {
    out: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for TextSink<W> {
    fn emit(&mut self, result: &ComparisonResult) -> ReportResult<()> {
        writeln!(self.out, "{}", result.summary)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Writes the full result (count, records and summary) as pretty JSON.
pub struct JsonSink<W: Write> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for JsonSink<W> {
    fn emit(&mut self, result: &ComparisonResult) -> ReportResult<()> {
        serde_json::to_writer_pretty(&mut self.out, result)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsoncmp_diff::compare;
    use serde_json::json;

    #[test]
    fn text_sink_identical() {
        let result = compare(&json!({"a": 1}), &json!({"a": 1}));
        let mut sink = TextSink::new(Vec::new());
        sink.emit(&result).unwrap();
        assert_eq!(String::from_utf8(sink.into_inner()).unwrap(), "JSON files are identical\n");
    }

    #[test]
    fn text_sink_lists_differences() {
        let result = compare(&json!({"a": 1, "b": [1]}), &json!({"a": 2, "b": []}));
        let mut sink = TextSink::new(Vec::new());
        sink.emit(&result).unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            text,
            "Differences found:\nValue mismatch at a: 1 != 2\nLength mismatch at b: 1 != 0\n"
        );
    }

    #[test]
    fn json_sink_round_trips_count() {
        let result = compare(&json!({"x": 1}), &json!({"y": 1}));
        let mut sink = JsonSink::new(Vec::new());
        sink.emit(&result).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&sink.into_inner()).unwrap();
        assert_eq!(parsed["mismatch_count"], json!(2));
        assert_eq!(parsed["records"][0]["kind"], json!("missing_in_second"));
        assert_eq!(parsed["records"][1]["kind"], json!("missing_in_first"));
    }
}
