//! Discrepancy records: one per divergence found during a comparison.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::path::{Path, PathSegment};

/// Marker placed in the column of the document that lacks a key.
pub const MISSING_MARKER: &str = "Missing";

/// The category of a single divergence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscrepancyKind {
    /// Key present in the first document only.
    MissingInSecond,
    /// Key present in the second document only.
    MissingInFirst,
    /// The two sides have different container shapes.
    TypeMismatch,
    /// Both sides are arrays of different length.
    LengthMismatch,
    /// Scalar values differ.
    ValueMismatch,
}

impl DiscrepancyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingInSecond => "missing_in_second",
            Self::MissingInFirst => "missing_in_first",
            Self::TypeMismatch => "type_mismatch",
            Self::LengthMismatch => "length_mismatch",
            Self::ValueMismatch => "value_mismatch",
        }
    }
}

impl fmt::Display for DiscrepancyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single divergence between the two documents.
///
/// `left_repr` and `right_repr` hold a textual rendering of what each side
/// has at `path`. Their meaning depends on `kind`:
///
/// | kind              | left_repr         | right_repr        |
/// |-------------------|-------------------|-------------------|
/// | `MissingInSecond` | `Missing`         | empty             |
/// | `MissingInFirst`  | empty             | `Missing`         |
/// | `TypeMismatch`    | left shape name   | right shape name  |
/// | `LengthMismatch`  | left length       | right length      |
/// | `ValueMismatch`   | left value        | right value       |
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DiscrepancyRecord {
    pub path: Path,
    pub kind: DiscrepancyKind,
    pub left_repr: String,
    pub right_repr: String,
}

impl DiscrepancyRecord {
    pub fn missing_in_second(path: Path) -> Self {
        Self {
            path,
            kind: DiscrepancyKind::MissingInSecond,
            left_repr: MISSING_MARKER.to_string(),
            right_repr: String::new(),
        }
    }

    pub fn missing_in_first(path: Path) -> Self {
        Self {
            path,
            kind: DiscrepancyKind::MissingInFirst,
            left_repr: String::new(),
            right_repr: MISSING_MARKER.to_string(),
        }
    }

    pub fn type_mismatch(path: Path, left: &Value, right: &Value) -> Self {
        Self {
            path,
            kind: DiscrepancyKind::TypeMismatch,
            left_repr: shape_name(left).to_string(),
            right_repr: shape_name(right).to_string(),
        }
    }

    pub fn length_mismatch(path: Path, left_len: usize, right_len: usize) -> Self {
        Self {
            path,
            kind: DiscrepancyKind::LengthMismatch,
            left_repr: left_len.to_string(),
            right_repr: right_len.to_string(),
        }
    }

    pub fn value_mismatch(path: Path, left: &Value, right: &Value) -> Self {
        Self {
            path,
            kind: DiscrepancyKind::ValueMismatch,
            left_repr: render_value(left),
            right_repr: render_value(right),
        }
    }

    /// Human-readable one-line description of this divergence.
    pub fn message(&self) -> String {
        match self.kind {
            DiscrepancyKind::MissingInSecond => format!(
                "Key '{}' missing in second document at {}",
                self.key_name(),
                self.path
            ),
            DiscrepancyKind::MissingInFirst => format!(
                "Key '{}' missing in first document at {}",
                self.key_name(),
                self.path
            ),
            DiscrepancyKind::TypeMismatch => format!(
                "Type mismatch at {}: expected {} got {}",
                self.path, self.left_repr, self.right_repr
            ),
            DiscrepancyKind::LengthMismatch => format!(
                "Length mismatch at {}: {} != {}",
                self.path, self.left_repr, self.right_repr
            ),
            DiscrepancyKind::ValueMismatch => format!(
                "Value mismatch at {}: {} != {}",
                self.path, self.left_repr, self.right_repr
            ),
        }
    }

    fn key_name(&self) -> String {
        match self.path.last() {
            Some(PathSegment::Key(key)) => key.clone(),
            Some(PathSegment::Index(index)) => index.to_string(),
            None => String::new(),
        }
    }
}

impl fmt::Display for DiscrepancyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Name of the runtime shape of a value.
pub fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Object(_) => "object",
        Value::Array(_) => "array",
        Value::String(_) => "string",
        Value::Number(_) => "number",
        Value::Bool(_) => "boolean",
        Value::Null => "null",
    }
}

/// Strings render unquoted, everything else as compact JSON.
pub(crate) fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn at(key: &str) -> Path {
        Path::root().child_key(key)
    }

    #[test]
    fn missing_in_second_marks_left_column() {
        let record = DiscrepancyRecord::missing_in_second(at("x"));
        assert_eq!(record.left_repr, "Missing");
        assert_eq!(record.right_repr, "");
        assert_eq!(record.message(), "Key 'x' missing in second document at x");
    }

    #[test]
    fn missing_in_first_marks_right_column() {
        let record = DiscrepancyRecord::missing_in_first(at("a").child_key("y"));
        assert_eq!(record.left_repr, "");
        assert_eq!(record.right_repr, "Missing");
        assert_eq!(record.message(), "Key 'y' missing in first document at a.y");
    }

    #[test]
    fn type_mismatch_names_shapes() {
        let record = DiscrepancyRecord::type_mismatch(at("a"), &json!({"x": 1}), &json!([1]));
        assert_eq!(record.left_repr, "object");
        assert_eq!(record.right_repr, "array");
        assert_eq!(record.message(), "Type mismatch at a: expected object got array");
    }

    #[test]
    fn length_mismatch_carries_lengths() {
        let record = DiscrepancyRecord::length_mismatch(Path::root(), 3, 2);
        assert_eq!(record.message(), "Length mismatch at : 3 != 2");
    }

    #[test]
    fn value_rendering() {
        assert_eq!(render_value(&json!("text")), "text");
        assert_eq!(render_value(&json!(2)), "2");
        assert_eq!(render_value(&json!(1.5)), "1.5");
        assert_eq!(render_value(&json!(true)), "true");
        assert_eq!(render_value(&json!(null)), "null");
        assert_eq!(render_value(&json!([1, "a"])), "[1,\"a\"]");
        assert_eq!(render_value(&json!({"k": null})), "{\"k\":null}");
    }

    #[test]
    fn value_mismatch_message() {
        let record = DiscrepancyRecord::value_mismatch(at("n"), &json!(1), &json!("1"));
        assert_eq!(record.message(), "Value mismatch at n: 1 != 1");
        assert_eq!(record.to_string(), record.message());
    }

    #[test]
    fn kind_serializes_snake_case() {
        let record = DiscrepancyRecord::missing_in_first(at("k"));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            json!({
                "path": "k",
                "kind": "missing_in_first",
                "left_repr": "",
                "right_repr": "Missing",
            })
        );
        assert_eq!(DiscrepancyKind::LengthMismatch.to_string(), "length_mismatch");
    }
}
