//! Recursive, path-aware comparison of two decoded documents.
//!
//! Traversal is depth-first and pre-order, dispatching on the shape of the
//! left-hand value:
//!
//! - object: the right side must be an object too, otherwise one
//!   `TypeMismatch` is reported and the subtree is not descended. Keys are
//!   visited in lexicographic order; keys missing on the right are reported
//!   first, then keys missing on the left.
//! - array: the right side must be an array too (`TypeMismatch` otherwise).
//!   A length difference is reported once and elements are not compared.
//!   Equal lengths recurse pairwise by index.
//! - scalar: compared by value. A differing right-hand value, including an
//!   object or array, is a `ValueMismatch`.

use serde::Serialize;
use serde_json::{Map, Number, Value};
use tracing::debug;

use crate::path::{Path, PathSegment};
use crate::record::{DiscrepancyKind, DiscrepancyRecord};

/// Summary text when no divergence was found.
pub const IDENTICAL_SUMMARY: &str = "JSON files are identical";

/// First line of the summary when divergences were found.
pub const DIFFERENCES_HEADER: &str = "Differences found:";

/// The outcome of one comparison.
///
/// `mismatch_count` always equals `records.len()`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    pub mismatch_count: usize,
    /// Findings in traversal order.
    pub records: Vec<DiscrepancyRecord>,
    pub summary: String,
}

impl ComparisonResult {
    fn from_records(records: Vec<DiscrepancyRecord>) -> Self {
        let summary = render_summary(&records);
        Self {
            mismatch_count: records.len(),
            records,
            summary,
        }
    }

    /// Returns `true` if no divergence was found.
    pub fn is_identical(&self) -> bool {
        self.mismatch_count == 0
    }

    /// Number of findings of the given kind.
    pub fn count_of(&self, kind: DiscrepancyKind) -> usize {
        self.records.iter().filter(|r| r.kind == kind).count()
    }

    /// Findings of the given kind, in traversal order.
    pub fn records_of(&self, kind: DiscrepancyKind) -> impl Iterator<Item = &DiscrepancyRecord> {
        self.records.iter().filter(move |r| r.kind == kind)
    }
}

/// Compare two documents and enumerate every divergence.
///
/// Never fails: shape differences are reported as records.
///
/// # Examples
///
/// ```
/// use jsoncmp_diff::{compare, DiscrepancyKind};
/// use serde_json::json;
///
/// let result = compare(&json!({"a": [1, {"c": 2}]}), &json!({"a": [1, {"c": 3}]}));
/// assert_eq!(result.mismatch_count, 1);
/// assert_eq!(result.records[0].path.to_string(), "a[1].c");
/// assert_eq!(result.records[0].kind, DiscrepancyKind::ValueMismatch);
/// ```
pub fn compare(left: &Value, right: &Value) -> ComparisonResult {
    let mut walker = Walker::default();
    walker.compare(left, right);
    let result = ComparisonResult::from_records(walker.records);
    debug!(mismatches = result.mismatch_count, "comparison finished");
    result
}

/// Traversal state: the current path and the findings so far.
#[derive(Default)]
struct Walker {
    path: Path,
    records: Vec<DiscrepancyRecord>,
}

impl Walker {
    fn compare(&mut self, left: &Value, right: &Value) {
        match left {
            Value::Object(left_map) => self.compare_objects(left_map, left, right),
            Value::Array(left_items) => self.compare_arrays(left_items, left, right),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
                self.compare_scalars(left, right)
            }
        }
    }

    fn compare_objects(&mut self, left_map: &Map<String, Value>, left: &Value, right: &Value) {
        let Value::Object(right_map) = right else {
            self.emit(DiscrepancyRecord::type_mismatch(self.path.clone(), left, right));
            return;
        };

        for (key, left_value) in sorted_entries(left_map) {
            self.path.push(PathSegment::Key(key.clone()));
            match right_map.get(key) {
                Some(right_value) => self.compare(left_value, right_value),
                None => self.emit(DiscrepancyRecord::missing_in_second(self.path.clone())),
            }
            self.path.pop();
        }

        for (key, _) in sorted_entries(right_map) {
            if !left_map.contains_key(key) {
                let path = self.path.child_key(key.clone());
                self.emit(DiscrepancyRecord::missing_in_first(path));
            }
        }
    }

    fn compare_arrays(&mut self, left_items: &[Value], left: &Value, right: &Value) {
        let Value::Array(right_items) = right else {
            self.emit(DiscrepancyRecord::type_mismatch(self.path.clone(), left, right));
            return;
        };

        if left_items.len() != right_items.len() {
            self.emit(DiscrepancyRecord::length_mismatch(
                self.path.clone(),
                left_items.len(),
                right_items.len(),
            ));
            return;
        }

        for (index, (l, r)) in left_items.iter().zip(right_items).enumerate() {
            self.path.push(PathSegment::Index(index));
            self.compare(l, r);
            self.path.pop();
        }
    }

    fn compare_scalars(&mut self, left: &Value, right: &Value) {
        if !scalars_equal(left, right) {
            self.emit(DiscrepancyRecord::value_mismatch(self.path.clone(), left, right));
        }
    }

    fn emit(&mut self, record: DiscrepancyRecord) {
        self.records.push(record);
    }
}

fn sorted_entries(map: &Map<String, Value>) -> Vec<(&String, &Value)> {
    let mut entries: Vec<_> = map.iter().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
    entries
}

/// Type-sensitive equality. Numbers compare by numeric value so that `1`
/// and `1.0` are equal.
fn scalars_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => numbers_equal(l, r),
        _ => left == right,
    }
}

fn numbers_equal(left: &Number, right: &Number) -> bool {
    if let (Some(l), Some(r)) = (left.as_i64(), right.as_i64()) {
        return l == r;
    }
    if let (Some(l), Some(r)) = (left.as_u64(), right.as_u64()) {
        return l == r;
    }
    match (left.as_f64(), right.as_f64()) {
        (Some(l), Some(r)) => l == r,
        _ => false,
    }
}

fn render_summary(records: &[DiscrepancyRecord]) -> String {
    if records.is_empty() {
        return IDENTICAL_SUMMARY.to_string();
    }
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(DIFFERENCES_HEADER.to_string());
    lines.extend(records.iter().map(DiscrepancyRecord::message));
    lines.join("\n")
}
