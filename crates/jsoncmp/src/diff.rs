//! Structural comparison of two JSON objects.
use core::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::{cmp::equal, error::CompareError, paths::LazyPath};

/// One of the two documents being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The other document.
    #[must_use]
    pub const fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// A key present on both sides with different values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mismatch {
    path: String,
    left: Value,
    right: Value,
}

impl Mismatch {
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
    #[must_use]
    pub fn left(&self) -> &Value {
        &self.left
    }
    #[must_use]
    pub fn right(&self) -> &Value {
        &self.right
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} != {}", self.path, self.left, self.right)
    }
}

/// The outcome of comparing two JSON objects.
///
/// Entries appear in the key iteration order of the compared objects, depth first. Swapping the
/// two documents swaps `missing_in_left` and `missing_in_right` as sets of paths, but not
/// necessarily their order: nested entries are collected while walking the left document, so
/// the walk direction decides how they interleave with top-level ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiffReport {
    missing_in_left: Vec<String>,
    missing_in_right: Vec<String>,
    differing: Vec<Mismatch>,
}

impl DiffReport {
    /// Paths present in the right document only.
    #[must_use]
    pub fn missing_in_left(&self) -> &[String] {
        &self.missing_in_left
    }
    /// Paths present in the left document only.
    #[must_use]
    pub fn missing_in_right(&self) -> &[String] {
        &self.missing_in_right
    }
    /// Paths present on both sides whose values differ.
    #[must_use]
    pub fn differing(&self) -> &[Mismatch] {
        &self.differing
    }
    /// Paths missing from the given side.
    #[must_use]
    pub fn missing_in(&self, side: Side) -> &[String] {
        match side {
            Side::Left => &self.missing_in_left,
            Side::Right => &self.missing_in_right,
        }
    }
    /// Whether the documents are structurally equal.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.missing_in_left.is_empty()
            && self.missing_in_right.is_empty()
            && self.differing.is_empty()
    }
    /// Total number of reported entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.missing_in_left.len() + self.missing_in_right.len() + self.differing.len()
    }
    #[must_use]
    pub fn into_parts(self) -> (Vec<String>, Vec<String>, Vec<Mismatch>) {
        (self.missing_in_left, self.missing_in_right, self.differing)
    }
}

/// Compare two objects from the document root.
#[must_use]
pub fn diff(left: &Map<String, Value>, right: &Map<String, Value>) -> DiffReport {
    diff_at(left, right, "")
}

/// Compare two objects, prefixing every reported path with `base_path`.
#[must_use]
pub fn diff_at(
    left: &Map<String, Value>,
    right: &Map<String, Value>,
    base_path: &str,
) -> DiffReport {
    let mut report = DiffReport::default();
    collect(left, right, &LazyPath::root(base_path), &mut report);
    report
}

fn collect(
    left: &Map<String, Value>,
    right: &Map<String, Value>,
    path: &LazyPath<'_>,
    report: &mut DiffReport,
) {
    for (key, left_value) in left {
        let Some(right_value) = right.get(key) else {
            report.missing_in_right.push(path.push(key).to_string());
            continue;
        };
        match (left_value, right_value) {
            (Value::Object(left_object), Value::Object(right_object)) => {
                collect(left_object, right_object, &path.push(key), report);
            }
            // An object facing a scalar lands here too and is reported as a value change.
            _ if !equal(left_value, right_value) => report.differing.push(Mismatch {
                path: path.push(key).to_string(),
                left: left_value.clone(),
                right: right_value.clone(),
            }),
            _ => {}
        }
    }
    for key in right.keys() {
        if !left.contains_key(key) {
            report.missing_in_left.push(path.push(key).to_string());
        }
    }
}

/// Compare two JSON documents whose roots must be objects.
///
/// # Errors
///
/// Returns [`CompareError::NonObjectRoot`] if either document is not an object.
pub fn compare(left: &Value, right: &Value) -> Result<DiffReport, CompareError> {
    let left = as_root_object(left, Side::Left)?;
    let right = as_root_object(right, Side::Right)?;
    let report = diff(left, right);
    tracing::debug!(
        missing_in_left = report.missing_in_left.len(),
        missing_in_right = report.missing_in_right.len(),
        differing = report.differing.len(),
        "Compared documents"
    );
    Ok(report)
}

fn as_root_object(value: &Value, side: Side) -> Result<&Map<String, Value>, CompareError> {
    value.as_object().ok_or(CompareError::NonObjectRoot {
        side,
        kind: type_name(value),
    })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
