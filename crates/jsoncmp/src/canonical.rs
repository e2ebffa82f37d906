use serde::{ser::SerializeMap, Serialize, Serializer};
use serde_json::{ser::PrettyFormatter, Map, Value};

use crate::error::SyntaxError;

/// Indentation used by the canonical form.
pub const INDENT: &[u8] = b"    ";

/// Parse `text` and return its canonical form.
///
/// Object keys are sorted at every nesting level, arrays keep their order, and the output is
/// indented with four spaces. Two documents that differ only in the order of their object keys
/// produce identical output.
///
/// # Errors
///
/// Returns [`SyntaxError`] if `text` is not valid JSON.
///
/// ```rust
/// let canonical = jsoncmp::parse_and_canonicalize(r#"{"b": [2, 1], "a": null}"#)?;
/// assert_eq!(canonical, "{\n    \"a\": null,\n    \"b\": [\n        2,\n        1\n    ]\n}");
/// # Ok::<(), jsoncmp::SyntaxError>(())
/// ```
pub fn parse_and_canonicalize(text: &str) -> Result<String, SyntaxError> {
    CanonicalDocument::parse(text).map(CanonicalDocument::into_text)
}

/// Serialize `value` in canonical form.
#[must_use]
pub fn canonicalize(value: &Value) -> String {
    to_indented_string(&Sorted(value))
}

/// Render `value` with the canonical indentation, keeping its key order.
fn to_indented_string<T: Serialize + ?Sized>(value: &T) -> String {
    let mut buffer = Vec::with_capacity(128);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    value
        .serialize(&mut serializer)
        .expect("Serializing a JSON value into memory always succeeds");
    String::from_utf8(buffer).expect("JSON output is always valid UTF-8")
}

/// Rebuild `value` so that every object iterates its keys in sorted order.
#[must_use]
pub fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map
                .into_iter()
                .map(|(key, value)| (key, sort_keys(value)))
                .collect();
            entries.sort_by(|(k1, _), (k2, _)| k1.cmp(k2));
            Value::Object(entries.into_iter().collect::<Map<_, _>>())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

/// Serializes objects with sorted keys without cloning the underlying value.
struct Sorted<'a>(&'a Value);

impl Serialize for Sorted<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Value::Object(map) => {
                let mut entries: Vec<(&String, &Value)> = map.iter().collect();
                entries.sort_unstable_by(|(k1, _), (k2, _)| k1.cmp(k2));
                let mut state = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    state.serialize_entry(key, &Sorted(value))?;
                }
                state.end()
            }
            Value::Array(items) => serializer.collect_seq(items.iter().map(Sorted)),
            other => other.serialize(serializer),
        }
    }
}

/// A validated document: its canonical text together with the key-sorted tree it renders.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalDocument {
    text: String,
    value: Value,
}

impl CanonicalDocument {
    /// Parse and canonicalize `text`.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError`] if `text` is not valid JSON.
    pub fn parse(text: &str) -> Result<Self, SyntaxError> {
        let value: Value = serde_json::from_str(text).map_err(|error| {
            let error = SyntaxError::from(error);
            tracing::debug!(
                line = error.line(),
                column = error.column(),
                category = %error.category(),
                "Rejected malformed JSON"
            );
            error
        })?;
        Ok(Self::from_value(value))
    }

    /// Canonicalize an already parsed value.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        let value = sort_keys(value);
        // Keys already iterate in sorted order
        let text = to_indented_string(&value);
        tracing::trace!(bytes = text.len(), "Canonicalized document");
        Self { text, value }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The parsed tree. Object keys iterate in sorted order.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        self.value
    }
}
