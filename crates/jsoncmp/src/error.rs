use core::fmt;

use crate::diff::Side;

/// The broad class of a [`SyntaxError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The input is not syntactically valid JSON.
    Syntax,
    /// The input ended in the middle of a value.
    Eof,
    /// The input is well-formed but not representable, e.g. a number out of range.
    Data,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Syntax => f.write_str("syntax"),
            ErrorCategory::Eof => f.write_str("unexpected end of input"),
            ErrorCategory::Data => f.write_str("data"),
        }
    }
}

/// Input text could not be parsed as JSON.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct SyntaxError {
    message: String,
    line: usize,
    column: usize,
    category: ErrorCategory,
}

impl SyntaxError {
    /// Human-readable description, including the position.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
    /// One-based line of the offending character.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }
    /// One-based column of the offending character.
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        self.category
    }
}

impl From<serde_json::Error> for SyntaxError {
    fn from(error: serde_json::Error) -> Self {
        let category = match error.classify() {
            serde_json::error::Category::Eof => ErrorCategory::Eof,
            serde_json::error::Category::Data => ErrorCategory::Data,
            // Parsing from memory never performs I/O
            serde_json::error::Category::Syntax | serde_json::error::Category::Io => {
                ErrorCategory::Syntax
            }
        };
        SyntaxError {
            message: error.to_string(),
            line: error.line(),
            column: error.column(),
            category,
        }
    }
}

/// Two values can not be compared structurally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompareError {
    /// Only objects have keys to compare.
    #[error("the {side} document must be a JSON object, got {kind}")]
    NonObjectRoot { side: Side, kind: &'static str },
}

/// Errors raised by [`crate::Session::compare`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// At least one side has not been validated successfully yet.
    #[error("validate both JSON documents before comparing")]
    NotValidated,
    #[error(transparent)]
    Compare(#[from] CompareError),
}
