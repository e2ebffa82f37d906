//! # jsoncmp
//!
//! Canonicalize JSON documents and report the structural differences between them.
//!
//! Two pieces make up the crate:
//!
//! - a **normalizer** that parses text and re-serializes it with object keys sorted at every
//!   level and a fixed 4-space indentation;
//! - a **differ** that walks two JSON objects and reports keys missing on either side and keys
//!   whose values differ.
//!
//! ```rust
//! use serde_json::json;
//!
//! let left = json!({"x": 1, "y": {"z": 2}});
//! let right = json!({"x": 1, "y": {"z": 3}, "w": 4});
//!
//! let report = jsoncmp::compare(&left, &right)?;
//! assert_eq!(report.missing_in_left(), ["/w"]);
//! assert!(report.missing_in_right().is_empty());
//! assert_eq!(report.differing()[0].to_string(), "/y/z: 2 != 3");
//! # Ok::<(), jsoncmp::CompareError>(())
//! ```
//!
//! For interactive hosts, [`Session`] keeps the two validated documents between the
//! "check syntax" step and the "compare" step:
//!
//! ```rust
//! let mut session = jsoncmp::Session::new();
//! let outcome = session.validate(r#"{"b": 1, "a": 2}"#, r#"{"a": 2}"#);
//! assert!(outcome.is_valid());
//!
//! let report = session.compare()?;
//! assert_eq!(report.missing_in_right(), ["/b"]);
//! # Ok::<(), jsoncmp::SessionError>(())
//! ```
mod canonical;
mod cmp;
mod diff;
mod error;
mod paths;
mod session;

pub use canonical::{canonicalize, parse_and_canonicalize, sort_keys, CanonicalDocument, INDENT};
pub use cmp::equal;
pub use diff::{compare, diff, diff_at, DiffReport, Mismatch, Side};
pub use error::{CompareError, ErrorCategory, SessionError, SyntaxError};
pub use session::{Session, ValidationOutcome};
