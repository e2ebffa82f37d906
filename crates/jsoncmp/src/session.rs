use crate::{
    canonical::CanonicalDocument,
    diff::{compare, DiffReport, Side},
    error::{SessionError, SyntaxError},
};

/// Holds the two validated documents between the validation step and the comparison step.
///
/// A side is stored only when its text parses; a failed validation clears that side, so a
/// stale document is never compared against a fresh one.
#[derive(Debug, Default, Clone)]
pub struct Session {
    left: Option<CanonicalDocument>,
    right: Option<CanonicalDocument>,
}

/// Per-side result of [`Session::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationOutcome {
    left: Result<(), SyntaxError>,
    right: Result<(), SyntaxError>,
}

impl ValidationOutcome {
    #[must_use]
    pub fn get(&self, side: Side) -> Result<(), &SyntaxError> {
        match side {
            Side::Left => self.left.as_ref().copied(),
            Side::Right => self.right.as_ref().copied(),
        }
    }
    /// Whether both sides parsed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.left.is_ok() && self.right.is_ok()
    }
    /// Iterate over the failed sides, left first.
    pub fn errors(&self) -> impl Iterator<Item = (Side, &SyntaxError)> {
        [(Side::Left, &self.left), (Side::Right, &self.right)]
            .into_iter()
            .filter_map(|(side, result)| result.as_ref().err().map(|error| (side, error)))
    }
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and store both documents. A failure on one side does not affect the other.
    pub fn validate(&mut self, left: &str, right: &str) -> ValidationOutcome {
        ValidationOutcome {
            left: self.validate_side(Side::Left, left).map(|_| ()),
            right: self.validate_side(Side::Right, right).map(|_| ()),
        }
    }

    /// Validate and store a single document.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError`] if `text` is not valid JSON. The side is cleared in that case.
    pub fn validate_side(
        &mut self,
        side: Side,
        text: &str,
    ) -> Result<&CanonicalDocument, SyntaxError> {
        let slot = self.slot_mut(side);
        match CanonicalDocument::parse(text) {
            Ok(document) => {
                tracing::debug!(%side, "Stored validated document");
                Ok(slot.insert(document))
            }
            Err(error) => {
                *slot = None;
                tracing::debug!(%side, %error, "Validation failed");
                Err(error)
            }
        }
    }

    /// The stored document for `side`, if it was validated.
    #[must_use]
    pub fn document(&self, side: Side) -> Option<&CanonicalDocument> {
        match side {
            Side::Left => self.left.as_ref(),
            Side::Right => self.right.as_ref(),
        }
    }

    /// Whether both sides hold a validated document.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }

    /// Compare the two stored documents.
    ///
    /// # Errors
    ///
    /// - [`SessionError::NotValidated`] if either side has not been validated successfully;
    /// - [`SessionError::Compare`] if either document is not an object.
    pub fn compare(&self) -> Result<DiffReport, SessionError> {
        match (&self.left, &self.right) {
            (Some(left), Some(right)) => Ok(compare(left.value(), right.value())?),
            _ => Err(SessionError::NotValidated),
        }
    }

    /// Discard both documents.
    pub fn reset(&mut self) {
        self.left = None;
        self.right = None;
    }

    fn slot_mut(&mut self, side: Side) -> &mut Option<CanonicalDocument> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CompareError;

    #[test]
    fn compare_requires_validation() {
        let session = Session::new();
        assert!(!session.is_ready());
        assert_eq!(session.compare(), Err(SessionError::NotValidated));
    }

    #[test]
    fn sides_are_validated_independently() {
        let mut session = Session::new();
        let outcome = session.validate("{invalid", r#"{"b": 1, "a": 2}"#);
        assert!(!outcome.is_valid());
        assert!(outcome.get(Side::Left).is_err());
        assert!(outcome.get(Side::Right).is_ok());
        let errors: Vec<Side> = outcome.errors().map(|(side, _)| side).collect();
        assert_eq!(errors, [Side::Left]);
        assert!(session.document(Side::Left).is_none());
        assert_eq!(
            session.document(Side::Right).map(CanonicalDocument::text),
            Some("{\n    \"a\": 2,\n    \"b\": 1\n}")
        );
        assert_eq!(session.compare(), Err(SessionError::NotValidated));
    }

    #[test]
    fn failed_revalidation_clears_the_side() {
        let mut session = Session::new();
        assert!(session.validate("{}", "{}").is_valid());
        assert!(session.is_ready());
        assert!(session.validate_side(Side::Left, "[").is_err());
        assert!(!session.is_ready());
        assert_eq!(session.compare(), Err(SessionError::NotValidated));
    }

    #[test]
    fn compares_stored_documents() {
        let mut session = Session::new();
        assert!(session
            .validate(r#"{"x": 1, "y": {"z": 2}}"#, r#"{"x": 1, "y": {"z": 3}, "w": 4}"#)
            .is_valid());
        let report = session.compare().expect("Both sides are objects");
        assert_eq!(report.missing_in_left(), ["/w"]);
        assert_eq!(report.differing()[0].to_string(), "/y/z: 2 != 3");
    }

    #[test]
    fn stored_documents_iterate_in_sorted_order() {
        let mut session = Session::new();
        assert!(session.validate(r#"{"b": 1, "a": 1}"#, r#"{"d": 1}"#).is_valid());
        let report = session.compare().expect("Both sides are objects");
        assert_eq!(report.missing_in_right(), ["/a", "/b"]);
    }

    #[test]
    fn non_object_documents_are_rejected_on_compare() {
        let mut session = Session::new();
        assert!(session.validate("[1]", "{}").is_valid());
        assert_eq!(
            session.compare(),
            Err(SessionError::Compare(CompareError::NonObjectRoot {
                side: Side::Left,
                kind: "array"
            }))
        );
    }

    #[test]
    fn reset_discards_documents() {
        let mut session = Session::new();
        assert!(session.validate("{}", "{}").is_valid());
        session.reset();
        assert!(session.document(Side::Left).is_none());
        assert!(session.document(Side::Right).is_none());
    }
}
