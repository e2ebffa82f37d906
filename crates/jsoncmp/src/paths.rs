use core::fmt;

/// A slash-delimited location inside a document.
///
/// Built on the stack while the differ descends and rendered into a `String` only when a
/// difference is actually recorded. Most keys compare equal, so most locations are never
/// materialized.
#[derive(Debug, Clone, Copy)]
pub(crate) enum LazyPath<'a> {
    /// The base path the comparison started from. Empty for whole documents.
    Root(&'a str),
    Key {
        segment: &'a str,
        parent: &'a LazyPath<'a>,
    },
}

impl<'a> LazyPath<'a> {
    #[inline]
    pub(crate) const fn root(base: &'a str) -> Self {
        LazyPath::Root(base)
    }

    #[inline]
    pub(crate) fn push(&'a self, segment: &'a str) -> LazyPath<'a> {
        LazyPath::Key {
            segment,
            parent: self,
        }
    }
}

impl fmt::Display for LazyPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LazyPath::Root(base) => f.write_str(base),
            LazyPath::Key { segment, parent } => {
                parent.fmt(f)?;
                f.write_str("/")?;
                f.write_str(segment)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LazyPath;
    use test_case::test_case;

    #[test_case("", &[], ""; "empty root")]
    #[test_case("", &["a"], "/a"; "single key")]
    #[test_case("", &["a", "b", "c"], "/a/b/c"; "nested keys")]
    #[test_case("/base", &["x"], "/base/x"; "custom base")]
    #[test_case("", &["", "k"], "//k"; "empty key is kept")]
    #[test_case("", &["a/b"], "/a/b"; "slashes in keys are not escaped")]
    fn rendering(base: &str, segments: &[&str], expected: &str) {
        fn render(path: &LazyPath<'_>, rest: &[&str]) -> String {
            match rest.split_first() {
                Some((segment, rest)) => render(&path.push(segment), rest),
                None => path.to_string(),
            }
        }
        assert_eq!(render(&LazyPath::root(base), segments), expected);
    }
}
