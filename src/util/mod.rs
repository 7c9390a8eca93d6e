//! Small helpers shared by the engines

use thiserror::Error;

/// A name given on the command line or in a config did not match any known variant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{name}' (expected one of: {expected})")]
pub struct ParseNameError {
    /// What was being parsed (e.g. "sort algorithm")
    pub kind: &'static str,
    /// The rejected input
    pub name: String,
    /// Comma separated list of accepted names
    pub expected: &'static str,
}

impl ParseNameError {
    pub(crate) fn new(kind: &'static str, name: &str, expected: &'static str) -> Self {
        Self {
            kind,
            name: name.to_string(),
            expected,
        }
    }
}

/// Join displayable items with single spaces
///
/// Used for step text and by the CLI for stack and traversal listings.
///
/// ```
/// use algoscope::util::join_spaced;
/// assert_eq!(join_spaced([3, 1, 2]), "3 1 2");
/// ```
pub fn join_spaced<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: std::fmt::Display,
{
    let mut out = String::new();
    for (idx, item) in items.into_iter().enumerate() {
        if idx > 0 {
            out.push(' ');
        }
        out.push_str(&item.to_string());
    }
    out
}
