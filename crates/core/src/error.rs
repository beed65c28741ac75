//! Errors raised when parsing model values from text.

/// A textual value did not name any known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseError {
    /// What was being parsed ("status", "role", ...)
    pub kind: &'static str,
    /// The rejected input
    pub value: String,
}

impl ParseError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
