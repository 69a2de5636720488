//! Error type used while reading and parsing Go sources.

/// Lightweight error wrapper used by the parser and loader instead of raw strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct GoSourceError(pub String);

impl From<String> for GoSourceError {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for GoSourceError {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
