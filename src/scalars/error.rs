use thiserror::Error;

/// Error returned when a scalar value cannot be decoded.
///
/// Carries the kind of scalar that was expected and the offending input, so
/// that a failed decode deep inside a record still points at the bad bytes.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::scalars::{FormatError, Int};
///
/// let error = "twelve".parse::<Int>().unwrap_err();
/// assert_eq!(error, FormatError::new("integer", "twelve"));
/// assert_eq!(error.to_string(), r#"Invalid integer value "twelve""#);
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid {kind} value {input:?}")]
pub struct FormatError {
    /// The kind of scalar that was expected (e.g. "integer", "timestamp").
    pub kind: &'static str,
    /// The input that failed to decode.
    pub input: String,
}

impl FormatError {
    /// Creates a new format error for the given kind and input.
    #[must_use]
    pub fn new(kind: &'static str, input: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.into(),
        }
    }
}
