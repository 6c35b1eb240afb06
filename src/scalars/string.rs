//! Text scalar tolerant of bare integers.

use std::fmt;
use std::ops::Deref;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// A string that the server sometimes sends as a bare integer.
///
/// Fields such as a tax line's `rate_id` arrive as `"5"` in one response and
/// as `5` in another. Both decode to the same text; encoding is always a JSON
/// string.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::scalars::NumericString;
///
/// let a: NumericString = serde_json::from_str("5").unwrap();
/// let b: NumericString = serde_json::from_str(r#""5""#).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(&*a, "5");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NumericString(pub String);

impl NumericString {
    /// Returns the value as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for NumericString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for NumericString {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Deref for NumericString {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NumericString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for NumericString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

struct NumericStringVisitor;

impl<'de> Visitor<'de> for NumericStringVisitor {
    type Value = NumericString;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or an integer")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<NumericString, E> {
        Ok(NumericString(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<NumericString, E> {
        Ok(NumericString(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<NumericString, E> {
        Ok(NumericString(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<NumericString, E> {
        Ok(NumericString(v.to_string()))
    }
}

impl<'de> Deserialize<'de> for NumericString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NumericStringVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_string() {
        let value: NumericString = serde_json::from_str(r#""standard""#).unwrap();
        assert_eq!(value.as_str(), "standard");
    }

    #[test]
    fn test_decodes_integer_to_text() {
        let value: NumericString = serde_json::from_str("-12").unwrap();
        assert_eq!(value.as_str(), "-12");
        let value: NumericString = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(value.as_str(), "18446744073709551615");
    }

    #[test]
    fn test_rejects_other_shapes() {
        assert!(serde_json::from_str::<NumericString>("1.5").is_err());
        assert!(serde_json::from_str::<NumericString>("true").is_err());
        assert!(serde_json::from_str::<NumericString>("null").is_err());
    }

    #[test]
    fn test_encodes_as_string() {
        let value = NumericString::from("7");
        assert_eq!(serde_json::to_string(&value).unwrap(), r#""7""#);
    }
}
