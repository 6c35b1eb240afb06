//! Floating-point scalars that encode as two-decimal JSON strings.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use super::FormatError;

/// Rounds to two decimal places, half away from zero.
///
/// Rounding operates on the binary value, so `1.005` (stored slightly below
/// the midpoint) becomes `1.00` while `0.125` (exact) becomes `0.13`.
fn round2(value: f64) -> f64 {
    // Adding +0.0 turns a negative zero into a positive one.
    (value * 100.0).round() / 100.0 + 0.0
}

fn format2(value: f64) -> String {
    format!("{:.2}", round2(value))
}

/// A float encoded as a JSON string with exactly two decimals.
///
/// Decodes from either a JSON number or a JSON string parseable as a finite
/// float; `"NaN"` and `"inf"` are rejected. The round-trip holds up to
/// two-decimal precision only.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::scalars::Float;
///
/// assert_eq!(serde_json::to_string(&Float(12.3)).unwrap(), r#""12.30""#);
/// assert_eq!(serde_json::from_str::<Float>(r#""9.5""#).unwrap(), Float(9.5));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Float(pub f64);

impl Float {
    /// Returns the wrapped value.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Returns the value rounded to two decimal places.
    #[must_use]
    pub fn rounded(self) -> f64 {
        round2(self.0)
    }
}

impl From<f64> for Float {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Float {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format2(self.0))
    }
}

impl FromStr for Float {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(Self)
            .ok_or_else(|| FormatError::new("float", s))
    }
}

impl Serialize for Float {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format2(self.0))
    }
}

struct FloatVisitor;

impl<'de> Visitor<'de> for FloatVisitor {
    type Value = Float;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or a string containing a number")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Float, E> {
        if v.is_finite() {
            Ok(Float(v))
        } else {
            Err(E::custom(FormatError::new("float", v.to_string())))
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Float, E> {
        Ok(Float(v as f64))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Float, E> {
        Ok(Float(v as f64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Float, E> {
        v.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Float {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FloatVisitor)
    }
}

/// A float that may be absent.
///
/// Product prices are sent as `""` when unset and as either strings or numbers
/// otherwise. Both `null` and `""` decode to the absent state; absent encodes
/// as `null`.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::scalars::NullFloat;
///
/// let price: NullFloat = serde_json::from_str(r#""""#).unwrap();
/// assert!(!price.is_valid());
///
/// let price: NullFloat = serde_json::from_str(r#""19.9""#).unwrap();
/// assert_eq!(price.get(), Some(19.9));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct NullFloat(pub Option<f64>);

impl NullFloat {
    /// Returns whether a value is present.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    /// Returns the wrapped value, if any.
    #[must_use]
    pub const fn get(self) -> Option<f64> {
        self.0
    }
}

impl From<Option<f64>> for NullFloat {
    fn from(value: Option<f64>) -> Self {
        Self(value)
    }
}

impl Serialize for NullFloat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0 {
            Some(value) => serializer.serialize_str(&format2(value)),
            None => serializer.serialize_none(),
        }
    }
}

struct NullFloatVisitor;

impl<'de> Visitor<'de> for NullFloatVisitor {
    type Value = NullFloat;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("null, an empty string, a number or a string containing a number")
    }

    fn visit_unit<E: de::Error>(self) -> Result<NullFloat, E> {
        Ok(NullFloat(None))
    }

    fn visit_none<E: de::Error>(self) -> Result<NullFloat, E> {
        Ok(NullFloat(None))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<NullFloat, E> {
        FloatVisitor.visit_f64(v).map(|f| NullFloat(Some(f.0)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<NullFloat, E> {
        FloatVisitor.visit_i64(v).map(|f| NullFloat(Some(f.0)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<NullFloat, E> {
        FloatVisitor.visit_u64(v).map(|f| NullFloat(Some(f.0)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<NullFloat, E> {
        if v.is_empty() {
            return Ok(NullFloat(None));
        }
        FloatVisitor.visit_str(v).map(|f| NullFloat(Some(f.0)))
    }
}

impl<'de> Deserialize<'de> for NullFloat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NullFloatVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(value: f64) -> String {
        serde_json::to_string(&Float(value)).unwrap()
    }

    #[test]
    fn test_rejects_non_finite_strings() {
        for input in ["NaN", "nan", "inf", "-inf", "infinity"] {
            assert_eq!(
                input.parse::<Float>(),
                Err(FormatError::new("float", input)),
                "{input}"
            );
            assert!(serde_json::from_str::<Float>(&format!("\"{input}\"")).is_err());
            assert!(serde_json::from_str::<NullFloat>(&format!("\"{input}\"")).is_err());
        }
    }

    #[test]
    fn test_encodes_with_two_decimals() {
        assert_eq!(encode(0.0), r#""0.00""#);
        assert_eq!(encode(12.3), r#""12.30""#);
        assert_eq!(encode(1234.5678), r#""1234.57""#);
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(encode(0.125), r#""0.13""#);
        assert_eq!(encode(-0.125), r#""-0.13""#);
        assert_eq!(encode(12.345), r#""12.35""#);
    }

    #[test]
    fn test_rounds_binary_value_below_midpoint_down() {
        assert_eq!(encode(1.005), r#""1.00""#);
        assert_eq!(encode(12.344), r#""12.34""#);
    }

    #[test]
    fn test_negative_zero_is_normalised() {
        assert_eq!(encode(-0.001), r#""0.00""#);
    }

    #[test]
    fn test_decodes_from_number_and_string() {
        assert_eq!(serde_json::from_str::<Float>("12.5").unwrap(), Float(12.5));
        assert_eq!(serde_json::from_str::<Float>("3").unwrap(), Float(3.0));
        assert_eq!(
            serde_json::from_str::<Float>(r#""12.5""#).unwrap(),
            Float(12.5)
        );
    }

    #[test]
    fn test_rejects_invalid_string() {
        let error = serde_json::from_str::<Float>(r#""12,5""#).unwrap_err();
        assert!(error.to_string().contains("12,5"));
        assert!(serde_json::from_str::<Float>(r#""""#).is_err());
    }

    #[test]
    fn test_round_trip_is_two_decimal_precision() {
        let encoded = encode(19.999);
        let decoded: Float = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, Float(20.0));
    }

    #[test]
    fn test_null_float_decodes_absent_shapes() {
        assert_eq!(serde_json::from_str::<NullFloat>("null").unwrap(), NullFloat(None));
        assert_eq!(serde_json::from_str::<NullFloat>(r#""""#).unwrap(), NullFloat(None));
    }

    #[test]
    fn test_null_float_decodes_present_shapes() {
        assert_eq!(
            serde_json::from_str::<NullFloat>(r#""4.2""#).unwrap(),
            NullFloat(Some(4.2))
        );
        assert_eq!(
            serde_json::from_str::<NullFloat>("7").unwrap(),
            NullFloat(Some(7.0))
        );
    }

    #[test]
    fn test_null_float_encoding() {
        assert_eq!(serde_json::to_string(&NullFloat(None)).unwrap(), "null");
        assert_eq!(
            serde_json::to_string(&NullFloat(Some(5.0))).unwrap(),
            r#""5.00""#
        );
    }
}
