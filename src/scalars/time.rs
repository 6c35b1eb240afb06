//! Timestamp scalars in the server's local wall-clock layout.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDateTime, Timelike};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use super::FormatError;

/// Layout of every WooCommerce timestamp: no timezone, no fractional seconds.
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A timestamp encoded as `YYYY-MM-DDTHH:MM:SS`.
///
/// The value carries no timezone. It is wall-clock time local to the store,
/// which is why it wraps a [`NaiveDateTime`] rather than a zoned type.
/// Decoding is strict: every field is zero-padded, RFC 3339 strings with `Z`
/// or an offset are rejected, and so is a leap second.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::scalars::Time;
///
/// let time: Time = serde_json::from_str(r#""2024-03-09T14:05:00""#).unwrap();
/// assert_eq!(time.to_string(), "2024-03-09T14:05:00");
/// assert!("2024-03-09T14:05:00Z".parse::<Time>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time(pub NaiveDateTime);

impl Time {
    /// Returns the wrapped wall-clock value.
    #[must_use]
    pub const fn get(self) -> NaiveDateTime {
        self.0
    }
}

impl From<NaiveDateTime> for Time {
    fn from(value: NaiveDateTime) -> Self {
        Self(value)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIME_FORMAT))
    }
}

impl FromStr for Time {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !has_layout(s) {
            return Err(FormatError::new("timestamp", s));
        }
        NaiveDateTime::parse_from_str(s, TIME_FORMAT)
            .ok()
            .filter(|value| value.nanosecond() == 0)
            .map(Self)
            .ok_or_else(|| FormatError::new("timestamp", s))
    }
}

// chrono alone accepts unpadded fields, a leading space and a signed year.
fn has_layout(s: &str) -> bool {
    s.len() == 19
        && s.bytes().enumerate().all(|(i, c)| match i {
            4 | 7 => c == b'-',
            10 => c == b'T',
            13 | 16 => c == b':',
            _ => c.is_ascii_digit(),
        })
}

impl Serialize for Time {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

struct TimeVisitor;

impl<'de> Visitor<'de> for TimeVisitor {
    type Value = Time;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a timestamp string in YYYY-MM-DDTHH:MM:SS layout")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Time, E> {
        v.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Time {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(TimeVisitor)
    }
}

/// A timestamp that may be absent.
///
/// Distinguishes "absent" (`null` on the wire) from any actual timestamp.
/// Fields such as `date_paid` are `null` until the event happens.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::scalars::NullTime;
///
/// let unpaid: NullTime = serde_json::from_str("null").unwrap();
/// assert!(!unpaid.is_valid());
/// assert_eq!(serde_json::to_string(&unpaid).unwrap(), "null");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NullTime(pub Option<Time>);

impl NullTime {
    /// Returns whether a timestamp is present.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    /// Returns the timestamp, if present.
    #[must_use]
    pub const fn get(self) -> Option<Time> {
        self.0
    }
}

impl From<Time> for NullTime {
    fn from(value: Time) -> Self {
        Self(Some(value))
    }
}

impl Serialize for NullTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.0 {
            Some(time) => time.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for NullTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<Time>::deserialize(deserializer).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate, Timelike};

    fn sample() -> Time {
        let date = NaiveDate::from_ymd_opt(2023, 11, 5).unwrap();
        Time(date.and_hms_opt(7, 8, 9).unwrap())
    }

    #[test]
    fn test_encodes_without_timezone() {
        assert_eq!(
            serde_json::to_string(&sample()).unwrap(),
            r#""2023-11-05T07:08:09""#
        );
    }

    #[test]
    fn test_decodes_wall_clock_fields() {
        let time: Time = serde_json::from_str(r#""2023-11-05T07:08:09""#).unwrap();
        let value = time.get();

        assert_eq!(value.year(), 2023);
        assert_eq!(value.month(), 11);
        assert_eq!(value.day(), 5);
        assert_eq!(value.hour(), 7);
        assert_eq!(value.minute(), 8);
        assert_eq!(value.second(), 9);
        assert_eq!(time, sample());
    }

    #[test]
    fn test_rejects_zoned_timestamps() {
        assert!(serde_json::from_str::<Time>(r#""2023-11-05T07:08:09Z""#).is_err());
        assert!(serde_json::from_str::<Time>(r#""2023-11-05T07:08:09+02:00""#).is_err());
    }

    #[test]
    fn test_rejects_fractional_seconds_and_other_layouts() {
        assert!("2023-11-05T07:08:09.123".parse::<Time>().is_err());
        assert!("2023-11-05 07:08:09".parse::<Time>().is_err());
        assert!("2023-11-05".parse::<Time>().is_err());
    }

    #[test]
    fn test_rejects_loose_layouts() {
        assert!("2023-1-5T7:8:9".parse::<Time>().is_err());
        assert!(" 2023-11-05T07:08:09".parse::<Time>().is_err());
        assert!("+2023-11-05T07:08:09".parse::<Time>().is_err());
        assert!("2023-11-05T07:08:09 ".parse::<Time>().is_err());
    }

    #[test]
    fn test_rejects_leap_second() {
        let error = "2023-11-05T07:08:60".parse::<Time>().unwrap_err();
        assert_eq!(error, FormatError::new("timestamp", "2023-11-05T07:08:60"));
    }

    #[test]
    fn test_rejects_out_of_range_fields() {
        assert!("2023-13-05T07:08:09".parse::<Time>().is_err());
        assert!("2023-02-30T07:08:09".parse::<Time>().is_err());
        assert!("2023-11-05T24:08:09".parse::<Time>().is_err());
    }

    #[test]
    fn test_rejects_non_string_shapes() {
        assert!(serde_json::from_str::<Time>("1699168089").is_err());
        assert!(serde_json::from_str::<Time>("null").is_err());
    }

    #[test]
    fn test_null_time_encodes_absent_as_null() {
        assert_eq!(serde_json::to_string(&NullTime(None)).unwrap(), "null");
        assert_eq!(
            serde_json::to_string(&NullTime::from(sample())).unwrap(),
            r#""2023-11-05T07:08:09""#
        );
    }

    #[test]
    fn test_null_time_decodes_null_as_invalid() {
        let value: NullTime = serde_json::from_str("null").unwrap();
        assert!(!value.is_valid());
        assert_eq!(value, NullTime::default());
    }

    #[test]
    fn test_null_time_decodes_like_time() {
        let raw = r#""2023-11-05T07:08:09""#;
        let value: NullTime = serde_json::from_str(raw).unwrap();
        let time: Time = serde_json::from_str(raw).unwrap();

        assert!(value.is_valid());
        assert_eq!(value.get(), Some(time));
    }

    #[test]
    fn test_null_time_propagates_format_errors() {
        let error = serde_json::from_str::<NullTime>(r#""yesterday""#).unwrap_err();
        assert!(error.to_string().contains("yesterday"));
    }
}
