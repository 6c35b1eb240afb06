//! Self-normalizing scalar types for WooCommerce payloads.
//!
//! WooCommerce serializes numeric and temporal fields inconsistently: the same
//! logical value may arrive as `"42"` from one endpoint and `42` from another,
//! and dates carry no timezone. The types in this module absorb those
//! differences so record types can declare one field type and decode every
//! shape the server produces.
//!
//! | Type | Encodes as | Decodes from |
//! |------|------------|--------------|
//! | [`Int`] | `"42"` | `42` or `"42"` |
//! | [`Float`] | `"12.30"` (two decimals) | `12.3` or `"12.3"` |
//! | [`NullFloat`] | `null` or `"12.30"` | `null`, `""`, number or numeric string |
//! | [`Time`] | `"2024-01-02T03:04:05"` | exactly that layout |
//! | [`NullTime`] | `null` or a [`Time`] | `null` or a [`Time`] string |
//! | [`NumericString`] | `"abc"` | `"abc"` or `42` |
//!
//! Each type also implements [`FromStr`](std::str::FromStr) so the string form
//! can be parsed directly, returning a [`FormatError`] on failure.
//!
//! # Example
//!
//! ```rust
//! use woocommerce_api::scalars::{Float, Int};
//!
//! let a: Int = serde_json::from_str("42").unwrap();
//! let b: Int = serde_json::from_str(r#""42""#).unwrap();
//! assert_eq!(a, b);
//!
//! assert_eq!(serde_json::to_string(&Float(12.3)).unwrap(), r#""12.30""#);
//! ```

mod error;
mod float;
mod int;
mod string;
mod time;

pub use error::FormatError;
pub use float::{Float, NullFloat};
pub use int::Int;
pub use string::NumericString;
pub use time::{NullTime, Time, TIME_FORMAT};
