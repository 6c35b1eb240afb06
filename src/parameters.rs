//! Query parameters for list and filter calls.
//!
//! Any type implementing [`Parameters`] can be handed to a request. The
//! encoded query string is canonical: keys are sorted, keys and values are
//! percent-encoded, and repeated keys appear as repeated `key=value` pairs.
//!
//! # Example
//!
//! ```rust
//! use woocommerce_api::parameters::{PageParams, Parameters};
//!
//! let page = PageParams { page: 2, per_page: 25 };
//! assert_eq!(page.encode(), "page=2&per_page=25");
//!
//! let filtered = page.with_value("status", "on-hold");
//! assert_eq!(filtered.encode(), "page=2&per_page=25&status=on-hold");
//! ```

use std::collections::BTreeMap;

/// A type that can produce the query parameters of a request.
pub trait Parameters {
    /// Returns the parameters as a key to values map.
    fn values(&self) -> BaseParameters;

    /// Returns the canonical encoded query string (without a leading `?`).
    fn encode(&self) -> String {
        self.values().encode()
    }

    /// Returns new parameters with `key` set to `value`.
    ///
    /// Any previous values of `key` are replaced; every other key is kept.
    /// `self` is left untouched, so the same parameters can be reused for
    /// other calls.
    fn with_value(&self, key: &str, value: &str) -> BaseParameters {
        let mut values = self.values();
        values.set(key, value);
        values
    }
}

/// A plain key to values map of query parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BaseParameters {
    values: BTreeMap<String, Vec<String>>,
}

impl BaseParameters {
    /// Creates empty parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to a single `value`, replacing previous values.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), vec![value.into()]);
    }

    /// Appends `value` to the values of `key`.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.entry(key.into()).or_default().push(value.into());
    }

    /// Returns the first value of `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns all values of `key`.
    #[must_use]
    pub fn get_all(&self, key: &str) -> &[String] {
        self.values.get(key).map_or(&[], Vec::as_slice)
    }

    /// Removes `key` and its values.
    pub fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }

    /// Returns `true` if no parameters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Encodes the parameters in URL query form, sorted by key.
    #[must_use]
    pub fn encode(&self) -> String {
        self.values
            .iter()
            .flat_map(|(key, values)| {
                let key = urlencoding::encode(key);
                values
                    .iter()
                    .map(move |value| format!("{key}={}", urlencoding::encode(value)))
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl Parameters for BaseParameters {
    fn values(&self) -> BaseParameters {
        self.clone()
    }
}

impl<K, V> FromIterator<(K, V)> for BaseParameters
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.add(key, value);
        }
        params
    }
}

/// Pagination parameters of list queries.
///
/// Encodes exactly the `page` and `per_page` keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageParams {
    /// The 1-based page number.
    pub page: u32,
    /// The number of records per page.
    pub per_page: u32,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 10,
        }
    }
}

impl Parameters for PageParams {
    fn values(&self) -> BaseParameters {
        let mut values = BaseParameters::new();
        values.set("page", self.page.to_string());
        values.set("per_page", self.per_page.to_string());
        values
    }
}
