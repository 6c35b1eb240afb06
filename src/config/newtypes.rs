//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated WooCommerce consumer key.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::ConsumerKey;
///
/// let key = ConsumerKey::new("ck_123").unwrap();
/// assert_eq!(key.as_ref(), "ck_123");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsumerKey(String);

impl ConsumerKey {
    /// Creates a new validated consumer key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyConsumerKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyConsumerKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ConsumerKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated WooCommerce consumer secret.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `ConsumerSecret(*****)` instead of the actual secret.
///
/// ```rust
/// use woocommerce_api::ConsumerSecret;
///
/// let secret = ConsumerSecret::new("cs_456").unwrap();
/// assert_eq!(format!("{:?}", secret), "ConsumerSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ConsumerSecret(String);

impl ConsumerSecret {
    /// Creates a new validated consumer secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyConsumerSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyConsumerSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ConsumerSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ConsumerSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ConsumerSecret(*****)")
    }
}

/// The validated base URL of a WooCommerce store.
///
/// This is the URL in front of `/wp-json`: if the REST index lives at
/// `https://example.com/wp-json/wc/v3`, the base URL is `https://example.com`.
/// A trailing slash is trimmed so that surface prefixes can be appended directly.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::BaseUrl;
///
/// let url = BaseUrl::new("https://example.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://example.com");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no alphabetic
    /// scheme, has no host, or carries a query string or fragment.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidBaseUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() || url.contains(['?', '#']) {
            return Err(invalid());
        }

        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/'])
            .map_or(url.len(), |i| host_start + i);
        if host_end == host_start {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consumer_key_rejects_empty() {
        assert_eq!(ConsumerKey::new(""), Err(ConfigError::EmptyConsumerKey));
    }

    #[test]
    fn test_consumer_secret_rejects_empty() {
        assert_eq!(
            ConsumerSecret::new(""),
            Err(ConfigError::EmptyConsumerSecret)
        );
    }

    #[test]
    fn test_consumer_secret_debug_is_masked() {
        let secret = ConsumerSecret::new("cs_very_secret").unwrap();
        let debug = format!("{secret:?}");
        assert!(!debug.contains("cs_very_secret"));
    }

    #[test]
    fn test_base_url_trims_trailing_slash() {
        let url = BaseUrl::new("https://shop.example.com///").unwrap();
        assert_eq!(url.as_ref(), "https://shop.example.com");
    }

    #[test]
    fn test_base_url_keeps_port_and_subdirectory() {
        let url = BaseUrl::new("http://127.0.0.1:8080/store").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), "127.0.0.1");
        assert_eq!(url.as_ref(), "http://127.0.0.1:8080/store");
    }

    #[test]
    fn test_base_url_rejects_missing_scheme() {
        assert!(matches!(
            BaseUrl::new("example.com"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_base_url_rejects_missing_host() {
        assert!(BaseUrl::new("https://").is_err());
        assert!(BaseUrl::new("https:///path").is_err());
    }

    #[test]
    fn test_base_url_rejects_query_string() {
        assert!(BaseUrl::new("https://example.com/?a=b").is_err());
    }
}
