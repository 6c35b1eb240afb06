//! Management API credentials.
//!
//! This module provides the [`Credentials`] type holding the precomputed
//! Basic authentication value sent with management API calls.

use std::fmt;

use base64::prelude::*;

use crate::config::{ConsumerKey, ConsumerSecret};

/// Basic authentication credentials for the management API.
///
/// The value is derived once from the consumer key/secret pair as
/// `base64("key:secret")` and is never mutated afterwards, so a single
/// `Credentials` can be read concurrently from any number of tasks.
///
/// Storefront calls never carry these credentials.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::auth::Credentials;
/// use woocommerce_api::{ConsumerKey, ConsumerSecret};
///
/// let credentials = Credentials::new(
///     &ConsumerKey::new("ck").unwrap(),
///     &ConsumerSecret::new("cs").unwrap(),
/// );
/// assert_eq!(credentials.authorization_header(), "Basic Y2s6Y3M=");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    encoded: String,
}

impl Credentials {
    /// Derives credentials from a consumer key and secret.
    #[must_use]
    pub fn new(consumer_key: &ConsumerKey, consumer_secret: &ConsumerSecret) -> Self {
        let pair = format!("{}:{}", consumer_key.as_ref(), consumer_secret.as_ref());
        Self {
            encoded: BASE64_STANDARD.encode(pair),
        }
    }

    /// Returns the base64-encoded `key:secret` pair.
    #[must_use]
    pub fn encoded(&self) -> &str {
        &self.encoded
    }

    /// Returns the full `Authorization` header value.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Basic {}", self.encoded)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credentials(*****)")
    }
}
