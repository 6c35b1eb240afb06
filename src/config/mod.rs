//! Configuration types for the WooCommerce API client.
//!
//! This module provides the configuration used to construct the transport
//! shared by every resource client.
//!
//! # Overview
//!
//! - [`WooCommerceConfig`]: Store URL, credentials, timeout and surface prefixes
//! - [`WooCommerceConfigBuilder`]: A builder for constructing [`WooCommerceConfig`]
//! - [`BaseUrl`], [`ConsumerKey`], [`ConsumerSecret`]: Validated newtypes
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use woocommerce_api::{BaseUrl, ConsumerKey, ConsumerSecret, WooCommerceConfig};
//!
//! let config = WooCommerceConfig::builder()
//!     .base_url(BaseUrl::new("https://example.com").unwrap())
//!     .consumer_key(ConsumerKey::new("ck_123").unwrap())
//!     .consumer_secret(ConsumerSecret::new("cs_456").unwrap())
//!     .timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.management_prefix(), "/wp-json/wc/v3");
//! ```

mod newtypes;

pub use newtypes::{BaseUrl, ConsumerKey, ConsumerSecret};

use std::time::Duration;

use crate::error::ConfigError;

/// Default timeout covering connection setup and response headers.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Default path prefix of the management (REST v3) API.
pub const DEFAULT_MANAGEMENT_PREFIX: &str = "/wp-json/wc/v3";

/// Default path prefix of the storefront (Store API / blocks) API.
pub const DEFAULT_STOREFRONT_PREFIX: &str = "/wp-json/wc/store/v1";

/// Configuration for the WooCommerce API client.
///
/// The configuration is immutable once built. Several configurations (and the
/// transports built from them) can coexist in one process, each with its own
/// timeout and prefixes.
///
/// # Thread Safety
///
/// `WooCommerceConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct WooCommerceConfig {
    base_url: BaseUrl,
    consumer_key: ConsumerKey,
    consumer_secret: ConsumerSecret,
    timeout: Duration,
    management_prefix: String,
    storefront_prefix: String,
    user_agent_prefix: Option<String>,
}

impl WooCommerceConfig {
    /// Creates a new builder for constructing a `WooCommerceConfig`.
    #[must_use]
    pub fn builder() -> WooCommerceConfigBuilder {
        WooCommerceConfigBuilder::new()
    }

    /// Returns the store base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the consumer key.
    #[must_use]
    pub const fn consumer_key(&self) -> &ConsumerKey {
        &self.consumer_key
    }

    /// Returns the consumer secret.
    #[must_use]
    pub const fn consumer_secret(&self) -> &ConsumerSecret {
        &self.consumer_secret
    }

    /// Returns the per-call timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the management API path prefix.
    #[must_use]
    pub fn management_prefix(&self) -> &str {
        &self.management_prefix
    }

    /// Returns the storefront API path prefix.
    #[must_use]
    pub fn storefront_prefix(&self) -> &str {
        &self.storefront_prefix
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify WooCommerceConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WooCommerceConfig>();
};

/// Builder for constructing [`WooCommerceConfig`] instances.
///
/// Required fields are `base_url`, `consumer_key` and `consumer_secret`.
///
/// # Defaults
///
/// - `timeout`: 60 seconds
/// - `management_prefix`: `/wp-json/wc/v3`
/// - `storefront_prefix`: `/wp-json/wc/store/v1`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct WooCommerceConfigBuilder {
    base_url: Option<BaseUrl>,
    consumer_key: Option<ConsumerKey>,
    consumer_secret: Option<ConsumerSecret>,
    timeout: Option<Duration>,
    management_prefix: Option<String>,
    storefront_prefix: Option<String>,
    user_agent_prefix: Option<String>,
}

impl WooCommerceConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store base URL (required).
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the consumer key (required).
    #[must_use]
    pub fn consumer_key(mut self, key: ConsumerKey) -> Self {
        self.consumer_key = Some(key);
        self
    }

    /// Sets the consumer secret (required).
    #[must_use]
    pub fn consumer_secret(mut self, secret: ConsumerSecret) -> Self {
        self.consumer_secret = Some(secret);
        self
    }

    /// Sets the timeout applied to connection setup and response headers.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Overrides the management API path prefix.
    #[must_use]
    pub fn management_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.management_prefix = Some(prefix.into());
        self
    }

    /// Overrides the storefront API path prefix.
    #[must_use]
    pub fn storefront_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.storefront_prefix = Some(prefix.into());
        self
    }

    /// Sets a prefix prepended to the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`WooCommerceConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if a required field is unset.
    pub fn build(self) -> Result<WooCommerceConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;
        let consumer_key = self.consumer_key.ok_or(ConfigError::MissingRequiredField {
            field: "consumer_key",
        })?;
        let consumer_secret = self
            .consumer_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "consumer_secret",
            })?;

        Ok(WooCommerceConfig {
            base_url,
            consumer_key,
            consumer_secret,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            management_prefix: self
                .management_prefix
                .unwrap_or_else(|| DEFAULT_MANAGEMENT_PREFIX.to_string()),
            storefront_prefix: self
                .storefront_prefix
                .unwrap_or_else(|| DEFAULT_STOREFRONT_PREFIX.to_string()),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
