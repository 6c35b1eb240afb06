//! Error types for the WooCommerce API client.
//!
//! This module contains error types used throughout the crate for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use woocommerce_api::{ConsumerKey, ConfigError};
//!
//! let result = ConsumerKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyConsumerKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
///
/// Every variant is raised before any network I/O takes place.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Consumer key cannot be empty.
    #[error("Consumer key cannot be empty. Please provide the key generated in the WooCommerce admin.")]
    EmptyConsumerKey,

    /// Consumer secret cannot be empty.
    #[error("Consumer secret cannot be empty. Please provide the secret generated in the WooCommerce admin.")]
    EmptyConsumerSecret,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide the store URL with scheme (e.g., 'https://example.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// The API surface tag is not one of the known surfaces.
    #[error("Invalid API surface '{surface}'. Expected 'management' (rest) or 'storefront' (blocks).")]
    InvalidApiSurface {
        /// The tag that was provided.
        surface: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
