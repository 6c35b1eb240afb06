//! HTTP-specific error types and the error classifier.
//!
//! This module contains the error taxonomy of the transport and the
//! state-free classifier that turns a non-success response into an error.
//!
//! # Error Handling
//!
//! - [`ApiError`]: 4xx/5xx response with a structured WooCommerce error body
//! - [`HttpResponseError`]: any other non-2xx response, with the raw body
//! - [`InvalidHttpRequestError`]: a request that fails validation before sending
//! - [`HttpError`]: unified error type encompassing all of the above
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Status {}", response.status()),
//!     Err(HttpError::Api(e)) => println!("{} ({}): {}", e.status_code, e.code, e.message),
//!     Err(HttpError::Response(e)) => println!("Status {}: {}", e.code, e.body_text()),
//!     Err(HttpError::Timeout { timeout }) => println!("Gave up after {timeout:?}"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::error::ConfigError;
use crate::scalars::FormatError;

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A field-level error nested inside [`ApiErrorData::details`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code.
    #[serde(default)]
    pub code: String,
    /// Human-readable message.
    #[serde(default)]
    pub message: String,
    /// Further errors reported for the same field.
    #[serde(default, deserialize_with = "null_as_default")]
    pub additional_errors: Vec<ErrorDetail>,
}

/// The `data` member of a structured WooCommerce error.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorData {
    /// The status the server reported in the body.
    #[serde(default)]
    pub status: u16,
    /// Invalid parameters, keyed by parameter name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub params: HashMap<String, String>,
    /// Per-field error details, keyed by parameter name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub details: HashMap<String, ErrorDetail>,
}

/// A structured error returned by the server for a 4xx/5xx response.
///
/// The body shape is `{code, message, data: {status, params, details}}`;
/// `status_code` is always the HTTP status of the response.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::clients::{classify_error, HttpError};
///
/// let body = br#"{"code":"woocommerce_rest_shop_order_invalid_id","message":"Invalid ID.","data":{"status":404}}"#;
/// match classify_error(404, body) {
///     Some(HttpError::Api(error)) => {
///         assert_eq!(error.status_code, 404);
///         assert_eq!(error.message, "Invalid ID.");
///     }
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message} (status {status_code}, code {code})")]
pub struct ApiError {
    /// The HTTP status code of the response.
    #[serde(default)]
    pub status_code: u16,
    /// Machine-readable error code (e.g. `rest_invalid_param`).
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Additional error data.
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: ApiErrorData,
}

/// Error returned when a non-successful response has no structured body.
///
/// The raw body bytes are kept intact.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("Got invalid status code {code}. Body: {}", String::from_utf8_lossy(.body))]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub body: Vec<u8>,
}

impl HttpResponseError {
    /// Returns the body as text, replacing invalid UTF-8 sequences.
    #[must_use]
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Error returned when an HTTP request fails validation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The path is not surface-relative (`/...`) or contains a query string.
    #[error("Invalid path '{path}'. Paths must start with '/' and must not contain a query string.")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// A header name is not a valid HTTP header name.
    #[error("Invalid header name '{name}'.")]
    InvalidHeaderName {
        /// The invalid header name.
        name: String,
    },

    /// A header value is not a valid HTTP header value.
    #[error("Invalid value for header '{name}'.")]
    InvalidHeaderValue {
        /// The header whose value was invalid.
        name: String,
    },
}

/// Unified error type for all HTTP-related errors.
///
/// None of these errors is retried internally.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Invalid client configuration, raised before any I/O.
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The request body could not be serialized to JSON.
    #[error("Could not serialize request body to JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// No response headers arrived within the configured timeout.
    #[error("Request timed out after {timeout:?}")]
    Timeout {
        /// The timeout that was exceeded.
        timeout: Duration,
    },

    /// The server returned a structured error.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The server returned a non-success status without a structured error.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// A scalar value (e.g. a header) was malformed.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The response body could not be decoded into the requested type.
    #[error("Could not decode response body: {0}")]
    Decode(serde_json::Error),
}

impl HttpError {
    /// Returns the HTTP status code for errors produced from a response.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(e) => Some(e.status_code),
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}

/// Classifies a response by status code and body.
///
/// - 2xx: `None`, regardless of the body.
/// - 4xx/5xx: [`HttpError::Api`] if the body decodes as a structured error,
///   otherwise [`HttpError::Response`] with the raw body.
/// - Anything else: [`HttpError::Response`].
///
/// A structured-decode failure is not reported on its own; it yields the raw
/// fallback.
#[must_use]
pub fn classify_error(status: u16, body: &[u8]) -> Option<HttpError> {
    if (200..300).contains(&status) {
        return None;
    }

    if (400..600).contains(&status) {
        match serde_json::from_slice::<ApiError>(body) {
            Ok(mut error) => {
                error.status_code = status;
                return Some(HttpError::Api(error));
            }
            Err(e) => {
                tracing::debug!("Error body with status {} is not structured: {}", status, e);
            }
        }
    }

    Some(HttpError::Response(HttpResponseError {
        code: status,
        body: body.to_vec(),
    }))
}
