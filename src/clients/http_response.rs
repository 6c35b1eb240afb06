//! HTTP response types for the WooCommerce API client.
//!
//! This module provides the [`HttpResponse`] type returned for successful
//! (2xx) calls. The body is not read up front; the caller drives reading it
//! through [`HttpResponse::chunk`], [`HttpResponse::bytes`] or
//! [`HttpResponse::json`].
//!
//! # Null Byte Filtering
//!
//! Some upstream proxies interleave NUL bytes into otherwise valid JSON.
//! Every read through `HttpResponse` drops them transparently. A body made
//! only of NUL bytes reads as an empty body.

use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

use crate::clients::errors::HttpError;
use crate::scalars::FormatError;

/// Header carrying the total number of records of a list call.
pub const TOTAL_COUNT_HEADER: &str = "X-WP-Total";

/// Header carrying the total number of pages of a list call.
pub const TOTAL_PAGES_HEADER: &str = "X-WP-TotalPages";

/// Header carrying the storefront nonce required by cart mutations.
pub const NONCE_HEADER: &str = "Nonce";

/// Header carrying the storefront cart token.
pub const CART_TOKEN_HEADER: &str = "Cart-Token";

/// Returns `chunk` without its NUL bytes, preserving order.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::clients::strip_null_bytes;
///
/// assert_eq!(strip_null_bytes(&[0, 0, 0, 0, 1, 2, 3, 0, 4, 5]), vec![1, 2, 3, 4, 5]);
/// assert!(strip_null_bytes(&[0, 0]).is_empty());
/// ```
#[must_use]
pub fn strip_null_bytes(chunk: &[u8]) -> Vec<u8> {
    chunk.iter().copied().filter(|&b| b != 0).collect()
}

/// A successful response from the WooCommerce API.
///
/// The live connection is owned by this value; dropping it releases the
/// connection whether or not the body was read.
#[derive(Debug)]
pub struct HttpResponse {
    inner: reqwest::Response,
    null_bytes_dropped: usize,
}

impl HttpResponse {
    pub(crate) fn new(inner: reqwest::Response) -> Self {
        Self {
            inner,
            null_bytes_dropped: 0,
        }
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Returns all response headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        self.inner.headers()
    }

    /// Returns the first value of a header, if present and valid UTF-8.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner.headers().get(name)?.to_str().ok()
    }

    /// Returns the total record count of a list call (`X-WP-Total`).
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] if the header is present but not an integer.
    pub fn total_count(&self) -> Result<Option<u64>, FormatError> {
        self.parse_count(TOTAL_COUNT_HEADER)
    }

    /// Returns the total page count of a list call (`X-WP-TotalPages`).
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] if the header is present but not an integer.
    pub fn total_pages(&self) -> Result<Option<u64>, FormatError> {
        self.parse_count(TOTAL_PAGES_HEADER)
    }

    /// Returns the storefront nonce, if the server sent one.
    #[must_use]
    pub fn nonce(&self) -> Option<&str> {
        self.header(NONCE_HEADER)
    }

    /// Returns the storefront cart token, if the server sent one.
    #[must_use]
    pub fn cart_token(&self) -> Option<&str> {
        self.header(CART_TOKEN_HEADER)
    }

    fn parse_count(&self, name: &str) -> Result<Option<u64>, FormatError> {
        match self.header(name) {
            None | Some("") => Ok(None),
            Some(value) => value
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| FormatError::new("count", value)),
        }
    }

    /// Reads the next non-empty chunk of the body, with NUL bytes removed.
    ///
    /// Returns `Ok(None)` at end of body. Chunks made only of NUL bytes are
    /// skipped, so a trailing run of them reads as end of body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if reading from the connection fails.
    pub async fn chunk(&mut self) -> Result<Option<Vec<u8>>, HttpError> {
        while let Some(raw) = self.inner.chunk().await? {
            let filtered = strip_null_bytes(&raw);
            self.null_bytes_dropped += raw.len() - filtered.len();
            if !filtered.is_empty() {
                return Ok(Some(filtered));
            }
        }
        Ok(None)
    }

    /// Reads the whole body, with NUL bytes removed.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if reading from the connection fails.
    pub async fn bytes(mut self) -> Result<Vec<u8>, HttpError> {
        let mut body = Vec::new();
        while let Some(chunk) = self.chunk().await? {
            body.extend_from_slice(&chunk);
        }

        if self.null_bytes_dropped > 0 {
            tracing::warn!(
                "Dropped {} null bytes from response body of {}",
                self.null_bytes_dropped,
                self.inner.url().path()
            );
        }

        Ok(body)
    }

    /// Reads the whole body as text, replacing invalid UTF-8 sequences.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if reading from the connection fails.
    pub async fn text(self) -> Result<String, HttpError> {
        let body = self.bytes().await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    /// Reads the whole body and decodes it as JSON into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if reading fails, or
    /// [`HttpError::Decode`] if the body does not match `T`.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T, HttpError> {
        let body = self.bytes().await?;
        serde_json::from_slice(&body).map_err(HttpError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_null_bytes_empty() {
        assert!(strip_null_bytes(&[]).is_empty());
    }

    #[test]
    fn test_strip_null_bytes_trivial() {
        assert_eq!(strip_null_bytes(&[1]), vec![1]);
    }

    #[test]
    fn test_strip_null_bytes_all_null() {
        assert!(strip_null_bytes(&[0]).is_empty());
        assert!(strip_null_bytes(&[0, 0, 0]).is_empty());
    }

    #[test]
    fn test_strip_null_bytes_interleaved() {
        assert_eq!(
            strip_null_bytes(&[0, 0, 0, 0, 1, 2, 3, 0, 4, 5]),
            vec![1, 2, 3, 4, 5]
        );
    }

    #[test]
    fn test_strip_null_bytes_is_idempotent() {
        let once = strip_null_bytes(b"{\0\"a\"\0:1}\0");
        assert_eq!(once, b"{\"a\":1}".to_vec());
        assert_eq!(strip_null_bytes(&once), once);
    }
}
