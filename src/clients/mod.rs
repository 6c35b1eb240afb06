//! HTTP client types for WooCommerce API communication.
//!
//! This module provides the transport layer shared by every resource client.
//! It targets one of two API surfaces per call, authenticates management
//! calls, and classifies failed responses.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A successful response whose body the caller reads
//! - [`ApiSurface`]: Which API a request targets (management or storefront)
//! - [`HttpMethod`]: Supported HTTP methods
//! - [`HttpError`]: Every failure a call can produce
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::clients::{ApiSurface, HttpClient, HttpMethod, HttpRequest};
//!
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder(ApiSurface::Storefront, HttpMethod::Get, "/cart")
//!     .header("Cart-Token", token)
//!     .build()?;
//!
//! let response = client.request(request).await?;
//! let nonce = response.nonce().map(str::to_string);
//! let cart: serde_json::Value = response.json().await?;
//! ```
//!
//! # Error Classification
//!
//! - **2xx**: the response is returned unread
//! - **4xx/5xx with a WooCommerce error body**: [`HttpError::Api`]
//! - **Anything else**: [`HttpError::Response`] with the raw body
//!
//! Calls are never retried.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{
    classify_error, ApiError, ApiErrorData, ErrorDetail, HttpError, HttpResponseError,
    InvalidHttpRequestError,
};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{ApiSurface, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{
    strip_null_bytes, HttpResponse, CART_TOKEN_HEADER, NONCE_HEADER, TOTAL_COUNT_HEADER,
    TOTAL_PAGES_HEADER,
};
