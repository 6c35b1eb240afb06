//! # WooCommerce API Rust Client
//!
//! A Rust client for the WooCommerce REST and Store APIs, providing type-safe
//! configuration, a shared authenticated transport, and resource clients for
//! orders, products, customers, taxes and the shopper cart.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`WooCommerceConfig`] and [`WooCommerceConfigBuilder`]
//! - Validated newtypes for the store URL and API credentials
//! - A transport ([`HttpClient`]) that targets either API surface, adds Basic
//!   authentication to management calls only, and classifies failed responses
//! - Self-normalizing scalars ([`scalars`]) that absorb WooCommerce's
//!   inconsistent number and date encodings
//! - Composable query parameters ([`parameters`])
//! - Resource clients ([`resources`]) bundled by [`resources::WooCommerce`]
//!
//! ## Quick Start
//!
//! ```rust
//! use woocommerce_api::{BaseUrl, ConsumerKey, ConsumerSecret, WooCommerceConfig};
//!
//! let config = WooCommerceConfig::builder()
//!     .base_url(BaseUrl::new("https://shop.example.com").unwrap())
//!     .consumer_key(ConsumerKey::new("ck_your_key").unwrap())
//!     .consumer_secret(ConsumerSecret::new("cs_your_secret").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Making Calls
//!
//! ```rust,ignore
//! use woocommerce_api::parameters::{PageParams, Parameters};
//! use woocommerce_api::resources::WooCommerce;
//!
//! let api: WooCommerce = WooCommerce::new(&config)?;
//!
//! // Management surface, Basic authentication
//! let params = PageParams { page: 1, per_page: 50 }.with_value("status", "processing");
//! let (orders, total) = api.orders.list(&params).await?;
//!
//! // Storefront surface, session headers instead of credentials
//! let cart = api.cart.get(None).await?;
//! ```
//!
//! ## Error Handling
//!
//! Configuration problems surface as [`ConfigError`] before any I/O. Every
//! call returns [`HttpError`], which distinguishes timeouts, network
//! failures, structured API errors ([`clients::ApiError`]) and raw non-2xx
//! responses ([`HttpResponseError`]).
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events: one `debug` line per call and per
//! failed response, and a `warn` line when NUL bytes are dropped from a
//! response body. Credentials are never logged.
//!
//! ## Thread Safety
//!
//! All clients are `Send + Sync` and hold no per-call state, so one instance
//! can be shared across tasks.

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod parameters;
pub mod resources;
pub mod scalars;

// Re-export public types at crate root for convenience
pub use auth::Credentials;
pub use config::{
    BaseUrl, ConsumerKey, ConsumerSecret, WooCommerceConfig, WooCommerceConfigBuilder,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiSurface, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError,
};

pub use parameters::{BaseParameters, PageParams, Parameters};
pub use resources::WooCommerce;
