//! HTTP request types for the WooCommerce API client.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests against either API surface.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::clients::errors::{HttpError, InvalidHttpRequestError};
use crate::error::ConfigError;
use crate::parameters::{BaseParameters, Parameters};

/// The API surface a request targets.
///
/// WooCommerce exposes two APIs with different path prefixes and
/// authentication:
///
/// - [`ApiSurface::Management`]: the REST API (`/wp-json/wc/v3`), authenticated
///   with the consumer key/secret.
/// - [`ApiSurface::Storefront`]: the Store API (`/wp-json/wc/store/v1`, also
///   known as the blocks API), authenticated with cart-token/nonce headers.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::clients::ApiSurface;
///
/// assert_eq!("rest".parse::<ApiSurface>().unwrap(), ApiSurface::Management);
/// assert_eq!("blocks".parse::<ApiSurface>().unwrap(), ApiSurface::Storefront);
/// assert!("graphql".parse::<ApiSurface>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiSurface {
    /// The authenticated back-office REST API.
    Management,
    /// The session-oriented shopper-facing Store API.
    Storefront,
}

impl fmt::Display for ApiSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Management => write!(f, "management"),
            Self::Storefront => write!(f, "storefront"),
        }
    }
}

impl FromStr for ApiSurface {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "management" | "rest" => Ok(Self::Management),
            "storefront" | "blocks" | "store" => Ok(Self::Storefront),
            _ => Err(ConfigError::InvalidApiSurface {
                surface: s.to_string(),
            }),
        }
    }
}

/// HTTP methods supported by the WooCommerce APIs.
///
/// The common verbs have their own variants; any other verb, including
/// extension methods, travels as [`HttpMethod::Other`].
///
/// # Example
///
/// ```rust
/// use woocommerce_api::clients::HttpMethod;
///
/// assert_eq!(HttpMethod::Options.to_string(), "OPTIONS");
/// assert_eq!(HttpMethod::from(reqwest::Method::PATCH), HttpMethod::Patch);
///
/// let propfind = reqwest::Method::from_bytes(b"PROPFIND").unwrap();
/// assert_eq!(HttpMethod::from(propfind).to_string(), "PROPFIND");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP PATCH method for partial updates.
    Patch,
    /// HTTP DELETE method for removing resources.
    Delete,
    /// HTTP HEAD method, headers only.
    Head,
    /// HTTP OPTIONS method; WooCommerce answers with the endpoint schema.
    Options,
    /// Any other verb.
    Other(reqwest::Method),
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Patch => write!(f, "PATCH"),
            Self::Delete => write!(f, "DELETE"),
            Self::Head => write!(f, "HEAD"),
            Self::Options => write!(f, "OPTIONS"),
            Self::Other(method) => f.write_str(method.as_str()),
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Patch => Self::PATCH,
            HttpMethod::Delete => Self::DELETE,
            HttpMethod::Head => Self::HEAD,
            HttpMethod::Options => Self::OPTIONS,
            HttpMethod::Other(method) => method,
        }
    }
}

impl From<reqwest::Method> for HttpMethod {
    fn from(method: reqwest::Method) -> Self {
        match method.as_str() {
            "GET" => Self::Get,
            "POST" => Self::Post,
            "PUT" => Self::Put,
            "PATCH" => Self::Patch,
            "DELETE" => Self::Delete,
            "HEAD" => Self::Head,
            "OPTIONS" => Self::Options,
            _ => Self::Other(method),
        }
    }
}

/// An HTTP request to be sent to one of the WooCommerce APIs.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder pattern.
/// A request is built fresh for every call and is not retained by the client.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::clients::{ApiSurface, HttpMethod, HttpRequest};
/// use woocommerce_api::parameters::PageParams;
/// use serde_json::json;
///
/// let list = HttpRequest::builder(ApiSurface::Management, HttpMethod::Get, "/orders")
///     .parameters(&PageParams { page: 1, per_page: 20 })
///     .build()
///     .unwrap();
///
/// let add = HttpRequest::builder(ApiSurface::Storefront, HttpMethod::Post, "/cart/add-item")
///     .body(json!({"id": 42, "quantity": 1}))
///     .header("Nonce", "abc123")
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The API surface this request targets.
    pub surface: ApiSurface,
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The surface-relative path, starting with `/`.
    pub path: String,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
    /// Query parameters to append to the URL.
    pub query: Option<BaseParameters>,
    /// Additional headers, merged over the surface headers.
    pub extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(
        surface: ApiSurface,
        method: HttpMethod,
        path: impl Into<String>,
    ) -> HttpRequestBuilder {
        HttpRequestBuilder::new(surface, method, path)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::InvalidPath`] if the path does not
    /// start with `/` or carries a query string.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if !self.path.starts_with('/') || self.path.contains('?') {
            return Err(InvalidHttpRequestError::InvalidPath {
                path: self.path.clone(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    surface: ApiSurface,
    http_method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    query: Option<BaseParameters>,
    extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequestBuilder {
    fn new(surface: ApiSurface, method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            surface,
            http_method: method,
            path: path.into(),
            body: None,
            query: None,
            extra_headers: None,
        }
    }

    /// Sets the request body from a JSON value.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serializes `body` to JSON and sets it as the request body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Serialization`] if `body` is not representable as JSON.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, HttpError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Sets the query parameters.
    #[must_use]
    pub fn parameters<P: Parameters + ?Sized>(mut self, parameters: &P) -> Self {
        self.query = Some(parameters.values());
        self
    }

    /// Sets a single query parameter, keeping any others.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(BaseParameters::new)
            .set(key, value);
        self
    }

    /// Sets all extra headers at once.
    #[must_use]
    pub fn extra_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.extra_headers = Some(headers);
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            surface: self.surface,
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            query: self.query,
            extra_headers: self.extra_headers,
        };
        request.verify()?;
        Ok(request)
    }
}
