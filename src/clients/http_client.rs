//! HTTP client for WooCommerce API communication.
//!
//! This module provides the [`HttpClient`] type: the authenticated transport
//! shared by every resource client.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use serde::Serialize;

use crate::auth::Credentials;
use crate::clients::errors::{classify_error, HttpError, HttpResponseError, InvalidHttpRequestError};
use crate::clients::http_request::{ApiSurface, HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::WooCommerceConfig;
use crate::parameters::Parameters;

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the WooCommerce APIs.
///
/// The client handles:
/// - URL construction as `base + surface prefix + path [+ ?query]`
/// - `Content-Type: application/json` on every request
/// - Basic authentication on management calls only
/// - Caller headers merged last (caller wins on collision)
/// - A fixed timeout covering connection and response headers
/// - Classification of non-2xx responses
///
/// Requests are never retried. All state is set at construction and never
/// mutated afterwards.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use woocommerce_api::clients::{ApiSurface, HttpClient, HttpMethod, HttpRequest};
///
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(ApiSurface::Management, HttpMethod::Get, "/taxes")
///     .build()?;
///
/// let taxes: serde_json::Value = client.request(request).await?.json().await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Store base URL (e.g., `https://example.com`).
    base_url: String,
    /// Path prefix of the management API.
    management_prefix: String,
    /// Path prefix of the storefront API.
    storefront_prefix: String,
    /// Precomputed management credentials.
    credentials: Credentials,
    /// Timeout for connection setup and response headers.
    timeout: Duration,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &WooCommerceConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}WooCommerce API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_url: config.base_url().as_ref().to_string(),
            management_prefix: config.management_prefix().to_string(),
            storefront_prefix: config.storefront_prefix().to_string(),
            credentials: Credentials::new(config.consumer_key(), config.consumer_secret()),
            timeout: config.timeout(),
            default_headers,
        })
    }

    /// Returns the store base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the timeout applied to each call.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the default headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the path prefix of the given surface.
    #[must_use]
    pub fn surface_prefix(&self, surface: ApiSurface) -> &str {
        match surface {
            ApiSurface::Management => &self.management_prefix,
            ApiSurface::Storefront => &self.storefront_prefix,
        }
    }

    /// Builds the full URL of a request.
    ///
    /// The query string is appended only when parameters are present and
    /// non-empty.
    #[must_use]
    pub fn build_url(&self, request: &HttpRequest) -> String {
        let mut url = format!(
            "{}{}{}",
            self.base_url,
            self.surface_prefix(request.surface),
            request.path
        );
        if let Some(query) = request.query.as_ref().filter(|q| !q.is_empty()) {
            url.push('?');
            url.push_str(&query.encode());
        }
        url
    }

    /// Builds the headers of a request.
    ///
    /// Default headers come first, then `Authorization` for management calls,
    /// then the caller's headers, which win on collision.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if a caller header name or value is
    /// not valid HTTP.
    pub fn request_headers(
        &self,
        request: &HttpRequest,
    ) -> Result<HeaderMap, InvalidHttpRequestError> {
        let mut headers = HeaderMap::new();
        for (key, value) in &self.default_headers {
            insert_header(&mut headers, key, value)?;
        }

        if request.surface == ApiSurface::Management {
            let value = HeaderValue::from_str(&self.credentials.authorization_header())
                .map_err(|_| InvalidHttpRequestError::InvalidHeaderValue {
                    name: AUTHORIZATION.to_string(),
                })?;
            headers.insert(AUTHORIZATION, value);
        }

        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                insert_header(&mut headers, key, value)?;
            }
        }

        Ok(headers)
    }

    /// Sends a request to the WooCommerce API.
    ///
    /// On a 2xx status the live response is returned and the caller owns
    /// reading its body. Any other status is read in full, the connection is
    /// released, and the response is classified with [`classify_error`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - No response headers arrive within the timeout (`Timeout`)
    /// - A network error occurs, including while reading the body of a
    ///   non-2xx response (`Network`)
    /// - The server returns a structured error (`Api`)
    /// - The server returns any other non-2xx response (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.build_url(&request);
        let headers = self.request_headers(&request)?;

        tracing::debug!(
            "Sending {} request to {} API at {}",
            request.http_method,
            request.surface,
            url
        );

        let mut req_builder = self
            .client
            .request(request.http_method.clone().into(), &url)
            .headers(headers);
        if let Some(body) = &request.body {
            req_builder = req_builder.body(serde_json::to_vec(body)?);
        }

        let res = match tokio::time::timeout(self.timeout, req_builder.send()).await {
            Ok(Ok(res)) => res,
            Ok(Err(e)) if e.is_timeout() => return Err(self.timeout_error()),
            Ok(Err(e)) => return Err(HttpError::Network(e)),
            Err(_) => return Err(self.timeout_error()),
        };

        let code = res.status().as_u16();
        if res.status().is_success() {
            return Ok(HttpResponse::new(res));
        }

        let body = res.bytes().await?;
        let error = classify_error(code, &body).unwrap_or(HttpError::Response(HttpResponseError {
            code,
            body: body.to_vec(),
        }));

        tracing::debug!(
            "{} request to {} failed with status {}: {}",
            request.http_method,
            request.path,
            code,
            error
        );

        Err(error)
    }

    /// Builds and sends a request in one call.
    ///
    /// This is the collaborator contract resource clients rely on: a surface,
    /// a method, a surface-relative path, and optional body, parameters and
    /// header overrides.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Serialization`] if the body cannot be serialized,
    /// plus every error of [`HttpClient::request`].
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use woocommerce_api::clients::{ApiSurface, HttpMethod};
    /// use woocommerce_api::parameters::PageParams;
    ///
    /// let response = client
    ///     .execute(
    ///         ApiSurface::Management,
    ///         HttpMethod::Get,
    ///         "/orders",
    ///         None::<&()>,
    ///         Some(&PageParams { page: 1, per_page: 5 }),
    ///         None,
    ///     )
    ///     .await?;
    /// ```
    pub async fn execute<B, P>(
        &self,
        surface: ApiSurface,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
        parameters: Option<&P>,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError>
    where
        B: Serialize + ?Sized,
        P: Parameters + ?Sized,
    {
        let mut builder = HttpRequest::builder(surface, method, path);
        if let Some(body) = body {
            builder = builder.json(body)?;
        }
        if let Some(parameters) = parameters {
            builder = builder.parameters(parameters);
        }
        if let Some(headers) = headers {
            builder = builder.extra_headers(headers.clone());
        }

        self.request(builder.build()?).await
    }

    const fn timeout_error(&self) -> HttpError {
        HttpError::Timeout {
            timeout: self.timeout,
        }
    }
}

fn insert_header(
    headers: &mut HeaderMap,
    key: &str,
    value: &str,
) -> Result<(), InvalidHttpRequestError> {
    let name = HeaderName::from_bytes(key.as_bytes()).map_err(|_| {
        InvalidHttpRequestError::InvalidHeaderName {
            name: key.to_string(),
        }
    })?;
    let value =
        HeaderValue::from_str(value).map_err(|_| InvalidHttpRequestError::InvalidHeaderValue {
            name: key.to_string(),
        })?;
    headers.insert(name, value);
    Ok(())
}
