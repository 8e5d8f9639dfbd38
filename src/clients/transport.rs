//! Pluggable HTTP transport.
//!
//! The [`Transport`] trait is the seam between the SDK and the network. The
//! SDK resolves URLs, credentials and bodies; a transport only moves bytes.
//! Timeouts, connection pooling and any retry policy belong to the transport,
//! so callers configure them here rather than in the SDK.
//!
//! [`ReqwestTransport`] is the default implementation.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;

use crate::clients::errors::TransportError;
use crate::clients::http_request::HttpMethod;
use crate::clients::http_response::HttpResponse;

/// A fully resolved request handed to a [`Transport`].
///
/// The `Debug` output masks the `Authorization` header.
#[derive(Clone, PartialEq, Eq)]
pub struct TransportRequest {
    /// The HTTP method.
    pub method: HttpMethod,
    /// The absolute URL, query string included.
    pub url: Url,
    /// Headers to send, including `Authorization`.
    pub headers: HashMap<String, String>,
    /// Encoded request body, if any.
    pub body: Option<String>,
}

impl fmt::Debug for TransportRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportRequest")
            .field("method", &self.method)
            .field("url", &self.url.as_str())
            .field("headers", &redacted_headers(&self.headers))
            .field("body", &self.body)
            .finish()
    }
}

/// Headers in a stable order with the `Authorization` value masked.
pub(crate) fn redacted_headers(headers: &HashMap<String, String>) -> BTreeMap<&str, &str> {
    headers
        .iter()
        .map(|(key, value)| {
            if key.eq_ignore_ascii_case("authorization") {
                (key.as_str(), "*****")
            } else {
                (key.as_str(), value.as_str())
            }
        })
        .collect()
}

/// Sends one request and returns whatever the server answered.
///
/// Implementations must not treat non-2xx statuses as errors: those are
/// returned as an [`HttpResponse`] and classified by the caller.
/// A [`TransportError`] means no response was obtained.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use mailgun_api::clients::{HttpResponse, Transport, TransportError, TransportRequest};
/// use std::collections::HashMap;
///
/// #[derive(Debug)]
/// struct AlwaysEmpty;
///
/// #[async_trait]
/// impl Transport for AlwaysEmpty {
///     async fn send(&self, _request: TransportRequest) -> Result<HttpResponse, TransportError> {
///         Ok(HttpResponse::new(200, HashMap::new(), r#"{"items":[],"paging":{}}"#))
///     }
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    /// Performs a single round trip.
    async fn send(&self, request: TransportRequest) -> Result<HttpResponse, TransportError>;
}

/// [`Transport`] backed by a `reqwest::Client` using rustls.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with reqwest's defaults (no timeout).
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new() -> Self {
        Self::builder()
            .build()
            .expect("Failed to create HTTP client")
    }

    /// Creates a builder for configuring timeouts.
    #[must_use]
    pub fn builder() -> ReqwestTransportBuilder {
        ReqwestTransportBuilder::default()
    }

    /// Wraps an already configured `reqwest::Client`.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<HttpResponse, TransportError> {
        let mut req_builder = match request.method {
            HttpMethod::Get => self.client.get(request.url),
            HttpMethod::Post => self.client.post(request.url),
            HttpMethod::Put => self.client.put(request.url),
            HttpMethod::Delete => self.client.delete(request.url),
        };

        for (key, value) in &request.headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(body) = request.body {
            req_builder = req_builder.body(body);
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        Ok(HttpResponse::new(code, headers, body))
    }
}

/// Builder for [`ReqwestTransport`].
#[derive(Debug, Default)]
pub struct ReqwestTransportBuilder {
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl ReqwestTransportBuilder {
    /// Sets the total request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Builds the transport.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the reqwest client cannot be created.
    pub fn build(self) -> Result<ReqwestTransport, TransportError> {
        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = self.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }

        Ok(ReqwestTransport::from_client(builder.build()?))
    }
}
