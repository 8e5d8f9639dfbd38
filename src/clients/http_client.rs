//! HTTP client for Mailgun API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the Mailgun API through a pluggable [`Transport`].

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::clients::errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
use crate::clients::http_request::{FormBody, HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::{redacted_headers, ReqwestTransport, Transport, TransportRequest};
use crate::config::{ApiBase, MailgunConfig};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Mailgun API.
///
/// The client handles:
/// - Endpoint URL construction from the configured API base
/// - Default headers including User-Agent and basic-auth credentials
/// - Classification of non-2xx responses into [`HttpError::Response`]
///
/// Requests are never retried. Timeouts and retries are the concern of the
/// [`Transport`] passed to [`HttpClient::with_transport`].
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use mailgun_api::{HttpClient, HttpRequest, HttpMethod, MailgunConfig, ApiKey};
///
/// let config = MailgunConfig::builder()
///     .api_key(ApiKey::new("key-123").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config);
/// let url = client.endpoint(&["lists", "pages"])?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, url.as_str())
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Clone)]
pub struct HttpClient {
    /// The transport performing the round trips.
    transport: Arc<dyn Transport>,
    /// Base URL every endpoint is resolved against.
    api_base: ApiBase,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

// Credentials in the Authorization header are masked like `ApiKey`.
impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("transport", &self.transport)
            .field("api_base", &self.api_base)
            .field("default_headers", &redacted_headers(&self.default_headers))
            .finish()
    }
}

impl HttpClient {
    /// Creates a new HTTP client using the default [`ReqwestTransport`].
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use mailgun_api::{ApiKey, HttpClient, MailgunConfig};
    ///
    /// let config = MailgunConfig::builder()
    ///     .api_key(ApiKey::new("key-123").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = HttpClient::new(&config);
    /// assert_eq!(client.api_base().as_ref(), "https://api.mailgun.net/v3");
    /// ```
    #[must_use]
    pub fn new(config: &MailgunConfig) -> Self {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()))
    }

    /// Creates a new HTTP client sending through the given transport.
    #[must_use]
    pub fn with_transport(config: &MailgunConfig, transport: Arc<dyn Transport>) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Mailgun API Library v{SDK_VERSION} | Rust {rust_version}");

        let credentials = format!("{}:{}", config.basic_auth_user(), config.api_key().as_ref());

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            format!("Basic {}", STANDARD.encode(credentials)),
        );

        Self {
            transport,
            api_base: config.api_base().clone(),
            default_headers,
        }
    }

    /// Returns the API base URL for this client.
    #[must_use]
    pub const fn api_base(&self) -> &ApiBase {
        &self.api_base
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Resolves an endpoint by appending path segments to the API base.
    ///
    /// Each segment is percent-encoded, so a list address containing `/` or
    /// `?` stays a single segment.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::InvalidUrl`] if the base cannot
    /// carry path segments.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, HttpError> {
        let mut url = self.api_base.url().clone();
        url.path_segments_mut()
            .map_err(|()| InvalidHttpRequestError::InvalidUrl {
                url: self.api_base.to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Sends an HTTP request to the Mailgun API.
    ///
    /// Exactly one transport round trip is made for a valid request; an
    /// invalid request makes none.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The transport fails (`Transport`)
    /// - Non-2xx response received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = Url::parse(&request.url).map_err(|_| InvalidHttpRequestError::InvalidUrl {
            url: request.url.clone(),
        })?;

        let mut headers = self.default_headers.clone();
        if request.form.is_some() {
            headers.insert(
                "Content-Type".to_string(),
                FormBody::CONTENT_TYPE.to_string(),
            );
        }

        tracing::debug!("Sending {} request to {}", request.http_method, url);

        let response = self
            .transport
            .send(TransportRequest {
                method: request.http_method,
                url,
                headers,
                body: request.form.as_ref().map(FormBody::encode),
            })
            .await?;

        if response.is_ok() {
            return Ok(response);
        }

        tracing::debug!(
            "Request to {} failed with status {}",
            request.url,
            response.code
        );

        Err(HttpError::Response(HttpResponseError {
            code: response.code,
            message: response.error_message(),
        }))
    }

    /// Performs one GET against a fully qualified URL and decodes the JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::EmptyUrl`] without sending anything
    /// if `url` is empty, and otherwise any error from [`HttpClient::request`]
    /// or a [`HttpError::Decode`] if the body does not match `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, url).build()?;
        let response = self.request(request).await?;
        Ok(response.json()?)
    }
}
