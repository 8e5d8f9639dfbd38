//! HTTP request types for the Mailgun API SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the Mailgun API.

use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods supported by the Mailgun API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// A form-url-encoded request body.
///
/// Fields keep their insertion order.
///
/// # Example
///
/// ```rust
/// use mailgun_api::clients::FormBody;
///
/// let mut body = FormBody::new();
/// body.push("address", "devs@example.com");
/// body.push("name", "Dev Team");
///
/// assert_eq!(body.encode(), "address=devs%40example.com&name=Dev%20Team");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormBody {
    fields: Vec<(String, String)>,
}

impl FormBody {
    /// Content type sent with form bodies.
    pub const CONTENT_TYPE: &'static str = "application/x-www-form-urlencoded";

    /// Creates an empty form body.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.push((key.into(), value.into()));
    }

    /// Appends a field only if `value` is non-empty.
    pub fn push_non_empty(&mut self, key: &str, value: &str) {
        if !value.is_empty() {
            self.push(key, value);
        }
    }

    /// Returns the value of the first field named `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the fields in insertion order.
    #[must_use]
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Returns `true` if no field has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Encodes the fields as `application/x-www-form-urlencoded`.
    #[must_use]
    pub fn encode(&self) -> String {
        self.fields
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// An HTTP request to be sent to the Mailgun API.
///
/// Unlike relative-path clients, the URL is fully qualified: pagination
/// cursors returned by the server are followed verbatim.
///
/// # Example
///
/// ```rust
/// use mailgun_api::clients::{HttpRequest, HttpMethod, FormBody};
///
/// // GET request
/// let get_request = HttpRequest::builder(HttpMethod::Get, "https://api.mailgun.net/v3/lists/pages?limit=50")
///     .build()
///     .unwrap();
///
/// // POST request with a form body
/// let mut form = FormBody::new();
/// form.push("address", "devs@example.com");
/// let post_request = HttpRequest::builder(HttpMethod::Post, "https://api.mailgun.net/v3/lists")
///     .form(form)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The absolute URL for this request.
    pub url: String,
    /// The form body, if any.
    pub form: Option<FormBody>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, url: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, url)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `url` is empty
    /// - `http_method` is `Post` or `Put` but `form` is `None`
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.url.is_empty() {
            return Err(InvalidHttpRequestError::EmptyUrl);
        }

        if matches!(self.http_method, HttpMethod::Post | HttpMethod::Put) && self.form.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    url: String,
    form: Option<FormBody>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            http_method: method,
            url: url.into(),
            form: None,
        }
    }

    /// Sets the form body.
    #[must_use]
    pub fn form(mut self, form: FormBody) -> Self {
        self.form = Some(form);
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            url: self.url,
            form: self.form,
        };
        request.verify()?;
        Ok(request)
    }
}
