//! HTTP-specific error types for the Mailgun API SDK.
//!
//! This module contains error types for HTTP operations, including response
//! errors, transport failures, decode failures and request validation failures.
//!
//! # Error Handling
//!
//! The SDK uses specific error types for different failure scenarios:
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`TransportError`]: Connection, DNS or timeout failures
//! - [`DecodeError`]: A response body that does not match the expected shape
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all of the above
//!
//! None of these errors are retried by the SDK.
//!
//! # Example
//!
//! ```rust,ignore
//! use mailgun_api::{HttpError, MailingList};
//!
//! match MailingList::find(&client, "devs@example.com").await {
//!     Ok(list) => println!("Found: {}", list.name),
//!     Err(e) if e.is_not_found() => println!("No such list"),
//!     Err(HttpError::Transport(e)) => println!("Network error: {e}"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// The message is taken from the `message` field of the response body when
/// present, otherwise the raw body text is used.
///
/// # Example
///
/// ```rust
/// use mailgun_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: "Mailing list devs@example.com not found".to_string(),
/// };
///
/// assert!(error.to_string().contains("404"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Mailgun API returned status {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Server-provided error message.
    pub message: String,
}

/// Error returned when the request never produced an HTTP response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Network error: {message}")]
pub struct TransportError {
    /// Description of the underlying failure.
    pub message: String,
    /// Whether the failure was a timeout.
    pub timed_out: bool,
}

impl TransportError {
    /// Creates a transport error from a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timed_out: false,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        Self {
            timed_out: error.is_timeout(),
            message: error.to_string(),
        }
    }
}

/// Error returned when a response body does not match the expected JSON shape.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Failed to decode response body: {message}")]
pub struct DecodeError {
    /// Description of the decode failure.
    pub message: String,
}

impl From<serde_json::Error> for DecodeError {
    fn from(error: serde_json::Error) -> Self {
        Self {
            message: error.to_string(),
        }
    }
}

/// Error returned when a request fails validation.
///
/// These are caller errors: they are raised before anything is sent.
///
/// # Example
///
/// ```rust
/// use mailgun_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "post".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot use post without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request URL is empty.
    #[error("Cannot send a request without a URL.")]
    EmptyUrl,

    /// The request URL could not be parsed.
    #[error("Invalid request URL '{url}'.")]
    InvalidUrl {
        /// The URL that was provided.
        url: String,
    },

    /// A mailing list address is required but was empty.
    #[error("Mailing list address cannot be empty.")]
    EmptyAddress,

    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
///
/// `HttpError` is `Clone` so that a failed iterator can keep its error while
/// also handing a copy back to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Network or connection error.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),
}

impl HttpError {
    /// Returns the HTTP status code for response errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }

    /// Returns `true` if the server answered 404.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.status(), Some(404))
    }
}

impl From<serde_json::Error> for HttpError {
    fn from(error: serde_json::Error) -> Self {
        Self::Decode(error.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_includes_status_code_in_message() {
        let error = HttpResponseError {
            code: 404,
            message: "Not Found".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Mailgun API returned status 404: Not Found"
        );
    }

    #[test]
    fn test_transport_error_from_message_is_not_timeout() {
        let error = TransportError::new("connection refused");
        assert!(!error.timed_out);
        assert_eq!(error.to_string(), "Network error: connection refused");
    }

    #[test]
    fn test_decode_error_from_serde_error() {
        let serde_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error: HttpError = serde_error.into();
        assert!(matches!(error, HttpError::Decode(_)));
        assert!(error.to_string().starts_with("Failed to decode response body"));
    }

    #[test]
    fn test_invalid_request_error_messages() {
        assert_eq!(
            InvalidHttpRequestError::EmptyUrl.to_string(),
            "Cannot send a request without a URL."
        );
        assert_eq!(
            InvalidHttpRequestError::EmptyAddress.to_string(),
            "Mailing list address cannot be empty."
        );
        assert_eq!(
            InvalidHttpRequestError::MissingBody {
                method: "put".to_string()
            }
            .to_string(),
            "Cannot use put without specifying data."
        );
    }

    #[test]
    fn test_status_and_not_found_helpers() {
        let not_found = HttpError::Response(HttpResponseError {
            code: 404,
            message: "gone".to_string(),
        });
        assert_eq!(not_found.status(), Some(404));
        assert!(not_found.is_not_found());

        let server = HttpError::Response(HttpResponseError {
            code: 500,
            message: "boom".to_string(),
        });
        assert!(!server.is_not_found());

        let transport = HttpError::Transport(TransportError::new("reset"));
        assert_eq!(transport.status(), None);
        assert!(!transport.is_not_found());
    }

    #[test]
    fn test_http_error_is_clone() {
        let error = HttpError::InvalidRequest(InvalidHttpRequestError::EmptyUrl);
        assert_eq!(error.clone(), error);
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let _: &dyn std::error::Error = &HttpResponseError {
            code: 400,
            message: "test".to_string(),
        };
        let _: &dyn std::error::Error = &TransportError::new("test");
        let _: &dyn std::error::Error = &InvalidHttpRequestError::EmptyUrl;
    }
}
