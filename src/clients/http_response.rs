//! HTTP response types for the Mailgun API SDK.
//!
//! This module provides the [`HttpResponse`] type for accessing the status,
//! headers and raw body returned by a transport.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::clients::errors::DecodeError;

/// An HTTP response from the Mailgun API.
///
/// The body is kept as received; decoding into a typed shape happens on
/// demand through [`HttpResponse::json`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers keyed by lowercase name (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    ///
    /// Header names are normalized to lowercase.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: impl Into<String>) -> Self {
        let headers = headers
            .into_iter()
            .map(|(name, values)| (name.to_lowercase(), values))
            .collect();

        Self {
            code,
            headers,
            body: body.into(),
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of the named header, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Decodes the body as JSON into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, DecodeError> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Extracts a human-readable error message from the body.
    ///
    /// Mailgun error bodies look like `{"message": "..."}`. Anything else is
    /// returned as trimmed text.
    #[must_use]
    pub fn error_message(&self) -> String {
        let from_json = serde_json::from_str::<serde_json::Value>(&self.body)
            .ok()
            .and_then(|body| {
                body.get("message")
                    .and_then(serde_json::Value::as_str)
                    .map(String::from)
            });

        from_json.unwrap_or_else(|| {
            let text = self.body.trim();
            if text.is_empty() {
                format!("HTTP status {}", self.code)
            } else {
                text.to_string()
            }
        })
    }
}
