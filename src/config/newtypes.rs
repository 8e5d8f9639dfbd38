//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use reqwest::Url;
use std::fmt;

/// A validated Mailgun API key.
///
/// The key is sent as the basic-auth password of every request. Its value is
/// masked in debug output to prevent accidental exposure in logs.
///
/// # Example
///
/// ```rust
/// use mailgun_api::ApiKey;
///
/// let key = ApiKey::new("key-3ax6xnjp29jd6fds4gc373sgvjxteol0").unwrap();
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated API base URL, such as `https://api.mailgun.net/v3`.
///
/// Every endpoint is resolved by appending path segments to this URL, so it
/// must be absolute and use the `http` or `https` scheme.
///
/// # Example
///
/// ```rust
/// use mailgun_api::ApiBase;
///
/// let base = ApiBase::new("https://api.mailgun.net/v3/").unwrap();
/// assert_eq!(base.as_ref(), "https://api.mailgun.net/v3");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiBase {
    url: Url,
    display: String,
}

impl ApiBase {
    /// Creates a new validated API base URL.
    ///
    /// A trailing slash is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiBase`] if the URL cannot be parsed,
    /// is not http(s), or cannot carry path segments.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = url.into();
        let trimmed = raw.trim().trim_end_matches('/');

        let url = Url::parse(trimmed).map_err(|_| ConfigError::InvalidApiBase { url: raw.clone() })?;
        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(ConfigError::InvalidApiBase { url: raw });
        }

        Ok(Self {
            display: trimmed.to_string(),
            url,
        })
    }

    /// Returns the parsed URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        self.url.host_str()
    }
}

impl AsRef<str> for ApiBase {
    fn as_ref(&self) -> &str {
        &self.display
    }
}

impl fmt::Display for ApiBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_rejects_empty_string() {
        let result = ApiKey::new("");
        assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_api_key_masks_value_in_debug() {
        let key = ApiKey::new("super-secret-key").unwrap();
        let debug_output = format!("{key:?}");
        assert_eq!(debug_output, "ApiKey(*****)");
        assert!(!debug_output.contains("super-secret-key"));
    }

    #[test]
    fn test_api_key_exposes_value_via_as_ref() {
        let key = ApiKey::new("key-abc").unwrap();
        assert_eq!(key.as_ref(), "key-abc");
    }

    #[test]
    fn test_api_base_strips_trailing_slash() {
        let base = ApiBase::new("https://api.mailgun.net/v3/").unwrap();
        assert_eq!(base.as_ref(), "https://api.mailgun.net/v3");
        assert_eq!(base.host_name(), Some("api.mailgun.net"));
    }

    #[test]
    fn test_api_base_accepts_local_http() {
        let base = ApiBase::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(base.url().scheme(), "http");
        assert_eq!(base.url().port(), Some(8080));
    }

    #[test]
    fn test_api_base_rejects_invalid_urls() {
        for url in ["", "api.mailgun.net", "ftp://api.mailgun.net", "mailto:lists@example.com"] {
            assert!(
                matches!(ApiBase::new(url), Err(ConfigError::InvalidApiBase { .. })),
                "expected {url:?} to be rejected"
            );
        }
    }
}
