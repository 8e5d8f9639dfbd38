//! Configuration types for the Mailgun API SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for API communication with Mailgun.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`MailgunConfig`]: The main configuration struct holding all SDK settings
//! - [`MailgunConfigBuilder`]: A builder for constructing [`MailgunConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`ApiBase`]: A validated API base URL
//! - [`Region`]: The Mailgun hosting region
//!
//! # Example
//!
//! ```rust
//! use mailgun_api::{MailgunConfig, ApiKey, Region};
//!
//! let config = MailgunConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .region(Region::Eu)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_base().as_ref(), "https://api.eu.mailgun.net/v3");
//! ```

mod newtypes;
mod region;

pub use newtypes::{ApiBase, ApiKey};
pub use region::Region;

use crate::error::ConfigError;

/// Configuration for the Mailgun API SDK.
///
/// Holds the credentials and endpoint settings shared by every request.
///
/// # Thread Safety
///
/// `MailgunConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use mailgun_api::{MailgunConfig, ApiKey, ApiBase};
///
/// let config = MailgunConfig::builder()
///     .api_key(ApiKey::new("your-api-key").unwrap())
///     .api_base(ApiBase::new("http://localhost:8080/v3").unwrap())
///     .basic_auth_user("api")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.basic_auth_user(), "api");
/// ```
#[derive(Clone, Debug)]
pub struct MailgunConfig {
    api_key: ApiKey,
    region: Region,
    api_base: ApiBase,
    basic_auth_user: String,
    user_agent_prefix: Option<String>,
}

impl MailgunConfig {
    /// Creates a new builder for constructing a `MailgunConfig`.
    #[must_use]
    pub fn builder() -> MailgunConfigBuilder {
        MailgunConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the configured region.
    #[must_use]
    pub const fn region(&self) -> Region {
        self.region
    }

    /// Returns the API base URL, either the explicit override or the
    /// region's default.
    #[must_use]
    pub const fn api_base(&self) -> &ApiBase {
        &self.api_base
    }

    /// Returns the basic-auth username sent alongside the API key.
    #[must_use]
    pub fn basic_auth_user(&self) -> &str {
        &self.basic_auth_user
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify MailgunConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MailgunConfig>();
};

/// Builder for constructing [`MailgunConfig`] instances.
///
/// The only required field is `api_key`.
///
/// # Defaults
///
/// - `region`: [`Region::Us`]
/// - `api_base`: the region's base URL
/// - `basic_auth_user`: empty
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct MailgunConfigBuilder {
    api_key: Option<ApiKey>,
    region: Option<Region>,
    api_base: Option<ApiBase>,
    basic_auth_user: Option<String>,
    user_agent_prefix: Option<String>,
}

impl MailgunConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the hosting region.
    #[must_use]
    pub const fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// Overrides the API base URL.
    ///
    /// Takes precedence over the region's base URL. Useful for proxies and
    /// local test servers.
    #[must_use]
    pub fn api_base(mut self, base: ApiBase) -> Self {
        self.api_base = Some(base);
        self
    }

    /// Sets the basic-auth username.
    #[must_use]
    pub fn basic_auth_user(mut self, user: impl Into<String>) -> Self {
        self.basic_auth_user = Some(user.into());
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`MailgunConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set.
    pub fn build(self) -> Result<MailgunConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;
        let region = self.region.unwrap_or_default();
        let api_base = match self.api_base {
            Some(base) => base,
            None => ApiBase::new(region.api_base_url())?,
        };

        Ok(MailgunConfig {
            api_key,
            region,
            api_base,
            basic_auth_user: self.basic_auth_user.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
