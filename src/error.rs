//! Configuration errors.
//!
//! Request and response failures live in [`crate::clients::HttpError`];
//! [`ConfigError`] only covers building a [`crate::MailgunConfig`] and its
//! newtypes, so a client that exists was built from a valid configuration.
//!
//! # Example
//!
//! ```rust
//! use mailgun_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Mailgun API key.")]
    EmptyApiKey,

    /// API base URL is invalid.
    #[error("Invalid API base URL '{url}'. Please provide an absolute http(s) URL (e.g., 'https://api.mailgun.net/v3').")]
    InvalidApiBase {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Region is not recognized.
    #[error("Invalid region '{region}'. Expected 'us' or 'eu'.")]
    InvalidRegion {
        /// The invalid region string that was provided.
        region: String,
    },

    /// Access level is not recognized.
    #[error("Invalid access level '{level}'. Expected 'readonly', 'members' or 'everyone'.")]
    InvalidAccessLevel {
        /// The invalid access level string that was provided.
        level: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
