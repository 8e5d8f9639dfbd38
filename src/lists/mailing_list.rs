//! The mailing list record and its access levels.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::FormBody;
use crate::error::ConfigError;

/// Who may post to a mailing list.
///
/// When a list is created without an access level the server uses
/// [`AccessLevel::Everyone`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    /// Nobody, members included, may post. Messages come from list
    /// administrators only.
    ReadOnly,
    /// Only subscribed members may post.
    Members,
    /// Anyone may post, including non-subscribers.
    #[default]
    Everyone,
}

impl AccessLevel {
    /// Returns the wire value of this access level.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ReadOnly => "readonly",
            Self::Members => "members",
            Self::Everyone => "everyone",
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "readonly" => Ok(Self::ReadOnly),
            "members" => Ok(Self::Members),
            "everyone" => Ok(Self::Everyone),
            other => Err(ConfigError::InvalidAccessLevel {
                level: other.to_string(),
            }),
        }
    }
}

/// A mailing list.
///
/// The same struct serves as a prototype for create and update: empty
/// strings and a `None` access level mean "not set" and are not sent.
/// `created_at` and `members_count` are maintained by the server and are
/// never sent.
///
/// # Example
///
/// ```rust
/// use mailgun_api::{AccessLevel, MailingList};
///
/// let prototype = MailingList {
///     address: "devs@example.com".to_string(),
///     name: "Developers".to_string(),
///     access_level: Some(AccessLevel::Members),
///     ..Default::default()
/// };
///
/// let form = prototype.to_form();
/// assert_eq!(form.get("access_level"), Some("members"));
/// assert_eq!(form.get("description"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailingList {
    /// The list's email address; also its identity.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Posting policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_level: Option<AccessLevel>,
    /// Creation time as sent by the server (RFC 2822).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub created_at: String,
    /// Number of members.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub members_count: u64,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_zero(n: &u64) -> bool {
    *n == 0
}

impl MailingList {
    /// Builds the form body for a create or update request.
    ///
    /// Only non-empty fields are included.
    #[must_use]
    pub fn to_form(&self) -> FormBody {
        let mut form = FormBody::new();
        form.push_non_empty("address", &self.address);
        form.push_non_empty("name", &self.name);
        form.push_non_empty("description", &self.description);
        if let Some(level) = self.access_level {
            form.push("access_level", level.as_str());
        }
        form
    }

    /// Parses `created_at` into a UTC timestamp.
    ///
    /// Returns `None` if the field is empty or not valid RFC 2822.
    #[must_use]
    pub fn created_at_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc2822(&self.created_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}
