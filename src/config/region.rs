//! Mailgun region definitions.
//!
//! Mailgun hosts accounts in separate US and EU regions, each with its own
//! API host. The [`Region`] enum selects the default API base URL.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Mailgun hosting region.
///
/// # Example
///
/// ```rust
/// use mailgun_api::Region;
///
/// let region: Region = "eu".parse().unwrap();
/// assert_eq!(region, Region::Eu);
/// assert_eq!(region.api_base_url(), "https://api.eu.mailgun.net/v3");
/// assert_eq!(format!("{}", Region::Us), "us");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Region {
    /// United States region (`api.mailgun.net`).
    #[default]
    Us,
    /// European Union region (`api.eu.mailgun.net`).
    Eu,
}

impl Region {
    /// Returns the default API base URL for this region.
    #[must_use]
    pub const fn api_base_url(&self) -> &'static str {
        match self {
            Self::Us => "https://api.mailgun.net/v3",
            Self::Eu => "https://api.eu.mailgun.net/v3",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Us => f.write_str("us"),
            Self::Eu => f.write_str("eu"),
        }
    }
}

impl FromStr for Region {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "us" => Ok(Self::Us),
            "eu" => Ok(Self::Eu),
            other => Err(ConfigError::InvalidRegion {
                region: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_parses_case_insensitively() {
        assert_eq!("US".parse::<Region>().unwrap(), Region::Us);
        assert_eq!(" eu ".parse::<Region>().unwrap(), Region::Eu);
    }

    #[test]
    fn test_region_rejects_unknown() {
        let result = "ap-south".parse::<Region>();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidRegion { region }) if region == "ap-south"
        ));
    }

    #[test]
    fn test_region_default_is_us() {
        assert_eq!(Region::default(), Region::Us);
    }

    #[test]
    fn test_region_display_round_trips() {
        for region in [Region::Us, Region::Eu] {
            assert_eq!(region.to_string().parse::<Region>().unwrap(), region);
        }
    }

    #[test]
    fn test_region_base_urls_are_valid_api_bases() {
        for region in [Region::Us, Region::Eu] {
            assert!(crate::config::ApiBase::new(region.api_base_url()).is_ok());
        }
    }
}
