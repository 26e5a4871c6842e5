//! Admin API version selection.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// The Admin API version embedded in every request path
/// (`/admin/api/{version}/...`).
///
/// Shopify publishes a stable version each quarter. Versions not listed here
/// can still be addressed through [`ApiVersion::Custom`].
///
/// ```rust
/// use shopify_services::ApiVersion;
///
/// let version: ApiVersion = "2025-07".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2025_07);
/// assert_eq!(version.to_string(), "2025-07");
///
/// let future: ApiVersion = "2026-04".parse().unwrap();
/// assert_eq!(future, ApiVersion::Custom("2026-04".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// 2024-10
    V2024_10,
    /// 2025-01
    V2025_01,
    /// 2025-04
    V2025_04,
    /// 2025-07
    V2025_07,
    /// 2025-10
    V2025_10,
    /// The unstable release channel.
    Unstable,
    /// Any other `YYYY-MM` release.
    Custom(String),
}

impl ApiVersion {
    const KNOWN: [(Self, &'static str); 5] = [
        (Self::V2024_10, "2024-10"),
        (Self::V2025_01, "2025-01"),
        (Self::V2025_04, "2025-04"),
        (Self::V2025_07, "2025-07"),
        (Self::V2025_10, "2025-10"),
    ];

    /// Returns the newest stable version known to this crate.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2025_10
    }

    /// Returns `false` for [`ApiVersion::Unstable`] and [`ApiVersion::Custom`].
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        !matches!(self, Self::Unstable | Self::Custom(_))
    }

    fn is_release_format(s: &str) -> bool {
        let Some((year, month)) = s.split_once('-') else {
            return false;
        };
        let numeric = |part: &str, len: usize| {
            part.len() == len && part.chars().all(|c| c.is_ascii_digit())
        };
        numeric(year, 4)
            && numeric(month, 2)
            && month.parse::<u8>().is_ok_and(|m| (1..=12).contains(&m))
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unstable => f.write_str("unstable"),
            Self::Custom(s) => f.write_str(s),
            known => {
                let label = Self::KNOWN
                    .iter()
                    .find(|(version, _)| version == known)
                    .map_or("", |(_, label)| *label);
                f.write_str(label)
            }
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        if s == "unstable" {
            return Ok(Self::Unstable);
        }
        if let Some((version, _)) = Self::KNOWN.iter().find(|(_, label)| *label == s) {
            return Ok(version.clone());
        }
        if Self::is_release_format(&s) {
            Ok(Self::Custom(s))
        } else {
            Err(ConfigError::InvalidApiVersion { version: s })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_is_stable_and_default() {
        assert!(ApiVersion::latest().is_stable());
        assert_eq!(ApiVersion::default(), ApiVersion::latest());
    }

    #[test]
    fn test_known_versions_display_round_trip() {
        for (version, label) in ApiVersion::KNOWN {
            assert_eq!(version.to_string(), label);
            assert_eq!(label.parse::<ApiVersion>().unwrap(), version);
        }
    }

    #[test]
    fn test_unstable_parses_case_insensitively() {
        let version: ApiVersion = " Unstable ".parse().unwrap();
        assert_eq!(version, ApiVersion::Unstable);
        assert!(!version.is_stable());
    }

    #[test]
    fn test_rejects_malformed_versions() {
        for input in ["2025", "2025-13", "25-01", "2025-1", "latest"] {
            assert!(
                matches!(
                    input.parse::<ApiVersion>(),
                    Err(ConfigError::InvalidApiVersion { .. })
                ),
                "{input} should be rejected"
            );
        }
    }
}
