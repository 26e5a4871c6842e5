//! Validated newtype wrappers for configuration values.
//!
//! Each wrapper validates on construction, so a [`ShopifyConfig`](super::ShopifyConfig)
//! holding them is always usable for building requests.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A shop's Admin API access token.
///
/// The token is sent in the `X-Shopify-Access-Token` header of every request.
/// `Debug` output is masked so tokens do not leak into logs.
///
/// # Example
///
/// ```rust
/// use shopify_services::AccessToken;
///
/// let token = AccessToken::new("shpat_123").unwrap();
/// assert_eq!(token.as_ref(), "shpat_123");
/// assert_eq!(format!("{token:?}"), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty or
    /// whitespace only.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        let token = token.trim();
        if token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token.to_string()))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A validated `*.myshopify.com` shop domain.
///
/// # Accepted Formats
///
/// - `shop-name`
/// - `shop-name.myshopify.com`
/// - `https://shop-name.myshopify.com` (with or without trailing slash)
///
/// All are normalized to `shop-name.myshopify.com`.
///
/// ```rust
/// use shopify_services::ShopDomain;
///
/// let domain = ShopDomain::new("https://My-Store.myshopify.com/").unwrap();
/// assert_eq!(domain.as_ref(), "my-store.myshopify.com");
/// assert_eq!(domain.shop_name(), "my-store");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopDomain {
    full_domain: String,
    shop_name_end: usize,
}

impl ShopDomain {
    const SUFFIX: &'static str = ".myshopify.com";

    /// Creates a new validated shop domain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidShopDomain`] if the input is empty, has a
    /// foreign domain, or the shop name contains invalid characters.
    pub fn new(domain: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = domain.into();
        let lowered = raw.trim().to_lowercase();
        let invalid = || ConfigError::InvalidShopDomain {
            domain: raw.trim().to_string(),
        };

        let host = lowered
            .strip_prefix("https://")
            .or_else(|| lowered.strip_prefix("http://"))
            .unwrap_or(&lowered)
            .trim_end_matches('/');

        let shop_name = match host.strip_suffix(Self::SUFFIX) {
            Some(name) => name,
            None if host.contains('.') => return Err(invalid()),
            None => host,
        };

        if !Self::is_valid_shop_name(shop_name) {
            return Err(invalid());
        }

        Ok(Self {
            shop_name_end: shop_name.len(),
            full_domain: format!("{shop_name}{}", Self::SUFFIX),
        })
    }

    /// Returns the shop name portion, e.g. `my-store`.
    #[must_use]
    pub fn shop_name(&self) -> &str {
        &self.full_domain[..self.shop_name_end]
    }

    fn is_valid_shop_name(name: &str) -> bool {
        !name.is_empty()
            && !name.starts_with('-')
            && !name.ends_with('-')
            && name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }
}

impl AsRef<str> for ShopDomain {
    fn as_ref(&self) -> &str {
        &self.full_domain
    }
}

impl fmt::Display for ShopDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_domain)
    }
}

impl Serialize for ShopDomain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.full_domain)
    }
}

impl<'de> Deserialize<'de> for ShopDomain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// An origin that replaces `https://{shop}.myshopify.com` as the request
/// base, e.g. an egress proxy or a local test server.
///
/// Only the origin is kept; any path, query or fragment is rejected.
///
/// ```rust
/// use shopify_services::HostUrl;
///
/// let host = HostUrl::new("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(host.as_ref(), "http://127.0.0.1:8080");
/// assert_eq!(host.host_name(), "127.0.0.1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    origin: String,
    scheme_end: usize,
}

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the scheme is not `http` or
    /// `https`, the host is missing, or the URL carries a path.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let origin = url.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidHostUrl { url: url.clone() };

        let scheme_end = origin.find("://").ok_or_else(invalid)?;
        if !matches!(&origin[..scheme_end], "http" | "https") {
            return Err(invalid());
        }

        let authority = &origin[scheme_end + 3..];
        if authority.is_empty()
            || authority.starts_with(':')
            || authority.contains(['/', '?', '#'])
        {
            return Err(invalid());
        }

        Ok(Self { origin, scheme_end })
    }

    /// Returns the host name without port.
    #[must_use]
    pub fn host_name(&self) -> &str {
        let authority = &self.origin[self.scheme_end + 3..];
        authority.split(':').next().unwrap_or(authority)
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.origin
    }
}
