//! Configuration for resource services.
//!
//! A [`ShopifyConfig`] captures everything a service needs to address a
//! shop: the shop domain, its access token, and the API version. It is built
//! once, validated up front, and then shared immutably by every request.
//!
//! # Example
//!
//! ```rust
//! use shopify_services::{AccessToken, ApiVersion, ShopDomain, ShopifyConfig};
//!
//! let config = ShopifyConfig::builder()
//!     .shop(ShopDomain::new("my-store").unwrap())
//!     .access_token(AccessToken::new("shpat_123").unwrap())
//!     .api_version(ApiVersion::V2025_07)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_base_url(), "https://my-store.myshopify.com/admin/api/2025-07/");
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, HostUrl, ShopDomain};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Immutable shop connection settings.
#[derive(Clone, Debug)]
pub struct ShopifyConfig {
    shop: ShopDomain,
    access_token: AccessToken,
    api_version: ApiVersion,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl ShopifyConfig {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> ShopifyConfigBuilder {
        ShopifyConfigBuilder::new()
    }

    /// Builds a configuration from a raw shop URL and access token, using the
    /// latest API version.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if either value fails validation.
    ///
    /// ```rust
    /// use shopify_services::ShopifyConfig;
    ///
    /// let config = ShopifyConfig::from_credentials("https://my-store.myshopify.com", "shpat_123").unwrap();
    /// assert_eq!(config.shop().shop_name(), "my-store");
    /// ```
    pub fn from_credentials(
        my_shopify_url: &str,
        access_token: &str,
    ) -> Result<Self, ConfigError> {
        Self::builder()
            .shop(ShopDomain::new(my_shopify_url)?)
            .access_token(AccessToken::new(access_token)?)
            .build()
    }

    /// Returns the shop domain.
    #[must_use]
    pub const fn shop(&self) -> &ShopDomain {
        &self.shop
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the base URI override, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the origin requests are sent to: the `api_host` override if
    /// set, otherwise `https://{shop}.myshopify.com`.
    #[must_use]
    pub fn base_uri(&self) -> String {
        self.api_host.as_ref().map_or_else(
            || format!("https://{}", self.shop),
            |host| host.as_ref().to_string(),
        )
    }

    /// Returns the versioned API path, e.g. `/admin/api/2025-10`.
    #[must_use]
    pub fn base_path(&self) -> String {
        format!("/admin/api/{}", self.api_version)
    }

    /// Returns the full base URL that relative resource paths are appended
    /// to, ending in `/`.
    #[must_use]
    pub fn api_base_url(&self) -> String {
        format!("{}{}/", self.base_uri(), self.base_path())
    }
}

// Verify ShopifyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShopifyConfig>();
};

/// Builder for [`ShopifyConfig`].
///
/// `shop` and `access_token` are required. `api_version` defaults to
/// [`ApiVersion::latest`].
#[derive(Debug, Default)]
pub struct ShopifyConfigBuilder {
    shop: Option<ShopDomain>,
    access_token: Option<AccessToken>,
    api_version: Option<ApiVersion>,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl ShopifyConfigBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shop domain (required).
    #[must_use]
    pub fn shop(mut self, shop: ShopDomain) -> Self {
        self.shop = Some(shop);
        self
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Routes requests to `host` instead of the shop's own domain.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Prepends `prefix` to the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `shop` or
    /// `access_token` was not set.
    pub fn build(self) -> Result<ShopifyConfig, ConfigError> {
        let shop = self
            .shop
            .ok_or(ConfigError::MissingRequiredField { field: "shop" })?;
        let access_token = self.access_token.ok_or(ConfigError::MissingRequiredField {
            field: "access_token",
        })?;

        Ok(ShopifyConfig {
            shop,
            access_token,
            api_version: self.api_version.unwrap_or_default(),
            api_host: self.api_host,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
