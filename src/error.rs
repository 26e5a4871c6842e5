//! Configuration error types.
//!
//! Every configuration constructor returns `Result<T, ConfigError>` so that a
//! service can never be built from a missing shop or access token. These
//! errors surface at service-construction time, never per request.
//!
//! # Example
//!
//! ```rust
//! use shopify_services::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors raised while building a [`ShopifyConfig`](crate::ShopifyConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The access token was empty.
    #[error("Access token cannot be empty. Please provide the shop's API access token.")]
    EmptyAccessToken,

    /// The shop domain could not be parsed.
    #[error("Invalid shop domain '{domain}'. Expected 'shop-name', 'shop-name.myshopify.com' or 'https://shop-name.myshopify.com'.")]
    InvalidShopDomain {
        /// The rejected input.
        domain: String,
    },

    /// The API version string is malformed.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM' (e.g., '2025-01') or 'unstable'.")]
    InvalidApiVersion {
        /// The rejected input.
        version: String,
    },

    /// A required builder field was never set.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// The API host override is not a usable URL.
    #[error("Invalid API host '{url}'. Please provide a URL with scheme (e.g., 'https://proxy.example.com').")]
    InvalidHostUrl {
        /// The rejected input.
        url: String,
    },
}
