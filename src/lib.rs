//! # Shopify REST Services
//!
//! Typed async services for the Shopify Admin REST API: validated shop
//! configuration, an HTTPS transport, and one CRUD service per resource.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ShopifyConfig`] and [`ShopifyConfigBuilder`]
//! - Validated newtypes for the shop domain, access token and API host
//! - An async HTTP client that authenticates every request with the shop's
//!   access token ([`clients`])
//! - A generic service pipeline: request building, root-element unwrapping
//!   and error classification ([`rest`])
//! - Ready-made services for metafields and redirects ([`rest::resources`])
//!
//! ## Quick Start
//!
//! ```rust
//! use shopify_services::{ApiVersion, ShopifyConfig, ShopDomain, AccessToken};
//!
//! let config = ShopifyConfig::builder()
//!     .shop(ShopDomain::new("https://my-store.myshopify.com/").unwrap())
//!     .access_token(AccessToken::new("shpat_123").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     config.api_base_url(),
//!     "https://my-store.myshopify.com/admin/api/2025-10/"
//! );
//! ```
//!
//! ## Working With Resources
//!
//! ```rust,ignore
//! use shopify_services::rest::resources::{Redirect, RedirectFilter, RedirectService};
//!
//! let redirects = RedirectService::from_credentials("my-store", "shpat_123")?;
//!
//! let created = redirects.create(&Redirect::new("/ipod", "/pages/itunes")).await?;
//! let id = created.id.unwrap_or_default();
//!
//! let mut redirect = redirects.get(id, None).await?;
//! redirect.target = Some("/pages/ipod".to_string());
//! redirects.update(&redirect).await?;
//!
//! let filter = RedirectFilter {
//!     path: Some("/ipod".to_string()),
//!     ..Default::default()
//! };
//! assert_eq!(redirects.count(Some(&filter)).await?, 1);
//!
//! redirects.delete(id).await?;
//! ```
//!
//! ## Errors
//!
//! Every service operation returns [`rest::ServiceError`]. Input problems
//! (`InvalidArgument`, `Configuration`) are raised before any request is
//! sent; platform answers are classified as `NotFound` (404) or `Api` with
//! the status and raw body; bodies missing their root element are
//! `MalformedResponse`. Nothing is retried.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events: `debug` for each request and response,
//! `warn` for failed requests and deprecated API usage. Install a subscriber
//! to see them.
//!
//! ## Thread Safety
//!
//! All services are `Send + Sync` and cheap to clone; clones share one
//! connection pool.

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{AccessToken, ApiVersion, HostUrl, ShopDomain, ShopifyConfig, ShopifyConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiCallLimit, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, InvalidHttpRequestError, PaginationInfo,
};

// Re-export service types
pub use rest::resources::{MetafieldService, RedirectService};
pub use rest::{ResourceService, ServiceError, ShopifyService};
