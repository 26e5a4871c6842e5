//! Transport layer.
//!
//! This module is the HTTPS collaborator behind every resource service:
//!
//! - [`HttpRequest`] / [`HttpRequestBuilder`]: method, relative path, ordered
//!   query parameters and optional JSON body
//! - [`HttpClient`]: sends requests with the shop's base URL and
//!   authentication headers
//! - [`HttpResponse`]: status, headers and raw body, with accessors for
//!   Shopify's rate limit, pagination and deprecation headers
//! - [`HttpError`]: request validation and network failures
//!
//! The transport does not retry and does not classify statuses; both are
//! left to callers.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_services::ShopifyConfig;
//! use shopify_services::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let config = ShopifyConfig::from_credentials("my-store", "shpat_123")?;
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "redirects/count.json").build()?;
//! let response = client.request(request).await?;
//! println!("{}: {}", response.code, response.body);
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{ApiCallLimit, HttpResponse, PaginationInfo};
