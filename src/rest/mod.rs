//! Admin REST services.
//!
//! This module turns the transport in [`crate::clients`] into typed resource
//! operations:
//!
//! - **[`ShopifyService`]**: prepares requests against the shop's versioned
//!   base URL and executes them, unwrapping the response's root element
//! - **[`RestResource`]**: names, root elements and filter type of one entity
//! - **[`ResourceService<R>`]**: count, list, get, create, update and delete
//!   for any [`RestResource`], plus parent-scoped variants for
//!   [`ScopedResource`]s
//! - **[`QueryFilter`]**: optional criteria serialized into query parameters
//! - **[`ResourcePath`] / [`ParentResource`]**: relative path building
//! - **[`ServiceError`]**: the single failure type of every operation
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_services::rest::ParentResource;
//! use shopify_services::rest::resources::{MetafieldFilter, MetafieldService};
//!
//! let metafields = MetafieldService::from_credentials("https://my-store.myshopify.com/", "shpat_123")?;
//!
//! let filter = MetafieldFilter {
//!     namespace: Some("custom".to_string()),
//!     ..Default::default()
//! };
//! let parent = ParentResource::new("products", 123)?;
//!
//! let count = metafields.count_in(&parent, Some(&filter)).await?;
//! let items = metafields.list_in(&parent, Some(&filter)).await?;
//!
//! let mut first = metafields.get(items[0].id.unwrap_or_default(), None).await?;
//! first.value = Some("updated".to_string());
//! let saved = metafields.update(&first).await?;
//! metafields.delete(saved.id.unwrap_or_default()).await?;
//! ```

mod envelope;
mod errors;
mod filter;
mod path;
mod resource;
mod resource_service;
mod service;

pub mod resources;

pub use envelope::{unwrap_root, wrap_root};
pub use errors::ServiceError;
pub use filter::{serialize_to_parameters, QueryFilter};
pub use path::{ParentResource, ResourceOperation, ResourcePath};
pub use resource::{RestResource, ScopedResource};
pub use resource_service::{ListPage, ResourceService};
pub use resources::ListFilter;
pub use service::ShopifyService;
