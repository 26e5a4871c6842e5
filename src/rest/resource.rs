//! The [`RestResource`] trait describing one Admin REST entity type.
//!
//! A resource declares its names and its filter type; the generic
//! [`ResourceService`](crate::rest::ResourceService) derives every path, root
//! element and request body from them.
//!
//! # Example
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use shopify_services::rest::{ListFilter, RestResource};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct Page {
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub id: Option<u64>,
//!     pub title: Option<String>,
//! }
//!
//! impl RestResource for Page {
//!     type Filter = ListFilter;
//!
//!     const NAME: &'static str = "Page";
//!     const SINGULAR: &'static str = "page";
//!     const PLURAL: &'static str = "pages";
//!
//!     fn id(&self) -> Option<u64> {
//!         self.id
//!     }
//! }
//!
//! assert_eq!(Page::BASE_PATH, "pages");
//! ```

use serde::{de::DeserializeOwned, Serialize};

use crate::rest::QueryFilter;

/// An entity exposed by the Admin REST API.
///
/// Entities are value records: an `id` of `None` means "not yet persisted".
/// Implementations should serialize `id` only when it is set.
pub trait RestResource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized + 'static {
    /// Filter accepted by count and list operations.
    ///
    /// Use `()` if the resource has no filter.
    type Filter: QueryFilter + Send + Sync;

    /// Display name used in log output (e.g. "Metafield").
    const NAME: &'static str;

    /// Root element of single-entity bodies (e.g. "metafield").
    const SINGULAR: &'static str;

    /// Root element of list bodies (e.g. "metafields").
    const PLURAL: &'static str;

    /// Base path segment; defaults to [`Self::PLURAL`].
    const BASE_PATH: &'static str = Self::PLURAL;

    /// Returns the platform-assigned identifier, if persisted.
    fn id(&self) -> Option<u64>;
}

/// Marker for resources that can also be addressed under a parent
/// (`products/{id}/metafields.json`).
pub trait ScopedResource: RestResource {}
