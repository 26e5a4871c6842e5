//! Redirect resource.
//!
//! A [`Redirect`] sends storefront visitors from an old `path` to a new
//! `target`, e.g. when a product or page moves.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_services::rest::resources::{Redirect, RedirectFilter, RedirectService};
//!
//! let redirects = RedirectService::from_credentials("my-store", "shpat_123")?;
//!
//! let created = redirects.create(&Redirect::new("/ipod", "/pages/itunes")).await?;
//!
//! let filter = RedirectFilter {
//!     path: Some("/ipod".to_string()),
//!     ..Default::default()
//! };
//! let matching = redirects.list(Some(&filter)).await?;
//! ```

use serde::{Deserialize, Serialize};

use crate::rest::{QueryFilter, ResourceService, RestResource};

use super::ListFilter;

/// A storefront URL redirect.
///
/// `path` is the old location relative to the storefront root. `target` is
/// where visitors are sent and may be relative or a full URL.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Redirect {
    /// The unique identifier of the redirect; `None` until created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The old path to redirect from (e.g., "/old-page").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// The destination (e.g., "/new-page" or a full URL).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl Redirect {
    /// A new, unsaved redirect from `path` to `target`.
    #[must_use]
    pub fn new(path: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: None,
            path: Some(path.into()),
            target: Some(target.into()),
        }
    }
}

impl RestResource for Redirect {
    type Filter = RedirectFilter;

    const NAME: &'static str = "Redirect";
    const SINGULAR: &'static str = "redirect";
    const PLURAL: &'static str = "redirects";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Criteria for listing and counting redirects.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RedirectFilter {
    /// Only redirects with this path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Only redirects with this target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Common list parameters.
    #[serde(flatten)]
    pub list: ListFilter,
}

impl QueryFilter for RedirectFilter {}

/// Service for the shop's redirects.
pub type RedirectService = ResourceService<Redirect>;
