//! List parameters shared by every collection endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::QueryFilter;

/// Common parameters accepted by list and count endpoints.
///
/// Resource filters embed this with `#[serde(flatten)]`, so its fields are
/// sent after the resource's own. Timestamps are sent as RFC 3339.
///
/// When `page_info` is set the platform ignores every other criterion except
/// `limit` and `fields`; the cursor already encodes the original query.
///
/// ```rust
/// use shopify_services::rest::{ListFilter, QueryFilter};
///
/// let filter = ListFilter {
///     limit: Some(50),
///     since_id: Some(1000),
///     ..Default::default()
/// };
/// assert_eq!(
///     filter.to_parameters().unwrap(),
///     vec![
///         ("limit".to_string(), "50".to_string()),
///         ("since_id".to_string(), "1000".to_string()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ListFilter {
    /// Maximum number of results (platform default 50, max 250).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Restrict results to after the specified ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    /// Cursor from a previous page's `Link` header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,

    /// Comma-separated list of fields to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,

    /// Show resources created after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    /// Show resources created before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    /// Show resources last updated after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    /// Show resources last updated before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
}

impl ListFilter {
    /// A filter asking for the page behind `page_info`.
    #[must_use]
    pub fn page(page_info: impl Into<String>) -> Self {
        Self {
            page_info: Some(page_info.into()),
            ..Self::default()
        }
    }
}

impl QueryFilter for ListFilter {}
