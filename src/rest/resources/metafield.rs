//! Metafield resource.
//!
//! Metafields attach namespaced key/value data to shop resources. They are
//! reachable globally (`metafields.json`, shop-owned) or under their owner:
//!
//! - `products/{id}/metafields.json`
//! - `customers/{id}/metafields.json`
//! - ... one collection per [`MetafieldOwner`]
//!
//! Single-metafield operations (get, update, delete) always use the global
//! `metafields/{id}.json` path.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_services::rest::ParentResource;
//! use shopify_services::rest::resources::{Metafield, MetafieldOwner, MetafieldService};
//!
//! let metafields = MetafieldService::from_credentials("my-store", "shpat_123")?;
//!
//! // All metafields of product 123
//! let on_product = metafields.list_for_owner(MetafieldOwner::Product, 123, None).await?;
//!
//! // Same thing with a raw parent
//! let parent = ParentResource::new("products", 123)?;
//! let on_product = metafields.list_in(&parent, None).await?;
//!
//! let created = metafields
//!     .create_in(&parent, &Metafield::new("inventory", "warehouse", "A-15-3", "single_line_text_field"))
//!     .await?;
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::{
    ParentResource, QueryFilter, ResourceService, RestResource, ScopedResource, ServiceError,
};

use super::ListFilter;

/// A metafield attached to a shop resource.
///
/// The `metafield_type` field is sent as `type` and names the value's data
/// type (`single_line_text_field`, `number_integer`, `json`, ...). The value
/// itself is always carried as a string.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Metafield {
    /// The unique identifier of the metafield; `None` until created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Container grouping related metafields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Name of the metafield, unique within its namespace and owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// The stored value, formatted according to `metafield_type`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Data type of the value.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub metafield_type: Option<String>,

    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// ID of the owning resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<u64>,

    /// Singular type of the owning resource, e.g. "product" or "shop".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_resource: Option<String>,

    /// Read-only.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// Read-only.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    /// Read-only.
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

impl Metafield {
    /// A new, unsaved metafield.
    #[must_use]
    pub fn new(
        namespace: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
        metafield_type: impl Into<String>,
    ) -> Self {
        Self {
            namespace: Some(namespace.into()),
            key: Some(key.into()),
            value: Some(value.into()),
            metafield_type: Some(metafield_type.into()),
            ..Self::default()
        }
    }
}

impl RestResource for Metafield {
    type Filter = MetafieldFilter;

    const NAME: &'static str = "Metafield";
    const SINGULAR: &'static str = "metafield";
    const PLURAL: &'static str = "metafields";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

impl ScopedResource for Metafield {}

/// Criteria for listing and counting metafields.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MetafieldFilter {
    /// Only metafields in this namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Only metafields with this key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Only metafields of this type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub metafield_type: Option<String>,

    /// Common list parameters.
    #[serde(flatten)]
    pub list: ListFilter,
}

impl QueryFilter for MetafieldFilter {}

/// The kinds of resource a metafield can belong to.
///
/// ```rust
/// use shopify_services::rest::resources::MetafieldOwner;
///
/// assert_eq!(MetafieldOwner::Product.to_path_segment(), "products");
/// assert_eq!(MetafieldOwner::Shop.to_path_segment(), "");
/// assert!(MetafieldOwner::Shop.parent(1).is_none());
/// assert_eq!(MetafieldOwner::Customer.parent(7).unwrap().to_string(), "customers/7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetafieldOwner {
    /// A product.
    Product,
    /// A product variant.
    Variant,
    /// A customer.
    Customer,
    /// An order.
    Order,
    /// The shop itself (global metafields).
    Shop,
    /// A custom or smart collection.
    Collection,
    /// An online store page.
    Page,
    /// A blog.
    Blog,
    /// A blog article.
    Article,
}

impl MetafieldOwner {
    /// Returns the plural path segment, empty for [`MetafieldOwner::Shop`].
    #[must_use]
    pub const fn to_path_segment(&self) -> &'static str {
        match self {
            Self::Product => "products",
            Self::Variant => "variants",
            Self::Customer => "customers",
            Self::Order => "orders",
            Self::Shop => "",
            Self::Collection => "collections",
            Self::Page => "pages",
            Self::Blog => "blogs",
            Self::Article => "articles",
        }
    }

    /// Returns the parent scope for owner `id`, or `None` for shop-owned
    /// metafields, which live at the unscoped path.
    #[must_use]
    pub fn parent(&self, id: u64) -> Option<ParentResource> {
        match self {
            Self::Shop => None,
            owner => Some(ParentResource::from_segment(owner.to_path_segment(), id)),
        }
    }
}

impl fmt::Display for MetafieldOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Product => "product",
            Self::Variant => "variant",
            Self::Customer => "customer",
            Self::Order => "order",
            Self::Shop => "shop",
            Self::Collection => "collection",
            Self::Page => "page",
            Self::Blog => "blog",
            Self::Article => "article",
        };
        f.write_str(s)
    }
}

/// Service for metafields, global or scoped to an owner.
pub type MetafieldService = ResourceService<Metafield>;

impl ResourceService<Metafield> {
    /// Counts the metafields of `owner` `id`.
    ///
    /// # Errors
    ///
    /// See [`ShopifyService::execute`](crate::rest::ShopifyService::execute).
    pub async fn count_for_owner(
        &self,
        owner: MetafieldOwner,
        id: u64,
        filter: Option<&MetafieldFilter>,
    ) -> Result<u64, ServiceError> {
        match owner.parent(id) {
            Some(parent) => self.count_in(&parent, filter).await,
            None => self.count(filter).await,
        }
    }

    /// Lists the metafields of `owner` `id`.
    ///
    /// # Errors
    ///
    /// See [`ShopifyService::execute`](crate::rest::ShopifyService::execute).
    pub async fn list_for_owner(
        &self,
        owner: MetafieldOwner,
        id: u64,
        filter: Option<&MetafieldFilter>,
    ) -> Result<Vec<Metafield>, ServiceError> {
        match owner.parent(id) {
            Some(parent) => self.list_in(&parent, filter).await,
            None => self.list(filter).await,
        }
    }

    /// Creates `metafield` on `owner` `id`.
    ///
    /// # Errors
    ///
    /// Same as [`create`](ResourceService::create).
    pub async fn create_for_owner(
        &self,
        owner: MetafieldOwner,
        id: u64,
        metafield: &Metafield,
    ) -> Result<Metafield, ServiceError> {
        match owner.parent(id) {
            Some(parent) => self.create_in(&parent, metafield).await,
            None => self.create(metafield).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn test_new_metafield_body() {
        let metafield = Metafield::new("inventory", "warehouse", "25", "number_integer");
        assert_eq!(
            serde_json::to_value(&metafield).unwrap(),
            json!({
                "namespace": "inventory",
                "key": "warehouse",
                "value": "25",
                "type": "number_integer"
            })
        );
    }

    #[test]
    fn test_read_only_fields_are_not_sent() {
        let json = r#"{
            "id": 721389482,
            "namespace": "affiliates",
            "key": "app_key",
            "value": "app_value",
            "type": "single_line_text_field",
            "description": null,
            "owner_id": 548380009,
            "owner_resource": "shop",
            "created_at": "2024-06-01T12:00:00-04:00",
            "updated_at": "2024-06-01T12:00:00-04:00",
            "admin_graphql_api_id": "gid://shopify/Metafield/721389482"
        }"#;
        let metafield: Metafield = serde_json::from_str(json).unwrap();

        assert_eq!(metafield.id(), Some(721_389_482));
        assert_eq!(metafield.metafield_type.as_deref(), Some("single_line_text_field"));
        assert!(metafield.created_at.is_some());

        let body = serde_json::to_value(&metafield).unwrap();
        assert!(body.get("created_at").is_none());
        assert!(body.get("updated_at").is_none());
        assert!(body.get("admin_graphql_api_id").is_none());
        assert_eq!(body["id"], 721_389_482);
        assert_eq!(body["owner_resource"], "shop");
    }

    #[test]
    fn test_missing_fields_are_none() {
        let metafield: Metafield = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(metafield.id, Some(1));
        assert!(metafield.namespace.is_none());
        assert!(metafield.value.is_none());
    }

    #[test]
    fn test_filter_parameters() {
        let filter = MetafieldFilter {
            namespace: Some("custom".to_string()),
            metafield_type: Some("json".to_string()),
            list: ListFilter {
                since_id: Some(5),
                ..Default::default()
            },
            ..Default::default()
        };

        assert_eq!(
            filter.to_parameters().unwrap(),
            vec![
                ("namespace".to_string(), "custom".to_string()),
                ("type".to_string(), "json".to_string()),
                ("since_id".to_string(), "5".to_string()),
            ]
        );
    }

    #[test]
    fn test_fully_populated_filter_sends_every_field_once() {
        let at = |day| Utc.with_ymd_and_hms(2025, 1, day, 0, 0, 0).unwrap();
        let filter = MetafieldFilter {
            namespace: Some("custom".to_string()),
            key: Some("color".to_string()),
            metafield_type: Some("single_line_text_field".to_string()),
            list: ListFilter {
                limit: Some(250),
                since_id: Some(5),
                page_info: Some("cursor".to_string()),
                fields: Some("id,value".to_string()),
                created_at_min: Some(at(1)),
                created_at_max: Some(at(2)),
                updated_at_min: Some(at(3)),
                updated_at_max: Some(at(4)),
            },
        };

        let parameters = filter.to_parameters().unwrap();
        let names: HashSet<&str> = parameters.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(parameters.len(), 11);
        assert_eq!(names.len(), 11);
        assert!(names.contains("type"));
        assert!(names.contains("created_at_min"));
    }

    #[test]
    fn test_owner_parents() {
        let owners = [
            (MetafieldOwner::Product, "products/9"),
            (MetafieldOwner::Variant, "variants/9"),
            (MetafieldOwner::Customer, "customers/9"),
            (MetafieldOwner::Order, "orders/9"),
            (MetafieldOwner::Collection, "collections/9"),
            (MetafieldOwner::Page, "pages/9"),
            (MetafieldOwner::Blog, "blogs/9"),
            (MetafieldOwner::Article, "articles/9"),
        ];
        for (owner, expected) in owners {
            assert_eq!(owner.parent(9).unwrap().to_string(), expected);
        }
        assert!(MetafieldOwner::Shop.parent(9).is_none());
    }

    #[test]
    fn test_owner_display_and_serde() {
        assert_eq!(MetafieldOwner::Product.to_string(), "product");
        assert_eq!(
            serde_json::to_value(MetafieldOwner::Collection).unwrap(),
            json!("collection")
        );
    }
}
