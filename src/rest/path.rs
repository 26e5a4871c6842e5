//! Path building for REST resources.
//!
//! Every resource lives under a base segment (`metafields`, `redirects`).
//! Scoped resources can also be reached through a parent:
//!
//! - `{base}.json` / `{parent_type}/{parent_id}/{base}.json` for list and create
//! - `{base}/count.json` / `{parent_type}/{parent_id}/{base}/count.json` for count
//! - `{base}/{id}.json` for find, update and delete
//!
//! # Example
//!
//! ```rust
//! use shopify_services::rest::{ParentResource, ResourceOperation, ResourcePath};
//!
//! let parent = ParentResource::new("products", 123).unwrap();
//! let path = ResourcePath::scoped(&parent, "metafields");
//!
//! assert_eq!(path.build(ResourceOperation::All, None).unwrap(), "products/123/metafields.json");
//! assert_eq!(path.build(ResourceOperation::Count, None).unwrap(), "products/123/metafields/count.json");
//! ```

use std::fmt;

use crate::clients::HttpMethod;
use crate::rest::ServiceError;

/// Operations that can be performed on a REST resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Find a single resource by ID (GET /resources/{id}).
    Find,
    /// List resources (GET /resources).
    All,
    /// Create a new resource (POST /resources).
    Create,
    /// Update an existing resource (PUT /resources/{id}).
    Update,
    /// Delete a resource (DELETE /resources/{id}).
    Delete,
    /// Count resources (GET /resources/count).
    Count,
}

impl ResourceOperation {
    /// Returns the HTTP method for this operation.
    #[must_use]
    pub const fn http_method(&self) -> HttpMethod {
        match self {
            Self::Find | Self::All | Self::Count => HttpMethod::Get,
            Self::Create => HttpMethod::Post,
            Self::Update => HttpMethod::Put,
            Self::Delete => HttpMethod::Delete,
        }
    }

    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Find => "find",
            Self::All => "all",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Count => "count",
        }
    }

    /// Returns `true` for operations addressing one resource by ID.
    #[must_use]
    pub const fn requires_id(&self) -> bool {
        matches!(self, Self::Find | Self::Update | Self::Delete)
    }
}

impl fmt::Display for ResourceOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parent resource that scopes a nested collection, e.g. `products/123`.
///
/// The resource type is a plural path segment (`products`, `customers`) and
/// is validated on construction so it cannot alter the request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentResource {
    resource_type: String,
    resource_id: u64,
}

impl ParentResource {
    /// Creates a parent scope.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidArgument`] unless `resource_type` is a
    /// non-empty run of lowercase ASCII letters, digits and `_`.
    ///
    /// ```rust
    /// use shopify_services::rest::ParentResource;
    ///
    /// assert!(ParentResource::new("customers", 7).is_ok());
    /// assert!(ParentResource::new("", 7).is_err());
    /// assert!(ParentResource::new("products/1/variants", 7).is_err());
    /// assert!(ParentResource::new("..", 7).is_err());
    /// ```
    pub fn new(resource_type: impl Into<String>, resource_id: u64) -> Result<Self, ServiceError> {
        let resource_type = resource_type.into();

        if resource_type.is_empty() {
            return Err(ServiceError::invalid_argument(
                "resource_type",
                "must not be empty",
            ));
        }
        if resource_type
            .chars()
            .any(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'))
        {
            return Err(ServiceError::invalid_argument(
                "resource_type",
                format!("'{resource_type}' must contain only a-z, 0-9 and '_'"),
            ));
        }

        Ok(Self {
            resource_type,
            resource_id,
        })
    }

    pub(crate) fn from_segment(resource_type: &'static str, resource_id: u64) -> Self {
        Self {
            resource_type: resource_type.to_string(),
            resource_id,
        }
    }

    /// Returns the plural resource type, e.g. `products`.
    #[must_use]
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// Returns the parent's ID.
    #[must_use]
    pub const fn resource_id(&self) -> u64 {
        self.resource_id
    }
}

impl fmt::Display for ParentResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.resource_type, self.resource_id)
    }
}

/// Builds relative request paths for one resource, optionally scoped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath<'a> {
    parent: Option<&'a ParentResource>,
    base: &'static str,
}

impl<'a> ResourcePath<'a> {
    /// Paths rooted directly at `base`.
    #[must_use]
    pub const fn new(base: &'static str) -> Self {
        Self { parent: None, base }
    }

    /// Paths nested under `parent`.
    #[must_use]
    pub const fn scoped(parent: &'a ParentResource, base: &'static str) -> Self {
        Self {
            parent: Some(parent),
            base,
        }
    }

    /// Builds the path for `operation`.
    ///
    /// Operations on a single resource use the unscoped member path, since
    /// resource IDs are unique platform-wide.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidArgument`] if `operation` addresses a
    /// single resource and `id` is `None`.
    pub fn build(&self, operation: ResourceOperation, id: Option<u64>) -> Result<String, ServiceError> {
        let prefix = self
            .parent
            .map_or_else(String::new, |parent| format!("{parent}/"));

        match operation {
            ResourceOperation::All | ResourceOperation::Create => {
                Ok(format!("{prefix}{}.json", self.base))
            }
            ResourceOperation::Count => Ok(format!("{prefix}{}/count.json", self.base)),
            ResourceOperation::Find | ResourceOperation::Update | ResourceOperation::Delete => {
                let id = id.ok_or_else(|| {
                    ServiceError::invalid_argument(
                        "id",
                        format!("{operation} requires the resource id to be set"),
                    )
                })?;
                Ok(format!("{}/{id}.json", self.base))
            }
        }
    }
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ParentResource>();
    assert_send_sync::<ResourcePath<'static>>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_http_methods() {
        assert_eq!(ResourceOperation::Find.http_method(), HttpMethod::Get);
        assert_eq!(ResourceOperation::All.http_method(), HttpMethod::Get);
        assert_eq!(ResourceOperation::Count.http_method(), HttpMethod::Get);
        assert_eq!(ResourceOperation::Create.http_method(), HttpMethod::Post);
        assert_eq!(ResourceOperation::Update.http_method(), HttpMethod::Put);
        assert_eq!(ResourceOperation::Delete.http_method(), HttpMethod::Delete);
    }

    #[test]
    fn test_unscoped_paths() {
        let path = ResourcePath::new("redirects");
        assert_eq!(path.build(ResourceOperation::All, None).unwrap(), "redirects.json");
        assert_eq!(path.build(ResourceOperation::Create, None).unwrap(), "redirects.json");
        assert_eq!(
            path.build(ResourceOperation::Count, None).unwrap(),
            "redirects/count.json"
        );
        assert_eq!(
            path.build(ResourceOperation::Find, Some(668_809_255)).unwrap(),
            "redirects/668809255.json"
        );
    }

    #[test]
    fn test_scoped_paths() {
        let parent = ParentResource::new("products", 123).unwrap();
        let path = ResourcePath::scoped(&parent, "metafields");

        assert_eq!(
            path.build(ResourceOperation::All, None).unwrap(),
            "products/123/metafields.json"
        );
        assert_eq!(
            path.build(ResourceOperation::Create, None).unwrap(),
            "products/123/metafields.json"
        );
        assert_eq!(
            path.build(ResourceOperation::Count, None).unwrap(),
            "products/123/metafields/count.json"
        );
        assert_eq!(
            path.build(ResourceOperation::Delete, Some(5)).unwrap(),
            "metafields/5.json"
        );
    }

    #[test]
    fn test_member_operations_require_id() {
        let path = ResourcePath::new("metafields");
        for operation in [
            ResourceOperation::Find,
            ResourceOperation::Update,
            ResourceOperation::Delete,
        ] {
            assert!(operation.requires_id());
            let result = path.build(operation, None);
            assert!(matches!(
                result,
                Err(ServiceError::InvalidArgument { argument: "id", .. })
            ));
        }
    }

    #[test]
    fn test_parent_rejects_path_characters() {
        let bad_types = [
            "",
            ".",
            "..",
            "%2E%2E",
            "products%2F1",
            "products/1",
            "products?x=1",
            "products#a",
            "pro ducts",
            "Products",
            "produits-é",
        ];
        for bad in bad_types {
            assert!(
                ParentResource::new(bad, 1).is_err(),
                "expected '{bad}' to be rejected"
            );
        }
    }

    #[test]
    fn test_parent_accepts_platform_collection_names() {
        for good in ["products", "custom_collections", "smart_collections", "v2"] {
            assert!(
                ParentResource::new(good, 1).is_ok(),
                "expected '{good}' to be accepted"
            );
        }
    }

    #[test]
    fn test_parent_display() {
        let parent = ParentResource::new("customers", 207_119_551).unwrap();
        assert_eq!(parent.to_string(), "customers/207119551");
        assert_eq!(parent.resource_type(), "customers");
        assert_eq!(parent.resource_id(), 207_119_551);
    }
}
