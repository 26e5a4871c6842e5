//! Generic CRUD service over any [`RestResource`].

use std::fmt;
use std::marker::PhantomData;

use crate::clients::{HttpRequest, HttpRequestBuilder, PaginationInfo};
use crate::config::ShopifyConfig;
use crate::rest::{
    envelope, ParentResource, QueryFilter, ResourceOperation, ResourcePath, RestResource,
    ScopedResource, ServiceError, ShopifyService,
};

/// One page of a list operation.
///
/// Items keep the order the server returned them in. Pass `next_page_info`
/// back as the filter's `page_info` to fetch the following page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPage<R> {
    /// Entities on this page.
    pub items: Vec<R>,
    /// Cursor of the next page, if there is one.
    pub next_page_info: Option<String>,
    /// Cursor of the previous page, if there is one.
    pub prev_page_info: Option<String>,
}

impl<R> ListPage<R> {
    fn new(items: Vec<R>, pagination: PaginationInfo) -> Self {
        Self {
            items,
            next_page_info: pagination.next_page_info,
            prev_page_info: pagination.prev_page_info,
        }
    }

    /// Returns `true` if another page follows this one.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.next_page_info.is_some()
    }

    /// Returns `true` if a page precedes this one.
    #[must_use]
    pub const fn has_prev_page(&self) -> bool {
        self.prev_page_info.is_some()
    }
}

impl<R> IntoIterator for ListPage<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// CRUD operations for resource `R` on one shop.
///
/// Each call is a single HTTP exchange: `count`, `list`, `get`, `create`,
/// `update` and `delete` map to GET/POST/PUT/DELETE on the resource's
/// collection or member path, with request and response bodies wrapped in
/// the resource's root element. Nothing is cached and nothing is retried.
///
/// ```rust,ignore
/// use shopify_services::rest::resources::{Redirect, RedirectFilter, RedirectService};
///
/// let redirects = RedirectService::from_credentials("my-store", "shpat_123")?;
///
/// let created = redirects
///     .create(&Redirect::new("/ipod", "/pages/itunes"))
///     .await?;
/// let count = redirects.count(None).await?;
/// ```
pub struct ResourceService<R: RestResource> {
    service: ShopifyService,
    _resource: PhantomData<fn() -> R>,
}

impl<R: RestResource> Clone for ResourceService<R> {
    fn clone(&self) -> Self {
        Self::new(self.service.clone())
    }
}

impl<R: RestResource> fmt::Debug for ResourceService<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceService")
            .field("resource", &R::NAME)
            .field("service", &self.service)
            .finish()
    }
}

impl<R: RestResource> ResourceService<R> {
    /// Creates a resource service over an existing connection.
    #[must_use]
    pub const fn new(service: ShopifyService) -> Self {
        Self {
            service,
            _resource: PhantomData,
        }
    }

    /// Creates a resource service from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Http`] if the HTTP client cannot be built.
    pub fn with_config(config: ShopifyConfig) -> Result<Self, ServiceError> {
        Ok(Self::new(ShopifyService::new(config)?))
    }

    /// Creates a resource service from a shop URL and access token.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Configuration`] if either value is invalid.
    pub fn from_credentials(shop: &str, access_token: &str) -> Result<Self, ServiceError> {
        Ok(Self::new(ShopifyService::from_credentials(shop, access_token)?))
    }

    /// Returns the underlying connection.
    #[must_use]
    pub const fn service(&self) -> &ShopifyService {
        &self.service
    }

    /// Counts the resources matching `filter`.
    ///
    /// # Errors
    ///
    /// See [`ShopifyService::execute`].
    pub async fn count(&self, filter: Option<&R::Filter>) -> Result<u64, ServiceError> {
        self.count_at(ResourcePath::new(R::BASE_PATH), filter).await
    }

    /// Lists the resources matching `filter`, in server order.
    ///
    /// Returns an empty vector when nothing matches.
    ///
    /// # Errors
    ///
    /// See [`ShopifyService::execute`].
    pub async fn list(&self, filter: Option<&R::Filter>) -> Result<Vec<R>, ServiceError> {
        self.list_at(ResourcePath::new(R::BASE_PATH), filter).await
    }

    /// Lists one page of resources along with its pagination cursors.
    ///
    /// # Errors
    ///
    /// See [`ShopifyService::execute`].
    pub async fn list_page(&self, filter: Option<&R::Filter>) -> Result<ListPage<R>, ServiceError> {
        self.list_page_at(ResourcePath::new(R::BASE_PATH), filter)
            .await
    }

    /// Fetches the resource with `id`.
    ///
    /// `fields` is a comma-separated list restricting the returned fields;
    /// `None` or an empty string returns every field.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] if no such resource exists, or any
    /// error of [`ShopifyService::execute`].
    pub async fn get(&self, id: u64, fields: Option<&str>) -> Result<R, ServiceError> {
        let path = ResourcePath::new(R::BASE_PATH).build(ResourceOperation::Find, Some(id))?;
        let fields = fields.filter(|f| !f.trim().is_empty());
        let request = self.build(ResourceOperation::Find, path, |b| match fields {
            Some(fields) => b.query_param("fields", fields),
            None => b,
        })?;

        self.service.execute(request, R::SINGULAR).await
    }

    /// Creates `entity` and returns it as persisted by the platform.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidArgument`] before any request if
    /// `entity` already carries an id, or any error of
    /// [`ShopifyService::execute`].
    pub async fn create(&self, entity: &R) -> Result<R, ServiceError> {
        self.create_at(ResourcePath::new(R::BASE_PATH), entity).await
    }

    /// Replaces the fields of the persisted resource with those of `entity`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidArgument`] before any request if
    /// `entity` has no id, or any error of [`ShopifyService::execute`].
    pub async fn update(&self, entity: &R) -> Result<R, ServiceError> {
        let path = ResourcePath::new(R::BASE_PATH).build(ResourceOperation::Update, entity.id())?;
        let body = envelope::wrap_root(R::SINGULAR, entity)?;
        let request = self.build(ResourceOperation::Update, path, |b| b.body(body))?;

        self.service.execute(request, R::SINGULAR).await
    }

    /// Deletes the resource with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] if no such resource exists, or any
    /// error of [`ShopifyService::execute_empty`].
    pub async fn delete(&self, id: u64) -> Result<(), ServiceError> {
        let path = ResourcePath::new(R::BASE_PATH).build(ResourceOperation::Delete, Some(id))?;
        let request = self.build(ResourceOperation::Delete, path, |b| b)?;

        self.service.execute_empty(request).await
    }

    async fn count_at(
        &self,
        path: ResourcePath<'_>,
        filter: Option<&R::Filter>,
    ) -> Result<u64, ServiceError> {
        let request = self.filtered(ResourceOperation::Count, path, filter)?;
        self.service.execute(request, "count").await
    }

    async fn list_at(
        &self,
        path: ResourcePath<'_>,
        filter: Option<&R::Filter>,
    ) -> Result<Vec<R>, ServiceError> {
        let request = self.filtered(ResourceOperation::All, path, filter)?;
        self.service.execute(request, R::PLURAL).await
    }

    async fn list_page_at(
        &self,
        path: ResourcePath<'_>,
        filter: Option<&R::Filter>,
    ) -> Result<ListPage<R>, ServiceError> {
        let request = self.filtered(ResourceOperation::All, path, filter)?;
        let (items, pagination) = self.service.execute_page(request, R::PLURAL).await?;
        Ok(ListPage::new(items, pagination))
    }

    async fn create_at(&self, path: ResourcePath<'_>, entity: &R) -> Result<R, ServiceError> {
        if let Some(id) = entity.id() {
            return Err(ServiceError::invalid_argument(
                "id",
                format!("a new {} must not carry an id (got {id})", R::NAME),
            ));
        }

        let path = path.build(ResourceOperation::Create, None)?;
        let body = envelope::wrap_root(R::SINGULAR, entity)?;
        let request = self.build(ResourceOperation::Create, path, |b| b.body(body))?;

        self.service.execute(request, R::SINGULAR).await
    }

    fn filtered(
        &self,
        operation: ResourceOperation,
        path: ResourcePath<'_>,
        filter: Option<&R::Filter>,
    ) -> Result<HttpRequest, ServiceError> {
        let path = path.build(operation, None)?;
        let parameters = filter.map(QueryFilter::to_parameters).transpose()?;

        self.build(operation, path, |b| match parameters {
            Some(parameters) => b.query_params(parameters),
            None => b,
        })
    }

    fn build(
        &self,
        operation: ResourceOperation,
        path: String,
        configure: impl FnOnce(HttpRequestBuilder) -> HttpRequestBuilder,
    ) -> Result<HttpRequest, ServiceError> {
        let builder = self.service.prepare_request(operation.http_method(), path);
        configure(builder)
            .build()
            .map_err(|e| ServiceError::Http(e.into()))
    }
}

impl<R: ScopedResource> ResourceService<R> {
    /// Counts the resources under `parent` matching `filter`.
    ///
    /// # Errors
    ///
    /// See [`ShopifyService::execute`].
    pub async fn count_in(
        &self,
        parent: &ParentResource,
        filter: Option<&R::Filter>,
    ) -> Result<u64, ServiceError> {
        self.count_at(ResourcePath::scoped(parent, R::BASE_PATH), filter)
            .await
    }

    /// Lists the resources under `parent` matching `filter`.
    ///
    /// # Errors
    ///
    /// See [`ShopifyService::execute`].
    pub async fn list_in(
        &self,
        parent: &ParentResource,
        filter: Option<&R::Filter>,
    ) -> Result<Vec<R>, ServiceError> {
        self.list_at(ResourcePath::scoped(parent, R::BASE_PATH), filter)
            .await
    }

    /// Lists one page of the resources under `parent`.
    ///
    /// # Errors
    ///
    /// See [`ShopifyService::execute`].
    pub async fn list_page_in(
        &self,
        parent: &ParentResource,
        filter: Option<&R::Filter>,
    ) -> Result<ListPage<R>, ServiceError> {
        self.list_page_at(ResourcePath::scoped(parent, R::BASE_PATH), filter)
            .await
    }

    /// Creates `entity` under `parent`.
    ///
    /// # Errors
    ///
    /// Same as [`create`](Self::create).
    pub async fn create_in(&self, parent: &ParentResource, entity: &R) -> Result<R, ServiceError> {
        self.create_at(ResourcePath::scoped(parent, R::BASE_PATH), entity)
            .await
    }
}
