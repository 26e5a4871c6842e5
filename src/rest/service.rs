//! Request builder and executor shared by every resource service.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::clients::{HttpClient, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse, PaginationInfo};
use crate::config::ShopifyConfig;
use crate::rest::{envelope, ServiceError};

/// Connection to one shop's Admin REST API.
///
/// `ShopifyService` prepares requests against the shop's versioned base URL
/// and executes them, unwrapping the root element of successful responses
/// and classifying failures into [`ServiceError`]s. It holds no per-call
/// state: clones share one [`HttpClient`] and may be used from many tasks at
/// once.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_services::rest::ShopifyService;
/// use shopify_services::clients::HttpMethod;
///
/// let service = ShopifyService::from_credentials("my-store", "shpat_123")?;
///
/// let request = service
///     .prepare_request(HttpMethod::Get, "redirects/count.json")
///     .query_param("path", "/old")
///     .build()?;
/// let count: u64 = service.execute(request, "count").await?;
/// ```
#[derive(Clone, Debug)]
pub struct ShopifyService {
    config: Arc<ShopifyConfig>,
    client: Arc<HttpClient>,
}

// Verify ShopifyService is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShopifyService>();
};

impl ShopifyService {
    /// Creates a service for the shop described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Http`] if the HTTP client cannot be built.
    pub fn new(config: ShopifyConfig) -> Result<Self, ServiceError> {
        let client = HttpClient::new(&config)?;
        Ok(Self {
            config: Arc::new(config),
            client: Arc::new(client),
        })
    }

    /// Creates a service from a shop URL (or bare name) and access token.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Configuration`] if either value is invalid.
    ///
    /// ```rust
    /// use shopify_services::rest::{ServiceError, ShopifyService};
    ///
    /// let service = ShopifyService::from_credentials("https://my-store.myshopify.com", "shpat_123").unwrap();
    /// assert_eq!(service.config().shop().as_ref(), "my-store.myshopify.com");
    ///
    /// let result = ShopifyService::from_credentials("my-store", "");
    /// assert!(matches!(result, Err(ServiceError::Configuration(_))));
    /// ```
    pub fn from_credentials(shop: &str, access_token: &str) -> Result<Self, ServiceError> {
        Self::new(ShopifyConfig::from_credentials(shop, access_token)?)
    }

    /// Returns the configuration this service was built from.
    #[must_use]
    pub fn config(&self) -> &ShopifyConfig {
        &self.config
    }

    /// Returns the absolute URL a relative path resolves to.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        self.client.url_for(path)
    }

    /// Starts a request for `path` relative to the versioned API base.
    ///
    /// The query list starts empty. Base URL and authentication are applied
    /// by the service's client when the request is executed.
    #[must_use]
    pub fn prepare_request(&self, method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequest::builder(method, path)
    }

    /// Sends `request` and deserializes the value under `root_element`.
    ///
    /// # Errors
    ///
    /// - [`ServiceError::NotFound`] / [`ServiceError::Api`] for non-2xx statuses
    /// - [`ServiceError::MalformedResponse`] if the body lacks `root_element`
    ///   or does not fit `T`
    /// - [`ServiceError::Http`] if the exchange fails
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: HttpRequest,
        root_element: &str,
    ) -> Result<T, ServiceError> {
        let response = self.send(request).await?;
        envelope::unwrap_root(&response.body, root_element)
    }

    /// Like [`execute`](Self::execute), also returning the `Link` header
    /// cursors.
    ///
    /// # Errors
    ///
    /// Same as [`execute`](Self::execute).
    pub async fn execute_page<T: DeserializeOwned>(
        &self,
        request: HttpRequest,
        root_element: &str,
    ) -> Result<(T, PaginationInfo), ServiceError> {
        let response = self.send(request).await?;
        let value = envelope::unwrap_root(&response.body, root_element)?;
        Ok((value, response.pagination()))
    }

    /// Sends `request` and discards the response body.
    ///
    /// # Errors
    ///
    /// Same as [`execute`](Self::execute), minus body parsing.
    pub async fn execute_empty(&self, request: HttpRequest) -> Result<(), ServiceError> {
        self.send(request).await.map(|_| ())
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ServiceError> {
        let method = request.http_method;
        let path = request.path.clone();
        let response = self.client.request(request).await?;

        if response.is_ok() {
            return Ok(response);
        }

        tracing::warn!(
            method = %method,
            path = %path,
            status = response.code,
            request_id = response.request_id().unwrap_or_default(),
            "Shopify API request failed"
        );
        Err(ServiceError::from_response(&path, &response))
    }
}
