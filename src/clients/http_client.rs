//! HTTPS transport for the Admin API.

use std::collections::HashMap;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::ShopifyConfig;

/// Crate version, reported in the `User-Agent` header.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sends [`HttpRequest`]s to one shop.
///
/// The client owns the base URI, versioned base path and default headers
/// (`X-Shopify-Access-Token`, `User-Agent`, `Accept`) captured from a
/// [`ShopifyConfig`] at construction. It never retries and never interprets
/// status codes: every completed exchange is returned as an [`HttpResponse`].
///
/// `HttpClient` is `Send + Sync`; one instance can serve any number of
/// concurrent requests.
///
/// ```rust
/// use shopify_services::ShopifyConfig;
/// use shopify_services::clients::HttpClient;
///
/// let config = ShopifyConfig::from_credentials("my-store", "shpat_123").unwrap();
/// let client = HttpClient::new(&config).unwrap();
/// assert_eq!(client.url_for("redirects.json"), "https://my-store.myshopify.com/admin/api/2025-10/redirects.json");
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_uri: String,
    base_path: String,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a client for the shop described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the TLS backend cannot be
    /// initialized.
    pub fn new(config: &ShopifyConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Shopify REST Services v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "X-Shopify-Access-Token".to_string(),
            config.access_token().as_ref().to_string(),
        );
        if config.api_host().is_some() {
            default_headers.insert("Host".to_string(), config.shop().as_ref().to_string());
        }

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_uri: config.base_uri(),
            base_path: config.base_path(),
            default_headers,
        })
    }

    /// Returns the origin, e.g. `https://my-store.myshopify.com`.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the versioned base path, e.g. `/admin/api/2025-10`.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the headers attached to every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the absolute URL for a relative resource path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}{}/{}",
            self.base_uri,
            self.base_path,
            path.trim_start_matches('/')
        )
    }

    /// Sends `request` and returns the response, whatever its status.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if the request fails
    /// validation, or [`HttpError::Network`] if the exchange does not
    /// complete.
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request.path);
        let mut builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            builder = builder.header(key, value);
        }
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            query_params = request.query.len(),
            "Sending Shopify API request"
        );

        let res = builder.send().await?;
        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        let response = HttpResponse::new(code, headers, body);

        if let Some(reason) = response.deprecation_reason() {
            tracing::warn!(
                "Deprecated request to Shopify API at {}, received reason: {}",
                request.path,
                reason
            );
        }

        tracing::debug!(
            status = code,
            path = %request.path,
            call_limit = ?response.api_call_limit(),
            "Received Shopify API response"
        );

        Ok(response)
    }

    fn parse_response_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let value = value.to_str().unwrap_or_default().to_string();
            result
                .entry(name.as_str().to_lowercase())
                .or_default()
                .push(value);
        }
        result
    }
}
