//! Raw HTTP responses and the Shopify headers parsed from them.

use std::collections::HashMap;

/// Rate limit state from the `X-Shopify-Shop-Api-Call-Limit` header
/// (`"used/bucket"`).
///
/// ```rust
/// use shopify_services::clients::ApiCallLimit;
///
/// let limit = ApiCallLimit::parse("32/40").unwrap();
/// assert_eq!(limit.request_count, 32);
/// assert_eq!(limit.bucket_size, 40);
/// assert!(ApiCallLimit::parse("32").is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApiCallLimit {
    /// Requests currently counted against the bucket.
    pub request_count: u32,
    /// Bucket capacity.
    pub bucket_size: u32,
}

impl ApiCallLimit {
    /// Parses a `"used/bucket"` header value.
    #[must_use]
    pub fn parse(header_value: &str) -> Option<Self> {
        let (used, bucket) = header_value.trim().split_once('/')?;
        Some(Self {
            request_count: used.trim().parse().ok()?,
            bucket_size: bucket.trim().parse().ok()?,
        })
    }
}

/// Cursor pagination links from the `Link` header.
///
/// Shopify paginates list endpoints with opaque `page_info` cursors:
///
/// ```text
/// <https://shop.myshopify.com/admin/api/2025-10/redirects.json?limit=2&page_info=abc>; rel="next"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaginationInfo {
    /// Cursor of the previous page.
    pub prev_page_info: Option<String>,
    /// Cursor of the next page.
    pub next_page_info: Option<String>,
}

impl PaginationInfo {
    /// Parses a `Link` header value.
    ///
    /// ```rust
    /// use shopify_services::clients::PaginationInfo;
    ///
    /// let info = PaginationInfo::parse_link_header(
    ///     r#"<https://s.myshopify.com/admin/api/2025-10/redirects.json?page_info=p1>; rel="previous", <https://s.myshopify.com/admin/api/2025-10/redirects.json?page_info=n1>; rel="next""#,
    /// );
    /// assert_eq!(info.prev_page_info.as_deref(), Some("p1"));
    /// assert_eq!(info.next_page_info.as_deref(), Some("n1"));
    /// ```
    #[must_use]
    pub fn parse_link_header(header_value: &str) -> Self {
        let mut result = Self::default();

        for link in header_value.split(',') {
            let mut parts = link.split(';').map(str::trim);
            let Some(url) = parts
                .next()
                .map(|s| s.trim_start_matches('<').trim_end_matches('>'))
            else {
                continue;
            };
            let rel = parts.find_map(|part| {
                part.strip_prefix("rel=")
                    .map(|rel| rel.trim_matches('"'))
            });

            let page_info = Self::extract_page_info(url);
            match (rel, page_info) {
                (Some("previous"), Some(page_info)) => result.prev_page_info = Some(page_info),
                (Some("next"), Some(page_info)) => result.next_page_info = Some(page_info),
                _ => {}
            }
        }

        result
    }

    fn extract_page_info(url: &str) -> Option<String> {
        let (_, query) = url.split_once('?')?;
        query.split('&').find_map(|pair| {
            pair.split_once('=')
                .filter(|(key, _)| *key == "page_info")
                .map(|(_, value)| value.to_string())
        })
    }
}

/// A response received from the Admin API.
///
/// The body is kept as raw text; the service layer decides whether and how to
/// parse it. Header names are lowercased.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers; a name may map to several values.
    pub headers: HashMap<String, Vec<String>>,
    /// Raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a response, lowercasing header names.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: impl Into<String>) -> Self {
        let headers = headers
            .into_iter()
            .map(|(name, values)| (name.to_lowercase(), values))
            .collect();
        Self {
            code,
            headers,
            body: body.into(),
        }
    }

    /// Returns `true` for 2xx statuses.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of `name` (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the `X-Shopify-API-Deprecated-Reason` header.
    #[must_use]
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.header("x-shopify-api-deprecated-reason")
    }

    /// Returns the parsed rate limit header.
    #[must_use]
    pub fn api_call_limit(&self) -> Option<ApiCallLimit> {
        self.header("x-shopify-shop-api-call-limit")
            .and_then(ApiCallLimit::parse)
    }

    /// Returns the parsed `Link` header, or empty pagination if absent.
    #[must_use]
    pub fn pagination(&self) -> PaginationInfo {
        self.header("link")
            .map(PaginationInfo::parse_link_header)
            .unwrap_or_default()
    }
}
