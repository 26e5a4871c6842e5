//! Request descriptors.
//!
//! An [`HttpRequest`] is the unit handed from the service layer to the
//! transport: a method, a path relative to the versioned API base, an ordered
//! query-parameter list and an optional JSON body.

use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the Admin REST API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Read a resource, collection or count.
    Get,
    /// Create a resource.
    Post,
    /// Update a resource.
    Put,
    /// Delete a resource.
    Delete,
}

impl HttpMethod {
    /// Returns `true` for methods whose requests must carry a body.
    #[must_use]
    pub const fn requires_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        })
    }
}

/// A request to be sent through [`HttpClient`](crate::clients::HttpClient).
///
/// Query parameters are an ordered multimap: they are sent in insertion
/// order and a name may repeat.
///
/// ```rust
/// use shopify_services::clients::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "redirects.json")
///     .query_param("path", "/old")
///     .query_param("limit", "50")
///     .build()
///     .unwrap();
/// assert_eq!(request.query[0], ("path".to_string(), "/old".to_string()));
///
/// let create = HttpRequest::builder(HttpMethod::Post, "redirects.json")
///     .body(json!({"redirect": {"path": "/old", "target": "/new"}}))
///     .build()
///     .unwrap();
/// assert!(create.body.is_some());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The HTTP method.
    pub http_method: HttpMethod,
    /// Path relative to the versioned API base, e.g. `metafields/1.json`.
    pub path: String,
    /// Ordered query parameters.
    pub query: Vec<(String, String)>,
    /// JSON request body.
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    /// Starts building a request.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder {
            http_method: method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Checks that the body matches the method.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingBody`] for a POST/PUT without
    /// body and [`InvalidHttpRequestError::UnexpectedBody`] for a GET/DELETE
    /// with one.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        match (self.http_method.requires_body(), self.body.is_some()) {
            (true, false) => Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method,
            }),
            (false, true) => Err(InvalidHttpRequestError::UnexpectedBody {
                method: self.http_method,
            }),
            _ => Ok(()),
        }
    }
}

/// Builder for [`HttpRequest`].
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    query: Vec<(String, String)>,
    body: Option<serde_json::Value>,
}

impl HttpRequestBuilder {
    /// Appends one query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Appends every pair in `params`, keeping their order.
    #[must_use]
    pub fn query_params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Sets the JSON body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Finishes the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the body does not match the
    /// method.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            query: self.query,
            body: self.body,
        };
        request.verify()?;
        Ok(request)
    }
}
