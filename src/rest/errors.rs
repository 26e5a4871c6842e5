//! Error type for resource service operations.
//!
//! Every service call returns exactly one of these on failure; nothing is
//! retried or swallowed:
//!
//! - [`ServiceError::Configuration`]: shop or token missing/invalid
//! - [`ServiceError::InvalidArgument`]: caller input rejected before any request
//! - [`ServiceError::NotFound`]: the API answered 404
//! - [`ServiceError::Api`]: any other non-2xx answer
//! - [`ServiceError::MalformedResponse`]: the body lacked the expected root
//!   element or did not match the requested shape
//! - [`ServiceError::Http`]: the exchange itself failed
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_services::rest::ServiceError;
//!
//! match redirects.get(42, None).await {
//!     Ok(redirect) => println!("{:?} -> {:?}", redirect.path, redirect.target),
//!     Err(ServiceError::NotFound { path, .. }) => println!("nothing at {path}"),
//!     Err(ServiceError::Api { status, body, .. }) => println!("{status}: {body}"),
//!     Err(e) => println!("other error: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::{HttpError, HttpResponse};
use crate::error::ConfigError;

/// Failure of a resource service operation.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The service could not be configured.
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    /// Caller input was rejected before any network call.
    #[error("Invalid argument '{argument}': {reason}")]
    InvalidArgument {
        /// The offending argument.
        argument: &'static str,
        /// Why it was rejected.
        reason: String,
    },

    /// The API answered 404 Not Found.
    #[error("Resource not found at {path}")]
    NotFound {
        /// Request path relative to the API base.
        path: String,
        /// Raw response body.
        body: String,
        /// `X-Request-Id` of the failed response.
        request_id: Option<String>,
    },

    /// The API answered with a non-2xx status other than 404.
    #[error("Shopify API returned status {status} for {path}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Request path relative to the API base.
        path: String,
        /// Raw response body.
        body: String,
        /// `X-Request-Id` of the failed response.
        request_id: Option<String>,
    },

    /// The response body could not be unwrapped into the requested shape.
    #[error("Malformed response for root element '{root_element}': {reason}")]
    MalformedResponse {
        /// The root element that was expected.
        root_element: String,
        /// What went wrong.
        reason: String,
    },

    /// The HTTP exchange failed.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ServiceError {
    /// Classifies a non-2xx response.
    #[must_use]
    pub fn from_response(path: &str, response: &HttpResponse) -> Self {
        let path = path.to_string();
        let body = response.body.clone();
        let request_id = response.request_id().map(ToString::to_string);

        if response.code == 404 {
            Self::NotFound {
                path,
                body,
                request_id,
            }
        } else {
            Self::Api {
                status: response.code,
                path,
                body,
                request_id,
            }
        }
    }

    pub(crate) fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed(root_element: &str, reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            root_element: root_element.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns the HTTP status for API errors (404 for [`ServiceError::NotFound`]).
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` for [`ServiceError::NotFound`].
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns the raw response body for API errors.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::NotFound { body, .. } | Self::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Returns the `X-Request-Id` for API errors, if the platform sent one.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::NotFound { request_id, .. } | Self::Api { request_id, .. } => {
                request_id.as_deref()
            }
            _ => None,
        }
    }
}

// Verify ServiceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ServiceError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn response(code: u16, body: &str) -> HttpResponse {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["req-1".to_string()]);
        HttpResponse::new(code, headers, body)
    }

    #[test]
    fn test_404_maps_to_not_found() {
        let error = ServiceError::from_response("metafields/1.json", &response(404, "{}"));
        assert!(error.is_not_found());
        assert_eq!(error.status(), Some(404));
        assert_eq!(error.request_id(), Some("req-1"));
        assert!(error.to_string().contains("metafields/1.json"));
    }

    #[test]
    fn test_other_statuses_keep_raw_body() {
        let body = r#"{"errors":{"key":["can't be blank"]}}"#;
        let error = ServiceError::from_response("metafields.json", &response(422, body));

        assert!(matches!(error, ServiceError::Api { status: 422, .. }));
        assert_eq!(error.body(), Some(body));
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_local_errors_have_no_status() {
        let error = ServiceError::invalid_argument("id", "must be set");
        assert_eq!(error.status(), None);
        assert_eq!(error.to_string(), "Invalid argument 'id': must be set");

        let error = ServiceError::malformed("metafield", "root element missing");
        assert!(error.to_string().contains("'metafield'"));
        assert!(error.body().is_none());
    }

    #[test]
    fn test_config_error_converts() {
        let error: ServiceError = ConfigError::EmptyAccessToken.into();
        assert!(matches!(error, ServiceError::Configuration(_)));
    }
}
