//! Transport error types.
//!
//! The transport only fails for two reasons: the request was malformed before
//! it left the process, or the exchange itself failed (DNS, TLS, connection
//! reset, body read). Non-2xx statuses are *not* transport errors; they are
//! returned as [`HttpResponse`](crate::clients::HttpResponse) values and
//! classified by the service layer.

use thiserror::Error;

use crate::clients::HttpMethod;

/// A request that failed local validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// POST and PUT must carry a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The offending method.
        method: HttpMethod,
    },

    /// GET and DELETE must not carry a body.
    #[error("Cannot send a body with {method}.")]
    UnexpectedBody {
        /// The offending method.
        method: HttpMethod,
    },
}

/// Unified transport error.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
