//! Error types for API operations.

use std::fmt;

use reqwest::{header::HeaderMap, Method, StatusCode};

/// Identifies a request that was handed to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// HTTP method of the request.
    pub method: Method,
    /// Fully resolved request URL.
    pub url: String,
}

impl fmt::Display for RequestDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.url)
    }
}

/// An error returned by the [`HttpClient`](crate::HttpClient).
///
/// Every failed call maps to exactly one variant.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Server returned a non-2xx HTTP response.
    #[error("API error {status}: {content}")]
    Response {
        /// HTTP status code of the response.
        status: StatusCode,
        /// Response headers.
        headers: HeaderMap,
        /// Raw response body content.
        content: String,
    },

    /// The request was sent but no response was received (DNS failure, timeout, connection
    /// refused or reset, etc.)
    #[error("no response received for {request}: {message}")]
    NoResponse {
        /// The request that went unanswered.
        request: RequestDescriptor,
        /// Transport error message.
        message: String,
    },

    /// The request could not be built or dispatched (invalid URL, body serialization, etc.)
    #[error("request setup failed: {0}")]
    RequestSetup(String),
}

impl ApiError {
    /// Status code of the response, if one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Response { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn from_dispatch(request: RequestDescriptor, e: reqwest_middleware::Error) -> Self {
        match e {
            reqwest_middleware::Error::Reqwest(e) if e.is_builder() => {
                ApiError::RequestSetup(e.to_string())
            }
            reqwest_middleware::Error::Reqwest(e) => ApiError::NoResponse {
                request,
                message: e.to_string(),
            },
            // Middleware runs before the transport, nothing reached the server.
            reqwest_middleware::Error::Middleware(e) => ApiError::RequestSetup(e.to_string()),
        }
    }
}
