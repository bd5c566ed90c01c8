//! Shared HTTP transport with mutable default headers.

use std::sync::RwLock;

use reqwest::{
    header::{self, HeaderMap, HeaderName, HeaderValue, InvalidHeaderValue},
    Method,
};
use reqwest_middleware::ClientWithMiddleware;
use serde::Serialize;
use tracing::debug;

use crate::{ApiError, ApiResponse, RequestDescriptor};

/// HTTP client bound to a base URL.
///
/// The default headers are applied to every request made through this instance. They are read
/// when a request is built, so changing them never affects a request that is already in flight.
/// Calls are never retried.
pub struct HttpClient {
    base_path: String,
    client: ClientWithMiddleware,
    default_headers: RwLock<HeaderMap>,
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_path", &self.base_path)
            .field("default_headers", &self.default_headers)
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Create a client for `base_path` on top of a plain reqwest client.
    pub fn new(base_path: impl Into<String>, client: reqwest::Client) -> Self {
        Self::with_client(base_path, reqwest_middleware::ClientBuilder::new(client).build())
    }

    /// Create a client for `base_path` on top of a middleware-enabled client.
    pub fn with_client(base_path: impl Into<String>, client: ClientWithMiddleware) -> Self {
        Self {
            base_path: base_path.into(),
            client,
            default_headers: RwLock::new(HeaderMap::new()),
        }
    }

    /// Base URL every request path is appended to.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Snapshot of the current default headers.
    pub fn default_headers(&self) -> HeaderMap {
        self.default_headers
            .read()
            .expect("RwLock is not poisoned")
            .clone()
    }

    /// Insert or replace a default header.
    pub fn set_default_header(&self, name: HeaderName, value: HeaderValue) {
        self.default_headers
            .write()
            .expect("RwLock is not poisoned")
            .insert(name, value);
    }

    /// Remove a default header, if present.
    pub fn remove_default_header(&self, name: &HeaderName) {
        self.default_headers
            .write()
            .expect("RwLock is not poisoned")
            .remove(name);
    }

    /// Replace the `Authorization` default header with `Bearer <token>`.
    ///
    /// Fails without touching the headers when the token is not a valid header value.
    pub fn set_authorization_token(&self, token: &str) -> Result<(), InvalidHeaderValue> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token))?;
        value.set_sensitive(true);
        self.set_default_header(header::AUTHORIZATION, value);
        Ok(())
    }

    /// Remove the `Authorization` default header.
    pub fn clear_authorization_token(&self) {
        self.remove_default_header(&header::AUTHORIZATION);
    }

    /// Current `Authorization` default header, if any.
    pub fn authorization_header(&self) -> Option<HeaderValue> {
        self.default_headers
            .read()
            .expect("RwLock is not poisoned")
            .get(header::AUTHORIZATION)
            .cloned()
    }

    /// Issue a `GET` request.
    pub async fn get(&self, path: &str) -> Result<ApiResponse, ApiError> {
        self.send::<()>(Method::GET, path, None).await
    }

    /// Issue a `DELETE` request.
    pub async fn delete(&self, path: &str) -> Result<ApiResponse, ApiError> {
        self.send::<()>(Method::DELETE, path, None).await
    }

    /// Issue a `POST` request with a JSON body.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse, ApiError> {
        self.send(Method::POST, path, Some(body)).await
    }

    /// Issue a `PUT` request with a JSON body.
    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse, ApiError> {
        self.send(Method::PUT, path, Some(body)).await
    }

    fn url(&self, path: &str) -> String {
        let base = self.base_path.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiResponse, ApiError> {
        let descriptor = RequestDescriptor {
            method: method.clone(),
            url: self.url(path),
        };

        let mut builder = self
            .client
            .request(method, &descriptor.url)
            .headers(self.default_headers());
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let request = builder
            .build()
            .map_err(|e| ApiError::RequestSetup(e.to_string()))?;

        debug!(method = %descriptor.method, url = %descriptor.url, "Sending request");

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ApiError::from_dispatch(descriptor.clone(), e))?;

        let status = response.status();
        let headers = response.headers().clone();
        debug!(%status, url = %descriptor.url, "Received response");

        // A body that cannot be read leaves us without a usable response.
        let content = response
            .text()
            .await
            .map_err(|e| ApiError::NoResponse {
                request: descriptor,
                message: e.to_string(),
            })?;

        if status.is_success() {
            Ok(ApiResponse {
                status,
                headers,
                data: ApiResponse::parse_body(content),
            })
        } else {
            Err(ApiError::Response {
                status,
                headers,
                content,
            })
        }
    }
}
