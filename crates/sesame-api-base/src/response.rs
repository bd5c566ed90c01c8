use reqwest::{header::HeaderMap, StatusCode};
use serde::de::DeserializeOwned;

/// A successful (2xx) response.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body. JSON bodies are parsed, any other body is kept as a JSON string and an
    /// empty body is `null`.
    pub data: serde_json::Value,
}

impl ApiResponse {
    /// Deserialize the body into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.data)
    }

    pub(crate) fn parse_body(content: String) -> serde_json::Value {
        if content.trim().is_empty() {
            return serde_json::Value::Null;
        }
        serde_json::from_str(&content).unwrap_or(serde_json::Value::String(content))
    }
}
