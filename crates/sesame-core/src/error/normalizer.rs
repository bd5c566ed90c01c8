use reqwest::{header::HeaderMap, StatusCode};
use sesame_api_base::{ApiError, RequestDescriptor};
use thiserror::Error;
use tracing::{debug, warn};

use super::FieldErrors;

/// A failed API call, classified for presentation.
#[derive(Debug, Error)]
pub enum NormalizedError {
    /// The server answered with a non-2xx status and a field error body.
    #[error("The server rejected the request [{status}]")]
    FieldErrorResponse {
        #[allow(missing_docs)]
        status: StatusCode,
        #[allow(missing_docs)]
        headers: HeaderMap,
        /// Field errors, exactly as sent by the server.
        errors: FieldErrors,
    },

    /// The request was sent but the server never answered.
    #[error("No response received from the server, please try again")]
    NoResponse {
        /// The unanswered request.
        request: RequestDescriptor,
    },

    /// The request could not be sent, or the answer could not be understood.
    #[error("{message}")]
    RequestSetup {
        #[allow(missing_docs)]
        message: String,
    },
}

impl NormalizedError {
    /// Message to show when the error is not attributable to a field.
    pub fn whole_form_message(&self) -> String {
        self.to_string()
    }

    /// Field errors for this failure. Anything but a field error response becomes a single
    /// whole-form error.
    pub fn into_field_errors(self) -> FieldErrors {
        match self {
            NormalizedError::FieldErrorResponse { errors, .. } => errors,
            other => FieldErrors::whole_form(other.whole_form_message()),
        }
    }
}

impl From<ApiError> for NormalizedError {
    fn from(error: ApiError) -> Self {
        normalize(error)
    }
}

/// Classify a failed call.
///
/// Error bodies that are not a field error mapping are reported as
/// [`NormalizedError::RequestSetup`].
pub fn normalize(error: ApiError) -> NormalizedError {
    debug!(%error, "Normalizing API error");

    match error {
        ApiError::Response {
            status,
            headers,
            content,
        } => match serde_json::from_str::<FieldErrors>(&content) {
            Ok(errors) => NormalizedError::FieldErrorResponse {
                status,
                headers,
                errors,
            },
            Err(e) => {
                warn!(%status, "Error response body is not a field error mapping: {e}");
                NormalizedError::RequestSetup {
                    message: format!("Unexpected response from server [{}]", status),
                }
            }
        },
        ApiError::NoResponse { request, .. } => NormalizedError::NoResponse { request },
        ApiError::RequestSetup(message) => NormalizedError::RequestSetup { message },
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Method;

    use super::*;

    fn response(status: StatusCode, content: &str) -> ApiError {
        ApiError::Response {
            status,
            headers: HeaderMap::new(),
            content: content.to_string(),
        }
    }

    #[test]
    fn field_error_body_keeps_server_map() {
        let normalized = normalize(response(
            StatusCode::BAD_REQUEST,
            r#"{"username":["required"]}"#,
        ));

        match normalized {
            NormalizedError::FieldErrorResponse { status, errors, .. } => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(errors.get("username").unwrap(), ["required".to_string()]);
            }
            other => panic!("Expected FieldErrorResponse, got {:?}", other),
        }
    }

    #[test]
    fn unparseable_body_is_request_setup() {
        let normalized = normalize(response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "<h1>Server Error</h1>",
        ));

        match normalized {
            NormalizedError::RequestSetup { message } => {
                assert_eq!(
                    message,
                    "Unexpected response from server [500 Internal Server Error]"
                );
            }
            other => panic!("Expected RequestSetup, got {:?}", other),
        }
    }

    #[test]
    fn no_response_keeps_request() {
        let request = RequestDescriptor {
            method: Method::POST,
            url: "http://localhost:8000/api/login".to_string(),
        };

        let normalized = normalize(ApiError::NoResponse {
            request: request.clone(),
            message: "operation timed out".to_string(),
        });

        match normalized {
            NormalizedError::NoResponse { request: r } => assert_eq!(r, request),
            other => panic!("Expected NoResponse, got {:?}", other),
        }
    }

    #[test]
    fn request_setup_keeps_message() {
        let normalized: NormalizedError =
            ApiError::RequestSetup("builder error: relative URL without a base".to_string())
                .into();

        assert_eq!(
            normalized.whole_form_message(),
            "builder error: relative URL without a base"
        );
    }

    #[test]
    fn into_field_errors_for_each_outcome() {
        let field = normalize(response(
            StatusCode::BAD_REQUEST,
            r#"{"password":["too short"]}"#,
        ))
        .into_field_errors();
        assert_eq!(field.get("password").unwrap(), ["too short".to_string()]);
        assert!(field.non_field_errors().is_none());

        let no_response = NormalizedError::NoResponse {
            request: RequestDescriptor {
                method: Method::GET,
                url: "http://localhost/users".to_string(),
            },
        }
        .into_field_errors();
        assert_eq!(
            no_response.non_field_errors().unwrap(),
            ["No response received from the server, please try again".to_string()]
        );
        assert_eq!(no_response.len(), 1);
    }
}
