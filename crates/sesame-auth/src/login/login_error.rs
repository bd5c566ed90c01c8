use sesame_core::{FieldErrors, InvalidTokenError, MissingFieldError, NormalizedError};
use thiserror::Error;

/// Errors that can occur when attempting to log in.
#[derive(Debug, Error)]
pub enum LoginError {
    /// The login call failed.
    #[error(transparent)]
    Api(#[from] NormalizedError),

    /// The server accepted the credentials but did not return a token.
    #[error(transparent)]
    MissingField(#[from] MissingFieldError),

    /// The returned token cannot be sent back to the server.
    #[error(transparent)]
    InvalidToken(#[from] InvalidTokenError),
}

impl LoginError {
    /// Field errors to show for this failure. Anything the server did not attribute to a field
    /// becomes a single whole-form error.
    pub fn field_errors(&self) -> FieldErrors {
        match self {
            LoginError::Api(NormalizedError::FieldErrorResponse { errors, .. }) => errors.clone(),
            other => FieldErrors::whole_form(other.to_string()),
        }
    }

    /// Consuming variant of [`LoginError::field_errors`].
    pub fn into_field_errors(self) -> FieldErrors {
        match self {
            LoginError::Api(error) => error.into_field_errors(),
            other => FieldErrors::whole_form(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use reqwest::{header::HeaderMap, StatusCode};
    use sesame_core::NON_FIELD_ERRORS;

    use super::*;

    #[test]
    fn field_error_response_keeps_server_map() {
        let mut errors = FieldErrors::new();
        errors.push("password", "This field may not be blank.");
        let error = LoginError::Api(NormalizedError::FieldErrorResponse {
            status: StatusCode::BAD_REQUEST,
            headers: HeaderMap::new(),
            errors: errors.clone(),
        });

        assert_eq!(error.field_errors(), errors);
        assert_eq!(error.into_field_errors(), errors);
    }

    #[test]
    fn other_errors_become_whole_form() {
        let error = LoginError::MissingField(MissingFieldError("response.token"));

        let errors = error.field_errors();

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(NON_FIELD_ERRORS).unwrap(),
            ["The response received was missing a required field: response.token".to_string()]
        );
    }

    #[test]
    fn request_setup_message_is_used_verbatim() {
        let error = LoginError::Api(NormalizedError::RequestSetup {
            message: "builder error".to_string(),
        });

        assert_eq!(
            error.into_field_errors().non_field_errors().unwrap(),
            ["builder error".to_string()]
        );
    }
}
