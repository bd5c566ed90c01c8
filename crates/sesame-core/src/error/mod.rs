//! Errors that can occur when using this SDK

use thiserror::Error;

mod field_errors;
mod normalizer;

pub use field_errors::{FieldErrors, NON_FIELD_ERRORS};
pub use normalizer::{normalize, NormalizedError};

/// Missing required field.
#[derive(Debug, Error)]
#[error("The response received was missing a required field: {0}")]
pub struct MissingFieldError(pub &'static str);

/// The token cannot be sent as an HTTP header value.
#[derive(Debug, Error)]
#[error("The token received is not a valid header value")]
pub struct InvalidTokenError(#[from] pub reqwest::header::InvalidHeaderValue);

/// This macro is used to require that a value is present or return an error otherwise.
/// It is equivalent to using `val.ok_or(Error::MissingFields)?`, but easier to use and
/// with a more descriptive error message.
/// Note that this macro will return early from the function if the value is not present.
#[macro_export]
macro_rules! require {
    ($val:expr) => {
        match $val {
            Some(val) => val,
            None => return Err($crate::MissingFieldError(stringify!($val)).into()),
        }
    };
}
