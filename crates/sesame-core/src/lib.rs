#![doc = include_str!("../README.md")]

pub mod auth;
pub mod client;
mod error;
pub use error::{
    normalize, FieldErrors, InvalidTokenError, MissingFieldError, NormalizedError,
    NON_FIELD_ERRORS,
};

pub use client::{Client, ClientSettings, InvalidSettingError, SessionTokenStore};
pub use sesame_api_base::{ApiError, ApiResponse, HttpClient, RequestDescriptor};
