#![doc = include_str!("../README.md")]

mod api;
mod jwt;

pub use api::start_api_mock;
pub use jwt::{make_jwt, make_jwt_with_claims};
