#![doc = include_str!("../README.md")]

mod error;
mod http_client;
mod response;

pub use error::{ApiError, RequestDescriptor};
pub use http_client::HttpClient;
pub use response::ApiResponse;
