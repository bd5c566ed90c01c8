//! Sesame Client

#[allow(clippy::module_inception)]
mod client;
#[allow(missing_docs)]
pub mod client_settings;
#[allow(missing_docs)]
pub mod internal;
mod session_token_store;

pub use client::Client;
pub use client_settings::{ClientSettings, InvalidSettingError};
pub use session_token_store::SessionTokenStore;
