//! Authentication module
//!
//! Contains the token helpers used once a session has been established.

mod jwt_token;
pub use jwt_token::*;
