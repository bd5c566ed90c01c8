//! Wire models of the login endpoint.

pub(crate) mod request;
pub(crate) mod response;
