use std::sync::{Arc, RwLock};

use sesame_api_base::HttpClient;
use tracing::debug;

use crate::InvalidTokenError;

/// Holds the token of the current session and mirrors it into the `Authorization` header of the
/// shared [`HttpClient`].
///
/// The stored token and the header are always updated under the same write lock, so a reader of
/// [`SessionTokenStore::get`] never observes a token that is not also the one being sent.
pub struct SessionTokenStore {
    token: RwLock<Option<String>>,
    http: Arc<HttpClient>,
}

impl std::fmt::Debug for SessionTokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionTokenStore")
            .field("is_set", &self.is_set())
            .finish_non_exhaustive()
    }
}

impl SessionTokenStore {
    /// Create an empty store bound to `http`.
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self {
            token: RwLock::new(None),
            http,
        }
    }

    /// Store `token` and send it as `Authorization: Bearer <token>` from now on.
    ///
    /// On error neither the stored token nor the header changes.
    pub fn set(&self, token: impl Into<String>) -> Result<(), InvalidTokenError> {
        let token = token.into();
        let mut guard = self.token.write().expect("RwLock is not poisoned");

        self.http.set_authorization_token(&token)?;
        *guard = Some(token);

        debug!("Session token updated");
        Ok(())
    }

    /// The current token, if any.
    pub fn get(&self) -> Option<String> {
        self.token.read().expect("RwLock is not poisoned").clone()
    }

    /// Whether a token is currently stored.
    pub fn is_set(&self) -> bool {
        self.token.read().expect("RwLock is not poisoned").is_some()
    }

    /// Forget the token and stop sending the `Authorization` header.
    pub fn clear(&self) {
        let mut guard = self.token.write().expect("RwLock is not poisoned");

        self.http.clear_authorization_token();
        *guard = None;

        debug!("Session token cleared");
    }
}
