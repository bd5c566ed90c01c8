use sesame_core::Client;

use crate::login::SessionController;

/// Subclient containing auth functionality.
#[derive(Clone)]
pub struct AuthClient {
    pub(crate) client: Client,
}

impl AuthClient {
    /// Constructs a new `AuthClient` with the given `Client`.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// A login state machine sharing this client's HTTP client and session token store.
    ///
    /// Every call returns an independent controller starting in
    /// [`LoginState::Idle`](crate::login::LoginState::Idle).
    pub fn session_controller(&self) -> SessionController {
        SessionController::new(self.client.clone())
    }
}

/// Extension trait for `Client` to provide access to the `AuthClient`.
pub trait AuthClientExt {
    /// Creates a new `AuthClient` instance.
    fn auth(&self) -> AuthClient;
}

impl AuthClientExt for Client {
    fn auth(&self) -> AuthClient {
        AuthClient {
            client: self.clone(),
        }
    }
}
