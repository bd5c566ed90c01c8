use sesame_core::{
    auth::{decode_claims, decode_header, Claims, MalformedTokenError},
    normalize, require, Client, FieldErrors,
};
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

use super::{Credentials, LoginError, LoginState, LoginView, Session};
use crate::api::{request::LoginApiRequest, response::LoginSuccessApiResponse};

const LOGIN_PATH: &str = "/login";

/// Result of [`SessionController::submit`].
#[derive(Debug)]
pub enum SubmitOutcome {
    /// A login was already in flight, or the controller is already authorized. Nothing was sent.
    Ignored,
    /// The login succeeded and the token is now sent with every request.
    Authorized,
    /// The login failed. The controller is now [`LoginState::Unauthenticated`].
    Failed(LoginError),
}

/// Drives a username/password login and tracks the resulting session.
///
/// At most one login call is in flight per controller. The token of a successful login is stored
/// in the [`Client`]'s session token store, which also makes every later request through the
/// client's HTTP client carry `Authorization: Bearer <token>`. The controller keeps its own copy
/// of that token in [`LoginState::Authorized`], so its session is not affected by later writes to
/// the shared store.
pub struct SessionController {
    client: Client,
    state: watch::Sender<LoginState>,
}

impl std::fmt::Debug for SessionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionController")
            .field("state", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}

/// Puts back the state a submit started from if the submit is dropped before it finishes.
struct SubmitGuard<'a> {
    state: &'a watch::Sender<LoginState>,
    previous: Option<LoginState>,
}

impl SubmitGuard<'_> {
    fn finish(mut self, state: LoginState) {
        self.previous = None;
        self.state.send_replace(state);
    }
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            debug!("Login submit dropped before completion");
            self.state.send_replace(previous);
        }
    }
}

impl SessionController {
    /// Create an idle controller for `client`.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            state: watch::Sender::new(LoginState::Idle),
        }
    }

    /// Submit `credentials` to the login endpoint.
    ///
    /// Returns [`SubmitOutcome::Ignored`] without sending anything while another submit is in
    /// flight. A failure never changes the session token store. Dropping the returned future
    /// before it completes puts the controller back in the state it was in before the call.
    #[instrument(skip_all)]
    pub async fn submit(&self, credentials: Credentials) -> SubmitOutcome {
        let mut previous = None;
        self.state.send_if_modified(|state| match state {
            LoginState::Idle | LoginState::Unauthenticated { .. } => {
                previous = Some(std::mem::replace(state, LoginState::Submitting));
                true
            }
            LoginState::Submitting | LoginState::Authorized { .. } => false,
        });
        let Some(previous) = previous else {
            let state = self.state();
            debug!(?state, "Ignoring login submit");
            return SubmitOutcome::Ignored;
        };
        let guard = SubmitGuard {
            state: &self.state,
            previous: Some(previous),
        };

        match self.login(&credentials).await {
            Ok(token) => {
                info!("Login succeeded");
                guard.finish(LoginState::Authorized { token });
                SubmitOutcome::Authorized
            }
            Err(error) => {
                warn!(%error, "Login failed");
                guard.finish(LoginState::Unauthenticated {
                    field_errors: error.field_errors(),
                });
                SubmitOutcome::Failed(error)
            }
        }
    }

    async fn login(&self, credentials: &Credentials) -> Result<String, LoginError> {
        let response = self
            .client
            .http_client()
            .post(LOGIN_PATH, &LoginApiRequest::from(credentials))
            .await
            .map_err(normalize)?;

        let response: LoginSuccessApiResponse = response.json().unwrap_or_else(|e| {
            warn!("Login response body is not an object with a string token: {e}");
            LoginSuccessApiResponse::default()
        });
        let token = require!(response.token);

        self.client.tokens().set(token.clone())?;
        Ok(token)
    }

    /// Current state.
    pub fn state(&self) -> LoginState {
        self.state.borrow().clone()
    }

    /// Current state, in the shape a login form renders.
    pub fn view(&self) -> LoginView {
        LoginView::from(&*self.state.borrow())
    }

    /// Whether a login call is in flight.
    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    /// Whether a login through this controller succeeded.
    pub fn is_authorized(&self) -> bool {
        self.state.borrow().is_authorized()
    }

    /// Errors of the last failed attempt. Empty unless the state is
    /// [`LoginState::Unauthenticated`].
    pub fn field_errors(&self) -> FieldErrors {
        self.state.borrow().field_errors()
    }

    /// The session established by this controller.
    pub fn session(&self) -> Session {
        self.state.borrow().session()
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<LoginState> {
        self.state.subscribe()
    }

    /// Payload claims of the session token, `None` until authorized.
    ///
    /// The token is decoded on every call and never verified.
    pub fn decode_claims(&self) -> Result<Option<Claims>, MalformedTokenError> {
        self.session()
            .token
            .map(|token| decode_claims(&token))
            .transpose()
    }

    /// Header claims of the session token, `None` until authorized.
    pub fn decode_header(&self) -> Result<Option<Claims>, MalformedTokenError> {
        self.session()
            .token
            .map(|token| decode_header(&token))
            .transpose()
    }
}
