use serde::Serialize;
use sesame_core::FieldErrors;

/// State of a [`SessionController`](super::SessionController).
#[derive(Clone, Default, PartialEq, Eq)]
pub enum LoginState {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// A login call is in flight.
    Submitting,
    /// The last login succeeded. There is no way out of this state.
    Authorized {
        /// Token returned by the login, as stored when it succeeded.
        token: String,
    },
    /// The last login failed.
    Unauthenticated {
        /// Errors of the last attempt.
        field_errors: FieldErrors,
    },
}

impl std::fmt::Debug for LoginState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginState::Idle => write!(f, "Idle"),
            LoginState::Submitting => write!(f, "Submitting"),
            LoginState::Authorized { .. } => f
                .debug_struct("Authorized")
                .field("token", &"********")
                .finish(),
            LoginState::Unauthenticated { field_errors } => f
                .debug_struct("Unauthenticated")
                .field("field_errors", field_errors)
                .finish(),
        }
    }
}

impl LoginState {
    #[allow(missing_docs)]
    pub fn is_loading(&self) -> bool {
        matches!(self, LoginState::Submitting)
    }

    #[allow(missing_docs)]
    pub fn is_authorized(&self) -> bool {
        matches!(self, LoginState::Authorized { .. })
    }

    /// The session this state stands for. The token is only present once authorized.
    pub fn session(&self) -> Session {
        match self {
            LoginState::Authorized { token } => Session {
                token: Some(token.clone()),
                is_authorized: true,
            },
            _ => Session::default(),
        }
    }

    /// Errors of the last failed attempt, empty otherwise.
    pub fn field_errors(&self) -> FieldErrors {
        match self {
            LoginState::Unauthenticated { field_errors } => field_errors.clone(),
            _ => FieldErrors::default(),
        }
    }
}

/// What a login form renders.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginView {
    #[allow(missing_docs)]
    pub is_loading: bool,
    #[allow(missing_docs)]
    pub is_authorized: bool,
    #[allow(missing_docs)]
    pub field_errors: FieldErrors,
}

impl From<&LoginState> for LoginView {
    fn from(state: &LoginState) -> Self {
        Self {
            is_loading: state.is_loading(),
            is_authorized: state.is_authorized(),
            field_errors: state.field_errors(),
        }
    }
}

/// The session established by a successful login.
///
/// `token` is only ever present together with `is_authorized`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Session {
    #[allow(missing_docs)]
    pub token: Option<String>,
    #[allow(missing_docs)]
    pub is_authorized: bool,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &self.token.as_ref().map(|_| "********"))
            .field("is_authorized", &self.is_authorized)
            .finish()
    }
}
