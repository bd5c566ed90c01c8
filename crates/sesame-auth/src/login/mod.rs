//! Username/password login and the session state machine.

mod credentials;
mod login_error;
mod login_state;
mod session_controller;

pub use credentials::Credentials;
pub use login_error::LoginError;
pub use login_state::{LoginState, LoginView, Session};
pub use session_controller::{SessionController, SubmitOutcome};
