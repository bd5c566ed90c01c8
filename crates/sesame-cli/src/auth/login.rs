use color_eyre::eyre::{bail, Result};
use sesame_auth::{
    login::{Credentials, SessionController, SubmitOutcome},
    AuthClientExt,
};
use sesame_core::{Client, FieldErrors, NON_FIELD_ERRORS};
use tracing::info;

use crate::prompt::{password_prompt_when_none, text_prompt_when_none};

pub(crate) async fn login_password(
    client: &Client,
    username: Option<String>,
    password: Option<String>,
) -> Result<SessionController> {
    let username = text_prompt_when_none("Username", username)?;
    let password = password_prompt_when_none("Password", password)?;

    let controller = client.auth().session_controller();

    match controller.submit(Credentials::new(username, password)).await {
        SubmitOutcome::Authorized => {
            info!("Logged in");
            Ok(controller)
        }
        SubmitOutcome::Failed(error) => {
            bail!("{}", describe_field_errors(&error.field_errors()))
        }
        SubmitOutcome::Ignored => bail!("A login is already in progress"),
    }
}

/// One line per message, whole-form errors first.
pub(crate) fn describe_field_errors(errors: &FieldErrors) -> String {
    let whole_form = errors.non_field_errors().unwrap_or_default().iter().cloned();
    let per_field = errors
        .iter()
        .filter(|(field, _)| *field != NON_FIELD_ERRORS)
        .flat_map(|(field, messages)| messages.iter().map(move |m| format!("{field}: {m}")));

    whole_form.chain(per_field).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_form_errors_come_first() {
        let mut errors = FieldErrors::new();
        errors.push("username", "This field may not be blank.");
        errors.push("password", "This field may not be blank.");
        errors.push(NON_FIELD_ERRORS, "Unable to log in with provided credentials.");

        assert_eq!(
            describe_field_errors(&errors),
            "Unable to log in with provided credentials.\n\
             password: This field may not be blank.\n\
             username: This field may not be blank."
        );
    }
}
