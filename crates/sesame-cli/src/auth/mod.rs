use clap::Args;
use serde_json::json;
use sesame_core::Client;

use crate::render::{CommandOutput, CommandResult};

mod login;

pub(crate) use login::{describe_field_errors, login_password};

#[derive(Args, Clone)]
pub struct LoginArgs {
    #[arg(short = 'u', long, help = "Username")]
    pub username: Option<String>,

    #[arg(short = 'p', long, help = "Password. Prompted for when missing.")]
    pub password: Option<String>,

    #[arg(long, help = "Print the decoded claims of the session token.")]
    pub claims: bool,
}

impl LoginArgs {
    pub async fn run(self, client: Client) -> CommandResult {
        let controller = login_password(&client, self.username, self.password).await?;

        if !self.claims {
            return Ok("Successfully logged in!".into());
        }

        let header = controller.decode_header()?;
        let payload = controller.decode_claims()?;

        CommandOutput::object(&json!({ "header": header, "payload": payload }))
    }
}
