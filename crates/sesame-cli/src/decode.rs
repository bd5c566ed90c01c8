use clap::Args;
use serde_json::json;
use sesame_core::auth::{decode_claims, decode_header};

use crate::render::{CommandOutput, CommandResult};

#[derive(Args, Clone)]
pub struct DecodeArgs {
    #[arg(help = "Token to decode.")]
    pub token: String,
}

impl DecodeArgs {
    pub fn run(self) -> CommandResult {
        let header = decode_header(&self.token)?;
        let payload = decode_claims(&self.token)?;

        CommandOutput::object(&json!({ "header": header, "payload": payload }))
    }
}
