use clap::{Args, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};
use serde_json::{json, Value};
use sesame_core::{normalize, ApiResponse, Client, NormalizedError};
use tracing::{error, warn};

use crate::{
    auth::{describe_field_errors, login_password},
    render::{CommandOutput, CommandResult},
};

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Args, Clone)]
pub struct RequestArgs {
    #[arg(value_enum)]
    pub method: Method,

    #[arg(help = "Path relative to the server URL, e.g. /users")]
    pub path: String,

    #[arg(short = 'd', long, help = "JSON request body for post and put.")]
    pub data: Option<String>,

    #[arg(short = 'u', long, help = "Log in as this user before sending the request.")]
    pub username: Option<String>,

    #[arg(short = 'p', long, help = "Password. Prompted for when missing.")]
    pub password: Option<String>,
}

impl RequestArgs {
    pub async fn run(self, client: Client) -> CommandResult {
        if self.username.is_some() {
            login_password(&client, self.username, self.password).await?;
        }

        let body = parse_body(self.data.as_deref())?;
        let http = client.http_client();
        let result = match self.method {
            Method::Get => http.get(&self.path).await,
            Method::Delete => http.delete(&self.path).await,
            Method::Post => http.post(&self.path, &body).await,
            Method::Put => http.put(&self.path, &body).await,
        };

        match result {
            Ok(response) => render_response(&response),
            Err(e) => Err(report(normalize(e))),
        }
    }
}

fn parse_body(data: Option<&str>) -> Result<Value> {
    match data {
        Some(data) => serde_json::from_str(data).wrap_err("--data is not valid JSON"),
        None => Ok(json!({})),
    }
}

fn render_response(response: &ApiResponse) -> CommandResult {
    CommandOutput::object(&json!({
        "status": response.status.as_u16(),
        "data": response.data,
    }))
}

fn report(error: NormalizedError) -> color_eyre::Report {
    match &error {
        NormalizedError::FieldErrorResponse { status, errors, .. } => {
            error!(%status, "Request failed");
            warn!("{}", describe_field_errors(errors));
        }
        NormalizedError::NoResponse { request } => error!(%request, "No response"),
        NormalizedError::RequestSetup { message } => error!("Request could not be sent: {message}"),
    }
    error.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_defaults_to_empty_object() {
        assert_eq!(parse_body(None).unwrap(), json!({}));
        assert_eq!(parse_body(Some(r#"{"title":"x"}"#)).unwrap(), json!({ "title": "x" }));
        assert!(parse_body(Some("{")).is_err());
    }

    #[test]
    fn request_setup_message_is_kept() {
        let report = report(NormalizedError::RequestSetup {
            message: "builder error".to_string(),
        });

        assert_eq!(report.to_string(), "builder error");
    }
}
