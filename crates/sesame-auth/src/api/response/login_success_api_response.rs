use serde::Deserialize;

/// Successful `POST /login` response. Other fields the server sends are ignored.
#[derive(Deserialize, Debug, Default)]
pub(crate) struct LoginSuccessApiResponse {
    #[serde(default)]
    pub token: Option<String>,
}
