use reqwest::header::HeaderValue;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Basic client behavior settings. These settings specify the target and transport behavior of
/// the Sesame Client. They are optional and uneditable once the client is initialized.
///
/// Defaults to
///
/// ```
/// # use sesame_core::ClientSettings;
/// let settings = ClientSettings {
///     base_url: "http://localhost:8000/api".to_string(),
///     user_agent: "Sesame Rust-SDK".to_string(),
///     timeout_secs: None,
///     client_version: None,
/// };
/// let default = ClientSettings::default();
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ClientSettings {
    /// The base url every API path is resolved against. Defaults to `http://localhost:8000/api`
    pub base_url: String,
    /// The user_agent to send. Defaults to `Sesame Rust-SDK`
    pub user_agent: String,
    /// Request timeout in seconds. The transport default (no timeout) applies when unset.
    pub timeout_secs: Option<u64>,
    /// Client version, sent as `Sesame-Client-Version` when set.
    pub client_version: Option<String>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".into(),
            user_agent: "Sesame Rust-SDK".into(),
            timeout_secs: None,
            client_version: None,
        }
    }
}

/// A setting whose value can not be sent as configured.
#[derive(Debug, Error)]
#[error("Invalid {setting}: `{value}` is not a valid HTTP header value")]
pub struct InvalidSettingError {
    /// Name of the setting, as spelled in a settings file.
    pub setting: &'static str,
    /// The rejected value.
    pub value: String,
}

impl ClientSettings {
    /// Check the settings that are sent as HTTP header values.
    ///
    /// [`Client::new`](crate::Client::new) leaves out any header whose value fails this check.
    pub fn validate(&self) -> Result<(), InvalidSettingError> {
        check_header_value("userAgent", &self.user_agent)?;
        if let Some(version) = &self.client_version {
            check_header_value("clientVersion", version)?;
        }
        Ok(())
    }
}

fn check_header_value(setting: &'static str, value: &str) -> Result<(), InvalidSettingError> {
    HeaderValue::from_str(value)
        .map(|_| ())
        .map_err(|_| InvalidSettingError {
            setting,
            value: value.to_string(),
        })
}
