use color_eyre::eyre::{Result, WrapErr};
use sesame_core::{Client, ClientSettings};
use tracing::debug;

use crate::command::Cli;

/// Build the client settings from the config file, then apply the command line overrides.
pub(crate) fn load_settings(cli: &Cli) -> Result<ClientSettings> {
    let mut settings = match &cli.config {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .wrap_err_with(|| format!("Failed to read config file {}", path.display()))?;
            serde_json::from_str(&content)
                .wrap_err_with(|| format!("Invalid config file {}", path.display()))?
        }
        None => ClientSettings::default(),
    };

    if let Some(server) = &cli.server {
        settings.base_url = server.clone();
    }
    if let Some(timeout) = cli.timeout {
        settings.timeout_secs = Some(timeout);
    }

    settings.validate()?;

    debug!(base_url = %settings.base_url, timeout_secs = ?settings.timeout_secs, "Loaded settings");
    Ok(settings)
}

pub(crate) fn new_client(cli: &Cli) -> Result<Client> {
    Ok(Client::new(Some(load_settings(cli)?)))
}
