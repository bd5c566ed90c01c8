use std::{sync::Arc, time::Duration};

use reqwest::header::{self, HeaderValue};
use sesame_api_base::HttpClient;
use tracing::warn;

use super::internal::InternalClient;
use crate::client::{ClientSettings, SessionTokenStore};

/// The main struct to interact with the Sesame SDK.
#[derive(Debug, Clone)]
pub struct Client {
    // Important: The [`Client`] struct requires its `Clone` implementation to return an owned
    // reference to the same instance. Any mutable state needs to be behind the shared
    // [`InternalClient`].
    #[doc(hidden)]
    pub internal: Arc<InternalClient>,
}

impl Client {
    /// Create a new Sesame client.
    pub fn new(settings: Option<ClientSettings>) -> Self {
        let settings = settings.unwrap_or_default();

        let http_client = new_http_client_builder(&settings)
            .build()
            .expect("HTTP Client build should not fail");

        let http_client = Arc::new(HttpClient::new(settings.base_url.clone(), http_client));
        for (name, value) in build_default_headers(&settings) {
            if let Some(name) = name {
                http_client.set_default_header(name, value);
            }
        }

        Self {
            internal: Arc::new(InternalClient {
                tokens: SessionTokenStore::new(http_client.clone()),
                http_client,
                settings,
            }),
        }
    }

    /// The HTTP client shared by everything created from this client.
    pub fn http_client(&self) -> Arc<HttpClient> {
        self.internal.get_http_client()
    }

    /// The session token store bound to [`Client::http_client`].
    pub fn tokens(&self) -> &SessionTokenStore {
        self.internal.get_token_store()
    }

    /// The settings this client was created with.
    pub fn settings(&self) -> &ClientSettings {
        self.internal.get_settings()
    }
}

fn new_http_client_builder(settings: &ClientSettings) -> reqwest::ClientBuilder {
    let mut client_builder = reqwest::Client::builder();

    if let Some(timeout) = settings.timeout_secs {
        client_builder = client_builder.timeout(Duration::from_secs(timeout));
    }

    client_builder
}

/// Build the static default headers for the Sesame HttpClient. Values that are not valid header
/// values are left out, see [`ClientSettings::validate`].
fn build_default_headers(settings: &ClientSettings) -> header::HeaderMap {
    let mut headers = header::HeaderMap::new();

    // Handle optional headers

    if let Some(version) = &settings.client_version {
        match HeaderValue::from_str(version) {
            Ok(value) => {
                headers.append("Sesame-Client-Version", value);
            }
            Err(_) => warn!("Client version is not a valid header value, not sending it"),
        }
    }

    // Handle required headers

    match HeaderValue::from_str(&settings.user_agent) {
        Ok(value) => {
            headers.append(header::USER_AGENT, value);
        }
        Err(_) => warn!("User agent is not a valid header value, using the transport default"),
    }
    headers.append(header::ACCEPT, HeaderValue::from_static("application/json"));

    headers
}
