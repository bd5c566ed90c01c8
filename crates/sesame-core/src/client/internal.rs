use std::sync::Arc;

use sesame_api_base::HttpClient;

use crate::client::{ClientSettings, SessionTokenStore};

pub struct InternalClient {
    pub(crate) settings: ClientSettings,
    pub(crate) http_client: Arc<HttpClient>,
    pub(crate) tokens: SessionTokenStore,
}

impl std::fmt::Debug for InternalClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InternalClient")
            .field("settings", &self.settings)
            .field("tokens", &self.tokens)
            .finish_non_exhaustive()
    }
}

impl InternalClient {
    pub fn get_settings(&self) -> &ClientSettings {
        &self.settings
    }

    pub fn get_http_client(&self) -> Arc<HttpClient> {
        self.http_client.clone()
    }

    pub fn get_token_store(&self) -> &SessionTokenStore {
        &self.tokens
    }
}
