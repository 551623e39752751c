use serde::{Deserialize, Serialize};

/// OAuth application credentials generated when registering the app with the
/// vendor's developer console.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppCredentialEntity {
    pub oauth_client_id: String,
    pub client_secret: String,
}

impl AppCredentialEntity {
    pub fn is_configured(&self) -> bool {
        !self.oauth_client_id.is_empty() && !self.client_secret.is_empty()
    }
}
