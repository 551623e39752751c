use serde::Deserialize;
use validator::Validate;

/// OAuth app registration values from the vendor developer console.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AppCredentialUpsertRequest {
    #[validate(length(min = 1, max = 64))]
    pub oauth_client_id: String,

    #[validate(length(min = 1, max = 128))]
    pub client_secret: String,
}

/// The authorization code captured from the consent redirect.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CodeExchangeRequest {
    #[validate(length(min = 1, max = 512))]
    pub code: String,
}
