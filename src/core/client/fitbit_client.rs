//! Outbound client for the Fitbit Web API: OAuth token grants and the
//! intraday heart-rate endpoint.

use anyhow::{anyhow, Context, Result};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

use crate::core::persistence::credentials::app_credential_entity::AppCredentialEntity;
use crate::core::persistence::credentials::user_credential_entity::UserCredentialEntity;
use crate::domain::heartrate::service::timeline::QueryWindow;

const TOKEN_URL: &str = "https://api.fitbit.com/oauth2/token";
const AUTHORIZE_URL: &str = "https://www.fitbit.com/oauth2/authorize";
const API_BASE_URL: &str = "https://api.fitbit.com";
const REDIRECT_URI: &str = "http://localhost:8090";

/// Error envelope the vendor returns on non-2xx responses.
/// The `success` field is absent on 200 responses.
#[derive(Debug, Default, Deserialize)]
pub struct VendorErrorBody {
    #[serde(default)]
    pub errors: Vec<VendorErrorItem>,
    #[serde(default)]
    pub success: bool,
}

#[derive(Debug, Deserialize)]
pub struct VendorErrorItem {
    #[serde(rename = "errorType")]
    pub error_type: String,
    pub message: String,
}

impl VendorErrorBody {
    fn joined_messages(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Raw intraday payload, minute-by-minute coverage of the user's heart rate.
#[derive(Debug, Default, Deserialize)]
pub struct HeartRateTimeSeries {
    #[serde(rename = "activities-heart-intraday", default)]
    pub intraday: IntradaySection,
}

#[derive(Debug, Default, Deserialize)]
pub struct IntradaySection {
    #[serde(default)]
    pub dataset: Vec<RawDatapoint>,
    #[serde(rename = "datasetInterval", default)]
    pub dataset_interval: i64,
    #[serde(rename = "datasetType", default)]
    pub dataset_type: String,
}

/// One datapoint exactly as the vendor sends it: time of day, no date.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDatapoint {
    pub time: String,
    pub value: i32,
}

/// Fetch failures the pipeline reacts to differently.
#[derive(Debug, Error)]
pub enum FetchError {
    /// 401 with the vendor's "Access token expired" message; the caller
    /// should run the refresh grant and retry once.
    #[error("access token expired; refresh required")]
    TokenExpired,

    #[error("vendor api error: {0}")]
    Vendor(String),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

pub struct FitbitClient {
    http: Client,
    api_base_url: String,
}

impl Default for FitbitClient {
    fn default() -> Self {
        Self {
            http: Client::new(),
            api_base_url: API_BASE_URL.to_string(),
        }
    }
}

impl FitbitClient {
    pub fn new(http: Client) -> Self {
        Self {
            http,
            api_base_url: API_BASE_URL.to_string(),
        }
    }

    /// The consent page link the user opens to authorize heart-rate access.
    pub fn authorize_url(app: &AppCredentialEntity) -> String {
        format!(
            "{AUTHORIZE_URL}?response_type=code&client_id={}&redirect_uri={REDIRECT_URI}&scope=heartrate&expires_in=604800",
            app.oauth_client_id
        )
    }

    /// Exchange a first-time authorization code for user credentials.
    pub async fn exchange_code(
        &self,
        app: &AppCredentialEntity,
        auth_code: &str,
    ) -> Result<UserCredentialEntity> {
        if auth_code.is_empty() {
            return Err(anyhow!("no user auth code provided"));
        }
        self.request_credentials(app, &[("grant_type", "authorization_code"), ("code", auth_code)])
            .await
    }

    /// Trade a refresh token for a fresh access/refresh token pair.
    pub async fn refresh_credentials(
        &self,
        app: &AppCredentialEntity,
        refresh_token: &str,
    ) -> Result<UserCredentialEntity> {
        if refresh_token.is_empty() {
            return Err(anyhow!("no refresh token available"));
        }
        self.request_credentials(
            app,
            &[("grant_type", "refresh_token"), ("refresh_token", refresh_token)],
        )
        .await
    }

    async fn request_credentials(
        &self,
        app: &AppCredentialEntity,
        grant: &[(&str, &str)],
    ) -> Result<UserCredentialEntity> {
        let mut form: Vec<(&str, &str)> = vec![
            ("clientId", app.oauth_client_id.as_str()),
            ("redirect_uri", REDIRECT_URI),
        ];
        form.extend_from_slice(grant);

        let resp = self
            .http
            .post(TOKEN_URL)
            .basic_auth(&app.oauth_client_id, Some(&app.client_secret))
            .form(&form)
            .send()
            .await
            .context("Failed to call the token endpoint")?;

        let status = resp.status();
        let body = resp.text().await.context("Failed to read token response")?;

        if status != StatusCode::OK {
            let envelope: VendorErrorBody = serde_json::from_str(&body)
                .with_context(|| format!("Unrecognized token error body ({status})"))?;
            if !envelope.success {
                return Err(anyhow!(envelope.joined_messages()));
            }
            return Err(anyhow!("{status} - {body}"));
        }

        let creds: UserCredentialEntity =
            serde_json::from_str(&body).context("Failed to decode token response")?;
        validate_credentials(&creds)?;
        Ok(creds)
    }

    /// Fetch the raw intraday series for the given query window.
    pub async fn fetch_intraday(
        &self,
        user: &UserCredentialEntity,
        window: &QueryWindow,
    ) -> Result<HeartRateTimeSeries, FetchError> {
        let uri = format!(
            "{}/1/user/{}/activities/heart/date/{}/{}/1min/time/{}/{}.json",
            self.api_base_url,
            user.user_id,
            window.start_date.format("%Y-%m-%d"),
            window.end_date.format("%Y-%m-%d"),
            window.start_time,
            window.end_time,
        );

        let resp = self
            .http
            .get(&uri)
            .bearer_auth(&user.access_token)
            .send()
            .await?;

        let status = resp.status();
        if status == StatusCode::UNAUTHORIZED {
            let envelope: VendorErrorBody = resp.json().await.unwrap_or_default();
            if let Some(first) = envelope.errors.first() {
                if first.message.contains("Access token expired") {
                    return Err(FetchError::TokenExpired);
                }
                return Err(FetchError::Vendor(first.message.clone()));
            }
            return Err(FetchError::Vendor("unauthorized".into()));
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FetchError::Vendor(format!("{status} - {body}")));
        }

        Ok(resp.json::<HeartRateTimeSeries>().await?)
    }
}

fn validate_credentials(creds: &UserCredentialEntity) -> Result<()> {
    if !creds.scope.contains("heartrate") {
        return Err(anyhow!("heartrate was not given as a scope permission"));
    }
    if creds.access_token.is_empty() {
        return Err(anyhow!("access token empty"));
    }
    if creds.refresh_token.is_empty() {
        return Err(anyhow!("refresh token empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intraday_payload_decodes_the_vendor_shape() {
        let body = r#"{
            "activities-heart-intraday": {
                "dataset": [
                    {"time": "14:39:00", "value": 63},
                    {"time": "14:40:00", "value": 69}
                ],
                "datasetInterval": 1,
                "datasetType": "minute"
            }
        }"#;

        let series: HeartRateTimeSeries = serde_json::from_str(body).unwrap();
        assert_eq!(series.intraday.dataset.len(), 2);
        assert_eq!(series.intraday.dataset[0].time, "14:39:00");
        assert_eq!(series.intraday.dataset[1].value, 69);
        assert_eq!(series.intraday.dataset_interval, 1);
        assert_eq!(series.intraday.dataset_type, "minute");
    }

    #[test]
    fn error_envelope_joins_messages() {
        let body = r#"{
            "errors": [
                {"errorType": "expired_token", "message": "Access token expired: abc"},
                {"errorType": "other", "message": "second"}
            ],
            "success": false
        }"#;

        let envelope: VendorErrorBody = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.joined_messages(), "Access token expired: abc, second");
        assert!(!envelope.success);
    }

    #[test]
    fn authorize_url_carries_client_id_and_scope() {
        let app = AppCredentialEntity {
            oauth_client_id: "ABC123".into(),
            client_secret: "shh".into(),
        };
        let url = FitbitClient::authorize_url(&app);
        assert!(url.contains("client_id=ABC123"));
        assert!(url.contains("scope=heartrate"));
    }

    #[test]
    fn credential_validation_requires_heartrate_scope() {
        let mut creds = UserCredentialEntity {
            access_token: "tok".into(),
            refresh_token: "ref".into(),
            scope: "sleep activity".into(),
            user_id: "U1".into(),
        };
        assert!(validate_credentials(&creds).is_err());

        creds.scope = "heartrate activity".into();
        assert!(validate_credentials(&creds).is_ok());
    }
}
