//! One-time setup: store app credentials, hand out the consent URL, exchange
//! the authorization code. Replaces the interactive CLI flow of older
//! deployments with plain API operations.

use anyhow::{anyhow, Result};
use serde_json::{json, Value};
use validator::Validate;

use crate::core::client::fitbit_client::FitbitClient;
use crate::core::persistence::credentials::app_credential_entity::AppCredentialEntity;
use crate::core::persistence::credentials::credential_repository::{
    CredentialApiRepository, CredentialRepository,
};
use crate::domain::setup::dto::{AppCredentialUpsertRequest, CodeExchangeRequest};

pub async fn store_app_credentials(req: AppCredentialUpsertRequest) -> Result<Value> {
    store_app_credentials_with_repo(&CredentialRepository::new(), req).await
}

pub async fn store_app_credentials_with_repo(
    repo: &dyn CredentialApiRepository,
    req: AppCredentialUpsertRequest,
) -> Result<Value> {
    req.validate()?;

    let entity = AppCredentialEntity {
        oauth_client_id: req.oauth_client_id.trim().to_string(),
        client_secret: req.client_secret.trim().to_string(),
    };
    repo.app_adapter().write(&entity)?;

    Ok(json!({
        "message": "app credentials stored",
        "authorize_url": FitbitClient::authorize_url(&entity),
    }))
}

pub async fn authorize_url() -> Result<Value> {
    authorize_url_with_repo(&CredentialRepository::new()).await
}

pub async fn authorize_url_with_repo(repo: &dyn CredentialApiRepository) -> Result<Value> {
    let app = repo.app_adapter().read()?;
    if !app.is_configured() {
        return Err(anyhow!("app credentials not configured; store them first"));
    }

    Ok(json!({ "authorize_url": FitbitClient::authorize_url(&app) }))
}

pub async fn exchange_code(client: &FitbitClient, req: CodeExchangeRequest) -> Result<Value> {
    exchange_code_with_repo(client, &CredentialRepository::new(), req).await
}

pub async fn exchange_code_with_repo(
    client: &FitbitClient,
    repo: &dyn CredentialApiRepository,
    req: CodeExchangeRequest,
) -> Result<Value> {
    req.validate()?;

    let app = repo.app_adapter().read()?;
    if !app.is_configured() {
        return Err(anyhow!("app credentials not configured; store them first"));
    }

    let creds = client.exchange_code(&app, &req.code).await?;
    repo.user_adapter().write(&creds)?;

    Ok(json!({
        "message": "setup complete",
        "user_id": creds.user_id,
        "access_token": creds.masked_access_token(),
        "scope": creds.scope,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::persistence::credentials::user_credential_entity::UserCredentialEntity;
    use crate::core::persistence::entity_fs_adapter_trait::EntityFsAdapterTrait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockEntityAdapter<T: Clone + Default + Send> {
        state: Mutex<T>,
    }

    impl<T: Clone + Default + Send> EntityFsAdapterTrait<T> for MockEntityAdapter<T> {
        fn new() -> Self
        where
            Self: Sized,
        {
            Self::default()
        }

        fn read(&self) -> Result<T> {
            Ok(self.state.lock().unwrap().clone())
        }

        fn write(&self, data: &T) -> Result<()> {
            *self.state.lock().unwrap() = data.clone();
            Ok(())
        }

        fn delete(&self) -> Result<()> {
            *self.state.lock().unwrap() = T::default();
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockCredentialRepository {
        app: MockEntityAdapter<AppCredentialEntity>,
        user: MockEntityAdapter<UserCredentialEntity>,
    }

    impl CredentialApiRepository for MockCredentialRepository {
        fn app_adapter(&self) -> &dyn EntityFsAdapterTrait<AppCredentialEntity> {
            &self.app
        }

        fn user_adapter(&self) -> &dyn EntityFsAdapterTrait<UserCredentialEntity> {
            &self.user
        }
    }

    #[tokio::test]
    async fn stored_app_credentials_are_trimmed() {
        let repo = MockCredentialRepository::default();
        let req = AppCredentialUpsertRequest {
            oauth_client_id: " ABC123 ".into(),
            client_secret: " s3cret ".into(),
        };

        let value = store_app_credentials_with_repo(&repo, req).await.unwrap();

        let stored = repo.app.state.lock().unwrap().clone();
        assert_eq!(stored.oauth_client_id, "ABC123");
        assert_eq!(stored.client_secret, "s3cret");
        assert!(value["authorize_url"]
            .as_str()
            .unwrap()
            .contains("client_id=ABC123"));
    }

    #[tokio::test]
    async fn empty_client_id_is_rejected() {
        let repo = MockCredentialRepository::default();
        let req = AppCredentialUpsertRequest {
            oauth_client_id: "".into(),
            client_secret: "s3cret".into(),
        };

        assert!(store_app_credentials_with_repo(&repo, req).await.is_err());
    }

    #[test]
    fn setup_futures_are_send() {
        // Handlers await these through `&dyn CredentialApiRepository`; axum
        // requires the resulting futures to be Send.
        fn assert_send<F: Send>(_f: F) {}

        assert_send(authorize_url());
        assert_send(store_app_credentials(AppCredentialUpsertRequest {
            oauth_client_id: "ABC123".into(),
            client_secret: "s3cret".into(),
        }));
    }

    #[tokio::test]
    async fn authorize_url_requires_configured_app() {
        let repo = MockCredentialRepository::default();
        assert!(authorize_url_with_repo(&repo).await.is_err());

        repo.app
            .write(&AppCredentialEntity {
                oauth_client_id: "ABC123".into(),
                client_secret: "s3cret".into(),
            })
            .unwrap();
        assert!(authorize_url_with_repo(&repo).await.is_ok());
    }
}
