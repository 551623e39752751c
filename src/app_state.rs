use std::sync::Arc;

use crate::core::client::fitbit_client::FitbitClient;
use crate::core::persistence::credentials::credential_repository::CredentialRepository;
use crate::core::persistence::settings::banner_setting_repository::BannerSettingRepository;
use crate::domain::banner::service::banner_cache::BannerCache;

macro_rules! delegate_async_service {
    ($(fn $name:ident($($arg:ident : $typ:ty),*) -> $ret:ty => $path:path;)+) => {
        $(
            pub async fn $name(&self, $($arg: $typ),*) -> anyhow::Result<$ret> {
                $path($($arg),*).await
            }
        )+
    };
}

#[derive(Clone)]
pub struct AppState {
    pub fitbit: Arc<FitbitClient>,
    pub banner_service: Arc<BannerService>,
    pub setting_service: Arc<SettingService>,
    pub setup_service: Arc<SetupService>,
}

pub fn build_app_state() -> AppState {
    let fitbit = Arc::new(FitbitClient::default());
    AppState {
        fitbit: fitbit.clone(),
        banner_service: Arc::new(BannerService::new(fitbit)),
        setting_service: Arc::new(SettingService),
        setup_service: Arc::new(SetupService),
    }
}

pub struct BannerService {
    fitbit: Arc<FitbitClient>,
    cache: BannerCache,
}

impl BannerService {
    pub fn new(fitbit: Arc<FitbitClient>) -> Self {
        Self {
            fitbit,
            cache: BannerCache::new(),
        }
    }

    pub async fn current_banner(&self) -> String {
        let credentials = CredentialRepository::new();
        let settings = BannerSettingRepository::new();
        crate::domain::banner::service::banner_service::current_banner(
            &self.fitbit,
            &credentials,
            &settings,
            &self.cache,
        )
        .await
    }
}

#[derive(Clone, Default)]
pub struct SettingService;

impl SettingService {
    delegate_async_service! {
        fn get_settings() -> crate::core::persistence::settings::banner_setting_entity::BannerSettingEntity => crate::domain::settings::service::get_settings;
        fn upsert_settings(req: crate::domain::settings::dto::banner_setting_upsert_request::BannerSettingUpsertRequest) -> serde_json::Value => crate::domain::settings::service::upsert_settings;
    }
}

#[derive(Clone, Default)]
pub struct SetupService;

impl SetupService {
    delegate_async_service! {
        fn store_app_credentials(req: crate::domain::setup::dto::AppCredentialUpsertRequest) -> serde_json::Value => crate::domain::setup::service::store_app_credentials;
        fn authorize_url() -> serde_json::Value => crate::domain::setup::service::authorize_url;
    }
}

impl SetupService {
    pub async fn exchange_code(
        &self,
        client: &FitbitClient,
        req: crate::domain::setup::dto::CodeExchangeRequest,
    ) -> anyhow::Result<serde_json::Value> {
        crate::domain::setup::service::exchange_code(client, req).await
    }
}
