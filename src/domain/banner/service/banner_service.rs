//! Banner orchestration: cache gate, pipeline run, placeholder fallback.

use tracing::warn;

use crate::core::client::fitbit_client::FitbitClient;
use crate::core::persistence::credentials::credential_repository::CredentialApiRepository;
use crate::core::persistence::settings::banner_setting_entity::BannerSettingEntity;
use crate::core::persistence::settings::banner_setting_repository::BannerSettingApiRepository;
use crate::domain::banner::service::banner_cache::BannerCache;
use crate::domain::banner::service::render_service::{placeholder_banner, render_banner};
use crate::domain::heartrate::service::series_service::heart_rate_series;

/// The SVG to serve right now.
///
/// Never fails: any pipeline or render failure is logged and downgraded to
/// the placeholder banner. Whatever was produced is cached for one TTL,
/// placeholder included, so a broken vendor call cannot turn into a request
/// storm against the API.
pub async fn current_banner(
    client: &FitbitClient,
    credentials: &dyn CredentialApiRepository,
    settings_repo: &dyn BannerSettingApiRepository,
    cache: &BannerCache,
) -> String {
    let settings = settings_repo.fs_adapter().read().unwrap_or_else(|e| {
        warn!("failed to read banner settings, using defaults: {e:#}");
        BannerSettingEntity::default()
    });

    if let Some(svg) = cache.get_fresh(settings.cache_ttl_secs).await {
        return svg;
    }

    let svg = match heart_rate_series(client, credentials, &settings).await {
        Ok(samples) => render_banner(&samples, &settings).unwrap_or_else(|e| {
            warn!("error generating banner: {e:#}");
            placeholder_banner(&settings)
        }),
        Err(e) => {
            warn!("error grabbing time series: {e:#}");
            placeholder_banner(&settings)
        }
    };

    cache.store(svg.clone()).await;
    svg
}
