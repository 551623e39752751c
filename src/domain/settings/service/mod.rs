//! Read/upsert of the banner settings entity.

use anyhow::{anyhow, Result};
use serde_json::{json, Value};
use validator::Validate;

use crate::core::persistence::settings::banner_setting_entity::BannerSettingEntity;
use crate::core::persistence::settings::banner_setting_repository::{
    BannerSettingApiRepository, BannerSettingRepository,
};
use crate::domain::settings::dto::banner_setting_upsert_request::BannerSettingUpsertRequest;
use crate::domain::tz::lookup_full_tz;

pub async fn get_settings() -> Result<BannerSettingEntity> {
    get_settings_with_repo(&BannerSettingRepository::new()).await
}

pub async fn get_settings_with_repo(
    repo: &dyn BannerSettingApiRepository,
) -> Result<BannerSettingEntity> {
    repo.fs_adapter().read()
}

pub async fn upsert_settings(req: BannerSettingUpsertRequest) -> Result<Value> {
    upsert_settings_with_repo(&BannerSettingRepository::new(), req).await
}

pub async fn upsert_settings_with_repo(
    repo: &dyn BannerSettingApiRepository,
    req: BannerSettingUpsertRequest,
) -> Result<Value> {
    req.validate()?;

    // An abbreviation must resolve against the configured offset before it
    // is stored; a typo would otherwise surface only at render time.
    if let Some(abbrev) = req.tz_abbreviation.as_deref() {
        let trimmed = abbrev.trim();
        if !trimmed.is_empty() {
            let current = repo.fs_adapter().read()?;
            let offset = req.utc_offset_hours.unwrap_or(current.utc_offset_hours);
            lookup_full_tz(&trimmed.to_uppercase(), offset)
                .map_err(|e| anyhow!("unknown timezone abbreviation: {e}"))?;
        }
    }

    let mut settings = repo.fs_adapter().read()?;
    settings.apply_update(req);
    repo.fs_adapter().write(&settings)?;

    let zone_label = settings
        .tz_abbreviation
        .as_deref()
        .and_then(|a| lookup_full_tz(a, settings.utc_offset_hours).ok())
        .map(|tz| tz.full.to_string());

    Ok(json!({
        "message": "settings updated",
        "settings": settings,
        "zone_label": zone_label,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::persistence::entity_fs_adapter_trait::EntityFsAdapterTrait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockSettingAdapter {
        state: Mutex<BannerSettingEntity>,
    }

    impl EntityFsAdapterTrait<BannerSettingEntity> for MockSettingAdapter {
        fn new() -> Self
        where
            Self: Sized,
        {
            Self::default()
        }

        fn read(&self) -> Result<BannerSettingEntity> {
            Ok(self.state.lock().unwrap().clone())
        }

        fn write(&self, data: &BannerSettingEntity) -> Result<()> {
            *self.state.lock().unwrap() = data.clone();
            Ok(())
        }

        fn delete(&self) -> Result<()> {
            *self.state.lock().unwrap() = BannerSettingEntity::default();
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockSettingRepository {
        adapter: MockSettingAdapter,
    }

    impl BannerSettingApiRepository for MockSettingRepository {
        fn fs_adapter(&self) -> &dyn EntityFsAdapterTrait<BannerSettingEntity> {
            &self.adapter
        }
    }

    #[test]
    fn settings_futures_are_send() {
        fn assert_send<F: Send>(_f: F) {}

        assert_send(get_settings());
        assert_send(upsert_settings(BannerSettingUpsertRequest::default()));
    }

    #[tokio::test]
    async fn upsert_updates_only_provided_fields() {
        let repo = MockSettingRepository::default();
        let req = BannerSettingUpsertRequest {
            banner_title: Some("Resting HR".into()),
            look_back_hours: Some(6),
            ..Default::default()
        };

        upsert_settings_with_repo(&repo, req).await.expect("upsert should succeed");

        let stored = repo.adapter.state.lock().unwrap().clone();
        assert_eq!(stored.banner_title, "Resting HR");
        assert_eq!(stored.look_back_hours, 6);
        // Untouched fields keep their defaults.
        assert_eq!(stored.cache_ttl_secs, BannerSettingEntity::default().cache_ttl_secs);
    }

    #[tokio::test]
    async fn out_of_range_look_back_is_rejected() {
        let repo = MockSettingRepository::default();
        let req = BannerSettingUpsertRequest {
            look_back_hours: Some(48),
            ..Default::default()
        };

        assert!(upsert_settings_with_repo(&repo, req).await.is_err());
        let stored = repo.adapter.state.lock().unwrap().clone();
        assert_eq!(stored.look_back_hours, BannerSettingEntity::default().look_back_hours);
    }

    #[tokio::test]
    async fn unknown_tz_abbreviation_is_rejected() {
        let repo = MockSettingRepository::default();
        let req = BannerSettingUpsertRequest {
            tz_abbreviation: Some("LMSKTK".into()),
            ..Default::default()
        };

        assert!(upsert_settings_with_repo(&repo, req).await.is_err());
    }

    #[tokio::test]
    async fn known_tz_abbreviation_is_normalized_and_labelled() {
        let repo = MockSettingRepository::default();
        let req = BannerSettingUpsertRequest {
            utc_offset_hours: Some(-5),
            tz_abbreviation: Some("cdt".into()),
            ..Default::default()
        };

        let value = upsert_settings_with_repo(&repo, req).await.unwrap();
        assert_eq!(
            value["zone_label"],
            "Central Daylight Time (North America)"
        );
        let stored = repo.adapter.state.lock().unwrap().clone();
        assert_eq!(stored.tz_abbreviation.as_deref(), Some("CDT"));
    }
}
