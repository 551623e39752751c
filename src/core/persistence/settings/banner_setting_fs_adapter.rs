use anyhow::Result;

use crate::core::persistence::entity_fs_adapter_trait::{
    delete_if_present, read_json_or_default, write_json_atomic, EntityFsAdapterTrait,
};
use crate::core::persistence::storage_path::banner_setting_path;

use super::banner_setting_entity::BannerSettingEntity;

/// FS adapter for `banner_settings.json`.
pub struct BannerSettingFsAdapter;

impl EntityFsAdapterTrait<BannerSettingEntity> for BannerSettingFsAdapter {
    fn new() -> Self
    where
        Self: Sized,
    {
        Self {}
    }

    fn read(&self) -> Result<BannerSettingEntity> {
        read_json_or_default(banner_setting_path())
    }

    fn write(&self, data: &BannerSettingEntity) -> Result<()> {
        write_json_atomic(banner_setting_path(), data)
    }

    fn delete(&self) -> Result<()> {
        delete_if_present(banner_setting_path())
    }
}
