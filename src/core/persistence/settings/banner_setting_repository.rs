use crate::core::persistence::entity_fs_adapter_trait::EntityFsAdapterTrait;

use super::banner_setting_entity::BannerSettingEntity;
use super::banner_setting_fs_adapter::BannerSettingFsAdapter;

pub trait BannerSettingApiRepository: Send + Sync {
    fn fs_adapter(&self) -> &dyn EntityFsAdapterTrait<BannerSettingEntity>;
}

pub struct BannerSettingRepository {
    adapter: BannerSettingFsAdapter,
}

impl BannerSettingRepository {
    pub fn new() -> Self {
        Self {
            adapter: BannerSettingFsAdapter::new(),
        }
    }
}

impl Default for BannerSettingRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl BannerSettingApiRepository for BannerSettingRepository {
    fn fs_adapter(&self) -> &dyn EntityFsAdapterTrait<BannerSettingEntity> {
        &self.adapter
    }
}
