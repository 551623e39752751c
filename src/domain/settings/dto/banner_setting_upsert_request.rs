use serde::Deserialize;
use validator::Validate;

use crate::core::persistence::settings::banner_setting_entity::ThemeEntity;

/// Partial update of the banner settings; absent fields keep their value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct BannerSettingUpsertRequest {
    #[validate(range(min = 300, max = 2000))]
    pub banner_width: Option<u32>,

    #[validate(range(min = 60, max = 1000))]
    pub banner_height: Option<u32>,

    #[validate(length(max = 80))]
    pub banner_title: Option<String>,

    /// Whole hours only; the cross-midnight date heuristic compares sample
    /// hours against this value and is undefined past 23.
    #[validate(range(min = 1, max = 23))]
    pub look_back_hours: Option<i64>,

    #[validate(range(min = 1, max = 86_400))]
    pub cache_ttl_secs: Option<i64>,

    #[validate(range(min = -12, max = 14))]
    pub utc_offset_hours: Option<i32>,

    #[validate(length(max = 8))]
    pub tz_abbreviation: Option<String>,

    pub display_watermark: Option<bool>,

    pub theme: Option<ThemeEntity>,
}
