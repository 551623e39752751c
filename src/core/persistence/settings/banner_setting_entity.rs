use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::settings::dto::banner_setting_upsert_request::BannerSettingUpsertRequest;

/// Everything user-tunable about the rendered banner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BannerSettingEntity {
    /// Banner width in points.
    pub banner_width: u32,
    /// Plot-area height in points (title padding is added on top).
    pub banner_height: u32,
    /// Heading drawn above the plot.
    pub banner_title: String,
    /// Whole hours of history per fetch; also the cross-midnight threshold.
    pub look_back_hours: i64,
    /// Seconds a rendered banner is served before re-fetching.
    pub cache_ttl_secs: i64,
    /// Fixed UTC offset the series is requested in.
    pub utc_offset_hours: i32,
    /// Optional zone abbreviation; validated against the offset on upsert.
    pub tz_abbreviation: Option<String>,
    /// Show the "View on GitHub" watermark.
    pub display_watermark: bool,
    pub theme: ThemeEntity,
    /// Last update timestamp (UTC).
    pub updated_at: DateTime<Utc>,
}

/// Banner colors as `rgba(r,g,b,a)` strings, embedded into the SVG verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeEntity {
    pub background: String,
    pub text_ticks: String,
    pub current_bpm: String,
    pub title: String,
    pub heart: String,
    pub axes: String,
    pub plot_line: String,
    pub heart_number: String,
}

impl Default for ThemeEntity {
    fn default() -> Self {
        Self {
            background: "rgba(32,33,36,255)".into(),
            text_ticks: "rgba(255,255,255,255)".into(),
            current_bpm: "rgba(255,255,255,255)".into(),
            title: "rgba(255,255,255,255)".into(),
            heart: "rgba(255,20,147,255)".into(),
            axes: "rgba(255,255,255,255)".into(),
            plot_line: "rgba(255,20,147,255)".into(),
            heart_number: "rgba(255,255,255,255)".into(),
        }
    }
}

impl Default for BannerSettingEntity {
    fn default() -> Self {
        Self {
            banner_width: 500,
            banner_height: 100,
            banner_title: "Heart Rate".into(),
            look_back_hours: 4,
            cache_ttl_secs: 300,
            utc_offset_hours: 0,
            tz_abbreviation: None,
            display_watermark: true,
            theme: ThemeEntity::default(),
            updated_at: Utc::now(),
        }
    }
}

impl BannerSettingEntity {
    pub fn apply_update(&mut self, req: BannerSettingUpsertRequest) {
        if let Some(v) = req.banner_width {
            self.banner_width = v;
        }
        if let Some(v) = req.banner_height {
            self.banner_height = v;
        }
        if let Some(v) = req.banner_title {
            self.banner_title = v;
        }
        if let Some(v) = req.look_back_hours {
            self.look_back_hours = v;
        }
        if let Some(v) = req.cache_ttl_secs {
            self.cache_ttl_secs = v;
        }
        if let Some(v) = req.utc_offset_hours {
            self.utc_offset_hours = v;
        }
        if let Some(v) = req.tz_abbreviation {
            let trimmed = v.trim().to_uppercase();
            self.tz_abbreviation = if trimmed.is_empty() { None } else { Some(trimmed) };
        }
        if let Some(v) = req.display_watermark {
            self.display_watermark = v;
        }
        if let Some(v) = req.theme {
            self.theme = v;
        }

        self.updated_at = Utc::now();
    }
}
