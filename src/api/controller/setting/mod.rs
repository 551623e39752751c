use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::core::persistence::settings::banner_setting_entity::BannerSettingEntity;
use crate::domain::settings::dto::banner_setting_upsert_request::BannerSettingUpsertRequest;
use crate::errors::AppError;

pub struct SettingController;

impl SettingController {
    pub async fn get_settings(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<BannerSettingEntity>>, AppError> {
        to_json(state.setting_service.get_settings().await)
    }

    pub async fn upsert_settings(
        State(state): State<AppState>,
        Json(payload): Json<BannerSettingUpsertRequest>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        to_json(state.setting_service.upsert_settings(payload).await)
    }
}
