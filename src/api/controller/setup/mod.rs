use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::domain::setup::dto::{AppCredentialUpsertRequest, CodeExchangeRequest};
use crate::errors::AppError;

pub struct SetupController;

impl SetupController {
    pub async fn store_app_credentials(
        State(state): State<AppState>,
        Json(payload): Json<AppCredentialUpsertRequest>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        to_json(state.setup_service.store_app_credentials(payload).await)
    }

    pub async fn get_authorize_url(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        to_json(state.setup_service.authorize_url().await)
    }

    pub async fn exchange_code(
        State(state): State<AppState>,
        Json(payload): Json<CodeExchangeRequest>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        to_json(state.setup_service.exchange_code(&state.fitbit, payload).await)
    }
}
