use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

use crate::core::client::fitbit_client::FetchError;

#[allow(dead_code)]
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error("Body parsing error: {0}")]
    BodyParsingError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Vendor API error: {0}")]
    VendorApiError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// Classify a service error by the root cause in its chain: validator
    /// rejections become 422, vendor API failures 502, filesystem failures
    /// 500 storage errors; everything else stays a plain internal error.
    pub fn from_service_error(err: anyhow::Error) -> Self {
        if err.downcast_ref::<validator::ValidationErrors>().is_some() {
            return AppError::ValidationError(err.to_string());
        }
        if err.downcast_ref::<FetchError>().is_some() {
            return AppError::VendorApiError(format!("{err:#}"));
        }
        if err.downcast_ref::<std::io::Error>().is_some() {
            return AppError::StorageError(format!("{err:#}"));
        }
        AppError::InternalServerError(format!("{err:#}"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Choose status codes per variant
        let status = match self {
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BodyParsingError(_) => StatusCode::BAD_REQUEST,
            AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::VendorApiError(_) => StatusCode::BAD_GATEWAY,
            AppError::StorageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        // String provided by thiserror → safe JSON message
        let body = Json(json!({
            "message": self.to_string()
        }));

        (status, body).into_response()
    }
}
