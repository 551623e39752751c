//! Setup routes (e.g., /api/v1/setup/*)

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::api::controller::setup::SetupController;
use crate::app_state::AppState;

pub fn setup_routes() -> Router<AppState> {
    Router::new()
        .route("/app", put(SetupController::store_app_credentials))
        .route("/authorize-url", get(SetupController::get_authorize_url))
        .route("/exchange", post(SetupController::exchange_code))
}
