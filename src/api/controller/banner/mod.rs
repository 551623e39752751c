use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use crate::app_state::AppState;

pub struct BannerController;

impl BannerController {
    /// Serve the current banner SVG.
    ///
    /// GitHub's camo proxy honors Cache-Control, so caching is disabled here
    /// and freshness is handled by the in-process TTL cache instead.
    pub async fn get_banner(State(state): State<AppState>) -> impl IntoResponse {
        let svg = state.banner_service.current_banner().await;
        (
            [
                (header::CONTENT_TYPE, "image/svg+xml; charset=utf-8"),
                (header::CACHE_CONTROL, "no-store, no-cache, max-age=0"),
            ],
            svg,
        )
    }
}
