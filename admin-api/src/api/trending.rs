use axum::{routing::get, Json, Router};

use crate::services::{AnalyticsService, TrendingVideo};
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/trending", get(list))
}

/// Trending videos with rank movement (mock analytics).
async fn list() -> Json<Vec<TrendingVideo>> {
    Json(AnalyticsService::trending())
}
