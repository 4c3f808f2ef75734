use axum::{routing::get, Json, Router};

use crate::services::{AnalyticsService, DashboardStats};
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(stats))
}

/// Dashboard statistics (mock analytics).
async fn stats() -> Json<DashboardStats> {
    Json(AnalyticsService::dashboard_stats())
}
