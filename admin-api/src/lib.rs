pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::services::{UploadQueue, VideoStore};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub videos: VideoStore,
    pub uploads: UploadQueue,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            videos: VideoStore::new(),
            uploads: UploadQueue::new(),
        }
    }
}

/// Build the full admin router over the given state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/auth", api::auth::routes())
        .nest("/admin", api::admin_routes(state.clone()))
        .route("/:slug", get(api::auth::login_page))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
