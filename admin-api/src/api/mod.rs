pub mod auth;
pub mod dashboard;
pub mod security;
pub mod trending;
pub mod uploads;
pub mod videos;

use axum::{middleware, Router};

use crate::middleware::require_admin;
use crate::AppState;

/// Everything under `/admin`, behind the cookie guard.
pub fn admin_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(dashboard::routes())
        .merge(videos::routes())
        .merge(trending::routes())
        .merge(uploads::routes())
        .merge(security::routes())
        .route_layer(middleware::from_fn_with_state(state, require_admin))
}
