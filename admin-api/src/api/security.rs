use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{AppError, Result};
use crate::models::SecurityLogEntry;
use crate::services::SecurityService;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/security", get(logs))
        .route("/security/password", post(change_password))
}

/// Recent security events (mock data).
async fn logs() -> Json<Vec<SecurityLogEntry>> {
    Json(SecurityService::recent_logs())
}

#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// Simulated password change: validated, acknowledged, never persisted.
async fn change_password(
    State(state): State<AppState>,
    Json(payload): Json<ChangePasswordRequest>,
) -> Result<Json<Value>> {
    if payload.current_password != state.config.admin.password {
        return Err(AppError::Unauthorized);
    }
    SecurityService::validate_password_change(&payload.new_password, &payload.confirm_password)
        .map_err(AppError::BadRequest)?;

    Ok(Json(json!({ "success": true })))
}
