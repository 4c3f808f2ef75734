use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::UploadEntry;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/uploads", get(list).post(create))
        .route("/uploads/:id", delete(remove))
}

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterUploadRequest {
    #[validate(length(min = 1))]
    pub file_name: String,
    pub size_bytes: u64,
    pub content_type: String,
}

/// Register a simulated upload. The file itself is never transmitted.
async fn create(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUploadRequest>,
) -> Result<(StatusCode, Json<UploadEntry>)> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let entry = state
        .uploads
        .register(&payload.file_name, payload.size_bytes, &payload.content_type)
        .await
        .ok_or_else(|| AppError::BadRequest("Only video files can be uploaded".to_string()))?;

    Ok((StatusCode::CREATED, Json(entry)))
}

/// The queue; each poll advances simulated progress.
async fn list(State(state): State<AppState>) -> Json<Vec<UploadEntry>> {
    Json(state.uploads.poll().await)
}

async fn remove(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<Value>> {
    if !state.uploads.remove(id).await {
        return Err(AppError::NotFound(format!("Upload {id}")));
    }
    Ok(Json(json!({ "success": true })))
}
