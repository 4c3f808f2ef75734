use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{AppError, Result};
use crate::models::AdminVideo;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/videos", get(list))
        .route("/videos/:id", delete(remove))
        .route("/videos/bulk-delete", post(bulk_remove))
}

async fn list(State(state): State<AppState>) -> Json<Vec<AdminVideo>> {
    Json(state.videos.list().await)
}

async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Value>> {
    if !state.videos.remove(&id).await {
        return Err(AppError::NotFound(format!("Video {id}")));
    }
    Ok(Json(json!({ "success": true })))
}

#[derive(Debug, Deserialize)]
pub struct BulkDeleteRequest {
    pub ids: Vec<String>,
}

async fn bulk_remove(
    State(state): State<AppState>,
    Json(payload): Json<BulkDeleteRequest>,
) -> Result<Json<Value>> {
    if payload.ids.is_empty() {
        return Err(AppError::BadRequest("No video ids given".to_string()));
    }
    let deleted = state.videos.remove_many(&payload.ids).await;
    Ok(Json(json!({ "deleted": deleted })))
}
