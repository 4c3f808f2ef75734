//! JSON API over the video catalog.

use actix_web::{get, web, HttpResponse};
use video_catalog::VideoCatalog;

use crate::error::{AppError, Result};

/// First page of the feed. Resets the pagination cursor.
#[get("")]
pub async fn initial_videos(catalog: web::Data<VideoCatalog>) -> Result<HttpResponse> {
    let page = catalog.initial_page().await;
    Ok(HttpResponse::Ok().json(page))
}

/// Next page; empty once the catalog is exhausted.
#[get("/more")]
pub async fn more_videos(catalog: web::Data<VideoCatalog>) -> Result<HttpResponse> {
    let page = catalog.next_page().await;
    Ok(HttpResponse::Ok().json(page))
}

/// The full catalog, for deep-linked entry.
#[get("/all")]
pub async fn all_videos(catalog: web::Data<VideoCatalog>) -> Result<HttpResponse> {
    let videos = catalog.all_videos().await;
    Ok(HttpResponse::Ok().json(videos))
}

/// Look up one record by permanent id.
#[get("/{permanent_id}")]
pub async fn get_video(
    path: web::Path<String>,
    catalog: web::Data<VideoCatalog>,
) -> Result<HttpResponse> {
    let permanent_id = path.into_inner();
    if !video_id::is_valid_video_id(&permanent_id) {
        return Err(AppError::BadRequest("Invalid video id".to_string()));
    }

    match catalog.find_by_permanent_id(&permanent_id).await {
        Some(video) => Ok(HttpResponse::Ok().json(video)),
        None => Err(AppError::NotFound(format!("Video {permanent_id}"))),
    }
}
