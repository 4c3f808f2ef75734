//! Video table service - the admin view over the catalog.

use std::sync::Arc;
use tokio::sync::RwLock;
use video_catalog::seed_videos;

use crate::models::{AdminVideo, VideoStatus};

/// Mock per-video stats joined onto the seeded catalog rows, in seed order.
const VIDEO_STATS: [(i64, i64, &str, VideoStatus); 5] = [
    (45_821, 120, "2024-01-15", VideoStatus::Active),
    (38_294, 95, "2024-01-14", VideoStatus::Active),
    (29_473, 180, "2024-01-13", VideoStatus::Inactive),
    (24_918, 140, "2024-01-12", VideoStatus::Active),
    (18_247, 110, "2024-01-11", VideoStatus::Pending),
];

/// In-memory video table. Deletes filter the list in place and are never
/// persisted; the table is rebuilt from the seeds at startup.
#[derive(Clone)]
pub struct VideoStore {
    inner: Arc<RwLock<Vec<AdminVideo>>>,
}

impl VideoStore {
    pub fn new() -> Self {
        let rows = seed_videos()
            .into_iter()
            .zip(VIDEO_STATS)
            .map(|(video, (views, duration_secs, upload_date, status))| AdminVideo {
                id: video.id,
                permanent_id: video.permanent_id,
                title: video.title.unwrap_or_default(),
                src: video.src,
                upload_date: upload_date.to_string(),
                views,
                duration_secs,
                status,
            })
            .collect();
        Self {
            inner: Arc::new(RwLock::new(rows)),
        }
    }

    pub async fn list(&self) -> Vec<AdminVideo> {
        self.inner.read().await.clone()
    }

    /// Remove one row; false when the id is unknown.
    pub async fn remove(&self, id: &str) -> bool {
        let mut rows = self.inner.write().await;
        let before = rows.len();
        rows.retain(|v| v.id != id);
        rows.len() < before
    }

    /// Remove a batch of rows; returns how many were removed.
    pub async fn remove_many(&self, ids: &[String]) -> usize {
        let mut rows = self.inner.write().await;
        let before = rows.len();
        rows.retain(|v| !ids.contains(&v.id));
        before - rows.len()
    }
}

impl Default for VideoStore {
    fn default() -> Self {
        Self::new()
    }
}
