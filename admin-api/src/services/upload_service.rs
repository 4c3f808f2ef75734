//! Upload simulation service.
//!
//! Mirrors the upload page's behavior: entries accumulate progress in random
//! 0-20% steps, capped at 99% until the accumulated total crosses 100%.
//! Nothing is ever transmitted.

use rand::Rng;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{UploadEntry, UploadStatus};

const MAX_VISIBLE_PROGRESS: f32 = 99.0;

#[derive(Clone)]
pub struct UploadQueue {
    inner: Arc<RwLock<Vec<UploadEntry>>>,
}

impl UploadQueue {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Register a simulated upload. Only video MIME types are accepted.
    pub async fn register(
        &self,
        file_name: &str,
        size_bytes: u64,
        content_type: &str,
    ) -> Option<UploadEntry> {
        if !content_type.starts_with("video/") {
            return None;
        }
        let entry = UploadEntry {
            id: Uuid::new_v4(),
            file_name: file_name.to_string(),
            size_bytes,
            content_type: content_type.to_string(),
            progress: 0.0,
            status: UploadStatus::Pending,
            created_at: chrono::Utc::now(),
        };
        self.inner.write().await.push(entry.clone());
        Some(entry)
    }

    /// Advance every in-flight entry by a random step and return the queue.
    pub async fn poll(&self) -> Vec<UploadEntry> {
        let mut entries = self.inner.write().await;
        let mut rng = rand::thread_rng();
        Self::advance_entries(&mut entries, || rng.gen_range(0.0..20.0))
    }

    /// Advance with an injected step source; [`UploadQueue::poll`] is this
    /// with a thread-RNG.
    pub async fn advance_with<F: FnMut() -> f32>(&self, step: F) -> Vec<UploadEntry> {
        let mut entries = self.inner.write().await;
        Self::advance_entries(&mut entries, step)
    }

    fn advance_entries(
        entries: &mut [UploadEntry],
        mut step: impl FnMut() -> f32,
    ) -> Vec<UploadEntry> {
        for entry in entries.iter_mut() {
            match entry.status {
                UploadStatus::Pending | UploadStatus::Uploading => {
                    entry.status = UploadStatus::Uploading;
                    entry.progress += step();
                    if entry.progress >= 100.0 {
                        entry.progress = 100.0;
                        entry.status = UploadStatus::Completed;
                    } else {
                        entry.progress = entry.progress.min(MAX_VISIBLE_PROGRESS);
                    }
                }
                UploadStatus::Completed | UploadStatus::Error => {}
            }
        }
        entries.to_vec()
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        let mut entries = self.inner.write().await;
        let before = entries.len();
        entries.retain(|e| e.id != id);
        entries.len() < before
    }
}

impl Default for UploadQueue {
    fn default() -> Self {
        Self::new()
    }
}
