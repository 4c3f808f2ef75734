use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    Pending,
    Uploading,
    Completed,
    Error,
}

/// An entry in the simulated upload queue. Nothing is ever transmitted;
/// progress advances artificially until completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadEntry {
    pub id: Uuid,
    pub file_name: String,
    pub size_bytes: u64,
    pub content_type: String,
    pub progress: f32,
    pub status: UploadStatus,
    pub created_at: DateTime<Utc>,
}
