use serde::{Deserialize, Serialize};

/// Video moderation status shown in the admin table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoStatus {
    Active,
    Inactive,
    Pending,
}

impl VideoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoStatus::Active => "active",
            VideoStatus::Inactive => "inactive",
            VideoStatus::Pending => "pending",
        }
    }
}

/// One row of the admin video table: a catalog record enriched with mock
/// per-video statistics. Rows live only in memory; deletes are never
/// persisted and the table is rebuilt at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminVideo {
    pub id: String,
    pub permanent_id: String,
    pub title: String,
    pub src: String,
    pub upload_date: String,
    pub views: i64,
    pub duration_secs: i64,
    pub status: VideoStatus,
}
