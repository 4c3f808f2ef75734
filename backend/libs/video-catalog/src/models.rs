use serde::{Deserialize, Serialize};

/// A single video record.
///
/// `id` is the legacy numeric identifier kept for old links; `permanent_id`
/// is the opaque 13-character identifier used in shareable URLs. Records are
/// statically seeded and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub permanent_id: String,
    pub src: String,
    pub poster: Option<String>,
    pub title: Option<String>,
}

impl Video {
    pub fn seeded(
        id: &str,
        permanent_id: &str,
        src: &str,
        poster: &str,
        title: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            permanent_id: permanent_id.to_string(),
            src: src.to_string(),
            poster: Some(poster.to_string()),
            title: Some(title.to_string()),
        }
    }
}
