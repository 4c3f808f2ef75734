use std::sync::Mutex;
use std::time::Duration;

use crate::models::Video;

/// Videos returned per page.
pub const PAGE_SIZE: usize = 3;

const INITIAL_FETCH_DELAY: Duration = Duration::from_millis(500);
const PAGE_FETCH_DELAY: Duration = Duration::from_millis(800);

/// The statically seeded records backing every data surface.
pub fn seed_videos() -> Vec<Video> {
    const BUCKET: &str = "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample";
    vec![
        Video::seeded(
            "1",
            "a8b92cDdX01p1",
            &format!("{BUCKET}/BigBuckBunny.mp4"),
            &format!("{BUCKET}/images/BigBuckBunny.jpg"),
            "Sample Video 1",
        ),
        Video::seeded(
            "2",
            "k7M3nP9qR5sT2",
            &format!("{BUCKET}/ElephantsDream.mp4"),
            &format!("{BUCKET}/images/ElephantsDream.jpg"),
            "Sample Video 2",
        ),
        Video::seeded(
            "3",
            "h4L6wE8vY2uI3",
            &format!("{BUCKET}/ForBiggerBlazes.mp4"),
            &format!("{BUCKET}/images/ForBiggerBlazes.jpg"),
            "Sample Video 3",
        ),
        Video::seeded(
            "4",
            "f9A1zN7mQ3xC4",
            &format!("{BUCKET}/ForBiggerEscapes.mp4"),
            &format!("{BUCKET}/images/ForBiggerEscapes.jpg"),
            "Sample Video 4",
        ),
        Video::seeded(
            "5",
            "j2K5bG8tV6oH5",
            &format!("{BUCKET}/ForBiggerFun.mp4"),
            &format!("{BUCKET}/images/ForBiggerFun.jpg"),
            "Sample Video 5",
        ),
    ]
}

/// The in-memory mock data source.
///
/// Pages advance an internal cursor; once the catalog is exhausted further
/// pages are empty and no page is ever returned twice. Every read sleeps a
/// fixed artificial delay to emulate network latency; tests construct the
/// catalog with [`VideoCatalog::with_latency`] and zero delays.
pub struct VideoCatalog {
    videos: Vec<Video>,
    page: Mutex<usize>,
    initial_delay: Duration,
    page_delay: Duration,
}

impl VideoCatalog {
    pub fn new() -> Self {
        Self::with_latency(INITIAL_FETCH_DELAY, PAGE_FETCH_DELAY)
    }

    pub fn with_latency(initial_delay: Duration, page_delay: Duration) -> Self {
        Self {
            videos: seed_videos(),
            page: Mutex::new(0),
            initial_delay,
            page_delay,
        }
    }

    /// First page. Resets the pagination cursor.
    pub async fn initial_page(&self) -> Vec<Video> {
        tokio::time::sleep(self.initial_delay).await;
        *self.page.lock().unwrap() = 0;
        self.videos.iter().take(PAGE_SIZE).cloned().collect()
    }

    /// Next page; empty once the catalog is exhausted.
    pub async fn next_page(&self) -> Vec<Video> {
        tokio::time::sleep(self.page_delay).await;
        let start = {
            let mut page = self.page.lock().unwrap();
            *page += 1;
            *page * PAGE_SIZE
        };
        if start >= self.videos.len() {
            return Vec::new();
        }
        self.videos
            .iter()
            .skip(start)
            .take(PAGE_SIZE)
            .cloned()
            .collect()
    }

    /// The full catalog, used for deep-linked entry.
    pub async fn all_videos(&self) -> Vec<Video> {
        tokio::time::sleep(self.page_delay).await;
        self.videos.clone()
    }

    /// Look up one record by permanent id.
    pub async fn find_by_permanent_id(&self, permanent_id: &str) -> Option<Video> {
        tokio::time::sleep(self.page_delay).await;
        self.videos
            .iter()
            .find(|v| v.permanent_id == permanent_id)
            .cloned()
    }

    pub fn reset_pagination(&self) {
        *self.page.lock().unwrap() = 0;
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

impl Default for VideoCatalog {
    fn default() -> Self {
        Self::new()
    }
}
