mod analytics_service;
mod security_service;
mod upload_service;
mod video_service;

pub use analytics_service::{
    ActivityEntry, AnalyticsService, DashboardStats, TrendingVideo, VideoStat,
};
pub use security_service::SecurityService;
pub use upload_service::UploadQueue;
pub use video_service::VideoStore;
