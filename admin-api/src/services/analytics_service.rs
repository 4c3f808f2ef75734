//! Analytics service - dashboard and trending figures.
//!
//! Everything here is mock data; no view events are collected anywhere in the
//! system, so the figures are fixed at the values the dashboard has always
//! shown.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub total_views: i64,
    pub total_views_today: i64,
    pub active_users: i64,
    pub avg_session_duration_secs: i64,
    pub top_videos: Vec<VideoStat>,
    pub recent_activity: Vec<ActivityEntry>,
}

#[derive(Debug, Serialize)]
pub struct VideoStat {
    pub id: String,
    pub title: String,
    pub views: i64,
    pub views_today: i64,
    pub views_change: f64,
    pub avg_watch_time: f64,
}

#[derive(Debug, Serialize)]
pub struct ActivityEntry {
    pub time: String,
    pub action: String,
    pub details: String,
}

#[derive(Debug, Serialize)]
pub struct TrendingVideo {
    pub id: String,
    pub title: String,
    pub views: i64,
    pub views_change: f64,
    pub shares: i64,
    pub avg_watch_time: f64,
    pub trending_rank: u32,
    pub previous_rank: u32,
}

pub struct AnalyticsService;

impl AnalyticsService {
    /// Dashboard statistics.
    pub fn dashboard_stats() -> DashboardStats {
        DashboardStats {
            total_views: 125_847,
            total_views_today: 8_432,
            active_users: 342,
            avg_session_duration_secs: 485,
            top_videos: vec![
                VideoStat {
                    id: "1".into(),
                    title: "Sample Video 1".into(),
                    views: 45_821,
                    views_today: 2_341,
                    views_change: 15.2,
                    avg_watch_time: 0.85,
                },
                VideoStat {
                    id: "2".into(),
                    title: "Sample Video 2".into(),
                    views: 38_294,
                    views_today: 1_892,
                    views_change: -5.3,
                    avg_watch_time: 0.72,
                },
                VideoStat {
                    id: "3".into(),
                    title: "Sample Video 3".into(),
                    views: 29_473,
                    views_today: 1_576,
                    views_change: 8.7,
                    avg_watch_time: 0.91,
                },
                VideoStat {
                    id: "4".into(),
                    title: "Sample Video 4".into(),
                    views: 24_918,
                    views_today: 1_423,
                    views_change: 12.1,
                    avg_watch_time: 0.68,
                },
                VideoStat {
                    id: "5".into(),
                    title: "Sample Video 5".into(),
                    views: 18_247,
                    views_today: 892,
                    views_change: -2.8,
                    avg_watch_time: 0.79,
                },
            ],
            recent_activity: vec![
                ActivityEntry {
                    time: "2 min ago".into(),
                    action: "Video viewed".into(),
                    details: "Sample Video 1".into(),
                },
                ActivityEntry {
                    time: "5 min ago".into(),
                    action: "New user".into(),
                    details: "User from United States".into(),
                },
                ActivityEntry {
                    time: "8 min ago".into(),
                    action: "Video shared".into(),
                    details: "Sample Video 3".into(),
                },
                ActivityEntry {
                    time: "12 min ago".into(),
                    action: "Video viewed".into(),
                    details: "Sample Video 2".into(),
                },
                ActivityEntry {
                    time: "15 min ago".into(),
                    action: "Session started".into(),
                    details: "5 new sessions".into(),
                },
            ],
        }
    }

    /// Trending table with rank movement.
    pub fn trending() -> Vec<TrendingVideo> {
        vec![
            TrendingVideo {
                id: "1".into(),
                title: "Trending Video 1".into(),
                views: 125_432,
                views_change: 45.2,
                shares: 3_421,
                avg_watch_time: 0.92,
                trending_rank: 1,
                previous_rank: 3,
            },
            TrendingVideo {
                id: "2".into(),
                title: "Viral Video 2".into(),
                views: 98_234,
                views_change: 38.7,
                shares: 2_893,
                avg_watch_time: 0.88,
                trending_rank: 2,
                previous_rank: 5,
            },
            TrendingVideo {
                id: "3".into(),
                title: "Popular Video 3".into(),
                views: 87_654,
                views_change: -12.3,
                shares: 2_145,
                avg_watch_time: 0.76,
                trending_rank: 3,
                previous_rank: 1,
            },
            TrendingVideo {
                id: "4".into(),
                title: "Rising Video 4".into(),
                views: 76_543,
                views_change: 28.9,
                shares: 1_876,
                avg_watch_time: 0.84,
                trending_rank: 4,
                previous_rank: 8,
            },
            TrendingVideo {
                id: "5".into(),
                title: "Hot Video 5".into(),
                views: 65_432,
                views_change: 15.4,
                shares: 1_543,
                avg_watch_time: 0.79,
                trending_rank: 5,
                previous_rank: 6,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_stats_shape() {
        let stats = AnalyticsService::dashboard_stats();
        assert_eq!(stats.top_videos.len(), 5);
        assert_eq!(stats.recent_activity.len(), 5);
        assert_eq!(stats.total_views, 125_847);
    }

    #[test]
    fn test_trending_ranks_are_sequential() {
        let trending = AnalyticsService::trending();
        let ranks: Vec<u32> = trending.iter().map(|t| t.trending_rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
    }
}
