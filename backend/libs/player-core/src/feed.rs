//! Feed container: the ordered video list and its scroll-driven effects.

use std::collections::HashSet;

use video_catalog::Video;

use crate::session::PlaybackSession;
use crate::storage::KeyValueStore;

/// A tile is current once more than this fraction is inside the central
/// viewport band.
pub const CURRENT_VISIBILITY: f64 = 0.5;

/// Media sources preloaded ahead of the current tile.
pub const PRELOAD_AHEAD: usize = 2;

/// Next page is requested once the current tile is within this many tiles of
/// the end of the list.
pub const FETCH_THRESHOLD: usize = 3;

/// Effects the host must apply after a visibility change.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ObserveEffects {
    pub became_current: bool,
    /// Sources to preload (metadata only); each source appears at most once
    /// over the life of the feed.
    pub preload: Vec<String>,
    /// Start the next page fetch (subject to [`FeedState::begin_fetch`]).
    pub fetch_next_page: bool,
}

pub struct FeedState {
    videos: Vec<Video>,
    loading: bool,
    preloaded: HashSet<String>,
    history_suppressed: bool,
}

impl FeedState {
    pub fn new(initial: Vec<Video>) -> Self {
        Self {
            videos: initial,
            loading: false,
            preloaded: HashSet::new(),
            history_suppressed: false,
        }
    }

    /// Deep-linked entry: the full catalog positioned at a target permanent
    /// id (index 0 when the target is absent). URL rewriting stays suppressed
    /// until the initial scroll-and-observe sequence settles, so the browser
    /// history does not visibly jump during setup.
    pub fn deep_link(all: Vec<Video>, permanent_id: &str) -> (Self, usize) {
        let start = all
            .iter()
            .position(|v| v.permanent_id == permanent_id)
            .unwrap_or(0);
        let mut state = Self::new(all);
        state.history_suppressed = true;
        (state, start)
    }

    pub fn mark_scroll_settled(&mut self) {
        self.history_suppressed = false;
    }

    pub fn history_suppressed(&self) -> bool {
        self.history_suppressed
    }

    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Sources to preload when the feed first mounts (the first two tiles).
    pub fn initial_preload(&mut self) -> Vec<String> {
        let srcs: Vec<String> = self
            .videos
            .iter()
            .take(PRELOAD_AHEAD)
            .map(|v| v.src.clone())
            .collect();
        self.mark_preloaded(srcs)
    }

    /// A tile's visibility changed. Crossing [`CURRENT_VISIBILITY`] makes it
    /// current: the shared index updates, the next two sources are scheduled
    /// for preload, and a page fetch is requested near the end of the list.
    pub fn observe<S: KeyValueStore>(
        &mut self,
        session: &mut PlaybackSession<S>,
        index: usize,
        visible_fraction: f64,
    ) -> ObserveEffects {
        if index >= self.videos.len() || visible_fraction <= CURRENT_VISIBILITY {
            return ObserveEffects::default();
        }

        session.set_current_index(index);

        let upcoming: Vec<String> = self
            .videos
            .iter()
            .skip(index + 1)
            .take(PRELOAD_AHEAD)
            .map(|v| v.src.clone())
            .collect();

        ObserveEffects {
            became_current: true,
            preload: self.mark_preloaded(upcoming),
            fetch_next_page: index + FETCH_THRESHOLD >= self.videos.len() && !self.loading,
        }
    }

    /// Claim the fetch slot; false while another fetch is in flight.
    pub fn begin_fetch(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    /// Append a fetched page; returns the sources of the first two new videos
    /// for preloading.
    pub fn complete_fetch(&mut self, new_videos: Vec<Video>) -> Vec<String> {
        self.loading = false;
        let srcs: Vec<String> = new_videos
            .iter()
            .take(PRELOAD_AHEAD)
            .map(|v| v.src.clone())
            .collect();
        self.videos.extend(new_videos);
        self.mark_preloaded(srcs)
    }

    /// A fetch failed: release the slot, keep prior state unchanged.
    pub fn fetch_failed(&mut self) {
        tracing::error!("failed to load more videos");
        self.loading = false;
    }

    /// Natural end of a tile; yields the next index to scroll to.
    pub fn on_ended(&self, index: usize) -> Option<usize> {
        if index + 1 < self.videos.len() {
            Some(index + 1)
        } else {
            None
        }
    }

    fn mark_preloaded(&mut self, srcs: Vec<String>) -> Vec<String> {
        srcs.into_iter()
            .filter(|src| self.preloaded.insert(src.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn video(n: usize) -> Video {
        Video {
            id: n.to_string(),
            permanent_id: format!("permanentid{:02}", n),
            src: format!("https://cdn.example/v{n}.mp4"),
            poster: None,
            title: None,
        }
    }

    fn videos(count: usize) -> Vec<Video> {
        (1..=count).map(video).collect()
    }

    #[test]
    fn test_low_visibility_is_ignored() {
        let mut feed = FeedState::new(videos(5));
        let mut session = PlaybackSession::new(MemoryStore::new());
        let effects = feed.observe(&mut session, 2, 0.4);
        assert_eq!(effects, ObserveEffects::default());
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_becoming_current_updates_index_and_preloads() {
        let mut feed = FeedState::new(videos(6));
        let mut session = PlaybackSession::new(MemoryStore::new());

        let effects = feed.observe(&mut session, 1, 0.8);
        assert!(effects.became_current);
        assert_eq!(session.current_index(), 1);
        assert_eq!(
            effects.preload,
            vec![
                "https://cdn.example/v3.mp4".to_string(),
                "https://cdn.example/v4.mp4".to_string()
            ]
        );
        assert!(!effects.fetch_next_page);
    }

    #[test]
    fn test_sources_preload_once() {
        let mut feed = FeedState::new(videos(6));
        let mut session = PlaybackSession::new(MemoryStore::new());

        assert_eq!(feed.observe(&mut session, 1, 0.9).preload.len(), 2);
        assert!(feed.observe(&mut session, 1, 0.9).preload.is_empty());
    }

    #[test]
    fn test_fetch_requested_near_end_of_list() {
        let mut feed = FeedState::new(videos(6));
        let mut session = PlaybackSession::new(MemoryStore::new());

        assert!(!feed.observe(&mut session, 2, 0.9).fetch_next_page);
        assert!(feed.observe(&mut session, 3, 0.9).fetch_next_page);
        assert!(feed.observe(&mut session, 5, 0.9).fetch_next_page);
    }

    #[test]
    fn test_busy_flag_dedups_fetches() {
        let mut feed = FeedState::new(videos(4));
        let mut session = PlaybackSession::new(MemoryStore::new());

        assert!(feed.begin_fetch());
        assert!(!feed.begin_fetch());
        // While loading, observe stops asking for more.
        assert!(!feed.observe(&mut session, 3, 0.9).fetch_next_page);

        feed.complete_fetch(videos(4).into_iter().skip(2).collect());
        assert!(feed.begin_fetch());
    }

    #[test]
    fn test_fetch_failed_keeps_list_unchanged() {
        let mut feed = FeedState::new(videos(3));
        assert!(feed.begin_fetch());
        feed.fetch_failed();
        assert_eq!(feed.len(), 3);
        assert!(!feed.is_loading());
    }

    #[test]
    fn test_complete_fetch_appends_and_preloads_first_two() {
        let mut feed = FeedState::new(videos(3));
        feed.begin_fetch();
        let preload = feed.complete_fetch((4..=6).map(video).collect());
        assert_eq!(feed.len(), 6);
        assert_eq!(preload.len(), 2);
        assert_eq!(preload[0], "https://cdn.example/v4.mp4");
    }

    #[test]
    fn test_initial_preload_marks_first_two() {
        let mut feed = FeedState::new(videos(5));
        assert_eq!(feed.initial_preload().len(), 2);
        assert!(feed.initial_preload().is_empty());
    }

    #[test]
    fn test_on_ended_advances_until_last() {
        let feed = FeedState::new(videos(3));
        assert_eq!(feed.on_ended(0), Some(1));
        assert_eq!(feed.on_ended(2), None);
    }

    #[test]
    fn test_deep_link_positions_on_target() {
        let (feed, start) = FeedState::deep_link(videos(5), "permanentid04");
        assert_eq!(start, 3);
        assert!(feed.history_suppressed());
    }

    #[test]
    fn test_deep_link_unknown_target_starts_at_top() {
        let (mut feed, start) = FeedState::deep_link(videos(5), "permanentid99");
        assert_eq!(start, 0);
        feed.mark_scroll_settled();
        assert!(!feed.history_suppressed());
    }
}
