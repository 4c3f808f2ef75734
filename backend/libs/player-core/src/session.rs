//! Shared playback state: the mute flag and the currently visible index.
//!
//! One session instance is shared by reference across the feed and its
//! players. The mute flag persists across loads; the current index is owned
//! by the feed container alone (single-writer).

use crate::storage::KeyValueStore;

pub const MUTE_KEY: &str = "video-muted";

pub struct PlaybackSession<S: KeyValueStore> {
    store: S,
    muted: bool,
    current_index: usize,
}

impl<S: KeyValueStore> PlaybackSession<S> {
    /// Restores the persisted mute flag, defaulting to unmuted.
    pub fn new(store: S) -> Self {
        let muted = store.get(MUTE_KEY).as_deref() == Some("true");
        Self {
            store,
            muted,
            current_index: 0,
        }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Flip and persist the mute flag; returns the new value so the host can
    /// apply it to the active media element immediately.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.store.set(MUTE_KEY, if self.muted { "true" } else { "false" });
        self.muted
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub(crate) fn set_current_index(&mut self, index: usize) {
        self.current_index = index;
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_defaults_to_unmuted() {
        let session = PlaybackSession::new(MemoryStore::new());
        assert!(!session.is_muted());
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_toggle_mute_persists() {
        let mut session = PlaybackSession::new(MemoryStore::new());
        assert!(session.toggle_mute());

        let store = session.into_store();
        let restored = PlaybackSession::new(store);
        assert!(restored.is_muted());
    }

    #[test]
    fn test_double_toggle_round_trips() {
        let mut session = PlaybackSession::new(MemoryStore::new());
        session.toggle_mute();
        assert!(!session.toggle_mute());

        let restored = PlaybackSession::new(session.into_store());
        assert!(!restored.is_muted());
    }
}
