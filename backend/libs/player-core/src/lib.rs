//! Client-side playback behaviors, host-independent
//!
//! The feed container, per-player state, tap-gesture disambiguation, shared
//! playback session, and the age-gate / install-prompt policies are all
//! expressed as plain state machines here. Hosts (a browser shell, a native
//! view, tests) drive them with events and execute the returned effects:
//! media side effects come back as [`player::MediaCommand`] values to run
//! fire-and-forget, persistence goes through the [`storage::KeyValueStore`]
//! seam, and "now" is always passed in as milliseconds.

pub mod feed;
pub mod gate;
pub mod gesture;
pub mod player;
pub mod session;
pub mod storage;

pub use feed::{FeedState, ObserveEffects};
pub use gate::{AgeGate, InstallPrompt};
pub use gesture::{TapAction, TapTracker, TapZone};
pub use player::{share_url, MediaCommand, PlayerState};
pub use session::PlaybackSession;
pub use storage::{KeyValueStore, MemoryStore};
