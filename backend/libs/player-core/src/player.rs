//! Per-player state over one media element.
//!
//! The player never touches the element directly: transitions return
//! [`MediaCommand`] values the host executes fire-and-forget (rejected play
//! promises are swallowed, per the autoplay policy).

/// Seconds skipped by a double tap.
pub const SKIP_SECONDS: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaCommand {
    Play,
    Pause,
    Seek(f64),
    SetMuted(bool),
}

#[derive(Debug, Default)]
pub struct PlayerState {
    current_time: f64,
    duration: f64,
    playing: bool,
    dragging: bool,
}

impl PlayerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The tile became the current one: apply the shared mute state and play.
    pub fn activate(&mut self, muted: bool) -> [MediaCommand; 2] {
        self.playing = true;
        [MediaCommand::SetMuted(muted), MediaCommand::Play]
    }

    /// The tile scrolled away: pause and rewind to the start.
    pub fn deactivate(&mut self) -> [MediaCommand; 2] {
        self.playing = false;
        self.current_time = 0.0;
        [MediaCommand::Pause, MediaCommand::Seek(0.0)]
    }

    /// Metadata arrived; the element's mute flag is re-applied because the
    /// element may have been recycled since `activate`.
    pub fn on_loaded_metadata(&mut self, duration: f64, muted: bool) -> MediaCommand {
        self.duration = duration;
        MediaCommand::SetMuted(muted)
    }

    /// Position report from the element; ignored mid-drag so the handle does
    /// not fight the user's finger.
    pub fn on_time_update(&mut self, time: f64) {
        if !self.dragging {
            self.current_time = time;
        }
    }

    pub fn on_play(&mut self) {
        self.playing = true;
    }

    pub fn on_pause(&mut self) {
        self.playing = false;
    }

    /// Natural end. Returns true: completion is reported upward so the feed
    /// advances.
    pub fn on_ended(&mut self) -> bool {
        self.playing = false;
        true
    }

    pub fn toggle_play_pause(&self) -> MediaCommand {
        if self.playing {
            MediaCommand::Pause
        } else {
            MediaCommand::Play
        }
    }

    /// Relative skip, clamped to `[0, duration]`.
    pub fn skip(&mut self, seconds: f64) -> MediaCommand {
        let target = (self.current_time + seconds).clamp(0.0, self.duration);
        self.current_time = target;
        MediaCommand::Seek(target)
    }

    /// Start dragging the progress bar. No-op before metadata arrives.
    pub fn drag_start(&mut self, fraction: f64) -> Option<MediaCommand> {
        if self.duration <= 0.0 {
            return None;
        }
        self.dragging = true;
        Some(self.seek_to_fraction(fraction))
    }

    pub fn drag_move(&mut self, fraction: f64) -> Option<MediaCommand> {
        if !self.dragging {
            return None;
        }
        Some(self.seek_to_fraction(fraction))
    }

    /// Release the drag; position updates from the element resume.
    pub fn drag_end(&mut self) {
        self.dragging = false;
    }

    pub fn progress_percent(&self) -> f64 {
        if self.duration > 0.0 {
            (self.current_time / self.duration) * 100.0
        } else {
            0.0
        }
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn seek_to_fraction(&mut self, fraction: f64) -> MediaCommand {
        let target = fraction.clamp(0.0, 1.0) * self.duration;
        self.current_time = target;
        MediaCommand::Seek(target)
    }
}

/// Deep link for the share sheet / clipboard fallback.
pub fn share_url(origin: &str, permanent_id: &str) -> String {
    format!("{}/p/{}", origin.trim_end_matches('/'), permanent_id)
}
