//! Tap-gesture disambiguation.
//!
//! One deterministic machine: `Idle → Pending → resolved`. A tap arms a
//! pending single tap with a single deadline; a second tap before the
//! deadline resolves a double tap (skip in the outer thirds of the frame),
//! the deadline passing resolves the single tap (play/pause).

/// Window within which a second tap counts as a double tap.
pub const DOUBLE_TAP_WINDOW_MS: u64 = 300;

const LEFT_ZONE: f64 = 0.3;
const RIGHT_ZONE: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapZone {
    Left,
    Center,
    Right,
}

impl TapZone {
    /// Classify a horizontal position given as a fraction of the frame width.
    pub fn from_fraction(x: f64) -> Self {
        if x < LEFT_ZONE {
            TapZone::Left
        } else if x > RIGHT_ZONE {
            TapZone::Right
        } else {
            TapZone::Center
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapAction {
    TogglePlayPause,
    SkipBack,
    SkipForward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TapState {
    Idle,
    Pending { deadline_ms: u64 },
}

#[derive(Debug)]
pub struct TapTracker {
    state: TapState,
}

impl TapTracker {
    pub fn new() -> Self {
        Self {
            state: TapState::Idle,
        }
    }

    /// Feed a tap at `x_fraction` (0.0 = left edge, 1.0 = right edge).
    ///
    /// Returns the resolved action, if this tap resolved one. A double tap in
    /// the center zone resolves to nothing. The zone of the second tap
    /// decides the skip direction.
    pub fn on_tap(&mut self, x_fraction: f64, now_ms: u64) -> Option<TapAction> {
        let zone = TapZone::from_fraction(x_fraction);
        match self.state {
            TapState::Idle => {
                self.state = TapState::Pending {
                    deadline_ms: now_ms + DOUBLE_TAP_WINDOW_MS,
                };
                None
            }
            TapState::Pending { deadline_ms } if now_ms >= deadline_ms => {
                // The pending single tap expired unpolled: resolve it now and
                // arm this tap as a new pending single.
                self.state = TapState::Pending {
                    deadline_ms: now_ms + DOUBLE_TAP_WINDOW_MS,
                };
                Some(TapAction::TogglePlayPause)
            }
            TapState::Pending { .. } => {
                self.state = TapState::Idle;
                match zone {
                    TapZone::Left => Some(TapAction::SkipBack),
                    TapZone::Right => Some(TapAction::SkipForward),
                    TapZone::Center => None,
                }
            }
        }
    }

    /// Resolve the pending single tap once its deadline has passed.
    pub fn poll(&mut self, now_ms: u64) -> Option<TapAction> {
        if let TapState::Pending { deadline_ms } = self.state {
            if now_ms >= deadline_ms {
                self.state = TapState::Idle;
                return Some(TapAction::TogglePlayPause);
            }
        }
        None
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, TapState::Pending { .. })
    }
}

impl Default for TapTracker {
    fn default() -> Self {
        Self::new()
    }
}
