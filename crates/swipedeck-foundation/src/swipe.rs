//! Horizontal swipe recognition.
//!
//! [`SwipeTracker`] is the session state machine behind
//! [`attach`](crate::attach). It knows nothing about hosts or handlers: it
//! takes resolved coordinates and returns the event to emit, if any.
//!
//! # Usage
//! ```
//! use swipedeck_foundation::{SwipeDirection, SwipeEvent, SwipeTracker};
//!
//! let mut tracker = SwipeTracker::default();
//! tracker.press(100.0);
//! assert_eq!(tracker.drag(140.0), Some(SwipeEvent::Move { dx: 40.0 }));
//! assert_eq!(
//!     tracker.release(260.0, Some(1000.0)),
//!     Some(SwipeEvent::End { direction: SwipeDirection::Previous })
//! );
//! ```

use crate::settings::SwipeSettings;

/// Outcome of a completed gesture.
///
/// The sign is inverted relative to the displacement: a rightward drag
/// reveals the previous item and reports `-1`.
#[repr(i8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Previous = -1,
    /// Below threshold. Callers must not navigate.
    None = 0,
    Next = 1,
}

impl SwipeDirection {
    /// Direction for a horizontal displacement against a positive threshold.
    pub fn classify(dx: f64, threshold: f64) -> Self {
        if dx > threshold {
            SwipeDirection::Previous
        } else if dx < -threshold {
            SwipeDirection::Next
        } else {
            SwipeDirection::None
        }
    }

    /// Tri-state code: `-1`, `0` or `1`.
    pub fn code(self) -> i8 {
        self as i8
    }

    pub fn is_navigation(self) -> bool {
        self != SwipeDirection::None
    }
}

impl From<SwipeDirection> for i8 {
    fn from(direction: SwipeDirection) -> Self {
        direction.code()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SwipeEvent {
    /// Displacement from the gesture start, for live feedback.
    Move { dx: f64 },
    /// Terminates the session.
    End { direction: SwipeDirection },
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SwipeSession {
    #[default]
    Inactive,
    Active { start_x: f64 },
}

impl SwipeSession {
    pub fn is_active(&self) -> bool {
        matches!(self, SwipeSession::Active { .. })
    }
}

/// Single-pointer swipe session state machine.
#[derive(Clone, Debug, Default)]
pub struct SwipeTracker {
    session: SwipeSession,
    settings: SwipeSettings,
}

impl SwipeTracker {
    pub fn new(settings: SwipeSettings) -> Self {
        Self {
            session: SwipeSession::Inactive,
            settings,
        }
    }

    pub fn session(&self) -> SwipeSession {
        self.session
    }

    pub fn settings(&self) -> &SwipeSettings {
        &self.settings
    }

    pub fn is_active(&self) -> bool {
        self.session.is_active()
    }

    /// Start a session at `x`.
    ///
    /// Returns `false` and leaves the session untouched if one is already
    /// active; only one contact is tracked at a time.
    pub fn press(&mut self, x: f64) -> bool {
        if self.session.is_active() {
            return false;
        }
        self.session = SwipeSession::Active { start_x: x };
        true
    }

    /// Displacement event for a move to `x`, `None` while inactive.
    pub fn drag(&mut self, x: f64) -> Option<SwipeEvent> {
        match self.session {
            SwipeSession::Inactive => None,
            SwipeSession::Active { start_x } => Some(SwipeEvent::Move { dx: x - start_x }),
        }
    }

    /// End the session at `x` and classify it.
    ///
    /// The threshold is derived from `viewport_width` as reported now, not
    /// at press time. The session is inactive again when this returns.
    pub fn release(&mut self, x: f64, viewport_width: Option<f64>) -> Option<SwipeEvent> {
        let SwipeSession::Active { start_x } = self.session else {
            return None;
        };
        let threshold = self.settings.threshold(viewport_width);
        self.session = SwipeSession::Inactive;
        Some(SwipeEvent::End {
            direction: SwipeDirection::classify(x - start_x, threshold),
        })
    }

    /// Abandon the current session without emitting anything.
    pub fn reset(&mut self) {
        self.session = SwipeSession::Inactive;
    }
}
