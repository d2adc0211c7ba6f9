//! Shared gesture constants for swipe recognition.
//!
//! Values are fractions of, or fallbacks for, the viewport width in CSS
//! pixels as reported by the host at gesture end.

/// Fraction of the viewport width a release must travel to count as a swipe.
///
/// A release inside `[-threshold, threshold]` yields [`SwipeDirection::None`].
///
/// [`SwipeDirection::None`]: crate::SwipeDirection::None
pub const SWIPE_THRESHOLD_FRACTION: f64 = 0.15;

/// Width used when the host reports no (or a zero) viewport width.
///
/// Keeps the threshold positive so a still release never counts as a swipe.
pub const FALLBACK_VIEWPORT_WIDTH: f64 = 1.0;

/// Coordinate used when an input carries neither a pointer nor a touch position.
pub const DEFAULT_COORDINATE: f64 = 0.0;
