use crate::settings::SwipeSettings;
use crate::swipe::{SwipeDirection, SwipeEvent, SwipeSession, SwipeTracker};

fn end(direction: SwipeDirection) -> Option<SwipeEvent> {
    Some(SwipeEvent::End { direction })
}

#[test]
fn test_release_classifies_against_fifteen_percent_threshold() {
    let cases = [
        (260.0, SwipeDirection::Previous),
        (30.0, SwipeDirection::None),
        (-60.0, SwipeDirection::Next),
    ];
    for (release_x, expected) in cases {
        let mut tracker = SwipeTracker::default();
        assert!(tracker.press(100.0));
        assert_eq!(
            tracker.release(release_x, Some(1000.0)),
            end(expected),
            "release at {release_x}"
        );
    }
}

#[test]
fn test_threshold_boundary_is_exclusive() {
    let mut tracker = SwipeTracker::default();
    let threshold = tracker.settings().threshold(Some(1000.0));
    tracker.press(0.0);
    // dx == threshold is not a swipe
    assert_eq!(tracker.release(threshold, Some(1000.0)), end(SwipeDirection::None));

    tracker.press(0.0);
    assert_eq!(tracker.release(-threshold, Some(1000.0)), end(SwipeDirection::None));
}

#[test]
fn test_drag_reports_displacement_from_start() {
    let mut tracker = SwipeTracker::default();
    tracker.press(100.0);
    assert_eq!(tracker.drag(140.0), Some(SwipeEvent::Move { dx: 40.0 }));
    assert_eq!(tracker.drag(70.0), Some(SwipeEvent::Move { dx: -30.0 }));
    assert_eq!(tracker.session(), SwipeSession::Active { start_x: 100.0 });
}

#[test]
fn test_drag_and_release_without_press_are_ignored() {
    let mut tracker = SwipeTracker::default();
    assert_eq!(tracker.drag(500.0), None);
    assert_eq!(tracker.release(500.0, Some(1000.0)), None);
    assert!(!tracker.is_active());
}

#[test]
fn test_release_ends_session() {
    let mut tracker = SwipeTracker::default();
    tracker.press(10.0);
    assert!(tracker.release(10.0, None).is_some());
    assert_eq!(tracker.session(), SwipeSession::Inactive);
    assert_eq!(tracker.release(10.0, None), None);
    assert_eq!(tracker.drag(20.0), None);
}

#[test]
fn test_second_press_keeps_original_start() {
    let mut tracker = SwipeTracker::default();
    assert!(tracker.press(100.0));
    assert!(!tracker.press(400.0));
    assert_eq!(tracker.drag(120.0), Some(SwipeEvent::Move { dx: 20.0 }));
}

#[test]
fn test_unreported_width_uses_unit_fallback() {
    let mut tracker = SwipeTracker::default();
    tracker.press(0.0);
    // threshold 0.15
    assert_eq!(tracker.release(1.0, None), end(SwipeDirection::Previous));

    tracker.press(0.0);
    assert_eq!(tracker.release(0.1, Some(0.0)), end(SwipeDirection::None));

    tracker.press(0.0);
    assert_eq!(tracker.release(0.0, None), end(SwipeDirection::None));
}

#[test]
fn test_custom_threshold_fraction() {
    let settings = SwipeSettings::new().with_threshold_fraction(0.5);
    let mut tracker = SwipeTracker::new(settings);
    tracker.press(100.0);
    assert_eq!(tracker.release(260.0, Some(1000.0)), end(SwipeDirection::None));
}

#[test]
fn test_reset_abandons_session_silently() {
    let mut tracker = SwipeTracker::default();
    tracker.press(100.0);
    tracker.reset();
    assert_eq!(tracker.release(900.0, Some(1000.0)), None);
}

#[test]
fn test_direction_codes() {
    assert_eq!(SwipeDirection::Previous.code(), -1);
    assert_eq!(SwipeDirection::None.code(), 0);
    assert_eq!(i8::from(SwipeDirection::Next), 1);
    assert!(!SwipeDirection::None.is_navigation());
    assert!(SwipeDirection::Next.is_navigation());
}
