use std::cell::{Cell, RefCell};
use std::rc::Rc;
use swipedeck_foundation::{
    attach, attach_with_settings, swipe_handler_fn, HandlerError, RawInput, Signal, SwipeDetach,
    SwipeDirection, SwipeEvent, SwipeHandler, SwipeSettings,
};
use swipedeck_testing::{init_logging, FakeHost, SwipeRecorder, SwipeRobot};

fn deck() -> (Rc<FakeHost>, SwipeRecorder, SwipeDetach) {
    init_logging();
    let host = Rc::new(FakeHost::new());
    host.add_element("#deck");
    let recorder = SwipeRecorder::new();
    let detach = attach(&host, "#deck", recorder.handler());
    (host, recorder, detach)
}

#[test]
fn test_attach_registers_all_signals() {
    let (host, _recorder, detach) = deck();
    assert!(detach.is_attached());
    assert_eq!(host.listener_count(), 6);
    for signal in Signal::ALL {
        assert_eq!(host.listeners_for(signal), 1, "{signal:?}");
    }
}

#[test]
fn test_one_end_per_gesture_regardless_of_moves() {
    let (host, recorder, _detach) = deck();
    let robot = SwipeRobot::new(&host, "#deck").unwrap();

    for moves in [0, 1, 7] {
        recorder.clear();
        robot.pointer_down(100.0);
        for i in 0..moves {
            robot.pointer_move(100.0 + i as f64);
        }
        robot.pointer_up(100.0);
        assert_eq!(recorder.moves().len(), moves);
        assert_eq!(recorder.ends().len(), 1);
    }
}

#[test]
fn test_directions_for_reference_gestures() {
    let (host, recorder, _detach) = deck();
    let robot = SwipeRobot::new(&host, "#deck").unwrap();

    robot.pointer_down(100.0).pointer_up(260.0);
    robot.pointer_down(100.0).pointer_up(30.0);
    robot.pointer_down(100.0).pointer_up(-60.0);

    assert_eq!(
        recorder.ends(),
        vec![
            SwipeDirection::Previous,
            SwipeDirection::None,
            SwipeDirection::Next
        ]
    );
}

#[test]
fn test_move_reports_displacement() {
    let (host, recorder, _detach) = deck();
    SwipeRobot::new(&host, "#deck")
        .unwrap()
        .pointer_down(100.0)
        .pointer_move(140.0)
        .pointer_move(90.0);
    assert_eq!(recorder.moves(), vec![40.0, -10.0]);
    assert!(recorder.ends().is_empty());
}

#[test]
fn test_move_and_end_before_down_emit_nothing() {
    let (host, recorder, _detach) = deck();
    let robot = SwipeRobot::new(&host, "#deck").unwrap();
    for x in [-500.0, 0.0, 12.5, 900.0] {
        robot.pointer_move(x).pointer_up(x).touch_move(x).touch_end(x);
    }
    assert!(recorder.events().is_empty());
}

#[test]
fn test_detach_stops_events_and_is_idempotent() {
    let (host, recorder, detach) = deck();
    let robot = SwipeRobot::new(&host, "#deck").unwrap();

    detach.detach();
    assert!(!detach.is_attached());
    assert_eq!(host.listener_count(), 0);

    robot.pointer_swipe(100.0, 400.0).touch_swipe(400.0, 100.0);
    assert!(recorder.events().is_empty());

    detach.detach();
}

#[test]
fn test_detach_after_surface_removed() {
    let (host, recorder, detach) = deck();
    let robot = SwipeRobot::new(&host, "#deck").unwrap();
    robot.pointer_down(100.0);

    host.remove_element(robot.surface());
    detach.detach();
    detach.detach();

    assert_eq!(host.listener_count(), 0);
    robot.pointer_up(600.0);
    assert!(recorder.events().is_empty());
}

#[test]
fn test_failing_move_handler_does_not_block_end() {
    init_logging();
    let host = Rc::new(FakeHost::new());
    host.add_element("#deck");
    let recorder = SwipeRecorder::new().fail_on_move();
    let _detach = attach(&host, "#deck", recorder.handler());

    SwipeRobot::new(&host, "#deck")
        .unwrap()
        .pointer_swipe(100.0, 260.0);

    assert_eq!(recorder.moves().len(), 4);
    assert_eq!(recorder.ends(), vec![SwipeDirection::Previous]);
}

#[test]
fn test_failing_end_handler_leaves_tracker_usable() {
    init_logging();
    let host = Rc::new(FakeHost::new());
    host.add_element("#deck");
    let recorder = SwipeRecorder::new().fail_on_end();
    let _detach = attach(&host, "#deck", recorder.handler());
    let robot = SwipeRobot::new(&host, "#deck").unwrap();

    robot.pointer_swipe(500.0, 300.0);
    robot.pointer_swipe(300.0, 500.0);

    assert_eq!(
        recorder.ends(),
        vec![SwipeDirection::Next, SwipeDirection::Previous]
    );
}

#[test]
fn test_threshold_uses_width_at_release() {
    let (host, recorder, _detach) = deck();
    let robot = SwipeRobot::new(&host, "#deck").unwrap();

    // 160px clears 15% of 1000 but not 15% of 2000.
    robot.pointer_down(100.0);
    host.set_viewport_width(Some(2000.0));
    robot.pointer_up(260.0);

    robot.pointer_down(100.0);
    host.set_viewport_width(Some(1000.0));
    robot.pointer_up(260.0);

    assert_eq!(
        recorder.ends(),
        vec![SwipeDirection::None, SwipeDirection::Previous]
    );
}

#[test]
fn test_unreported_width_falls_back_to_unit_threshold() {
    let (host, recorder, _detach) = deck();
    host.set_viewport_width(None);
    SwipeRobot::new(&host, "#deck")
        .unwrap()
        .pointer_down(100.0)
        .pointer_up(101.0);
    assert_eq!(recorder.ends(), vec![SwipeDirection::Previous]);
}

#[test]
fn test_missing_surface_yields_inert_detach() {
    init_logging();
    let host = Rc::new(FakeHost::new());
    let recorder = SwipeRecorder::new();
    let detach = attach(&host, "#missing", recorder.handler());

    assert!(!detach.is_attached());
    assert_eq!(host.listener_count(), 0);
    detach.detach();
    detach.detach();

    let surface = host.add_element("#missing");
    SwipeRobot::for_element(&host, surface).pointer_swipe(0.0, 900.0);
    assert!(recorder.events().is_empty());
}

#[test]
fn test_unavailable_host_yields_inert_detach() {
    let host = Rc::new(FakeHost::unavailable());
    let detach = attach(&host, "#deck", swipe_handler_fn(|_| {}));
    assert!(!detach.is_attached());
    detach.detach();
}

#[test]
fn test_partial_registration_is_rolled_back() {
    init_logging();
    let host = Rc::new(FakeHost::new());
    host.add_element("#deck");
    host.set_listener_limit(Some(3));

    let detach = attach(&host, "#deck", swipe_handler_fn(|_| {}));
    assert!(!detach.is_attached());
    assert_eq!(host.listener_count(), 0);
}

#[test]
fn test_touch_family_drives_same_session() {
    let (host, recorder, _detach) = deck();
    SwipeRobot::new(&host, "#deck")
        .unwrap()
        .touch_start(600.0)
        .touch_move(500.0)
        .touch_end(400.0);
    assert_eq!(recorder.moves(), vec![-100.0]);
    assert_eq!(recorder.ends(), vec![SwipeDirection::Next]);
}

#[test]
fn test_pointer_and_touch_for_one_gesture_end_once() {
    let (host, recorder, _detach) = deck();
    let robot = SwipeRobot::new(&host, "#deck").unwrap();

    robot.pointer_down(100.0).touch_start(100.0);
    robot.pointer_move(200.0).touch_move(200.0);
    robot.pointer_up(300.0).touch_end(300.0);

    assert_eq!(recorder.moves(), vec![100.0, 100.0]);
    assert_eq!(recorder.ends(), vec![SwipeDirection::Previous]);
}

#[test]
fn test_down_captures_pointer_once_per_session() {
    let (host, _recorder, _detach) = deck();
    let robot = SwipeRobot::new(&host, "#deck").unwrap().with_pointer_id(7);

    robot.pointer_down(10.0).pointer_down(20.0).touch_start(30.0);
    assert_eq!(host.captured_pointers(), vec![(robot.surface(), 7)]);
}

#[test]
fn test_missing_pointer_capture_is_tolerated() {
    let (host, recorder, _detach) = deck();
    host.set_pointer_capture(false);
    SwipeRobot::new(&host, "#deck")
        .unwrap()
        .pointer_swipe(500.0, 100.0);
    assert!(host.captured_pointers().is_empty());
    assert_eq!(recorder.ends(), vec![SwipeDirection::Next]);
}

#[test]
fn test_end_outside_surface_reaches_window_listener() {
    let (host, recorder, _detach) = deck();
    let elsewhere = host.add_element("#elsewhere");
    let robot = SwipeRobot::new(&host, "#deck").unwrap();

    robot.pointer_down(100.0);
    SwipeRobot::for_element(&host, elsewhere)
        .pointer_move(900.0)
        .pointer_up(900.0);

    assert!(recorder.moves().is_empty());
    assert_eq!(recorder.ends(), vec![SwipeDirection::Previous]);
}

#[test]
fn test_session_is_inactive_when_end_handler_runs() {
    init_logging();
    let host = Rc::new(FakeHost::new());
    let surface = host.add_element("#deck");
    let recorder = SwipeRecorder::new();
    let pressed_again = Rc::new(Cell::new(false));

    let handler = {
        let host = host.clone();
        let recorder = recorder.clone();
        let pressed_again = pressed_again.clone();
        let mut inner = recorder.handler();
        move |event: SwipeEvent| -> Result<(), HandlerError> {
            inner.on_swipe(event)?;
            if let SwipeEvent::End { .. } = event {
                if !pressed_again.replace(true) {
                    // Only starts a session if the previous one is already closed.
                    host.dispatch(surface, RawInput::pointer(Signal::PointerDown, 5.0, 1));
                }
            }
            Ok(())
        }
    };
    let _detach = attach(&host, "#deck", handler);
    let robot = SwipeRobot::for_element(&host, surface);
    robot.pointer_down(100.0).pointer_up(120.0);
    robot.pointer_up(400.0);

    assert_eq!(
        recorder.ends(),
        vec![SwipeDirection::None, SwipeDirection::Previous]
    );
}

#[test]
fn test_gesture_started_from_end_handler_reports_its_own_end() {
    init_logging();
    let host = Rc::new(FakeHost::new());
    let surface = host.add_element("#deck");
    let recorder = SwipeRecorder::new();
    let replayed = Rc::new(Cell::new(false));

    let handler = {
        let host = host.clone();
        let replayed = replayed.clone();
        let mut inner = recorder.handler();
        move |event: SwipeEvent| -> Result<(), HandlerError> {
            inner.on_swipe(event)?;
            if let SwipeEvent::End { .. } = event {
                if !replayed.replace(true) {
                    host.dispatch(surface, RawInput::pointer(Signal::PointerDown, 100.0, 2));
                    host.dispatch(surface, RawInput::pointer(Signal::PointerUp, 400.0, 2));
                }
            }
            Ok(())
        }
    };
    let _detach = attach(&host, "#deck", handler);
    let robot = SwipeRobot::for_element(&host, surface);
    robot.pointer_down(100.0).pointer_up(120.0);

    assert_eq!(
        recorder.ends(),
        vec![SwipeDirection::None, SwipeDirection::Previous]
    );

    // The tracker is idle again and keeps working normally.
    robot.pointer_down(400.0).pointer_up(100.0);
    assert_eq!(recorder.ends().last(), Some(&SwipeDirection::Next));
}

#[test]
fn test_handler_may_detach_itself() {
    init_logging();
    let host = Rc::new(FakeHost::new());
    host.add_element("#deck");
    let slot: Rc<RefCell<Option<SwipeDetach>>> = Rc::new(RefCell::new(None));
    let ends = Rc::new(RefCell::new(0));

    let handler = {
        let slot = slot.clone();
        let ends = ends.clone();
        swipe_handler_fn(move |event| {
            if let SwipeEvent::End { .. } = event {
                *ends.borrow_mut() += 1;
                if let Some(detach) = slot.borrow().as_ref() {
                    detach.detach();
                }
            }
        })
    };
    *slot.borrow_mut() = Some(attach(&host, "#deck", handler));

    let robot = SwipeRobot::new(&host, "#deck").unwrap();
    robot.pointer_swipe(0.0, 500.0).pointer_swipe(0.0, 500.0);

    assert_eq!(*ends.borrow(), 1);
    assert_eq!(host.listener_count(), 0);
}

#[test]
fn test_custom_settings_change_sensitivity() {
    init_logging();
    let host = Rc::new(FakeHost::new());
    host.add_element("#deck");
    let recorder = SwipeRecorder::new();
    let settings = SwipeSettings::new().with_threshold_fraction(0.05);
    let _detach = attach_with_settings(&host, "#deck", settings, recorder.handler());

    SwipeRobot::new(&host, "#deck")
        .unwrap()
        .pointer_down(100.0)
        .pointer_up(160.0);
    assert_eq!(recorder.ends(), vec![SwipeDirection::Previous]);
}
