//! Robot-style gesture driver for [`FakeHost`].
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use swipedeck_foundation::{attach, SwipeDirection};
//! use swipedeck_testing::{FakeHost, SwipeRecorder, SwipeRobot};
//!
//! let host = Rc::new(FakeHost::new());
//! host.add_element("#deck");
//! let recorder = SwipeRecorder::new();
//! let _detach = attach(&host, "#deck", recorder.handler());
//!
//! SwipeRobot::new(&host, "#deck").unwrap().pointer_swipe(500.0, 300.0);
//! assert_eq!(recorder.ends(), vec![SwipeDirection::Next]);
//! ```

use crate::fake_host::{FakeElement, FakeHost};
use swipedeck_foundation::{Host, RawInput, Signal};

/// Number of intermediate moves `*_swipe` helpers emit.
const SWIPE_STEPS: usize = 4;

pub struct SwipeRobot<'a> {
    host: &'a FakeHost,
    surface: FakeElement,
    pointer_id: i32,
}

impl<'a> SwipeRobot<'a> {
    /// Robot for the element matching `selector`, `None` if there is none.
    pub fn new(host: &'a FakeHost, selector: &str) -> Option<Self> {
        let surface = host.query_element(selector)?;
        Some(Self::for_element(host, surface))
    }

    pub fn for_element(host: &'a FakeHost, surface: FakeElement) -> Self {
        Self {
            host,
            surface,
            pointer_id: 1,
        }
    }

    pub fn with_pointer_id(mut self, pointer_id: i32) -> Self {
        self.pointer_id = pointer_id;
        self
    }

    pub fn surface(&self) -> FakeElement {
        self.surface
    }

    pub fn send(&self, input: RawInput) -> &Self {
        self.host.dispatch(self.surface, input);
        self
    }

    pub fn pointer_down(&self, x: f64) -> &Self {
        self.send(RawInput::pointer(Signal::PointerDown, x, self.pointer_id))
    }

    pub fn pointer_move(&self, x: f64) -> &Self {
        self.send(RawInput::pointer(Signal::PointerMove, x, self.pointer_id))
    }

    pub fn pointer_up(&self, x: f64) -> &Self {
        self.send(RawInput::pointer(Signal::PointerUp, x, self.pointer_id))
    }

    pub fn touch_start(&self, x: f64) -> &Self {
        self.send(RawInput::touch(Signal::TouchStart, &[x], &[x]))
    }

    pub fn touch_move(&self, x: f64) -> &Self {
        self.send(RawInput::touch(Signal::TouchMove, &[x], &[x]))
    }

    /// Lift the last contact at `x`: no active touches remain.
    pub fn touch_end(&self, x: f64) -> &Self {
        self.send(RawInput::touch(Signal::TouchEnd, &[], &[x]))
    }

    /// Down at `from`, evenly spaced moves, up at `to`.
    pub fn pointer_swipe(&self, from: f64, to: f64) -> &Self {
        self.pointer_down(from);
        for x in steps(from, to) {
            self.pointer_move(x);
        }
        self.pointer_up(to)
    }

    pub fn touch_swipe(&self, from: f64, to: f64) -> &Self {
        self.touch_start(from);
        for x in steps(from, to) {
            self.touch_move(x);
        }
        self.touch_end(to)
    }
}

fn steps(from: f64, to: f64) -> impl Iterator<Item = f64> {
    let step = (to - from) / SWIPE_STEPS as f64;
    (1..=SWIPE_STEPS).map(move |i| from + step * i as f64)
}
