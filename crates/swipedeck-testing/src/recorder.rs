//! Records swipe events delivered to a handler.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use swipedeck_foundation::{HandlerError, SwipeDirection, SwipeEvent, SwipeHandler};

/// Shared log of the events a tracker emitted.
///
/// Clone it into the handler with [`SwipeRecorder::handler`] and inspect it
/// from the test afterwards.
#[derive(Clone, Default)]
pub struct SwipeRecorder {
    events: Rc<RefCell<Vec<SwipeEvent>>>,
    fail_moves: Rc<Cell<bool>>,
    fail_ends: Rc<Cell<bool>>,
}

impl SwipeRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the handler return an error for every move event it records.
    pub fn fail_on_move(self) -> Self {
        self.fail_moves.set(true);
        self
    }

    /// Make the handler return an error for every end event it records.
    pub fn fail_on_end(self) -> Self {
        self.fail_ends.set(true);
        self
    }

    pub fn handler(&self) -> impl SwipeHandler + 'static {
        let recorder = self.clone();
        move |event: SwipeEvent| -> Result<(), HandlerError> {
            recorder.events.borrow_mut().push(event);
            match event {
                SwipeEvent::Move { .. } if recorder.fail_moves.get() => {
                    Err("render failed".into())
                }
                SwipeEvent::End { .. } if recorder.fail_ends.get() => {
                    Err("navigation failed".into())
                }
                _ => Ok(()),
            }
        }
    }

    pub fn events(&self) -> Vec<SwipeEvent> {
        self.events.borrow().clone()
    }

    pub fn moves(&self) -> Vec<f64> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                SwipeEvent::Move { dx } => Some(*dx),
                SwipeEvent::End { .. } => None,
            })
            .collect()
    }

    pub fn ends(&self) -> Vec<SwipeDirection> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                SwipeEvent::End { direction } => Some(*direction),
                SwipeEvent::Move { .. } => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}
