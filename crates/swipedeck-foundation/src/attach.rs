//! Attaching a swipe tracker to a host surface.
//!
//! [`attach`] wires pointer and touch listeners for one surface into a
//! shared [`SwipeTracker`]. Both input families feed the same session, so a
//! host that emits pointer and touch signals for one physical gesture still
//! produces a single `End` event: the first end signal closes the session
//! and the second finds it inactive.

use crate::handler::{dispatch, SwipeHandler};
use crate::host::{Host, Listener, ListenerKey};
use crate::input::{PointerPhase, RawInput, Signal};
use crate::settings::SwipeSettings;
use crate::swipe::{SwipeEvent, SwipeTracker};
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

type Registrations = SmallVec<[ListenerKey; 6]>;

/// Attach a swipe tracker with default settings.
///
/// If `selector` matches nothing, the returned handle is inert: nothing is
/// registered and detaching it does nothing.
pub fn attach<H, F>(host: &Rc<H>, selector: &str, handler: F) -> SwipeDetach
where
    H: Host + 'static,
    F: SwipeHandler + 'static,
{
    attach_with_settings(host, selector, SwipeSettings::default(), handler)
}

pub fn attach_with_settings<H, F>(
    host: &Rc<H>,
    selector: &str,
    settings: SwipeSettings,
    handler: F,
) -> SwipeDetach
where
    H: Host + 'static,
    F: SwipeHandler + 'static,
{
    let Some(element) = host.query_element(selector) else {
        log::debug!("swipe surface `{selector}` not found");
        return SwipeDetach::inert();
    };

    let surface = Rc::new(SwipeSurface {
        host: Rc::downgrade(host),
        element: element.clone(),
        tracker: RefCell::new(SwipeTracker::new(settings)),
        handler: RefCell::new(Box::new(handler) as Box<dyn SwipeHandler>),
        pending: RefCell::new(VecDeque::new()),
        detached: Cell::new(false),
    });

    let mut keys = Registrations::new();
    for signal in Signal::ALL {
        let listener: Listener = {
            let surface = surface.clone();
            Rc::new(move |input: &RawInput| surface.handle(input))
        };
        match host.add_listener(&element, signal, listener) {
            Ok(key) => keys.push(key),
            Err(err) => {
                log::warn!("cannot listen for {} on `{selector}`: {err}", signal.event_name());
                remove_all(&**host, &keys);
                return SwipeDetach::inert();
            }
        }
    }

    let host = host.clone();
    SwipeDetach::new(move || {
        surface.detached.set(true);
        surface.tracker.borrow_mut().reset();
        remove_all(&*host, &keys);
    })
}

fn remove_all<H: Host>(host: &H, keys: &[ListenerKey]) {
    for key in keys {
        if let Err(err) = host.remove_listener(*key) {
            log::debug!("ignoring listener removal failure: {err}");
        }
    }
}

struct SwipeSurface<H: Host> {
    host: Weak<H>,
    element: H::Element,
    tracker: RefCell<SwipeTracker>,
    handler: RefCell<Box<dyn SwipeHandler>>,
    /// Events raised while the handler is running, delivered in order once
    /// it returns.
    pending: RefCell<VecDeque<SwipeEvent>>,
    detached: Cell<bool>,
}

impl<H: Host> SwipeSurface<H> {
    fn handle(&self, input: &RawInput) {
        if self.detached.get() {
            return;
        }
        let x = input.resolve_x();
        match input.phase() {
            PointerPhase::Start => {
                let started = self.tracker.borrow_mut().press(x);
                if started {
                    self.capture(input);
                }
            }
            PointerPhase::Move => {
                let event = self.tracker.borrow_mut().drag(x);
                if let Some(event) = event {
                    self.emit(event);
                }
            }
            PointerPhase::End => {
                let width = self.host.upgrade().and_then(|host| host.viewport_width());
                // The session is already inactive when the handler runs.
                let event = self.tracker.borrow_mut().release(x, width);
                if let Some(event) = event {
                    self.emit(event);
                }
            }
        }
    }

    fn capture(&self, input: &RawInput) {
        let (Some(pointer_id), Some(host)) = (input.pointer_id, self.host.upgrade()) else {
            return;
        };
        if let Err(err) = host.capture_pointer(&self.element, pointer_id) {
            log::debug!("pointer capture for {pointer_id} failed: {err}");
        }
    }

    fn emit(&self, event: SwipeEvent) {
        self.pending.borrow_mut().push_back(event);
        let Ok(mut handler) = self.handler.try_borrow_mut() else {
            log::debug!("queueing re-entrant {event:?}");
            return;
        };
        loop {
            if self.detached.get() {
                self.pending.borrow_mut().clear();
                break;
            }
            let next = self.pending.borrow_mut().pop_front();
            let Some(event) = next else {
                break;
            };
            dispatch(&mut **handler, event);
        }
    }
}

/// Handle returned by [`attach`].
///
/// Listeners stay registered until [`detach`](Self::detach) is called;
/// dropping the handle does not remove them. Detaching is idempotent.
pub struct SwipeDetach {
    teardown: Cell<Option<Box<dyn FnOnce()>>>,
}

impl SwipeDetach {
    fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: Cell::new(Some(Box::new(teardown))),
        }
    }

    /// A handle with nothing to detach.
    pub fn inert() -> Self {
        Self {
            teardown: Cell::new(None),
        }
    }

    pub fn detach(&self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }

    pub fn is_attached(&self) -> bool {
        let teardown = self.teardown.take();
        let attached = teardown.is_some();
        self.teardown.set(teardown);
        attached
    }
}

impl fmt::Debug for SwipeDetach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeDetach")
            .field("attached", &self.is_attached())
            .finish()
    }
}
