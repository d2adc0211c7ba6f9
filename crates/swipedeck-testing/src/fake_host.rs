//! In-memory [`Host`] for deterministic tests.
//!
//! `FakeHost` models just enough of a browser document to exercise the
//! foundation crate: a handful of elements addressed by selector, a
//! location/history pair, a string store, and a listener registry that tests
//! drive through [`FakeHost::dispatch`].
//!
//! # Example
//!
//! ```
//! use swipedeck_foundation::{dom, RouteSettings};
//! use swipedeck_testing::FakeHost;
//!
//! let host = FakeHost::new();
//! host.set_path("/r/3");
//! assert_eq!(dom::current_path(&host, &RouteSettings::default()), "/r/3");
//! ```

use rustc_hash::FxHashMap;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use swipedeck_foundation::{
    Host, HostError, Listener, ListenerKey, RawInput, Signal, SignalTarget, StyleProperty,
};

/// Handle to an element of a [`FakeHost`] document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FakeElement(usize);

#[derive(Debug, Default)]
struct ElementState {
    selector: String,
    attached: bool,
    classes: Vec<String>,
    styles: FxHashMap<StyleProperty, String>,
    scroll_top: f64,
}

struct Registration {
    element: FakeElement,
    signal: Signal,
    listener: Listener,
}

struct FakeState {
    path: String,
    history: Vec<String>,
    storage: FxHashMap<String, String>,
    storage_available: bool,
    viewport_width: Option<f64>,
    elements: Vec<ElementState>,
    listeners: BTreeMap<ListenerKey, Registration>,
    listener_limit: Option<usize>,
    pointer_capture: bool,
    captures: Vec<(FakeElement, i32)>,
}

pub struct FakeHost {
    available: bool,
    state: RefCell<FakeState>,
    next_key: Cell<u64>,
}

const ROOT: FakeElement = FakeElement(0);
const BODY: FakeElement = FakeElement(1);

impl FakeHost {
    /// A host with `html` and `body` elements, path `/`, and a viewport of
    /// 1000 CSS pixels.
    pub fn new() -> Self {
        let element = |selector: &str| ElementState {
            selector: selector.into(),
            attached: true,
            ..Default::default()
        };
        Self {
            available: true,
            state: RefCell::new(FakeState {
                path: "/".into(),
                history: Vec::new(),
                storage: FxHashMap::default(),
                storage_available: true,
                viewport_width: Some(1000.0),
                elements: vec![element("html"), element("body")],
                listeners: BTreeMap::new(),
                listener_limit: None,
                pointer_capture: true,
                captures: Vec::new(),
            }),
            next_key: Cell::new(0),
        }
    }

    /// A host standing in for a non-browser context: every API is missing.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    pub fn with_viewport_width(self, width: Option<f64>) -> Self {
        self.set_viewport_width(width);
        self
    }

    pub fn set_viewport_width(&self, width: Option<f64>) {
        self.state.borrow_mut().viewport_width = width;
    }

    pub fn set_path(&self, path: &str) {
        self.state.borrow_mut().path = path.into();
    }

    /// URLs passed to `replace_history`, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.state.borrow().history.clone()
    }

    pub fn set_storage_available(&self, available: bool) {
        self.state.borrow_mut().storage_available = available;
    }

    pub fn stored(&self, key: &str) -> Option<String> {
        self.state.borrow().storage.get(key).cloned()
    }

    /// Disable pointer capture, as on hosts without the API.
    pub fn set_pointer_capture(&self, supported: bool) {
        self.state.borrow_mut().pointer_capture = supported;
    }

    /// Reject `add_listener` once `limit` registrations exist.
    pub fn set_listener_limit(&self, limit: Option<usize>) {
        self.state.borrow_mut().listener_limit = limit;
    }

    /// Add an element reachable through `selector`.
    pub fn add_element(&self, selector: &str) -> FakeElement {
        let mut state = self.state.borrow_mut();
        state.elements.push(ElementState {
            selector: selector.into(),
            attached: true,
            ..Default::default()
        });
        FakeElement(state.elements.len() - 1)
    }

    /// Detach an element from the document. Later host calls targeting it
    /// fail with [`HostError::ElementMissing`].
    pub fn remove_element(&self, element: FakeElement) {
        if let Some(state) = self.state.borrow_mut().elements.get_mut(element.0) {
            state.attached = false;
        }
    }

    pub fn root(&self) -> FakeElement {
        ROOT
    }

    pub fn body(&self) -> FakeElement {
        BODY
    }

    pub fn style(&self, element: FakeElement, property: StyleProperty) -> Option<String> {
        let state = self.state.borrow();
        state.elements.get(element.0)?.styles.get(&property).cloned()
    }

    pub fn has_class(&self, element: FakeElement, class: &str) -> bool {
        self.state
            .borrow()
            .elements
            .get(element.0)
            .is_some_and(|e| e.classes.iter().any(|c| c == class))
    }

    pub fn set_scroll_top(&self, element: FakeElement, offset: f64) {
        if let Some(state) = self.state.borrow_mut().elements.get_mut(element.0) {
            state.scroll_top = offset;
        }
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    pub fn listeners_for(&self, signal: Signal) -> usize {
        self.state
            .borrow()
            .listeners
            .values()
            .filter(|r| r.signal == signal)
            .count()
    }

    pub fn captured_pointers(&self) -> Vec<(FakeElement, i32)> {
        self.state.borrow().captures.clone()
    }

    /// Deliver `input` the way a browser would: surface signals reach
    /// listeners on `target`, end signals reach every window listener.
    ///
    /// Listeners run after the registry borrow is released, so they may
    /// add or remove registrations.
    pub fn dispatch(&self, target: FakeElement, input: RawInput) {
        let listeners: Vec<Listener> = {
            let state = self.state.borrow();
            state
                .listeners
                .values()
                .filter(|r| r.signal == input.signal)
                .filter(|r| match r.signal.target() {
                    SignalTarget::Surface => r.element == target,
                    SignalTarget::Window => true,
                })
                .map(|r| r.listener.clone())
                .collect()
        };
        log::debug!("{:?} reaches {} listener(s)", input.signal, listeners.len());
        for listener in listeners {
            listener(&input);
        }
    }

    fn ensure_available(&self, api: &'static str) -> Result<(), HostError> {
        if self.available {
            Ok(())
        } else {
            Err(HostError::Unavailable { api })
        }
    }

    fn with_element<R>(
        &self,
        element: &FakeElement,
        f: impl FnOnce(&mut ElementState) -> R,
    ) -> Result<R, HostError> {
        self.ensure_available("document")?;
        let mut state = self.state.borrow_mut();
        match state.elements.get_mut(element.0) {
            Some(e) if e.attached => Ok(f(e)),
            _ => Err(HostError::ElementMissing),
        }
    }
}

impl Default for FakeHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for FakeHost {
    type Element = FakeElement;

    fn current_path(&self) -> Option<String> {
        self.available.then(|| self.state.borrow().path.clone())
    }

    fn replace_history(&self, url: &str) -> Result<(), HostError> {
        self.ensure_available("history")?;
        let mut state = self.state.borrow_mut();
        state.path = url.into();
        state.history.push(url.into());
        Ok(())
    }

    fn storage_get(&self, key: &str) -> Option<String> {
        let state = self.state.borrow();
        if !self.available || !state.storage_available {
            return None;
        }
        state.storage.get(key).cloned()
    }

    fn storage_set(&self, key: &str, value: &str) -> Result<(), HostError> {
        self.ensure_available("localStorage")?;
        let mut state = self.state.borrow_mut();
        if !state.storage_available {
            return Err(HostError::Unavailable { api: "localStorage" });
        }
        state.storage.insert(key.into(), value.into());
        Ok(())
    }

    fn query_element(&self, selector: &str) -> Option<FakeElement> {
        if !self.available {
            return None;
        }
        self.state
            .borrow()
            .elements
            .iter()
            .position(|e| e.attached && e.selector == selector)
            .map(FakeElement)
    }

    fn root_element(&self) -> Option<FakeElement> {
        self.available.then_some(ROOT)
    }

    fn body_element(&self) -> Option<FakeElement> {
        self.available.then_some(BODY)
    }

    fn viewport_width(&self) -> Option<f64> {
        if !self.available {
            return None;
        }
        self.state.borrow().viewport_width
    }

    fn set_style(
        &self,
        element: &FakeElement,
        property: StyleProperty,
        value: &str,
    ) -> Result<(), HostError> {
        self.with_element(element, |e| {
            e.styles.insert(property, value.into());
        })
    }

    fn toggle_class(
        &self,
        element: &FakeElement,
        class: &str,
        present: bool,
    ) -> Result<(), HostError> {
        self.with_element(element, |e| {
            let existing = e.classes.iter().position(|c| c == class);
            match (present, existing) {
                (true, None) => e.classes.push(class.into()),
                (false, Some(index)) => {
                    e.classes.remove(index);
                }
                _ => {}
            }
        })
    }

    fn scroll_top(&self, element: &FakeElement) -> Option<f64> {
        self.with_element(element, |e| e.scroll_top).ok()
    }

    fn capture_pointer(&self, element: &FakeElement, pointer_id: i32) -> Result<(), HostError> {
        self.with_element(element, |_| ())?;
        let mut state = self.state.borrow_mut();
        if state.pointer_capture {
            state.captures.push((*element, pointer_id));
        }
        Ok(())
    }

    fn add_listener(
        &self,
        element: &FakeElement,
        signal: Signal,
        listener: Listener,
    ) -> Result<ListenerKey, HostError> {
        self.with_element(element, |_| ())?;
        let mut state = self.state.borrow_mut();
        if state
            .listener_limit
            .is_some_and(|limit| state.listeners.len() >= limit)
        {
            return Err(HostError::Rejected(format!(
                "listener limit reached for {}",
                signal.event_name()
            )));
        }
        let key = ListenerKey(self.next_key.get());
        self.next_key.set(key.0 + 1);
        state.listeners.insert(
            key,
            Registration {
                element: *element,
                signal,
                listener,
            },
        );
        Ok(key)
    }

    fn remove_listener(&self, key: ListenerKey) -> Result<(), HostError> {
        let mut state = self.state.borrow_mut();
        let Some(registration) = state.listeners.remove(&key) else {
            return Ok(());
        };
        // Surface listeners on a removed element are still dropped, but the
        // removal is reported the way a detached DOM node would fail.
        let attached = state
            .elements
            .get(registration.element.0)
            .is_some_and(|e| e.attached);
        if !attached && registration.signal.target() == SignalTarget::Surface {
            return Err(HostError::ElementMissing);
        }
        Ok(())
    }
}
