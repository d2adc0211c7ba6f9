use crate::events::raw_input;
use rustc_hash::FxHashMap;
use std::cell::{Cell, RefCell};
use swipedeck_foundation::{
    Host, HostError, Listener, ListenerKey, Signal, SignalTarget, StyleProperty,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Storage, Window};

struct Registration {
    target: EventTarget,
    event_name: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

/// [`Host`] backed by the browser window.
///
/// Owns the JS closures of every listener it registered; a closure is
/// released when its listener is removed.
pub struct WebHost {
    window: Window,
    registry: RefCell<FxHashMap<ListenerKey, Registration>>,
    next_key: Cell<u64>,
}

impl WebHost {
    /// `None` outside a browsing context (workers, server-side rendering).
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        Some(Self {
            window,
            registry: RefCell::new(FxHashMap::default()),
            next_key: Cell::new(0),
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    fn document(&self) -> Option<Document> {
        self.window.document()
    }

    fn storage(&self) -> Option<Storage> {
        self.window.local_storage().ok().flatten()
    }

    fn event_target(&self, element: &Element, signal: Signal) -> EventTarget {
        match signal.target() {
            SignalTarget::Surface => element.clone().into(),
            SignalTarget::Window => self.window.clone().into(),
        }
    }
}

fn rejected(err: JsValue) -> HostError {
    HostError::Rejected(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl Host for WebHost {
    type Element = Element;

    fn current_path(&self) -> Option<String> {
        self.window.location().pathname().ok()
    }

    fn replace_history(&self, url: &str) -> Result<(), HostError> {
        let history = self
            .window
            .history()
            .map_err(|_| HostError::Unavailable { api: "history" })?;
        history
            .replace_state_with_url(&JsValue::NULL, "", Some(url))
            .map_err(rejected)
    }

    fn storage_get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn storage_set(&self, key: &str, value: &str) -> Result<(), HostError> {
        let storage = self
            .storage()
            .ok_or(HostError::Unavailable { api: "localStorage" })?;
        storage.set_item(key, value).map_err(rejected)
    }

    fn query_element(&self, selector: &str) -> Option<Element> {
        self.document()?.query_selector(selector).ok().flatten()
    }

    fn root_element(&self) -> Option<Element> {
        self.document()?.document_element()
    }

    fn body_element(&self) -> Option<Element> {
        self.document()?.body().map(Element::from)
    }

    fn viewport_width(&self) -> Option<f64> {
        self.window.inner_width().ok()?.as_f64()
    }

    fn set_style(
        &self,
        element: &Element,
        property: StyleProperty,
        value: &str,
    ) -> Result<(), HostError> {
        let html = element
            .dyn_ref::<HtmlElement>()
            .ok_or_else(|| HostError::Rejected("element has no inline style".into()))?;
        html.style()
            .set_property(property.css_name(), value)
            .map_err(rejected)
    }

    fn toggle_class(&self, element: &Element, class: &str, present: bool) -> Result<(), HostError> {
        element
            .class_list()
            .toggle_with_force(class, present)
            .map(|_| ())
            .map_err(rejected)
    }

    fn scroll_top(&self, element: &Element) -> Option<f64> {
        element.is_connected().then(|| element.scroll_top() as f64)
    }

    fn capture_pointer(&self, element: &Element, pointer_id: i32) -> Result<(), HostError> {
        element.set_pointer_capture(pointer_id).map_err(rejected)
    }

    fn add_listener(
        &self,
        element: &Element,
        signal: Signal,
        listener: Listener,
    ) -> Result<ListenerKey, HostError> {
        let target = self.event_target(element, signal);
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            listener(&raw_input(signal, &event));
        });
        target
            .add_event_listener_with_callback(signal.event_name(), closure.as_ref().unchecked_ref())
            .map_err(rejected)?;

        let key = ListenerKey(self.next_key.get());
        self.next_key.set(key.0 + 1);
        self.registry.borrow_mut().insert(
            key,
            Registration {
                target,
                event_name: signal.event_name(),
                closure,
            },
        );
        Ok(key)
    }

    fn remove_listener(&self, key: ListenerKey) -> Result<(), HostError> {
        let Some(registration) = self.registry.borrow_mut().remove(&key) else {
            return Ok(());
        };
        registration
            .target
            .remove_event_listener_with_callback(
                registration.event_name,
                registration.closure.as_ref().unchecked_ref(),
            )
            .map_err(rejected)
    }
}

impl Drop for WebHost {
    fn drop(&mut self) {
        for (_, registration) in self.registry.get_mut().drain() {
            if let Err(err) = registration.target.remove_event_listener_with_callback(
                registration.event_name,
                registration.closure.as_ref().unchecked_ref(),
            ) {
                log::debug!(
                    "ignoring {} listener removal failure: {err:?}",
                    registration.event_name
                );
            }
        }
    }
}
