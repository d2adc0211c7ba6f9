//! Host environment capability.
//!
//! Everything the crate needs from a browser-like environment goes through
//! [`Host`]. The web platform crate implements it over `web-sys`; tests use
//! an in-memory double. Implementations report an absent environment through
//! `None` or [`HostError::Unavailable`] rather than panicking.

use crate::error::HostError;
use crate::input::{RawInput, Signal};
use std::rc::Rc;

/// Callback a host invokes for every delivered input signal.
pub type Listener = Rc<dyn Fn(&RawInput)>;

/// Identifies one listener registration so it can be removed later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerKey(pub u64);

/// Where a listener is registered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignalTarget {
    /// The element the tracker is attached to.
    Surface,
    /// The global window.
    Window,
}

/// Inline style properties the helpers write.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    Transform,
    Transition,
    Opacity,
}

impl StyleProperty {
    pub fn css_name(self) -> &'static str {
        match self {
            StyleProperty::Transform => "transform",
            StyleProperty::Transition => "transition",
            StyleProperty::Opacity => "opacity",
        }
    }
}

pub trait Host {
    /// Handle to an element of the host document.
    type Element: Clone;

    /// Current location pathname, `None` outside a browsing context.
    fn current_path(&self) -> Option<String>;

    /// Replace the current history entry with `url`.
    fn replace_history(&self, url: &str) -> Result<(), HostError>;

    fn storage_get(&self, key: &str) -> Option<String>;

    fn storage_set(&self, key: &str, value: &str) -> Result<(), HostError>;

    /// First element matching a CSS selector.
    fn query_element(&self, selector: &str) -> Option<Self::Element>;

    /// The document's root (`html`) element.
    fn root_element(&self) -> Option<Self::Element>;

    fn body_element(&self) -> Option<Self::Element>;

    /// Viewport width in CSS pixels, `None` when unreported.
    fn viewport_width(&self) -> Option<f64>;

    fn set_style(
        &self,
        element: &Self::Element,
        property: StyleProperty,
        value: &str,
    ) -> Result<(), HostError>;

    /// Add (`present == true`) or remove a class.
    fn toggle_class(
        &self,
        element: &Self::Element,
        class: &str,
        present: bool,
    ) -> Result<(), HostError>;

    fn scroll_top(&self, element: &Self::Element) -> Option<f64>;

    /// Route subsequent signals of `pointer_id` to `element`.
    ///
    /// Hosts without pointer capture return `Ok(())`.
    fn capture_pointer(&self, element: &Self::Element, pointer_id: i32) -> Result<(), HostError>;

    /// Register `listener` for `signal` on `element` or on the window,
    /// depending on [`Signal::target`].
    fn add_listener(
        &self,
        element: &Self::Element,
        signal: Signal,
        listener: Listener,
    ) -> Result<ListenerKey, HostError>;

    /// Remove a registration. Removing an unknown key is not an error.
    fn remove_listener(&self, key: ListenerKey) -> Result<(), HostError>;
}
