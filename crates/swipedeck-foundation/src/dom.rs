//! Location, storage, and styling helpers.
//!
//! Thin pass-throughs over [`Host`]. Each one degrades to a no-op or a
//! default value when the host API or the target element is missing; host
//! failures are logged, never returned.

use crate::error::HostError;
use crate::host::{Host, StyleProperty};
use crate::settings::RouteSettings;

/// Class toggled on the root element for dark mode.
pub const DARK_CLASS: &str = "dark";

/// Current app route: the host pathname with the base path stripped.
pub fn current_path<H: Host>(host: &H, routes: &RouteSettings) -> String {
    match host.current_path() {
        Some(pathname) => routes.strip_base(&pathname).to_owned(),
        None => routes.fallback_path().to_owned(),
    }
}

/// Replace the history entry with `path` under the configured base path.
pub fn replace_history<H: Host>(host: &H, routes: &RouteSettings, path: &str) {
    report("replace history", host.replace_history(&routes.with_base(path)));
}

/// Replace the history entry with `path` verbatim.
pub fn replace_state<H: Host>(host: &H, path: &str) {
    report("replace state", host.replace_history(path));
}

pub fn storage_get<H: Host>(host: &H, key: &str) -> Option<String> {
    host.storage_get(key)
}

pub fn storage_set<H: Host>(host: &H, key: &str, value: &str) {
    report("storage write", host.storage_set(key, value));
}

pub fn set_transform<H: Host>(host: &H, element: Option<&H::Element>, value: &str) {
    if let Some(element) = element {
        report(
            "set transform",
            host.set_style(element, StyleProperty::Transform, value),
        );
    }
}

pub fn set_transform_by_selector<H: Host>(host: &H, selector: &str, value: &str) {
    set_style_by_selector(host, selector, StyleProperty::Transform, value);
}

pub fn set_transition_by_selector<H: Host>(host: &H, selector: &str, value: &str) {
    set_style_by_selector(host, selector, StyleProperty::Transition, value);
}

pub fn set_opacity_by_selector<H: Host>(host: &H, selector: &str, value: &str) {
    set_style_by_selector(host, selector, StyleProperty::Opacity, value);
}

pub fn set_style_by_selector<H: Host>(
    host: &H,
    selector: &str,
    property: StyleProperty,
    value: &str,
) {
    let Some(element) = host.query_element(selector) else {
        return;
    };
    report(
        property.css_name(),
        host.set_style(&element, property, value),
    );
}

/// Toggle the dark mode class on the root element.
pub fn set_html_dark<H: Host>(host: &H, dark: bool) {
    if let Some(root) = host.root_element() {
        report("toggle dark", host.toggle_class(&root, DARK_CLASS, dark));
    }
}

pub fn add_body_class<H: Host>(host: &H, class: &str) {
    if let Some(body) = host.body_element() {
        report("add body class", host.toggle_class(&body, class, true));
    }
}

pub fn remove_body_class<H: Host>(host: &H, class: &str) {
    if let Some(body) = host.body_element() {
        report("remove body class", host.toggle_class(&body, class, false));
    }
}

/// Vertical scroll offset of `element`, `0.0` when unavailable.
pub fn scroll_top<H: Host>(host: &H, element: Option<&H::Element>) -> f64 {
    element
        .and_then(|element| host.scroll_top(element))
        .unwrap_or(0.0)
}

fn report(operation: &str, result: Result<(), HostError>) {
    if let Err(err) = result {
        log::debug!("{operation} skipped: {err}");
    }
}
