//! JavaScript-facing helper API.
//!
//! Every export degrades to a no-op or a default value outside a browsing
//! context, so the module can be imported during server-side rendering.

use crate::host::WebHost;
use js_sys::{Function, Object, Reflect};
use std::cell::RefCell;
use std::rc::Rc;
use swipedeck_foundation::{
    attach, dom, HandlerError, RouteSettings, SwipeEvent, SwipeHandler,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

thread_local! {
    static HOST: Option<Rc<WebHost>> = WebHost::new().map(Rc::new);
    static ROUTES: RefCell<RouteSettings> = RefCell::new(RouteSettings::default());
}

fn with_host<R>(default: R, f: impl FnOnce(&Rc<WebHost>) -> R) -> R {
    HOST.with(|host| host.as_ref().map(f).unwrap_or(default))
}

fn routes() -> RouteSettings {
    ROUTES.with(|routes| routes.borrow().clone())
}

/// Set the base path the app is served under (Vite's `BASE_URL`).
#[wasm_bindgen(js_name = configureBasePath)]
pub fn configure_base_path(base: &str) {
    ROUTES.with(|routes| {
        let updated = routes.borrow().clone().with_base_path(base);
        *routes.borrow_mut() = updated;
    });
}

#[wasm_bindgen(js_name = getPath)]
pub fn get_path() -> String {
    let routes = routes();
    with_host(routes.fallback_path().to_owned(), |host| {
        dom::current_path(&**host, &routes)
    })
}

#[wasm_bindgen(js_name = replaceHistory)]
pub fn replace_history(path: &str) {
    let routes = routes();
    with_host((), |host| dom::replace_history(&**host, &routes, path));
}

#[wasm_bindgen(js_name = replaceState)]
pub fn replace_state(path: &str) {
    with_host((), |host| dom::replace_state(&**host, path));
}

#[wasm_bindgen(js_name = getLocalStorage)]
pub fn get_local_storage(key: &str) -> Option<String> {
    with_host(None, |host| dom::storage_get(&**host, key))
}

#[wasm_bindgen(js_name = setLocalStorage)]
pub fn set_local_storage(key: &str, value: &str) {
    with_host((), |host| dom::storage_set(&**host, key, value));
}

#[wasm_bindgen(js_name = localStorageGet)]
pub fn local_storage_get(key: &str) -> Option<String> {
    get_local_storage(key)
}

#[wasm_bindgen(js_name = localStorageSet)]
pub fn local_storage_set(key: &str, value: &str) {
    set_local_storage(key, value);
}

/// Scroll offset of the event's current target.
#[wasm_bindgen(js_name = getScrollTop)]
pub fn get_scroll_top(event: &Event) -> f64 {
    let element = event
        .current_target()
        .and_then(|target| target.dyn_into::<Element>().ok());
    with_host(0.0, |host| dom::scroll_top(&**host, element.as_ref()))
}

#[wasm_bindgen(js_name = setTransform)]
pub fn set_transform(element: Option<Element>, value: &str) {
    with_host((), |host| {
        dom::set_transform(&**host, element.as_ref(), value)
    });
}

#[wasm_bindgen(js_name = setHtmlDark)]
pub fn set_html_dark(dark: bool) {
    with_host((), |host| dom::set_html_dark(&**host, dark));
}

#[wasm_bindgen(js_name = setTransformBySelector)]
pub fn set_transform_by_selector(selector: &str, value: &str) {
    with_host((), |host| {
        dom::set_transform_by_selector(&**host, selector, value)
    });
}

#[wasm_bindgen(js_name = setTransitionBySelector)]
pub fn set_transition_by_selector(selector: &str, value: &str) {
    with_host((), |host| {
        dom::set_transition_by_selector(&**host, selector, value)
    });
}

#[wasm_bindgen(js_name = setOpacityBySelector)]
pub fn set_opacity_by_selector(selector: &str, value: &str) {
    with_host((), |host| {
        dom::set_opacity_by_selector(&**host, selector, value)
    });
}

#[wasm_bindgen(js_name = addBodyClass)]
pub fn add_body_class(class: &str) {
    with_host((), |host| dom::add_body_class(&**host, class));
}

#[wasm_bindgen(js_name = removeBodyClass)]
pub fn remove_body_class(class: &str) {
    with_host((), |host| dom::remove_body_class(&**host, class));
}

/// Forwards swipe events to a JS callback as `{type, dx}` / `{type, dir}`.
struct JsSwipeHandler {
    callback: Function,
}

impl JsSwipeHandler {
    fn payload(event: SwipeEvent) -> Result<Object, JsValue> {
        let payload = Object::new();
        match event {
            SwipeEvent::Move { dx } => {
                Reflect::set(&payload, &"type".into(), &"move".into())?;
                Reflect::set(&payload, &"dx".into(), &dx.into())?;
            }
            SwipeEvent::End { direction } => {
                Reflect::set(&payload, &"type".into(), &"end".into())?;
                Reflect::set(&payload, &"dir".into(), &direction.code().into())?;
            }
        }
        Ok(payload)
    }
}

impl SwipeHandler for JsSwipeHandler {
    fn on_swipe(&mut self, event: SwipeEvent) -> Result<(), HandlerError> {
        let describe = |err: JsValue| {
            HandlerError::new(err.as_string().unwrap_or_else(|| format!("{err:?}")))
        };
        let payload = Self::payload(event).map_err(describe)?;
        self.callback
            .call1(&JsValue::NULL, &payload)
            .map(|_| ())
            .map_err(describe)
    }
}

/// Track horizontal swipes on the element matching `selector`.
///
/// Returns a cleanup function; calling it more than once is harmless.
#[wasm_bindgen(js_name = attachSwipe)]
pub fn attach_swipe(selector: &str, callback: Function) -> Function {
    let detach = with_host(None, |host| {
        Some(attach(host, selector, JsSwipeHandler { callback }))
    });
    let cleanup = Closure::<dyn FnMut()>::new(move || {
        if let Some(detach) = &detach {
            detach.detach();
        }
    });
    cleanup.into_js_value().unchecked_into()
}
