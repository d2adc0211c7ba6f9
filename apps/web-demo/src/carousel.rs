//! Card carousel driven by swipe gestures.
//!
//! The track element is translated by whole pages; while a finger is down
//! it follows the finger, and on release it settles on the page the swipe
//! direction selects. The page is persisted to storage and mirrored into the
//! location as `/r/<page>`.

use std::cell::Cell;
use std::rc::Rc;
use swipedeck_foundation::{
    attach_with_settings, dom, swipe_handler_fn, Host, RouteSettings, SwipeDetach, SwipeEvent,
    SwipeSettings,
};

/// Body class present while a drag is in progress.
pub const DRAGGING_CLASS: &str = "swiping";

#[derive(Clone, Debug)]
pub struct CarouselOptions {
    pub surface: String,
    pub track: String,
    pub page_count: usize,
    pub storage_key: String,
    pub routes: RouteSettings,
    pub swipe: SwipeSettings,
    pub settle_transition: String,
}

impl CarouselOptions {
    pub fn new(page_count: usize) -> Self {
        Self {
            surface: "#deck".into(),
            track: "#deck-track".into(),
            page_count,
            storage_key: "swipedeck.page".into(),
            routes: RouteSettings::default(),
            swipe: SwipeSettings::default(),
            settle_transition: "transform 220ms ease-out".into(),
        }
    }

    pub fn with_routes(mut self, routes: RouteSettings) -> Self {
        self.routes = routes;
        self
    }

    fn last_page(&self) -> usize {
        self.page_count.saturating_sub(1)
    }
}

pub struct Carousel {
    page: Rc<Cell<usize>>,
    detach: SwipeDetach,
}

impl Carousel {
    pub fn mount<H: Host + 'static>(host: Rc<H>, options: CarouselOptions) -> Self {
        let page = Rc::new(Cell::new(initial_page(&*host, &options)));
        settle(&*host, &options, page.get());

        let handler = {
            let host = host.clone();
            let page = page.clone();
            let options = options.clone();
            swipe_handler_fn(move |event| match event {
                SwipeEvent::Move { dx } => {
                    dom::add_body_class(&*host, DRAGGING_CLASS);
                    dom::set_transition_by_selector(&*host, &options.track, "none");
                    dom::set_transform_by_selector(
                        &*host,
                        &options.track,
                        &track_transform(page.get(), dx),
                    );
                }
                SwipeEvent::End { direction } => {
                    dom::remove_body_class(&*host, DRAGGING_CLASS);
                    let target = step(page.get(), direction.code(), options.last_page());
                    if target != page.get() {
                        page.set(target);
                        persist(&*host, &options, target);
                    }
                    settle(&*host, &options, target);
                }
            })
        };
        let detach = attach_with_settings(&host, &options.surface, options.swipe, handler);
        if !detach.is_attached() {
            log::warn!("carousel surface `{}` not found", options.surface);
        }

        Self { page, detach }
    }

    pub fn page(&self) -> usize {
        self.page.get()
    }

    pub fn is_attached(&self) -> bool {
        self.detach.is_attached()
    }

    pub fn unmount(self) {
        self.detach.detach();
    }
}

/// Page from the location (`/r/<n>`), then storage, then the first page.
fn initial_page<H: Host>(host: &H, options: &CarouselOptions) -> usize {
    let from_path = dom::current_path(host, &options.routes)
        .strip_prefix("/r/")
        .and_then(|rest| rest.trim_end_matches('/').parse::<usize>().ok());
    let page = from_path
        .or_else(|| dom::storage_get(host, &options.storage_key)?.parse().ok())
        .unwrap_or(0);
    page.min(options.last_page())
}

fn step(page: usize, direction: i8, last_page: usize) -> usize {
    match direction {
        d if d < 0 => page.saturating_sub(1),
        d if d > 0 => (page + 1).min(last_page),
        _ => page,
    }
}

fn persist<H: Host>(host: &H, options: &CarouselOptions, page: usize) {
    dom::storage_set(host, &options.storage_key, &page.to_string());
    dom::replace_history(host, &options.routes, &format!("/r/{page}"));
}

fn settle<H: Host>(host: &H, options: &CarouselOptions, page: usize) {
    dom::set_transition_by_selector(host, &options.track, &options.settle_transition);
    dom::set_transform_by_selector(host, &options.track, &track_transform(page, 0.0));
}

pub fn track_transform(page: usize, dx: f64) -> String {
    format!("translateX(calc({dx}px - {}%))", page * 100)
}
