use crate::carousel::{Carousel, CarouselOptions};
use std::cell::RefCell;
use std::rc::Rc;
use swipedeck_platform_web::WebHost;
use wasm_bindgen::prelude::*;

thread_local! {
    static MOUNTED: RefCell<Option<Carousel>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    swipedeck_platform_web::init_logging(log::Level::Info);
}

/// Mount the carousel on `#deck` / `#deck-track` with `page_count` cards.
///
/// Mounting again replaces the previous carousel.
#[wasm_bindgen(js_name = mountCarousel)]
pub fn mount_carousel(page_count: u32) -> Result<(), JsValue> {
    let host = Rc::new(WebHost::new().ok_or("no global window exists")?);
    let options = CarouselOptions::new(page_count as usize);
    let carousel = Carousel::mount(host, options);
    MOUNTED.with(|slot| {
        if let Some(previous) = slot.borrow_mut().replace(carousel) {
            previous.unmount();
        }
    });
    Ok(())
}

#[wasm_bindgen(js_name = unmountCarousel)]
pub fn unmount_carousel() {
    MOUNTED.with(|slot| {
        if let Some(carousel) = slot.borrow_mut().take() {
            carousel.unmount();
        }
    });
}
