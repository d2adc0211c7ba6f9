//! Web platform adapter for SwipeDeck.
//!
//! [`WebHost`] implements the foundation [`Host`](swipedeck_foundation::Host)
//! over `web-sys`. With the `exports` feature the crate also exposes the
//! helper functions to JavaScript under their camelCase names.

mod events;
#[cfg(feature = "exports")]
pub mod exports;
mod host;

pub use host::WebHost;

/// Route panics and `log` records to the browser console.
///
/// Call once from the application's wasm start hook.
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(level));
}
