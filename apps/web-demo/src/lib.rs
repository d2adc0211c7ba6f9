//! Swipeable card carousel built on SwipeDeck.

pub mod carousel;

#[cfg(target_arch = "wasm32")]
mod web;

pub use carousel::{Carousel, CarouselOptions};
