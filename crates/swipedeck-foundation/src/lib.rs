//! Foundation for SwipeDeck: host abstraction, swipe tracking, and DOM helpers

pub mod attach;
pub mod dom;
pub mod error;
pub mod gesture_constants;
pub mod handler;
pub mod host;
pub mod input;
pub mod settings;
pub mod swipe;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use attach::{attach, attach_with_settings, SwipeDetach};
pub use error::{HandlerError, HostError};
pub use handler::{swipe_handler_fn, SwipeHandler};
pub use host::{Host, Listener, ListenerKey, SignalTarget, StyleProperty};
pub use input::{PointerPhase, RawInput, Signal, TouchPoints};
pub use settings::{RouteSettings, SwipeSettings};
pub use swipe::{SwipeDirection, SwipeEvent, SwipeSession, SwipeTracker};

pub mod prelude {
    pub use crate::attach::*;
    pub use crate::dom;
    pub use crate::error::*;
    pub use crate::handler::*;
    pub use crate::host::*;
    pub use crate::input::*;
    pub use crate::settings::*;
    pub use crate::swipe::*;
}
