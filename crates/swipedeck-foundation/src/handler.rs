//! Embedder callbacks for swipe events.
//!
//! Handler failures stop at the emission point: [`attach`](crate::attach)
//! logs them at debug level and keeps tracking. This is the isolation
//! boundary between embedder code and gesture state.

use crate::error::HandlerError;
use crate::swipe::SwipeEvent;

pub trait SwipeHandler {
    fn on_swipe(&mut self, event: SwipeEvent) -> Result<(), HandlerError>;
}

impl<F> SwipeHandler for F
where
    F: FnMut(SwipeEvent) -> Result<(), HandlerError>,
{
    fn on_swipe(&mut self, event: SwipeEvent) -> Result<(), HandlerError> {
        self(event)
    }
}

/// Adapts a closure that cannot fail.
pub fn swipe_handler_fn<F>(f: F) -> InfallibleHandler<F>
where
    F: FnMut(SwipeEvent),
{
    InfallibleHandler(f)
}

pub struct InfallibleHandler<F>(F);

impl<F> SwipeHandler for InfallibleHandler<F>
where
    F: FnMut(SwipeEvent),
{
    fn on_swipe(&mut self, event: SwipeEvent) -> Result<(), HandlerError> {
        (self.0)(event);
        Ok(())
    }
}

/// Invoke `handler`, discarding any failure.
pub(crate) fn dispatch(handler: &mut dyn SwipeHandler, event: SwipeEvent) {
    if let Err(err) = handler.on_swipe(event) {
        log::debug!("ignoring {err} for {event:?}");
    }
}
