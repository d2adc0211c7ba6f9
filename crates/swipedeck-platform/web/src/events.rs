use swipedeck_foundation::{RawInput, Signal, TouchPoints};
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, PointerEvent, TouchEvent, TouchList};

/// Reduce a DOM event to the fields swipe tracking reads.
pub(crate) fn raw_input(signal: Signal, event: &Event) -> RawInput {
    let mut input = RawInput::new(signal);
    if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
        input.client_x = Some(mouse.client_x() as f64);
    }
    if let Some(pointer) = event.dyn_ref::<PointerEvent>() {
        input.pointer_id = Some(pointer.pointer_id());
    }
    if let Some(touch) = event.dyn_ref::<TouchEvent>() {
        input.touches = touch_points(&touch.touches());
        input.changed_touches = touch_points(&touch.changed_touches());
    }
    input
}

fn touch_points(list: &TouchList) -> TouchPoints {
    (0..list.length())
        .filter_map(|index| list.get(index))
        .map(|touch| touch.client_x() as f64)
        .collect()
}
