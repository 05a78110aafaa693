//! Event handlers for the wheel widget.
//!
//! The wheel has a single trigger (the spin button) plus a window resize
//! listener that keeps the canvas fitted to its container.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent};

use super::setup::{fit_canvas, WheelElements};
use crate::error::WheelError;
use crate::messages::Message;
use crate::state::dispatch_global_message;

/// Entry point – call once after the wheel elements were created.
pub fn setup_wheel_event_handlers(elements: &WheelElements, fallback_size: f64) -> Result<(), WheelError> {
    setup_spin_button_handler(elements)?;
    setup_resize_handler(elements, fallback_size)?;
    Ok(())
}

/// <button id="spin-wheel-button">
fn setup_spin_button_handler(elements: &WheelElements) -> Result<(), WheelError> {
    let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: MouseEvent| {
        dispatch_global_message(Message::SpinRequested);
    }));
    elements
        .button
        .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Window resize – refit the canvas and let the reducer recompute the layout.
fn setup_resize_handler(elements: &WheelElements, fallback_size: f64) -> Result<(), WheelError> {
    let window = web_sys::window().ok_or_else(|| WheelError::Dom("no global window".into()))?;
    let canvas = elements.canvas.clone();
    let container = elements.container.clone();

    let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: Event| {
        let (width, height) = fit_canvas(&canvas, &container, fallback_size);
        dispatch_global_message(Message::Resized { width, height });
    }));
    window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}
