pub mod events;
pub mod setup;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::error::WheelError;
use crate::messages::Message;
use crate::state::dispatch_global_message;

/// Register exactly one `requestAnimationFrame` callback that feeds its
/// timestamp back in as `Message::AnimationFrame`.  The reducer asks for the
/// next one only after it has handled this one, so frames of a spin never
/// overlap.
pub fn request_frame() -> Result<(), WheelError> {
    let window = web_sys::window().ok_or_else(|| WheelError::Dom("no global window".into()))?;
    let callback = Closure::once_into_js(move |timestamp: f64| {
        dispatch_global_message(Message::AnimationFrame(timestamp));
    });
    window.request_animation_frame(callback.unchecked_ref())?;
    Ok(())
}
