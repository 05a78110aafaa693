use wasm_bindgen::JsValue;

use super::surface::DrawSurface;
use crate::constants::{LABEL_FONT, POINTER_SIZE};
use crate::wheel::WheelLayout;

/// Wedge `[start, end)` of the wheel, already offset by the rotation.
pub fn draw_sector(
    surface: &dyn DrawSurface,
    layout: &WheelLayout,
    start: f64,
    end: f64,
    fill: &str,
    outline: &str,
) -> Result<(), JsValue> {
    surface.sector(layout.center_x, layout.center_y, layout.radius, start, end, fill, outline)
}

pub fn draw_label(
    surface: &dyn DrawSurface,
    layout: &WheelLayout,
    angle: f64,
    offset: f64,
    text: &str,
    color: &str,
) -> Result<(), JsValue> {
    if text.is_empty() {
        return Ok(());
    }
    surface.radial_text(layout.center_x, layout.center_y, angle, offset, text, color, LABEL_FONT)
}

/// Fixed marker on the right-hand rim, pointing at the center.  The segment
/// whose wedge contains screen angle 0 is the one under it.
pub fn draw_pointer(surface: &dyn DrawSurface, layout: &WheelLayout, color: &str) {
    if layout.radius <= 0.0 {
        return;
    }
    let rim_x = layout.center_x + layout.radius;
    let cy = layout.center_y;
    let half = POINTER_SIZE / 2.0;
    surface.triangle(
        [
            (rim_x - POINTER_SIZE * 0.6, cy),
            (rim_x + POINTER_SIZE, cy - half),
            (rim_x + POINTER_SIZE, cy + half),
        ],
        color,
    );
}
