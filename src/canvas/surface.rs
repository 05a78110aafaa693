//! The drawing seam.  The renderer talks to a `DrawSurface`; the browser
//! implementation is the 2D canvas context, tests record the calls instead.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub trait DrawSurface {
    fn clear(&self, width: f64, height: f64);

    /// Filled and outlined circular sector between two absolute angles (radians).
    #[allow(clippy::too_many_arguments)]
    fn sector(
        &self,
        cx: f64,
        cy: f64,
        radius: f64,
        start: f64,
        end: f64,
        fill: &str,
        outline: &str,
    ) -> Result<(), JsValue>;

    /// Text laid out along the ray at `angle`, starting `offset` from the center.
    #[allow(clippy::too_many_arguments)]
    fn radial_text(
        &self,
        cx: f64,
        cy: f64,
        angle: f64,
        offset: f64,
        text: &str,
        color: &str,
        font: &str,
    ) -> Result<(), JsValue>;

    fn triangle(&self, points: [(f64, f64); 3], fill: &str);
}

impl DrawSurface for CanvasRenderingContext2d {
    fn clear(&self, width: f64, height: f64) {
        self.clear_rect(0.0, 0.0, width, height);
    }

    fn sector(
        &self,
        cx: f64,
        cy: f64,
        radius: f64,
        start: f64,
        end: f64,
        fill: &str,
        outline: &str,
    ) -> Result<(), JsValue> {
        self.begin_path();
        self.move_to(cx, cy);
        self.arc(cx, cy, radius, start, end)?;
        self.close_path();
        self.set_fill_style_str(fill);
        self.fill();
        self.set_line_width(1.5);
        self.set_stroke_style_str(outline);
        self.stroke();
        Ok(())
    }

    fn radial_text(
        &self,
        cx: f64,
        cy: f64,
        angle: f64,
        offset: f64,
        text: &str,
        color: &str,
        font: &str,
    ) -> Result<(), JsValue> {
        self.save();
        let drawn = (|| {
            self.translate(cx, cy)?;
            self.rotate(angle)?;
            self.set_font(font);
            self.set_fill_style_str(color);
            self.set_text_align("left");
            self.set_text_baseline("middle");
            self.fill_text(text, offset, 0.0)
        })();
        // Restore even when a call above failed so later frames start clean
        self.restore();
        drawn
    }

    fn triangle(&self, points: [(f64, f64); 3], fill: &str) {
        let [(x0, y0), (x1, y1), (x2, y2)] = points;
        self.begin_path();
        self.move_to(x0, y0);
        self.line_to(x1, y1);
        self.line_to(x2, y2);
        self.close_path();
        self.set_fill_style_str(fill);
        self.fill();
    }
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum DrawCall {
        Clear { width: f64, height: f64 },
        Sector { radius: f64, start: f64, end: f64, fill: String },
        Text { angle: f64, text: String },
        Triangle { fill: String },
    }

    /// Surface that remembers every call, in order.
    #[derive(Default)]
    pub(crate) struct RecordingSurface {
        pub(crate) calls: RefCell<Vec<DrawCall>>,
    }

    impl RecordingSurface {
        pub(crate) fn sectors(&self) -> Vec<DrawCall> {
            self.calls
                .borrow()
                .iter()
                .filter(|c| matches!(c, DrawCall::Sector { .. }))
                .cloned()
                .collect()
        }
    }

    impl DrawSurface for RecordingSurface {
        fn clear(&self, width: f64, height: f64) {
            self.calls.borrow_mut().push(DrawCall::Clear { width, height });
        }

        fn sector(
            &self,
            _cx: f64,
            _cy: f64,
            radius: f64,
            start: f64,
            end: f64,
            fill: &str,
            _outline: &str,
        ) -> Result<(), JsValue> {
            self.calls.borrow_mut().push(DrawCall::Sector {
                radius,
                start,
                end,
                fill: fill.to_string(),
            });
            Ok(())
        }

        fn radial_text(
            &self,
            _cx: f64,
            _cy: f64,
            angle: f64,
            _offset: f64,
            text: &str,
            _color: &str,
            _font: &str,
        ) -> Result<(), JsValue> {
            self.calls.borrow_mut().push(DrawCall::Text {
                angle,
                text: text.to_string(),
            });
            Ok(())
        }

        fn triangle(&self, _points: [(f64, f64); 3], fill: &str) {
            self.calls.borrow_mut().push(DrawCall::Triangle {
                fill: fill.to_string(),
            });
        }
    }
}
