use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlButtonElement, HtmlCanvasElement};

use crate::constants::{CANVAS_ID, RESULT_ID, SPIN_BUTTON_ID, SPIN_BUTTON_LABEL};
use crate::dom_utils::hide;
use crate::error::WheelError;

/// Handles to the elements the wheel creates inside its container.
pub struct WheelElements {
    pub container: Element,
    pub canvas: HtmlCanvasElement,
    pub button: HtmlButtonElement,
    pub result: Element,
}

/// Build `canvas#wheel`, `button#spin-wheel-button` and `div#result` inside
/// `container`.
pub fn create_wheel_ui(document: &Document, container: Element) -> Result<WheelElements, WheelError> {
    ensure_styles(document)?;
    let _ = container.class_list().add_1("wheel-container");

    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into().map_err(|_| {
        WheelError::Dom("created element is not a canvas".into())
    })?;
    canvas.set_id(CANVAS_ID);

    let button: HtmlButtonElement = document.create_element("button")?.dyn_into().map_err(|_| {
        WheelError::Dom("created element is not a button".into())
    })?;
    button.set_id(SPIN_BUTTON_ID);
    button.set_class_name("spin-button");
    button.set_text_content(Some(SPIN_BUTTON_LABEL));

    let result = document.create_element("div")?;
    result.set_id(RESULT_ID);
    result.set_class_name("wheel-result");
    hide(&result);

    let elements = WheelElements {
        container,
        canvas,
        button,
        result,
    };
    if let Err(e) = elements.append() {
        elements.remove();
        return Err(e.into());
    }
    Ok(elements)
}

impl WheelElements {
    fn append(&self) -> Result<(), wasm_bindgen::JsValue> {
        self.container.append_child(&self.canvas)?;
        self.container.append_child(&self.button)?;
        self.container.append_child(&self.result)?;
        Ok(())
    }

    /// Take the widget back out of its container.  Detached elements are
    /// skipped.
    pub fn remove(&self) {
        self.canvas.remove();
        self.button.remove();
        self.result.remove();
        let _ = self.container.class_list().remove_1("wheel-container");
    }
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, WheelError> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| WheelError::Dom("2d context unavailable".into()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| WheelError::Dom("context is not a CanvasRenderingContext2d".into()))
}

/// Side length of the square canvas for a container `container_width` wide.
/// Grows with the container up to `fallback`; falls back to `fallback` when
/// the container has no layout width yet.
pub fn canvas_side(container_width: f64, fallback: f64) -> f64 {
    if container_width > 0.0 {
        container_width.min(fallback).floor()
    } else {
        fallback
    }
}

/// Size the canvas to its container and return the new `(width, height)`.
/// Assigning a canvas dimension wipes its pixels, so unchanged sizes are
/// left alone.
pub fn fit_canvas(canvas: &HtmlCanvasElement, container: &Element, fallback: f64) -> (f64, f64) {
    let side = canvas_side(container.client_width() as f64, fallback) as u32;
    if canvas.width() != side {
        canvas.set_width(side);
    }
    if canvas.height() != side {
        canvas.set_height(side);
    }
    (side as f64, side as f64)
}

fn ensure_styles(document: &Document) -> Result<(), WheelError> {
    if document.get_element_by_id("wheel-styles").is_some() {
        return Ok(());
    }

    let css = "
.wheel-container{display:flex;flex-direction:column;align-items:center;gap:16px;font-family:Arial,Helvetica,sans-serif;width:100%;max-width:600px;margin:0 auto}
.wheel-container canvas{max-width:100%}
.spin-button{padding:10px 24px;border:none;border-radius:6px;background:#6f4e37;color:#fff;font-size:16px;cursor:pointer}
.spin-button:disabled{opacity:.6;cursor:default}
.wheel-result{text-align:center}
.wheel-result .result-image{max-width:240px;border-radius:8px}
.hidden{display:none}
";

    let style = document.create_element("style")?;
    style.set_id("wheel-styles");
    style.set_text_content(Some(css));
    match document.head() {
        Some(head) => head.append_child(&style)?,
        None => document
            .body()
            .ok_or_else(|| WheelError::Dom("document has no body".into()))?
            .append_child(&style)?,
    };
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_tracks_container_up_to_fallback() {
        assert_eq!(canvas_side(320.5, 600.0), 320.0);
        assert_eq!(canvas_side(1200.0, 600.0), 600.0);
        assert_eq!(canvas_side(0.0, 600.0), 600.0);
    }

    #[cfg(target_arch = "wasm32")]
    mod browser {
        use super::super::*;
        use wasm_bindgen_test::*;

        wasm_bindgen_test_configure!(run_in_browser);

        #[wasm_bindgen_test]
        fn removed_widget_leaves_container_empty() {
            let document = web_sys::window().unwrap().document().unwrap();
            let container = document.create_element("div").unwrap();

            let elements = create_wheel_ui(&document, container.clone()).unwrap();
            assert_eq!(container.child_element_count(), 3);

            elements.remove();
            assert_eq!(container.child_element_count(), 0);
            assert!(!container.class_list().contains("wheel-container"));

            // A second build into the same container starts clean
            let again = create_wheel_ui(&document, container.clone()).unwrap();
            assert_eq!(container.child_element_count(), 3);
            again.remove();
        }
    }
}
