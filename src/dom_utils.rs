//! Lookups and visibility toggles for the wheel's own elements.  Visibility
//! is the `.hidden` class from the injected wheel stylesheet.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement};

use crate::error::WheelError;

pub fn show(el: &Element) {
    set_hidden(el, false);
}

pub fn hide(el: &Element) {
    set_hidden(el, true);
}

fn set_hidden(el: &Element, hidden: bool) {
    let _ = el.class_list().toggle_with_force("hidden", hidden);
}

pub fn document() -> Result<Document, WheelError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| WheelError::Dom("no global document".into()))
}

pub fn element_by_id(document: &Document, id: &str) -> Result<Element, WheelError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| WheelError::MissingElement(id.to_string()))
}

/// Fetch a `<button>` by id and cast it to `HtmlButtonElement`.
pub fn button_by_id(document: &Document, id: &str) -> Result<HtmlButtonElement, WheelError> {
    element_by_id(document, id)?
        .dyn_into::<HtmlButtonElement>()
        .map_err(|_| WheelError::Dom(format!("#{} is not a <button>", id)))
}
