//! Result panel rendering.
//!
//! `ResultView` is built by the reducer from the landed segment so the
//! published content can be compared in tests; `render` is the only part
//! that touches the DOM.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::RESULT_HEADLINE_PREFIX;
use crate::dom_utils::show;
use crate::models::Segment;

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub label: String,
    pub headline: String,
    pub description: String,
    pub image: Option<String>,
}

impl ResultView {
    pub fn from_segment(segment: &Segment) -> Self {
        Self {
            label: segment.label.clone(),
            headline: format!("{}{}", RESULT_HEADLINE_PREFIX, segment.label),
            description: segment.description.clone(),
            image: segment.image.clone(),
        }
    }

    /// Headline and description as plain text, one per line.
    pub fn plain_text(&self) -> String {
        if self.description.is_empty() {
            self.headline.clone()
        } else {
            format!("{}\n{}", self.headline, self.description)
        }
    }

    /// Replace the contents of `container` with this result.  Text goes in
    /// through `set_text_content`, so labels are never parsed as markup.
    pub fn render(&self, document: &Document, container: &Element) -> Result<(), JsValue> {
        container.set_inner_html("");

        let headline = document.create_element("h2")?;
        headline.set_class_name("result-headline");
        headline.set_text_content(Some(&self.headline));
        container.append_child(&headline)?;

        if !self.description.is_empty() {
            let description = document.create_element("p")?;
            description.set_class_name("result-description");
            description.set_text_content(Some(&self.description));
            container.append_child(&description)?;
        }

        if let Some(src) = &self.image {
            let image = document.create_element("img")?;
            image.set_class_name("result-image");
            image.set_attribute("src", src)?;
            image.set_attribute("alt", &self.label)?;
            container.append_child(&image)?;
        }

        show(container);
        Ok(())
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn render_builds_headline_description_and_image() {
        let document = web_sys::window().unwrap().document().unwrap();
        let container = document.create_element("div").unwrap();
        container.set_inner_html("<span>stale</span>");
        container.set_class_name("hidden");

        ResultView::from_segment(&Segment::new("Latte", "Milky", Some("latte.png".into())))
            .render(&document, &container)
            .unwrap();

        assert_eq!(container.child_element_count(), 3);
        assert_eq!(
            container.query_selector("h2").unwrap().unwrap().text_content().as_deref(),
            Some("You got: Latte")
        );
        let img = container.query_selector("img").unwrap().unwrap();
        assert_eq!(img.get_attribute("alt").as_deref(), Some("Latte"));
        assert!(!container.class_list().contains("hidden"));
    }
}
