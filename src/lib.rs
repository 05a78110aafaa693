//! Spinning flavor wheel for the browser.
//!
//! Mount it from JS with one of the `mount_wheel*` functions, then spin it
//! with the generated button or `spin_wheel()`.

use wasm_bindgen::prelude::*;

mod macros;

pub mod canvas;
pub mod command_executors;
pub mod config;
pub mod constants;
pub mod dom_utils;
pub mod error;
pub mod messages;
pub mod models;
pub mod state;
pub mod ui;
pub mod update;
pub mod utils;
pub mod views;
pub mod wheel;

use config::WheelConfig;
use error::WheelError;
use messages::Message;
use models::{Segment, SegmentCatalog};
use state::{dispatch_global_message, WheelState, WHEEL_STATE};
use wheel::RngSource;

// Main entry point for the WASM module
#[wasm_bindgen(start)]
pub fn start() {
    // Initialize better panic messages
    console_error_panic_hook::set_once();
}

/// Mount the wheel with the drinks bundled into the module.
#[wasm_bindgen]
pub fn mount_wheel(container_id: &str) -> Result<(), JsValue> {
    let catalog = SegmentCatalog::default_drinks()?;
    mount(container_id, catalog)?;
    Ok(())
}

/// Mount the wheel with an array of `{ name, description, image }` records.
#[wasm_bindgen]
pub fn mount_wheel_with_catalog(container_id: &str, catalog: JsValue) -> Result<(), JsValue> {
    let segments: Vec<Segment> = serde_wasm_bindgen::from_value(catalog).map_err(WheelError::from)?;
    mount(container_id, SegmentCatalog::new(segments)?)?;
    Ok(())
}

/// Mount the wheel with parallel arrays.  `images` may be `undefined`.
#[wasm_bindgen]
pub fn mount_wheel_with_sequences(
    container_id: &str,
    labels: JsValue,
    descriptions: JsValue,
    images: JsValue,
) -> Result<(), JsValue> {
    let labels: Vec<String> = serde_wasm_bindgen::from_value(labels).map_err(WheelError::from)?;
    let descriptions: Vec<String> =
        serde_wasm_bindgen::from_value(descriptions).map_err(WheelError::from)?;
    let images: Option<Vec<Option<String>>> =
        serde_wasm_bindgen::from_value(images).map_err(WheelError::from)?;

    mount(
        container_id,
        SegmentCatalog::from_parallel(labels, descriptions, images)?,
    )?;
    Ok(())
}

/// The trigger.  Does nothing while a spin is already running.
#[wasm_bindgen]
pub fn spin_wheel() {
    dispatch_global_message(Message::SpinRequested);
}

fn mount(container_id: &str, catalog: SegmentCatalog) -> Result<(), WheelError> {
    if state::is_mounted() {
        return Err(WheelError::AlreadyMounted);
    }

    let document = dom_utils::document()?;
    let container = dom_utils::element_by_id(&document, container_id)?;
    let config = WheelConfig::from_build_env();

    let elements = ui::setup::create_wheel_ui(&document, container)?;
    let (context, width, height) = match attach(&elements, config.fallback_size) {
        Ok(attached) => attached,
        Err(e) => {
            elements.remove();
            return Err(e);
        }
    };

    // Math.random alone only carries ~52 bits; mix in the clock
    let seed = (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64 ^ (js_sys::Date::now() as u64).rotate_left(32);

    let segment_count = catalog.len();
    let mut state = WheelState::new(catalog, config, Box::new(RngSource::seeded(seed)), width, height);
    state.canvas = Some(elements.canvas.clone());
    state.context = Some(context);
    WHEEL_STATE.with(|cell| *cell.borrow_mut() = Some(state));

    wheel_log!("Wheel mounted in #{} with {} segments ({}x{})", container_id, segment_count, width, height);

    dispatch_global_message(Message::Redraw);
    Ok(())
}

/// Size the canvas, grab its 2d context and wire the listeners.  Listeners
/// fired before the state is installed are dropped with a warning.
fn attach(
    elements: &ui::setup::WheelElements,
    fallback_size: f64,
) -> Result<(web_sys::CanvasRenderingContext2d, f64, f64), WheelError> {
    let (width, height) = ui::setup::fit_canvas(&elements.canvas, &elements.container, fallback_size);
    let context = ui::setup::context_2d(&elements.canvas)?;
    ui::events::setup_wheel_event_handlers(elements, fallback_size)?;
    Ok((context, width, height))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    // Mounting touches the page-wide state, so the whole lifecycle runs in
    // one test.
    #[wasm_bindgen_test]
    fn mount_lifecycle() {
        let document = web_sys::window().unwrap().document().unwrap();

        let err = mount(
            "no-such-wheel-root",
            SegmentCatalog::default_drinks().unwrap(),
        )
        .unwrap_err();
        assert_eq!(err, WheelError::MissingElement("no-such-wheel-root".into()));
        assert!(!state::is_mounted());
        assert!(document.get_element_by_id(constants::CANVAS_ID).is_none());

        let root = document.create_element("div").unwrap();
        root.set_id("wheel-test-root");
        document.body().unwrap().append_child(&root).unwrap();

        mount_wheel("wheel-test-root").unwrap();
        assert!(state::is_mounted());
        assert!(mount_wheel("wheel-test-root").is_err(), "second mount must be rejected");
        assert_eq!(root.child_element_count(), 3);

        let canvas: web_sys::HtmlCanvasElement = document
            .get_element_by_id(constants::CANVAS_ID)
            .unwrap()
            .dyn_into()
            .unwrap();
        assert!(canvas.width() > 0);

        spin_wheel();
        let button = dom_utils::button_by_id(&document, constants::SPIN_BUTTON_ID).unwrap();
        assert!(button.disabled());
        assert!(WHEEL_STATE.with(|s| s.borrow().as_ref().unwrap().controller.is_spinning()));
    }
}
