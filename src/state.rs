use std::cell::RefCell;

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::WheelConfig;
use crate::messages::Message;
use crate::models::SegmentCatalog;
use crate::update::update;
use crate::wheel::{RandomSource, SpinController, WheelLayout};

/// Everything one mounted wheel owns.
pub struct WheelState {
    pub catalog: SegmentCatalog,
    pub config: WheelConfig,
    pub controller: SpinController,
    pub layout: WheelLayout,
    pub rng: Box<dyn RandomSource>,
    // Rotation (degrees) and highlight most recently drawn, so a resize
    // mid-spin repaints the same frame.
    pub view_rotation_deg: f64,
    pub view_highlight: Option<usize>,
    // Canvas handles; None in tests and before mount.
    pub canvas: Option<HtmlCanvasElement>,
    pub context: Option<CanvasRenderingContext2d>,
}

impl WheelState {
    pub fn new(
        catalog: SegmentCatalog,
        config: WheelConfig,
        rng: Box<dyn RandomSource>,
        width: f64,
        height: f64,
    ) -> Self {
        let controller = SpinController::new(catalog.len(), &config);
        let layout = WheelLayout::compute(width, height, catalog.len(), config.margin);
        Self {
            catalog,
            config,
            controller,
            layout,
            rng,
            view_rotation_deg: 0.0,
            view_highlight: None,
            canvas: None,
            context: None,
        }
    }
}

// One wheel per page; None until `mount_wheel*` runs.
thread_local! {
    pub static WHEEL_STATE: RefCell<Option<WheelState>> = const { RefCell::new(None) };
}

pub fn is_mounted() -> bool {
    WHEEL_STATE.with(|cell| cell.borrow().is_some())
}

/// Run `msg` through the reducer, release the state borrow, then execute the
/// resulting commands in order.
pub fn dispatch_global_message(msg: Message) {
    let commands = WHEEL_STATE.with(|cell| {
        let mut slot = cell.borrow_mut();
        match slot.as_mut() {
            Some(state) => update(state, msg),
            None => {
                crate::wheel_warn!("Wheel not mounted; dropping {:?}", msg);
                Vec::new()
            }
        }
    });

    crate::command_executors::execute_all(commands);
}
