//! Side-effects for the commands returned by `update`.  Each executor runs
//! after the state borrow taken by `dispatch_global_message` was released.

use crate::canvas::renderer;
use crate::constants::{RESULT_ID, SPIN_BUTTON_ID};
use crate::dom_utils::{button_by_id, document, element_by_id, hide};
use crate::error::WheelError;
use crate::messages::Command;
use crate::state::WHEEL_STATE;
use crate::wheel::geometry::deg_to_rad;
use crate::{wheel_error, wheel_log};

pub fn execute_all(commands: Vec<Command>) {
    for cmd in commands {
        if let Err(e) = execute(cmd) {
            wheel_error!("Wheel command failed: {}", e);
        }
    }
}

pub fn execute(cmd: Command) -> Result<(), WheelError> {
    match cmd {
        Command::Draw {
            rotation_deg,
            highlight,
        } => draw_frame(rotation_deg, highlight),
        Command::ScheduleFrame => crate::ui::request_frame(),
        Command::PublishResult { result, view } => {
            let document = document()?;
            let container = element_by_id(&document, RESULT_ID)?;
            view.render(&document, &container)?;
            wheel_log!(
                "Published result #{} after {} revolutions",
                result.index,
                result.revolutions
            );
            Ok(())
        }
        Command::ClearResult => {
            let container = element_by_id(&document()?, RESULT_ID)?;
            container.set_inner_html("");
            hide(&container);
            Ok(())
        }
        Command::SetTriggerEnabled(enabled) => {
            let button = button_by_id(&document()?, SPIN_BUTTON_ID)?;
            button.set_disabled(!enabled);
            Ok(())
        }
    }
}

fn draw_frame(rotation_deg: f64, highlight: Option<usize>) -> Result<(), WheelError> {
    WHEEL_STATE.with(|cell| {
        let slot = cell.borrow();
        let state = match slot.as_ref() {
            Some(state) => state,
            None => return Ok(()),
        };
        let context = match &state.context {
            Some(ctx) => ctx,
            None => return Err(WheelError::Dom("canvas context not initialised".into())),
        };

        renderer::draw_wheel(
            context,
            &state.layout,
            &state.catalog,
            deg_to_rad(rotation_deg),
            highlight,
            &state.config,
        )?;
        Ok(())
    })
}
