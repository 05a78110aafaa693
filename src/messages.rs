// src/messages.rs
//
// Everything that can happen to the wheel, and everything the reducer can
// ask the browser to do in response.
//
use crate::views::ResultView;
use crate::wheel::SpinResult;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// The single trigger action (button click or `spin_wheel()`).
    SpinRequested,
    /// One display-refresh callback, carrying its timestamp in milliseconds.
    AnimationFrame(f64),
    /// The canvas was resized to these pixel dimensions.
    Resized { width: f64, height: f64 },
    /// Paint the current view again without changing state.
    Redraw,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Draw {
        rotation_deg: f64,
        highlight: Option<usize>,
    },
    /// Ask for exactly one more frame callback.
    ScheduleFrame,
    PublishResult {
        result: SpinResult,
        view: ResultView,
    },
    ClearResult,
    SetTriggerEnabled(bool),
}
