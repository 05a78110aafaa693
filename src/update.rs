// src/update.rs
//
// The reducer.  Pure with respect to the browser: it only mutates
// `WheelState` and returns the commands the executors should run.
//
use crate::messages::{Command, Message};
use crate::state::WheelState;
use crate::views::ResultView;
use crate::wheel::{SpinPlan, TickOutcome, WheelLayout};
use crate::{wheel_log, wheel_warn};

pub fn update(state: &mut WheelState, msg: Message) -> Vec<Command> {
    let mut commands = Vec::new();

    match msg {
        Message::SpinRequested => {
            if state.controller.is_spinning() {
                wheel_log!("Spin already in progress; ignoring trigger");
                return commands;
            }

            let plan = SpinPlan::draw(state.rng.as_mut(), &state.config);
            // Time zero is the first frame callback, not the click.
            state.controller.start(None, plan);
            wheel_log!(
                "Spin started: {} revolutions + {:.1}°, from {:.1}°",
                plan.revolutions,
                plan.landing_offset_deg,
                plan.start_offset_deg
            );

            commands.push(Command::ClearResult);
            commands.push(Command::SetTriggerEnabled(false));
            commands.push(Command::ScheduleFrame);
        }

        Message::AnimationFrame(timestamp) => match state.controller.tick(timestamp) {
            TickOutcome::Idle => {}
            TickOutcome::Frame {
                rotation_deg,
                highlight,
            } => {
                push_draw(state, &mut commands, rotation_deg, highlight);
                commands.push(Command::ScheduleFrame);
            }
            TickOutcome::Landed(result) => {
                push_draw(state, &mut commands, result.final_angle_deg, Some(result.index));

                match state.catalog.get(result.index) {
                    Some(segment) => {
                        wheel_log!(
                            "Landed on #{} '{}' at {:.1}°",
                            result.index,
                            segment.label,
                            result.final_angle_deg
                        );
                        commands.push(Command::PublishResult {
                            result,
                            view: ResultView::from_segment(segment),
                        });
                    }
                    None => wheel_warn!("Landed index {} outside catalog", result.index),
                }
                commands.push(Command::SetTriggerEnabled(true));
            }
        },

        Message::Resized { width, height } => {
            if width == state.layout.width && height == state.layout.height {
                return commands;
            }
            state.layout = WheelLayout::compute(width, height, state.catalog.len(), state.config.margin);
            wheel_log!("Wheel resized to {}x{} (radius {})", width, height, state.layout.radius);
            let (rotation_deg, highlight) = (state.view_rotation_deg, state.view_highlight);
            push_draw(state, &mut commands, rotation_deg, highlight);
        }

        Message::Redraw => {
            let (rotation_deg, highlight) = (state.view_rotation_deg, state.view_highlight);
            push_draw(state, &mut commands, rotation_deg, highlight);
        }
    }

    commands
}

fn push_draw(state: &mut WheelState, commands: &mut Vec<Command>, rotation_deg: f64, highlight: Option<usize>) {
    state.view_rotation_deg = rotation_deg;
    state.view_highlight = highlight;
    commands.push(Command::Draw {
        rotation_deg,
        highlight,
    });
}
