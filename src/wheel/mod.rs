//! Browser-free wheel logic: angles, layout and the spin state machine.

pub mod geometry;
pub mod layout;
pub mod spin;

pub use layout::{Sector, WheelLayout};
pub use spin::{RandomSource, RngSource, SpinController, SpinPlan, SpinResult, TickOutcome};
