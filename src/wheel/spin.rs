//! Spin controller – `Idle → Spinning → Idle`, advanced by `tick(timestamp)`.
//!
//! The controller knows nothing about the browser.  The host feeds it frame
//! timestamps (milliseconds, any monotonic origin) and turns each
//! [`TickOutcome`] into drawing and output.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::geometry::{landed_index, normalize_degrees};
use crate::config::{Easing, WheelConfig};

/// Uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Adapter for any `rand` generator.
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        RngSource(StdRng::seed_from_u64(seed))
    }
}

/// The random part of one spin, drawn once when the spin starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinPlan {
    pub revolutions: u32,
    /// Sub-revolution part of the total rotation, `[0, 360)`.
    pub landing_offset_deg: f64,
    /// Where the wheel starts turning from, `[0, 360)`.
    pub start_offset_deg: f64,
}

impl SpinPlan {
    pub fn new(revolutions: u32, landing_offset_deg: f64, start_offset_deg: f64) -> Self {
        Self {
            revolutions,
            landing_offset_deg,
            start_offset_deg,
        }
    }

    /// Draw order is fixed: revolutions, landing offset, start offset.
    pub fn draw(rng: &mut dyn RandomSource, config: &WheelConfig) -> Self {
        let span = config
            .max_revolutions
            .saturating_sub(config.min_revolutions)
            .max(1);
        let extra = ((rng.next_unit() * span as f64).floor() as u32).min(span - 1);
        let landing_offset_deg = rng.next_unit() * 360.0;
        let start_offset_deg = rng.next_unit() * 360.0;

        Self::new(config.min_revolutions + extra, landing_offset_deg, start_offset_deg)
    }

    pub fn total_rotation_deg(&self) -> f64 {
        self.revolutions as f64 * 360.0 + self.landing_offset_deg
    }

    /// Rotation after `progress` (0..=1) of the spin.
    pub fn angle_at(&self, progress: f64) -> f64 {
        self.start_offset_deg + self.total_rotation_deg() * progress
    }

    pub fn final_angle_deg(&self) -> f64 {
        self.angle_at(1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinResult {
    pub index: usize,
    /// Final rotation folded into `[0, 360)`.
    pub final_angle_deg: f64,
    pub revolutions: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// No spin in flight; nothing to draw.
    Idle,
    /// Spin still running; draw this frame and ask for another.
    Frame {
        rotation_deg: f64,
        highlight: Option<usize>,
    },
    /// Duration elapsed on this tick; the controller is idle again.
    Landed(SpinResult),
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ActiveSpin {
    plan: SpinPlan,
    started_at: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum SpinPhase {
    Idle,
    Spinning(ActiveSpin),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpinController {
    phase: SpinPhase,
    segment_count: usize,
    duration_ms: f64,
    blink_period_ms: f64,
    easing: Easing,
}

impl SpinController {
    pub fn new(segment_count: usize, config: &WheelConfig) -> Self {
        Self {
            phase: SpinPhase::Idle,
            segment_count,
            duration_ms: config.spin_duration_ms,
            blink_period_ms: config.blink_period_ms,
            easing: config.easing,
        }
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.phase, SpinPhase::Spinning(_))
    }

    /// Begin a spin.  `started_at` may be `None` when the trigger has no frame
    /// timestamp; the first tick then becomes time zero.
    ///
    /// Returns `false` and leaves the running spin untouched when a spin is
    /// already in flight.
    pub fn start(&mut self, started_at: Option<f64>, plan: SpinPlan) -> bool {
        if self.is_spinning() {
            return false;
        }
        self.phase = SpinPhase::Spinning(ActiveSpin { plan, started_at });
        true
    }

    pub fn tick(&mut self, now: f64) -> TickOutcome {
        let spin = match &mut self.phase {
            SpinPhase::Idle => return TickOutcome::Idle,
            SpinPhase::Spinning(spin) => spin,
        };

        let started_at = *spin.started_at.get_or_insert(now);
        let plan = spin.plan;
        let elapsed = (now - started_at).max(0.0);

        if elapsed >= self.duration_ms {
            let final_angle_deg = normalize_degrees(plan.final_angle_deg());
            let result = SpinResult {
                index: landed_index(final_angle_deg, self.segment_count),
                final_angle_deg,
                revolutions: plan.revolutions,
            };
            self.phase = SpinPhase::Idle;
            return TickOutcome::Landed(result);
        }

        let progress = self.easing.apply(elapsed / self.duration_ms);
        let rotation_deg = plan.angle_at(progress);
        let highlight = self
            .blink_on(elapsed)
            .then(|| landed_index(rotation_deg, self.segment_count));

        TickOutcome::Frame {
            rotation_deg,
            highlight,
        }
    }

    fn blink_on(&self, elapsed: f64) -> bool {
        if self.blink_period_ms <= 0.0 {
            return true;
        }
        ((elapsed / self.blink_period_ms).floor() as u64) % 2 == 0
    }
}
