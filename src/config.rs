//! Wheel tunables.
//!
//! Everything has a compiled-in default from `constants.rs`.  The spin
//! duration and blink period can be overridden at build time through the
//! `WHEEL_SPIN_DURATION_MS` / `WHEEL_BLINK_PERIOD_MS` environment variables,
//! the same way the API base URL is injected into the frontend bundle.

use crate::constants::*;

/// Maps the linear time fraction `t` in `[0, 1]` onto rotation progress.
///
/// Every curve satisfies `apply(0) == 0` and `apply(1) == 1`, so the choice
/// only changes how the wheel moves, never where it lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// Fast start, slow finish.
    EaseOutCubic,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// Colors used by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub even: String,
    pub odd: String,
    pub highlight: String,
    pub outline: String,
    pub label: String,
    pub pointer: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            even: SEGMENT_COLOR_EVEN.to_string(),
            odd: SEGMENT_COLOR_ODD.to_string(),
            highlight: SEGMENT_HIGHLIGHT_COLOR.to_string(),
            outline: SEGMENT_OUTLINE_COLOR.to_string(),
            label: LABEL_COLOR.to_string(),
            pointer: POINTER_COLOR.to_string(),
        }
    }
}

impl Palette {
    /// Two-tone fill for segment `index`, unless it is the highlighted one.
    pub fn fill_for(&self, index: usize, highlight: Option<usize>) -> &str {
        if highlight == Some(index) {
            &self.highlight
        } else if index % 2 == 0 {
            &self.even
        } else {
            &self.odd
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WheelConfig {
    /// Wall-clock length of every spin, independent of revolutions.
    pub spin_duration_ms: f64,
    /// Lower bound (inclusive) of whole revolutions per spin.
    pub min_revolutions: u32,
    /// Upper bound (exclusive) of whole revolutions per spin.
    pub max_revolutions: u32,
    /// Half-period of the pointer tick: highlighted for one period, dark for the next.
    pub blink_period_ms: f64,
    pub margin: f64,
    pub fallback_size: f64,
    pub label_offset: f64,
    pub label_max_graphemes: usize,
    pub easing: Easing,
    pub palette: Palette,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            spin_duration_ms: DEFAULT_SPIN_DURATION_MS,
            min_revolutions: DEFAULT_MIN_REVOLUTIONS,
            max_revolutions: DEFAULT_MAX_REVOLUTIONS,
            blink_period_ms: DEFAULT_BLINK_PERIOD_MS,
            margin: WHEEL_MARGIN,
            fallback_size: DEFAULT_CANVAS_SIZE,
            label_offset: LABEL_OFFSET,
            label_max_graphemes: LABEL_MAX_GRAPHEMES,
            easing: Easing::default(),
            palette: Palette::default(),
        }
    }
}

impl WheelConfig {
    /// Defaults, with build-time overrides applied when present.
    pub fn from_build_env() -> Self {
        Self::default().with_overrides(
            option_env!("WHEEL_SPIN_DURATION_MS"),
            option_env!("WHEEL_BLINK_PERIOD_MS"),
        )
    }

    /// Apply raw override strings.  Unparseable or non-positive values are
    /// ignored and the default is kept.
    pub fn with_overrides(mut self, duration_ms: Option<&str>, blink_ms: Option<&str>) -> Self {
        if let Some(ms) = parse_positive_ms(duration_ms) {
            self.spin_duration_ms = ms;
        }
        if let Some(ms) = parse_positive_ms(blink_ms) {
            self.blink_period_ms = ms;
        }
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

fn parse_positive_ms(raw: Option<&str>) -> Option<f64> {
    let value = raw?.trim().parse::<f64>().ok()?;
    if value.is_finite() && value > 0.0 {
        Some(value)
    } else {
        crate::wheel_warn!("Ignoring invalid duration override: {:?}", raw);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_wheel_page() {
        let cfg = WheelConfig::default();
        assert_eq!(cfg.spin_duration_ms, 8000.0);
        assert_eq!((cfg.min_revolutions, cfg.max_revolutions), (5, 10));
        assert_eq!(cfg.fallback_size, 600.0);
        assert_eq!(cfg.easing, Easing::Linear);
    }

    #[test]
    fn overrides_accept_only_positive_numbers() {
        let cfg = WheelConfig::default().with_overrides(Some(" 4000 "), Some("-5"));
        assert_eq!(cfg.spin_duration_ms, 4000.0);
        assert_eq!(cfg.blink_period_ms, DEFAULT_BLINK_PERIOD_MS);

        let cfg = WheelConfig::default().with_overrides(Some("fast"), None);
        assert_eq!(cfg.spin_duration_ms, DEFAULT_SPIN_DURATION_MS);
    }

    #[test]
    fn easing_curves_pin_endpoints() {
        for easing in [Easing::Linear, Easing::EaseOutCubic] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(3.0), 1.0);
        }
        assert!(Easing::EaseOutCubic.apply(0.5) > Easing::Linear.apply(0.5));
    }

    #[test]
    fn palette_alternates_and_highlights() {
        let palette = Palette::default();
        assert_eq!(palette.fill_for(0, None), SEGMENT_COLOR_EVEN);
        assert_eq!(palette.fill_for(1, None), SEGMENT_COLOR_ODD);
        assert_eq!(palette.fill_for(1, Some(1)), SEGMENT_HIGHLIGHT_COLOR);
        assert_eq!(palette.fill_for(2, Some(1)), SEGMENT_COLOR_EVEN);
    }
}
