// Default values for the wheel - these are the single source of truth for defaults
pub const DEFAULT_SPIN_DURATION_MS: f64 = 8000.0;
pub const DEFAULT_MIN_REVOLUTIONS: u32 = 5;
pub const DEFAULT_MAX_REVOLUTIONS: u32 = 10; // exclusive
pub const DEFAULT_BLINK_PERIOD_MS: f64 = 120.0;

// Canvas geometry defaults
pub const DEFAULT_CANVAS_SIZE: f64 = 600.0;
pub const WHEEL_MARGIN: f64 = 50.0;
pub const LABEL_OFFSET: f64 = 70.0;
pub const LABEL_MAX_GRAPHEMES: usize = 18;
pub const LABEL_FONT: &str = "bold 15px system-ui, -apple-system, sans-serif";
pub const POINTER_SIZE: f64 = 18.0;

// Wheel palette
pub const SEGMENT_COLOR_EVEN: &str = "#d2691e"; // Old brown
pub const SEGMENT_COLOR_ODD: &str = "#f5deb3"; // Light brown
pub const SEGMENT_HIGHLIGHT_COLOR: &str = "#ffd700";
pub const SEGMENT_OUTLINE_COLOR: &str = "#3b2314";
pub const LABEL_COLOR: &str = "#ffffff";
pub const POINTER_COLOR: &str = "#8b0000";

// DOM ids
pub const CANVAS_ID: &str = "wheel";
pub const SPIN_BUTTON_ID: &str = "spin-wheel-button";
pub const RESULT_ID: &str = "result";
pub const SPIN_BUTTON_LABEL: &str = "Spin the Wheel!";
pub const RESULT_HEADLINE_PREFIX: &str = "You got: ";
