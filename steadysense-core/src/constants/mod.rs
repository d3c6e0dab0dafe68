//! Constants for SteadySense Core
//!
//! Centralized, documented constants used throughout the crate. All tunable
//! numeric values live here rather than as magic numbers at the point of use.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Sampling**: window capacities, outlier-filter parameters, poll cadence
//! - **Channels**: per-channel window/precision defaults and alarm thresholds
//! - **Display**: LCD geometry, status-line budget, background-color curve

/// Window capacities, outlier-filter parameters and polling cadence.
pub mod sampling;

/// Per-channel defaults and reaction thresholds.
pub mod channels;

/// LCD geometry and color-gradient parameters.
pub mod display;

// Re-export commonly used constants for convenience
pub use sampling::{
    MAX_WINDOW_LEN, MIN_OUTLIER_SAMPLES, OUTLIER_SIGMA,
    MAX_CHANNELS, MAX_PORTS, DEFAULT_POLL_INTERVAL_MS,
};

pub use channels::{
    TEMPERATURE_WINDOW, TEMPERATURE_PRECISION,
    HUMIDITY_WINDOW, HUMIDITY_PRECISION,
    SOUND_WINDOW, SOUND_PRECISION,
    LIGHT_WINDOW, LIGHT_PRECISION,
    BUTTON_WINDOW, BUTTON_PRECISION,
    SOUND_ALARM_LEVEL,
};

pub use display::{
    LCD_COLS, LCD_ROWS, LCD_CHARS, MAX_STATUS_LEN,
    COMFORT_TEMP_C, COLOR_COUNTS_PER_DEGREE, LED_LEVEL_DIVISOR,
};
