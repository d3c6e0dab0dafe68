//! Per-channel sampling defaults and reaction thresholds
//!
//! Window sizes trade responsiveness against smoothing: slow-moving signals
//! (temperature, humidity) take a long window so single-tick noise vanishes,
//! fast signals (sound, light) take a short one so real changes surface
//! within a couple of ticks. Precision is simultaneously the reporting
//! hysteresis band and the rounding granularity of reported values.

/// Temperature window, in samples (~30 s at the stock poll rate)
pub const TEMPERATURE_WINDOW: usize = 60;
/// Temperature precision, in degrees Celsius
pub const TEMPERATURE_PRECISION: f32 = 1.0;

/// Humidity window, in samples
pub const HUMIDITY_WINDOW: usize = 60;
/// Humidity precision, in percent relative humidity
pub const HUMIDITY_PRECISION: f32 = 1.0;

/// Sound window, in samples - short so alarms react quickly
pub const SOUND_WINDOW: usize = 3;
/// Sound precision, in raw ADC counts
pub const SOUND_PRECISION: f32 = 200.0;

/// Light window, in samples
pub const LIGHT_WINDOW: usize = 3;
/// Light precision, in raw ADC counts
pub const LIGHT_PRECISION: f32 = 100.0;

/// Button window - a single sample, presses must not be averaged away
pub const BUTTON_WINDOW: usize = 1;
/// Button precision - any state flip is a reportable change
pub const BUTTON_PRECISION: f32 = 1.0;

/// Raw sound level at or above which the buzzer alarm engages, in ADC counts
pub const SOUND_ALARM_LEVEL: f32 = 600.0;
