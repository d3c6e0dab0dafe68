//! Core sampling engine for SteadySense
//!
//! Turns noisy, occasionally-garbage readings from polled environmental
//! sensors into stable, quantized values worth acting on. Per measurement
//! channel: a bounded rolling window, two-sigma outlier rejection, window
//! averaging, and hysteresis-gated change reporting.
//!
//! Key constraints:
//! - No heap allocation anywhere (fixed-capacity collections throughout)
//! - `no_std` by default; `std` feature adds `log` output and serde
//! - Tick-driven by an external polling loop; the crate owns no clock
//!
//! ```no_run
//! use steadysense_core::{Channel, ChannelKind};
//!
//! let mut channel = Channel::new(ChannelKind::Temperature.default_config()).unwrap();
//!
//! // Once per polling tick:
//! channel.add_measure(21.3);
//! channel.compute_value();
//! if channel.has_value() {
//!     // Quantized, hysteresis-gated value; stable under jitter
//!     let _reported = channel.report();
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

// Optional logging, compiled out entirely when the `log` feature is off
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_info {
    ($($arg:tt)*) => { log::info!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_info {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

pub mod buffer;
pub mod channel;
pub mod constants;
pub mod display;
pub mod errors;
pub mod gate;
pub mod kinds;
pub mod monitor;
pub mod registry;
pub mod stats;
pub mod traits;

// Public API
pub use channel::{Channel, ChannelConfig, ChannelState};
pub use display::Rgb;
pub use errors::{ConfigError, ConfigResult};
pub use gate::{ChangeGate, ThresholdMode};
pub use kinds::{ChannelKind, PortKind, PortNumber};
pub use monitor::{Monitor, TickSummary, ValueChange};
pub use registry::{ChannelSet, PortMap};
pub use traits::{ActuatorBus, SensorBus};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
