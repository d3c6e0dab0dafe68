//! Error Types for Channel Construction and Registration
//!
//! ## Design Philosophy
//!
//! SteadySense splits failures into two very different categories:
//!
//! 1. **Configuration errors** — a window size of zero, a precision of
//!    `-3.0`, a sixth channel pushed into a five-slot table. These happen
//!    once, at startup, and are programming errors worth surfacing loudly.
//!    They are the only errors this crate returns.
//!
//! 2. **Runtime read failures** — a sensor that answered with garbage on one
//!    polling tick. These are *expected* and are absorbed by the sampler's
//!    failure counter (see [`crate::channel::Channel::add_measure`]); they
//!    never produce an `Err` anywhere. A channel fed nothing but garbage
//!    simply never reports a value, which is a valid steady state for a
//!    disconnected sensor.
//!
//! Like the rest of the crate, errors are built for small targets: every
//! variant is `Copy` with inline data only — no `String`, no allocation,
//! deterministic size.

use thiserror_no_std::Error;

/// Result type for construction and registration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Construction-time configuration errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Window size of zero - a channel must hold at least one sample
    #[error("window size must be at least 1")]
    ZeroWindow,

    /// Window size exceeds the fixed backing-store capacity
    #[error("window size {requested} exceeds maximum {max}")]
    WindowTooLarge {
        /// The window size that was requested
        requested: usize,
        /// The compile-time backing-store capacity
        max: usize,
    },

    /// Precision must be a positive, finite number
    #[error("precision must be positive and finite")]
    InvalidPrecision,

    /// Channel table is full
    #[error("channel table full (capacity {capacity})")]
    TooManyChannels {
        /// Fixed capacity of the channel table
        capacity: usize,
    },

    /// Port table is full
    #[error("port table full (capacity {capacity})")]
    TooManyPorts {
        /// Fixed capacity of the port table
        capacity: usize,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::ZeroWindow =>
                defmt::write!(fmt, "window size must be at least 1"),
            Self::WindowTooLarge { requested, max } =>
                defmt::write!(fmt, "window size {} exceeds maximum {}", requested, max),
            Self::InvalidPrecision =>
                defmt::write!(fmt, "precision must be positive and finite"),
            Self::TooManyChannels { capacity } =>
                defmt::write!(fmt, "channel table full (capacity {})", capacity),
            Self::TooManyPorts { capacity } =>
                defmt::write!(fmt, "port table full (capacity {})", capacity),
        }
    }
}
