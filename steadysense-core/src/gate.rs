//! Hysteresis Change Gate and Precision Quantization
//!
//! ## Overview
//!
//! A smoothed estimate changes a little on every tick; most of that movement
//! is noise nobody should act on. The change gate decides when an estimate
//! has moved far enough from the last *reported* value to be worth
//! reporting, and quantizes whatever it reports to the channel's precision.
//!
//! Precision plays both roles at once: it is the hysteresis band (moves
//! within one precision unit of the last report are suppressed) and the
//! rounding granularity of reported values. A channel's resolution and its
//! change sensitivity are the same tunable.
//!
//! ## Threshold direction
//!
//! Whether a move of *exactly* one precision unit counts as a change is a
//! per-channel choice, [`ThresholdMode`]. The default is
//! [`Exclusive`](ThresholdMode::Exclusive) (strictly greater than the band);
//! [`Inclusive`](ThresholdMode::Inclusive) reports on exact-band moves too.

use crate::errors::{ConfigError, ConfigResult};

/// Hysteresis comparison direction for a channel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThresholdMode {
    /// Report only when the move strictly exceeds the precision band
    #[default]
    Exclusive,
    /// Report when the move equals or exceeds the precision band
    Inclusive,
}

/// Quantizes a value to a precision grid
///
/// `quantize(23.7, 1.0) == 24`, `quantize(260.0, 100.0) == 300`. Ties round
/// away from zero.
pub fn quantize(value: f32, precision: f32) -> i32 {
    (libm::roundf(value / precision) * precision) as i32
}

/// Decides whether a freshly smoothed estimate is worth reporting
///
/// Latches the last reported value internally; the first estimate ever seen
/// is always a change. One gate instance belongs to one channel.
#[derive(Debug, Clone)]
pub struct ChangeGate {
    /// Hysteresis band and rounding granularity, strictly positive
    precision: f32,

    /// Comparison direction at the band edge
    mode: ThresholdMode,

    /// Last value surfaced to the caller; None until the first report
    last_reported: Option<f32>,
}

impl ChangeGate {
    /// Creates a gate with the given precision and comparison mode
    ///
    /// Fails with [`ConfigError::InvalidPrecision`] unless `precision` is
    /// positive and finite.
    pub fn new(precision: f32, mode: ThresholdMode) -> ConfigResult<Self> {
        if !(precision.is_finite() && precision > 0.0) {
            return Err(ConfigError::InvalidPrecision);
        }
        Ok(Self {
            precision,
            mode,
            last_reported: None,
        })
    }

    /// Check whether `smoothed` differs enough from the last report
    ///
    /// True when nothing has been reported yet, or when the distance from
    /// the last report exceeds the precision band per the configured mode.
    pub fn has_changed(&self, smoothed: f32) -> bool {
        match self.last_reported {
            None => true,
            Some(last) => {
                let delta = libm::fabsf(last - smoothed);
                match self.mode {
                    ThresholdMode::Exclusive => delta > self.precision,
                    ThresholdMode::Inclusive => delta >= self.precision,
                }
            }
        }
    }

    /// Feed the current smoothed estimate; returns the value to report
    ///
    /// If the estimate constitutes a change, it becomes the new latched
    /// report; otherwise the previous report is returned unchanged and the
    /// caller sees stability. Either way the result is quantized to the
    /// gate's precision.
    pub fn update(&mut self, smoothed: f32) -> i32 {
        let reported = match self.last_reported {
            Some(last) if !self.has_changed(smoothed) => last,
            _ => {
                self.last_reported = Some(smoothed);
                smoothed
            }
        };
        quantize(reported, self.precision)
    }

    /// Quantized last report without feeding a new estimate, if any
    pub fn peek(&self) -> Option<i32> {
        self.last_reported.map(|v| quantize(v, self.precision))
    }

    /// Raw (unquantized) last report, if any
    pub fn last_reported(&self) -> Option<f32> {
        self.last_reported
    }

    /// Configured precision
    pub fn precision(&self) -> f32 {
        self.precision
    }
}
