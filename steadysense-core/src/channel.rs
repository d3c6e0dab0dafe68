//! Measurement Channel: Windowed Sampling with Gated Reporting
//!
//! ## Overview
//!
//! A [`Channel`] is one independently sampled measurement stream - the
//! temperature of a room, the level on a sound sensor, the state of a
//! button. Each polling tick, the driver feeds it zero or one raw reading
//! and asks it to recompute; the channel maintains a bounded rolling window,
//! drops statistical outliers, averages what survives, and passes the result
//! through a hysteresis gate so callers only see changes worth acting on.
//!
//! ## Lifecycle
//!
//! ```text
//! Empty ──first accepted sample──▶ Filling ──window full──▶ Ready
//!                                                            │ ▲
//!                                                            └─┘
//! ```
//!
//! `Ready` is terminal: once the window has filled and an estimate exists,
//! the channel always has a reportable value, even on ticks where no new
//! valid sample arrived. A channel whose sensor never delivers enough valid
//! readings simply stays in `Filling` - that is a legitimate steady state
//! (a disconnected probe), not an error.
//!
//! ## Read failures
//!
//! Transports are expected to hand over unreadable measurements as a
//! non-finite sentinel (NaN) rather than dropping them, so the channel's own
//! failure accounting applies. Isolated failures are routine transport noise
//! and stay silent; only a streak of two or more earns a warning, once per
//! failed read in the streak.
//!
//! ## Caller contract
//!
//! Within one tick, call [`add_measure`](Channel::add_measure) (possibly
//! zero times) before [`compute_value`](Channel::compute_value), and
//! `compute_value` before [`report`](Channel::report). The channel does not
//! enforce the order; it is single-owner state driven by one polling loop.

use crate::{
    buffer::SampleWindow,
    errors::ConfigResult,
    gate::{ChangeGate, ThresholdMode},
    stats,
};

/// Construction-time parameters for one channel
///
/// The display strings are opaque to the core - they are carried for
/// formatting layers and never interpreted.
#[derive(Debug, Clone, Copy)]
pub struct ChannelConfig {
    /// Rolling-window capacity, in samples
    pub window_size: usize,

    /// Hysteresis band and rounding granularity of reported values
    pub precision: f32,

    /// Short display name, e.g. `"Tmp"` (LCD columns are precious)
    pub short_name: &'static str,

    /// Long display name, e.g. `"Temperature"`
    pub long_name: &'static str,

    /// Unit suffix appended to displayed values, e.g. `"C"`
    pub unit: &'static str,

    /// Comparison direction at the hysteresis band edge
    pub threshold: ThresholdMode,
}

impl ChannelConfig {
    /// Creates a config with the default (strict) threshold mode
    pub const fn new(
        window_size: usize,
        precision: f32,
        short_name: &'static str,
        long_name: &'static str,
        unit: &'static str,
    ) -> Self {
        Self {
            window_size,
            precision,
            short_name,
            long_name,
            unit,
            threshold: ThresholdMode::Exclusive,
        }
    }

    /// Same config with a different threshold mode
    pub const fn with_threshold(mut self, threshold: ThresholdMode) -> Self {
        self.threshold = threshold;
        self
    }
}

/// Where a channel is in its fill lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChannelState {
    /// No samples accepted yet
    Empty,
    /// Accumulating; the window has not filled and no estimate exists
    Filling,
    /// An estimate exists; reports are gated by hysteresis from here on
    Ready,
}

/// One measurement stream: rolling window, outlier-filtered smoothing, and
/// a hysteresis-gated report
#[derive(Debug, Clone)]
pub struct Channel {
    config: ChannelConfig,
    window: SampleWindow,
    gate: ChangeGate,

    /// Back-to-back rejected readings; reset by any accepted sample
    consecutive_failures: u32,

    /// Latest outlier-filtered window mean; None until the window first fills
    smoothed: Option<f32>,
}

impl Channel {
    /// Builds a channel, validating window size and precision
    pub fn new(config: ChannelConfig) -> ConfigResult<Self> {
        let window = SampleWindow::new(config.window_size)?;
        let gate = ChangeGate::new(config.precision, config.threshold)?;
        Ok(Self {
            config,
            window,
            gate,
            consecutive_failures: 0,
            smoothed: None,
        })
    }

    /// Ingests one raw reading
    ///
    /// Non-finite readings (the transport's "could not read" sentinel, or
    /// genuine NaN garbage) are never inserted: they bump the failure streak
    /// and, from the second consecutive failure on, log a warning. A finite
    /// reading resets the streak and enters the window - extreme values are
    /// accepted here on purpose; range filtering happens statistically at
    /// aggregation time.
    pub fn add_measure(&mut self, raw: f32) {
        if !raw.is_finite() {
            self.consecutive_failures += 1;
            // Isolated failures are common transport noise; only streaks
            // are worth an operator's attention.
            if self.consecutive_failures > 1 {
                log_warn!(
                    "unable to read {} value #{}: {}",
                    self.config.long_name,
                    self.consecutive_failures,
                    raw
                );
            }
            return;
        }

        self.consecutive_failures = 0;
        log_debug!("adding measure {} for {}", raw, self.config.long_name);
        self.window.push(raw);
    }

    /// Recomputes the smoothed estimate from the current window
    ///
    /// No-op until the window has filled once - an estimate from a
    /// half-filled window would be built on too few samples to trust. Once
    /// primed, the estimate is the mean of the window contents after
    /// two-sigma outlier rejection, recomputed every tick over the sliding
    /// window.
    pub fn compute_value(&mut self) {
        if !self.window.is_primed() {
            return;
        }
        let kept = stats::reject_outliers(self.window.as_slice());
        self.smoothed = Some(stats::mean(&kept));
    }

    /// True once an estimate has been computed at least once (monotonic)
    pub fn has_value(&self) -> bool {
        self.smoothed.is_some()
    }

    /// Latest smoothed estimate, if the window has ever filled
    pub fn smoothed(&self) -> Option<f32> {
        self.smoothed
    }

    /// Feeds the estimate through the change gate and returns the value to
    /// surface, quantized to the channel's precision
    ///
    /// None while no estimate exists. Otherwise the gate latches the
    /// estimate if it moved beyond the hysteresis band and returns the
    /// (possibly unchanged) reported value.
    pub fn report(&mut self) -> Option<i32> {
        self.smoothed.map(|s| self.gate.update(s))
    }

    /// Quantized last reported value without updating the gate
    pub fn peek(&self) -> Option<i32> {
        self.gate.peek()
    }

    /// Lifecycle state; `Ready` never reverts
    pub fn state(&self) -> ChannelState {
        if self.smoothed.is_some() {
            ChannelState::Ready
        } else if self.window.total() > 0 {
            ChannelState::Filling
        } else {
            ChannelState::Empty
        }
    }

    /// Total accepted samples over the channel's lifetime
    ///
    /// Rejected (non-finite) readings are not counted.
    pub fn total_samples(&self) -> usize {
        self.window.total()
    }

    /// Current back-to-back failure streak
    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }

    /// True while the failure streak is at warning level (two or more)
    pub fn sustained_failure(&self) -> bool {
        self.consecutive_failures > 1
    }

    /// Most recently accepted raw sample, if any
    ///
    /// This is the unsmoothed reading - alarm checks that must not wait for
    /// the window (e.g. a loudness cutoff) key off this.
    pub fn last_raw(&self) -> Option<f32> {
        self.window.last()
    }

    /// Current window contents, for diagnostics only
    ///
    /// Slot order is not chronological once the window has wrapped.
    pub fn samples(&self) -> &[f32] {
        self.window.as_slice()
    }

    /// The channel's construction-time configuration
    pub fn config(&self) -> &ChannelConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_channel(window: usize, precision: f32) -> Channel {
        Channel::new(ChannelConfig::new(window, precision, "Tst", "Test", "")).unwrap()
    }

    #[test]
    fn no_value_until_window_fills() {
        let mut ch = test_channel(3, 1.0);
        assert_eq!(ch.state(), ChannelState::Empty);

        ch.add_measure(5.0);
        ch.compute_value();
        assert!(!ch.has_value());
        assert_eq!(ch.state(), ChannelState::Filling);

        ch.add_measure(6.0);
        ch.compute_value();
        assert!(!ch.has_value());

        ch.add_measure(7.0);
        ch.compute_value();
        assert!(ch.has_value());
        assert_eq!(ch.state(), ChannelState::Ready);
    }

    #[test]
    fn invalid_samples_are_not_counted() {
        let mut ch = test_channel(3, 1.0);

        ch.add_measure(5.0);
        ch.add_measure(6.0);
        ch.add_measure(f32::NAN);
        ch.compute_value();
        // The bad reading neither filled the window nor reset it
        assert_eq!(ch.total_samples(), 2);
        assert!(!ch.has_value());

        ch.add_measure(7.0);
        ch.compute_value();
        assert_eq!(ch.total_samples(), 3);
        assert!(ch.has_value());
        assert!((ch.smoothed().unwrap() - 6.0).abs() < 1e-6);
    }

    #[test]
    fn failure_streak_accounting() {
        let mut ch = test_channel(3, 1.0);

        ch.add_measure(f32::NAN);
        assert_eq!(ch.consecutive_failures(), 1);
        assert!(!ch.sustained_failure()); // single glitch: silent

        ch.add_measure(f32::NAN);
        assert_eq!(ch.consecutive_failures(), 2);
        assert!(ch.sustained_failure()); // second in a row qualifies

        ch.add_measure(f32::INFINITY);
        assert_eq!(ch.consecutive_failures(), 3);

        ch.add_measure(4.0);
        assert_eq!(ch.consecutive_failures(), 0);
        assert!(!ch.sustained_failure());
    }

    #[test]
    fn outlier_in_full_window_is_filtered() {
        let mut ch = test_channel(6, 1.0);
        for v in [10.0, 10.0, 10.0, 10.0, 10.0, 1000.0] {
            ch.add_measure(v);
        }
        ch.compute_value();
        assert_eq!(ch.smoothed(), Some(10.0));
        assert_eq!(ch.report(), Some(10));
    }

    #[test]
    fn estimate_follows_the_sliding_window() {
        let mut ch = test_channel(3, 1.0);
        for v in [10.0, 10.0, 10.0] {
            ch.add_measure(v);
        }
        ch.compute_value();
        assert_eq!(ch.smoothed(), Some(10.0));

        // Window slides to [40, 40, 40] over three more ticks
        for v in [40.0, 40.0, 40.0] {
            ch.add_measure(v);
            ch.compute_value();
        }
        assert_eq!(ch.smoothed(), Some(40.0));
    }

    #[test]
    fn ready_is_terminal_without_new_samples() {
        let mut ch = test_channel(2, 1.0);
        ch.add_measure(8.0);
        ch.add_measure(8.0);
        ch.compute_value();
        assert!(ch.has_value());

        // Ticks with no insertion (or only failures) keep the estimate
        ch.compute_value();
        ch.add_measure(f32::NAN);
        ch.compute_value();
        assert!(ch.has_value());
        assert_eq!(ch.state(), ChannelState::Ready);
        assert_eq!(ch.report(), Some(8));
    }

    #[test]
    fn report_applies_gate_and_quantization() {
        let mut ch = test_channel(1, 100.0);

        ch.add_measure(260.0);
        ch.compute_value();
        assert_eq!(ch.report(), Some(300));

        // 310 is within one precision unit of 260: suppressed
        ch.add_measure(310.0);
        ch.compute_value();
        assert_eq!(ch.report(), Some(300));

        // 420 escapes the band and re-latches
        ch.add_measure(420.0);
        ch.compute_value();
        assert_eq!(ch.report(), Some(400));
    }

    #[test]
    fn last_raw_is_the_newest_sample() {
        let mut ch = test_channel(3, 1.0);
        assert!(ch.last_raw().is_none());

        for v in [1.0, 2.0, 3.0, 650.0] {
            ch.add_measure(v);
        }
        assert_eq!(ch.last_raw(), Some(650.0));

        // Failures do not disturb the newest accepted sample
        ch.add_measure(f32::NAN);
        assert_eq!(ch.last_raw(), Some(650.0));
    }
}
