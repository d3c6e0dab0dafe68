//! Sampling and filtering parameters
//!
//! The windowing core is allocation-free: every rolling window shares one
//! compile-time backing capacity, and per-channel window sizes are runtime
//! values bounded by it.

/// Backing-store capacity for every sample window, in samples
///
/// The largest stock window (temperature/humidity, 60 samples) must fit.
/// Memory cost is `MAX_WINDOW_LEN * 4` bytes per channel, so keep this close
/// to the largest window actually configured.
pub const MAX_WINDOW_LEN: usize = 64;

/// Minimum window contents for the outlier filter to engage
///
/// Below this the two-sigma test is statistically meaningless and would risk
/// discarding legitimate data, so the filter passes small sets through
/// unchanged.
pub const MIN_OUTLIER_SAMPLES: usize = 5;

/// Width of the outlier acceptance band, in standard deviations
///
/// Samples with `|x - mean| <= OUTLIER_SIGMA * std_dev` survive filtering.
/// Two sigma keeps ~95% of well-behaved readings while dropping single-tick
/// spikes from transport glitches.
pub const OUTLIER_SIGMA: f32 = 2.0;

/// Maximum number of channels in a [`ChannelSet`](crate::registry::ChannelSet)
///
/// Must be a power of two (index-map requirement). Eight covers the five
/// stock channels with room for custom ones.
pub const MAX_CHANNELS: usize = 8;

/// Maximum number of port assignments in a [`PortMap`](crate::registry::PortMap)
///
/// Must be a power of two. Seven port roles exist today.
pub const MAX_PORTS: usize = 8;

/// Suggested polling period for drivers, in milliseconds
///
/// The core itself is cadence-agnostic; this is the refresh rate the stock
/// station was tuned for (window sizes assume roughly two ticks per second).
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 500;
