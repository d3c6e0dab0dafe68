//! Bounded Rolling Window for Raw Sensor Samples
//!
//! ## Overview
//!
//! This module provides the ring buffer backing every measurement channel.
//! A channel accumulates raw readings into the window; once the window has
//! filled for the first time, new readings overwrite the oldest slot so the
//! window always holds the most recent `capacity` accepted samples.
//!
//! ## Design
//!
//! Window sizes differ per channel (60 samples for temperature, 3 for sound,
//! 1 for a button) and are chosen at construction time, not compile time, so
//! a single buffer type with a runtime capacity over a fixed backing store
//! is used instead of a const-generic ring:
//!
//! ```text
//! SampleWindow (capacity = 3) after pushes a, b, c, d:
//! ┌─────┬─────┬─────┐
//! │  d  │  b  │  c  │   backing slots 0..capacity
//! └─────┴─────┴─────┘
//!    ↑ total = 4, next write at total % capacity = 1
//! ```
//!
//! The backing store is a `heapless::Vec<f32, MAX_WINDOW_LEN>`: fixed memory,
//! no allocation, capacities validated once at construction.
//!
//! ## Invariants
//!
//! - `len() <= capacity()` always; once `total() >= capacity()`,
//!   `len() == capacity()` forever.
//! - `total()` counts every accepted sample monotonically; slot selection is
//!   `total % capacity`, which appends while filling (the counter equals the
//!   length until the first wrap) and overwrites the oldest slot afterwards.
//! - The window never shrinks and is never cleared during normal operation;
//!   a channel lives for the process lifetime.

use heapless::Vec;

use crate::{
    constants::sampling::MAX_WINDOW_LEN,
    errors::{ConfigError, ConfigResult},
};

/// Fixed-memory rolling window with a runtime-chosen capacity
///
/// Stores the most recent `capacity` accepted samples for one channel.
/// Callers interact with it through [`push`](Self::push) and
/// [`as_slice`](Self::as_slice); slot order is *not* chronological once the
/// window has wrapped, which is fine for the order-independent statistics
/// applied to it.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleWindow {
    /// Backing slots; length grows to `capacity` and then stays constant
    samples: Vec<f32, MAX_WINDOW_LEN>,

    /// Runtime window size, `1..=MAX_WINDOW_LEN`
    capacity: usize,

    /// Total accepted samples over the window's lifetime (monotonic)
    total: usize,
}

impl SampleWindow {
    /// Creates an empty window holding at most `capacity` samples
    ///
    /// Fails with [`ConfigError::ZeroWindow`] or
    /// [`ConfigError::WindowTooLarge`] for capacities outside
    /// `1..=MAX_WINDOW_LEN`.
    pub fn new(capacity: usize) -> ConfigResult<Self> {
        if capacity == 0 {
            return Err(ConfigError::ZeroWindow);
        }
        if capacity > MAX_WINDOW_LEN {
            return Err(ConfigError::WindowTooLarge {
                requested: capacity,
                max: MAX_WINDOW_LEN,
            });
        }

        Ok(Self {
            samples: Vec::new(),
            capacity,
            total: 0,
        })
    }

    /// Accepts one sample, overwriting the oldest once the window is full
    pub fn push(&mut self, value: f32) {
        let slot = self.total % self.capacity;
        if self.samples.len() < self.capacity {
            // Still filling: slot == len, so this is an append.
            // Capacity was validated in new(), the push cannot fail.
            let _ = self.samples.push(value);
        } else {
            self.samples[slot] = value;
        }
        self.total += 1;
    }

    /// Number of samples currently held
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if no samples have been accepted yet
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Configured window size
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Total samples accepted over the window's lifetime
    pub fn total(&self) -> usize {
        self.total
    }

    /// Check if the window has filled at least once
    ///
    /// Stays true forever afterwards; the window keeps sliding but never
    /// un-fills.
    pub fn is_primed(&self) -> bool {
        self.total >= self.capacity
    }

    /// The most recently accepted sample, if any
    pub fn last(&self) -> Option<f32> {
        if self.total == 0 {
            return None;
        }
        let newest = (self.total - 1) % self.capacity;
        self.samples.get(newest).copied()
    }

    /// Current window contents, in slot order (not chronological)
    pub fn as_slice(&self) -> &[f32] {
        &self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_window() {
        let window = SampleWindow::new(5).unwrap();
        assert!(window.is_empty());
        assert_eq!(window.len(), 0);
        assert_eq!(window.total(), 0);
        assert!(!window.is_primed());
        assert!(window.last().is_none());
    }

    #[test]
    fn rejects_bad_capacities() {
        assert_eq!(SampleWindow::new(0), Err(ConfigError::ZeroWindow));
        assert_eq!(
            SampleWindow::new(MAX_WINDOW_LEN + 1),
            Err(ConfigError::WindowTooLarge {
                requested: MAX_WINDOW_LEN + 1,
                max: MAX_WINDOW_LEN,
            })
        );
        assert!(SampleWindow::new(MAX_WINDOW_LEN).is_ok());
    }

    #[test]
    fn fills_then_wraps() {
        let mut window = SampleWindow::new(3).unwrap();

        for v in [1.0, 2.0, 3.0] {
            window.push(v);
        }
        assert!(window.is_primed());
        assert_eq!(window.as_slice(), &[1.0, 2.0, 3.0]);

        // Fourth push lands on slot 3 % 3 = 0, evicting the oldest
        window.push(4.0);
        assert_eq!(window.len(), 3);
        assert_eq!(window.total(), 4);
        assert_eq!(window.as_slice(), &[4.0, 2.0, 3.0]);
    }

    #[test]
    fn last_tracks_newest_across_wrap() {
        let mut window = SampleWindow::new(3).unwrap();

        window.push(10.0);
        assert_eq!(window.last(), Some(10.0));

        for v in [20.0, 30.0, 40.0, 50.0] {
            window.push(v);
        }
        // total = 5, newest slot is (5 - 1) % 3 = 1
        assert_eq!(window.last(), Some(50.0));
    }

    #[test]
    fn single_slot_window() {
        let mut window = SampleWindow::new(1).unwrap();

        window.push(0.0);
        assert!(window.is_primed());
        window.push(1.0);
        assert_eq!(window.as_slice(), &[1.0]);
        assert_eq!(window.last(), Some(1.0));
        assert_eq!(window.total(), 2);
    }
}
