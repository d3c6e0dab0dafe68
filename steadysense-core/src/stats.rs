//! Window Statistics and Two-Sigma Outlier Rejection
//!
//! ## Overview
//!
//! The numeric routines shared by the sampling path: arithmetic mean,
//! population standard deviation, and the symmetric two-sigma filter applied
//! to a window before averaging. All three are pure slice-in, value-out
//! functions - no state, no allocation, safe anywhere.
//!
//! ## The filter
//!
//! [`reject_outliers`] keeps exactly the samples satisfying
//! `|x - mean| <= OUTLIER_SIGMA * std_dev` and passes windows smaller than
//! [`MIN_OUTLIER_SAMPLES`] through untouched. It is a deliberately cheap,
//! order-independent filter, not a robust estimator: one pass to compute the
//! moments, one pass to select survivors.
//!
//! Two properties the sampling core relies on:
//!
//! - **Never empty**: for any non-empty input, samples at minimal distance
//!   from the mean satisfy the band (even when `std_dev` is zero, where the
//!   band degenerates to `|x - mean| <= 0`), so averaging the result is
//!   always well-defined.
//! - **Identity on clustered data**: if every sample lies within two standard
//!   deviations of the mean - the common case for a healthy sensor - the
//!   output equals the input.
//!
//! Standard deviation is the population form (divide by `n`): the filter
//! describes the spread of the window actually in hand, not an estimate of a
//! larger hidden population.

use heapless::Vec;

use crate::constants::sampling::{MAX_WINDOW_LEN, MIN_OUTLIER_SAMPLES, OUTLIER_SIGMA};

/// Arithmetic mean of a slice; 0.0 for an empty slice
pub fn mean(data: &[f32]) -> f32 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f32 = data.iter().sum();
    sum / data.len() as f32
}

/// Population standard deviation around a precomputed mean
pub fn std_dev(data: &[f32], mean: f32) -> f32 {
    if data.is_empty() {
        return 0.0;
    }
    let variance = data
        .iter()
        .map(|&v| {
            let diff = v - mean;
            diff * diff
        })
        .sum::<f32>()
        / data.len() as f32;
    libm::sqrtf(variance)
}

/// Drops samples more than two standard deviations from the window mean
///
/// Inputs shorter than [`MIN_OUTLIER_SAMPLES`] are returned unchanged - too
/// small a set for the test to mean anything. The result is never empty for
/// non-empty input.
pub fn reject_outliers(data: &[f32]) -> Vec<f32, MAX_WINDOW_LEN> {
    let mut kept: Vec<f32, MAX_WINDOW_LEN> = Vec::new();

    if data.len() < MIN_OUTLIER_SAMPLES {
        for &v in data {
            let _ = kept.push(v);
        }
        return kept;
    }

    let mu = mean(data);
    let band = OUTLIER_SIGMA * std_dev(data, mu);

    for &v in data {
        if libm::fabsf(v - mu) <= band {
            let _ = kept.push(v);
        }
    }

    if kept.len() != data.len() {
        log_debug!(
            "removed outliers; from {:?} to {:?}",
            data,
            kept.as_slice()
        );
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_and_std_dev() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let mu = mean(&data);
        assert_eq!(mu, 5.0);
        // Classic textbook set with population std dev of exactly 2
        assert!((std_dev(&data, mu) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn empty_slice_moments() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(std_dev(&[], 0.0), 0.0);
    }

    #[test]
    fn small_sets_pass_through() {
        let data = [1.0, 500.0, -3.0, 8.0];
        let kept = reject_outliers(&data);
        assert_eq!(kept.as_slice(), &data);
    }

    #[test]
    fn clustered_data_is_untouched() {
        let data = [20.0, 20.5, 19.5, 20.2, 19.8, 20.1];
        let kept = reject_outliers(&data);
        assert_eq!(kept.as_slice(), &data);
    }

    #[test]
    fn extreme_spike_is_dropped() {
        let data = [10.0, 10.0, 10.0, 10.0, 10.0, 1000.0];
        let kept = reject_outliers(&data);
        assert_eq!(kept.as_slice(), &[10.0; 5]);
        assert_eq!(mean(&kept), 10.0);
    }

    #[test]
    fn identical_samples_survive_zero_band() {
        // std_dev is 0, the band collapses to the mean itself
        let data = [7.0; 6];
        let kept = reject_outliers(&data);
        assert_eq!(kept.len(), 6);
    }
}
