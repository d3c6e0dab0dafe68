//! Property tests for the filtering and gating invariants

use proptest::prelude::*;

use steadysense_core::{stats, Channel, ChannelConfig, ChangeGate, ThresholdMode};

proptest! {
    /// The filter never empties its input: averaging is always defined
    #[test]
    fn filter_output_is_never_empty(
        values in prop::collection::vec(-1.0e6f32..1.0e6, 1..=64)
    ) {
        let kept = stats::reject_outliers(&values);
        prop_assert!(!kept.is_empty());
        prop_assert!(kept.len() <= values.len());
        for v in kept.iter() {
            prop_assert!(values.contains(v));
        }
    }

    /// Below the minimum sample count the filter is the identity
    #[test]
    fn small_inputs_pass_unchanged(
        values in prop::collection::vec(-1.0e6f32..1.0e6, 1..5)
    ) {
        let kept = stats::reject_outliers(&values);
        prop_assert_eq!(kept.as_slice(), values.as_slice());
    }

    /// Evenly spaced data has no outliers: a ramp always survives intact
    ///
    /// For a uniform ramp the largest deviation from the mean is strictly
    /// inside the two-sigma band at every length, so the filter must not
    /// touch it.
    #[test]
    fn ramps_pass_unchanged(
        start in -1.0e3f32..1.0e3,
        step in 0.01f32..10.0,
        len in 5usize..=40,
    ) {
        let values: Vec<f32> = (0..len).map(|i| start + step * i as f32).collect();
        let kept = stats::reject_outliers(&values);
        prop_assert_eq!(kept.as_slice(), values.as_slice());
    }

    /// Once a channel has a value it keeps one, whatever the feed does
    #[test]
    fn has_value_is_monotonic(
        window in 1usize..=8,
        raws in prop::collection::vec(
            prop_oneof![
                4 => (-1.0e3f32..1.0e3).prop_map(Some),
                1 => Just(None), // transport failure sentinel
            ],
            1..=100,
        ),
    ) {
        let mut channel = Channel::new(
            ChannelConfig::new(window, 1.0, "Tst", "Test", "")
        ).unwrap();

        let mut seen_value = false;
        for raw in raws {
            channel.add_measure(raw.unwrap_or(f32::NAN));
            channel.compute_value();
            if seen_value {
                prop_assert!(channel.has_value());
            }
            seen_value = channel.has_value();
        }
    }

    /// Re-feeding the same estimate never changes the report
    #[test]
    fn gate_is_stable_on_constant_input(
        value in -1.0e3f32..1.0e3,
        precision in 0.5f32..100.0,
    ) {
        let mut gate = ChangeGate::new(precision, ThresholdMode::Exclusive).unwrap();
        let first = gate.update(value);
        for _ in 0..5 {
            prop_assert_eq!(gate.update(value), first);
        }
    }

    /// Reports move only when the estimate escapes the hysteresis band
    #[test]
    fn reports_inside_the_band_are_frozen(
        base in -1.0e3f32..1.0e3,
        jitter in -0.99f32..0.99,
    ) {
        let mut gate = ChangeGate::new(1.0, ThresholdMode::Exclusive).unwrap();
        let first = gate.update(base);
        // Anything within one precision unit of the latched report holds
        prop_assert_eq!(gate.update(base + jitter), first);
        prop_assert_eq!(gate.last_reported(), Some(base));
    }
}
