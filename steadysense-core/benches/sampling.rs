//! Criterion benchmarks for the hot sampling path
//!
//! One channel tick is the unit of work the polling loop pays per enabled
//! sensor; it should stay comfortably sub-microsecond even at the largest
//! stock window.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use steadysense_core::{stats, Channel, ChannelKind};

fn reject_outliers_full_window(c: &mut Criterion) {
    // A realistic temperature window: slow drift plus sensor noise
    let data: Vec<f32> = (0..60)
        .map(|i| 21.0 + (i % 7) as f32 * 0.1 - (i % 3) as f32 * 0.05)
        .collect();

    c.bench_function("reject_outliers/60", |b| {
        b.iter(|| stats::reject_outliers(black_box(&data)))
    });
}

fn channel_tick(c: &mut Criterion) {
    let mut channel = Channel::new(ChannelKind::Temperature.default_config()).unwrap();
    for i in 0..60 {
        channel.add_measure(21.0 + (i % 5) as f32 * 0.2);
    }

    c.bench_function("channel/tick", |b| {
        b.iter(|| {
            channel.add_measure(black_box(21.3));
            channel.compute_value();
            black_box(channel.report())
        })
    });
}

criterion_group!(benches, reject_outliers_full_window, channel_tick);
criterion_main!(benches);
