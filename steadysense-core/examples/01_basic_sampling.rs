//! Basic Channel Sampling Example
//!
//! Walks one channel through its whole life: filling the window, absorbing
//! a transport failure, rejecting an outlier spike, and suppressing jitter
//! through the hysteresis gate.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_sampling
//! ```

use steadysense_core::{Channel, ChannelConfig, ChannelState};

fn main() {
    println!("SteadySense Basic Sampling Example");
    println!("==================================\n");

    // A small window so the lifecycle fits on one screen: 6 samples,
    // reporting in whole units
    let config = ChannelConfig::new(6, 1.0, "Tmp", "Temperature", "C");
    let mut channel = Channel::new(config).expect("config is valid");

    // Raw feed: steady around 21, one garbage read, one absurd spike,
    // then some jitter the gate should swallow
    let feed: [f32; 12] = [
        21.2, 20.8, 21.1, f32::NAN, 20.9, 21.3, 21.0, // fills the window
        250.0, // electrical spike - filtered statistically
        21.1, 21.2, 20.9, 21.0, // jitter within one precision unit
    ];

    for (tick, raw) in feed.iter().enumerate() {
        channel.add_measure(*raw);
        channel.compute_value();

        print!("tick {tick:2}  raw {raw:7.1}  state {:?}", channel.state());
        match channel.state() {
            ChannelState::Ready => {
                let reported = channel.report().expect("ready channels report");
                println!(
                    "  smoothed {:6.2}  reported {reported}",
                    channel.smoothed().expect("ready channels have an estimate"),
                );
            }
            _ => {
                println!("  (window {}/{})", channel.samples().len(), 6);
            }
        }
    }

    println!("\nNotes:");
    println!("- the NaN read was dropped and did not advance the window");
    println!("- the 250.0 spike entered the window but the two-sigma filter");
    println!("  kept it out of the estimate");
    println!("- reports held at 21 throughout the trailing jitter");
}
