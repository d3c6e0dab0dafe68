//! Simulated Station Example
//!
//! Runs the full monitor loop against a synthetic sensor bus: a warming
//! room, a brightening lamp, a noisy sound floor with one loud burst, and a
//! climate probe that occasionally stalls or fails. Actuator traffic is
//! printed so you can watch the station react.
//!
//! The loop runs as fast as it can; a real driver would sleep
//! `DEFAULT_POLL_INTERVAL_MS` between ticks.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_simulated_station
//! ```

use steadysense_core::{
    constants::sampling::DEFAULT_POLL_INTERVAL_MS, ActuatorBus, ChannelSet, Monitor, PortKind,
    PortMap, PortNumber, Rgb, SensorBus,
};

/// Deterministic synthetic signals, driven by the tick counter
struct SimulatedBus {
    tick: u32,
}

impl SimulatedBus {
    fn new() -> Self {
        Self { tick: 0 }
    }
}

impl SensorBus for SimulatedBus {
    type Error = &'static str;

    fn read_analog(&mut self, port: PortNumber) -> nb::Result<f32, Self::Error> {
        let t = self.tick as f32;
        match port {
            // Sound floor near 320 with a burst around tick 25
            0 => {
                let burst = if (24..28).contains(&self.tick) { 400.0 } else { 0.0 };
                Ok(320.0 + 15.0 * (t * 0.9).sin() + burst)
            }
            // Light ramping up as the lamp warms
            1 => Ok(200.0 + 8.0 * t + 5.0 * (t * 1.7).sin()),
            _ => Err(nb::Error::WouldBlock),
        }
    }

    fn read_digital(&mut self, _port: PortNumber) -> nb::Result<f32, Self::Error> {
        Err(nb::Error::WouldBlock)
    }

    fn read_climate(&mut self, _port: PortNumber) -> nb::Result<(f32, f32), Self::Error> {
        self.tick += 1; // climate is read last each tick; count ticks here
        match self.tick % 16 {
            // The probe needs two conversions in a row now and then
            7 => Err(nb::Error::WouldBlock),
            // And very occasionally the wire just fails
            13 => Err(nb::Error::Other("climate probe timeout")),
            _ => {
                let t = self.tick as f32;
                Ok((19.0 + t * 0.08, 48.0 + 3.0 * (t * 0.3).sin()))
            }
        }
    }
}

/// Prints actuator traffic instead of driving hardware
struct ConsoleActuators;

impl ActuatorBus for ConsoleActuators {
    type Error = std::convert::Infallible;

    fn set_led(&mut self, level: u8) -> Result<(), Self::Error> {
        println!("  [led]    brightness {level}");
        Ok(())
    }

    fn set_buzzer(&mut self, on: bool) -> Result<(), Self::Error> {
        println!("  [buzzer] {}", if on { "ON" } else { "off" });
        Ok(())
    }

    fn set_lcd(&mut self, text: &str, color: Rgb) -> Result<(), Self::Error> {
        println!("  [lcd]    \"{text}\" bg=({},{},{})", color.r, color.g, color.b);
        Ok(())
    }

    fn clear_lcd(&mut self) -> Result<(), Self::Error> {
        println!("  [lcd]    cleared");
        Ok(())
    }
}

fn main() {
    println!("SteadySense Simulated Station Example");
    println!("=====================================");
    println!("(simulating a {DEFAULT_POLL_INTERVAL_MS} ms poll period)\n");

    let channels = ChannelSet::with_defaults().expect("stock channels are valid");
    let mut ports = PortMap::new();
    ports.assign(PortKind::Sound, 0).expect("port table has room");
    ports.assign(PortKind::Light, 1).expect("port table has room");
    ports.assign(PortKind::TemperatureHumidity, 2).expect("port table has room");
    ports.assign(PortKind::Led, 4).expect("port table has room");
    ports.assign(PortKind::Lcd, 1).expect("port table has room");
    ports.assign(PortKind::Buzzer, 7).expect("port table has room");

    let mut monitor = Monitor::new(channels, ports);
    let mut bus = SimulatedBus::new();
    let mut actuators = ConsoleActuators;

    monitor
        .init_outputs(&mut actuators)
        .expect("console actuators cannot fail");

    for tick in 0..80u32 {
        let summary = monitor
            .tick(&mut bus, &mut actuators)
            .expect("console actuators cannot fail");

        for change in &summary.changes {
            let from = change
                .previous
                .map_or_else(|| "-".to_string(), |v| v.to_string());
            println!(
                "tick {tick:2}: {} {} -> {}",
                change.kind.name(),
                from,
                change.value
            );
        }
    }

    monitor
        .shutdown(&mut actuators)
        .expect("console actuators cannot fail");
    println!("\nstation stopped");
}
