//! Shared test harness: scripted sensor bus and recording actuators
//!
//! `ScriptedBus` replays a per-port sequence of read outcomes so tests can
//! drive the monitor through exact multi-tick scenarios, including sensors
//! that stall (`NotReady`) or fail hard (`Fault`). `RecordingActuators`
//! captures every output-side write for assertion.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};

use steadysense_core::{ActuatorBus, PortNumber, Rgb, SensorBus};

/// Hard transport failure marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

/// One scripted outcome for a scalar read
#[derive(Debug, Clone, Copy)]
pub enum Step {
    /// The sensor answered with this value
    Value(f32),
    /// The sensor had nothing ready this tick
    NotReady,
    /// The transport failed hard
    Fault,
}

/// One scripted outcome for the combined climate probe
#[derive(Debug, Clone, Copy)]
pub enum ClimateStep {
    /// `(temperature, humidity)` pair
    Value(f32, f32),
    /// Probe still converting
    NotReady,
    /// The transport failed hard
    Fault,
}

/// Replays scripted read outcomes per port; exhausted scripts read as
/// `WouldBlock` (a silent sensor)
#[derive(Debug, Default)]
pub struct ScriptedBus {
    analog: HashMap<PortNumber, VecDeque<Step>>,
    digital: HashMap<PortNumber, VecDeque<Step>>,
    climate: HashMap<PortNumber, VecDeque<ClimateStep>>,
}

impl ScriptedBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script_analog(&mut self, port: PortNumber, steps: &[Step]) {
        self.analog.entry(port).or_default().extend(steps.iter().copied());
    }

    pub fn script_digital(&mut self, port: PortNumber, steps: &[Step]) {
        self.digital.entry(port).or_default().extend(steps.iter().copied());
    }

    pub fn script_climate(&mut self, port: PortNumber, steps: &[ClimateStep]) {
        self.climate.entry(port).or_default().extend(steps.iter().copied());
    }

    fn next_scalar(
        queues: &mut HashMap<PortNumber, VecDeque<Step>>,
        port: PortNumber,
    ) -> nb::Result<f32, BusFault> {
        match queues.get_mut(&port).and_then(VecDeque::pop_front) {
            Some(Step::Value(v)) => Ok(v),
            Some(Step::Fault) => Err(nb::Error::Other(BusFault)),
            Some(Step::NotReady) | None => Err(nb::Error::WouldBlock),
        }
    }
}

impl SensorBus for ScriptedBus {
    type Error = BusFault;

    fn read_analog(&mut self, port: PortNumber) -> nb::Result<f32, BusFault> {
        Self::next_scalar(&mut self.analog, port)
    }

    fn read_digital(&mut self, port: PortNumber) -> nb::Result<f32, BusFault> {
        Self::next_scalar(&mut self.digital, port)
    }

    fn read_climate(&mut self, port: PortNumber) -> nb::Result<(f32, f32), BusFault> {
        match self.climate.get_mut(&port).and_then(VecDeque::pop_front) {
            Some(ClimateStep::Value(t, h)) => Ok((t, h)),
            Some(ClimateStep::Fault) => Err(nb::Error::Other(BusFault)),
            Some(ClimateStep::NotReady) | None => Err(nb::Error::WouldBlock),
        }
    }
}

/// Captures every actuator write for later assertion
#[derive(Debug, Default)]
pub struct RecordingActuators {
    /// LED levels, in write order
    pub led: Vec<u8>,
    /// Buzzer switches, in write order
    pub buzzer: Vec<bool>,
    /// LCD writes as `(text, color)`, in write order
    pub lcd: Vec<(String, Rgb)>,
    /// Number of LCD clears
    pub clears: usize,
}

impl RecordingActuators {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of the most recent LCD write
    pub fn last_lcd_text(&self) -> Option<&str> {
        self.lcd.last().map(|(text, _)| text.as_str())
    }
}

impl ActuatorBus for RecordingActuators {
    type Error = std::convert::Infallible;

    fn set_led(&mut self, level: u8) -> Result<(), Self::Error> {
        self.led.push(level);
        Ok(())
    }

    fn set_buzzer(&mut self, on: bool) -> Result<(), Self::Error> {
        self.buzzer.push(on);
        Ok(())
    }

    fn set_lcd(&mut self, text: &str, color: Rgb) -> Result<(), Self::Error> {
        self.lcd.push((text.to_owned(), color));
        Ok(())
    }

    fn clear_lcd(&mut self) -> Result<(), Self::Error> {
        self.clears += 1;
        Ok(())
    }
}
