//! Per-Tick Station Driver
//!
//! ## Overview
//!
//! [`Monitor`] wires the pieces together for one polling tick: it reads
//! every assigned input port off the [`SensorBus`], pushes the readings into
//! the owned [`ChannelSet`], recomputes and gates every channel, and drives
//! the [`ActuatorBus`] reactions - LED brightness follows light, the buzzer
//! follows the raw sound level, the LCD shows the current values with a
//! temperature-colored backlight, and the status line is logged whenever its
//! text changes.
//!
//! The monitor owns no clock and never sleeps. The caller decides the
//! cadence and calls [`tick`](Monitor::tick) once per period
//! ([`DEFAULT_POLL_INTERVAL_MS`](crate::constants::sampling::DEFAULT_POLL_INTERVAL_MS)
//! is the rate the stock window sizes were tuned for).
//!
//! ## Error handling
//!
//! Sensor-side failures never abort a tick: a hard transport error becomes
//! the NaN sentinel and lands in the channel's failure streak; `WouldBlock`
//! means the sensor skips this tick entirely. Actuator errors are the one
//! thing that propagates - if the display or buzzer cannot be driven, the
//! caller decides whether to retry, log, or shut down.

use heapless::{String, Vec};

use crate::{
    constants::{
        channels::SOUND_ALARM_LEVEL,
        display::{LCD_CHARS, MAX_STATUS_LEN},
        sampling::MAX_CHANNELS,
    },
    display::{self, Rgb},
    kinds::{ChannelKind, PortKind},
    registry::{ChannelSet, PortMap},
    traits::{ActuatorBus, SensorBus},
};

/// One reported value transition, in quantized units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueChange {
    /// Which channel changed
    pub kind: ChannelKind,
    /// Previous reported value; None on a channel's first report
    pub previous: Option<i32>,
    /// Newly reported value
    pub value: i32,
}

/// What one tick did, for callers that want to observe the station
#[derive(Debug, Clone, Default)]
pub struct TickSummary {
    /// Reported value transitions, in channel registration order
    pub changes: Vec<ValueChange, MAX_CHANNELS>,
    /// Whether the sound alarm is active after this tick
    pub alarm: bool,
    /// Whether the LCD was rewritten this tick
    pub lcd_refreshed: bool,
}

/// The station driver: owned channels and port wiring, plus the dedupe
/// state that keeps actuators and logs quiet while nothing changes
#[derive(Debug, Clone)]
pub struct Monitor {
    channels: ChannelSet,
    ports: PortMap,

    /// LCD visibility; toggled by the button, starts on when no button exists
    show_lcd: bool,

    /// Whether the buzzer is currently sounding
    alarm_active: bool,

    /// Last logged status line, to log only on change
    status_line: String<MAX_STATUS_LEN>,

    /// Last text written to the LCD, to rewrite only on change
    lcd_text: String<LCD_CHARS>,
}

impl Monitor {
    /// Creates a monitor over the given channels and port wiring
    ///
    /// With no button assigned the LCD is always on; with one, it starts
    /// off and the button toggles it.
    pub fn new(channels: ChannelSet, ports: PortMap) -> Self {
        let show_lcd = !ports.is_assigned(PortKind::Button);
        Self {
            channels,
            ports,
            show_lcd,
            alarm_active: false,
            status_line: String::new(),
            lcd_text: String::new(),
        }
    }

    /// Signals readiness on the output ports (LED to full brightness)
    ///
    /// Call once at startup, before the first tick.
    pub fn init_outputs<A: ActuatorBus>(&self, actuators: &mut A) -> Result<(), A::Error> {
        if self.ports.is_assigned(PortKind::Led) {
            actuators.set_led(u8::MAX)?;
        }
        Ok(())
    }

    /// Runs one polling tick: sample, recompute, gate, react
    pub fn tick<B: SensorBus, A: ActuatorBus>(
        &mut self,
        bus: &mut B,
        actuators: &mut A,
    ) -> Result<TickSummary, A::Error> {
        self.sample(bus);
        let changes = self.refresh_estimates();
        self.react(&changes, actuators)?;
        let lcd_refreshed = self.refresh_display(actuators)?;

        Ok(TickSummary {
            changes,
            alarm: self.alarm_active,
            lcd_refreshed,
        })
    }

    /// Quiesces the output ports (LED off, buzzer off, LCD cleared)
    ///
    /// The driver calls this when the process is being stopped.
    pub fn shutdown<A: ActuatorBus>(&mut self, actuators: &mut A) -> Result<(), A::Error> {
        if self.ports.is_assigned(PortKind::Lcd) {
            actuators.clear_lcd()?;
        }
        if self.ports.is_assigned(PortKind::Led) {
            actuators.set_led(0)?;
        }
        if self.ports.is_assigned(PortKind::Buzzer) {
            actuators.set_buzzer(false)?;
        }
        self.alarm_active = false;
        Ok(())
    }

    /// Reads every assigned input port and feeds the channels
    fn sample<B: SensorBus>(&mut self, bus: &mut B) {
        let channels = &mut self.channels;
        for (role, port) in self.ports.iter() {
            match role {
                PortKind::Sound => {
                    Self::feed(channels, ChannelKind::Sound, Self::outcome(bus.read_analog(port)));
                }
                PortKind::Light => {
                    Self::feed(channels, ChannelKind::Light, Self::outcome(bus.read_analog(port)));
                }
                PortKind::Button => {
                    Self::feed(channels, ChannelKind::Button, Self::outcome(bus.read_digital(port)));
                }
                PortKind::TemperatureHumidity => {
                    // One probe read serves both halves of the climate pair,
                    // so a failure is a failed sample for both channels
                    let (temperature, humidity) = match bus.read_climate(port) {
                        Ok((t, h)) => (Some(t), Some(h)),
                        Err(nb::Error::WouldBlock) => (None, None),
                        Err(nb::Error::Other(_)) => (Some(f32::NAN), Some(f32::NAN)),
                    };
                    Self::feed(channels, ChannelKind::Temperature, temperature);
                    Self::feed(channels, ChannelKind::Humidity, humidity);
                }
                PortKind::Led | PortKind::Lcd | PortKind::Buzzer => {}
            }
        }
    }

    /// Collapses a non-blocking read into "sample this tick or not"
    ///
    /// `WouldBlock` means the sensor has nothing yet (not a failure); a hard
    /// transport error becomes the NaN sentinel so the channel's failure
    /// streak sees it.
    fn outcome<E>(reading: nb::Result<f32, E>) -> Option<f32> {
        match reading {
            Ok(value) => Some(value),
            Err(nb::Error::WouldBlock) => None,
            Err(nb::Error::Other(_)) => Some(f32::NAN),
        }
    }

    /// Routes one sample into a channel, if both exist
    fn feed(channels: &mut ChannelSet, kind: ChannelKind, sample: Option<f32>) {
        if let (Some(channel), Some(value)) = (channels.get_mut(kind), sample) {
            channel.add_measure(value);
        }
    }

    /// Recomputes every channel and collects gated value transitions
    fn refresh_estimates(&mut self) -> Vec<ValueChange, MAX_CHANNELS> {
        let mut changes: Vec<ValueChange, MAX_CHANNELS> = Vec::new();

        for (kind, channel) in self.channels.iter_mut() {
            let previous = channel.peek();
            channel.compute_value();
            let Some(value) = channel.report() else {
                continue;
            };
            if previous != Some(value) {
                let _ = changes.push(ValueChange {
                    kind,
                    previous,
                    value,
                });
            }
        }

        changes
    }

    /// Applies per-change reactions, then the level-triggered alarm
    fn react<A: ActuatorBus>(
        &mut self,
        changes: &[ValueChange],
        actuators: &mut A,
    ) -> Result<(), A::Error> {
        for change in changes {
            log_debug!(
                "value for {} changed from {:?} to {}",
                change.kind.name(),
                change.previous,
                change.value
            );
            match change.kind {
                ChannelKind::Light if self.ports.is_assigned(PortKind::Led) => {
                    actuators.set_led(display::led_level(change.value))?;
                }
                ChannelKind::Button if change.value == 1 => {
                    self.show_lcd = !self.show_lcd;
                    log_info!("switching display to {}", self.show_lcd);
                    if !self.show_lcd && self.ports.is_assigned(PortKind::Lcd) {
                        actuators.clear_lcd()?;
                        self.lcd_text = String::new();
                    }
                }
                _ => {}
            }
        }

        self.update_alarm(actuators)
    }

    /// Drives the buzzer off the newest raw sound sample
    ///
    /// Keyed off the raw reading, not the smoothed estimate: an alarm that
    /// waits out a three-sample window defeats its purpose. Writes only on
    /// state transitions.
    fn update_alarm<A: ActuatorBus>(&mut self, actuators: &mut A) -> Result<(), A::Error> {
        if !self.ports.is_assigned(PortKind::Buzzer) {
            return Ok(());
        }
        let Some(sound) = self.channels.get(ChannelKind::Sound) else {
            return Ok(());
        };
        let Some(level) = sound.last_raw() else {
            return Ok(());
        };

        let loud = level >= SOUND_ALARM_LEVEL;
        if loud != self.alarm_active {
            if loud {
                log_info!("sound level {} at alarm threshold; window {:?}", level, sound.samples());
            }
            actuators.set_buzzer(loud)?;
            self.alarm_active = loud;
        }
        Ok(())
    }

    /// Re-logs the status line and rewrites the LCD when their text changed
    fn refresh_display<A: ActuatorBus>(&mut self, actuators: &mut A) -> Result<bool, A::Error> {
        let status = display::status_line(&self.channels);
        if status != self.status_line {
            self.status_line = status;
            if !self.status_line.is_empty() {
                log_info!("{}", self.status_line);
            }
        }

        if !(self.show_lcd && self.ports.is_assigned(PortKind::Lcd)) {
            return Ok(false);
        }
        let line = display::lcd_line(&self.channels);
        if line.is_empty() || line == self.lcd_text {
            return Ok(false);
        }

        // Backlight tracks the reported temperature when one exists
        let color = self
            .channels
            .get(ChannelKind::Temperature)
            .and_then(|ch| ch.peek())
            .map(|value| display::lcd_background(value as f32))
            .unwrap_or(Rgb::BLACK);

        actuators.set_lcd(&line, color)?;
        self.lcd_text = line;
        Ok(true)
    }

    /// The owned channel set
    pub fn channels(&self) -> &ChannelSet {
        &self.channels
    }

    /// Mutable access to the owned channel set
    pub fn channels_mut(&mut self) -> &mut ChannelSet {
        &mut self.channels
    }

    /// The owned port wiring
    pub fn ports(&self) -> &PortMap {
        &self.ports
    }

    /// Whether the LCD is currently visible
    pub fn show_lcd(&self) -> bool {
        self.show_lcd
    }

    /// Whether the sound alarm is currently active
    pub fn alarm_active(&self) -> bool {
        self.alarm_active
    }
}
