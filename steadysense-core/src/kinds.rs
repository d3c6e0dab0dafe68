//! Channel and Port Identifier Enumerations
//!
//! The station's measurement streams and physical port roles as closed,
//! compile-time-checked sets. Matching on these is exhaustive: adding a
//! kind forces every dispatch site to handle it, which is exactly the point
//! of replacing stringly-keyed configuration with tagged enums.

use crate::{
    channel::ChannelConfig,
    gate::ThresholdMode,
    constants::channels::{
        BUTTON_PRECISION, BUTTON_WINDOW, HUMIDITY_PRECISION, HUMIDITY_WINDOW, LIGHT_PRECISION,
        LIGHT_WINDOW, SOUND_PRECISION, SOUND_WINDOW, TEMPERATURE_PRECISION, TEMPERATURE_WINDOW,
    },
};

/// Physical port number on the sensor bridge
pub type PortNumber = u8;

/// One measurement stream handled by the station
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ChannelKind {
    /// Analog sound level, raw ADC counts
    Sound = 0,
    /// Analog light level, raw ADC counts
    Light = 1,
    /// Air temperature in Celsius (one half of the climate probe)
    Temperature = 2,
    /// Relative humidity in percent (other half of the climate probe)
    Humidity = 3,
    /// Momentary push button, 0 or 1
    Button = 4,
}

impl ChannelKind {
    /// Every kind, in station display order
    pub const ALL: [ChannelKind; 5] = [
        ChannelKind::Sound,
        ChannelKind::Light,
        ChannelKind::Temperature,
        ChannelKind::Humidity,
        ChannelKind::Button,
    ];

    /// Long display name
    pub const fn name(&self) -> &'static str {
        match self {
            ChannelKind::Sound => "Sound",
            ChannelKind::Light => "Light",
            ChannelKind::Temperature => "Temperature",
            ChannelKind::Humidity => "Humidity",
            ChannelKind::Button => "Button",
        }
    }

    /// Three-letter name for the character display
    pub const fn short_name(&self) -> &'static str {
        match self {
            ChannelKind::Sound => "Snd",
            ChannelKind::Light => "Lht",
            ChannelKind::Temperature => "Tmp",
            ChannelKind::Humidity => "Hum",
            ChannelKind::Button => "Btn",
        }
    }

    /// Unit suffix shown after displayed values
    pub const fn unit(&self) -> &'static str {
        match self {
            ChannelKind::Temperature => "C",
            ChannelKind::Humidity => "%",
            ChannelKind::Sound | ChannelKind::Light | ChannelKind::Button => "",
        }
    }

    /// Stock sampling configuration for this kind
    ///
    /// Slow signals get long windows, fast signals short ones; the button is
    /// a single-sample window so presses are never averaged away. The button
    /// also takes the inclusive threshold: a 0-to-1 flip moves exactly one
    /// precision unit, which the strict comparison would swallow.
    pub const fn default_config(&self) -> ChannelConfig {
        match self {
            ChannelKind::Sound => ChannelConfig::new(
                SOUND_WINDOW, SOUND_PRECISION, self.short_name(), self.name(), self.unit(),
            ),
            ChannelKind::Light => ChannelConfig::new(
                LIGHT_WINDOW, LIGHT_PRECISION, self.short_name(), self.name(), self.unit(),
            ),
            ChannelKind::Temperature => ChannelConfig::new(
                TEMPERATURE_WINDOW, TEMPERATURE_PRECISION, self.short_name(), self.name(), self.unit(),
            ),
            ChannelKind::Humidity => ChannelConfig::new(
                HUMIDITY_WINDOW, HUMIDITY_PRECISION, self.short_name(), self.name(), self.unit(),
            ),
            ChannelKind::Button => ChannelConfig::new(
                BUTTON_WINDOW, BUTTON_PRECISION, self.short_name(), self.name(), self.unit(),
            )
            .with_threshold(ThresholdMode::Inclusive),
        }
    }
}

/// Role of a physical port on the sensor bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum PortKind {
    /// Analog input: sound sensor
    Sound = 0,
    /// Analog input: light sensor
    Light = 1,
    /// Digital input: combined temperature/humidity probe
    TemperatureHumidity = 2,
    /// Analog output: status LED
    Led = 3,
    /// I2C output: 16x2 character display
    Lcd = 4,
    /// Digital output: alarm buzzer
    Buzzer = 5,
    /// Digital input: push button
    Button = 6,
}

impl PortKind {
    /// Every port role
    pub const ALL: [PortKind; 7] = [
        PortKind::Sound,
        PortKind::Light,
        PortKind::TemperatureHumidity,
        PortKind::Led,
        PortKind::Lcd,
        PortKind::Buzzer,
        PortKind::Button,
    ];

    /// Display name
    pub const fn name(&self) -> &'static str {
        match self {
            PortKind::Sound => "sound",
            PortKind::Light => "light",
            PortKind::TemperatureHumidity => "temperature/humidity",
            PortKind::Led => "led",
            PortKind::Lcd => "lcd",
            PortKind::Buzzer => "buzzer",
            PortKind::Button => "button",
        }
    }

    /// True for ports the station reads from each tick
    pub const fn is_input(&self) -> bool {
        matches!(
            self,
            PortKind::Sound | PortKind::Light | PortKind::TemperatureHumidity | PortKind::Button
        )
    }

    /// True for ports the station drives in reaction to readings
    pub const fn is_output(&self) -> bool {
        !self.is_input()
    }
}
