//! Hardware Seam Traits
//!
//! The crate never touches hardware. Everything it needs from the outside
//! world is expressed by two traits: a [`SensorBus`] it reads raw
//! measurements from and an [`ActuatorBus`] it drives reactions through.
//! Implementations wrap whatever transport the deployment actually has - a
//! serial microcontroller bridge, an I2C expander, or a scripted mock in
//! tests.
//!
//! ## Read semantics
//!
//! Sensor reads are non-blocking in the `nb` sense:
//!
//! - `Ok(value)` - a measurement was taken this tick. The value may still be
//!   garbage (NaN); the sampler's own failure accounting handles that.
//! - `Err(nb::Error::WouldBlock)` - the sensor has nothing yet (a slow
//!   climate probe mid-conversion). The driver simply takes no sample this
//!   tick; this is not a failure.
//! - `Err(nb::Error::Other(_))` - the transport actually failed. The driver
//!   converts this into the NaN sentinel and feeds it to the channel, so a
//!   flaky wire shows up in the channel's failure streak instead of
//!   vanishing silently.
//!
//! ## Write semantics
//!
//! Actuator writes return plain `Result`s and propagate to the caller:
//! actuation failures are a deployment problem for the driver loop to
//! handle, not something the sampling core can absorb meaningfully.

use crate::{display::Rgb, kinds::PortNumber};

/// Raw measurement source for the station's input ports
pub trait SensorBus {
    /// Transport error type for hard failures
    type Error;

    /// Reads an analog level (sound, light) from `port`
    fn read_analog(&mut self, port: PortNumber) -> nb::Result<f32, Self::Error>;

    /// Reads a digital level (button) from `port`, 0.0 or 1.0
    fn read_digital(&mut self, port: PortNumber) -> nb::Result<f32, Self::Error>;

    /// Reads the combined climate probe: `(temperature, humidity)`
    fn read_climate(&mut self, port: PortNumber) -> nb::Result<(f32, f32), Self::Error>;
}

/// Output sink for the station's reactions
pub trait ActuatorBus {
    /// Transport error type
    type Error;

    /// Sets LED brightness, 0 (off) to 255 (full)
    fn set_led(&mut self, level: u8) -> Result<(), Self::Error>;

    /// Switches the alarm buzzer
    fn set_buzzer(&mut self, on: bool) -> Result<(), Self::Error>;

    /// Writes a line of text and a backlight color to the LCD
    fn set_lcd(&mut self, text: &str, color: Rgb) -> Result<(), Self::Error>;

    /// Blanks the LCD text and backlight
    fn clear_lcd(&mut self) -> Result<(), Self::Error>;
}
