//! Status-Line Formatting and LCD Color Helpers
//!
//! Pure presentation helpers shared by drivers: fixed-capacity text lines
//! for the log and the 16x2 character display, LED brightness scaling, and
//! the temperature-to-backlight color gradient. Nothing here touches channel
//! state; everything formats the values the gates have already reported.

use core::fmt::Write;

use heapless::String;

use crate::{
    constants::display::{
        COLOR_COUNTS_PER_DEGREE, COMFORT_TEMP_C, LCD_CHARS, LED_LEVEL_DIVISOR, MAX_STATUS_LEN,
    },
    kinds::ChannelKind,
    registry::ChannelSet,
};

/// 8-bit RGB backlight color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red component
    pub r: u8,
    /// Green component
    pub g: u8,
    /// Blue component
    pub b: u8,
}

impl Rgb {
    /// Backlight off
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
}

/// Scales a raw 10-bit light reading onto 8-bit LED brightness
pub fn led_level(light_value: i32) -> u8 {
    (light_value / LED_LEVEL_DIVISOR).clamp(0, u8::MAX as i32) as u8
}

/// Color-channel adjustment for a temperature variance, saturating at 255
fn color_adjustment(variance: f32) -> u8 {
    let adj = libm::fabsf(COLOR_COUNTS_PER_DEGREE * variance) as u32;
    adj.min(u8::MAX as u32) as u8
}

/// Backlight color for a reported temperature
///
/// Pure green at the comfort point; colder temperatures slide green into
/// blue, warmer ones slide green into red, saturating about six degrees out.
pub fn lcd_background(temperature: f32) -> Rgb {
    let variance = temperature - COMFORT_TEMP_C;
    let adj = color_adjustment(variance);

    if variance < 0.0 {
        // Too cold: no red, blue rises as green falls
        Rgb { r: 0, g: u8::MAX - adj, b: adj }
    } else if variance > 0.0 {
        // Too hot: no blue, red rises as green falls
        Rgb { r: adj, g: u8::MAX - adj, b: 0 }
    } else {
        Rgb { r: 0, g: u8::MAX, b: 0 }
    }
}

/// Long-form status line for the log: every reporting channel with its
/// full name and unit
///
/// Channels that have not reported yet are omitted. Output is truncated at
/// the line's fixed capacity.
pub fn status_line(channels: &ChannelSet) -> String<MAX_STATUS_LEN> {
    let mut line: String<MAX_STATUS_LEN> = String::new();

    for (kind, channel) in channels.iter() {
        let Some(value) = channel.peek() else {
            continue;
        };
        if !line.is_empty() {
            let _ = line.push_str("; ");
        }
        let _ = write!(line, "{}: {}{}", kind.name(), value, channel.config().unit);
    }

    line
}

/// Compact line for the 16x2 display: short names, button omitted
///
/// The button state is station plumbing, not something worth a slot on a
/// 32-character screen.
pub fn lcd_line(channels: &ChannelSet) -> String<LCD_CHARS> {
    let mut line: String<LCD_CHARS> = String::new();

    for (kind, channel) in channels.iter() {
        if kind == ChannelKind::Button {
            continue;
        }
        let Some(value) = channel.peek() else {
            continue;
        };
        if !line.is_empty() {
            let _ = line.push(' ');
        }
        let _ = write!(line, "{}:{}{}", kind.short_name(), value, channel.config().unit);
    }

    line
}

/// A full blank line, for clearing the display
pub fn blank_line() -> String<LCD_CHARS> {
    let mut line: String<LCD_CHARS> = String::new();
    for _ in 0..LCD_CHARS {
        let _ = line.push(' ');
    }
    line
}
