//! Display geometry and color-gradient parameters

/// Character columns on the attached LCD
pub const LCD_COLS: usize = 16;

/// Character rows on the attached LCD
pub const LCD_ROWS: usize = 2;

/// Total character budget for one LCD update (`LCD_COLS * LCD_ROWS`)
pub const LCD_CHARS: usize = LCD_COLS * LCD_ROWS;

/// Capacity of the long-form status line logged at info level
pub const MAX_STATUS_LEN: usize = 128;

/// Temperature at which the LCD backlight is pure green, in Celsius
pub const COMFORT_TEMP_C: f32 = 20.0;

/// Backlight color slope, in 8-bit counts per degree of variance
///
/// 42.5 maps a 6-degree deviation from [`COMFORT_TEMP_C`] onto the full
/// 0..=255 channel range (a 12-degree total spread across blue..red).
pub const COLOR_COUNTS_PER_DEGREE: f32 = 42.5;

/// Divisor mapping a raw 10-bit light reading onto 8-bit LED brightness
pub const LED_LEVEL_DIVISOR: i32 = 4;
