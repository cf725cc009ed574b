//! Color constants for the CardENV display.
//!
//! The Cardputer LCD is driven in Rgb565, so every color here is a const
//! `Rgb565` built from 5/6/5-bit channels. The three metric accent colors
//! match the panel borders on the main page and the graph lines.
//!
//! ## Rgb565 Color Format
//!
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Background of every page.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Unselected settings rows, splash text.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red. Failed sensor status, battery at or below 30%.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green. Passed sensor status, charging or healthy battery.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure yellow. Selected settings row, battery between 31% and 70%.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

/// Cyan. Splash screen title.
pub const CYAN: Rgb565 = Rgb565::CYAN;

// =============================================================================
// Custom Colors (application-specific)
// =============================================================================

/// Mid gray for axis frames, hints and axis labels.
/// RGB565: (15, 31, 15), raw 0x7BEF.
pub const DARK_GRAY: Rgb565 = Rgb565::new(15, 31, 15);

/// Very dark gray fill behind the selected settings row.
/// RGB565: (4, 8, 4), raw 0x2104.
pub const ROW_HIGHLIGHT: Rgb565 = Rgb565::new(4, 8, 4);

/// Coral accent for temperature. RGB565: (31, 41, 0), raw 0xFD20.
pub const TEMPERATURE: Rgb565 = Rgb565::new(31, 41, 0);

/// Cyan accent for humidity. RGB565: (0, 63, 31), raw 0x07FF.
pub const HUMIDITY: Rgb565 = Rgb565::new(0, 63, 31);

/// Purple accent for pressure. RGB565: (26, 0, 31), raw 0xD01F.
pub const PRESSURE: Rgb565 = Rgb565::new(26, 0, 31);
