//! Battery indicator in the top-right corner.
//!
//! Layout (from [`BATTERY_X`], [`BATTERY_Y`]):
//!
//! ```text
//!  ┌──────────────────────┐▌ 87%
//!  │██████████████▒▒▒▒▒▒▒ │▌
//!  └──────────────────────┘
//!     22x10 outline, 2x6 nub, level bar, optional bolt, percentage
//! ```

use core::fmt::Write;

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};
use heapless::String;

use cardenv_common::colors::BLACK;
use cardenv_common::config::{BATTERY_HEIGHT, BATTERY_WIDTH, BATTERY_X, BATTERY_Y};
use cardenv_common::render::BatteryFrame;

use super::icons::draw_lightning_bolt;
use super::primitives::{clear_rect, draw_text};
use crate::styles::label;

/// Region cleared before every repaint (outline, nub and text).
const CLEAR_ORIGIN: Point = Point::new(BATTERY_X - 3, BATTERY_Y - 1);
const CLEAR_SIZE: Size = Size::new(58, 14);

/// Inner width available to the level bar.
const BAR_WIDTH: u32 = BATTERY_WIDTH - 4;

/// Repaint the battery indicator for `frame`.
///
/// The area is always cleared; during the off phase of the low-battery blink
/// nothing else is drawn.
pub fn draw_battery<D>(
    display: &mut D,
    frame: &BatteryFrame,
) where
    D: DrawTarget<Color = Rgb565>,
{
    clear_rect(display, CLEAR_ORIGIN, CLEAR_SIZE);
    if !frame.visible {
        return;
    }

    let color = frame.color();
    let origin = Point::new(BATTERY_X, BATTERY_Y);

    Rectangle::new(origin, Size::new(BATTERY_WIDTH, BATTERY_HEIGHT))
        .into_styled(PrimitiveStyle::with_stroke(color, 1))
        .draw(display)
        .ok();
    Rectangle::new(origin + Point::new(BATTERY_WIDTH as i32, 2), Size::new(2, 6))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();

    let fill = frame.fill_width(BAR_WIDTH);
    if fill > 0 {
        Rectangle::new(origin + Point::new(2, 2), Size::new(fill, BATTERY_HEIGHT - 4))
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(display)
            .ok();
    }

    if frame.charging {
        draw_lightning_bolt(display, origin + Point::new(6, 1), BLACK);
    }

    let mut text: String<8> = String::new();
    let _ = write!(text, "{}%", frame.level);
    draw_text(display, &text, origin + Point::new(BATTERY_WIDTH as i32 + 4, 1), label(color));
}
