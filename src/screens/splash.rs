//! Boot splash: banner first, sensor status once bring-up has finished.

use embedded_graphics::{pixelcolor::Rgb565, prelude::*};

use cardenv_common::colors::{CYAN, GREEN, RED};
use cardenv_common::sensors::InitReport;

use crate::styles::{HINT_STYLE, LABEL_STYLE_WHITE, label, title};
use crate::widgets::draw_screen_centered;

const TITLE_Y: i32 = 36;
const SUBTITLE_Y: i32 = 65;
const CLIMATE_Y: i32 = 85;
const PRESSURE_Y: i32 = 100;
const HINT_Y: i32 = 118;

/// Banner shown while the sensors are brought up.
pub fn draw_splash_header<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(Rgb565::BLACK).ok();
    draw_screen_centered(display, "CardENV", TITLE_Y, title(CYAN));
    draw_screen_centered(display, "Initializing...", SUBTITLE_Y, LABEL_STYLE_WHITE);
}

/// One pass/fail line per sensor, then the hotkey hint.
pub fn draw_splash_status<D>(
    display: &mut D,
    report: &InitReport,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let (text, color) = if report.climate_ok() { ("SHT30: OK", GREEN) } else { ("SHT30: FAILED", RED) };
    draw_screen_centered(display, text, CLIMATE_Y, label(color));

    let (text, color) = if report.pressure_ok() { ("QMP6988: OK", GREEN) } else { ("QMP6988: FAILED", RED) };
    draw_screen_centered(display, text, PRESSURE_Y, label(color));

    draw_screen_centered(display, "T:Temp H:Humid P:Press S:Set", HINT_Y, HINT_STYLE);
}
