//! Settings page: brightness bar, temperature unit toggle, idle timeout.
//!
//! ```text
//!                SETTINGS                  [bat]
//!  ╭──────────────────────────────────────────╮
//!  │ Brightness:  [██████████░░░░░░]  80%     │  <- selected row
//!  ╰──────────────────────────────────────────╯
//!    Temp Unit:   (  C  )  (  F  )
//!    Timeout:     (10s) (30s) (Off)
//!  ESC:back | < >:change
//! ```
//!
//! The page has no live values, so incremental updates draw nothing. Every
//! cursor move or setting change requests a full redraw instead.

use core::fmt::Write;

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};
use heapless::String;

use cardenv_common::colors::{ROW_HIGHLIGHT, WHITE, YELLOW};
use cardenv_common::config::{HINT_Y, SCREEN_WIDTH, TITLE_X, TITLE_Y};
use cardenv_common::measurement::TemperatureUnit;
use cardenv_common::settings::{IdleTimeout, SettingsRow};
use cardenv_common::state::UiState;

use super::PageView;
use crate::styles::{HINT_STYLE, TITLE_STYLE_WHITE, label};
use crate::widgets::{draw_pill, draw_screen_centered, draw_text, fill_round_rect};

// =============================================================================
// Layout
// =============================================================================

const FIRST_ROW_Y: i32 = 35;
const ROW_PITCH: i32 = 35;
const LABEL_X: i32 = 20;
const CONTROL_X: i32 = 90;

const HIGHLIGHT_X: i32 = 10;
const HIGHLIGHT_SIZE: Size = Size::new(SCREEN_WIDTH - 20, ROW_PITCH as u32 - 2);
const HIGHLIGHT_RADIUS: u32 = 5;

const BAR_SIZE: Size = Size::new(100, 12);
/// Inner width of the brightness bar fill.
const BAR_INNER: u32 = BAR_SIZE.width - 4;

const UNIT_PILL: Size = Size::new(40, 14);
const UNIT_PILL_PITCH: i32 = 45;
const TIMEOUT_PILL: Size = Size::new(32, 14);
const TIMEOUT_PILL_PITCH: i32 = 35;

const fn row_y(row: SettingsRow) -> i32 { FIRST_ROW_Y + row.index() as i32 * ROW_PITCH }

// =============================================================================
// Rows
// =============================================================================

fn draw_brightness<D>(
    display: &mut D,
    y: i32,
    percent: u8,
    bar_fill: u32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let bar = Point::new(CONTROL_X, y + 3);
    Rectangle::new(bar, BAR_SIZE)
        .into_styled(PrimitiveStyle::with_stroke(color, 1))
        .draw(display)
        .ok();
    if bar_fill > 0 {
        Rectangle::new(bar + Point::new(2, 2), Size::new(bar_fill, BAR_SIZE.height - 4))
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(display)
            .ok();
    }

    let mut text: String<8> = String::new();
    let _ = write!(text, "{percent}%");
    draw_text(display, &text, Point::new(CONTROL_X + BAR_SIZE.width as i32 + 8, y + 5), label(color));
}

fn draw_unit_toggle<D>(
    display: &mut D,
    y: i32,
    unit: TemperatureUnit,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let options = [TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit];
    for (i, option) in options.into_iter().enumerate() {
        let origin = Point::new(CONTROL_X + i as i32 * UNIT_PILL_PITCH, y + 2);
        draw_pill(
            display,
            Rectangle::new(origin, UNIT_PILL),
            option.symbol(),
            Point::new(10, 3),
            option == unit,
            color,
        );
    }
}

fn draw_timeout_options<D>(
    display: &mut D,
    y: i32,
    timeout: IdleTimeout,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for (i, option) in IdleTimeout::ALL.into_iter().enumerate() {
        let origin = Point::new(CONTROL_X + i as i32 * TIMEOUT_PILL_PITCH, y + 2);
        draw_pill(
            display,
            Rectangle::new(origin, TIMEOUT_PILL),
            option.label(),
            Point::new(6, 3),
            option == timeout,
            color,
        );
    }
}

// =============================================================================
// View
// =============================================================================

/// Settings page renderer.
#[derive(Debug, Default)]
pub struct SettingsView;

impl SettingsView {
    pub const fn new() -> Self { Self }
}

impl<D> PageView<D> for SettingsView
where
    D: DrawTarget<Color = Rgb565>,
{
    fn render_full(
        &mut self,
        display: &mut D,
        state: &UiState,
    ) {
        draw_screen_centered(display, "SETTINGS", TITLE_Y, TITLE_STYLE_WHITE);

        let settings = &state.settings;
        let cursor = state.navigation.cursor();
        for row in SettingsRow::ALL {
            let y = row_y(row);
            let selected = row == cursor;
            let color = if selected { YELLOW } else { WHITE };
            if selected {
                let highlight = Rectangle::new(Point::new(HIGHLIGHT_X, y - 3), HIGHLIGHT_SIZE);
                fill_round_rect(display, highlight, HIGHLIGHT_RADIUS, ROW_HIGHLIGHT);
            }
            draw_text(display, row.label(), Point::new(LABEL_X, y + 5), label(color));

            match row {
                SettingsRow::Brightness => {
                    let brightness = settings.brightness;
                    draw_brightness(display, y, brightness.percent(), brightness.bar_fill(BAR_INNER), color);
                }
                SettingsRow::Unit => draw_unit_toggle(display, y, settings.unit, color),
                SettingsRow::Timeout => draw_timeout_options(display, y, settings.timeout, color),
            }
        }

        draw_text(display, "ESC:back | < >:change", Point::new(TITLE_X, HINT_Y), HINT_STYLE);
    }

    fn render_incremental(
        &mut self,
        _display: &mut D,
        _state: &UiState,
    ) {
    }
}
