//! Main dashboard: three bordered panels with icon, value and unit.
//!
//! ```text
//! ┌────────┐ ┌────────┐ ┌────────┐
//! │  icon  │ │  icon  │ │  icon  │
//! │  23.4  │ │   45   │ │  1013  │
//! │   C    │ │   %    │ │  hPa   │
//! └────────┘ └────────┘ └────────┘
//! ```
//!
//! Each panel value is tracked separately, so a change in one metric only
//! repaints that panel's value area.

use embedded_graphics::{pixelcolor::Rgb565, prelude::*, primitives::Rectangle};

use cardenv_common::config::{
    BOX_BORDER,
    BOX_HEIGHT,
    BOX_ICON_Y,
    BOX_RADIUS,
    BOX_START_X,
    BOX_STRIDE,
    BOX_UNIT_Y,
    BOX_VALUE_Y,
    BOX_WIDTH,
    BOX_Y,
};
use cardenv_common::measurement::Metric;
use cardenv_common::render::DisplayedValue;
use cardenv_common::state::UiState;

use super::PageView;
use crate::styles::{label, value};
use crate::widgets::{clear_rect, draw_centered_text, draw_metric_icon, draw_thick_round_rect};

/// Horizontal center of a panel.
const HALF_BOX: i32 = BOX_WIDTH as i32 / 2;

/// Value/unit area cleared before repainting a panel value.
const VALUE_CLEAR_INSET: i32 = BOX_BORDER as i32 + 2;
const VALUE_CLEAR_SIZE: Size = Size::new(BOX_WIDTH - 2 * (BOX_BORDER + 2), 35);

/// Left edge of the panel showing `metric`.
const fn panel_x(index: usize) -> i32 { BOX_START_X + index as i32 * BOX_STRIDE }

/// Main page renderer.
#[derive(Debug, Default)]
pub struct MainView {
    displayed: [DisplayedValue; 3],
}

impl MainView {
    pub const fn new() -> Self {
        Self {
            displayed: [DisplayedValue::new(); 3],
        }
    }

    /// Force the temperature panel to repaint on the next update.
    pub const fn invalidate_temperature(&mut self) { self.displayed[0].invalidate(); }

    fn draw_values<D>(
        &mut self,
        display: &mut D,
        state: &UiState,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let unit = state.settings.unit;
        for (index, metric) in Metric::ALL.into_iter().enumerate() {
            let reading = metric.value(&state.current, unit);
            if !self.displayed[index].update(reading) {
                continue;
            }

            let x = panel_x(index);
            let color = metric.color();
            clear_rect(
                display,
                Point::new(x + VALUE_CLEAR_INSET, BOX_VALUE_Y - 2),
                VALUE_CLEAR_SIZE,
            );
            let text = metric.format_panel(reading);
            draw_centered_text(display, &text, x + HALF_BOX, BOX_VALUE_Y, value(color));
            draw_centered_text(display, metric.unit(unit), x + HALF_BOX, BOX_UNIT_Y, label(color));
        }
    }
}

impl<D> PageView<D> for MainView
where
    D: DrawTarget<Color = Rgb565>,
{
    fn render_full(
        &mut self,
        display: &mut D,
        state: &UiState,
    ) {
        for (index, metric) in Metric::ALL.into_iter().enumerate() {
            let x = panel_x(index);
            let bounds = Rectangle::new(Point::new(x, BOX_Y), Size::new(BOX_WIDTH, BOX_HEIGHT));
            draw_thick_round_rect(display, bounds, BOX_RADIUS, BOX_BORDER, metric.color());
            draw_metric_icon(display, metric, Point::new(x + HALF_BOX, BOX_ICON_Y));
        }

        self.displayed = [DisplayedValue::new(); 3];
        self.draw_values(display, state);
    }

    fn render_incremental(
        &mut self,
        display: &mut D,
        state: &UiState,
    ) {
        self.draw_values(display, state);
    }
}
