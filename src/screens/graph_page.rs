//! History graph for a single metric.
//!
//! ```text
//!  TEMPERATURE  23.4 C                       [bat]
//!  25 ┌──────────────────────────────────────┐
//!     │            •─•                       │
//!     │  •─•─•─•─•     •─•                   │
//!  21 └──────────────────────────────────────┘
//!     -1hr                                now
//!  ESC:back
//! ```
//!
//! The plot is repainted only when a new history sample has been recorded;
//! the title value follows the live reading through the dirty-value check.

use core::fmt::Write;

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle, Rectangle},
};
use heapless::String;

use cardenv_common::config::{GRAPH_HEIGHT, GRAPH_WIDTH, GRAPH_X, GRAPH_Y, HINT_Y, TITLE_X, TITLE_Y};
use cardenv_common::graph::{AxisRange, plot_x, plot_y};
use cardenv_common::measurement::Metric;
use cardenv_common::render::DisplayedValue;
use cardenv_common::state::UiState;

use super::PageView;
use crate::styles::{FRAME_STROKE, HINT_STYLE, LABEL_CHAR_WIDTH, label};
use crate::widgets::{clear_rect, draw_screen_centered, draw_text};

// =============================================================================
// Layout
// =============================================================================

/// Title value area cleared before each repaint.
const VALUE_CLEAR_Y: i32 = TITLE_Y - 2;
const VALUE_CLEAR_SIZE: Size = Size::new(70, 12);

const FRAME_BOTTOM: i32 = GRAPH_Y + GRAPH_HEIGHT as i32;

/// Axis label positions.
const MAX_LABEL_POS: Point = Point::new(2, GRAPH_Y);
const MIN_LABEL_POS: Point = Point::new(2, FRAME_BOTTOM - 8);
const OLDEST_LABEL_POS: Point = Point::new(GRAPH_X, FRAME_BOTTOM + 3);
const NEWEST_LABEL_POS: Point = Point::new(GRAPH_X + GRAPH_WIDTH as i32 - 18, FRAME_BOTTOM + 3);
const HINT_POS: Point = Point::new(TITLE_X, HINT_Y);

/// Placeholder row, vertically centered in the frame.
const COLLECTING_Y: i32 = GRAPH_Y + GRAPH_HEIGHT as i32 / 2 - 8;

/// Everything inside the frame outline.
const PLOT_ORIGIN: Point = Point::new(GRAPH_X + 1, GRAPH_Y + 1);
const PLOT_SIZE: Size = Size::new(GRAPH_WIDTH - 2, GRAPH_HEIGHT - 2);

/// Column left of the frame holding the y labels.
const AXIS_ORIGIN: Point = Point::new(0, GRAPH_Y);
const AXIS_SIZE: Size = Size::new(GRAPH_X as u32, GRAPH_HEIGHT + 2);

/// X position of the live value, after the title and a gap.
const fn value_x(metric: Metric) -> i32 { TITLE_X + metric.title().len() as i32 * LABEL_CHAR_WIDTH + 10 }

// =============================================================================
// View
// =============================================================================

/// Graph page renderer for one metric.
#[derive(Debug)]
pub struct GraphView {
    metric: Metric,
    value: DisplayedValue,
    /// History revision the current plot was drawn from.
    plotted_revision: Option<u32>,
}

impl GraphView {
    pub const fn new(metric: Metric) -> Self {
        Self {
            metric,
            value: DisplayedValue::new(),
            plotted_revision: None,
        }
    }

    #[inline]
    pub const fn metric(&self) -> Metric { self.metric }

    /// Force the title value to repaint if this graph shows temperature.
    pub const fn invalidate_temperature(&mut self) {
        if matches!(self.metric, Metric::Temperature) {
            self.value.invalidate();
        }
    }

    fn draw_value<D>(
        &mut self,
        display: &mut D,
        state: &UiState,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let unit = state.settings.unit;
        let reading = self.metric.value(&state.current, unit);
        if !self.value.update(reading) {
            return;
        }

        let x = value_x(self.metric);
        clear_rect(display, Point::new(x, VALUE_CLEAR_Y), VALUE_CLEAR_SIZE);
        let text = self.metric.format_title(reading, unit);
        draw_text(display, &text, Point::new(x, TITLE_Y), label(self.metric.color()));
    }

    fn draw_plot<D>(
        &mut self,
        display: &mut D,
        state: &UiState,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        self.plotted_revision = Some(state.history.revision());

        let metric = self.metric;
        let unit = state.settings.unit;
        let ring = state.history.ring(metric);
        let values = ring.iter().map(|raw| metric.display(raw, unit));

        let range = match AxisRange::fit(values.clone()) {
            Some(range) if ring.len() >= 2 => range,
            _ => {
                draw_screen_centered(display, "Collecting...", COLLECTING_Y, HINT_STYLE);
                return;
            }
        };

        let mut text: String<10> = String::new();
        let _ = write!(text, "{:.0}", range.max);
        draw_text(display, &text, MAX_LABEL_POS, HINT_STYLE);
        text.clear();
        let _ = write!(text, "{:.0}", range.min);
        draw_text(display, &text, MIN_LABEL_POS, HINT_STYLE);

        let color = metric.color();
        let dot = PrimitiveStyle::with_fill(color);
        let stroke = PrimitiveStyle::with_stroke(color, 1);
        let mut previous: Option<Point> = None;
        for (slot, value) in values.enumerate() {
            let point = Point::new(plot_x(slot), plot_y(value, &range));
            Circle::with_center(point, 3).into_styled(dot).draw(display).ok();
            if let Some(prev) = previous {
                Line::new(prev, point).into_styled(stroke).draw(display).ok();
            }
            previous = Some(point);
        }
    }
}

impl<D> PageView<D> for GraphView
where
    D: DrawTarget<Color = Rgb565>,
{
    fn render_full(
        &mut self,
        display: &mut D,
        state: &UiState,
    ) {
        draw_text(display, self.metric.title(), Point::new(TITLE_X, TITLE_Y), label(self.metric.color()));

        Rectangle::new(Point::new(GRAPH_X, GRAPH_Y), Size::new(GRAPH_WIDTH, GRAPH_HEIGHT))
            .into_styled(FRAME_STROKE)
            .draw(display)
            .ok();
        draw_text(display, "-1hr", OLDEST_LABEL_POS, HINT_STYLE);
        draw_text(display, "now", NEWEST_LABEL_POS, HINT_STYLE);
        draw_text(display, "ESC:back", HINT_POS, HINT_STYLE);

        self.draw_plot(display, state);

        self.value.invalidate();
        self.draw_value(display, state);
    }

    fn render_incremental(
        &mut self,
        display: &mut D,
        state: &UiState,
    ) {
        self.draw_value(display, state);

        if self.plotted_revision != Some(state.history.revision()) {
            clear_rect(display, PLOT_ORIGIN, PLOT_SIZE);
            clear_rect(display, AXIS_ORIGIN, AXIS_SIZE);
            self.draw_plot(display, state);
        }
    }
}
