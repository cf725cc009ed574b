//! Page dispatch and the shared battery indicator.
//!
//! [`Renderer`] owns one view per page and routes full and incremental
//! renders to the view of the current page. The battery indicator is drawn
//! on every page, so it lives here rather than in the views.
//!
//! # Update Strategy
//!
//! | Element | Full render | Incremental render |
//! |---------|-------------|--------------------|
//! | Page chrome | Always | Never |
//! | Values | Always | When changed by at least 0.05 |
//! | Graph plot | Always | When a history sample was recorded |
//! | Battery | Always | On level/charging change or blink toggle |

use embedded_graphics::{pixelcolor::Rgb565, prelude::*};

use cardenv_common::measurement::Metric;
use cardenv_common::pages::Page;
use cardenv_common::render::BatteryIndicator;
use cardenv_common::state::UiState;

use crate::screens::{GraphView, MainView, PageView, SettingsView};
use crate::widgets::draw_battery;

/// Battery gauge sample passed in by the driver.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BatteryReading {
    pub level: u8,
    pub charging: bool,
}

/// Per-page views plus the battery indicator state.
#[derive(Debug)]
pub struct Renderer {
    main: MainView,
    graphs: [GraphView; 3],
    settings: SettingsView,
    battery: BatteryIndicator,
}

impl Renderer {
    pub const fn new() -> Self {
        Self {
            main: MainView::new(),
            graphs: [
                GraphView::new(Metric::Temperature),
                GraphView::new(Metric::Humidity),
                GraphView::new(Metric::Pressure),
            ],
            settings: SettingsView::new(),
            battery: BatteryIndicator::new(),
        }
    }

    /// View responsible for `page`.
    fn view<D>(
        &mut self,
        page: Page,
    ) -> &mut dyn PageView<D>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        if let Some(metric) = page.metric() {
            return &mut self.graphs[metric as usize];
        }
        match page {
            Page::Settings => &mut self.settings,
            _ => &mut self.main,
        }
    }

    /// Clear the screen and paint the current page from scratch.
    pub fn render_full<D>(
        &mut self,
        display: &mut D,
        state: &UiState,
        battery: BatteryReading,
        now_ms: u64,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        display.clear(Rgb565::BLACK).ok();
        if let Some(frame) = self.battery.poll(now_ms, battery.level, battery.charging, true) {
            draw_battery(display, &frame);
        }
        self.view::<D>(state.navigation.page()).render_full(display, state);
    }

    /// Repaint only what changed on the current page.
    pub fn render_incremental<D>(
        &mut self,
        display: &mut D,
        state: &UiState,
        battery: BatteryReading,
        now_ms: u64,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        self.view::<D>(state.navigation.page()).render_incremental(display, state);
        if let Some(frame) = self.battery.poll(now_ms, battery.level, battery.charging, false) {
            draw_battery(display, &frame);
        }
    }

    /// Temperature text must repaint after a unit change even if the reading
    /// itself did not move.
    pub const fn invalidate_temperature(&mut self) {
        self.main.invalidate_temperature();
        self.graphs[0].invalidate_temperature();
    }
}

impl Default for Renderer {
    fn default() -> Self { Self::new() }
}
