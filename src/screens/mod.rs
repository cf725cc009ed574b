//! Page renderers.
//!
//! # Pages
//!
//! - **Main** ([`main_page`]): three metric panels with icons
//! - **Graph** ([`graph_page`]): one-hour history of a single metric
//! - **Settings** ([`settings_page`]): brightness, unit and idle timeout
//! - **Splash** ([`splash`]): boot banner and sensor status, shown once
//!
//! # Redraw Model
//!
//! Every page implements [`PageView`]. A full render assumes a cleared screen
//! and paints everything the page owns; an incremental render repaints only
//! values that changed since the last call. The battery indicator belongs to
//! the [`Renderer`](crate::render::Renderer), not to the pages.

use embedded_graphics::{pixelcolor::Rgb565, prelude::*};

use cardenv_common::state::UiState;

mod graph_page;
mod main_page;
mod settings_page;
mod splash;

pub use graph_page::GraphView;
pub use main_page::MainView;
pub use settings_page::SettingsView;
pub use splash::{draw_splash_header, draw_splash_status};

/// A page that can paint itself from the shared state.
pub trait PageView<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    /// Paint the whole page onto a cleared screen.
    fn render_full(
        &mut self,
        display: &mut D,
        state: &UiState,
    );

    /// Repaint whatever changed since the last render.
    fn render_incremental(
        &mut self,
        display: &mut D,
        state: &UiState,
    );
}
