//! Page navigation for the CardENV UI.
//!
//! The main dashboard is the hub: every other page is entered from it with a
//! hotkey and left with ESC, so pages never transition directly to each other.
//!
//! # Pages
//!
//! - [`Page::Main`]: three panels (temperature, humidity, pressure)
//! - [`Page::TemperatureGraph`], [`Page::HumidityGraph`], [`Page::PressureGraph`]: one hour of history
//! - [`Page::Settings`]: brightness, temperature unit, idle timeout

use crate::measurement::Metric;

/// Available pages in the application.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    /// Live dashboard with the three metric panels.
    #[default]
    Main,

    /// Temperature history graph (`T`).
    TemperatureGraph,

    /// Humidity history graph (`H`).
    HumidityGraph,

    /// Pressure history graph (`P`).
    PressureGraph,

    /// Settings page (`S`).
    Settings,
}

impl Page {
    /// Page selected by a hotkey on the main page.
    ///
    /// Expects an already case-folded (uppercase) symbol.
    #[inline]
    pub const fn from_hotkey(key: char) -> Option<Self> {
        match key {
            'T' => Some(Self::TemperatureGraph),
            'H' => Some(Self::HumidityGraph),
            'P' => Some(Self::PressureGraph),
            'S' => Some(Self::Settings),
            _ => None,
        }
    }

    /// Metric plotted by a graph page, `None` for the other pages.
    ///
    /// The renderer picks the graph view for a page with this.
    #[inline]
    pub const fn metric(self) -> Option<Metric> {
        match self {
            Self::TemperatureGraph => Some(Metric::Temperature),
            Self::HumidityGraph => Some(Metric::Humidity),
            Self::PressureGraph => Some(Metric::Pressure),
            Self::Main | Self::Settings => None,
        }
    }

    /// Short label used in navigation log lines.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::TemperatureGraph => "TEMP graph",
            Self::HumidityGraph => "HUMIDITY graph",
            Self::PressureGraph => "PRESSURE graph",
            Self::Settings => "SETTINGS",
        }
    }
}
