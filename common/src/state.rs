//! Application state owned by the main loop.
//!
//! Everything the input handler mutates and the renderers read lives in one
//! struct passed by reference, so there is no global mutable state.

use crate::history::History;
use crate::measurement::Measurement;
use crate::navigation::Navigation;
use crate::power::ScreenPower;
use crate::settings::Settings;

/// Navigation, settings, power state, history and the latest sample.
#[derive(Clone, Debug)]
pub struct UiState {
    pub navigation: Navigation,
    pub settings: Settings,
    pub power: ScreenPower,
    pub history: History,
    /// Most recent sensor snapshot.
    pub current: Measurement,
}

impl UiState {
    /// Fresh state with default settings and the idle timer started at `now_ms`.
    pub fn new(now_ms: u64) -> Self {
        Self {
            navigation: Navigation::new(),
            settings: Settings::default(),
            power: ScreenPower::new(now_ms),
            history: History::new(),
            current: Measurement::default(),
        }
    }
}
