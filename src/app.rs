//! Per-tick application driver.
//!
//! [`App::tick`] is one pass of the main loop:
//!
//! 1. Scan the keypad and apply the keys (wake, navigation, settings)
//! 2. Check the idle timeout
//! 3. Sample the sensors and record history when due
//! 4. Render: full redraw if one is pending, otherwise an incremental
//!    update once per [`DISPLAY_INTERVAL_MS`]
//!
//! Nothing is drawn while the screen is off. Input handled in step 1 resets
//! the idle timer before step 2 looks at it, so a key press on the same tick
//! as the timeout keeps the screen on.

use embedded_graphics::{pixelcolor::Rgb565, prelude::*};

use cardenv_common::config::{BACKLIGHT_OFF, DISPLAY_INTERVAL_MS};
use cardenv_common::input::handle_keys;
use cardenv_common::render::RefreshTimer;
use cardenv_common::sensors::{InitReport, init_sensors, sample};
use cardenv_common::state::UiState;
use cardenv_common::traits::{Backlight, ClimateSensor, Keypad, PowerMonitor, PressureSensor};

use crate::render::{BatteryReading, Renderer};

/// Hardware collaborators the driver talks to.
pub struct Peripherals<C, P, K, B, M> {
    pub climate: C,
    pub pressure: P,
    pub keypad: K,
    pub backlight: B,
    pub power: M,
}

impl<C, P, K, B, M> Peripherals<C, P, K, B, M>
where
    M: PowerMonitor,
{
    fn battery(&mut self) -> BatteryReading {
        BatteryReading {
            level: self.power.battery_level(),
            charging: self.power.is_charging(),
        }
    }
}

/// What a tick painted.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Rendered {
    Nothing,
    Full,
    Incremental,
}

/// Application state, page views and refresh cadence.
#[derive(Debug)]
pub struct App {
    state: UiState,
    renderer: Renderer,
    refresh: RefreshTimer,
}

impl App {
    pub fn new(now_ms: u64) -> Self {
        Self {
            state: UiState::new(now_ms),
            renderer: Renderer::new(),
            refresh: RefreshTimer::new(DISPLAY_INTERVAL_MS, now_ms),
        }
    }

    #[inline]
    pub const fn state(&self) -> &UiState { &self.state }

    /// Apply the default brightness and bring up the sensors.
    pub fn boot<C, P, K, B, M>(
        &mut self,
        hw: &mut Peripherals<C, P, K, B, M>,
    ) -> InitReport
    where
        C: ClimateSensor,
        P: PressureSensor,
        B: Backlight,
    {
        hw.backlight.set_brightness(self.state.settings.brightness.backlight_level());
        let report = init_sensors(&mut hw.climate, &mut hw.pressure);
        log::info!("=== Setup Complete ===");
        report
    }

    /// Take the first reading, store it as the first history point and
    /// schedule the first full redraw.
    pub fn start<C, P, K, B, M>(
        &mut self,
        hw: &mut Peripherals<C, P, K, B, M>,
        now_ms: u64,
    ) where
        C: ClimateSensor,
        P: PressureSensor,
    {
        self.state.current = sample(&mut hw.climate, &mut hw.pressure);
        self.state.history.record_if_due(now_ms, &self.state.current);
        self.state.power.wake(now_ms);
        self.refresh.reset(now_ms);
        self.state.navigation.request_redraw();
    }

    /// Run one loop iteration.
    pub fn tick<C, P, K, B, M, D>(
        &mut self,
        hw: &mut Peripherals<C, P, K, B, M>,
        display: &mut D,
        now_ms: u64,
    ) -> Rendered
    where
        C: ClimateSensor,
        P: PressureSensor,
        K: Keypad,
        B: Backlight,
        M: PowerMonitor,
        D: DrawTarget<Color = Rgb565>,
    {
        let scan = hw.keypad.scan();
        let outcome = handle_keys(&mut self.state, &scan, now_ms);
        if outcome.restore_backlight() {
            hw.backlight.set_brightness(self.state.settings.brightness.backlight_level());
        }
        if outcome.unit_changed {
            self.renderer.invalidate_temperature();
        }

        if self.state.power.tick(now_ms, self.state.settings.timeout) {
            hw.backlight.set_brightness(BACKLIGHT_OFF);
        }

        self.state.current = sample(&mut hw.climate, &mut hw.pressure);
        self.state.history.record_if_due(now_ms, &self.state.current);

        if !self.state.power.is_on() {
            return Rendered::Nothing;
        }

        if self.state.navigation.take_redraw() {
            self.refresh.reset(now_ms);
            let battery = hw.battery();
            self.renderer.render_full(display, &self.state, battery, now_ms);
            Rendered::Full
        } else if self.refresh.due(now_ms) {
            let battery = hw.battery();
            self.renderer.render_incremental(display, &self.state, battery, now_ms);
            Rendered::Incremental
        } else {
            Rendered::Nothing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{CountingDisplay, FakeBacklight, FakeClimate, FakeKeypad, FakePower, FakePressure};
    use cardenv_common::config::{BOX_START_X, BOX_VALUE_Y, BOX_WIDTH, HISTORY_INTERVAL_MS};
    use embedded_graphics::primitives::Rectangle;
    use cardenv_common::measurement::TemperatureUnit;
    use cardenv_common::pages::Page;
    use cardenv_common::settings::{Brightness, IdleTimeout};

    type TestPeripherals = Peripherals<FakeClimate, FakePressure, FakeKeypad, FakeBacklight, FakePower>;

    fn peripherals() -> TestPeripherals {
        Peripherals {
            climate: FakeClimate {
                present: true,
                temperature: 21.0,
                humidity: 45.0,
            },
            pressure: FakePressure {
                address: Some(0x70),
                pressure_pa: 101_300.0,
            },
            keypad: FakeKeypad::default(),
            backlight: FakeBacklight::default(),
            power: FakePower::default(),
        }
    }

    fn started() -> (App, TestPeripherals, CountingDisplay) {
        let mut hw = peripherals();
        let mut app = App::new(0);
        app.boot(&mut hw);
        app.start(&mut hw, 0);
        (app, hw, CountingDisplay::new())
    }

    // -------------------------------------------------------------------------
    // Boot
    // -------------------------------------------------------------------------

    #[test]
    fn test_boot_sets_backlight_and_reports_sensors() {
        let mut hw = peripherals();
        hw.pressure.address = Some(0x56);
        let mut app = App::new(0);
        let report = app.boot(&mut hw);

        assert_eq!(hw.backlight.levels, vec![Brightness::default().backlight_level()]);
        assert!(report.climate_ok());
        assert_eq!(report.pressure, Ok(0x56), "Fallback address used");
    }

    #[test]
    fn test_start_records_first_history_point() {
        let (app, _, _) = started();
        assert_eq!(app.state().history.len(), 1);
        assert!((app.state().current.pressure - 1013.0).abs() < 1e-3, "Pressure in hPa");
    }

    // -------------------------------------------------------------------------
    // Render cadence
    // -------------------------------------------------------------------------

    #[test]
    fn test_first_tick_is_full_redraw() {
        let (mut app, mut hw, mut display) = started();
        assert_eq!(app.tick(&mut hw, &mut display, 50), Rendered::Full);
        assert_eq!(app.tick(&mut hw, &mut display, 100), Rendered::Nothing);
    }

    #[test]
    fn test_incremental_once_per_second() {
        let (mut app, mut hw, mut display) = started();
        app.tick(&mut hw, &mut display, 0);

        assert_eq!(app.tick(&mut hw, &mut display, 999), Rendered::Nothing);
        assert_eq!(app.tick(&mut hw, &mut display, 1000), Rendered::Incremental);
        assert_eq!(app.tick(&mut hw, &mut display, 1500), Rendered::Nothing);
        assert_eq!(app.tick(&mut hw, &mut display, 2000), Rendered::Incremental);
    }

    #[test]
    fn test_navigation_triggers_full_redraw() {
        let (mut app, mut hw, mut display) = started();
        app.tick(&mut hw, &mut display, 0);

        hw.keypad.push(&['h']);
        assert_eq!(app.tick(&mut hw, &mut display, 50), Rendered::Full);
        assert_eq!(app.state().navigation.page(), Page::HumidityGraph);

        hw.keypad.push(&['`']);
        assert_eq!(app.tick(&mut hw, &mut display, 100), Rendered::Full);
        assert_eq!(app.state().navigation.page(), Page::Main);
    }

    #[test]
    fn test_history_recorded_every_minute() {
        let (mut app, mut hw, mut display) = started();
        app.tick(&mut hw, &mut display, HISTORY_INTERVAL_MS - 1);
        assert_eq!(app.state().history.len(), 1);
        app.tick(&mut hw, &mut display, HISTORY_INTERVAL_MS);
        assert_eq!(app.state().history.len(), 2);
    }

    // -------------------------------------------------------------------------
    // Screen power
    // -------------------------------------------------------------------------

    fn with_timeout(timeout: IdleTimeout) -> (App, TestPeripherals, CountingDisplay) {
        let (mut app, hw, display) = started();
        app.state.settings.timeout = timeout;
        (app, hw, display)
    }

    #[test]
    fn test_timeout_turns_backlight_off_and_stops_drawing() {
        let (mut app, mut hw, mut display) = with_timeout(IdleTimeout::TenSeconds);
        app.tick(&mut hw, &mut display, 0);
        display.reset_count();

        assert_eq!(app.tick(&mut hw, &mut display, 10_000), Rendered::Nothing);
        assert_eq!(hw.backlight.levels.last(), Some(&BACKLIGHT_OFF));
        assert!(!app.state().power.is_on());

        assert_eq!(app.tick(&mut hw, &mut display, 20_000), Rendered::Nothing);
        assert_eq!(display.drawn(), 0, "Nothing drawn while off");
    }

    #[test]
    fn test_wake_key_is_consumed_and_redraws() {
        let (mut app, mut hw, mut display) = with_timeout(IdleTimeout::TenSeconds);
        app.tick(&mut hw, &mut display, 0);
        app.tick(&mut hw, &mut display, 10_000);

        hw.keypad.push(&['s']);
        assert_eq!(app.tick(&mut hw, &mut display, 11_000), Rendered::Full);
        assert_eq!(app.state().navigation.page(), Page::Main, "Wake key not interpreted");
        assert_eq!(
            hw.backlight.levels.last(),
            Some(&Brightness::default().backlight_level()),
            "Backlight restored"
        );
    }

    #[test]
    fn test_key_on_timeout_tick_keeps_screen_on() {
        let (mut app, mut hw, mut display) = with_timeout(IdleTimeout::TenSeconds);
        app.tick(&mut hw, &mut display, 0);

        hw.keypad.push(&['x']);
        app.tick(&mut hw, &mut display, 10_000);
        assert!(app.state().power.is_on());
    }

    #[test]
    fn test_never_timeout_keeps_screen_on() {
        let (mut app, mut hw, mut display) = with_timeout(IdleTimeout::Never);
        app.tick(&mut hw, &mut display, 0);
        app.tick(&mut hw, &mut display, 10_000_000);
        assert!(app.state().power.is_on());
    }

    // -------------------------------------------------------------------------
    // Settings
    // -------------------------------------------------------------------------

    #[test]
    fn test_brightness_applies_immediately() {
        let (mut app, mut hw, mut display) = started();
        app.tick(&mut hw, &mut display, 0);

        hw.keypad.push(&['s']);
        app.tick(&mut hw, &mut display, 50);
        hw.keypad.push(&['/']);
        app.tick(&mut hw, &mut display, 100);

        assert_eq!(app.state().settings.brightness, Brightness::MAX);
        assert_eq!(hw.backlight.levels.last(), Some(&255));
    }

    #[test]
    fn test_unit_change_repaints_temperature_on_return() {
        let (mut app, mut hw, mut display) = started();
        app.tick(&mut hw, &mut display, 0);

        let value_area = Rectangle::new(Point::new(BOX_START_X + 4, BOX_VALUE_Y - 2), Size::new(BOX_WIDTH - 8, 35));
        let celsius: Vec<_> = value_area.points().map(|p| display.pixel(p)).collect();

        for (at, key) in [(50, 's'), (100, '.'), (150, '/'), (200, '`')] {
            hw.keypad.push(&[key]);
            assert_eq!(app.tick(&mut hw, &mut display, at), Rendered::Full, "Key {key:?} redraws");
        }
        assert_eq!(app.state().navigation.page(), Page::Main);
        assert_eq!(app.state().settings.unit, TemperatureUnit::Fahrenheit);

        let fahrenheit: Vec<_> = value_area.points().map(|p| display.pixel(p)).collect();
        assert!(
            display.lit_in(value_area.top_left, value_area.size) > 0,
            "Temperature value painted"
        );
        assert_ne!(celsius, fahrenheit, "Temperature panel shows the converted value");
    }

    #[test]
    fn test_low_battery_blinks_on_refresh() {
        let (mut app, mut hw, mut display) = started();
        hw.power.level = 5;
        app.tick(&mut hw, &mut display, 0);
        display.reset_count();

        // Blink toggles are only painted on refresh ticks
        assert_eq!(app.tick(&mut hw, &mut display, 1000), Rendered::Incremental);
        assert!(display.drawn() > 0, "Blink phase repainted");
    }
}
