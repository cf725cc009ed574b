//! Simulated hardware for the desktop build.
//!
//! Sensor readings are slow sine waves around typical indoor values, so the
//! history graphs show some shape after a few minutes. The battery slowly
//! drains and can be put on the charger or drained with function keys.

use std::time::Instant;

use embedded_graphics_simulator::sdl2::Keycode;
use heapless::Vec;

use cardenv_common::error::SensorError;
use cardenv_common::input::{KeyScan, MAX_KEYS};
use cardenv_common::sensors::PRESSURE_ADDRESS;
use cardenv_common::traits::{Backlight, ClimateSensor, Keypad, PowerMonitor, PressureSensor};

/// Sine wave around `center`, period `period_s` seconds.
fn wave(
    t: f32,
    center: f32,
    amplitude: f32,
    period_s: f32,
) -> f32 {
    center + amplitude * micromath::F32(t * core::f32::consts::TAU / period_s).sin().0
}

// =============================================================================
// Sensors
// =============================================================================

/// SHT30 stand-in.
pub struct SimClimate {
    started: Instant,
    temperature: f32,
    humidity: f32,
}

impl SimClimate {
    pub fn new(started: Instant) -> Self {
        Self {
            started,
            temperature: 0.0,
            humidity: 0.0,
        }
    }
}

impl ClimateSensor for SimClimate {
    fn begin(&mut self) -> Result<(), SensorError> { Ok(()) }

    fn refresh(&mut self) {
        let t = self.started.elapsed().as_secs_f32();
        self.temperature = wave(t, 22.5, 1.5, 900.0) + wave(t, 0.0, 0.2, 40.0);
        self.humidity = wave(t, 45.0, 8.0, 1400.0);
    }

    fn temperature(&self) -> f32 { self.temperature }

    fn humidity(&self) -> f32 { self.humidity }
}

/// QMP6988 stand-in, answering only at the primary address.
pub struct SimPressure {
    started: Instant,
    pressure_pa: f32,
}

impl SimPressure {
    pub fn new(started: Instant) -> Self {
        Self {
            started,
            pressure_pa: 0.0,
        }
    }
}

impl PressureSensor for SimPressure {
    fn begin(
        &mut self,
        address: u8,
    ) -> Result<(), SensorError> {
        if address == PRESSURE_ADDRESS { Ok(()) } else { Err(SensorError::NotFound { address }) }
    }

    fn refresh(&mut self) {
        let t = self.started.elapsed().as_secs_f32();
        self.pressure_pa = wave(t, 101_325.0, 300.0, 2400.0);
    }

    fn pressure_pa(&self) -> f32 { self.pressure_pa }
}

// =============================================================================
// Keyboard
// =============================================================================

/// Cardputer key symbol for a desktop key, if it has one.
///
/// Escape maps to ESC; other keys map by their single-character name, so
/// letters, `` ` ``, `;`, `.`, `,` and `/` come through as on the device.
pub fn key_symbol(keycode: Keycode) -> Option<char> {
    if keycode == Keycode::Escape {
        return Some('\u{1b}');
    }
    let name = keycode.name();
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_graphic() => Some(c.to_ascii_lowercase()),
        _ => None,
    }
}

/// Keys pressed since the last scan.
#[derive(Default)]
pub struct SimKeypad {
    pending: Vec<char, MAX_KEYS>,
}

impl SimKeypad {
    pub fn press(
        &mut self,
        key: char,
    ) {
        let _ = self.pending.push(key);
    }
}

impl Keypad for SimKeypad {
    fn scan(&mut self) -> KeyScan {
        if self.pending.is_empty() {
            return KeyScan::idle();
        }
        let scan = KeyScan::press(&self.pending);
        self.pending.clear();
        scan
    }
}

// =============================================================================
// Backlight and Battery
// =============================================================================

#[derive(Default)]
pub struct SimBacklight {
    level: u8,
}

impl SimBacklight {
    /// Level 0 blanks the window.
    pub const fn is_off(&self) -> bool { self.level == 0 }
}

impl Backlight for SimBacklight {
    fn set_brightness(
        &mut self,
        level: u8,
    ) {
        log::debug!("Backlight: {level}");
        self.level = level;
    }
}

/// Battery losing one percent per minute, gaining two while charging.
pub struct SimPower {
    level: u8,
    charging: bool,
    last_step: Instant,
}

impl SimPower {
    pub fn new() -> Self {
        Self {
            level: 76,
            charging: false,
            last_step: Instant::now(),
        }
    }

    pub fn toggle_charging(&mut self) {
        self.charging = !self.charging;
        log::info!("Charging: {}", if self.charging { "on" } else { "off" });
    }

    /// Jump to a nearly empty battery.
    pub fn drain(&mut self) {
        self.level = 8;
        log::info!("Battery drained to {}%", self.level);
    }

    fn step(&mut self) {
        if self.last_step.elapsed().as_secs() < 60 {
            return;
        }
        self.last_step = Instant::now();
        self.level = if self.charging { (self.level + 2).min(100) } else { self.level.saturating_sub(1) };
    }
}

impl PowerMonitor for SimPower {
    fn battery_level(&mut self) -> u8 {
        self.step();
        self.level
    }

    fn is_charging(&mut self) -> bool { self.charging }
}
