//! Test doubles for renderer tests.
//!
//! [`CountingDisplay`] records every pixel write so tests can assert both on
//! the final image and on whether anything was drawn at all.

use std::collections::HashMap;
use std::convert::Infallible;

use embedded_graphics::{pixelcolor::Rgb565, prelude::*};

use cardenv_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use cardenv_common::traits::{Backlight, ClimateSensor, Keypad, PowerMonitor, PressureSensor};
use cardenv_common::{error::SensorError, input::KeyScan};

/// Screen-sized draw target that remembers pixels and counts writes.
pub struct CountingDisplay {
    pixels: HashMap<(i32, i32), Rgb565>,
    writes: usize,
}

impl CountingDisplay {
    pub fn new() -> Self {
        Self {
            pixels: HashMap::new(),
            writes: 0,
        }
    }

    /// Pixel writes since creation or the last [`CountingDisplay::reset_count`].
    pub fn drawn(&self) -> usize { self.writes }

    pub fn reset_count(&mut self) { self.writes = 0; }

    /// Last color written at `point`.
    pub fn pixel(
        &self,
        point: Point,
    ) -> Option<Rgb565> {
        self.pixels.get(&(point.x, point.y)).copied()
    }

    /// Number of pixels currently showing `color`.
    pub fn count_color(
        &self,
        color: Rgb565,
    ) -> usize {
        self.pixels.values().filter(|&&c| c == color).count()
    }

    /// Horizontal extent of all written pixels.
    pub fn x_extent(&self) -> Option<(i32, i32)> {
        let min = self.pixels.keys().map(|&(x, _)| x).min()?;
        let max = self.pixels.keys().map(|&(x, _)| x).max()?;
        Some((min, max))
    }

    /// Number of non-black pixels inside the rectangle.
    pub fn lit_in(
        &self,
        top_left: Point,
        size: Size,
    ) -> usize {
        let x_range = top_left.x..top_left.x + size.width as i32;
        let y_range = top_left.y..top_left.y + size.height as i32;
        self.pixels
            .iter()
            .filter(|&(&(x, y), &c)| x_range.contains(&x) && y_range.contains(&y) && c != Rgb565::BLACK)
            .count()
    }
}

impl OriginDimensions for CountingDisplay {
    fn size(&self) -> Size { Size::new(SCREEN_WIDTH, SCREEN_HEIGHT) }
}

impl DrawTarget for CountingDisplay {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = self.bounding_box();
        for Pixel(point, color) in pixels {
            if bounds.contains(point) {
                self.pixels.insert((point.x, point.y), color);
                self.writes += 1;
            }
        }
        Ok(())
    }
}

// =============================================================================
// Fake Collaborators
// =============================================================================

/// Climate sensor returning fixed, settable readings.
#[derive(Default)]
pub struct FakeClimate {
    pub present: bool,
    pub temperature: f32,
    pub humidity: f32,
}

impl ClimateSensor for FakeClimate {
    fn begin(&mut self) -> Result<(), SensorError> {
        if self.present { Ok(()) } else { Err(SensorError::NotFound { address: 0x44 }) }
    }

    fn refresh(&mut self) {}

    fn temperature(&self) -> f32 { self.temperature }

    fn humidity(&self) -> f32 { self.humidity }
}

/// Pressure sensor answering at one address.
#[derive(Default)]
pub struct FakePressure {
    pub address: Option<u8>,
    pub pressure_pa: f32,
}

impl PressureSensor for FakePressure {
    fn begin(
        &mut self,
        address: u8,
    ) -> Result<(), SensorError> {
        if self.address == Some(address) { Ok(()) } else { Err(SensorError::NotFound { address }) }
    }

    fn refresh(&mut self) {}

    fn pressure_pa(&self) -> f32 { self.pressure_pa }
}

/// Keypad replaying queued scans, idle once empty.
#[derive(Default)]
pub struct FakeKeypad {
    pub queue: Vec<KeyScan>,
}

impl FakeKeypad {
    pub fn push(
        &mut self,
        keys: &[char],
    ) {
        self.queue.push(KeyScan::press(keys));
    }
}

impl Keypad for FakeKeypad {
    fn scan(&mut self) -> KeyScan {
        if self.queue.is_empty() { KeyScan::idle() } else { self.queue.remove(0) }
    }
}

/// Backlight remembering every level written.
#[derive(Default)]
pub struct FakeBacklight {
    pub levels: Vec<u8>,
}

impl Backlight for FakeBacklight {
    fn set_brightness(
        &mut self,
        level: u8,
    ) {
        self.levels.push(level);
    }
}

/// Battery gauge with settable level.
pub struct FakePower {
    pub level: u8,
    pub charging: bool,
}

impl Default for FakePower {
    fn default() -> Self {
        Self {
            level: 80,
            charging: false,
        }
    }
}

impl PowerMonitor for FakePower {
    fn battery_level(&mut self) -> u8 { self.level }

    fn is_charging(&mut self) -> bool { self.charging }
}
