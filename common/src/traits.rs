//! Hardware collaborator traits.
//!
//! The application logic only talks to hardware through these seams. The
//! simulator implements them on the desktop; a Cardputer target implements
//! them over the vendor drivers.

use crate::error::SensorError;
use crate::input::KeyScan;

/// Temperature and humidity sensor (SHT30).
pub trait ClimateSensor {
    /// Probe and configure the sensor.
    fn begin(&mut self) -> Result<(), SensorError>;

    /// Take a new reading. A failed read keeps the previous reading.
    fn refresh(&mut self);

    /// Last temperature in Celsius.
    fn temperature(&self) -> f32;

    /// Last relative humidity in percent.
    fn humidity(&self) -> f32;
}

/// Barometric pressure sensor (QMP6988).
pub trait PressureSensor {
    /// Probe and configure the sensor at `address`.
    fn begin(
        &mut self,
        address: u8,
    ) -> Result<(), SensorError>;

    /// Take a new reading. A failed read keeps the previous reading.
    fn refresh(&mut self);

    /// Last pressure in pascals.
    fn pressure_pa(&self) -> f32;
}

/// Keyboard matrix.
pub trait Keypad {
    /// Scan once: change flag plus the keys currently held.
    fn scan(&mut self) -> KeyScan;
}

/// Display backlight.
pub trait Backlight {
    /// Set the backlight level (0 = off, 255 = full).
    fn set_brightness(
        &mut self,
        level: u8,
    );
}

/// Battery gauge.
pub trait PowerMonitor {
    /// Battery level in percent (0..=100).
    fn battery_level(&mut self) -> u8;

    fn is_charging(&mut self) -> bool;
}
