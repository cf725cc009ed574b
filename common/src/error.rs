//! Sensor error type.
//!
//! Sensor bring-up is the only failure the firmware models. Errors carry only
//! fixed-size data so the type stays `Copy` and `no_std` friendly.

use core::fmt;

/// Failure reported by a sensor driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// Nothing acknowledged at the given I2C address.
    NotFound { address: u8 },
}

impl fmt::Display for SensorError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::NotFound { address } => write!(f, "no device at 0x{address:02X}"),
        }
    }
}

impl core::error::Error for SensorError {}
