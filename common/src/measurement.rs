//! Measurements, metrics and unit conversion.
//!
//! A [`Measurement`] is the snapshot produced by the sampler each loop
//! iteration. [`Metric`] selects one of its three fields and carries the
//! per-metric presentation (title, unit, accent color, number format).

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use heapless::String;

use crate::colors::{HUMIDITY, PRESSURE, TEMPERATURE};

/// One sample of all three sensors.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Measurement {
    /// Temperature in degrees Celsius.
    pub temperature: f32,
    /// Relative humidity in percent.
    pub humidity: f32,
    /// Barometric pressure in hPa.
    pub pressure: f32,
}

/// Temperature display unit.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Convert a Celsius reading into this unit.
    #[inline]
    pub fn convert(
        self,
        celsius: f32,
    ) -> f32 {
        match self {
            Self::Celsius => celsius,
            Self::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        }
    }

    /// Single-letter unit symbol shown next to values.
    #[inline]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "C",
            Self::Fahrenheit => "F",
        }
    }
}

/// One of the three measured quantities.
///
/// Discriminants follow panel order and index per-metric tables.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Metric {
    Temperature = 0,
    Humidity = 1,
    Pressure = 2,
}

impl Metric {
    /// All metrics in panel order (left to right).
    pub const ALL: [Self; 3] = [Self::Temperature, Self::Humidity, Self::Pressure];

    /// Graph page title.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Temperature => "TEMPERATURE",
            Self::Humidity => "HUMIDITY",
            Self::Pressure => "PRESSURE",
        }
    }

    /// Unit label. Only temperature depends on the configured unit.
    pub const fn unit(
        self,
        temperature_unit: TemperatureUnit,
    ) -> &'static str {
        match self {
            Self::Temperature => temperature_unit.symbol(),
            Self::Humidity => "%",
            Self::Pressure => "hPa",
        }
    }

    /// Accent color for panel borders and graph lines.
    pub const fn color(self) -> Rgb565 {
        match self {
            Self::Temperature => TEMPERATURE,
            Self::Humidity => HUMIDITY,
            Self::Pressure => PRESSURE,
        }
    }

    /// Read this metric from a measurement, converted for display.
    pub fn value(
        self,
        measurement: &Measurement,
        temperature_unit: TemperatureUnit,
    ) -> f32 {
        let raw = match self {
            Self::Temperature => measurement.temperature,
            Self::Humidity => measurement.humidity,
            Self::Pressure => measurement.pressure,
        };
        self.display(raw, temperature_unit)
    }

    /// Convert a stored (raw) history value for display.
    #[inline]
    pub fn display(
        self,
        raw: f32,
        temperature_unit: TemperatureUnit,
    ) -> f32 {
        match self {
            Self::Temperature => temperature_unit.convert(raw),
            Self::Humidity | Self::Pressure => raw,
        }
    }

    /// Decimal places used on the main page panels.
    pub const fn decimals(self) -> usize {
        match self {
            Self::Temperature => 1,
            Self::Humidity | Self::Pressure => 0,
        }
    }

    /// Format a value the way the main page panel shows it.
    pub fn format_panel(
        self,
        value: f32,
    ) -> String<12> {
        let mut buf: String<12> = String::new();
        let _ = write!(buf, "{:.*}", self.decimals(), value);
        buf
    }

    /// Format a value with its unit for the graph title row ("23.4 C").
    pub fn format_title(
        self,
        value: f32,
        temperature_unit: TemperatureUnit,
    ) -> String<16> {
        let mut buf: String<16> = String::new();
        let _ = write!(buf, "{:.1} {}", value, self.unit(temperature_unit));
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Measurement {
        Measurement {
            temperature: 20.0,
            humidity: 45.5,
            pressure: 1013.2,
        }
    }

    #[test]
    fn test_fahrenheit_conversion() {
        assert_eq!(TemperatureUnit::Fahrenheit.convert(0.0), 32.0);
        assert_eq!(TemperatureUnit::Fahrenheit.convert(100.0), 212.0);
        assert_eq!(TemperatureUnit::Celsius.convert(21.5), 21.5);
    }

    #[test]
    fn test_metric_values() {
        let m = sample();
        assert_eq!(Metric::Temperature.value(&m, TemperatureUnit::Celsius), 20.0);
        assert_eq!(Metric::Temperature.value(&m, TemperatureUnit::Fahrenheit), 68.0);
        assert_eq!(Metric::Humidity.value(&m, TemperatureUnit::Fahrenheit), 45.5, "Unit only affects temperature");
        assert_eq!(Metric::Pressure.value(&m, TemperatureUnit::Celsius), 1013.2);
    }

    #[test]
    fn test_units() {
        assert_eq!(Metric::Temperature.unit(TemperatureUnit::Celsius), "C");
        assert_eq!(Metric::Temperature.unit(TemperatureUnit::Fahrenheit), "F");
        assert_eq!(Metric::Humidity.unit(TemperatureUnit::Fahrenheit), "%");
        assert_eq!(Metric::Pressure.unit(TemperatureUnit::Celsius), "hPa");
    }

    #[test]
    fn test_panel_format() {
        assert_eq!(Metric::Temperature.format_panel(23.44).as_str(), "23.4");
        assert_eq!(Metric::Humidity.format_panel(45.6).as_str(), "46");
        assert_eq!(Metric::Pressure.format_panel(1013.2).as_str(), "1013");
    }

    #[test]
    fn test_title_format() {
        assert_eq!(
            Metric::Pressure.format_title(1013.21, TemperatureUnit::Celsius).as_str(),
            "1013.2 hPa"
        );
        assert_eq!(
            Metric::Temperature.format_title(68.0, TemperatureUnit::Fahrenheit).as_str(),
            "68.0 F"
        );
    }
}
