//! Sensor bring-up and sampling.
//!
//! Initialization failures are reported, never fatal: the device keeps running
//! and simply shows whatever the drivers return.

use crate::error::SensorError;
use crate::measurement::Measurement;
use crate::traits::{ClimateSensor, PressureSensor};

/// QMP6988 address with SDO low.
pub const PRESSURE_ADDRESS: u8 = 0x70;

/// QMP6988 address with SDO high, tried when the primary address fails.
pub const PRESSURE_ADDRESS_ALT: u8 = 0x56;

/// Pascals per hectopascal.
const PA_PER_HPA: f32 = 100.0;

/// Outcome of sensor bring-up, shown on the splash screen.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct InitReport {
    pub climate: Result<(), SensorError>,
    /// Address the pressure sensor answered on.
    pub pressure: Result<u8, SensorError>,
}

impl InitReport {
    #[inline]
    pub const fn climate_ok(&self) -> bool { self.climate.is_ok() }

    #[inline]
    pub const fn pressure_ok(&self) -> bool { self.pressure.is_ok() }
}

/// Bring up both sensors, retrying the pressure sensor at its alternate address.
pub fn init_sensors<C, P>(
    climate: &mut C,
    pressure: &mut P,
) -> InitReport
where
    C: ClimateSensor,
    P: PressureSensor,
{
    let climate_result = climate.begin();
    match climate_result {
        Ok(()) => log::info!("SHT30 OK!"),
        Err(e) => log::warn!("SHT30 FAILED! ({e})"),
    }

    let pressure_result = match pressure.begin(PRESSURE_ADDRESS) {
        Ok(()) => {
            log::info!("QMP6988 OK!");
            Ok(PRESSURE_ADDRESS)
        }
        Err(_) => match pressure.begin(PRESSURE_ADDRESS_ALT) {
            Ok(()) => {
                log::info!("QMP6988 OK (0x{PRESSURE_ADDRESS_ALT:02X})!");
                Ok(PRESSURE_ADDRESS_ALT)
            }
            Err(e) => {
                log::warn!("QMP6988 FAILED! ({e})");
                Err(e)
            }
        },
    };

    InitReport {
        climate: climate_result,
        pressure: pressure_result,
    }
}

/// Refresh both sensors and return the current snapshot.
///
/// Pressure is converted from Pa to hPa.
pub fn sample<C, P>(
    climate: &mut C,
    pressure: &mut P,
) -> Measurement
where
    C: ClimateSensor,
    P: PressureSensor,
{
    climate.refresh();
    pressure.refresh();
    Measurement {
        temperature: climate.temperature(),
        humidity: climate.humidity(),
        pressure: pressure.pressure_pa() / PA_PER_HPA,
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::vec::Vec;

    use super::*;

    struct FakeClimate {
        present: bool,
        refreshes: u32,
    }

    impl ClimateSensor for FakeClimate {
        fn begin(&mut self) -> Result<(), SensorError> {
            if self.present { Ok(()) } else { Err(SensorError::NotFound { address: 0x44 }) }
        }

        fn refresh(&mut self) { self.refreshes += 1; }

        fn temperature(&self) -> f32 { 21.5 }

        fn humidity(&self) -> f32 { 40.0 }
    }

    struct FakePressure {
        address: Option<u8>,
        probed: Vec<u8>,
    }

    impl PressureSensor for FakePressure {
        fn begin(
            &mut self,
            address: u8,
        ) -> Result<(), SensorError> {
            self.probed.push(address);
            if self.address == Some(address) { Ok(()) } else { Err(SensorError::NotFound { address }) }
        }

        fn refresh(&mut self) {}

        fn pressure_pa(&self) -> f32 { 101_325.0 }
    }

    fn pressure_at(address: Option<u8>) -> FakePressure {
        FakePressure {
            address,
            probed: Vec::new(),
        }
    }

    #[test]
    fn test_both_sensors_found() {
        let mut climate = FakeClimate { present: true, refreshes: 0 };
        let mut pressure = pressure_at(Some(PRESSURE_ADDRESS));
        let report = init_sensors(&mut climate, &mut pressure);
        assert!(report.climate_ok());
        assert_eq!(report.pressure, Ok(PRESSURE_ADDRESS));
        assert_eq!(pressure.probed, [PRESSURE_ADDRESS], "No fallback needed");
    }

    #[test]
    fn test_pressure_falls_back_to_alternate_address() {
        let mut climate = FakeClimate { present: true, refreshes: 0 };
        let mut pressure = pressure_at(Some(PRESSURE_ADDRESS_ALT));
        let report = init_sensors(&mut climate, &mut pressure);
        assert_eq!(report.pressure, Ok(PRESSURE_ADDRESS_ALT));
        assert_eq!(pressure.probed, [PRESSURE_ADDRESS, PRESSURE_ADDRESS_ALT]);
    }

    #[test]
    fn test_failures_are_reported_independently() {
        let mut climate = FakeClimate { present: false, refreshes: 0 };
        let mut pressure = pressure_at(None);
        let report = init_sensors(&mut climate, &mut pressure);
        assert!(!report.climate_ok());
        assert!(!report.pressure_ok());
        assert_eq!(
            report.pressure,
            Err(SensorError::NotFound { address: PRESSURE_ADDRESS_ALT }),
            "Reports the last address tried"
        );
    }

    #[test]
    fn test_sample_converts_pressure_to_hpa() {
        let mut climate = FakeClimate { present: true, refreshes: 0 };
        let mut pressure = pressure_at(Some(PRESSURE_ADDRESS));
        let m = sample(&mut climate, &mut pressure);
        assert_eq!(climate.refreshes, 1, "Sampling refreshes the drivers");
        assert_eq!(m.temperature, 21.5);
        assert_eq!(m.humidity, 40.0);
        assert_eq!(m.pressure, 1013.25);
    }
}
