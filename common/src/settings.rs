//! User settings edited on the settings page.
//!
//! Settings live for the process lifetime only and reset to defaults on boot.
//! Every setter clamps, so no key sequence can push a value out of range.

use crate::measurement::TemperatureUnit;

// =============================================================================
// Brightness
// =============================================================================

/// Backlight level in percent: 20..=100 in steps of 20.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Brightness(u8);

impl Brightness {
    pub const MIN: Self = Self(20);
    pub const MAX: Self = Self(100);
    pub const STEP: u8 = 20;

    /// Clamp an arbitrary percentage into the valid range.
    pub const fn new(percent: u8) -> Self {
        if percent < Self::MIN.0 {
            Self::MIN
        } else if percent > Self::MAX.0 {
            Self::MAX
        } else {
            Self(percent)
        }
    }

    #[inline]
    pub const fn percent(self) -> u8 { self.0 }

    /// One step dimmer, clamped at [`Brightness::MIN`].
    pub const fn decreased(self) -> Self { Self::new(self.0.saturating_sub(Self::STEP)) }

    /// One step brighter, clamped at [`Brightness::MAX`].
    pub const fn increased(self) -> Self { Self::new(self.0.saturating_add(Self::STEP)) }

    /// Backlight register value (0-255) for this percentage.
    pub const fn backlight_level(self) -> u8 { ((self.0 as u16 * 255) / 100) as u8 }

    /// Filled width of the settings bar: empty at the minimum, full at the maximum.
    pub const fn bar_fill(
        self,
        inner_width: u32,
    ) -> u32 {
        (self.0 - Self::MIN.0) as u32 * inner_width / (Self::MAX.0 - Self::MIN.0) as u32
    }
}

impl Default for Brightness {
    fn default() -> Self { Self(80) }
}

// =============================================================================
// Idle Timeout
// =============================================================================

/// Idle time after which the backlight is switched off.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum IdleTimeout {
    TenSeconds,
    ThirtySeconds,
    /// Screen stays on.
    #[default]
    Never,
}

impl IdleTimeout {
    pub const ALL: [Self; 3] = [Self::TenSeconds, Self::ThirtySeconds, Self::Never];

    /// Timeout in milliseconds, `None` when disabled.
    pub const fn duration_ms(self) -> Option<u64> {
        match self {
            Self::TenSeconds => Some(10_000),
            Self::ThirtySeconds => Some(30_000),
            Self::Never => None,
        }
    }

    /// Option position on the settings row (0..=2).
    pub const fn ordinal(self) -> usize {
        match self {
            Self::TenSeconds => 0,
            Self::ThirtySeconds => 1,
            Self::Never => 2,
        }
    }

    /// Option at `ordinal`, clamped to the last option.
    pub const fn from_ordinal(ordinal: usize) -> Self {
        match ordinal {
            0 => Self::TenSeconds,
            1 => Self::ThirtySeconds,
            _ => Self::Never,
        }
    }

    pub const fn previous(self) -> Self { Self::from_ordinal(self.ordinal().saturating_sub(1)) }

    pub const fn next(self) -> Self { Self::from_ordinal(self.ordinal() + 1) }

    /// Pill label on the settings page.
    pub const fn label(self) -> &'static str {
        match self {
            Self::TenSeconds => "10s",
            Self::ThirtySeconds => "30s",
            Self::Never => "Off",
        }
    }
}

// =============================================================================
// Settings Rows
// =============================================================================

/// Selectable row on the settings page.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum SettingsRow {
    #[default]
    Brightness,
    Unit,
    Timeout,
}

impl SettingsRow {
    pub const ALL: [Self; 3] = [Self::Brightness, Self::Unit, Self::Timeout];

    pub const fn index(self) -> usize {
        match self {
            Self::Brightness => 0,
            Self::Unit => 1,
            Self::Timeout => 2,
        }
    }

    /// Row at `index`, clamped to the last row.
    pub const fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Brightness,
            1 => Self::Unit,
            _ => Self::Timeout,
        }
    }

    /// Row above, staying on the first row.
    pub const fn up(self) -> Self { Self::from_index(self.index().saturating_sub(1)) }

    /// Row below, staying on the last row.
    pub const fn down(self) -> Self { Self::from_index(self.index() + 1) }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Brightness => "Brightness:",
            Self::Unit => "Temp Unit:",
            Self::Timeout => "Timeout:",
        }
    }
}

// =============================================================================
// Settings
// =============================================================================

/// Which setting a left/right key press touched.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SettingChange {
    /// New brightness; the backlight should follow immediately.
    Brightness(Brightness),
    /// Temperature unit selected; cached temperatures are stale.
    Unit(TemperatureUnit),
    Timeout(IdleTimeout),
}

/// Volatile user settings.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Settings {
    pub brightness: Brightness,
    pub unit: TemperatureUnit,
    pub timeout: IdleTimeout,
}

impl Settings {
    /// Apply the "left" key to `row`.
    ///
    /// Brightness and timeout step down; the unit row selects Celsius.
    pub fn decrease(
        &mut self,
        row: SettingsRow,
    ) -> SettingChange {
        match row {
            SettingsRow::Brightness => {
                self.brightness = self.brightness.decreased();
                SettingChange::Brightness(self.brightness)
            }
            SettingsRow::Unit => {
                self.unit = TemperatureUnit::Celsius;
                SettingChange::Unit(self.unit)
            }
            SettingsRow::Timeout => {
                self.timeout = self.timeout.previous();
                SettingChange::Timeout(self.timeout)
            }
        }
    }

    /// Apply the "right" key to `row`.
    ///
    /// Brightness and timeout step up; the unit row selects Fahrenheit.
    pub fn increase(
        &mut self,
        row: SettingsRow,
    ) -> SettingChange {
        match row {
            SettingsRow::Brightness => {
                self.brightness = self.brightness.increased();
                SettingChange::Brightness(self.brightness)
            }
            SettingsRow::Unit => {
                self.unit = TemperatureUnit::Fahrenheit;
                SettingChange::Unit(self.unit)
            }
            SettingsRow::Timeout => {
                self.timeout = self.timeout.next();
                SettingChange::Timeout(self.timeout)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.brightness.percent(), 80);
        assert_eq!(settings.unit, TemperatureUnit::Celsius);
        assert_eq!(settings.timeout, IdleTimeout::Never);
        assert_eq!(SettingsRow::default(), SettingsRow::Brightness);
    }

    // -------------------------------------------------------------------------
    // Clamping
    // -------------------------------------------------------------------------

    #[test]
    fn test_brightness_never_leaves_range() {
        let mut settings = Settings::default();
        for _ in 0..10 {
            settings.increase(SettingsRow::Brightness);
            assert!(settings.brightness <= Brightness::MAX);
        }
        assert_eq!(settings.brightness.percent(), 100);
        for _ in 0..10 {
            settings.decrease(SettingsRow::Brightness);
            assert!(settings.brightness >= Brightness::MIN);
        }
        assert_eq!(settings.brightness.percent(), 20);
    }

    #[test]
    fn test_brightness_steps_by_twenty() {
        let b = Brightness::default();
        assert_eq!(b.decreased().percent(), 60);
        assert_eq!(b.increased().percent(), 100);
        assert_eq!(Brightness::new(5), Brightness::MIN, "new() clamps low values");
        assert_eq!(Brightness::new(250), Brightness::MAX, "new() clamps high values");
    }

    #[test]
    fn test_backlight_levels() {
        assert_eq!(Brightness::MAX.backlight_level(), 255);
        assert_eq!(Brightness::MIN.backlight_level(), 51);
    }

    #[test]
    fn test_bar_fill() {
        assert_eq!(Brightness::MIN.bar_fill(96), 0, "Minimum shows an empty bar");
        assert_eq!(Brightness::default().bar_fill(96), 72);
        assert_eq!(Brightness::MAX.bar_fill(96), 96);
    }

    #[test]
    fn test_timeout_never_leaves_range() {
        let mut settings = Settings::default();
        for _ in 0..5 {
            settings.increase(SettingsRow::Timeout);
            assert!(settings.timeout.ordinal() <= 2);
        }
        assert_eq!(settings.timeout, IdleTimeout::Never);
        for _ in 0..5 {
            settings.decrease(SettingsRow::Timeout);
        }
        assert_eq!(settings.timeout, IdleTimeout::TenSeconds);
        assert_eq!(settings.timeout.ordinal(), 0);
    }

    #[test]
    fn test_cursor_never_leaves_range() {
        let mut row = SettingsRow::default();
        for _ in 0..5 {
            row = row.up();
        }
        assert_eq!(row, SettingsRow::Brightness);
        for _ in 0..5 {
            row = row.down();
            assert!(row.index() <= 2);
        }
        assert_eq!(row, SettingsRow::Timeout);
    }

    // -------------------------------------------------------------------------
    // Unit and timeout values
    // -------------------------------------------------------------------------

    #[test]
    fn test_unit_keys_select_directly() {
        let mut settings = Settings::default();
        assert_eq!(
            settings.increase(SettingsRow::Unit),
            SettingChange::Unit(TemperatureUnit::Fahrenheit)
        );
        assert_eq!(
            settings.increase(SettingsRow::Unit),
            SettingChange::Unit(TemperatureUnit::Fahrenheit),
            "Right selects F, it does not toggle"
        );
        settings.decrease(SettingsRow::Unit);
        assert_eq!(settings.unit, TemperatureUnit::Celsius);
    }

    #[test]
    fn test_timeout_durations() {
        assert_eq!(IdleTimeout::TenSeconds.duration_ms(), Some(10_000));
        assert_eq!(IdleTimeout::ThirtySeconds.duration_ms(), Some(30_000));
        assert_eq!(IdleTimeout::Never.duration_ms(), None);
        assert_eq!(IdleTimeout::Never.label(), "Off");
    }
}
