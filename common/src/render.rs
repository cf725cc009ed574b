//! Render state tracking for incremental display updates.
//!
//! Pages are painted in two ways: a full redraw on page entry, and cheap
//! incremental updates at the display cadence afterwards. The types here
//! decide whether an incremental update has anything to paint.
//!
//! # Update Strategy
//!
//! | Element | Update Trigger | Tracker |
//! |---------|----------------|---------|
//! | Metric values | Change of at least 0.05 | [`DisplayedValue`] |
//! | Battery indicator | Level/charging change, blink, full redraw | [`BatteryIndicator`] |
//! | Incremental tick | Once per second | [`RefreshTimer`] |

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::{GREEN, RED, YELLOW};
use crate::config::{BATTERY_BLINK_INTERVAL_MS, BATTERY_LOW_PERCENT, DIRTY_THRESHOLD};

// =============================================================================
// Dirty Values
// =============================================================================

/// Last value painted for one on-screen number.
///
/// Starts unset, so the first update after a full redraw always paints.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct DisplayedValue {
    last: Option<f32>,
}

impl DisplayedValue {
    pub const fn new() -> Self { Self { last: None } }

    /// Value currently on screen, if any.
    #[inline]
    pub const fn last(&self) -> Option<f32> { self.last }

    /// Forget the painted value so the next update repaints.
    #[inline]
    pub const fn invalidate(&mut self) { self.last = None; }

    /// Whether `value` differs enough from the painted value to repaint.
    pub fn is_dirty(
        &self,
        value: f32,
    ) -> bool {
        match self.last {
            None => true,
            Some(last) => micromath::F32(value - last).abs().0 >= DIRTY_THRESHOLD,
        }
    }

    /// Record `value` as painted if it is dirty.
    ///
    /// Returns `true` when the caller should paint it.
    pub fn update(
        &mut self,
        value: f32,
    ) -> bool {
        if !self.is_dirty(value) {
            return false;
        }
        self.last = Some(value);
        true
    }
}

// =============================================================================
// Battery Indicator
// =============================================================================

/// One battery indicator repaint.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BatteryFrame {
    /// Battery level in percent (0..=100).
    pub level: u8,
    pub charging: bool,
    /// False during the "off" half of the low-battery blink: clear only.
    pub visible: bool,
}

impl BatteryFrame {
    /// Green when charging or above 70%, yellow above 30%, red otherwise.
    pub const fn color(&self) -> Rgb565 {
        if self.charging || self.level > 70 {
            GREEN
        } else if self.level > 30 {
            YELLOW
        } else {
            RED
        }
    }

    /// Width of the level bar inside an outline with `inner_width` pixels.
    pub const fn fill_width(
        &self,
        inner_width: u32,
    ) -> u32 {
        let level = if self.level > 100 { 100 } else { self.level };
        level as u32 * inner_width / 100
    }
}

/// Decides when the battery indicator needs repainting.
///
/// Repaints on a level or charging change, on a forced (full page) redraw,
/// and every blink toggle while the battery is low and discharging.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BatteryIndicator {
    previous: Option<(u8, bool)>,
    flash_on: bool,
    last_flash_ms: u64,
}

impl BatteryIndicator {
    pub const fn new() -> Self {
        Self {
            previous: None,
            flash_on: true,
            last_flash_ms: 0,
        }
    }

    /// Feed the current battery reading.
    ///
    /// Returns the frame to paint, or `None` when the indicator is up to date.
    pub fn poll(
        &mut self,
        now_ms: u64,
        level: u8,
        charging: bool,
        force: bool,
    ) -> Option<BatteryFrame> {
        let mut force = force;
        if level <= BATTERY_LOW_PERCENT && !charging {
            if now_ms.saturating_sub(self.last_flash_ms) >= BATTERY_BLINK_INTERVAL_MS {
                self.last_flash_ms = now_ms;
                self.flash_on = !self.flash_on;
                force = true;
            }
        } else {
            self.flash_on = true;
        }

        if !force && self.previous == Some((level, charging)) {
            return None;
        }
        self.previous = Some((level, charging));
        Some(BatteryFrame {
            level,
            charging,
            visible: self.flash_on,
        })
    }
}

impl Default for BatteryIndicator {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Refresh Cadence
// =============================================================================

/// Rate limiter for incremental updates.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RefreshTimer {
    interval_ms: u64,
    last_ms: u64,
}

impl RefreshTimer {
    pub const fn new(
        interval_ms: u64,
        now_ms: u64,
    ) -> Self {
        Self {
            interval_ms,
            last_ms: now_ms,
        }
    }

    /// Restart the interval (after a full redraw).
    #[inline]
    pub const fn reset(
        &mut self,
        now_ms: u64,
    ) {
        self.last_ms = now_ms;
    }

    /// True once per interval; restarts the interval when it fires.
    pub const fn due(
        &mut self,
        now_ms: u64,
    ) -> bool {
        if now_ms.saturating_sub(self.last_ms) >= self.interval_ms {
            self.last_ms = now_ms;
            true
        } else {
            false
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
