//! Screen power manager.
//!
//! Two states, on and off. The screen turns off once the configured idle
//! timeout has elapsed since the last input, and back on only when input
//! arrives. [`IdleTimeout::Never`] disables the off transition entirely.

use crate::settings::IdleTimeout;

/// Backlight power state plus the time of the last user activity.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ScreenPower {
    on: bool,
    last_activity_ms: u64,
}

impl ScreenPower {
    /// Screen on, idle timer started at `now_ms`.
    pub const fn new(now_ms: u64) -> Self {
        Self {
            on: true,
            last_activity_ms: now_ms,
        }
    }

    #[inline]
    pub const fn is_on(&self) -> bool { self.on }

    #[inline]
    pub const fn last_activity_ms(&self) -> u64 { self.last_activity_ms }

    /// Check the idle timeout.
    ///
    /// Returns `true` on the tick the screen turns off; the caller then drives
    /// the backlight to zero.
    pub fn tick(
        &mut self,
        now_ms: u64,
        timeout: IdleTimeout,
    ) -> bool {
        let Some(limit) = timeout.duration_ms() else {
            return false;
        };
        if self.on && now_ms.saturating_sub(self.last_activity_ms) >= limit {
            self.on = false;
            log::info!("Screen off");
            return true;
        }
        false
    }

    /// Register user activity.
    ///
    /// Always refreshes the activity timestamp. Returns `true` if the screen
    /// was off, in which case it is now on and the input should be consumed.
    pub fn wake(
        &mut self,
        now_ms: u64,
    ) -> bool {
        self.last_activity_ms = now_ms;
        if self.on {
            return false;
        }
        self.on = true;
        log::info!("Screen wake");
        true
    }
}
