//! Keypad input decoding and dispatch.
//!
//! The keypad is scanned once per loop tick. Only the key-down edge counts:
//! a scan is acted on when the keypad reports a change and at least one key
//! is down, so held keys do not repeat.
//!
//! # Key Map
//!
//! | Page | Key | Action |
//! |------|-----|--------|
//! | any but main | `` ` `` `~` ESC | Back to main |
//! | main | `T` `H` `P` | Temperature / humidity / pressure graph |
//! | main | `S` | Settings |
//! | settings | `;` `.` | Cursor up / down |
//! | settings | `,` `/` | Decrease / increase (unit row: select C / F) |
//!
//! Letters are case-folded before comparison.

use heapless::Vec;

use crate::pages::Page;
use crate::settings::SettingChange;
use crate::state::UiState;

/// Maximum number of simultaneously pressed keys reported per scan.
pub const MAX_KEYS: usize = 8;

/// Key codes that act as ESC on the Cardputer keyboard.
pub const ESCAPE_KEYS: [char; 3] = ['`', '~', '\u{1b}'];

// =============================================================================
// Key Scan
// =============================================================================

/// One keypad scan: the change flag and the keys currently held down.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyScan {
    pub changed: bool,
    pub pressed: Vec<char, MAX_KEYS>,
}

impl KeyScan {
    /// Scan with no change and no keys.
    pub fn idle() -> Self { Self::default() }

    /// Scan reporting a fresh press of `keys`. Keys beyond [`MAX_KEYS`] are dropped.
    pub fn press(keys: &[char]) -> Self {
        let mut pressed = Vec::new();
        for &key in keys.iter().take(MAX_KEYS) {
            let _ = pressed.push(key);
        }
        Self {
            changed: true,
            pressed,
        }
    }

    /// Key-down edge: changed with at least one key held.
    ///
    /// A change to "no keys" is a release and is ignored.
    #[inline]
    pub fn is_edge(&self) -> bool { self.changed && !self.pressed.is_empty() }
}

// =============================================================================
// Commands
// =============================================================================

/// Decoded meaning of one key symbol, before page context is applied.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    Escape,
    Up,
    Down,
    Left,
    Right,
    /// Any other symbol, letters folded to uppercase.
    Key(char),
}

impl Command {
    pub fn decode(key: char) -> Self {
        if ESCAPE_KEYS.contains(&key) {
            return Self::Escape;
        }
        match key {
            ';' => Self::Up,
            '.' => Self::Down,
            ',' => Self::Left,
            '/' => Self::Right,
            other => Self::Key(other.to_ascii_uppercase()),
        }
    }
}

// =============================================================================
// Dispatch
// =============================================================================

/// What a scan did beyond mutating [`UiState`], for the driver to apply.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct InputOutcome {
    /// The scan woke the screen and was consumed.
    pub woke: bool,
    /// Brightness changed; the backlight must follow now.
    pub brightness_changed: bool,
    /// Temperature unit selected; cached temperatures must be invalidated.
    pub unit_changed: bool,
}

impl InputOutcome {
    /// Backlight needs to be rewritten with the configured level.
    #[inline]
    pub const fn restore_backlight(&self) -> bool { self.woke || self.brightness_changed }
}

/// Apply one keypad scan to the application state.
///
/// Every key-down edge refreshes the idle timer first. If the screen was off
/// the press only wakes it and is not interpreted further.
pub fn handle_keys(
    state: &mut UiState,
    scan: &KeyScan,
    now_ms: u64,
) -> InputOutcome {
    let mut outcome = InputOutcome::default();
    if !scan.is_edge() {
        return outcome;
    }

    if state.power.wake(now_ms) {
        state.navigation.request_redraw();
        outcome.woke = true;
        return outcome;
    }

    for &key in scan.pressed.iter() {
        log::debug!("Key pressed: {} (0x{:02X})", key, key as u32);
        dispatch(state, Command::decode(key), &mut outcome);
    }
    outcome
}

fn dispatch(
    state: &mut UiState,
    command: Command,
    outcome: &mut InputOutcome,
) {
    let nav = &mut state.navigation;
    if command == Command::Escape {
        nav.back();
        return;
    }

    match nav.page() {
        Page::Main => {
            if let Command::Key(key) = command
                && let Some(page) = Page::from_hotkey(key)
            {
                nav.open(page);
            }
        }
        Page::Settings => match command {
            Command::Up => nav.cursor_up(),
            Command::Down => nav.cursor_down(),
            Command::Left | Command::Right => {
                let row = nav.cursor();
                let change = if command == Command::Left {
                    state.settings.decrease(row)
                } else {
                    state.settings.increase(row)
                };
                match change {
                    SettingChange::Brightness(b) => {
                        outcome.brightness_changed = true;
                        log::info!("Brightness: {}%", b.percent());
                    }
                    SettingChange::Unit(unit) => {
                        outcome.unit_changed = true;
                        log::info!("Unit: {}", unit.symbol());
                    }
                    SettingChange::Timeout(timeout) => {
                        log::info!("Timeout: {}", timeout.label());
                    }
                }
                nav.request_redraw();
            }
            Command::Escape | Command::Key(_) => {}
        },
        Page::TemperatureGraph | Page::HumidityGraph | Page::PressureGraph => {}
    }
}
