// Crate-level lints: Allow common embedded/graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // u128 millis -> u64 loop clock
#![allow(clippy::cast_precision_loss)] // elapsed seconds -> f32 sine phase

//! CardENV desktop simulator.
//!
//! Runs the same page renderers and per-tick driver as the device, against an
//! SDL2 window standing in for the 240x135 LCD and simulated sensors,
//! keyboard, backlight and battery.
//!
//! # Controls
//!
//! | Key | Action |
//! |-----|--------|
//! | `T` `H` `P` `S` | Open temperature / humidity / pressure graph, settings |
//! | `` ` `` or Escape | Back to the main page |
//! | `;` `.` | Settings cursor up / down |
//! | `,` `/` | Decrease / increase the selected setting |
//! | F1 | Toggle charging |
//! | F2 | Drain the battery (low-battery blink) |
//!
//! Key repeat is ignored, matching the edge-triggered Cardputer keyboard.
//! Set `RUST_LOG=debug` to see every decoded key.

mod sim;

use std::thread;
use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};

use cardenv::app::{App, Peripherals};
use cardenv::screens::{draw_splash_header, draw_splash_status};
use cardenv_common::config::{LOOP_DELAY_MS, SCREEN_HEIGHT, SCREEN_WIDTH};
use sim::{SimBacklight, SimClimate, SimKeypad, SimPower, SimPressure, key_symbol};

// =============================================================================
// Simulator Timing
// =============================================================================

/// Main loop period.
const FRAME_TIME: Duration = Duration::from_millis(LOOP_DELAY_MS);

/// How long the splash stays up after sensor bring-up.
const SPLASH_HOLD: Duration = Duration::from_secs(2);

type SimPeripherals = Peripherals<SimClimate, SimPressure, SimKeypad, SimBacklight, SimPower>;

/// Keep the window responsive for `duration`. Returns `false` if it was closed.
fn hold(
    window: &mut Window,
    display: &SimulatorDisplay<Rgb565>,
    duration: Duration,
) -> bool {
    let until = Instant::now() + duration;
    while Instant::now() < until {
        window.update(display);
        if window.events().any(|ev| matches!(ev, SimulatorEvent::Quit)) {
            return false;
        }
        thread::sleep(FRAME_TIME);
    }
    true
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let started = Instant::now();
    let now_ms = || started.elapsed().as_millis() as u64;

    let size = Size::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(size);
    let blank: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(size);
    let output_settings = OutputSettingsBuilder::new().scale(3).build();
    let mut window = Window::new("CardENV", &output_settings);

    log::info!("=== CardENV Starting ===");
    log::info!("Screen: {} x {}", SCREEN_WIDTH, SCREEN_HEIGHT);

    let mut hw: SimPeripherals = Peripherals {
        climate: SimClimate::new(started),
        pressure: SimPressure::new(started),
        keypad: SimKeypad::default(),
        backlight: SimBacklight::default(),
        power: SimPower::new(),
    };
    let mut app = App::new(now_ms());

    // ==========================================================================
    // Boot
    // ==========================================================================

    draw_splash_header(&mut display);
    window.update(&display);

    let report = app.boot(&mut hw);
    draw_splash_status(&mut display, &report);
    if !hold(&mut window, &display, SPLASH_HOLD) {
        return;
    }

    app.start(&mut hw, now_ms());

    // ==========================================================================
    // Main Loop
    // ==========================================================================

    loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Ignore OS key repeat: the device only reports key-down edges
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::F1 => hw.power.toggle_charging(),
                        Keycode::F2 => hw.power.drain(),
                        _ => {
                            if let Some(key) = key_symbol(keycode) {
                                hw.keypad.press(key);
                            }
                        }
                    }
                }
                _ => {}
            }
        }

        app.tick(&mut hw, &mut display, now_ms());

        if hw.backlight.is_off() {
            window.update(&blank);
        } else {
            window.update(&display);
        }

        let elapsed = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(elapsed) {
            thread::sleep(remaining);
        }
    }
}
