//! Core logic for the CardENV environment display.
//!
//! This crate contains the platform-agnostic part of the firmware, shared by
//! the desktop simulator and the Cardputer target:
//!
//! - [`colors`]: RGB565 color constants for the display
//! - [`config`]: Layout and timing constants
//! - [`pages`]: Page enum and hotkeys
//! - [`measurement`]: Sensor snapshot, metrics and unit conversion
//! - [`history`]: One-hour ring buffers for the graph pages
//! - [`settings`]: Brightness, temperature unit and idle timeout
//! - [`power`]: Idle timeout screen power manager
//! - [`navigation`]: Page/cursor state machine
//! - [`input`]: Key scan edge detection and dispatch
//! - [`state`]: Application state owned by the main loop
//! - [`render`]: Dirty-value, battery indicator and refresh cadence tracking
//! - [`graph`]: Axis range fitting and point projection
//! - [`traits`]: Hardware collaborator seams
//! - [`sensors`]: Sensor bring-up and sampling
//! - [`error`]: Sensor error type
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` and takes time as plain milliseconds, so it has no
//! dependency on `std::time` or a particular clock implementation.

#![no_std]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod error;
pub mod graph;
pub mod history;
pub mod input;
pub mod measurement;
pub mod navigation;
pub mod pages;
pub mod power;
pub mod render;
pub mod sensors;
pub mod settings;
pub mod state;
pub mod traits;

// Re-export commonly used items
pub use colors::*;
pub use config::*;
pub use measurement::{Measurement, Metric, TemperatureUnit};
pub use pages::Page;
pub use state::UiState;
