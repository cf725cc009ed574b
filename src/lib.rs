//! CardENV page renderers and application driver.
//!
//! Everything here draws onto any `DrawTarget<Color = Rgb565>` and talks to
//! hardware only through the collaborator traits in
//! [`cardenv_common::traits`], so the same code runs in the desktop
//! simulator (`src/main.rs`) and in host tests.
//!
//! - [`app`]: per-tick driver (input, idle timeout, sampling, render cadence)
//! - [`render`]: page dispatch and battery indicator
//! - [`screens`]: one view per page plus the boot splash
//! - [`widgets`]: drawing primitives, icons, battery widget
//! - [`styles`]: const text and primitive styles

#![cfg_attr(not(test), no_std)]
// Crate-level lints: pixel math casts between i32, u32 and f32 throughout
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod app;
pub mod render;
pub mod screens;
pub mod styles;
pub mod widgets;

#[cfg(test)]
mod test_support;
