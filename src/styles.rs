//! Pre-computed static text and primitive styles.
//!
//! All positions in the renderers are the top-left corner of the text, so
//! every text style uses [`Baseline::Top`]. Horizontal centering is done by
//! embedded-graphics alignment instead of measuring strings by hand.
//!
//! # Fonts
//!
//! | Use | Font |
//! |-----|------|
//! | Labels, hints, axis text | `FONT_6X10` |
//! | Panel values | `FONT_10X20` |
//! | Page and splash titles | `ProFont` 18pt |
//!
//! # Dynamic Color Styles
//!
//! Metric accents and selection state pick colors at runtime. For those, use
//! [`label`], [`value`] and [`title`], which only vary the color.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_6X10, FONT_10X20},
    },
    pixelcolor::Rgb565,
    primitives::PrimitiveStyle,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_18_POINT;

use cardenv_common::colors::{BLACK, DARK_GRAY, WHITE};

// =============================================================================
// Text Alignment Styles (const - zero runtime cost)
// =============================================================================

/// Left-aligned, positioned by the top edge.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

/// Centered on the x coordinate, positioned by the top edge.
pub const TOP_CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Top)
    .build();

// =============================================================================
// Font References
// =============================================================================

/// Small font for labels, axis text and hints.
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

/// Large font for panel values.
pub const VALUE_FONT: &MonoFont = &FONT_10X20;

/// Title font for the settings page and splash screen.
pub const TITLE_FONT: &MonoFont = &PROFONT_18_POINT;

/// Advance of one label character, used to place text after a title.
pub const LABEL_CHAR_WIDTH: i32 = 6;

// =============================================================================
// Pre-computed Styles
// =============================================================================

pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Text on a filled (selected) pill.
pub const LABEL_STYLE_BLACK: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, BLACK);

/// Axis labels and key hints.
pub const HINT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, DARK_GRAY);

pub const TITLE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, WHITE);

/// Black fill used to clear regions before repainting.
pub const CLEAR_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BLACK);

/// Graph frame outline.
pub const FRAME_STROKE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(DARK_GRAY, 1);

// =============================================================================
// Dynamic Color Styles
// =============================================================================

/// Small text in `color`.
#[inline]
pub const fn label(color: Rgb565) -> MonoTextStyle<'static, Rgb565> { MonoTextStyle::new(LABEL_FONT, color) }

/// Panel value text in `color`.
#[inline]
pub const fn value(color: Rgb565) -> MonoTextStyle<'static, Rgb565> { MonoTextStyle::new(VALUE_FONT, color) }

/// Title text in `color`.
#[inline]
pub const fn title(color: Rgb565) -> MonoTextStyle<'static, Rgb565> { MonoTextStyle::new(TITLE_FONT, color) }
