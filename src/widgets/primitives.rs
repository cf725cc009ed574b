//! Low-level drawing primitives shared across pages.
//!
//! Every function takes any `DrawTarget<Color = Rgb565>` and discards draw
//! errors: the display contract is that drawing always succeeds.

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle, RoundedRectangle},
    text::Text,
};

use cardenv_common::config::SCREEN_WIDTH;

use crate::styles::{CLEAR_FILL, LABEL_STYLE_BLACK, TOP_CENTERED, TOP_LEFT, label};

/// Fill a rectangle with black.
pub fn clear_rect<D>(
    display: &mut D,
    top_left: Point,
    size: Size,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(top_left, size)
        .into_styled(CLEAR_FILL)
        .draw(display)
        .ok();
}

/// Draw text with its top-left corner at `position`.
pub fn draw_text<D>(
    display: &mut D,
    text: &str,
    position: Point,
    style: MonoTextStyle<'_, Rgb565>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(text, position, style, TOP_LEFT).draw(display).ok();
}

/// Draw text horizontally centered on `center_x`, top edge at `y`.
pub fn draw_centered_text<D>(
    display: &mut D,
    text: &str,
    center_x: i32,
    y: i32,
    style: MonoTextStyle<'_, Rgb565>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(text, Point::new(center_x, y), style, TOP_CENTERED)
        .draw(display)
        .ok();
}

/// Draw text centered on the screen width.
#[inline]
pub fn draw_screen_centered<D>(
    display: &mut D,
    text: &str,
    y: i32,
    style: MonoTextStyle<'_, Rgb565>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_centered_text(display, text, SCREEN_WIDTH as i32 / 2, y, style);
}

/// Rounded rectangle outline `thickness` pixels wide, drawn inwards.
///
/// Nested 1px outlines give an even border on the straight edges and keep
/// the corner radius identical at every ring.
pub fn draw_thick_round_rect<D>(
    display: &mut D,
    bounds: Rectangle,
    radius: u32,
    thickness: u32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let stroke = PrimitiveStyle::with_stroke(color, 1);
    for i in 0..thickness {
        let inset = i as i32;
        let shrink = 2 * i;
        if bounds.size.width <= shrink || bounds.size.height <= shrink {
            break;
        }
        let ring = Rectangle::new(
            bounds.top_left + Point::new(inset, inset),
            Size::new(bounds.size.width - shrink, bounds.size.height - shrink),
        );
        RoundedRectangle::with_equal_corners(ring, Size::new(radius, radius))
            .into_styled(stroke)
            .draw(display)
            .ok();
    }
}

/// Filled rounded rectangle.
pub fn fill_round_rect<D>(
    display: &mut D,
    bounds: Rectangle,
    radius: u32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    RoundedRectangle::with_equal_corners(bounds, Size::new(radius, radius))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Option pill: filled with black text when selected, outlined otherwise.
///
/// `label_offset` positions the text relative to the pill's top-left corner.
pub fn draw_pill<D>(
    display: &mut D,
    bounds: Rectangle,
    text: &str,
    label_offset: Point,
    selected: bool,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let corner = Size::new(3, 3);
    let pill = RoundedRectangle::with_equal_corners(bounds, corner);
    let text_pos = bounds.top_left + label_offset;
    if selected {
        pill.into_styled(PrimitiveStyle::with_fill(color)).draw(display).ok();
        draw_text(display, text, text_pos, LABEL_STYLE_BLACK);
    } else {
        pill.into_styled(PrimitiveStyle::with_stroke(color, 1)).draw(display).ok();
        draw_text(display, text, text_pos, label(color));
    }
}
