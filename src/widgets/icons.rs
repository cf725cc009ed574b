//! Metric icons and the charging bolt.
//!
//! Icons are built from filled primitives around a center point. Cutouts are
//! painted in black, so icons must be drawn on a black background.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle, Rectangle, RoundedRectangle, Triangle},
};

use cardenv_common::colors::{BLACK, WHITE};
use cardenv_common::measurement::Metric;

/// Filled circle of `radius` around `center`.
fn fill_circle<D>(
    display: &mut D,
    center: Point,
    radius: u32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(center, 2 * radius + 1)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

fn fill_rect<D>(
    display: &mut D,
    x: i32,
    y: i32,
    w: u32,
    h: u32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(Point::new(x, y), Size::new(w, h))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

fn line<D>(
    display: &mut D,
    from: (i32, i32),
    to: (i32, i32),
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Line::new(Point::new(from.0, from.1), Point::new(to.0, to.1))
        .into_styled(PrimitiveStyle::with_stroke(color, 1))
        .draw(display)
        .ok();
}

/// Thermometer: bulb and stem with a mercury column.
pub fn draw_thermometer<D>(
    display: &mut D,
    center: Point,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let (cx, cy) = (center.x, center.y);
    let bulb = Point::new(cx, cy + 8);

    fill_circle(display, bulb, 6, color);
    RoundedRectangle::with_equal_corners(
        Rectangle::new(Point::new(cx - 3, cy - 10), Size::new(6, 18)),
        Size::new(2, 2),
    )
    .into_styled(PrimitiveStyle::with_fill(color))
    .draw(display)
    .ok();

    // Hollow tube
    fill_circle(display, bulb, 3, BLACK);
    fill_rect(display, cx - 1, cy - 6, 2, 12, BLACK);

    // Mercury
    fill_circle(display, bulb, 2, color);
    fill_rect(display, cx - 1, cy - 2, 2, 10, color);
}

/// Water droplet with a white highlight.
pub fn draw_droplet<D>(
    display: &mut D,
    center: Point,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let (cx, cy) = (center.x, center.y);
    fill_circle(display, Point::new(cx, cy + 4), 7, color);
    Triangle::new(
        Point::new(cx, cy - 12),
        Point::new(cx - 7, cy + 2),
        Point::new(cx + 7, cy + 2),
    )
    .into_styled(PrimitiveStyle::with_fill(color))
    .draw(display)
    .ok();
    fill_circle(display, Point::new(cx - 2, cy + 2), 2, WHITE);
}

/// Gauge face with tick marks and a needle pointing to high pressure.
pub fn draw_barometer<D>(
    display: &mut D,
    center: Point,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let (cx, cy) = (center.x, center.y);
    fill_circle(display, center, 10, color);
    fill_circle(display, center, 7, BLACK);

    line(display, (cx - 6, cy), (cx - 4, cy), color);
    line(display, (cx + 4, cy), (cx + 6, cy), color);
    line(display, (cx, cy - 6), (cx, cy - 4), color);

    line(display, (cx, cy), (cx + 4, cy - 4), color);
    line(display, (cx, cy), (cx + 5, cy - 3), color);
    fill_circle(display, center, 2, color);
}

/// Icon for `metric`.
pub fn draw_metric_icon<D>(
    display: &mut D,
    metric: Metric,
    center: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let color = metric.color();
    match metric {
        Metric::Temperature => draw_thermometer(display, center, color),
        Metric::Humidity => draw_droplet(display, center, color),
        Metric::Pressure => draw_barometer(display, center, color),
    }
}

/// Charging bolt, 6x9 pixels from `top_left`.
pub fn draw_lightning_bolt<D>(
    display: &mut D,
    top_left: Point,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let (x, y) = (top_left.x, top_left.y);
    line(display, (x + 4, y), (x + 1, y + 4), color);
    line(display, (x + 1, y + 4), (x + 3, y + 4), color);
    line(display, (x + 3, y + 4), (x, y + 8), color);
    line(display, (x + 5, y), (x + 2, y + 4), color);
    line(display, (x + 4, y + 4), (x + 1, y + 8), color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::CountingDisplay;

    #[test]
    fn test_icons_stay_inside_panel_width() {
        for metric in Metric::ALL {
            let mut display = CountingDisplay::new();
            draw_metric_icon(&mut display, metric, Point::new(100, 60));
            let (min_x, max_x) = display.x_extent().unwrap_or((0, 0));
            assert!(min_x >= 100 - 12 && max_x <= 100 + 12, "{metric:?} icon too wide");
            assert!(display.count_color(metric.color()) > 0, "{metric:?} icon uses its accent");
        }
    }

    #[test]
    fn test_thermometer_has_hollow_tube() {
        let mut display = CountingDisplay::new();
        draw_thermometer(&mut display, Point::new(50, 50), WHITE);
        assert_eq!(display.pixel(Point::new(50, 45)), Some(BLACK), "Tube above mercury is hollow");
        assert_eq!(display.pixel(Point::new(50, 50)), Some(WHITE), "Mercury fills the lower tube");
    }

    #[test]
    fn test_bolt_fits_battery_outline() {
        let mut display = CountingDisplay::new();
        draw_lightning_bolt(&mut display, Point::new(10, 10), BLACK);
        let (min_x, max_x) = display.x_extent().unwrap_or((0, 0));
        assert!(min_x >= 10 && max_x <= 15);
    }
}
