//! Widget components shared by the pages.
//!
//! - [`primitives`]: text placement, thick rounded borders, option pills
//! - [`icons`]: metric icons and the charging bolt
//! - [`battery`]: top-right battery indicator
//!
//! All widgets draw onto any `DrawTarget<Color = Rgb565>` and use the const
//! styles from [`styles`](crate::styles).

mod battery;
mod icons;
mod primitives;

pub use battery::draw_battery;
pub use icons::{draw_barometer, draw_droplet, draw_lightning_bolt, draw_metric_icon, draw_thermometer};
pub use primitives::{
    clear_rect,
    draw_centered_text,
    draw_pill,
    draw_screen_centered,
    draw_text,
    draw_thick_round_rect,
    fill_round_rect,
};
