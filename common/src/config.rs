//! Application configuration constants.
//!
//! # Pre-computed Layout Constants
//!
//! Panel positions are derived from the screen size at compile time, so the
//! renderers never do layout arithmetic per frame:
//!
//! ```ignore
//! pub const BOX_START_X: i32 = (SCREEN_WIDTH as i32 - BOX_ROW_WIDTH) / 2;
//! pub const BOX_Y: i32 = TOP_MARGIN + (SCREEN_HEIGHT as i32 - TOP_MARGIN - BOX_HEIGHT as i32) / 2;
//! ```
//!
//! # Timing
//!
//! All intervals are plain milliseconds so the core stays independent of any
//! clock type. The driver passes a monotonic `now_ms` into every tick.

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (Cardputer ST7789V2 in landscape: 240x135).
pub const SCREEN_WIDTH: u32 = 240;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 135;

/// Backlight level written when the screen times out.
pub const BACKLIGHT_OFF: u8 = 0;

// =============================================================================
// History Configuration
// =============================================================================

/// Samples kept per metric. One per minute gives one hour of graph.
pub const HISTORY_SIZE: usize = 60;

/// Interval between history samples.
pub const HISTORY_INTERVAL_MS: u64 = 60_000;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Minimum time between incremental display updates.
pub const DISPLAY_INTERVAL_MS: u64 = 1_000;

/// Delay at the end of each loop iteration.
pub const LOOP_DELAY_MS: u64 = 50;

/// Blink period of the battery indicator when the battery is low.
pub const BATTERY_BLINK_INTERVAL_MS: u64 = 500;

/// Battery level (percent) at or below which the indicator blinks while discharging.
pub const BATTERY_LOW_PERCENT: u8 = 10;

/// Minimum absolute change before a displayed value is repainted.
///
/// Sensor jitter below display precision would otherwise repaint the value
/// every refresh.
pub const DIRTY_THRESHOLD: f32 = 0.05;

// =============================================================================
// Main Page Layout
// =============================================================================

/// Width of each metric panel.
pub const BOX_WIDTH: u32 = 72;

/// Height of each metric panel.
pub const BOX_HEIGHT: u32 = 85;

/// Horizontal gap between panels.
pub const BOX_MARGIN: u32 = 6;

/// Corner radius of the panel border.
pub const BOX_RADIUS: u32 = 8;

/// Panel border thickness (drawn as nested rounded rectangles).
pub const BOX_BORDER: u32 = 2;

/// Space reserved above the panels for the battery indicator.
pub const TOP_MARGIN: i32 = 22;

/// Total width of the three panels and their gaps.
const BOX_ROW_WIDTH: i32 = (BOX_WIDTH * 3 + BOX_MARGIN * 2) as i32;

/// X of the leftmost (temperature) panel.
pub const BOX_START_X: i32 = (SCREEN_WIDTH as i32 - BOX_ROW_WIDTH) / 2;

/// Horizontal distance between panel origins.
pub const BOX_STRIDE: i32 = (BOX_WIDTH + BOX_MARGIN) as i32;

/// Y of all three panels (vertically centered below the top margin).
pub const BOX_Y: i32 = TOP_MARGIN + (SCREEN_HEIGHT as i32 - TOP_MARGIN - BOX_HEIGHT as i32) / 2;

/// Y of the panel value text (top edge).
pub const BOX_VALUE_Y: i32 = BOX_Y + 45;

/// Y of the panel unit text (top edge).
pub const BOX_UNIT_Y: i32 = BOX_Y + 68;

/// Y of the icon center inside each panel.
pub const BOX_ICON_Y: i32 = BOX_Y + 22;

// =============================================================================
// Graph Page Layout
// =============================================================================

/// Left edge of the graph frame (room for y-axis labels on the left).
pub const GRAPH_X: i32 = 30;

/// Top edge of the graph frame (room for the title row above).
pub const GRAPH_Y: i32 = 18;

/// Width of the graph frame.
pub const GRAPH_WIDTH: u32 = SCREEN_WIDTH - 35;

/// Height of the graph frame.
pub const GRAPH_HEIGHT: u32 = SCREEN_HEIGHT - 45;

/// Inset between the frame and the plotted points.
pub const GRAPH_INSET: i32 = 2;

/// Left edge of the title row text.
pub const TITLE_X: i32 = 5;

/// Top edge of the title row text.
pub const TITLE_Y: i32 = 5;

/// Y of the bottom hint line ("ESC:back").
pub const HINT_Y: i32 = SCREEN_HEIGHT as i32 - 10;

// =============================================================================
// Battery Indicator Layout
// =============================================================================

/// Left edge of the battery outline.
pub const BATTERY_X: i32 = SCREEN_WIDTH as i32 - 55;

/// Top edge of the battery outline.
pub const BATTERY_Y: i32 = 3;

/// Battery outline width.
pub const BATTERY_WIDTH: u32 = 22;

/// Battery outline height.
pub const BATTERY_HEIGHT: u32 = 10;
