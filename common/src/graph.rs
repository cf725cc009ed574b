//! Graph axis math: value range fitting and point projection.
//!
//! Points are spread over a fixed virtual width of [`HISTORY_SIZE`] slots, so
//! a partially filled history starts at the left edge and grows to the right
//! as samples arrive.

use crate::config::{GRAPH_HEIGHT, GRAPH_INSET, GRAPH_WIDTH, GRAPH_X, GRAPH_Y, HISTORY_SIZE};

/// Minimum visible span of the y axis, in display units.
pub const MIN_SPAN: f32 = 2.0;

/// Padding added above and below the data, as a fraction of the data range.
pub const PAD_FRACTION: f32 = 0.1;

/// Y-axis value range of a graph.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct AxisRange {
    pub min: f32,
    pub max: f32,
}

impl AxisRange {
    /// Fit a padded range around `values`. `None` when there are no values.
    ///
    /// Ranges narrower than [`MIN_SPAN`] are centered on the data midpoint and
    /// widened to exactly `MIN_SPAN`; wider ranges are padded by
    /// [`PAD_FRACTION`] of the range on both ends.
    pub fn fit<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f32>,
    {
        let mut iter = values.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));

        let range = max - min;
        // {18, 19} has range 1, so it becomes 18.5 +/- 1 = [17.5, 19.5], not
        // the 10 % padded [17.9, 19.1]
        if range < MIN_SPAN {
            let mid = (max + min) / 2.0;
            Some(Self {
                min: mid - MIN_SPAN / 2.0,
                max: mid + MIN_SPAN / 2.0,
            })
        } else {
            let pad = range * PAD_FRACTION;
            Some(Self {
                min: min - pad,
                max: max + pad,
            })
        }
    }

    #[inline]
    pub fn span(&self) -> f32 { self.max - self.min }
}

/// Screen x of history slot `slot` (0 = oldest).
pub const fn plot_x(slot: usize) -> i32 {
    let usable = GRAPH_WIDTH as i32 - 2 * GRAPH_INSET;
    GRAPH_X + GRAPH_INSET + (slot as i32 * usable) / (HISTORY_SIZE as i32 - 1)
}

/// Screen y of `value` within `range`. Larger values are higher on screen.
pub fn plot_y(
    value: f32,
    range: &AxisRange,
) -> i32 {
    let usable = (GRAPH_HEIGHT as i32 - 2 * GRAPH_INSET) as f32;
    let bottom = GRAPH_Y + GRAPH_HEIGHT as i32 - GRAPH_INSET;
    bottom - ((value - range.min) / range.span() * usable) as i32
}
