//! Fixed-capacity sample history for the graph pages.
//!
//! [`HistoryRing`] is a plain circular buffer: a write cursor that always
//! advances and a fill count that saturates at capacity. Chronological order
//! is reconstructed on read from `(index - count + i) mod N`, so iteration is
//! a pure function of the cursor and count and can be restarted freely.
//!
//! [`History`] holds one ring per metric. All three are written together, so
//! they always share the same cursor and count.

use crate::config::{HISTORY_INTERVAL_MS, HISTORY_SIZE};
use crate::measurement::{Measurement, Metric};

// =============================================================================
// Ring Buffer
// =============================================================================

/// Circular buffer keeping the most recent `N` values.
#[derive(Clone, Debug)]
pub struct HistoryRing<T: Copy, const N: usize> {
    buffer: [T; N],
    /// Next slot to write.
    index: usize,
    /// Number of valid samples, saturating at `N`.
    count: usize,
}

impl<T: Copy + Default, const N: usize> HistoryRing<T, N> {
    /// Create an empty ring.
    pub fn new() -> Self {
        Self {
            buffer: [T::default(); N],
            index: 0,
            count: 0,
        }
    }
}

impl<T: Copy + Default, const N: usize> Default for HistoryRing<T, N> {
    fn default() -> Self { Self::new() }
}

impl<T: Copy, const N: usize> HistoryRing<T, N> {
    /// Append a value, evicting the oldest once full.
    pub fn push(
        &mut self,
        value: T,
    ) {
        if N == 0 {
            return;
        }
        self.buffer[self.index] = value;
        self.index = (self.index + 1) % N;
        if self.count < N {
            self.count += 1;
        }
    }

    /// Number of stored samples.
    #[inline]
    pub const fn len(&self) -> usize { self.count }

    /// True before the first push.
    #[inline]
    pub const fn is_empty(&self) -> bool { self.count == 0 }

    /// Iterate stored values from oldest to newest.
    pub fn iter(&self) -> Chronological<'_, T, N> {
        Chronological {
            ring: self,
            position: 0,
        }
    }
}

impl<'a, T: Copy, const N: usize> IntoIterator for &'a HistoryRing<T, N> {
    type Item = T;
    type IntoIter = Chronological<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

/// Oldest-to-newest iterator over a [`HistoryRing`].
#[derive(Clone, Debug)]
pub struct Chronological<'a, T: Copy, const N: usize> {
    ring: &'a HistoryRing<T, N>,
    position: usize,
}

impl<T: Copy, const N: usize> Iterator for Chronological<'_, T, N> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.position >= self.ring.count {
            return None;
        }
        // `index + N - count` cannot underflow since count <= N
        let slot = (self.ring.index + N - self.ring.count + self.position) % N;
        self.position += 1;
        Some(self.ring.buffer[slot])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.ring.count - self.position;
        (remaining, Some(remaining))
    }
}

impl<T: Copy, const N: usize> ExactSizeIterator for Chronological<'_, T, N> {}

// =============================================================================
// Per-metric History
// =============================================================================

/// One-hour history of all three metrics, sampled once per minute.
///
/// Temperature is stored in Celsius; conversion happens at display time so a
/// unit change applies to the whole graph.
#[derive(Clone, Debug, Default)]
pub struct History {
    temperature: HistoryRing<f32, HISTORY_SIZE>,
    humidity: HistoryRing<f32, HISTORY_SIZE>,
    pressure: HistoryRing<f32, HISTORY_SIZE>,
    last_record_ms: u64,
    /// Bumped on every record so graph pages can tell when to replot.
    revision: u32,
}

impl History {
    pub fn new() -> Self { Self::default() }

    /// Append one measurement to all three rings.
    pub fn record(
        &mut self,
        measurement: &Measurement,
    ) {
        self.temperature.push(measurement.temperature);
        self.humidity.push(measurement.humidity);
        self.pressure.push(measurement.pressure);
        self.revision = self.revision.wrapping_add(1);
    }

    /// Record if the history is empty or the sampling interval has elapsed.
    ///
    /// Returns `true` when a sample was stored.
    pub fn record_if_due(
        &mut self,
        now_ms: u64,
        measurement: &Measurement,
    ) -> bool {
        let due = self.is_empty() || now_ms.saturating_sub(self.last_record_ms) >= HISTORY_INTERVAL_MS;
        if !due {
            return false;
        }
        self.last_record_ms = now_ms;
        self.record(measurement);
        log::info!("History: {}/{} points", self.len(), HISTORY_SIZE);
        true
    }

    /// Ring holding the given metric (raw units, Celsius for temperature).
    pub const fn ring(
        &self,
        metric: Metric,
    ) -> &HistoryRing<f32, HISTORY_SIZE> {
        match metric {
            Metric::Temperature => &self.temperature,
            Metric::Humidity => &self.humidity,
            Metric::Pressure => &self.pressure,
        }
    }

    /// Shared fill count of the three rings.
    #[inline]
    pub const fn len(&self) -> usize { self.temperature.len() }

    #[inline]
    pub const fn is_empty(&self) -> bool { self.temperature.is_empty() }

    /// Changes whenever a sample is recorded.
    #[inline]
    pub const fn revision(&self) -> u32 { self.revision }
}

// =============================================================================
// Unit Tests
// =============================================================================
