//! Streaming moving average
//!
//! Keeps the last `W` samples and a running sum so both `update()` and
//! `value()` are O(1) regardless of the window size.
//!
//! The sum is held in `f64` and rebuilt from the window every `W` updates,
//! so cancellation after a large sample cannot outlive that sample.

use heapless::HistoryBuffer;

use crate::traits::Vector3;

/// Fixed-window moving average over `f32` samples
///
/// `value()` is the mean of the last `min(len, W)` samples, or `0.0` before
/// the first update.
#[derive(Clone)]
pub struct StreamingAverage<const W: usize> {
    window: HistoryBuffer<f32, W>,
    sum: f64,
    /// Updates since the sum was last rebuilt from the window
    since_resync: usize,
}

impl<const W: usize> Default for StreamingAverage<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize> StreamingAverage<W> {
    const NONZERO_WINDOW: () = assert!(W > 0, "moving average window must not be empty");

    /// Create an empty filter
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NONZERO_WINDOW;
        Self {
            window: HistoryBuffer::new(),
            sum: 0.0,
            since_resync: 0,
        }
    }

    /// Push a sample, evicting the oldest one once the window is full
    pub fn update(&mut self, sample: f32) {
        let evicted = if self.is_full() {
            self.window.oldest_ordered().next().copied()
        } else {
            None
        };
        self.window.write(sample);

        self.since_resync += 1;
        if self.since_resync >= W {
            // Every sample in the window arrived after the last rebuild
            self.sum = self.window.as_slice().iter().copied().map(f64::from).sum();
            self.since_resync = 0;
        } else {
            self.sum += f64::from(sample) - evicted.map_or(0.0, f64::from);
        }
    }

    /// Current mean, `0.0` while empty
    pub fn value(&self) -> f32 {
        match self.window.len() {
            0 => 0.0,
            n => (self.sum / n as f64) as f32,
        }
    }

    /// Number of samples currently in the window
    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.len() == 0
    }

    /// Check whether the window holds `W` samples
    pub fn is_full(&self) -> bool {
        self.window.len() == W
    }
}

/// One moving average per axis
#[derive(Clone, Default)]
pub struct VectorAverage<const W: usize> {
    x: StreamingAverage<W>,
    y: StreamingAverage<W>,
    z: StreamingAverage<W>,
}

impl<const W: usize> VectorAverage<W> {
    pub const fn new() -> Self {
        Self {
            x: StreamingAverage::new(),
            y: StreamingAverage::new(),
            z: StreamingAverage::new(),
        }
    }

    /// Push one sample per axis and return the new means
    pub fn update(&mut self, sample: Vector3) -> Vector3 {
        self.x.update(sample.x);
        self.y.update(sample.y);
        self.z.update(sample.z);
        self.value()
    }

    /// Current per-axis means
    pub fn value(&self) -> Vector3 {
        Vector3::new(self.x.value(), self.y.value(), self.z.value())
    }
}
