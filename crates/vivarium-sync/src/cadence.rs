//! Server update cadence estimation
//!
//! The server pushes updates at its own rhythm, which rarely matches the
//! display refresh rate. The estimator keeps a bounded rolling window of
//! observed inter-update intervals and yields a smoothed estimate of the
//! expected time between arrivals, used to normalize per-frame
//! interpolation fractions.

use std::collections::VecDeque;

/// Maximum number of interval samples kept in the window
pub const MAX_SAMPLES: usize = 16;

/// Estimate returned before any interval has been observed, in milliseconds
pub const FALLBACK_CADENCE_MS: f32 = 100.0;

/// Smallest interval accepted into the window, in milliseconds
///
/// Intervals below this are clamped rather than rejected, keeping the
/// estimate stable against clock anomalies.
pub const MIN_INTERVAL_MS: u64 = 1;

/// Rolling estimator of the expected time between server updates
#[derive(Debug, Clone, Default)]
pub struct CadenceEstimator {
    /// Observed intervals in milliseconds, oldest first
    samples: VecDeque<u64>,
}

impl CadenceEstimator {
    /// Create an empty estimator
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(MAX_SAMPLES),
        }
    }

    /// Record an observed inter-update interval in milliseconds
    ///
    /// Evicts the oldest sample once the window is full. Implausibly small
    /// values are clamped to [`MIN_INTERVAL_MS`].
    pub fn record_interval(&mut self, ms: u64) {
        self.samples.push_back(ms.max(MIN_INTERVAL_MS));
        if self.samples.len() > MAX_SAMPLES {
            self.samples.pop_front();
        }
    }

    /// Get the current cadence estimate in milliseconds
    ///
    /// Arithmetic mean of the window, recomputed on every call. Returns
    /// [`FALLBACK_CADENCE_MS`] while the window is empty.
    pub fn estimate_ms(&self) -> f32 {
        if self.samples.is_empty() {
            return FALLBACK_CADENCE_MS;
        }
        let sum: u64 = self.samples.iter().sum();
        sum as f32 / self.samples.len() as f32
    }

    /// Get the number of samples in the window
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if no interval has been observed yet
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Drop all samples
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
