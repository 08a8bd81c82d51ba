//! Bounded sample storage and rolling descriptive statistics.
//!
//! [`SampleStore`] keeps readings in arrival order with FIFO eviction
//! past a fixed capacity. [`SignalStats`] is recomputed in full from the
//! current contents on every query; there is no incremental state to
//! drift out of sync.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::domain::sample::Sample;

// ---------------------------------------------------------------------------
// SampleStore
// ---------------------------------------------------------------------------

/// Time-ordered, capacity-bounded collection of observed samples.
///
/// Domain validation of readings happens in the owning map state before
/// they reach the store; the store itself only enforces order and
/// capacity.
#[derive(Debug, Clone)]
pub struct SampleStore {
    /// Stored samples, oldest first.
    samples: VecDeque<Sample>,
    /// Maximum number of samples to retain.
    capacity: usize,
}

impl SampleStore {
    /// Creates a store with the given maximum capacity (at least 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity.min(4096)),
            capacity,
        }
    }

    /// Appends a sample. If the store is at capacity, the oldest sample
    /// is evicted first.
    pub fn add(&mut self, sample: Sample) {
        if self.samples.len() >= self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    /// Iterates over stored samples in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    /// The most recently added sample, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&Sample> {
        self.samples.back()
    }

    /// The sample with the strongest reading, if any. Ties keep the
    /// earliest arrival.
    #[must_use]
    pub fn strongest(&self) -> Option<&Sample> {
        self.samples
            .iter()
            .reduce(|best, s| if s.rssi_dbm > best.rssi_dbm { s } else { best })
    }

    /// Number of samples currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Maximum capacity of the store.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Copies the current contents in arrival order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Sample> {
        self.samples.iter().cloned().collect()
    }

    /// Computes descriptive statistics over the current contents.
    ///
    /// Returns `None` when the store is empty.
    #[must_use]
    pub fn stats(&self) -> Option<SignalStats> {
        SignalStats::compute(self.iter())
    }

    /// Removes all stored samples.
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

// ---------------------------------------------------------------------------
// SignalStats
// ---------------------------------------------------------------------------

/// Descriptive statistics over a set of readings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalStats {
    /// Number of readings.
    pub count: usize,
    /// Mean signal strength (dBm).
    pub mean_dbm: f64,
    /// Weakest reading (dBm).
    pub min_dbm: f64,
    /// Strongest reading (dBm).
    pub max_dbm: f64,
    /// Observed spread, `max - min` (dB).
    pub spread_db: f64,
}

impl SignalStats {
    /// Computes statistics over a sample sequence in one pass.
    ///
    /// Returns `None` on empty input rather than failing.
    pub fn compute<'a, I>(samples: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Sample>,
    {
        let mut count = 0_usize;
        let mut sum = 0.0;
        let mut min = f64::MAX;
        let mut max = f64::MIN;

        for s in samples {
            count += 1;
            sum += s.rssi_dbm;
            min = min.min(s.rssi_dbm);
            max = max.max(s.rssi_dbm);
        }

        if count == 0 {
            return None;
        }

        Some(Self {
            count,
            mean_dbm: sum / count as f64,
            min_dbm: min,
            max_dbm: max,
            spread_db: max - min,
        })
    }
}
