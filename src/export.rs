//! Snapshot export of the current map state.
//!
//! The snapshot is a plain data dump: samples, walls, transmitter, and
//! current statistics, JSON-compatible with stable field names. There is
//! no schema versioning beyond that stability.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::geometry::{PixelPoint, Wall};
use crate::domain::sample::{Sample, SourceId};
use crate::error::CoverageResult;
use crate::store::SignalStats;

/// Serialized view of one map session.
///
/// Re-importing a snapshot into an engine with the same configuration
/// reproduces the sample store, wall set, and transmitter exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapSnapshot {
    /// Stored samples in arrival order.
    pub samples: Vec<Sample>,
    /// Registered walls.
    pub walls: Vec<Wall>,
    /// Transmitter location, if one was set.
    pub transmitter: Option<PixelPoint>,
    /// Statistics over `samples` at export time. `None` when empty.
    pub stats: Option<SignalStats>,
    /// When the snapshot was taken.
    pub exported_at: DateTime<Utc>,
    /// Network name of the most recent sample, if any.
    pub source: Option<SourceId>,
}

impl MapSnapshot {
    /// Serializes the snapshot to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::CoverageError::Snapshot`] on
    /// serialization failure.
    pub fn to_json(&self) -> CoverageResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a snapshot from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::CoverageError::Snapshot`] when the
    /// document does not match the snapshot shape.
    pub fn from_json(json: &str) -> CoverageResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
