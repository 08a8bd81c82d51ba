//! Observed signal readings and their identity types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::geometry::PixelPoint;
use crate::domain::quality::SignalQuality;

// ---------------------------------------------------------------------------
// SourceId -- Value Object
// ---------------------------------------------------------------------------

/// Identifier of the network a reading was taken from (typically an SSID).
///
/// May be empty for hidden networks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceId(String);

impl SourceId {
    /// Creates a new source ID from a string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the source ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Timestamp -- Value Object
// ---------------------------------------------------------------------------

/// Capture time of a reading, with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp {
    /// Seconds since Unix epoch.
    pub seconds: i64,
    /// Nanoseconds within the second.
    pub nanos: u32,
}

impl Timestamp {
    /// Creates a timestamp from seconds and nanoseconds.
    #[must_use]
    pub fn new(seconds: i64, nanos: u32) -> Self {
        Self { seconds, nanos }
    }

    /// Creates a timestamp from the current time.
    #[must_use]
    pub fn now() -> Self {
        let now = Utc::now();
        Self {
            seconds: now.timestamp(),
            nanos: now.timestamp_subsec_nanos(),
        }
    }

    /// Creates a timestamp from a `DateTime<Utc>`.
    #[must_use]
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self {
            seconds: dt.timestamp(),
            nanos: dt.timestamp_subsec_nanos(),
        }
    }

    /// Converts to `DateTime<Utc>`, if representable.
    #[must_use]
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.seconds, self.nanos)
    }

    /// Seconds elapsed since an earlier timestamp.
    #[must_use]
    pub fn duration_since(&self, earlier: &Self) -> f64 {
        let diff = (i128::from(self.seconds) - i128::from(earlier.seconds)) * 1_000_000_000
            + (i128::from(self.nanos) - i128::from(earlier.nanos));
        diff as f64 / 1_000_000_000.0
    }
}

// ---------------------------------------------------------------------------
// Sample -- Value Object
// ---------------------------------------------------------------------------

/// A single spatially-tagged signal-strength reading.
///
/// Samples are immutable once created; the map only ever appends,
/// evicts, or clears them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Where the reading was taken, in pixel space.
    pub position: PixelPoint,
    /// Received signal strength in dBm (more negative = weaker).
    pub rssi_dbm: f64,
    /// When the reading was captured.
    pub timestamp: Timestamp,
    /// The network the reading belongs to.
    pub source: SourceId,
}

impl Sample {
    /// Creates a sample stamped with the current time.
    #[must_use]
    pub fn new(position: PixelPoint, rssi_dbm: f64, source: SourceId) -> Self {
        Self::with_timestamp(position, rssi_dbm, Timestamp::now(), source)
    }

    /// Creates a sample with an explicit capture time, as delivered by an
    /// external transport layer.
    #[must_use]
    pub fn with_timestamp(
        position: PixelPoint,
        rssi_dbm: f64,
        timestamp: Timestamp,
        source: SourceId,
    ) -> Self {
        Self {
            position,
            rssi_dbm,
            timestamp,
            source,
        }
    }

    /// Whether the reading lies inside the physically plausible domain.
    #[must_use]
    pub fn is_in_domain(&self) -> bool {
        rssi_in_domain(self.rssi_dbm)
    }

    /// Classifies this reading into a quality tier.
    #[must_use]
    pub fn quality(&self) -> SignalQuality {
        SignalQuality::classify(self.rssi_dbm)
    }
}

/// Whether a raw reading lies inside `[RSSI_FLOOR_DBM, RSSI_CEILING_DBM]`.
///
/// NaN is never in domain.
#[must_use]
pub fn rssi_in_domain(rssi_dbm: f64) -> bool {
    (crate::RSSI_FLOOR_DBM..=crate::RSSI_CEILING_DBM).contains(&rssi_dbm)
}
