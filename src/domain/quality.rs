//! Discrete signal-quality classification.
//!
//! Maps a raw dBm reading to an ordered quality tier, a display color,
//! and a percentage score. The percentage uses the common WLAN-driver
//! linear mapping `pct = 2 * (dbm + 100)` clamped to [0, 100], so it is
//! continuous and monotone over the whole input range.

use serde::Serialize;

// ---------------------------------------------------------------------------
// QualityTier
// ---------------------------------------------------------------------------

/// Ordered signal-quality tiers, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum QualityTier {
    /// At or above -50 dBm.
    Excellent,
    /// At or above -60 dBm.
    Good,
    /// At or above -70 dBm.
    Fair,
    /// At or above -80 dBm.
    Poor,
    /// Below -80 dBm, including readings under the domain floor.
    Bad,
}

impl QualityTier {
    /// Classifies a raw dBm reading. Total over all finite inputs;
    /// anything below the weakest threshold is `Bad`, never an error.
    #[must_use]
    pub fn from_rssi(rssi_dbm: f64) -> Self {
        if rssi_dbm >= -50.0 {
            Self::Excellent
        } else if rssi_dbm >= -60.0 {
            Self::Good
        } else if rssi_dbm >= -70.0 {
            Self::Fair
        } else if rssi_dbm >= -80.0 {
            Self::Poor
        } else {
            Self::Bad
        }
    }

    /// The weakest dBm reading that still maps to this tier, or `None`
    /// for [`QualityTier::Bad`], which is unbounded below.
    #[must_use]
    pub fn floor_dbm(&self) -> Option<f64> {
        match self {
            Self::Excellent => Some(-50.0),
            Self::Good => Some(-60.0),
            Self::Fair => Some(-70.0),
            Self::Poor => Some(-80.0),
            Self::Bad => None,
        }
    }

    /// Display color for this tier as a hex string.
    #[must_use]
    pub fn color(&self) -> &'static str {
        match self {
            Self::Excellent => "#51cf66",
            Self::Good => "#94d82d",
            Self::Fair => "#ffd43b",
            Self::Poor => "#ff9f43",
            Self::Bad => "#ff6b6b",
        }
    }

    /// Percentage-scale range `[low, high]` covered by this tier.
    #[must_use]
    pub fn percent_range(&self) -> (f64, f64) {
        match self {
            Self::Excellent => (100.0, 100.0),
            Self::Good => (80.0, 100.0),
            Self::Fair => (60.0, 80.0),
            Self::Poor => (40.0, 60.0),
            Self::Bad => (0.0, 40.0),
        }
    }
}

impl std::fmt::Display for QualityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Excellent => write!(f, "Excellent"),
            Self::Good => write!(f, "Good"),
            Self::Fair => write!(f, "Fair"),
            Self::Poor => write!(f, "Poor"),
            Self::Bad => write!(f, "Bad"),
        }
    }
}

// ---------------------------------------------------------------------------
// SignalQuality
// ---------------------------------------------------------------------------

/// Full classification of one reading: tier, color, and percentage score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignalQuality {
    /// The discrete quality tier.
    pub tier: QualityTier,
    /// Display color, taken from the tier.
    pub color: &'static str,
    /// Normalized score in [0, 100], monotone in the input reading.
    pub percentage: f64,
}

impl SignalQuality {
    /// Classifies a raw dBm reading.
    #[must_use]
    pub fn classify(rssi_dbm: f64) -> Self {
        let tier = QualityTier::from_rssi(rssi_dbm);
        Self {
            tier,
            color: tier.color(),
            percentage: dbm_to_percent(rssi_dbm),
        }
    }
}

/// Converts a dBm reading to the linear percentage scale, clamped to
/// [0, 100].
#[must_use]
pub fn dbm_to_percent(rssi_dbm: f64) -> f64 {
    (2.0 * (rssi_dbm + 100.0)).clamp(0.0, 100.0)
}

/// Converts a driver-reported signal percentage (0-100) to an
/// approximate dBm value: `dBm = pct / 2 - 100`.
///
/// This is the inverse of [`dbm_to_percent`] on the unclamped range and
/// matches the conversion used by the Windows WLAN API.
#[must_use]
pub fn percent_to_dbm(pct: f64) -> f64 {
    (pct / 2.0) - 100.0
}
