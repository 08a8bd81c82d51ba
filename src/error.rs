//! Error types for the coverage mapping engine.
//!
//! All errors are local and synchronous: a failed operation reports why and
//! leaves prior state untouched. Nothing in this crate aborts the process.
//!
//! # Example
//!
//! ```rust
//! use wifi_coverage_map::error::CoverageError;
//!
//! fn store_reading(rssi_dbm: f64) -> Result<(), CoverageError> {
//!     Err(CoverageError::RssiOutOfDomain {
//!         value: rssi_dbm,
//!         floor: -100.0,
//!         ceiling: -30.0,
//!     })
//! }
//! ```

use thiserror::Error;

/// A specialized `Result` type for coverage engine operations.
pub type CoverageResult<T> = Result<T, CoverageError>;

/// Errors that can occur while mutating or querying the coverage map.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CoverageError {
    /// A supplied signal-strength reading lies outside the physically
    /// plausible domain. The reading is rejected rather than clamped so
    /// that stored statistics stay trustworthy.
    #[error("RSSI {value} dBm out of domain [{floor}, {ceiling}]")]
    RssiOutOfDomain {
        /// The rejected reading in dBm.
        value: f64,
        /// Lower bound of the accepted domain in dBm.
        floor: f64,
        /// Upper bound of the accepted domain in dBm.
        ceiling: f64,
    },

    /// A wall segment with coincident endpoints was supplied.
    #[error("degenerate wall segment at ({x}, {y}): endpoints coincide")]
    DegenerateWall {
        /// X coordinate of the coincident endpoints (pixels).
        x: f64,
        /// Y coordinate of the coincident endpoints (pixels).
        y: f64,
    },

    /// Propagation prediction was requested with no transmitter configured.
    #[error("no transmitter configured")]
    MissingTransmitter,

    /// An engine configuration value is invalid.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what validation failed.
        message: String,
    },

    /// A snapshot could not be serialized or deserialized.
    #[error("snapshot serialization failed: {0}")]
    Snapshot(#[from] serde_json::Error),
}

impl CoverageError {
    /// Creates a new configuration error.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Creates an out-of-domain error for the crate's RSSI domain.
    #[must_use]
    pub fn rssi_out_of_domain(value: f64) -> Self {
        Self::RssiOutOfDomain {
            value,
            floor: crate::RSSI_FLOOR_DBM,
            ceiling: crate::RSSI_CEILING_DBM,
        }
    }
}
