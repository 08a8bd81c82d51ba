//! # wifi-coverage-map
//!
//! Spatial `WiFi` coverage mapping and propagation prediction engine.
//!
//! The engine ingests discrete, spatially-tagged signal-strength samples
//! and turns them into a continuous coverage estimate over a bounded
//! planar area, plus a model-based prediction of coverage from a
//! transmitter location and a set of obstructing walls:
//!
//! - **Domain types**: [`Sample`], [`Wall`], [`PixelPoint`],
//!   [`GridScale`], [`QualityTier`] in the [`domain`] module.
//! - **Storage**: [`SampleStore`] -- bounded, time-ordered sample
//!   collection with FIFO eviction, and [`SignalStats`] rolling
//!   statistics.
//! - **Interpolation**: [`SpatialInterpolator`] -- decay-weighted
//!   averaging of nearby samples over a [`CoverageGrid`].
//! - **Prediction**: [`PropagationModel`] -- distance path loss plus
//!   per-wall attenuation via the [`obstruction`] tests.
//! - **State**: [`MapState`] -- the single owner of samples, walls, and
//!   transmitter, with validated mutations and snapshot export.
//!
//! Transport of samples from a radio interface and rendering of the
//! resulting grids are external collaborators; the engine only produces
//! numeric and classified results.
//!
//! ## Example
//!
//! ```rust
//! use wifi_coverage_map::prelude::*;
//!
//! let mut map = MapState::with_defaults();
//! map.add_sample(Sample::new(
//!     PixelPoint::new(120.0, 80.0),
//!     -62.0,
//!     SourceId::new("HomeNet"),
//! ))?;
//!
//! let grid = GridSpec::new(400.0, 300.0, 20.0)?;
//! let coverage = map.interpolate(&grid);
//! assert!(coverage.defined_count() > 0);
//! # Ok::<(), wifi_coverage_map::CoverageError>(())
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod interpolate;
pub mod obstruction;
pub mod predict;
pub mod state;
pub mod store;

// Re-export commonly used types at the crate root.
pub use config::EngineConfig;
pub use domain::geometry::{GridScale, MetricPoint, PixelPoint, Wall};
pub use domain::grid::{CoverageCell, CoverageGrid, GridSpec};
pub use domain::quality::{dbm_to_percent, percent_to_dbm, QualityTier, SignalQuality};
pub use domain::sample::{rssi_in_domain, Sample, SourceId, Timestamp};
pub use error::{CoverageError, CoverageResult};
pub use export::MapSnapshot;
pub use interpolate::{DecayKernel, SpatialInterpolator};
pub use predict::PropagationModel;
pub use state::MapState;
pub use store::{SampleStore, SignalStats};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Weakest physically plausible reading (dBm). Predictions are clamped
/// here and weaker raw readings are rejected.
pub const RSSI_FLOOR_DBM: f64 = -100.0;

/// Strongest physically plausible reading (dBm).
pub const RSSI_CEILING_DBM: f64 = -30.0;

/// Prelude module for convenient imports.
///
/// ```rust
/// use wifi_coverage_map::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::EngineConfig;
    pub use crate::domain::geometry::{GridScale, MetricPoint, PixelPoint, Wall};
    pub use crate::domain::grid::{CoverageCell, CoverageGrid, GridSpec};
    pub use crate::domain::quality::{QualityTier, SignalQuality};
    pub use crate::domain::sample::{Sample, SourceId, Timestamp};
    pub use crate::error::{CoverageError, CoverageResult};
    pub use crate::export::MapSnapshot;
    pub use crate::interpolate::{DecayKernel, SpatialInterpolator};
    pub use crate::predict::PropagationModel;
    pub use crate::state::MapState;
    pub use crate::store::{SampleStore, SignalStats};
}
