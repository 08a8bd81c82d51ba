//! Engine configuration.
//!
//! [`EngineConfig`] is the single source of truth for every tunable in
//! the engine: spatial scale, eviction threshold, interpolation falloff,
//! and propagation constants. It is serializable so a host application
//! can persist or ship it alongside exported snapshots.
//!
//! # Example
//!
//! ```rust
//! use wifi_coverage_map::config::EngineConfig;
//!
//! let cfg = EngineConfig::default();
//! cfg.validate().expect("default config is valid");
//!
//! assert_eq!(cfg.sample_capacity, 300);
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::geometry::GridScale;
use crate::error::{CoverageError, CoverageResult};
use crate::interpolate::DecayKernel;
use crate::predict::PropagationModel;

/// Complete configuration for a coverage map engine.
///
/// All fields have documented defaults matching the reference map setup.
/// Use [`EngineConfig::default()`] as a starting point and override
/// individual fields as needed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Pixel/metric conversion ratio. Default: **50 px = 5 m**.
    pub grid_scale: GridScale,

    /// Maximum number of stored samples before FIFO eviction.
    /// Default: **300**.
    pub sample_capacity: usize,

    /// Interpolation falloff kernel. Default: **linear ramp, 150 px
    /// cutoff**.
    pub decay: DecayKernel,

    /// Confidence contributed per unit of accumulated interpolation
    /// weight, clamped to 1. Default: **0.8**.
    pub confidence_gain: f64,

    /// Propagation prediction constants. Default: **-30 dBm base,
    /// 10 px/dB, 15 dB per wall**.
    pub propagation: PropagationModel,
}

impl EngineConfig {
    /// Checks every tunable for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`CoverageError::InvalidConfig`] naming the first field
    /// that fails.
    pub fn validate(&self) -> CoverageResult<()> {
        if self.sample_capacity == 0 {
            return Err(CoverageError::invalid_config(
                "sample_capacity must be at least 1",
            ));
        }
        if self.grid_scale.grid_unit_pixels <= 0.0 || self.grid_scale.grid_unit_meters <= 0.0 {
            return Err(CoverageError::invalid_config(format!(
                "grid_scale units must be positive, got {} px / {} m",
                self.grid_scale.grid_unit_pixels, self.grid_scale.grid_unit_meters
            )));
        }
        match self.decay {
            DecayKernel::LinearRamp { cutoff_px } if cutoff_px <= 0.0 => {
                return Err(CoverageError::invalid_config(
                    "decay cutoff must be positive",
                ));
            }
            DecayKernel::Exponential {
                scale_px,
                cutoff_px,
            } if scale_px <= 0.0 || cutoff_px <= 0.0 => {
                return Err(CoverageError::invalid_config(
                    "decay scale and cutoff must be positive",
                ));
            }
            _ => {}
        }
        if self.confidence_gain <= 0.0 {
            return Err(CoverageError::invalid_config(
                "confidence_gain must be positive",
            ));
        }
        if self.propagation.distance_scale_px_per_db <= 0.0 {
            return Err(CoverageError::invalid_config(
                "distance_scale_px_per_db must be positive",
            ));
        }
        if self.propagation.per_wall_attenuation_db < 0.0 {
            return Err(CoverageError::invalid_config(
                "per_wall_attenuation_db must not be negative",
            ));
        }
        if !(crate::RSSI_FLOOR_DBM..=crate::RSSI_CEILING_DBM)
            .contains(&self.propagation.base_signal_dbm)
        {
            return Err(CoverageError::invalid_config(format!(
                "base_signal_dbm {} outside RSSI domain",
                self.propagation.base_signal_dbm
            )));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid_scale: GridScale::default(),
            sample_capacity: 300,
            decay: DecayKernel::default(),
            confidence_gain: 0.8,
            propagation: PropagationModel::default(),
        }
    }
}
