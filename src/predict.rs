//! Model-based coverage prediction from a transmitter location.
//!
//! Combines a free-space-like distance path loss with a fixed per-wall
//! attenuation penalty. This is a planning aid, not a physically
//! accurate RF model; multipath and diffraction are out of scope.

use serde::{Deserialize, Serialize};

use crate::domain::geometry::{PixelPoint, Wall};
use crate::domain::grid::{CoverageCell, CoverageGrid, GridSpec};
use crate::obstruction::count_crossings;

/// Path-loss-with-attenuation prediction model.
///
/// `predicted = clamp(base - dist/scale - crossings * per_wall, floor, ceiling)`
/// where the clamp bounds are the crate's RSSI domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropagationModel {
    /// Signal strength right at the transmitter (dBm).
    pub base_signal_dbm: f64,
    /// Pixels of travel per dB of path loss.
    pub distance_scale_px_per_db: f64,
    /// Attenuation applied per obstructing wall (dB).
    pub per_wall_attenuation_db: f64,
}

impl PropagationModel {
    /// Creates a model from explicit constants.
    #[must_use]
    pub fn new(
        base_signal_dbm: f64,
        distance_scale_px_per_db: f64,
        per_wall_attenuation_db: f64,
    ) -> Self {
        Self {
            base_signal_dbm,
            distance_scale_px_per_db,
            per_wall_attenuation_db,
        }
    }

    /// Distance-only path loss estimate at `distance_px` from the
    /// transmitter, before wall penalties and clamping.
    #[must_use]
    pub fn path_loss_dbm(&self, distance_px: f64) -> f64 {
        self.base_signal_dbm - distance_px / self.distance_scale_px_per_db
    }

    /// Predicts signal strength at `target`, given the transmitter
    /// location and the current wall set.
    ///
    /// The result is always clamped to the RSSI domain.
    #[must_use]
    pub fn predict_at(&self, transmitter: PixelPoint, target: PixelPoint, walls: &[Wall]) -> f64 {
        let distance = transmitter.distance_to(&target);
        let crossings = count_crossings(transmitter, target, walls);
        let penalty = crossings as f64 * self.per_wall_attenuation_db;

        (self.path_loss_dbm(distance) - penalty).clamp(crate::RSSI_FLOOR_DBM, crate::RSSI_CEILING_DBM)
    }

    /// Predicts signal strength at every cell center of `grid`.
    ///
    /// Every cell gets a defined value at full confidence: the model is
    /// total, unlike interpolation which depends on nearby samples.
    #[must_use]
    pub fn predict_grid(
        &self,
        transmitter: PixelPoint,
        walls: &[Wall],
        grid: &GridSpec,
    ) -> CoverageGrid {
        let cols = grid.cols();
        let rows = grid.rows();

        let mut cells = Vec::with_capacity(grid.cell_count());
        for row in 0..rows {
            for col in 0..cols {
                let center = grid.cell_center(col, row);
                cells.push(CoverageCell {
                    position: center,
                    signal_dbm: Some(self.predict_at(transmitter, center, walls)),
                    confidence: 1.0,
                });
            }
        }

        CoverageGrid::new(*grid, cells)
    }
}

impl Default for PropagationModel {
    fn default() -> Self {
        Self::new(-30.0, 10.0, 15.0)
    }
}
