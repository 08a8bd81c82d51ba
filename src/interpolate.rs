//! Weighted spatial interpolation of sample readings over a grid.
//!
//! Every cell center is estimated as the decay-weighted average of all
//! samples within the kernel's support radius. Skipping samples beyond
//! the support is an exact optimization, not an approximation: the
//! kernel is zero there by construction.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::grid::{CoverageCell, CoverageGrid, GridSpec};
use crate::domain::sample::Sample;

// ---------------------------------------------------------------------------
// DecayKernel
// ---------------------------------------------------------------------------

/// Distance-weighting function for spatial interpolation.
///
/// Every kernel satisfies `weight(0) = 1`, is strictly decreasing over
/// its support, and is exactly zero beyond [`support_radius_px`]. The
/// finite support is what lets the interpolator skip far-away samples
/// without changing the result.
///
/// [`support_radius_px`]: DecayKernel::support_radius_px
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DecayKernel {
    /// Linear ramp `max(0, 1 - d / cutoff)`.
    LinearRamp {
        /// Distance at which the weight reaches zero (pixels).
        cutoff_px: f64,
    },
    /// Exponential falloff `exp(-d / scale)`, truncated to zero beyond
    /// the cutoff so support stays finite.
    Exponential {
        /// Falloff distance constant (pixels).
        scale_px: f64,
        /// Truncation radius (pixels).
        cutoff_px: f64,
    },
}

impl DecayKernel {
    /// Weight contributed by a sample at distance `d` pixels.
    #[must_use]
    pub fn weight(&self, d: f64) -> f64 {
        match self {
            Self::LinearRamp { cutoff_px } => (1.0 - d / cutoff_px).max(0.0),
            Self::Exponential {
                scale_px,
                cutoff_px,
            } => {
                if d > *cutoff_px {
                    0.0
                } else {
                    (-d / scale_px).exp()
                }
            }
        }
    }

    /// Radius beyond which the weight is exactly zero.
    #[must_use]
    pub fn support_radius_px(&self) -> f64 {
        match self {
            Self::LinearRamp { cutoff_px } | Self::Exponential { cutoff_px, .. } => *cutoff_px,
        }
    }
}

impl Default for DecayKernel {
    /// Linear ramp with a 150 px cutoff.
    fn default() -> Self {
        Self::LinearRamp { cutoff_px: 150.0 }
    }
}

// ---------------------------------------------------------------------------
// SpatialInterpolator
// ---------------------------------------------------------------------------

/// Computes a continuous coverage estimate over a grid from discrete
/// samples.
#[derive(Debug, Clone, Copy)]
pub struct SpatialInterpolator {
    kernel: DecayKernel,
    /// Confidence contributed per unit of accumulated weight, before
    /// clamping to 1.
    confidence_gain: f64,
}

impl SpatialInterpolator {
    /// Creates an interpolator with the given kernel and confidence gain.
    #[must_use]
    pub fn new(kernel: DecayKernel, confidence_gain: f64) -> Self {
        Self {
            kernel,
            confidence_gain,
        }
    }

    /// The decay kernel in use.
    #[must_use]
    pub fn kernel(&self) -> DecayKernel {
        self.kernel
    }

    /// Estimates coverage at every cell center of `grid`.
    ///
    /// Cells with no sample inside the kernel support get no estimate
    /// and zero confidence. Cost is O(cells x in-support samples); the
    /// result is identical to the brute-force weighted sum over all
    /// samples.
    pub fn interpolate<'a, I>(&self, samples: I, grid: &GridSpec) -> CoverageGrid
    where
        I: IntoIterator<Item = &'a Sample>,
    {
        let samples: Vec<&Sample> = samples.into_iter().collect();
        let support = self.kernel.support_radius_px();
        let cols = grid.cols();
        let rows = grid.rows();

        let mut cells = Vec::with_capacity(grid.cell_count());
        for row in 0..rows {
            for col in 0..cols {
                let center = grid.cell_center(col, row);

                let mut total_weight = 0.0;
                let mut weighted_sum = 0.0;
                for s in &samples {
                    let d = center.distance_to(&s.position);
                    if d > support {
                        continue;
                    }
                    let w = self.kernel.weight(d);
                    total_weight += w;
                    weighted_sum += w * s.rssi_dbm;
                }

                let cell = if total_weight > 0.0 {
                    CoverageCell {
                        position: center,
                        signal_dbm: Some(weighted_sum / total_weight),
                        confidence: (total_weight * self.confidence_gain).min(1.0),
                    }
                } else {
                    CoverageCell {
                        position: center,
                        signal_dbm: None,
                        confidence: 0.0,
                    }
                };
                cells.push(cell);
            }
        }

        let grid = CoverageGrid::new(*grid, cells);
        debug!(
            cells = grid.cells().len(),
            samples = samples.len(),
            defined = grid.defined_count(),
            "interpolated coverage grid"
        );
        grid
    }
}
