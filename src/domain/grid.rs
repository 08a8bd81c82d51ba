//! The coverage grid: cell layout and per-cell results.
//!
//! Both the spatial interpolator and the propagation predictor emit a
//! [`CoverageGrid`] so downstream consumers (renderer, classifier) see
//! one uniform shape.

use serde::{Deserialize, Serialize};

use crate::domain::geometry::PixelPoint;
use crate::domain::quality::SignalQuality;
use crate::error::{CoverageError, CoverageResult};

// ---------------------------------------------------------------------------
// GridSpec
// ---------------------------------------------------------------------------

/// Layout of the output grid over the mapped area.
///
/// The area spans `width_px` x `height_px` pixels from the origin and is
/// divided into square cells of `cell_size_px`. Cells are evaluated at
/// their centers; a cell size of 1 px degenerates to per-pixel output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Width of the mapped area in pixels.
    pub width_px: f64,
    /// Height of the mapped area in pixels.
    pub height_px: f64,
    /// Side length of one output cell in pixels.
    pub cell_size_px: f64,
}

impl GridSpec {
    /// Creates a grid layout.
    ///
    /// # Errors
    ///
    /// Returns [`CoverageError::InvalidConfig`] when any dimension is
    /// not strictly positive.
    pub fn new(width_px: f64, height_px: f64, cell_size_px: f64) -> CoverageResult<Self> {
        if !(width_px > 0.0 && height_px > 0.0 && cell_size_px > 0.0) {
            return Err(CoverageError::invalid_config(format!(
                "grid dimensions must be positive, got {width_px}x{height_px} at cell size {cell_size_px}"
            )));
        }
        Ok(Self {
            width_px,
            height_px,
            cell_size_px,
        })
    }

    /// Number of cell columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        (self.width_px / self.cell_size_px).ceil() as usize
    }

    /// Number of cell rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        (self.height_px / self.cell_size_px).ceil() as usize
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cols() * self.rows()
    }

    /// Center of the cell at `(col, row)`, in pixel space.
    #[must_use]
    pub fn cell_center(&self, col: usize, row: usize) -> PixelPoint {
        PixelPoint::new(
            (col as f64 + 0.5) * self.cell_size_px,
            (row as f64 + 0.5) * self.cell_size_px,
        )
    }
}

// ---------------------------------------------------------------------------
// CoverageCell / CoverageGrid
// ---------------------------------------------------------------------------

/// One evaluated point of the output grid.
///
/// `signal_dbm` is `None` when no sample lies within interpolation
/// support; such cells carry zero confidence and no fabricated value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverageCell {
    /// Cell-center position in pixel space.
    pub position: PixelPoint,
    /// Estimated or predicted signal strength in dBm, if defined.
    pub signal_dbm: Option<f64>,
    /// Confidence in the estimate, in [0, 1]. Zero when undefined.
    pub confidence: f64,
}

impl CoverageCell {
    /// Whether this cell carries a defined estimate.
    #[must_use]
    pub fn is_defined(&self) -> bool {
        self.signal_dbm.is_some()
    }

    /// Classifies the cell's estimate, when defined.
    #[must_use]
    pub fn quality(&self) -> Option<SignalQuality> {
        self.signal_dbm.map(SignalQuality::classify)
    }
}

/// A full grid of coverage cells, stamped with the state revision it was
/// computed from.
///
/// An external scheduler compares `revision` against the current map
/// revision to decide whether a fresh grid is needed; computation itself
/// is always on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageGrid {
    /// Layout this grid was computed for.
    pub spec: GridSpec,
    /// Map-state revision the input snapshot was taken at.
    pub revision: u64,
    /// Row-major cell values.
    cells: Vec<CoverageCell>,
}

impl CoverageGrid {
    /// Creates a grid from row-major cells.
    #[must_use]
    pub fn new(spec: GridSpec, cells: Vec<CoverageCell>) -> Self {
        debug_assert_eq!(cells.len(), spec.cell_count());
        Self {
            spec,
            revision: 0,
            cells,
        }
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[CoverageCell] {
        &self.cells
    }

    /// The cell at `(col, row)`, if inside the grid.
    #[must_use]
    pub fn cell(&self, col: usize, row: usize) -> Option<&CoverageCell> {
        if col >= self.spec.cols() || row >= self.spec.rows() {
            return None;
        }
        self.cells.get(row * self.spec.cols() + col)
    }

    /// Number of cells with a defined estimate.
    #[must_use]
    pub fn defined_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_defined()).count()
    }
}
