//! Planar geometry: pixel/metric coordinates, the grid scale, and walls.
//!
//! The external input surface works in pixel coordinates; physical
//! reasoning (area estimates, map labels) works in meters. [`GridScale`]
//! converts between the two with a fixed ratio.

use serde::{Deserialize, Serialize};

use crate::error::{CoverageError, CoverageResult};

// ---------------------------------------------------------------------------
// PixelPoint / MetricPoint -- Value Objects
// ---------------------------------------------------------------------------

/// A point in pixel space, as used by the input/rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    /// Horizontal offset from the map origin (pixels).
    pub x: f64,
    /// Vertical offset from the map origin (pixels).
    pub y: f64,
}

impl PixelPoint {
    /// Creates a new pixel-space point.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point, in pixels.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A point in physical space, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricPoint {
    /// East-West offset from the map origin (meters).
    pub x: f64,
    /// North-South offset from the map origin (meters).
    pub y: f64,
}

impl MetricPoint {
    /// Creates a new metric-space point.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ---------------------------------------------------------------------------
// GridScale -- pixel/metric conversion
// ---------------------------------------------------------------------------

/// Fixed conversion ratio between pixel space and physical space.
///
/// The default matches a 50 px map grid where each grid square spans
/// 5 m, i.e. 10 px per meter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridScale {
    /// Side length of one map grid square, in pixels.
    pub grid_unit_pixels: f64,
    /// Side length of one map grid square, in meters.
    pub grid_unit_meters: f64,
}

impl GridScale {
    /// Creates a new grid scale.
    #[must_use]
    pub fn new(grid_unit_pixels: f64, grid_unit_meters: f64) -> Self {
        Self {
            grid_unit_pixels,
            grid_unit_meters,
        }
    }

    /// Pixels per meter under this scale.
    #[must_use]
    pub fn pixels_per_meter(&self) -> f64 {
        self.grid_unit_pixels / self.grid_unit_meters
    }

    /// Converts a pixel-space point to metric coordinates.
    #[must_use]
    pub fn to_metric(&self, p: PixelPoint) -> MetricPoint {
        let ppm = self.pixels_per_meter();
        MetricPoint::new(p.x / ppm, p.y / ppm)
    }

    /// Converts a metric point back to pixel coordinates.
    #[must_use]
    pub fn to_pixel(&self, p: MetricPoint) -> PixelPoint {
        let ppm = self.pixels_per_meter();
        PixelPoint::new(p.x * ppm, p.y * ppm)
    }

    /// Rough covered-area estimate for a number of sampled points.
    ///
    /// Each sampled point is taken to cover one grid square, so the
    /// estimate is `count * grid_unit_meters^2`.
    #[must_use]
    pub fn covered_area_m2(&self, sample_count: usize) -> f64 {
        sample_count as f64 * self.grid_unit_meters * self.grid_unit_meters
    }
}

impl Default for GridScale {
    fn default() -> Self {
        Self::new(50.0, 5.0)
    }
}

// ---------------------------------------------------------------------------
// Wall -- Value Object
// ---------------------------------------------------------------------------

/// A finite wall segment between two pixel-space points.
///
/// Zero-length segments are invalid and rejected at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    /// First endpoint.
    pub a: PixelPoint,
    /// Second endpoint.
    pub b: PixelPoint,
}

impl Wall {
    /// Creates a wall segment between two points.
    ///
    /// # Errors
    ///
    /// Returns [`CoverageError::DegenerateWall`] when the endpoints
    /// coincide.
    pub fn new(a: PixelPoint, b: PixelPoint) -> CoverageResult<Self> {
        if a == b {
            return Err(CoverageError::DegenerateWall { x: a.x, y: a.y });
        }
        Ok(Self { a, b })
    }

    /// Length of the segment, in pixels.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.a.distance_to(&self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_distance() {
        let p1 = PixelPoint::new(0.0, 0.0);
        let p2 = PixelPoint::new(3.0, 4.0);
        assert!((p1.distance_to(&p2) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn default_scale_is_ten_px_per_meter() {
        let scale = GridScale::default();
        assert!((scale.pixels_per_meter() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn metric_round_trip() {
        let scale = GridScale::default();
        let p = PixelPoint::new(125.0, 75.0);
        let m = scale.to_metric(p);
        assert!((m.x - 12.5).abs() < 1e-12);
        assert!((m.y - 7.5).abs() < 1e-12);

        let back = scale.to_pixel(m);
        assert!((back.x - p.x).abs() < 1e-9);
        assert!((back.y - p.y).abs() < 1e-9);
    }

    #[test]
    fn covered_area_per_point() {
        let scale = GridScale::default();
        // 5 m grid squares: each point covers 25 m^2.
        assert!((scale.covered_area_m2(4) - 100.0).abs() < 1e-12);
        assert!(scale.covered_area_m2(0).abs() < 1e-12);
    }

    #[test]
    fn wall_rejects_coincident_endpoints() {
        let p = PixelPoint::new(10.0, 20.0);
        assert!(Wall::new(p, p).is_err());
        assert!(Wall::new(p, PixelPoint::new(10.0, 21.0)).is_ok());
    }

    #[test]
    fn wall_length() {
        let wall = Wall::new(PixelPoint::new(0.0, 0.0), PixelPoint::new(0.0, 7.0)).unwrap();
        assert!((wall.length() - 7.0).abs() < 1e-12);
    }
}
