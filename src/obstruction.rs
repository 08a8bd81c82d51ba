//! Line-of-sight obstruction tests against wall segments.
//!
//! Uses the standard parametric two-segment intersection: solve for
//! `ua`, `ub` such that the segments meet, and intersect iff both lie in
//! `[0, 1]`. A zero determinant (parallel or collinear segments) is
//! defined as non-intersecting by policy.

use crate::domain::geometry::{PixelPoint, Wall};

/// Whether segment `a1 -> a2` intersects segment `b1 -> b2`.
///
/// Swapping the endpoints of either segment does not change the result.
#[must_use]
pub fn segments_intersect(a1: PixelPoint, a2: PixelPoint, b1: PixelPoint, b2: PixelPoint) -> bool {
    let denom = (b2.y - b1.y) * (a2.x - a1.x) - (b2.x - b1.x) * (a2.y - a1.y);
    if denom == 0.0 {
        // Parallel or collinear: defined as no crossing.
        return false;
    }

    let ua = ((b2.x - b1.x) * (a1.y - b1.y) - (b2.y - b1.y) * (a1.x - b1.x)) / denom;
    let ub = ((a2.x - a1.x) * (a1.y - b1.y) - (a2.y - a1.y) * (a1.x - b1.x)) / denom;

    (0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub)
}

/// Whether a wall obstructs the straight line from `from` to `to`.
#[must_use]
pub fn wall_blocks(from: PixelPoint, to: PixelPoint, wall: &Wall) -> bool {
    segments_intersect(from, to, wall.a, wall.b)
}

/// Number of walls obstructing the straight line from `from` to `to`.
#[must_use]
pub fn count_crossings(from: PixelPoint, to: PixelPoint, walls: &[Wall]) -> usize {
    walls.iter().filter(|w| wall_blocks(from, to, w)).count()
}
