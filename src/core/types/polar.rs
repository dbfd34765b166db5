//! Polar point type.

use super::point::Point;
use crate::core::math;
use serde::Serialize;

/// A point in polar coordinates around the current viewpoint.
///
/// The angle is canonicalized to `(-π, π]` at construction; all angle
/// bookkeeping downstream relies on that invariant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PolarPoint {
    /// Canonical direction from the viewpoint
    pub angle: f64,
    /// Distance from the viewpoint
    pub length: f64,
}

impl PolarPoint {
    /// Create a polar point, canonicalizing the angle.
    #[inline]
    pub fn new(angle: f64, length: f64) -> Self {
        Self {
            angle: math::normalize_angle(angle),
            length,
        }
    }

    /// Convert a viewpoint-relative Cartesian point.
    #[inline]
    pub fn from_cartesian(point: &Point) -> Self {
        Self::new(point.angle(), point.length())
    }

    /// Convert back to a viewpoint-relative Cartesian point.
    #[inline]
    pub fn to_cartesian(&self) -> Point {
        Point::new(
            self.angle.cos() * self.length,
            self.angle.sin() * self.length,
        )
    }

    /// Component-wise epsilon comparison.
    ///
    /// Used for continuity checks when joining arcs, never for the angle
    /// partition itself.
    #[inline]
    pub fn almost_eq(&self, other: &PolarPoint, epsilon: f64) -> bool {
        math::almost_eq(self.angle, other.angle, epsilon)
            && math::almost_eq(self.length, other.length, epsilon)
    }
}
