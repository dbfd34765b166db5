//! Cartesian point type.

use serde::{Deserialize, Serialize};

/// A 2D point, also used as a vector from the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin.
    #[inline]
    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// `self + other * multiplier`.
    #[inline]
    pub fn add(&self, other: &Point, multiplier: f64) -> Point {
        Point::new(self.x + other.x * multiplier, self.y + other.y * multiplier)
    }

    /// `self - other * multiplier`.
    #[inline]
    pub fn sub(&self, other: &Point, multiplier: f64) -> Point {
        self.add(other, -multiplier)
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: &Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Projection coefficient of `self` onto `other`.
    ///
    /// Returns `t` such that `other * t` is the orthogonal projection of
    /// `self` onto the line through the origin and `other`. Zero for a
    /// zero `other`.
    #[inline]
    pub fn project_onto(&self, other: &Point) -> f64 {
        let denominator = other.dot(other);
        if denominator == 0.0 {
            return 0.0;
        }
        self.dot(other) / denominator
    }

    /// Euclidean norm.
    #[inline]
    pub fn length(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Direction from the origin, `atan2(y, x)`.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::origin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn test_add_with_multiplier() {
        let p = Point::new(1.0, 2.0).add(&Point::new(3.0, -1.0), 2.0);
        assert_eq!(p, Point::new(7.0, 0.0));
    }

    #[test]
    fn test_sub_is_inverse_of_add() {
        let a = Point::new(1.5, -2.5);
        let b = Point::new(0.25, 4.0);
        let back = a.add(&b, 3.0).sub(&b, 3.0);
        assert_relative_eq!(back.x, a.x);
        assert_relative_eq!(back.y, a.y);
    }

    #[test]
    fn test_length() {
        assert_relative_eq!(Point::new(3.0, 4.0).length(), 5.0);
        assert_eq!(Point::origin().length(), 0.0);
    }

    #[test]
    fn test_angle() {
        assert_relative_eq!(Point::new(1.0, 1.0).angle(), FRAC_PI_4, epsilon = 1e-12);
        assert_relative_eq!(Point::new(-1.0, 0.0).angle(), std::f64::consts::PI);
    }

    #[test]
    fn test_project_onto() {
        // Projecting (1, 1) onto the x axis lands at t = 0.5 of (2, 0).
        let t = Point::new(1.0, 1.0).project_onto(&Point::new(2.0, 0.0));
        assert_relative_eq!(t, 0.5);
    }

    #[test]
    fn test_project_onto_zero_vector() {
        assert_eq!(Point::new(1.0, 1.0).project_onto(&Point::origin()), 0.0);
    }
}
