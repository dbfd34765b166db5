//! Cartesian wall segment type.

use super::point::Point;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A wall segment between two Cartesian points.
///
/// The endpoint order carries no meaning for visibility; walls occlude
/// from both sides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// First endpoint
    pub start: Point,
    /// Second endpoint
    pub end: Point,
}

impl Segment {
    /// Create a new segment.
    #[inline]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Segment vector `end - start`.
    #[inline]
    pub fn delta(&self) -> Point {
        self.end.sub(&self.start, 1.0)
    }

    /// Direction of the segment vector, in `(-π, π]`.
    #[inline]
    pub fn direction_angle(&self) -> f64 {
        self.delta().angle()
    }

    /// Undirected slope, folded into `[0, π)` (π itself may appear for an
    /// exactly-backward direction; comparisons fold it away).
    #[inline]
    pub fn orientation(&self) -> f64 {
        let angle = self.direction_angle();
        if angle >= 0.0 {
            angle
        } else {
            angle + PI
        }
    }

    /// Both endpoints shifted by `offset * multiplier`.
    pub fn translated(&self, offset: &Point, multiplier: f64) -> Segment {
        Segment::new(
            self.start.add(offset, multiplier),
            self.end.add(offset, multiplier),
        )
    }

    /// Closest point of the segment to `reference`, expressed in a frame
    /// centered on `reference`.
    ///
    /// The projection parameter of the reference onto the segment is
    /// clamped to `[0, 1]`, so the result is always on the segment. A
    /// zero-length segment yields its (translated) start.
    pub fn closest_point(&self, reference: &Point) -> Point {
        let start = self.start.sub(reference, 1.0);
        let end = self.end.sub(reference, 1.0);
        let segment = end.sub(&start, 1.0);
        if segment.length() == 0.0 {
            return start;
        }

        let t = -start.project_onto(&segment);
        if t <= 0.0 {
            start
        } else if t >= 1.0 {
            end
        } else {
            start.add(&segment, t)
        }
    }

    /// Distance from `reference` to the nearest point of the segment.
    #[inline]
    pub fn min_distance(&self, reference: &Point) -> f64 {
        self.closest_point(reference).length()
    }

    /// Distance from `reference` to the farthest endpoint.
    #[inline]
    pub fn max_distance(&self, reference: &Point) -> f64 {
        self.start
            .sub(reference, 1.0)
            .length()
            .max(self.end.sub(reference, 1.0).length())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_closest_point_interior() {
        let segment = Segment::new(Point::new(-1.0, 1.0), Point::new(1.0, 1.0));
        let closest = segment.closest_point(&Point::origin());
        assert_relative_eq!(closest.x, 0.0);
        assert_relative_eq!(closest.y, 1.0);
    }

    #[test]
    fn test_closest_point_clamps_to_start() {
        let segment = Segment::new(Point::new(2.0, 1.0), Point::new(5.0, 1.0));
        let closest = segment.closest_point(&Point::origin());
        assert_relative_eq!(closest.x, 2.0);
        assert_relative_eq!(closest.y, 1.0);
    }

    #[test]
    fn test_closest_point_clamps_to_end() {
        let segment = Segment::new(Point::new(-5.0, 1.0), Point::new(-2.0, 1.0));
        let closest = segment.closest_point(&Point::origin());
        assert_relative_eq!(closest.x, -2.0);
        assert_relative_eq!(closest.y, 1.0);
    }

    #[test]
    fn test_closest_point_degenerate_segment() {
        let segment = Segment::new(Point::new(3.0, 4.0), Point::new(3.0, 4.0));
        let closest = segment.closest_point(&Point::new(1.0, 1.0));
        assert_eq!(closest, Point::new(2.0, 3.0));
    }

    #[test]
    fn test_closest_point_is_relative_to_reference() {
        let segment = Segment::new(Point::new(0.0, 2.0), Point::new(4.0, 2.0));
        let closest = segment.closest_point(&Point::new(2.0, 0.0));
        assert_relative_eq!(closest.x, 0.0);
        assert_relative_eq!(closest.y, 2.0);
    }

    #[test]
    fn test_min_max_distance() {
        let segment = Segment::new(Point::new(-3.0, 4.0), Point::new(3.0, 4.0));
        assert_relative_eq!(segment.min_distance(&Point::origin()), 4.0);
        assert_relative_eq!(segment.max_distance(&Point::origin()), 5.0);
    }

    #[test]
    fn test_orientation_folds_direction() {
        let up = Segment::new(Point::origin(), Point::new(0.0, 1.0));
        let down = Segment::new(Point::origin(), Point::new(0.0, -1.0));
        assert_relative_eq!(up.orientation(), FRAC_PI_2);
        assert_relative_eq!(down.orientation(), FRAC_PI_2);
    }

    #[test]
    fn test_translated() {
        let segment = Segment::new(Point::new(1.0, 1.0), Point::new(2.0, 2.0));
        let moved = segment.translated(&Point::new(1.0, 0.0), -1.0);
        assert_eq!(moved.start, Point::new(0.0, 1.0));
        assert_eq!(moved.end, Point::new(1.0, 2.0));
    }
}
