//! Polar wall segment: a wall re-expressed around the viewpoint.
//!
//! This is the working currency of the sweep. A `PolarSegment` knows its
//! angular span (including whether it crosses the ±π seam), its distance
//! bounds from the viewpoint, and how to interpolate its distance at any
//! angle inside the span, which is what splitting and occlusion are built
//! from.

use super::point::Point;
use super::polar::PolarPoint;
use super::segment::Segment;
use crate::core::math;
use crate::error::{DrishtiError, Result};
use serde::Serialize;
use std::cmp::Ordering;
use std::f64::consts::{PI, TAU};

/// Identifier of a wall within one visibility computation.
///
/// Ids are allocated from a per-call counter during the polar transform;
/// they are only meaningful within one result.
pub type SegmentId = u32;

/// Opaque per-wall label: a 24-bit hash of the wall's coordinates, stable
/// across recomputations. Renderers commonly use it as an RGB colour.
pub fn wall_tag(wall: &Segment) -> u32 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for value in [wall.start.x, wall.start.y, wall.end.x, wall.end.y] {
        hash ^= value.to_bits();
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    (hash & 0xFF_FFFF) as u32
}

/// Coefficients of the polar line equation `1/r = a·cos θ + b·sin θ`, the
/// general straight line not through the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
struct LineCoeffs {
    co_cos: f64,
    co_sin: f64,
}

/// Solve the two endpoint constraints for the line coefficients via
/// Cramer's rule. `None` when the segment has no angular span (the 2×2
/// system is singular).
fn solve_line_coeffs(start: &PolarPoint, end: &PolarPoint) -> Option<LineCoeffs> {
    if start.angle == end.angle {
        return None;
    }
    let (sin1, cos1) = start.angle.sin_cos();
    let (sin2, cos2) = end.angle.sin_cos();
    let d = cos1 * sin2 - sin1 * cos2;
    let dx = sin2 / start.length - sin1 / end.length;
    let dy = cos1 / end.length - cos2 / start.length;
    Some(LineCoeffs {
        co_cos: dx / d,
        co_sin: dy / d,
    })
}

/// Order two polar endpoints so that sweeping counter-clockwise from start
/// to end never travels more than π, flagging the pair when that sweep
/// crosses the ±π seam (in which case the stored angles are descending).
fn order_endpoints(p1: PolarPoint, p2: PolarPoint) -> (PolarPoint, PolarPoint, bool) {
    let naive_span = (p1.angle - p2.angle).abs();
    if naive_span <= PI {
        if p1.angle <= p2.angle {
            (p1, p2, false)
        } else {
            (p2, p1, false)
        }
    } else if p1.angle <= p2.angle {
        (p2, p1, true)
    } else {
        (p1, p2, true)
    }
}

/// A wall segment in polar coordinates around the viewpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolarSegment {
    /// Sweep start (counter-clockwise)
    pub start: PolarPoint,
    /// Sweep end
    pub end: PolarPoint,
    /// The sweep from start to end crosses the ±π seam
    pub goes_over_pi: bool,
    /// Identity of the pre-split wall this segment belongs to
    pub source: SegmentId,
    /// Per-wall colour label, carried through splits and joins
    pub tag: Option<u32>,
    /// Closest point of the original unsplit wall, viewpoint-relative
    pub closest_point: Point,
    /// Distance to the nearest point of the original unsplit wall
    pub min_distance: f64,
    /// Distance to the farthest endpoint of the original unsplit wall
    pub max_distance: f64,
    #[serde(skip)]
    coeffs: Option<LineCoeffs>,
}

impl PolarSegment {
    /// Build a segment from two polar endpoints.
    ///
    /// Distance bounds are derived from the endpoints themselves; segments
    /// that originate from a Cartesian wall should use
    /// [`PolarSegment::from_wall`] so the bounds describe the whole wall.
    pub fn new(p1: PolarPoint, p2: PolarPoint, source: SegmentId) -> Self {
        let (start, end, goes_over_pi) = order_endpoints(p1, p2);
        let cartesian = Segment::new(start.to_cartesian(), end.to_cartesian());
        let closest_point = cartesian.closest_point(&Point::origin());
        PolarSegment {
            start,
            end,
            goes_over_pi,
            source,
            tag: None,
            closest_point,
            min_distance: closest_point.length(),
            max_distance: start.length.max(end.length),
            coeffs: solve_line_coeffs(&start, &end),
        }
    }

    /// Transform a wall into the polar frame of `viewpoint`.
    ///
    /// Returns `None` when an endpoint coincides with the viewpoint: such
    /// a wall has no well-defined angle and is silently dropped.
    pub fn from_wall(viewpoint: &Point, wall: &Segment, source: SegmentId) -> Option<Self> {
        let p1 = PolarPoint::from_cartesian(&wall.start.sub(viewpoint, 1.0));
        let p2 = PolarPoint::from_cartesian(&wall.end.sub(viewpoint, 1.0));
        if p1.length == 0.0 || p2.length == 0.0 {
            return None;
        }
        let (start, end, goes_over_pi) = order_endpoints(p1, p2);
        let closest_point = wall.closest_point(viewpoint);
        Some(PolarSegment {
            start,
            end,
            goes_over_pi,
            source,
            tag: Some(wall_tag(wall)),
            closest_point,
            min_distance: closest_point.length(),
            max_distance: wall.max_distance(viewpoint),
            coeffs: solve_line_coeffs(&start, &end),
        })
    }

    /// Same wall, new endpoints: used for split pieces and joined arcs.
    /// Source, tag and the whole-wall distance bounds are inherited, as is
    /// the line equation (the endpoints lie on the same line).
    pub(crate) fn with_endpoints(&self, p1: PolarPoint, p2: PolarPoint) -> PolarSegment {
        let (start, end, goes_over_pi) = order_endpoints(p1, p2);
        PolarSegment {
            start,
            end,
            goes_over_pi,
            source: self.source,
            tag: self.tag,
            closest_point: self.closest_point,
            min_distance: self.min_distance,
            max_distance: self.max_distance,
            coeffs: self.coeffs,
        }
    }

    /// Whether `angle` lies within the closed angular span.
    pub fn contains_angle(&self, angle: f64) -> bool {
        let a = math::normalize_angle(angle);
        if self.goes_over_pi {
            // The stored pair is descending; the span is the complement of
            // the naive interval test.
            (self.start.angle <= a) != (a <= self.end.angle)
        } else {
            self.start.angle <= a && a <= self.end.angle
        }
    }

    /// Whether `angle` lies strictly inside the angular span.
    pub fn strictly_contains_angle(&self, angle: f64) -> bool {
        let a = math::normalize_angle(angle);
        if self.goes_over_pi {
            (self.start.angle < a) != (a < self.end.angle)
        } else {
            self.start.angle < a && a < self.end.angle
        }
    }

    /// Distance of the segment at `angle`.
    ///
    /// Endpoint angles return the stored endpoint lengths exactly;
    /// interior angles evaluate the polar line equation. Asking outside
    /// the span, or on a zero-span segment, is a construction bug upstream
    /// and fails fatally.
    pub fn length_at_angle(&self, angle: f64) -> Result<f64> {
        let a = math::normalize_angle(angle);
        let coeffs = self.coeffs.ok_or(DrishtiError::NoAngularRange)?;
        if a == self.start.angle {
            return Ok(self.start.length);
        }
        if a == self.end.angle {
            return Ok(self.end.length);
        }
        if !self.strictly_contains_angle(a) {
            return Err(DrishtiError::AngleOutOfRange {
                angle: a,
                start: self.start.angle,
                end: self.end.angle,
            });
        }
        Ok(1.0 / (coeffs.co_cos * a.cos() + coeffs.co_sin * a.sin()))
    }

    /// Sub-segment between two angles of this segment's span: the
    /// splitting primitive. The piece keeps the parent's source identity.
    pub fn slice(&self, start_angle: f64, end_angle: f64) -> Result<PolarSegment> {
        let start = PolarPoint::new(start_angle, self.length_at_angle(start_angle)?);
        let end = PolarPoint::new(end_angle, self.length_at_angle(end_angle)?);
        Ok(self.with_endpoints(start, end))
    }

    /// Whether two segments lie on the same wall line: same source, or
    /// matching undirected slopes within `epsilon`.
    pub fn is_colinear(&self, other: &PolarSegment, epsilon: f64) -> bool {
        if self.source == other.source {
            return true;
        }
        math::orientation_almost_eq(self.orientation(), other.orientation(), epsilon)
    }

    /// Undirected slope of the segment in Cartesian space, in `[0, π)`.
    fn orientation(&self) -> f64 {
        Segment::new(self.start.to_cartesian(), self.end.to_cartesian()).orientation()
    }

    /// Total angular span, always non-negative.
    pub fn delta_angle(&self) -> f64 {
        self.denormalized_end_angle() - self.start.angle
    }

    /// End angle lifted past π for seam-crossing segments, so that it is
    /// never below the start angle.
    fn denormalized_end_angle(&self) -> f64 {
        if self.goes_over_pi {
            self.end.angle + TAU
        } else {
            self.end.angle
        }
    }

    /// Ordering by `(start.angle, end.angle, start.length, end.length)`.
    pub fn sort_cmp(&self, other: &PolarSegment) -> Ordering {
        self.start
            .angle
            .total_cmp(&other.start.angle)
            .then_with(|| self.end.angle.total_cmp(&other.end.angle))
            .then_with(|| self.start.length.total_cmp(&other.start.length))
            .then_with(|| self.end.length.total_cmp(&other.end.length))
    }
}
