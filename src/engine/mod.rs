//! Visibility engine: orchestrates the polar sweep pipeline.
//!
//! The pipeline is stateless per call: it takes a snapshot of the
//! viewpoint and walls and returns a fresh [`Visibility`]. There are no
//! partial results; a recomputation either completes or fails, and a
//! caller that fails should keep showing its previous result.

pub mod occlusion;
pub mod sweep;

use crate::config::VisibilityConfig;
use crate::core::types::{Point, PolarSegment, Segment};
use crate::error::Result;
use serde::Serialize;

/// The visible region around a viewpoint.
///
/// Segments are ordered counter-clockwise and angularly contiguous; for a
/// closed room they cover `(-π, π]` exactly once. Each segment carries the
/// source id and colour tag of the wall it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Visibility {
    /// The viewpoint the region was computed from
    pub viewpoint: Point,
    /// Visible arcs in sweep order
    pub segments: Vec<PolarSegment>,
}

impl Visibility {
    /// Number of visible arcs.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether nothing is visible (no walls in range).
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Triangle fan in world coordinates: one
    /// `[viewpoint, start, end]` triple per visible arc.
    pub fn fan(&self) -> impl Iterator<Item = [Point; 3]> + '_ {
        self.segments.iter().map(move |segment| {
            [
                self.viewpoint,
                segment.start.to_cartesian().add(&self.viewpoint, 1.0),
                segment.end.to_cartesian().add(&self.viewpoint, 1.0),
            ]
        })
    }

    /// The visible region as a closed polygon in world coordinates.
    ///
    /// Consecutive arcs sharing an endpoint contribute a single vertex;
    /// where the region is open (no wall in some direction) the polygon
    /// returns to the viewpoint before continuing.
    pub fn polygon(&self) -> Vec<Point> {
        let vertices: Vec<(f64, Point, bool)> = self
            .segments
            .iter()
            .flat_map(|segment| {
                [
                    (
                        segment.start.angle,
                        segment.start.to_cartesian().add(&self.viewpoint, 1.0),
                        true,
                    ),
                    (
                        segment.end.angle,
                        segment.end.to_cartesian().add(&self.viewpoint, 1.0),
                        false,
                    ),
                ]
            })
            .collect();

        let Some(&(mut previous_angle, mut previous_point, _)) = vertices.last() else {
            return Vec::new();
        };

        let mut polygon = Vec::with_capacity(vertices.len() + 4);
        polygon.push(previous_point);
        for (angle, point, is_start) in vertices {
            if is_start && angle != previous_angle {
                polygon.push(self.viewpoint);
            }
            if point != previous_point {
                polygon.push(point);
            }
            previous_angle = angle;
            previous_point = point;
        }
        polygon
    }
}

/// Visibility computation with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct VisibilityEngine {
    config: VisibilityConfig,
}

impl VisibilityEngine {
    /// Create an engine with the given configuration.
    pub fn new(config: VisibilityConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &VisibilityConfig {
        &self.config
    }

    /// Compute the visible region around `viewpoint`.
    ///
    /// Pure with respect to its inputs; concurrent calls for different
    /// viewpoints need no coordination.
    pub fn compute(&self, viewpoint: Point, walls: &[Segment]) -> Result<Visibility> {
        let polar = sweep::to_polar(&viewpoint, walls);
        let reachable = if self.config.coarse_cull {
            sweep::coarse_cull(&polar)
        } else {
            polar
        };
        let angles = sweep::collect_angles(&reachable);
        let pieces = sweep::split_all(&reachable, &angles)?;
        let visible = occlusion::resolve_occlusion(pieces);
        let segments = occlusion::join_arcs(
            visible,
            self.config.epsilon,
            self.config.orientation_epsilon,
        );
        Ok(Visibility {
            viewpoint,
            segments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square_walls() -> Vec<Segment> {
        let corners = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        (0..4)
            .map(|i| Segment::new(corners[i], corners[(i + 1) % 4]))
            .collect()
    }

    #[test]
    fn test_compute_square_from_center_sees_all_walls() {
        let engine = VisibilityEngine::default();
        let visibility = engine
            .compute(Point::new(5.0, 5.0), &square_walls())
            .unwrap();
        assert_eq!(visibility.len(), 4);
        let total: f64 = visibility.segments.iter().map(PolarSegment::delta_angle).sum();
        assert_relative_eq!(total, std::f64::consts::TAU, epsilon = 1e-9);
    }

    #[test]
    fn test_compute_empty_walls() {
        let engine = VisibilityEngine::default();
        let visibility = engine.compute(Point::origin(), &[]).unwrap();
        assert!(visibility.is_empty());
        assert!(visibility.polygon().is_empty());
    }

    #[test]
    fn test_fan_is_anchored_at_the_viewpoint() {
        let engine = VisibilityEngine::default();
        let viewpoint = Point::new(5.0, 5.0);
        let visibility = engine.compute(viewpoint, &square_walls()).unwrap();
        for [anchor, start, end] in visibility.fan() {
            assert_eq!(anchor, viewpoint);
            assert!(start != end);
        }
    }

    #[test]
    fn test_polygon_of_closed_room_never_visits_the_viewpoint() {
        let engine = VisibilityEngine::default();
        let viewpoint = Point::new(5.0, 5.0);
        let visibility = engine.compute(viewpoint, &square_walls()).unwrap();
        let polygon = visibility.polygon();
        assert!(polygon.len() >= 4);
        assert!(polygon.iter().all(|&p| p != viewpoint));
    }

    #[test]
    fn test_polygon_of_single_wall_returns_to_the_viewpoint() {
        let engine = VisibilityEngine::default();
        let viewpoint = Point::origin();
        let walls = [Segment::new(Point::new(-1.0, 2.0), Point::new(1.0, 2.0))];
        let visibility = engine.compute(viewpoint, &walls).unwrap();
        assert_eq!(visibility.len(), 1);
        let polygon = visibility.polygon();
        assert!(polygon.contains(&viewpoint));
    }
}
