//! Wall-set input layer.
//!
//! Producers of wall geometry for the engine: a named collection type
//! with shape builders, a catalog of sample rooms, and a random maze
//! generator. The engine itself never depends on this module; it only
//! consumes `&[Segment]`.

mod maze;
mod rooms;

pub use maze::Maze;
pub use rooms::{Room, RoomLayout};

use crate::core::types::{Point, Segment};
use serde::Serialize;
use std::f64::consts::TAU;

/// A named, ordered collection of wall segments.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WallSet {
    /// Layout name, if any
    pub name: Option<String>,
    walls: Vec<Segment>,
}

impl WallSet {
    /// Create an empty, unnamed wall set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty wall set with a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            walls: Vec::new(),
        }
    }

    /// The walls, in insertion order.
    pub fn walls(&self) -> &[Segment] {
        &self.walls
    }

    /// Number of walls.
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    /// Whether the set has no walls.
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// Add a single wall.
    pub fn add(&mut self, wall: Segment) -> &mut Self {
        self.walls.push(wall);
        self
    }

    /// Add walls from an iterator.
    pub fn add_many(&mut self, walls: impl IntoIterator<Item = Segment>) -> &mut Self {
        self.walls.extend(walls);
        self
    }

    /// Add the four sides of an axis-aligned box given two opposite
    /// corners.
    pub fn add_box(&mut self, first: Point, third: Point) -> &mut Self {
        self.add_many(box_outline(first, third))
    }

    /// Add an open polyline through the given points.
    pub fn add_polyline(&mut self, points: &[Point]) -> &mut Self {
        self.add_many(polyline(points))
    }

    /// Add a closed regular polygon.
    pub fn add_regular_polygon(&mut self, center: Point, radius: f64, sides: usize) -> &mut Self {
        self.add_many(regular_polygon(center, radius, sides))
    }

    /// Add a closed star.
    pub fn add_star(
        &mut self,
        center: Point,
        inner_radius: f64,
        outer_radius: f64,
        points: usize,
    ) -> &mut Self {
        self.add_many(star(center, inner_radius, outer_radius, points))
    }
}

/// The four sides of an axis-aligned box, counter-clockwise from `first`.
pub fn box_outline(first: Point, third: Point) -> Vec<Segment> {
    let second = Point::new(third.x, first.y);
    let fourth = Point::new(first.x, third.y);
    vec![
        Segment::new(first, second),
        Segment::new(second, third),
        Segment::new(third, fourth),
        Segment::new(fourth, first),
    ]
}

/// Consecutive segments through the given points.
pub fn polyline(points: &[Point]) -> Vec<Segment> {
    points
        .windows(2)
        .map(|pair| Segment::new(pair[0], pair[1]))
        .collect()
}

/// A closed regular polygon around `center`.
pub fn regular_polygon(center: Point, radius: f64, sides: usize) -> Vec<Segment> {
    if sides == 0 {
        return Vec::new();
    }
    let mut points: Vec<Point> = (0..=sides)
        .map(|i| {
            let angle = i as f64 * TAU / sides as f64;
            Point::new(
                angle.cos() * radius + center.x,
                angle.sin() * radius + center.y,
            )
        })
        .collect();
    // Close the loop on exactly the first point.
    let first = points[0];
    *points.last_mut().unwrap() = first;
    polyline(&points)
}

/// A closed star around `center`, alternating outer and inner radius.
pub fn star(center: Point, inner_radius: f64, outer_radius: f64, points: usize) -> Vec<Segment> {
    if points == 0 {
        return Vec::new();
    }
    let count = points * 2;
    let mut outline: Vec<Point> = (0..=count)
        .map(|i| {
            let angle = i as f64 * TAU / count as f64;
            let radius = if i % 2 == 0 {
                outer_radius
            } else {
                inner_radius
            };
            Point::new(
                angle.cos() * radius + center.x,
                angle.sin() * radius + center.y,
            )
        })
        .collect();
    let first = outline[0];
    *outline.last_mut().unwrap() = first;
    polyline(&outline)
}
