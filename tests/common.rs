//! Shared fixtures for integration tests.

#![allow(dead_code)]

use drishti::{Point, PolarSegment, Room, RoomLayout, Segment, Visibility, WallSet};

/// Viewpoints on a 4×4 grid spanning the rooms and their outside.
pub fn viewpoint_grid() -> Vec<Point> {
    let steps = [-50.0, 150.0, 350.0, 550.0];
    let mut viewpoints = Vec::with_capacity(16);
    for &x in &steps {
        for &y in &steps {
            viewpoints.push(Point::new(x, y));
        }
    }
    viewpoints
}

/// Walls of every non-slow catalog room.
pub fn catalog_rooms() -> Vec<WallSet> {
    let layout = RoomLayout::default();
    Room::catalog(5)
        .into_iter()
        .filter(|room| !room.is_slow())
        .map(|room| room.build(&layout))
        .collect()
}

/// A wall running through another wall's endpoint: at the touch point the
/// interpolated distance on the long wall and the endpoint distance on
/// the short wall differ by rounding only.
pub fn touching_walls() -> WallSet {
    let mut walls = WallSet::named("touching");
    walls
        .add_polyline(&[Point::new(300.0, 350.0), Point::new(450.0, 500.0)])
        .add_polyline(&[Point::new(375.0, 425.0), Point::new(275.0, 525.0)]);
    walls
}

/// The same scene with the long wall broken at the touch point.
pub fn touching_walls_pre_split() -> WallSet {
    let mut walls = WallSet::named("touching-pre-split");
    walls
        .add_polyline(&[Point::new(300.0, 350.0), Point::new(375.0, 425.0)])
        .add_polyline(&[Point::new(375.0, 425.0), Point::new(450.0, 500.0)])
        .add_polyline(&[Point::new(375.0, 425.0), Point::new(275.0, 525.0)]);
    walls
}

/// Every (viewpoint, walls) pair the pipeline properties are checked
/// against: the viewpoint grid over all rooms, plus the endpoint-touching
/// scenes from the viewpoint that exposes their rounding behavior.
pub fn test_cases() -> Vec<(Point, WallSet)> {
    let mut cases = Vec::new();
    for walls in catalog_rooms() {
        for viewpoint in viewpoint_grid() {
            cases.push((viewpoint, walls.clone()));
        }
    }
    cases.push((Point::new(441.0, 316.0), touching_walls()));
    cases.push((Point::new(441.0, 316.0), touching_walls_pre_split()));
    cases
}

/// Assert two results describe the same arcs within tolerance.
pub fn assert_same_arcs(lhs: &Visibility, rhs: &Visibility, context: &str) {
    assert_eq!(
        lhs.segments.len(),
        rhs.segments.len(),
        "arc count differs for {}",
        context
    );
    let mut lhs_arcs = lhs.segments.clone();
    let mut rhs_arcs = rhs.segments.clone();
    lhs_arcs.sort_by(PolarSegment::sort_cmp);
    rhs_arcs.sort_by(PolarSegment::sort_cmp);
    for (a, b) in lhs_arcs.iter().zip(&rhs_arcs) {
        assert!(
            a.start.almost_eq(&b.start, 1e-6) && a.end.almost_eq(&b.end, 1e-6),
            "arcs differ for {}: {:?} vs {:?}",
            context,
            a,
            b
        );
    }
}

/// An axis-aligned box as four wall segments.
pub fn box_walls(x1: f64, y1: f64, x2: f64, y2: f64) -> Vec<Segment> {
    drishti::scene::box_outline(Point::new(x1, y1), Point::new(x2, y2))
}
