//! Sample room catalog.
//!
//! A closed set of named layouts used by the demo binary, tests and
//! benches. Each variant is a pure producer of a [`WallSet`]; the only
//! randomized variant carries its own seed, so building any room is
//! deterministic.

use super::{box_outline, regular_polygon, star, Maze, WallSet};
use crate::core::types::{Point, Segment};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Outer dimensions shared by all rooms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomLayout {
    pub width: f64,
    pub height: f64,
    pub margin_x: f64,
    pub margin_y: f64,
}

impl Default for RoomLayout {
    fn default() -> Self {
        Self {
            width: 660.0,
            height: 660.0,
            margin_x: 10.0,
            margin_y: 10.0,
        }
    }
}

impl RoomLayout {
    /// The rectangular outer boundary.
    pub fn boundary(&self) -> Vec<Segment> {
        box_outline(
            Point::new(self.margin_x, self.margin_y),
            Point::new(self.width - self.margin_x, self.height - self.margin_y),
        )
    }

    fn inner_width(&self) -> f64 {
        self.width - 2.0 * self.margin_x
    }

    fn inner_height(&self) -> f64 {
        self.height - 2.0 * self.margin_y
    }
}

/// The room catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Room {
    /// Randomized 20×20 maze, reproducible from its seed
    RandomMaze { seed: u64 },
    /// Hand-laid corridor maze
    Maze,
    /// Hand-laid maze with crossing diagonals
    Maze2,
    /// A few polygons and a star
    Shapes,
    /// 3×3 grid of polygons and stars
    Shapes2,
    /// 6×6 grid of polygons and stars
    Shapes3,
}

impl Room {
    /// Every room, with `maze_seed` applied to the randomized one.
    pub fn catalog(maze_seed: u64) -> Vec<Room> {
        vec![
            Room::RandomMaze { seed: maze_seed },
            Room::Maze,
            Room::Maze2,
            Room::Shapes,
            Room::Shapes2,
            Room::Shapes3,
        ]
    }

    /// Look a room up by its CLI name.
    pub fn from_name(name: &str, maze_seed: u64) -> Option<Room> {
        Some(match name {
            "random-maze" => Room::RandomMaze { seed: maze_seed },
            "maze" => Room::Maze,
            "maze-2" => Room::Maze2,
            "shapes" => Room::Shapes,
            "shapes-2" => Room::Shapes2,
            "shapes-3" => Room::Shapes3,
            _ => return None,
        })
    }

    /// Stable machine name.
    pub fn name(&self) -> &'static str {
        match self {
            Room::RandomMaze { .. } => "random-maze",
            Room::Maze => "maze",
            Room::Maze2 => "maze-2",
            Room::Shapes => "shapes",
            Room::Shapes2 => "shapes-2",
            Room::Shapes3 => "shapes-3",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Room::RandomMaze { .. } => "Random maze",
            Room::Maze => "Maze",
            Room::Maze2 => "Maze 2",
            Room::Shapes => "Polygons and Stars",
            Room::Shapes2 => "More Polygons and Stars",
            Room::Shapes3 => "Even More Polygons and Stars",
        }
    }

    /// Rooms with enough walls to be noticeably slow; tests that iterate
    /// the whole catalog usually skip these.
    pub fn is_slow(&self) -> bool {
        matches!(self, Room::Shapes3)
    }

    /// Build the room's walls.
    pub fn build(&self, layout: &RoomLayout) -> WallSet {
        let mut walls = WallSet::named(self.name());
        match *self {
            Room::RandomMaze { seed } => {
                let mut rng = SmallRng::seed_from_u64(seed);
                let maze = Maze::generate(20, 20, &mut rng);
                walls.add_many(maze.wall_segments(40.0, layout.margin_x * 2.0, layout.margin_y * 2.0));
            }
            Room::Maze => {
                walls
                    .add_many(layout.boundary())
                    .add_polyline(&[Point::new(100.0, 100.0), Point::new(100.0, 450.0)])
                    .add_polyline(&[
                        Point::new(450.0, 100.0),
                        Point::new(200.0, 100.0),
                        Point::new(200.0, 350.0),
                    ])
                    .add_polyline(&[Point::new(425.0, 125.0), Point::new(225.0, 325.0)])
                    .add_polyline(&[Point::new(350.0, 250.0), Point::new(350.0, 450.0)]);
            }
            Room::Maze2 => {
                walls
                    .add_many(layout.boundary())
                    .add_polyline(&[Point::new(200.0, 200.0), Point::new(200.0, 300.0)])
                    .add_polyline(&[Point::new(150.0, 150.0), Point::new(350.0, 150.0)])
                    .add_polyline(&[Point::new(450.0, 150.0), Point::new(150.0, 450.0)])
                    .add_polyline(&[Point::new(300.0, 350.0), Point::new(375.0, 425.0)])
                    .add_polyline(&[Point::new(375.0, 425.0), Point::new(450.0, 500.0)])
                    .add_polyline(&[Point::new(350.0, 300.0), Point::new(500.0, 450.0)])
                    .add_polyline(&[Point::new(375.0, 425.0), Point::new(275.0, 525.0)]);
            }
            Room::Shapes => {
                walls
                    .add_many(layout.boundary())
                    .add_regular_polygon(Point::new(400.0, 400.0), 50.0, 3)
                    .add_regular_polygon(Point::new(200.0, 300.0), 50.0, 6)
                    .add_regular_polygon(Point::new(400.0, 200.0), 50.0, 5)
                    .add_star(Point::new(200.0, 500.0), 35.0, 65.0, 7);
            }
            Room::Shapes2 => {
                walls.add_many(layout.boundary());
                walls.add_many(shape_grid(layout, 3));
            }
            Room::Shapes3 => {
                walls.add_many(layout.boundary());
                walls.add_many(shape_grid(layout, 6));
            }
        }
        walls
    }
}

/// A `cells × cells` grid of alternating stars and regular polygons.
fn shape_grid(layout: &RoomLayout, cells: usize) -> Vec<Segment> {
    let step_x = layout.inner_width() / cells as f64;
    let step_y = layout.inner_height() / cells as f64;
    let mut walls = Vec::new();
    for i in 0..cells {
        for j in 0..cells {
            let count = i * cells + j;
            let center = Point::new(
                layout.margin_x + step_x * (j as f64 + 0.5),
                layout.margin_y + step_y * (i as f64 + 0.5),
            );
            if count % 2 == 1 {
                walls.extend(regular_polygon(center, 25.0, count % 4 + 8));
            } else {
                walls.extend(star(center, 15.0, 25.0, count % 4 + 8));
            }
        }
    }
    walls
}
