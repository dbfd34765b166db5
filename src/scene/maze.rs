//! Random maze generation.
//!
//! Builds a spanning tree over a rectangular cell grid by randomized
//! flood, then exports the surviving walls as segments. All randomness
//! comes from the injected generator, so a seeded RNG reproduces the
//! exact same layout.

use super::polyline;
use crate::core::types::{Point, Segment};
use rand::Rng;

/// Which wall separates two neighbouring cells.
#[derive(Debug, Clone, Copy)]
enum WallRef {
    /// Between `(x, y)` and `(x + 1, y)`
    Vertical(usize, usize),
    /// Between `(x, y)` and `(x, y + 1)`
    Horizontal(usize, usize),
}

/// A generated maze over a `width × height` cell grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Maze {
    width: usize,
    height: usize,
    vertical_closed: Vec<bool>,
    horizontal_closed: Vec<bool>,
}

impl Maze {
    /// Generate a maze. Every cell ends up reachable from every other
    /// through exactly one path.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn generate(width: usize, height: usize, rng: &mut impl Rng) -> Self {
        assert!(width > 0 && height > 0, "maze needs at least one cell");
        let mut maze = Self {
            width,
            height,
            vertical_closed: vec![true; (width - 1) * height],
            horizontal_closed: vec![true; width * (height - 1)],
        };

        let mut claimed = vec![false; width * height];
        let start = (width / 2, height / 2);
        claimed[start.1 * width + start.0] = true;
        let mut frontier = vec![start];

        while !frontier.is_empty() {
            let cell = frontier.swap_remove(rng.gen_range(0..frontier.len()));
            let mut options = maze.unclaimed_neighbours(cell, &claimed);
            if options.is_empty() {
                continue;
            }
            let ((nx, ny), wall) = options.swap_remove(rng.gen_range(0..options.len()));
            claimed[ny * width + nx] = true;
            maze.open(wall);
            frontier.push((nx, ny));
            // The cell stays on the frontier while it has unclaimed
            // neighbours left.
            if !options.is_empty() {
                frontier.push(cell);
            }
        }

        maze
    }

    /// Grid width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the wall between `(x, y)` and `(x + 1, y)` is closed.
    pub fn vertical_wall_closed(&self, x: usize, y: usize) -> bool {
        self.vertical_closed[y * (self.width - 1) + x]
    }

    /// Whether the wall between `(x, y)` and `(x, y + 1)` is closed.
    pub fn horizontal_wall_closed(&self, x: usize, y: usize) -> bool {
        self.horizontal_closed[y * self.width + x]
    }

    fn open(&mut self, wall: WallRef) {
        match wall {
            WallRef::Vertical(x, y) => self.vertical_closed[y * (self.width - 1) + x] = false,
            WallRef::Horizontal(x, y) => self.horizontal_closed[y * self.width + x] = false,
        }
    }

    fn unclaimed_neighbours(
        &self,
        (x, y): (usize, usize),
        claimed: &[bool],
    ) -> Vec<((usize, usize), WallRef)> {
        let mut neighbours = Vec::with_capacity(4);
        if x > 0 {
            neighbours.push(((x - 1, y), WallRef::Vertical(x - 1, y)));
        }
        if x + 1 < self.width {
            neighbours.push(((x + 1, y), WallRef::Vertical(x, y)));
        }
        if y > 0 {
            neighbours.push(((x, y - 1), WallRef::Horizontal(x, y - 1)));
        }
        if y + 1 < self.height {
            neighbours.push(((x, y + 1), WallRef::Horizontal(x, y)));
        }
        neighbours.retain(|&((nx, ny), _)| !claimed[ny * self.width + nx]);
        neighbours
    }

    /// Export the maze as wall segments: the outer border as a closed
    /// polyline of unit steps plus one segment per closed inner wall,
    /// with grid coordinates scaled by `cell_size` and shifted by the
    /// offsets.
    pub fn wall_segments(&self, cell_size: f64, offset_x: f64, offset_y: f64) -> Vec<Segment> {
        let at = |x: usize, y: usize| {
            Point::new(
                offset_x + x as f64 * cell_size,
                offset_y + y as f64 * cell_size,
            )
        };
        let (w, h) = (self.width, self.height);

        let mut border = Vec::with_capacity(2 * (w + h) + 1);
        for x in 0..w {
            border.push(at(x, 0));
        }
        for y in 0..h {
            border.push(at(w, y));
        }
        for x in (1..=w).rev() {
            border.push(at(x, h));
        }
        for y in (1..=h).rev() {
            border.push(at(0, y));
        }
        border.push(at(0, 0));
        let mut walls = polyline(&border);

        for y in 0..h {
            for x in 0..w - 1 {
                if self.vertical_wall_closed(x, y) {
                    walls.push(Segment::new(at(x + 1, y), at(x + 1, y + 1)));
                }
            }
        }
        for y in 0..h - 1 {
            for x in 0..w {
                if self.horizontal_wall_closed(x, y) {
                    walls.push(Segment::new(at(x, y + 1), at(x + 1, y + 1)));
                }
            }
        }

        walls
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn closed_wall_count(maze: &Maze) -> usize {
        maze.vertical_closed.iter().filter(|&&c| c).count()
            + maze.horizontal_closed.iter().filter(|&&c| c).count()
    }

    #[test]
    fn test_generate_opens_a_spanning_tree() {
        let mut rng = SmallRng::seed_from_u64(42);
        let maze = Maze::generate(12, 9, &mut rng);
        let total_walls = (12 - 1) * 9 + 12 * (9 - 1);
        let open_walls = total_walls - closed_wall_count(&maze);
        // A spanning tree over w*h cells opens exactly w*h - 1 walls.
        assert_eq!(open_walls, 12 * 9 - 1);
    }

    #[test]
    fn test_generate_is_deterministic_per_seed() {
        let mut a = SmallRng::seed_from_u64(7);
        let mut b = SmallRng::seed_from_u64(7);
        let maze_a = Maze::generate(10, 10, &mut a);
        let maze_b = Maze::generate(10, 10, &mut b);
        assert_eq!(maze_a, maze_b);
        assert_eq!(
            maze_a.wall_segments(40.0, 20.0, 20.0),
            maze_b.wall_segments(40.0, 20.0, 20.0)
        );
    }

    #[test]
    fn test_different_seeds_differ() {
        let maze_a = Maze::generate(10, 10, &mut SmallRng::seed_from_u64(1));
        let maze_b = Maze::generate(10, 10, &mut SmallRng::seed_from_u64(2));
        assert_ne!(maze_a, maze_b);
    }

    #[test]
    fn test_wall_segments_include_the_border() {
        let maze = Maze::generate(5, 4, &mut SmallRng::seed_from_u64(3));
        let walls = maze.wall_segments(10.0, 0.0, 0.0);
        // Border contributes 2 * (w + h) unit segments.
        assert!(walls.len() >= 2 * (5 + 4));
        let open = 5 * 4 - 1;
        let closed = (5 - 1) * 4 + 5 * (4 - 1) - open;
        assert_eq!(walls.len(), 2 * (5 + 4) + closed);
    }

    #[test]
    fn test_single_cell_maze() {
        let maze = Maze::generate(1, 1, &mut SmallRng::seed_from_u64(0));
        let walls = maze.wall_segments(40.0, 0.0, 0.0);
        assert_eq!(walls.len(), 4);
    }
}
