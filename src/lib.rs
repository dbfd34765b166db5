//! # Drishti
//!
//! 2D visibility (shadow-casting) library: given a set of opaque wall
//! segments and a viewpoint, compute the exact visible region as an
//! angularly ordered fan of polar segments.
//!
//! ## Overview
//!
//! The engine transforms every wall into polar coordinates around the
//! viewpoint, culls walls that cannot be the nearest anywhere, splits the
//! survivors at every endpoint angle so each angular cell has cleanly
//! comparable candidates, keeps the nearest candidate per cell, and joins
//! the surviving pieces back into continuous arcs. The result can be
//! consumed as raw polar segments, a triangle fan, or a closed polygon.
//!
//! Recomputation is cheap enough to run on every interaction for wall
//! counts in the hundreds; the expected usage is "recompute whenever the
//! viewpoint or the walls move".
//!
//! ## Quick start
//!
//! ```
//! use drishti::{Point, VisibilityEngine, WallSet};
//!
//! # fn main() -> drishti::Result<()> {
//! let mut walls = WallSet::named("square room");
//! walls.add_box(Point::new(10.0, 10.0), Point::new(650.0, 650.0));
//!
//! let engine = VisibilityEngine::default();
//! let visibility = engine.compute(Point::new(50.0, 50.0), walls.walls())?;
//!
//! assert_eq!(visibility.len(), 4);
//! for [viewpoint, start, end] in visibility.fan() {
//!     // hand the triangles to a renderer
//!     let _ = (viewpoint, start, end);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Layers
//!
//! - [`core`](self::core): geometry types and angle math (no internal
//!   dependencies)
//! - [`engine`]: the sweep pipeline and the [`Visibility`] result
//! - [`scene`]: wall-set builders, sample rooms, maze generation
//! - [`config`]/[`error`]: tuning knobs and the crate error type

// Layer 1: foundation
pub mod core;

// Layer 2: the visibility pipeline
pub mod engine;

// Layer 3: input producers
pub mod scene;

// Crate-wide support
pub mod config;
pub mod error;

pub use self::core::math;
pub use self::core::types::{Point, PolarPoint, PolarSegment, Segment, SegmentId};
pub use config::VisibilityConfig;
pub use engine::{Visibility, VisibilityEngine};
pub use error::{DrishtiError, Result};
pub use scene::{Maze, Room, RoomLayout, WallSet};
