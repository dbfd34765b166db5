//! Core data types.

mod point;
mod polar;
mod polar_segment;
mod segment;

pub use point::Point;
pub use polar::PolarPoint;
pub use polar_segment::{wall_tag, PolarSegment, SegmentId};
pub use segment::Segment;
