//! 2D geometry kernel on open sets.
//!
//! Purpose
//! - Intersection and location tests between backend polygons, unstable
//!   segments, and cover rectangles in the angle domain `[0, π/2]²`.
//!
//! Conventions
//! - Regions are treated as open: `Interval::intersects` is strict, so shapes
//!   that only touch along a boundary do not intersect.
//! - Intersections use the separating axis theorem: two convex shapes are
//!   disjoint iff the edge normals of one of them give a projection gap.
//! - Points are `nalgebra::Vector2<f64>`.

mod polygon;
mod rect;
mod segment;
mod types;

pub use polygon::ConvexPolygon;
pub use rect::Rectangle;
pub use segment::LineSegment;
pub use types::{cross, dot, Interval, Location, Point, Project};
