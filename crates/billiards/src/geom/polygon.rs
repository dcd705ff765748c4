//! Convex polygons given by their vertices in boundary order.

use std::cmp::Ordering;

use super::rect::Rectangle;
use super::segment::LineSegment;
use super::types::{cross, dot, Interval, Location, Point, Project};
use crate::cfg::CONVEXITY_EPS;
use crate::{Error, Result};

/// Convex polygon with at least three vertices.
///
/// Invariants:
/// - Vertices run along the boundary in one winding (either orientation).
/// - Every vertex lies on the same closed side of every edge line; collinear
///   vertices are allowed, zero-length edges are not.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexPolygon {
    vertices: Vec<Point>,
}

impl ConvexPolygon {
    pub fn new(vertices: Vec<Point>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(Error::TooFewVertices(vertices.len()));
        }
        let poly = Self { vertices };
        if !poly.is_convex() {
            return Err(Error::NotConvex);
        }
        Ok(poly)
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Closed edges `(v_i, v_{i+1})`, wrapping around.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Half-plane sign test against each edge. A zero sign on any edge is
    /// `Boundary`; a sign differing from the first edge's is `Outside`.
    ///
    /// Exact boundary hits are rare in floating point; treat `Boundary` as a hint.
    pub fn location(&self, x: f64, y: f64) -> Location {
        let p = Point::new(x, y);
        let mut reference = None;
        for (p0, p1) in self.edges() {
            let side = match cross(p1 - p0, p - p0).partial_cmp(&0.0) {
                Some(Ordering::Equal) => return Location::Boundary,
                Some(side) => side,
                // NaN coordinates are nowhere
                None => return Location::Outside,
            };
            match reference {
                None => reference = Some(side),
                Some(r) if r != side => return Location::Outside,
                Some(_) => {}
            }
        }
        Location::Inside
    }

    /// True iff an edge normal of `self` separates `figure` from `self`.
    pub fn separating_axis<F: Project + ?Sized>(&self, figure: &F) -> bool {
        self.edges().any(|(p0, p1)| {
            let edge = p1 - p0;
            let axis = Point::new(-edge.y, edge.x);
            !figure.project(axis).intersects(&self.project(axis))
        })
    }

    pub fn intersects_polygon(&self, other: &ConvexPolygon) -> bool {
        !(other.separating_axis(self) || self.separating_axis(other))
    }

    /// Axis-aligned pre-checks first; the rectangle's own axes are x and y.
    pub fn intersects_rect(&self, rect: &Rectangle) -> bool {
        if !rect.interval_x().intersects(&self.project_x()) {
            return false;
        }
        if !rect.interval_y().intersects(&self.project_y()) {
            return false;
        }
        !self.separating_axis(rect)
    }

    #[inline]
    pub fn intersects_segment(&self, segment: &LineSegment) -> bool {
        segment.intersects_polygon(self)
    }

    pub fn project_x(&self) -> Interval {
        self.span(|v| v.x)
    }

    pub fn project_y(&self) -> Interval {
        self.span(|v| v.y)
    }

    fn span(&self, f: impl Fn(&Point) -> f64) -> Interval {
        Interval::spanning(f(&self.vertices[0]), self.vertices[1..].iter().map(f))
    }

    fn is_convex(&self) -> bool {
        let (mut pos, mut neg) = (false, false);
        for (p0, p1) in self.edges() {
            let edge = p1 - p0;
            if edge.x == 0.0 && edge.y == 0.0 {
                return false;
            }
            let edge_len = edge.norm();
            for v in &self.vertices {
                let offset = *v - p0;
                let c = cross(edge, offset);
                if c.is_nan() {
                    return false;
                }
                // sine of the angle between edge and offset, so the test is scale-free
                let tol = CONVEXITY_EPS * edge_len * offset.norm();
                if c > tol {
                    pos = true;
                } else if c < -tol {
                    neg = true;
                }
            }
            if pos && neg {
                return false;
            }
        }
        // all vertices collinear
        pos || neg
    }
}

impl Project for ConvexPolygon {
    fn project(&self, axis: Point) -> Interval {
        self.span(|v| dot(*v, axis))
    }
}
