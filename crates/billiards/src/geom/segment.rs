//! Directed line segments, the witnesses of unstable code pairs.

use std::fmt;

use super::polygon::ConvexPolygon;
use super::rect::Rectangle;
use super::types::{dot, Interval, Point, Project};
use crate::{Error, Result};

/// Segment `start → end`. The separating axis theorem applies with its single
/// normal as the only candidate axis of its own.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
}

impl LineSegment {
    #[inline]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// From backend output, which must contain exactly two points.
    pub fn from_points(points: &[Point]) -> Result<Self> {
        match points {
            [start, end] => Ok(Self::new(*start, *end)),
            _ => Err(Error::SegmentPointCount(points.len())),
        }
    }

    /// True iff the segment's normal separates `figure` from it.
    pub fn separating_axis<F: Project + ?Sized>(&self, figure: &F) -> bool {
        let d = self.end - self.start;
        let axis = Point::new(-d.y, d.x);
        !figure.project(axis).intersects(&self.project(axis))
    }

    pub fn intersects_polygon(&self, poly: &ConvexPolygon) -> bool {
        !(poly.separating_axis(self) || self.separating_axis(poly))
    }

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
    pub fn project_x(&self) -> Interval {
        Interval::new(self.start.x, self.end.x)
    }

    #[inline]
    pub fn project_y(&self) -> Interval {
        Interval::new(self.start.y, self.end.y)
    }
}

impl Project for LineSegment {
    fn project(&self, axis: Point) -> Interval {
        Interval::new(dot(self.start, axis), dot(self.end, axis))
    }
}

impl fmt::Display for LineSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) -> ({}, {})",
            self.start.x, self.start.y, self.end.x, self.end.y
        )
    }
}
