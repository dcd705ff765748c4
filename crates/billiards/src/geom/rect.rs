//! Axis-aligned rectangles (cover cells in radians).

use super::types::{dot, Interval, Point, Project};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    x: Interval,
    y: Interval,
}

impl Rectangle {
    /// Bounds in any order; `x0 <= x1` and `y0 <= y1` are not required.
    #[inline]
    pub fn new(x0: f64, x1: f64, y0: f64, y1: f64) -> Self {
        Self {
            x: Interval::new(x0, x1),
            y: Interval::new(y0, y1),
        }
    }

    #[inline]
    pub fn interval_x(&self) -> Interval {
        self.x
    }

    #[inline]
    pub fn interval_y(&self) -> Interval {
        self.y
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x.center(), self.y.center())
    }

    /// Strict (open) containment.
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.x.contains(x) && self.y.contains(y)
    }

    /// Closed overlap test between rectangles; shared edges count.
    pub fn intersects_rect(&self, other: &Rectangle) -> bool {
        self.x.min() <= other.x.max()
            && self.x.max() >= other.x.min()
            && self.y.min() <= other.y.max()
            && self.y.max() >= other.y.min()
    }

    /// Quarters in the order upper-left, upper-right, lower-left, lower-right.
    pub fn subdivide(&self) -> [Rectangle; 4] {
        let c = self.center();
        let (x0, x1) = (self.x.min(), self.x.max());
        let (y0, y1) = (self.y.min(), self.y.max());
        [
            Rectangle::new(x0, c.x, c.y, y1),
            Rectangle::new(c.x, x1, c.y, y1),
            Rectangle::new(x0, c.x, y0, c.y),
            Rectangle::new(c.x, x1, y0, c.y),
        ]
    }

    /// Corners counter-clockwise from the lower-left.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x.min(), self.y.min()),
            Point::new(self.x.max(), self.y.min()),
            Point::new(self.x.max(), self.y.max()),
            Point::new(self.x.min(), self.y.max()),
        ]
    }
}

impl Project for Rectangle {
    fn project(&self, axis: Point) -> Interval {
        let [a, b, c, d] = self.corners();
        Interval::spanning(dot(a, axis), [b, c, d].map(|p| dot(p, axis)))
    }
}
