//! Basic 2D types: points, open intervals, and the projection seam.

use nalgebra::Vector2;

/// A point (or direction) in the plane.
pub type Point = Vector2<f64>;

#[inline]
pub fn dot(v: Point, w: Point) -> f64 {
    v.x * w.x + v.y * w.y
}

/// z-component of `v × w` with both zero-extended to 3D.
#[inline]
pub fn cross(v: Point, w: Point) -> f64 {
    v.x * w.y - v.y * w.x
}

/// Sorted interval `[min, max]`, read as an open set by `contains`/`intersects`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    min: f64,
    max: f64,
}

impl Interval {
    /// Endpoints in either order.
    #[inline]
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    #[inline]
    pub fn center(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    /// Strict containment.
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        self.min < x && x < self.max
    }

    /// Open-set overlap; touching endpoints do not count.
    #[inline]
    pub fn intersects(&self, other: &Interval) -> bool {
        self.min < other.max && other.min < self.max
    }

    /// Smallest interval covering `first` and every value in `rest`.
    pub(crate) fn spanning(first: f64, rest: impl IntoIterator<Item = f64>) -> Self {
        let (min, max) = rest
            .into_iter()
            .fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Self { min, max }
    }
}

/// Point location relative to a convex polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Location {
    Inside,
    Outside,
    Boundary,
}

/// A shape that can be projected onto a direction.
///
/// `axis` need not be unit length; both shapes in a test use the same axis,
/// so the scale cancels out.
pub trait Project {
    fn project(&self, axis: Point) -> Interval;
}
