use std::f64::consts::FRAC_PI_2;
use std::fmt;

use crate::backend::CoverDescriptor;
use crate::cfg::MAX_COVER_DEPTH;
use crate::geom::Rectangle;
use crate::{Error, Result};

/// Quad-tree cell of `[0, π/2]²` with side `π/2^denom`.
///
/// The centre is `(π/2 − rad·numer_x, rad·numer_y)` with `rad = (π/2)/2^denom`,
/// so numerators are odd and `0 < numer < 2^denom`. The x axis counts from the
/// right edge of the domain; that is what makes `subdivide` yield the
/// upper-left quarter first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CoverSquare {
    numer_x: i64,
    numer_y: i64,
    denom: u8,
}

impl CoverSquare {
    /// The whole domain.
    pub const fn initial() -> Self {
        Self {
            numer_x: 1,
            numer_y: 1,
            denom: 1,
        }
    }

    #[inline]
    pub fn numer_x(&self) -> i64 {
        self.numer_x
    }

    #[inline]
    pub fn numer_y(&self) -> i64 {
        self.numer_y
    }

    /// Power of two in the denominator; `initial()` has 1.
    #[inline]
    pub fn denom(&self) -> u8 {
        self.denom
    }

    /// Subdivisions below `initial()`.
    #[inline]
    pub fn depth(&self) -> u8 {
        self.denom - 1
    }

    /// Four quarters in order upper-left, upper-right, lower-left, lower-right.
    pub fn subdivide(&self) -> Result<[CoverSquare; 4]> {
        if self.denom >= MAX_COVER_DEPTH {
            return Err(Error::TooDeep(self.denom.saturating_add(1)));
        }
        let denom = self.denom + 1;
        let double = |n: i64| n.checked_mul(2).ok_or(Error::overflow("cover subdivide"));
        let (x2, y2) = (double(self.numer_x)?, double(self.numer_y)?);
        let child = |numer_x: i64, numer_y: i64| CoverSquare {
            numer_x,
            numer_y,
            denom,
        };
        Ok([
            child(x2 + 1, y2 + 1),
            child(x2 - 1, y2 + 1),
            child(x2 + 1, y2 - 1),
            child(x2 - 1, y2 - 1),
        ])
    }

    /// Half side length as a fraction of the domain side: `1/2^denom`.
    #[inline]
    pub fn radius(&self) -> f64 {
        0.5f64.powi(i32::from(self.denom))
    }

    /// Closed extent in radians.
    pub fn bounds(&self) -> Rectangle {
        let rad = FRAC_PI_2 * self.radius();
        let cx = FRAC_PI_2 - rad * self.numer_x as f64;
        let cy = rad * self.numer_y as f64;
        Rectangle::new(cx - rad, cx + rad, cy - rad, cy + rad)
    }

    /// Strict containment in `bounds()`.
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.bounds().contains(x, y)
    }

    /// Wire form for the backend's square checker.
    pub fn descriptor(&self) -> CoverDescriptor {
        CoverDescriptor {
            numer_x: self.numer_x,
            numer_y: self.numer_y,
            denom_value: 1i64 << self.denom,
        }
    }

    /// All squares exactly `depth` subdivisions below `self`, in prefix order.
    pub fn descendants(&self, depth: u8) -> Result<Vec<CoverSquare>> {
        let mut level = vec![*self];
        for _ in 0..depth {
            let mut next = Vec::with_capacity(level.len() * 4);
            for sq in &level {
                next.extend(sq.subdivide()?);
            }
            level = next;
        }
        Ok(level)
    }
}

impl Default for CoverSquare {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for CoverSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/2^{}, {}/2^{}",
            self.numer_x, self.denom, self.numer_y, self.denom
        )
    }
}
