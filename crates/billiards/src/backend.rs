//! Contract with the external backend that computes exact regions.
//!
//! Purpose
//! - For a `CodePair` the backend returns the vertices of the region where the
//!   trajectory exists (a polygon for stable codes, two endpoints for unstable
//!   ones) and the sin/cos equations bounding it. It can also certify that a
//!   cover square lies inside a region.
//! - This module owns the text format of those answers; transport and process
//!   management live with the caller's `Backend` implementation.
//!
//! Wire format
//! - Points: one per line, `"X Y"`, each coordinate an integer or `num/den`
//!   multiple of `π/2`.
//! - Equations: one per line, whitespace-separated integer triples `k a b`
//!   for the term `k·trig(a·x + b·y)`.

use std::f64::consts::FRAC_PI_2;
use std::path::Path;

use crate::codeseq::CodePair;
use crate::geom::Point;
use crate::math::{Equation, Trig};
use crate::{Error, Result};

/// Rational multiple of `π/2` (`"3"`, `"-1/4"`) to radians.
pub fn rational_to_radians(rat: &str) -> Result<f64> {
    let rat = rat.trim();
    let int = |s: &str| {
        s.trim()
            .parse::<i32>()
            .map_err(|_| Error::parse("rational angle", rat))
    };
    let value = match rat.split_once('/') {
        None => f64::from(int(rat)?),
        Some((numer, denom)) => f64::from(int(numer)?) / f64::from(int(denom)?),
    };
    Ok(value * FRAC_PI_2)
}

/// One backend answer for a code pair.
#[derive(Clone, Debug, PartialEq)]
pub struct CodeInfo {
    pub points: Vec<Point>,
    pub sin_equations: Vec<Equation>,
    pub cos_equations: Vec<Equation>,
}

impl CodeInfo {
    /// Parse the three text blocks; blank lines are skipped.
    pub fn parse(points: &str, sin_equations: &str, cos_equations: &str) -> Result<Self> {
        Ok(Self {
            points: parse_points(points)?,
            sin_equations: parse_equations(Trig::Sin, sin_equations)?,
            cos_equations: parse_equations(Trig::Cos, cos_equations)?,
        })
    }

    /// Sin equations followed by cos equations.
    pub fn equations(&self) -> impl Iterator<Item = &Equation> + '_ {
        self.sin_equations.iter().chain(&self.cos_equations)
    }
}

fn non_blank(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|l| !l.is_empty())
}

pub(crate) fn parse_points(text: &str) -> Result<Vec<Point>> {
    non_blank(text)
        .map(|line| {
            let mut it = line.split_whitespace();
            let (Some(x), Some(y)) = (it.next(), it.next()) else {
                return Err(Error::parse("point", line));
            };
            Ok(Point::new(rational_to_radians(x)?, rational_to_radians(y)?))
        })
        .collect()
}

fn parse_equations(trig: Trig, text: &str) -> Result<Vec<Equation>> {
    non_blank(text)
        .map(|line| Equation::parse_line(trig, line))
        .collect()
}

/// Cover square as the backend's square checker expects it:
/// `numer_x/denom_value, numer_y/denom_value`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CoverDescriptor {
    pub numer_x: i64,
    pub numer_y: i64,
    pub denom_value: i64,
}

/// External service computing exact regions for code pairs.
///
/// Implementations render `pair.sequence` and `pair.angles` with `Display`.
/// A missing answer is `Ok(None)`, not an error.
pub trait Backend: Send + Sync {
    fn load_code_info(&self, pair: &CodePair) -> Result<Option<CodeInfo>>;

    /// Check that `square` lies in the region of `pair`; returns the
    /// backend's certificate text on success.
    fn check_square(
        &self,
        square: CoverDescriptor,
        pair: &CodePair,
        cover_dir: &Path,
    ) -> Result<Option<String>>;
}
