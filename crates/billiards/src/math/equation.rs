//! Trigonometric boundary equations `Σ k·trig(a·x + b·y)`.
//!
//! The backend emits each equation as a flat list of integer triples
//! `(k, a, b)`; evaluation happens in `f64` on radians.

use std::fmt;

use crate::{Error, Result};

/// Which trigonometric function every term of an equation uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Trig {
    Sin,
    Cos,
}

impl Trig {
    #[inline]
    fn apply(self, arg: f64) -> f64 {
        match self {
            Trig::Sin => arg.sin(),
            Trig::Cos => arg.cos(),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Trig::Sin => "sin",
            Trig::Cos => "cos",
        }
    }
}

/// One term `coeff · trig(x_coeff·x + y_coeff·y)`; `coeff != 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TrigTerm {
    pub coeff: i32,
    pub x_coeff: i32,
    pub y_coeff: i32,
}

/// A sum of trig terms sharing one function. The empty sum is `0`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Equation {
    trig: Trig,
    terms: Vec<TrigTerm>,
}

impl Equation {
    /// Rejects zero term coefficients; the backend never emits them.
    pub fn new(trig: Trig, terms: Vec<TrigTerm>) -> Result<Self> {
        if terms.iter().any(|t| t.coeff == 0) {
            return Err(Error::parse("equation term", "zero trig coefficient"));
        }
        Ok(Self { trig, terms })
    }

    /// Build from flat triples `k a b k a b ...`.
    pub fn from_triples(trig: Trig, flat: &[i32]) -> Result<Self> {
        if flat.len() % 3 != 0 {
            return Err(Error::parse(
                "equation triples",
                format!("{} coefficients", flat.len()),
            ));
        }
        let terms = flat
            .chunks_exact(3)
            .map(|t| TrigTerm {
                coeff: t[0],
                x_coeff: t[1],
                y_coeff: t[2],
            })
            .collect();
        Self::new(trig, terms)
    }

    /// Parse one backend line of whitespace-separated integers.
    pub fn parse_line(trig: Trig, line: &str) -> Result<Self> {
        let flat = line
            .split_whitespace()
            .map(|tok| {
                tok.parse::<i32>()
                    .map_err(|_| Error::parse("equation coefficient", tok))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_triples(trig, &flat)
    }

    #[inline]
    pub fn trig(&self) -> Trig {
        self.trig
    }

    #[inline]
    pub fn terms(&self) -> &[TrigTerm] {
        &self.terms
    }

    /// Evaluate at `(x, y)` in radians.
    pub fn evalf(&self, x: f64, y: f64) -> f64 {
        self.terms
            .iter()
            .map(|t| {
                let arg = f64::from(t.x_coeff) * x + f64::from(t.y_coeff) * y;
                f64::from(t.coeff) * self.trig.apply(arg)
            })
            .sum()
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return f.write_str("0");
        }
        for (k, t) in self.terms.iter().enumerate() {
            if t.coeff > 0 && k > 0 {
                f.write_str("+")?;
            }
            match t.coeff {
                1 => {}
                -1 => f.write_str("-")?,
                c => write!(f, "{c}")?,
            }
            write!(f, "{}(", self.trig.name())?;
            write_arg(f, t.x_coeff, t.y_coeff)?;
            f.write_str(")")?;
        }
        Ok(())
    }
}

fn write_arg(f: &mut fmt::Formatter<'_>, x: i32, y: i32) -> fmt::Result {
    if x == 0 && y == 0 {
        return f.write_str("0");
    }
    write_var(f, x, 'x', true)?;
    write_var(f, y, 'y', x == 0)
}

fn write_var(f: &mut fmt::Formatter<'_>, c: i32, var: char, front: bool) -> fmt::Result {
    match c {
        0 => Ok(()),
        1 if front => write!(f, "{var}"),
        1 => write!(f, "+{var}"),
        -1 => write!(f, "-{var}"),
        c if c > 0 && !front => write!(f, "+{c}{var}"),
        c => write!(f, "{c}{var}"),
    }
}
